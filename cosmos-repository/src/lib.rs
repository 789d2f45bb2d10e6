use cosmos_error::StorageResult;
use sea_orm::{
    sea_query::{QueryStatementWriter, Values},
    ConnectionTrait, DatabaseBackend, ExecResult, QueryResult, Statement,
};

pub mod aggregate;
pub mod local;
pub mod planet_child;
pub mod remote;

pub use aggregate::RemoteAggregate;
pub use local::LocalRepository;
pub use planet_child::PlanetChildRepository;
pub use remote::RemoteRepository;

#[inline]
fn build_stmt<S: QueryStatementWriter>(backend: DatabaseBackend, stmt: &S) -> (String, Values) {
    stmt.build_any(backend.get_query_builder().as_ref())
}

/// Run a sea-query statement built for the connection's backend
pub(crate) async fn exec<C, S>(db: &C, stmt: &S) -> StorageResult<ExecResult>
where
    C: ConnectionTrait,
    S: QueryStatementWriter,
{
    let backend = db.get_database_backend();
    let (sql, values) = build_stmt(backend, stmt);
    Ok(db
        .execute(Statement::from_sql_and_values(backend, sql, values))
        .await?)
}

pub(crate) async fn query_all<C, S>(db: &C, stmt: &S) -> StorageResult<Vec<QueryResult>>
where
    C: ConnectionTrait,
    S: QueryStatementWriter,
{
    let backend = db.get_database_backend();
    let (sql, values) = build_stmt(backend, stmt);
    Ok(db
        .query_all(Statement::from_sql_and_values(backend, sql, values))
        .await?)
}

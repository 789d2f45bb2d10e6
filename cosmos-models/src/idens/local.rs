use crate::initializer::SchemaInitializer;
use cosmos_macros::SchemaTable;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden, SchemaTable)]
#[schema(meta(
    order = super::INIT_LOCAL_ORDER,
    create_table = create_local_objects_table,
    create_indexes = create_local_objects_indexes,
))]
pub enum LocalObjects {
    Table,
    Family,
    Id,
    DisplayOrder,
    Payload,
    CreatedAt,
    UpdatedAt,
}

/// One row per entity; the whole aggregate lives in `payload`.
fn create_local_objects_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(LocalObjects::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(LocalObjects::Family)
                .string()
                .not_null()
                .comment("Entity family key"),
        )
        .col(ColumnDef::new(LocalObjects::Id).uuid().not_null())
        .col(
            ColumnDef::new(LocalObjects::DisplayOrder)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(LocalObjects::Payload)
                .json()
                .not_null()
                .comment("Serialized entity aggregate"),
        )
        .col(
            ColumnDef::new(LocalObjects::CreatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(LocalObjects::UpdatedAt)
                .timestamp_with_time_zone()
                .default(Expr::current_timestamp()),
        )
        .primary_key(
            Index::create()
                .col(LocalObjects::Family)
                .col(LocalObjects::Id),
        )
        .to_owned()
}

fn create_local_objects_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name("idx_local_objects_family_order")
        .table(LocalObjects::Table)
        .col(LocalObjects::Family)
        .col(LocalObjects::DisplayOrder)
        .to_owned()])
}

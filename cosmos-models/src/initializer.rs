use crate::idens;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// A table the migrations know how to create and drop.
pub trait SchemaInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

/// Tables of the on-device store
pub fn local_initializers() -> Vec<Box<dyn SchemaInitializer>> {
    let mut initializers: Vec<Box<dyn SchemaInitializer>> =
        vec![Box::new(idens::local::LocalObjects::Table)];
    initializers.sort_by_key(|init| init.order());
    initializers
}

/// Tables of the remote relational store, parents before children
pub fn remote_initializers() -> Vec<Box<dyn SchemaInitializer>> {
    let mut initializers: Vec<Box<dyn SchemaInitializer>> = vec![
        Box::new(idens::catalog::Planets::Table),
        Box::new(idens::catalog::Galaxies::Table),
        Box::new(idens::catalog::Nebulas::Table),
        Box::new(idens::catalog::Stars::Table),
        Box::new(idens::catalog::Blackholes::Table),
        Box::new(idens::catalog::Constellations::Table),
        Box::new(idens::catalog::Planetss::Table),
        Box::new(idens::catalog::Users::Table),
        Box::new(idens::planet_child::PlanetMyths::Table),
        Box::new(idens::planet_child::PlanetLayers::Table),
        Box::new(idens::planet_child::PlanetInfoCards::Table),
        Box::new(idens::planet_child::PlanetMissions::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_tables_in_dependency_order() {
        let names: Vec<String> = remote_initializers()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names.len(), 12);
        assert_eq!(names[0], "planets");
        assert_eq!(names[6], "planetss");
        assert_eq!(
            &names[8..],
            &["PlanetMyths", "PlanetLayers", "PlanetInfoCards", "PlanetMissions"]
        );
    }

    #[test]
    fn test_local_table_has_update_trigger_column() {
        let locals = local_initializers();
        assert_eq!(locals.len(), 1);
        assert_eq!(locals[0].name(), "local_objects");
        assert!(locals[0].has_update_col());
    }
}

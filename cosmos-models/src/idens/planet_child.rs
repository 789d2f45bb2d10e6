use crate::initializer::SchemaInitializer;
use cosmos_macros::SchemaTable;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

/// Columns shared by the four planet child tables
#[derive(DeriveIden, Clone, Copy)]
pub enum PlanetChildColumn {
    Id,
    PlanetId,
    Position,
}

fn child_table(table: impl IntoIden + 'static, columns: Vec<DynIden>) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(PlanetChildColumn::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(PlanetChildColumn::PlanetId)
                .uuid()
                .not_null()
                .comment("Parent planet id"),
        )
        .col(
            ColumnDef::new(PlanetChildColumn::Position)
                .integer()
                .not_null()
                .default(0),
        );

    for column in columns {
        stmt.col(ColumnDef::new(column).text());
    }
    stmt.to_owned()
}

fn planet_id_index(name: &str, table: impl IntoIden + 'static) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(PlanetChildColumn::PlanetId)
        .to_owned()])
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    name = "PlanetMyths",
    order = super::INIT_PLANET_MYTH_ORDER,
    create_table = create_planet_myths_table,
    create_indexes = create_planet_myths_indexes,
))]
pub enum PlanetMyths {
    #[sea_orm(iden = "PlanetMyths")]
    Table,
    Culture,
    GodName,
    Description,
    Image,
}

fn create_planet_myths_table(_: DatabaseBackend) -> TableCreateStatement {
    child_table(
        PlanetMyths::Table,
        vec![
            PlanetMyths::Culture.into_iden(),
            PlanetMyths::GodName.into_iden(),
            PlanetMyths::Description.into_iden(),
            PlanetMyths::Image.into_iden(),
        ],
    )
}

fn create_planet_myths_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    planet_id_index("idx_planet_myths_planet_id", PlanetMyths::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    name = "PlanetLayers",
    order = super::INIT_PLANET_LAYER_ORDER,
    create_table = create_planet_layers_table,
    create_indexes = create_planet_layers_indexes,
))]
pub enum PlanetLayers {
    #[sea_orm(iden = "PlanetLayers")]
    Table,
    Name,
    Description,
    ColorStart,
    ColorEnd,
    Icon,
}

fn create_planet_layers_table(_: DatabaseBackend) -> TableCreateStatement {
    child_table(
        PlanetLayers::Table,
        vec![
            PlanetLayers::Name.into_iden(),
            PlanetLayers::Description.into_iden(),
            PlanetLayers::ColorStart.into_iden(),
            PlanetLayers::ColorEnd.into_iden(),
            PlanetLayers::Icon.into_iden(),
        ],
    )
}

fn create_planet_layers_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    planet_id_index("idx_planet_layers_planet_id", PlanetLayers::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    name = "PlanetInfoCards",
    order = super::INIT_PLANET_INFO_CARD_ORDER,
    create_table = create_planet_info_cards_table,
    create_indexes = create_planet_info_cards_indexes,
))]
pub enum PlanetInfoCards {
    #[sea_orm(iden = "PlanetInfoCards")]
    Table,
    Icon,
    Title,
    Description,
    IconColor,
}

fn create_planet_info_cards_table(_: DatabaseBackend) -> TableCreateStatement {
    child_table(
        PlanetInfoCards::Table,
        vec![
            PlanetInfoCards::Icon.into_iden(),
            PlanetInfoCards::Title.into_iden(),
            PlanetInfoCards::Description.into_iden(),
            PlanetInfoCards::IconColor.into_iden(),
        ],
    )
}

fn create_planet_info_cards_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    planet_id_index("idx_planet_info_cards_planet_id", PlanetInfoCards::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    name = "PlanetMissions",
    order = super::INIT_PLANET_MISSION_ORDER,
    create_table = create_planet_missions_table,
    create_indexes = create_planet_missions_indexes,
))]
pub enum PlanetMissions {
    #[sea_orm(iden = "PlanetMissions")]
    Table,
    Title,
    Description,
    Icon,
    MissionId,
}

fn create_planet_missions_table(_: DatabaseBackend) -> TableCreateStatement {
    child_table(
        PlanetMissions::Table,
        vec![
            PlanetMissions::Title.into_iden(),
            PlanetMissions::Description.into_iden(),
            PlanetMissions::Icon.into_iden(),
            PlanetMissions::MissionId.into_iden(),
        ],
    )
}

fn create_planet_missions_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    planet_id_index("idx_planet_missions_planet_id", PlanetMissions::Table)
}

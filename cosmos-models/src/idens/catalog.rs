use crate::initializer::SchemaInitializer;
use cosmos_macros::SchemaTable;
use sea_orm::{
    sea_query::{DynIden, IntoIden},
    DatabaseBackend, DeriveIden,
};
use sea_orm_migration::prelude::*;

/// Columns shared by every catalog table
#[derive(DeriveIden, Clone, Copy)]
pub enum CatalogColumn {
    Id,
    Name,
    Description,
    Views,
    IsFavorite,
    DisplayOrder,
    Image,
    Gallery,
    RandomFacts,
    About,
    VideoUrls,
    WikiLink,
}

impl CatalogColumn {
    pub const ALL: [CatalogColumn; 12] = [
        CatalogColumn::Id,
        CatalogColumn::Name,
        CatalogColumn::Description,
        CatalogColumn::Views,
        CatalogColumn::IsFavorite,
        CatalogColumn::DisplayOrder,
        CatalogColumn::Image,
        CatalogColumn::Gallery,
        CatalogColumn::RandomFacts,
        CatalogColumn::About,
        CatalogColumn::VideoUrls,
        CatalogColumn::WikiLink,
    ];
}

/// Builds a catalog table: shared columns first, then one text column per attribute.
fn catalog_table(table: impl IntoIden + 'static, attributes: Vec<DynIden>) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(CatalogColumn::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(CatalogColumn::Name)
                .string()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(CatalogColumn::Description).text())
        .col(
            ColumnDef::new(CatalogColumn::Views)
                .integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(CatalogColumn::IsFavorite)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(CatalogColumn::DisplayOrder)
                .integer()
                .not_null()
                .default(0)
                .comment("Sort key, not unique"),
        )
        .col(
            ColumnDef::new(CatalogColumn::Image)
                .text()
                .comment("base64 image"),
        )
        .col(
            ColumnDef::new(CatalogColumn::Gallery)
                .text()
                .comment("array literal of base64 images"),
        )
        .col(
            ColumnDef::new(CatalogColumn::RandomFacts)
                .text()
                .comment("JSON array of strings"),
        )
        .col(ColumnDef::new(CatalogColumn::About).text())
        .col(
            ColumnDef::new(CatalogColumn::VideoUrls)
                .text()
                .comment("JSON array of strings"),
        )
        .col(ColumnDef::new(CatalogColumn::WikiLink).string());

    for attribute in attributes {
        stmt.col(ColumnDef::new(attribute).string());
    }
    stmt.to_owned()
}

fn display_order_index(name: &str, table: impl IntoIden + 'static) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(CatalogColumn::DisplayOrder)
        .to_owned()])
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_PLANET_ORDER,
    create_table = create_planets_table,
    create_indexes = create_planets_indexes,
))]
pub enum Planets {
    Table,
    PlanetType,
    Radius,
    Distance,
    Age,
    Moons,
    Gravity,
    AxialTilt,
    OrbitalPeriod,
    DayLength,
    Temperature,
}

fn create_planets_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Planets::Table,
        vec![
            Planets::PlanetType.into_iden(),
            Planets::Radius.into_iden(),
            Planets::Distance.into_iden(),
            Planets::Age.into_iden(),
            Planets::Moons.into_iden(),
            Planets::Gravity.into_iden(),
            Planets::AxialTilt.into_iden(),
            Planets::OrbitalPeriod.into_iden(),
            Planets::DayLength.into_iden(),
            Planets::Temperature.into_iden(),
        ],
    )
}

fn create_planets_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_planets_display_order", Planets::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_GALAXY_ORDER,
    create_table = create_galaxies_table,
    create_indexes = create_galaxies_indexes,
))]
pub enum Galaxies {
    Table,
    GalaxyType,
    Size,
    Distance,
    Age,
    Mass,
    NumberOfStars,
}

fn create_galaxies_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Galaxies::Table,
        vec![
            Galaxies::GalaxyType.into_iden(),
            Galaxies::Size.into_iden(),
            Galaxies::Distance.into_iden(),
            Galaxies::Age.into_iden(),
            Galaxies::Mass.into_iden(),
            Galaxies::NumberOfStars.into_iden(),
        ],
    )
}

fn create_galaxies_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_galaxies_display_order", Galaxies::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_NEBULA_ORDER,
    create_table = create_nebulas_table,
    create_indexes = create_nebulas_indexes,
))]
pub enum Nebulas {
    Table,
    NebulaType,
    Size,
    Distance,
    Age,
    Constellation,
}

fn create_nebulas_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Nebulas::Table,
        vec![
            Nebulas::NebulaType.into_iden(),
            Nebulas::Size.into_iden(),
            Nebulas::Distance.into_iden(),
            Nebulas::Age.into_iden(),
            Nebulas::Constellation.into_iden(),
        ],
    )
}

fn create_nebulas_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_nebulas_display_order", Nebulas::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_STAR_ORDER,
    create_table = create_stars_table,
    create_indexes = create_stars_indexes,
))]
pub enum Stars {
    Table,
    StarType,
    Radius,
    Mass,
    Distance,
    Age,
    Temperature,
    Luminosity,
}

fn create_stars_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Stars::Table,
        vec![
            Stars::StarType.into_iden(),
            Stars::Radius.into_iden(),
            Stars::Mass.into_iden(),
            Stars::Distance.into_iden(),
            Stars::Age.into_iden(),
            Stars::Temperature.into_iden(),
            Stars::Luminosity.into_iden(),
        ],
    )
}

fn create_stars_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_stars_display_order", Stars::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_BLACKHOLE_ORDER,
    create_table = create_blackholes_table,
    create_indexes = create_blackholes_indexes,
))]
pub enum Blackholes {
    Table,
    BlackholeType,
    Mass,
    Size,
    Distance,
    Age,
    HostGalaxy,
}

fn create_blackholes_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Blackholes::Table,
        vec![
            Blackholes::BlackholeType.into_iden(),
            Blackholes::Mass.into_iden(),
            Blackholes::Size.into_iden(),
            Blackholes::Distance.into_iden(),
            Blackholes::Age.into_iden(),
            Blackholes::HostGalaxy.into_iden(),
        ],
    )
}

fn create_blackholes_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_blackholes_display_order", Blackholes::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_CONSTELLATION_ORDER,
    create_table = create_constellations_table,
    create_indexes = create_constellations_indexes,
))]
pub enum Constellations {
    Table,
    Abbreviation,
    Hemisphere,
    Area,
    BrightestStar,
    NumberOfStars,
}

fn create_constellations_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Constellations::Table,
        vec![
            Constellations::Abbreviation.into_iden(),
            Constellations::Hemisphere.into_iden(),
            Constellations::Area.into_iden(),
            Constellations::BrightestStar.into_iden(),
            Constellations::NumberOfStars.into_iden(),
        ],
    )
}

fn create_constellations_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_constellations_display_order", Constellations::Table)
}

/// Secondary planets catalog. The doubled `s` is the real remote table name.
#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    name = "planetss",
    order = super::INIT_PLANET_CATALOG_ORDER,
    create_table = create_planetss_table,
    create_indexes = create_planetss_indexes,
))]
pub enum Planetss {
    #[sea_orm(iden = "planetss")]
    Table,
    Radius,
    Distance,
    Age,
    Moons,
}

fn create_planetss_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Planetss::Table,
        vec![
            Planetss::Radius.into_iden(),
            Planetss::Distance.into_iden(),
            Planetss::Age.into_iden(),
            Planetss::Moons.into_iden(),
        ],
    )
}

fn create_planetss_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_planetss_display_order", Planetss::Table)
}

#[derive(DeriveIden, SchemaTable, Clone, Copy)]
#[schema(meta(
    order = super::INIT_USER_ORDER,
    create_table = create_users_table,
    create_indexes = create_users_indexes,
))]
pub enum Users {
    Table,
    ZodiacSign,
    BirthDate,
    Email,
}

fn create_users_table(_: DatabaseBackend) -> TableCreateStatement {
    catalog_table(
        Users::Table,
        vec![
            Users::ZodiacSign.into_iden(),
            Users::BirthDate.into_iden(),
            Users::Email.into_iden(),
        ],
    )
}

fn create_users_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    display_order_index("idx_users_display_order", Users::Table)
}

pub use crate::domain::{
    blackhole::Blackhole,
    catalog::CatalogEntry,
    constellation::Constellation,
    galaxy::Galaxy,
    nebula::Nebula,
    planet::{Planet, PlanetInfoCard, PlanetLayer, PlanetMission, PlanetMyth},
    planet_catalog::PlanetCatalogItem,
    star::Star,
    user::User,
};

use super::catalog::{catalog_record, CatalogEntry};
use crate::{
    codec::{decode_blob, encode_blob, serde_blob},
    idens::{
        catalog::Planets,
        planet_child::{PlanetChildColumn, PlanetInfoCards, PlanetLayers, PlanetMissions, PlanetMyths},
    },
    record::{read_text, read_uuid, ChildRecord, EntityFamily},
};
use sea_orm::{
    sea_query::{DynIden, IntoIden, Value},
    QueryResult,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Planet aggregate: catalog fields, physical attributes and four child collections.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Planet {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub planet_type: String,
    pub radius: String,
    pub distance: String,
    pub age: String,
    pub moons: String,
    pub gravity: String,
    pub axial_tilt: String,
    pub orbital_period: String,
    pub day_length: String,
    pub temperature: String,
    pub myths: Vec<PlanetMyth>,
    pub layers: Vec<PlanetLayer>,
    pub info_cards: Vec<PlanetInfoCard>,
    pub missions: Vec<PlanetMission>,
}

impl Planet {
    pub fn new(entry: CatalogEntry) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }

    fn child_ids_mut(&mut self) -> impl Iterator<Item = &mut Uuid> {
        self.myths
            .iter_mut()
            .map(|c| &mut c.id)
            .chain(self.layers.iter_mut().map(|c| &mut c.id))
            .chain(self.info_cards.iter_mut().map(|c| &mut c.id))
            .chain(self.missions.iter_mut().map(|c| &mut c.id))
    }

    /// Whether some child row still carries the nil id
    pub fn has_unassigned_child_ids(&self) -> bool {
        self.myths.iter().any(|c| c.id.is_nil())
            || self.layers.iter().any(|c| c.id.is_nil())
            || self.info_cards.iter().any(|c| c.id.is_nil())
            || self.missions.iter().any(|c| c.id.is_nil())
    }

    /// Give every child row with a nil id a fresh one.
    pub fn assign_child_ids(&mut self) {
        for id in self.child_ids_mut().filter(|id| id.is_nil()) {
            *id = Uuid::new_v4();
        }
    }
}

catalog_record!(Planet, EntityFamily::Planet, Planets {
    planet_type => PlanetType,
    radius => Radius,
    distance => Distance,
    age => Age,
    moons => Moons,
    gravity => Gravity,
    axial_tilt => AxialTilt,
    orbital_period => OrbitalPeriod,
    day_length => DayLength,
    temperature => Temperature,
});

fn child_columns(rest: Vec<DynIden>) -> Vec<DynIden> {
    let mut columns = vec![
        PlanetChildColumn::Id.into_iden(),
        PlanetChildColumn::PlanetId.into_iden(),
        PlanetChildColumn::Position.into_iden(),
    ];
    columns.extend(rest);
    columns
}

fn child_head(id: Uuid, planet_id: Uuid, position: i32) -> Vec<Value> {
    vec![id.into(), planet_id.into(), position.into()]
}

/// `Default` for a child row that still gets its own identifier.
macro_rules! child_default {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl Default for $ty {
            fn default() -> Self {
                Self {
                    id: Uuid::new_v4(),
                    $($field: Default::default(),)*
                }
            }
        }
    };
}

child_default!(PlanetMyth { culture, god_name, description, image });
child_default!(PlanetLayer { name, description, color_start, color_end, icon });
child_default!(PlanetInfoCard { icon, title, description, icon_color });
child_default!(PlanetMission { title, description, icon, mission_id });

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetMyth {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub culture: String,
    pub god_name: String,
    pub description: String,
    #[serde(with = "serde_blob")]
    pub image: Vec<u8>,
}

impl ChildRecord for PlanetMyth {
    fn table() -> DynIden {
        PlanetMyths::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        child_columns(vec![
            PlanetMyths::Culture.into_iden(),
            PlanetMyths::GodName.into_iden(),
            PlanetMyths::Description.into_iden(),
            PlanetMyths::Image.into_iden(),
        ])
    }

    fn encode(&self, planet_id: Uuid, position: i32) -> Vec<Value> {
        let mut values = child_head(self.id, planet_id, position);
        values.push(self.culture.clone().into());
        values.push(self.god_name.clone().into());
        values.push(self.description.clone().into());
        values.push(encode_blob(&self.image).into());
        values
    }

    fn decode(row: &QueryResult) -> Self {
        Self {
            id: read_uuid(row, PlanetChildColumn::Id),
            culture: read_text(row, PlanetMyths::Culture),
            god_name: read_text(row, PlanetMyths::GodName),
            description: read_text(row, PlanetMyths::Description),
            image: decode_blob(&read_text(row, PlanetMyths::Image)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetLayer {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Gradient start color, hex string
    pub color_start: String,
    /// Gradient end color, hex string
    pub color_end: String,
    pub icon: String,
}

impl ChildRecord for PlanetLayer {
    fn table() -> DynIden {
        PlanetLayers::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        child_columns(vec![
            PlanetLayers::Name.into_iden(),
            PlanetLayers::Description.into_iden(),
            PlanetLayers::ColorStart.into_iden(),
            PlanetLayers::ColorEnd.into_iden(),
            PlanetLayers::Icon.into_iden(),
        ])
    }

    fn encode(&self, planet_id: Uuid, position: i32) -> Vec<Value> {
        let mut values = child_head(self.id, planet_id, position);
        values.push(self.name.clone().into());
        values.push(self.description.clone().into());
        values.push(self.color_start.clone().into());
        values.push(self.color_end.clone().into());
        values.push(self.icon.clone().into());
        values
    }

    fn decode(row: &QueryResult) -> Self {
        Self {
            id: read_uuid(row, PlanetChildColumn::Id),
            name: read_text(row, PlanetLayers::Name),
            description: read_text(row, PlanetLayers::Description),
            color_start: read_text(row, PlanetLayers::ColorStart),
            color_end: read_text(row, PlanetLayers::ColorEnd),
            icon: read_text(row, PlanetLayers::Icon),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetInfoCard {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub icon_color: String,
}

impl ChildRecord for PlanetInfoCard {
    fn table() -> DynIden {
        PlanetInfoCards::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        child_columns(vec![
            PlanetInfoCards::Icon.into_iden(),
            PlanetInfoCards::Title.into_iden(),
            PlanetInfoCards::Description.into_iden(),
            PlanetInfoCards::IconColor.into_iden(),
        ])
    }

    fn encode(&self, planet_id: Uuid, position: i32) -> Vec<Value> {
        let mut values = child_head(self.id, planet_id, position);
        values.push(self.icon.clone().into());
        values.push(self.title.clone().into());
        values.push(self.description.clone().into());
        values.push(self.icon_color.clone().into());
        values
    }

    fn decode(row: &QueryResult) -> Self {
        Self {
            id: read_uuid(row, PlanetChildColumn::Id),
            icon: read_text(row, PlanetInfoCards::Icon),
            title: read_text(row, PlanetInfoCards::Title),
            description: read_text(row, PlanetInfoCards::Description),
            icon_color: read_text(row, PlanetInfoCards::IconColor),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetMission {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Identifier of the mission in the external mission catalog
    pub mission_id: String,
}

impl ChildRecord for PlanetMission {
    fn table() -> DynIden {
        PlanetMissions::Table.into_iden()
    }

    fn columns() -> Vec<DynIden> {
        child_columns(vec![
            PlanetMissions::Title.into_iden(),
            PlanetMissions::Description.into_iden(),
            PlanetMissions::Icon.into_iden(),
            PlanetMissions::MissionId.into_iden(),
        ])
    }

    fn encode(&self, planet_id: Uuid, position: i32) -> Vec<Value> {
        let mut values = child_head(self.id, planet_id, position);
        values.push(self.title.clone().into());
        values.push(self.description.clone().into());
        values.push(self.icon.clone().into());
        values.push(self.mission_id.clone().into());
        values
    }

    fn decode(row: &QueryResult) -> Self {
        Self {
            id: read_uuid(row, PlanetChildColumn::Id),
            title: read_text(row, PlanetMissions::Title),
            description: read_text(row, PlanetMissions::Description),
            icon: read_text(row, PlanetMissions::Icon),
            mission_id: read_text(row, PlanetMissions::MissionId),
        }
    }
}

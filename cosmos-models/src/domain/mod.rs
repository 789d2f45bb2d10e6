mod blackhole;
pub(crate) mod catalog;
mod constellation;
mod galaxy;
mod nebula;
mod planet;
mod planet_catalog;
pub mod prelude;
mod star;
mod user;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use crate::record::{ChildRecord, RemoteRecord, SyncEntity};

    fn assert_shape<T: SyncEntity + Default>() {
        let entity = T::default();
        assert_eq!(
            T::columns().len(),
            entity.encode().len(),
            "column/value mismatch for {}",
            T::FAMILY
        );
    }

    #[test]
    fn test_every_family_encodes_one_value_per_column() {
        assert_shape::<Planet>();
        assert_shape::<Galaxy>();
        assert_shape::<Nebula>();
        assert_shape::<Star>();
        assert_shape::<Blackhole>();
        assert_shape::<Constellation>();
        assert_shape::<PlanetCatalogItem>();
        assert_shape::<User>();

        let id = uuid::Uuid::new_v4();
        assert_eq!(PlanetMyth::columns().len(), PlanetMyth::default().encode(id, 0).len());
        assert_eq!(PlanetLayer::columns().len(), PlanetLayer::default().encode(id, 0).len());
        assert_eq!(
            PlanetInfoCard::columns().len(),
            PlanetInfoCard::default().encode(id, 0).len()
        );
        assert_eq!(
            PlanetMission::columns().len(),
            PlanetMission::default().encode(id, 0).len()
        );
    }

    #[test]
    fn test_payload_json_round_trip() {
        let mut planet = Planet::new(CatalogEntry::new("Mars", "The red planet", 4));
        planet.entry.image = vec![1, 2, 3];
        planet.entry.gallery = vec![vec![9], vec![]];
        planet.entry.random_facts = vec!["Olympus Mons, the tallest volcano".into()];
        planet.moons = "2".into();
        planet.myths.push(PlanetMyth {
            culture: "Roman".into(),
            god_name: "Mars".into(),
            ..Default::default()
        });

        let json = serde_json::to_value(&planet).unwrap();
        assert_eq!(json["name"], "Mars");
        assert_eq!(json["image"], "AQID");
        assert_eq!(json["displayOrder"], 4);

        let back: Planet = serde_json::from_value(json).unwrap();
        assert_eq!(back, planet);
    }

    #[test]
    fn test_import_json_fills_missing_fields() {
        let star: Star = serde_json::from_str(r#"{"name": "Vega", "starType": "A0V"}"#).unwrap();
        assert_eq!(star.entry.name, "Vega");
        assert_eq!(star.star_type, "A0V");
        assert!(!star.entry.id.is_nil());
        assert!(star.entry.gallery.is_empty());
    }

    #[test]
    fn test_children_get_distinct_ids() {
        let a = PlanetMyth::default();
        let b = PlanetMyth::default();
        assert!(!a.id.is_nil());
        assert_ne!(a.id, b.id);

        let mut planet = Planet::default();
        planet.myths = vec![a.clone(), PlanetMyth { id: uuid::Uuid::nil(), ..a.clone() }];
        planet.missions = vec![PlanetMission { id: uuid::Uuid::nil(), ..Default::default() }];
        assert!(planet.has_unassigned_child_ids());

        planet.assign_child_ids();
        assert!(!planet.has_unassigned_child_ids());
        // assigned ids are kept
        assert_eq!(planet.myths[0].id, a.id);
        assert_ne!(planet.myths[1].id, a.id);
    }
}

pub mod catalog;
pub mod local;
pub mod planet_child;

const INIT_LOCAL_ORDER: i32 = 0;

const INIT_CATALOG_ORDER: i32 = 100;
const INIT_PLANET_ORDER: i32 = INIT_CATALOG_ORDER + 1;
const INIT_GALAXY_ORDER: i32 = INIT_PLANET_ORDER + 1;
const INIT_NEBULA_ORDER: i32 = INIT_GALAXY_ORDER + 1;
const INIT_STAR_ORDER: i32 = INIT_NEBULA_ORDER + 1;
const INIT_BLACKHOLE_ORDER: i32 = INIT_STAR_ORDER + 1;
const INIT_CONSTELLATION_ORDER: i32 = INIT_BLACKHOLE_ORDER + 1;
const INIT_PLANET_CATALOG_ORDER: i32 = INIT_CONSTELLATION_ORDER + 1;
const INIT_USER_ORDER: i32 = INIT_PLANET_CATALOG_ORDER + 1;

// child tables come after their parent
const INIT_PLANET_CHILD_ORDER: i32 = 200;
const INIT_PLANET_MYTH_ORDER: i32 = INIT_PLANET_CHILD_ORDER + 1;
const INIT_PLANET_LAYER_ORDER: i32 = INIT_PLANET_MYTH_ORDER + 1;
const INIT_PLANET_INFO_CARD_ORDER: i32 = INIT_PLANET_LAYER_ORDER + 1;
const INIT_PLANET_MISSION_ORDER: i32 = INIT_PLANET_INFO_CARD_ORDER + 1;

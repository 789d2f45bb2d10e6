pub mod local_object;

pub mod prelude {
    pub use super::local_object::{
        ActiveModel as LocalObjectActiveModel, Column as LocalObjectColumn,
        Entity as LocalObject, Model as LocalObjectModel,
    };
}

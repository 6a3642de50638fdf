//! Loading and validation of card catalogs, decks and match configs.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;

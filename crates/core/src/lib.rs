//! Lane combat engine. Keep this crate free of IO and platform concerns.

pub mod action;
pub mod cards;
pub mod config;
pub mod engine;
pub mod events;
pub mod rng;
pub mod state;

pub use action::*;
pub use cards::*;
pub use config::*;
pub use engine::*;
pub use events::*;
pub use rng::*;
pub use state::*;

//! Seeded bot play over the core engine API: a greedy opponent heuristic and
//! a driver that runs two controllers to the end of a match.

mod config;
mod driver;
mod error;
mod heuristic;
mod objective;
mod trace;

pub use config::*;
pub use driver::*;
pub use error::*;
pub use heuristic::*;
pub use objective::*;
pub use trace::*;

//! Run modifiers: state transformations the caller applies between engine
//! operations. The engine never calls into this crate.

pub mod apply;
pub mod buffs;

pub use apply::*;
pub use buffs::*;

//! Component definitions for the character simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems and in the
//! character-level operations.

mod character;
mod common;

pub use character::*;
pub use common::*;

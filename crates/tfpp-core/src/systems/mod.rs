//! Systems - logic that operates on components each tick

mod kinematics;
mod view;

pub use kinematics::*;
pub use view::*;

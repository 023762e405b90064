//! TFPP Core - Character Simulation Engine
//!
//! An ECS-based host for the true first-person locomotion model: character
//! entities carry a kinematic body, a crouch posture, a cached view
//! rotation, and the pace/stance locomotion component from `tfpp-logic`.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: Characters
//! - **Components**: Pure data attached to entities (Body, PostureState,
//!   ViewState) plus the locomotion state machine
//! - **Systems**: Logic that queries and updates components each tick
//!
//! # Example
//!
//! ```rust,no_run
//! use tfpp_core::prelude::*;
//! use tfpp_logic::locomotion::LocomotionConfig;
//! use tfpp_logic::view::ViewLimits;
//!
//! let mut engine = CharacterEngine::new(LogSettings::default());
//! let _player = engine.spawn_character(LocomotionConfig::default(), ViewLimits::default());
//! engine.activate();
//!
//! // Run simulation
//! loop {
//!     engine.update(1.0 / 60.0); // 60 FPS
//! }
//! ```

pub mod character;
pub mod components;
pub mod diagnostics;
pub mod engine;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::diagnostics::LogSettings;
    pub use crate::engine::CharacterEngine;
}

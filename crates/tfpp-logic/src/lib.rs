//! Pure locomotion logic for the TFPP (true first-person perspective)
//! character system.
//!
//! This crate contains all movement-model logic that is independent of any
//! engine, ECS, or runtime. Functions take plain data and return results,
//! making them unit-testable and portable across the simulation engine,
//! native tools, and any future host.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angles`] | Degree wrapping, clamping, facing-vs-velocity angles |
//! | [`config`] | Named-tier preset schema and load-time validation |
//! | [`direction`] | Discrete movement-direction classification |
//! | [`locomotion`] | Pace/stance state machine with angle-gated admission |
//! | [`pace`] | Pace and stance tier identifiers |
//! | [`view`] | Decoupled view-rotation math (pitch clamp, yaw wrap) |

pub mod angles;
pub mod config;
pub mod direction;
pub mod locomotion;
pub mod pace;
pub mod view;

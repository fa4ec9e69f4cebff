//! Base types for the reveal library.
//!
//! This crate contains the platform independent part of [`reveal`]: the configuration record, the
//! [`PresentationTarget`] abstraction and the [`VisibilityToggler`] state machine. It is intended
//! to allow alternative backends, or headless hosts driving the toggler with simulated reports,
//! without pulling in the Web bindings.
//!
//! [`reveal`]: https://docs.rs/reveal
//! [`PresentationTarget`]: target::PresentationTarget
//! [`VisibilityToggler`]: toggler::VisibilityToggler

pub mod options;
pub mod target;
pub mod toggler;

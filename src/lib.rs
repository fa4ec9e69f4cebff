//! reveal toggles a presentation class on an element while it is scrolled into view.
//!
//! The building block is the [`VisibilityToggler`]: attached to a single target, it is fed the
//! intersection reports the platform delivers for that target and reflects them as a boolean
//! flag, the `visible` class on the Web. How the flag reacts to the target leaving the viewport
//! is chosen through [`Options::reset`]:
//!
//! - [`ResetPolicy::Continuous`] clears the flag again, so the transition replays on every
//!   scroll.
//! - [`ResetPolicy::OneShotLatch`] keeps it set once shown.
//!
//! # Web
//!
//! On `wasm32-unknown-unknown` the [`web`] module binds the toggler to an
//! `IntersectionObserver`:
//!
//! ```no_run
//! # #[cfg(web_platform)]
//! # fn attach(element: &web_sys::Element) -> Result<(), reveal::web::ObserveError> {
//! use reveal::Options;
//!
//! let mut handle = reveal::web::fade_in(element, Options::default())?;
//! // When the element is unmounted:
//! handle.destroy();
//! # Ok(())
//! # }
//! ```
//!
//! # Headless
//!
//! Everything else is platform independent. A host without a browser can drive a toggler with
//! simulated reports:
//!
//! ```
//! use std::cell::Cell;
//!
//! use reveal::{IntersectionEntry, Options, VisibilityToggler};
//!
//! let toggler = VisibilityToggler::new(Cell::new(false), Options::default());
//! toggler.notify(IntersectionEntry::new(true));
//! assert!(toggler.is_visible());
//!
//! toggler.destroy();
//! toggler.notify(IntersectionEntry::new(false));
//! assert!(toggler.is_visible());
//! ```
//!
//! # Cargo features
//!
//! * `serde`: Enables serialization/deserialization of the configuration types. A partially
//!   specified record deserializes with the missing options set to their defaults.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use reveal_core::{options, target, toggler};

pub use crate::options::{Options, ResetPolicy};
pub use crate::target::PresentationTarget;
pub use crate::toggler::{IntersectionEntry, State, Transition, VisibilityToggler};

#[cfg(web_platform)]
pub mod web {
    //! Web backend, see [`reveal_web`].
    pub use reveal_web::*;
}

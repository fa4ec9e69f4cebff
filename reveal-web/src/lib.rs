//! # Web
//!
//! reveal runs in Browsers by compiling to WebAssembly with [`wasm-bindgen`][wasm_bindgen].
//!
//! A [`FadeIn`] registers an element with an [`IntersectionObserver`][observer] and toggles the
//! `visible` class on it while it intersects the viewport, or an ancestor scroll container given
//! through [`FadeInAttributes::with_root()`]. The class is meant to be picked up by a style rule
//! driving a transition, e.g.:
//!
//! ```css
//! .fade { opacity: 0; transition: opacity 0.6s ease-out; }
//! .fade.visible { opacity: 1; }
//! ```
//!
//! ```no_run
//! # fn attach(element: &web_sys::Element) -> Result<(), reveal_web::ObserveError> {
//! use reveal_core::options::Options;
//!
//! let mut handle = reveal_web::fade_in(element, Options::default().with_reset(false))?;
//! // Once the element is unmounted:
//! handle.destroy();
//! # Ok(())
//! # }
//! ```
//!
//! [observer]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
//! [wasm_bindgen]: https://docs.rs/wasm-bindgen

// The `web_sys` module holds the thin wrappers around the browser APIs: the observer registration
// and the class list marker. `fade_in` ties them to the platform independent toggler of
// `reveal-core`, which owns all the decisions about the flag.

macro_rules! observe_error {
    ($error:expr) => {{ crate::error::ObserveError::new(line!(), file!(), $error) }};
}

mod error;
mod fade_in;
pub(crate) mod web_sys;

use self::web_sys as backend;

pub use self::error::ObserveError;
pub use self::fade_in::{fade_in, FadeIn, FadeInAttributes, VISIBLE_CLASS};

use std::fmt;
use std::rc::Rc;

use reveal_core::options::Options;
use reveal_core::toggler::{State, VisibilityToggler};
use web_sys::Element;

use crate::backend::{ClassMarker, IntersectionObserverHandle, ObserverInit};
use crate::error::ObserveError;

/// Class toggled on the target unless [`FadeInAttributes::with_class_name()`] says otherwise.
pub const VISIBLE_CLASS: &str = "visible";

/// Attributes used when attaching a [`FadeIn`].
#[derive(Clone, Debug)]
pub struct FadeInAttributes {
    pub(crate) options: Options,
    pub(crate) root: Option<Element>,
    pub(crate) root_margin: Option<String>,
    pub(crate) class_name: String,
}

impl Default for FadeInAttributes {
    fn default() -> Self {
        Self {
            options: Options::default(),
            root: None,
            root_margin: None,
            class_name: VISIBLE_CLASS.to_owned(),
        }
    }
}

impl FadeInAttributes {
    /// Threshold and reset policy.
    ///
    /// [`Options::default()`] by default.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Ancestor scroll container the target is checked against. If [`None`], the viewport is used.
    ///
    /// [`None`] by default.
    pub fn with_root(mut self, root: Option<Element>) -> Self {
        self.root = root;
        self
    }

    /// CSS margin applied around the root before computing intersections, e.g. `"0px 0px -10%"`.
    ///
    /// [`None`] by default, leaving the browser default of `"0px"`.
    pub fn with_root_margin(mut self, root_margin: Option<String>) -> Self {
        self.root_margin = root_margin;
        self
    }

    /// Class toggled on the target.
    ///
    /// [`VISIBLE_CLASS`] by default.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// Attaches a [`FadeIn`] to `element` with the default attributes and the given `options`.
///
/// The element is registered with a new `IntersectionObserver` before this returns.
pub fn fade_in(element: &Element, options: Options) -> Result<FadeIn, ObserveError> {
    FadeIn::new(element, FadeInAttributes::default().with_options(options))
}

/// Handle to an element observed for visibility.
///
/// Observation stops on [`FadeIn::destroy()`] or when the handle is dropped, whichever comes
/// first.
pub struct FadeIn {
    toggler: Rc<VisibilityToggler<ClassMarker>>,
    observer: Option<IntersectionObserverHandle>,
}

impl FadeIn {
    pub fn new(element: &Element, attributes: FadeInAttributes) -> Result<Self, ObserveError> {
        let FadeInAttributes { options, root, root_margin, class_name } = attributes;
        let toggler =
            Rc::new(VisibilityToggler::new(ClassMarker::new(element.clone(), class_name), options));

        let init = ObserverInit {
            threshold: options.threshold,
            root: root.as_ref(),
            root_margin: root_margin.as_deref(),
        };
        let observer = IntersectionObserverHandle::new(element, init, {
            let toggler = Rc::clone(&toggler);
            move |entry| {
                toggler.notify(entry);
            }
        })
        .map_err(|err| observe_error!(err))?;

        Ok(Self { toggler, observer: Some(observer) })
    }

    /// Stops observing the element. The class is left as it currently is.
    ///
    /// Calling this more than once does nothing.
    pub fn destroy(&mut self) {
        if !self.toggler.destroy() {
            tracing::trace!("`FadeIn` already destroyed");
        }
        // Disconnects the observer.
        self.observer = None;
    }

    pub fn state(&self) -> State {
        self.toggler.state()
    }

    pub fn options(&self) -> &Options {
        self.toggler.options()
    }

    /// Whether the target currently carries the class.
    pub fn is_visible(&self) -> bool {
        self.toggler.is_visible()
    }
}

impl fmt::Debug for FadeIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FadeIn")
            .field("toggler", &self.toggler)
            .field("observing", &self.observer.is_some())
            .finish()
    }
}

impl Drop for FadeIn {
    fn drop(&mut self) {
        if self.observer.is_some() {
            self.destroy();
        }
    }
}

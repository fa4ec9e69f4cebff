use js_sys::Array;
use reveal_core::toggler::IntersectionEntry;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Settings handed to `new IntersectionObserver()`.
pub(crate) struct ObserverInit<'a> {
    pub threshold: f64,
    pub root: Option<&'a Element>,
    pub root_margin: Option<&'a str>,
}

pub(crate) struct IntersectionObserverHandle {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array)>,
}

impl IntersectionObserverHandle {
    /// Starts observing `element` right away. Every entry of a delivered batch is passed to
    /// `callback` separately, in delivery order.
    pub fn new<F>(element: &Element, init: ObserverInit<'_>, mut callback: F) -> Result<Self, JsValue>
    where
        F: 'static + FnMut(IntersectionEntry),
    {
        let threshold = init.threshold;
        let closure = Closure::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let intersection_ratio = entry.intersection_ratio();
                // Browsers disagree on whether `isIntersecting` honours the threshold.
                callback(IntersectionEntry {
                    is_intersecting: entry.is_intersecting() && intersection_ratio >= threshold,
                    intersection_ratio,
                });
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(init.threshold));
        if let Some(root) = init.root {
            options.set_root(Some(root.unchecked_ref()));
        }
        if let Some(root_margin) = init.root_margin {
            options.set_root_margin(root_margin);
        }

        // Throws on a threshold outside of `[0, 1]` or a malformed root margin.
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self { observer, _closure: closure })
    }
}

impl Drop for IntersectionObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect()
    }
}

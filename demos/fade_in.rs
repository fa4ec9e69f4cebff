//! A column of boxes fading in as they are scrolled into view.
//!
//! Run in a browser with `cargo run-wasm --example fade_in`; the style rules live in the
//! `run-wasm` runner. Natively the same toggler is driven with a scripted sequence of reports.

#[path = "util/tracing.rs"]
mod tracing;

#[cfg(web_platform)]
mod web {
    use std::cell::RefCell;

    use reveal::web::{fade_in, FadeIn};
    use reveal::Options;
    use wasm_bindgen::JsValue;

    const BOXES: usize = 24;

    thread_local! {
        // Handles live as long as the page.
        static HANDLES: RefCell<Vec<FadeIn>> = const { RefCell::new(Vec::new()) };
    }

    pub fn run() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        for index in 0..BOXES {
            let element = document.create_element("div")?;
            element.set_class_name("fade");
            element.set_text_content(Some(&format!("box #{index}")));
            element.set_attribute("style", "height: 40vh; margin: 2rem; background: #ddd;")?;
            body.append_child(&element)?;

            // Every other box only fades in once.
            let options = Options::default().with_reset(index % 2 == 0);
            let handle = fade_in(&element, options).map_err(|err| err.js_value().clone())?;
            HANDLES.with_borrow_mut(|handles| handles.push(handle));
        }

        ::tracing::info!("attached {BOXES} boxes");
        Ok(())
    }
}

#[cfg(web_platform)]
fn main() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    tracing::init();

    web::run()
}

#[cfg(not(web_platform))]
fn main() {
    use std::cell::Cell;

    use reveal::{IntersectionEntry, Options, VisibilityToggler};

    tracing::init();

    let scroll = [0.0, 0.2, 0.45, 0.9, 0.25, 0.0, 0.6];
    for reset in [true, false] {
        let toggler =
            VisibilityToggler::new(Cell::new(false), Options::default().with_reset(reset));
        let threshold = toggler.options().threshold;

        for ratio in scroll {
            let entry =
                IntersectionEntry { is_intersecting: ratio >= threshold, intersection_ratio: ratio };
            let transition = toggler.notify(entry);
            ::tracing::info!(reset, ratio, ?transition, visible = toggler.is_visible());
        }
        toggler.destroy();
    }
}

#![cfg(target_family = "wasm")]

use reveal_core::options::{Options, ResetPolicy};
use reveal_core::toggler::State;
use reveal_web::{fade_in, FadeIn, FadeInAttributes, VISIBLE_CLASS};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

const IN_VIEW: &str = "width: 100px; height: 100px;";
const OUT_OF_VIEW: &str = "position: absolute; top: -10000px; width: 100px; height: 100px;";

fn mount() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_attribute("style", IN_VIEW).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

// Gives the browser time to run layout and deliver pending intersection reports.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 100)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn attach_with_defaults() {
    let element = mount();
    let handle = fade_in(&element, Options::default()).unwrap();

    assert_eq!(handle.state(), State::Active);
    assert_eq!(handle.options().threshold, 0.3);
    assert_eq!(handle.options().reset, ResetPolicy::Continuous);
    // Reports are delivered asynchronously.
    assert!(!has_class(&element, VISIBLE_CLASS));

    element.remove();
}

#[wasm_bindgen_test]
async fn continuous_toggles_class() {
    let element = mount();
    let handle = fade_in(&element, Options::default()).unwrap();

    settle().await;
    assert!(has_class(&element, VISIBLE_CLASS));
    assert!(handle.is_visible());

    element.set_attribute("style", OUT_OF_VIEW).unwrap();
    settle().await;
    assert!(!has_class(&element, VISIBLE_CLASS));

    drop(handle);
    element.remove();
}

#[wasm_bindgen_test]
async fn one_shot_latch_keeps_class() {
    let element = mount();
    let mut handle =
        fade_in(&element, Options::default().with_threshold(0.5).with_reset(false)).unwrap();

    settle().await;
    assert!(has_class(&element, VISIBLE_CLASS));

    element.set_attribute("style", OUT_OF_VIEW).unwrap();
    settle().await;
    assert!(has_class(&element, VISIBLE_CLASS));

    handle.destroy();
    assert_eq!(handle.state(), State::Destroyed);
    element.set_attribute("style", IN_VIEW).unwrap();
    settle().await;
    assert!(has_class(&element, VISIBLE_CLASS));

    element.remove();
}

#[wasm_bindgen_test]
async fn destroy_stops_observation() {
    let element = mount();
    let mut handle = fade_in(&element, Options::default()).unwrap();
    settle().await;
    assert!(has_class(&element, VISIBLE_CLASS));

    handle.destroy();
    handle.destroy();
    element.set_attribute("style", OUT_OF_VIEW).unwrap();
    settle().await;
    assert!(has_class(&element, VISIBLE_CLASS));

    element.remove();
}

#[wasm_bindgen_test]
async fn custom_class_name() {
    let element = mount();
    let _handle =
        FadeIn::new(&element, FadeInAttributes::default().with_class_name("shown")).unwrap();

    settle().await;
    assert!(has_class(&element, "shown"));
    assert!(!has_class(&element, VISIBLE_CLASS));

    element.remove();
}

#[wasm_bindgen_test]
fn invalid_threshold_is_reported() {
    let element = mount();
    let err = fade_in(&element, Options::default().with_threshold(2.0)).unwrap_err();

    assert!(err.to_string().starts_with("observe error at "));
    assert_ne!(err.js_value(), &JsValue::UNDEFINED);

    element.remove();
}

const CONTAINER: &str = "width: 100px; height: 100px; overflow-x: hidden; overflow-y: scroll;";

/// Mounts a scroll container holding `offset` pixels of spacing, a `height` pixels tall target
/// and enough filler below it to scroll the target out of view. Returns the container and the
/// target.
fn mount_in_container(offset: u32, height: u32) -> (Element, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_attribute("style", CONTAINER).unwrap();

    let spacer = document.create_element("div").unwrap();
    spacer.set_attribute("style", &format!("height: {offset}px;")).unwrap();
    let target = document.create_element("div").unwrap();
    target.set_attribute("style", &format!("height: {height}px;")).unwrap();
    let filler = document.create_element("div").unwrap();
    filler.set_attribute("style", "height: 1000px;").unwrap();

    container.append_child(&spacer).unwrap();
    container.append_child(&target).unwrap();
    container.append_child(&filler).unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    (container, target)
}

#[wasm_bindgen_test]
async fn scroll_container_as_root() {
    let (container, target) = mount_in_container(0, 50);
    let attributes = FadeInAttributes::default().with_root(Some(container.clone()));
    let _handle = FadeIn::new(&target, attributes).unwrap();

    settle().await;
    assert!(has_class(&target, VISIBLE_CLASS));

    container.set_scroll_top(600);
    settle().await;
    assert!(!has_class(&target, VISIBLE_CLASS));

    container.set_scroll_top(0);
    settle().await;
    assert!(has_class(&target, VISIBLE_CLASS));

    container.remove();
}

#[wasm_bindgen_test]
async fn threshold_applies_to_partly_visible_target() {
    // 40 of the 100 target pixels are inside the container.
    let (low_container, low_target) = mount_in_container(60, 100);
    let (high_container, high_target) = mount_in_container(60, 100);

    let low = FadeIn::new(
        &low_target,
        FadeInAttributes::default()
            .with_options(Options::default().with_threshold(0.3))
            .with_root(Some(low_container.clone())),
    )
    .unwrap();
    let high = FadeIn::new(
        &high_target,
        FadeInAttributes::default()
            .with_options(Options::default().with_threshold(0.5))
            .with_root(Some(high_container.clone())),
    )
    .unwrap();

    settle().await;
    assert!(has_class(&low_target, VISIBLE_CLASS));
    assert!(!has_class(&high_target, VISIBLE_CLASS));

    // Fully scrolled into view, both pass their threshold.
    high_container.set_scroll_top(60);
    settle().await;
    assert!(has_class(&high_target, VISIBLE_CLASS));

    drop((low, high));
    low_container.remove();
    high_container.remove();
}

#[wasm_bindgen_test]
async fn root_margin_shrinks_root() {
    // The target sits 60 pixels down, in the lower half of the container.
    let (plain_container, plain_target) = mount_in_container(60, 50);
    let (shrunk_container, shrunk_target) = mount_in_container(60, 50);

    let _plain = FadeIn::new(
        &plain_target,
        FadeInAttributes::default().with_root(Some(plain_container.clone())),
    )
    .unwrap();
    let _shrunk = FadeIn::new(
        &shrunk_target,
        FadeInAttributes::default()
            .with_root(Some(shrunk_container.clone()))
            .with_root_margin(Some("0px 0px -50% 0px".into())),
    )
    .unwrap();

    settle().await;
    assert!(has_class(&plain_target, VISIBLE_CLASS));
    assert!(!has_class(&shrunk_target, VISIBLE_CLASS));

    // Scrolling the target into the upper half brings it inside the shrunk root.
    shrunk_container.set_scroll_top(60);
    settle().await;
    assert!(has_class(&shrunk_target, VISIBLE_CLASS));

    plain_container.remove();
    shrunk_container.remove();
}

use reveal_core::target::PresentationTarget;
use web_sys::Element;

/// Exposes the presence of a class on an element as a presentation flag.
#[derive(Debug)]
pub(crate) struct ClassMarker {
    element: Element,
    class_name: String,
}

impl ClassMarker {
    pub fn new(element: Element, class_name: String) -> Self {
        Self { element, class_name }
    }
}

impl PresentationTarget for ClassMarker {
    fn set_visible(&self, visible: bool) {
        let class_list = self.element.class_list();
        let result = if visible {
            class_list.add_1(&self.class_name)
        } else {
            class_list.remove_1(&self.class_name)
        };

        if let Err(err) = result {
            tracing::error!("failed to update class `{}`: {err:?}", self.class_name);
        }
    }

    fn is_visible(&self) -> bool {
        self.element.class_list().contains(&self.class_name)
    }
}

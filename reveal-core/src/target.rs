//! The element side of a toggler.

use std::cell::Cell;
use std::rc::Rc;

/// Something that carries a boolean presentation flag.
///
/// On the Web this is an element whose class list contains (or not) the `visible` class. The
/// styling layer reads the flag; the toggler is its only writer once attached.
pub trait PresentationTarget {
    /// Sets or clears the flag. Setting an already set flag is not an error.
    fn set_visible(&self, visible: bool);

    /// Reads the flag back.
    fn is_visible(&self) -> bool;
}

/// An in-memory flag, used by headless hosts and tests.
impl PresentationTarget for Cell<bool> {
    fn set_visible(&self, visible: bool) {
        self.set(visible)
    }

    fn is_visible(&self) -> bool {
        self.get()
    }
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for &T {
    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

impl<T: PresentationTarget + ?Sized> PresentationTarget for Rc<T> {
    fn set_visible(&self, visible: bool) {
        (**self).set_visible(visible)
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }
}

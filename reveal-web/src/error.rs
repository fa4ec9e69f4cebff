use std::{error, fmt};

use wasm_bindgen::{JsCast, JsValue};

/// The platform refused to observe an element.
///
/// Carries the exception thrown by the browser, e.g. a `RangeError` for a threshold outside of
/// `[0, 1]`, along with the location it was caught at.
#[derive(Clone)]
pub struct ObserveError {
    line: u32,
    file: &'static str,
    error: JsValue,
}

impl ObserveError {
    #[doc(hidden)]
    pub fn new(line: u32, file: &'static str, error: JsValue) -> Self {
        Self { line, file, error }
    }

    /// The raw exception.
    pub fn js_value(&self) -> &JsValue {
        &self.error
    }

    fn message(&self) -> String {
        if let Some(error) = self.error.dyn_ref::<js_sys::Error>() {
            String::from(error.to_string())
        } else if let Some(message) = self.error.as_string() {
            message
        } else {
            format!("{:?}", self.error)
        }
    }
}

impl fmt::Debug for ObserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserveError")
            .field("line", &self.line)
            .field("file", &self.file)
            .field("error", &self.message())
            .finish()
    }
}

impl fmt::Display for ObserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("observe error at {}:{}: {}", self.file, self.line, self.message()))
    }
}

impl error::Error for ObserveError {}

//! Panic guard around page rendering

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

/// Catches panics raised while rendering the page tree so a broken page
/// cannot take down the whole application.
///
/// Once a panic is captured the boundary stops running its closure; the
/// caller shows a fallback screen until [`ErrorBoundary::reset`] clears it.
#[derive(Default)]
pub struct ErrorBoundary {
    caught: Option<String>,
}

impl ErrorBoundary {
    /// Run a render closure, capturing any panic it raises.
    ///
    /// Returns `true` when the closure ran to completion.
    pub fn run(&mut self, render: impl FnOnce()) -> bool {
        if self.caught.is_some() {
            return false;
        }

        match catch_unwind(AssertUnwindSafe(render)) {
            Ok(()) => true,
            Err(payload) => {
                let message = panic_message(payload);
                error!("Page render panicked: {message}");
                self.caught = Some(message);
                false
            }
        }
    }

    /// The captured panic message, if any
    pub fn caught(&self) -> Option<&str> {
        self.caught.as_deref()
    }

    /// Clear the captured panic so rendering resumes
    pub fn reset(&mut self) {
        self.caught = None;
    }
}

/// Extract a readable message from a panic payload
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "An unexpected error occurred".to_string()
    }
}

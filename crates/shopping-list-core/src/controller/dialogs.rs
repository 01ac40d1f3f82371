//! Dialog Capability
//!
//! Blocking confirmation and notice prompts, injected into the controller so
//! tests can script the answers.

pub trait Dialogs {
    /// Ask a yes/no question; true means the user agreed
    fn confirm(&self, message: &str) -> bool;

    /// Show a notice the user must dismiss
    fn alert(&self, message: &str);
}

impl<T: Dialogs + ?Sized> Dialogs for &T {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

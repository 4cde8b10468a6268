//! Delete confirmation.

use crate::consts::DEFAULT_DELETE_MESSAGE;

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Blocking yes/no question to the user.
pub trait Prompt {
    /// `true` only when the user explicitly accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// Ask before deleting. `None` or an empty message uses the stock wording.
pub fn confirm_delete<P: Prompt + ?Sized>(prompt: &P, message: Option<&str>) -> bool {
    let message = match message {
        Some(m) if !m.is_empty() => m,
        _ => DEFAULT_DELETE_MESSAGE,
    };
    prompt.confirm(message)
}

use web_sys::Window;

use crate::confirm::Prompt;

/// `window.confirm`. Any failure to show the dialog counts as "no".
pub struct WindowPrompt {
    window: Window,
}

impl WindowPrompt {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Prompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(e) => {
                log::warn!("confirm dialog failed: {e:?}");
                false
            }
        }
    }
}

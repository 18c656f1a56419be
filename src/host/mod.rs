//! Editor Host Module
//!
//! The services a command needs from the editor it runs in: prompts,
//! progress feedback and the active text editor.

use crate::error::HipsumResult;
use crate::quick_pick::{QuickPickItem, QuickPickOptions};
use async_trait::async_trait;

pub mod buffer;
pub mod editor;
pub mod progress;
pub mod terminal;

pub use buffer::TextBuffer;
pub use editor::{EditBuilder, Position, Selection, TextEdit, TextEditor};
pub use progress::{SilentProgress, SpinnerProgress};
pub use terminal::TerminalPrompter;

/// Synchronous validator: `None` accepts, `Some(message)` rejects with an inline message
pub type InputValidator = fn(&str) -> Option<String>;

/// Options for a free-text prompt
#[derive(Clone)]
pub struct InputBoxOptions {
    pub title: String,
    /// Pre-filled value
    pub value: String,
    pub validate_input: Option<InputValidator>,
}

impl std::fmt::Debug for InputBoxOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBoxOptions")
            .field("title", &self.title)
            .field("value", &self.value)
            .field("validated", &self.validate_input.is_some())
            .finish()
    }
}

impl InputBoxOptions {
    /// Run the validator, if any
    pub fn validate(&self, input: &str) -> Option<String> {
        self.validate_input.and_then(|validate| validate(input))
    }
}

/// Trait for interactive prompts
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Single-select prompt; `None` when the user dismisses it
    async fn show_quick_pick(
        &self,
        items: &[QuickPickItem],
        options: &QuickPickOptions,
    ) -> HipsumResult<Option<usize>>;

    /// Free-text prompt; only returns input accepted by the validator, `None` when dismissed
    async fn show_input_box(&self, options: &InputBoxOptions) -> HipsumResult<Option<String>>;
}

/// Trait for non-cancellable progress feedback
pub trait ProgressReporter: Send + Sync {
    fn begin(&self, title: &str);

    /// Advance by `increment` percent
    fn report(&self, increment: u8);

    /// Work completed
    fn finish(&self);

    /// Work failed; close without completing
    fn abandon(&self);
}

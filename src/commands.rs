//! Command registry
//!
//! Maps command ids to the handlers an editor host invokes against its
//! active text editor.

use crate::error::{HipsumError, HipsumResult};
use crate::generate::Outcome;
use crate::host::TextEditor;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A command that runs against the active text editor
#[async_trait]
pub trait TextEditorCommand: Send + Sync {
    async fn execute(&self, editor: &mut dyn TextEditor) -> HipsumResult<Outcome>;
}

/// Registered text editor commands, by id
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn TextEditorCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `command` under `id`, replacing any previous handler
    pub fn register_text_editor_command(&mut self, id: &str, command: Arc<dyn TextEditorCommand>) {
        if self.commands.insert(id.to_string(), command).is_some() {
            warn!("⚠️ Command '{}' registered twice, keeping the latest", id);
        } else {
            info!("📋 Registered command '{}'", id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Run the command registered under `id` against `editor`
    pub async fn execute(&self, id: &str, editor: &mut dyn TextEditor) -> HipsumResult<Outcome> {
        let command = self
            .commands
            .get(id)
            .cloned()
            .ok_or_else(|| HipsumError::UnknownCommand(id.to_string()))?;
        debug!("▶️ Executing '{}'", id);
        command.execute(editor).await
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.ids())
            .finish()
    }
}

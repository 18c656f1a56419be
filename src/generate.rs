//! Generate Command
//!
//! Asks for a unit and a count, fetches hipster ipsum and replaces the
//! active selection with it:
//!
//! `Idle → PromptingUnit → PromptingCount → Fetching → Inserting → Idle`
//!
//! Dismissing either prompt returns to `Idle` without side effects. A failed
//! fetch or edit ends in `Errored` and the error is returned to the host.

use crate::commands::{CommandRegistry, TextEditorCommand};
use crate::core::request::{GenerationRequest, RequestOptions, Unit};
use crate::core::text_normalizer::{assemble, parse_count, validate_count};
use crate::core::TextGenerator;
use crate::error::{HipsumError, HipsumResult};
use crate::host::{EditBuilder, InputBoxOptions, ProgressReporter, Prompter, TextEditor};
use crate::quick_pick::{QuickPickItem, QuickPickOptions};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Id the command is registered under
pub const COMMAND_ID: &str = "hipsum-generator.generate";

pub const UNIT_PROMPT_TITLE: &str = "Do you want to insert a number of sentences or paragraphs?";

pub const PROGRESS_TITLE: &str = "Fetching hipster ipsum...";

/// Where an invocation currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Idle,
    PromptingUnit,
    PromptingCount,
    Fetching,
    Inserting,
    Errored,
}

/// How an invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selection was replaced with `text`
    Inserted {
        unit: Unit,
        count: i64,
        blocks: usize,
        text: String,
    },
    /// The user dismissed a prompt
    Cancelled,
    /// Another invocation is still running (only with single-flight enabled)
    Busy,
}

/// Clears the in-flight flag when an invocation ends
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The `hipsum-generator.generate` command
pub struct GenerateCommand {
    generator: Arc<dyn TextGenerator>,
    prompter: Arc<dyn Prompter>,
    progress: Arc<dyn ProgressReporter>,
    options: RequestOptions,
    single_flight: bool,
    in_flight: AtomicBool,
    state: Mutex<OperationState>,
}

impl GenerateCommand {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        prompter: Arc<dyn Prompter>,
        progress: Arc<dyn ProgressReporter>,
    ) -> Self {
        Self {
            generator,
            prompter,
            progress,
            options: RequestOptions::default(),
            single_flight: false,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(OperationState::Idle),
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Refuse overlapping invocations instead of letting them race
    pub fn with_single_flight(mut self, enabled: bool) -> Self {
        self.single_flight = enabled;
        self
    }

    /// State of the most recent transition.
    ///
    /// All invocations share this value, so while runs overlap it reflects
    /// whichever one moved last.
    pub fn state(&self) -> OperationState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_state(&self, state: OperationState) {
        debug!("🔀 {:?}", state);
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    fn enter(&self) -> Option<Option<FlightGuard<'_>>> {
        if !self.single_flight {
            return Some(None);
        }
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Some(FlightGuard(&self.in_flight)))
    }

    /// Run one invocation against `editor`
    pub async fn run(&self, editor: &mut dyn TextEditor) -> HipsumResult<Outcome> {
        let Some(_guard) = self.enter() else {
            info!("⏳ Generation already in progress, ignoring");
            return Ok(Outcome::Busy);
        };

        self.set_state(OperationState::Idle);
        let result = self.run_steps(editor).await;
        match &result {
            Ok(_) => self.set_state(OperationState::Idle),
            Err(e) => {
                warn!("❌ Generation failed: {}", e);
                self.set_state(OperationState::Errored);
            }
        }
        result
    }

    async fn run_steps(&self, editor: &mut dyn TextEditor) -> HipsumResult<Outcome> {
        self.set_state(OperationState::PromptingUnit);
        let Some(unit) = self.ask_unit().await? else {
            debug!("Unit prompt dismissed");
            return Ok(Outcome::Cancelled);
        };

        self.set_state(OperationState::PromptingCount);
        let Some(count) = self.ask_count(unit).await? else {
            debug!("Count prompt dismissed");
            return Ok(Outcome::Cancelled);
        };

        self.set_state(OperationState::Fetching);
        let request = GenerationRequest::new(unit, count, self.options);
        let blocks = self.fetch(&request).await?;

        self.set_state(OperationState::Inserting);
        let text = assemble(&blocks);
        let selection = editor.selection();
        let mut builder = EditBuilder::new();
        builder.replace(selection, text.clone());
        editor.apply_edits(builder.into_edits())?;

        info!(
            "✅ Inserted {} {} ({} blocks) at {}",
            count,
            unit,
            blocks.len(),
            selection
        );
        Ok(Outcome::Inserted {
            unit,
            count,
            blocks: blocks.len(),
            text,
        })
    }

    async fn ask_unit(&self) -> HipsumResult<Option<Unit>> {
        let items: Vec<QuickPickItem> = Unit::ALL
            .iter()
            .map(|unit| QuickPickItem::new(unit.id(), unit.label()))
            .collect();
        let options = QuickPickOptions {
            title: UNIT_PROMPT_TITLE.to_string(),
        };

        let picked = self.prompter.show_quick_pick(&items, &options).await?;
        Ok(picked
            .and_then(|index| items.get(index))
            .and_then(|item| Unit::from_id(&item.id)))
    }

    async fn ask_count(&self, unit: Unit) -> HipsumResult<Option<i64>> {
        let options = InputBoxOptions {
            title: format!("Enter number of {unit}"),
            value: "1".to_string(),
            validate_input: Some(validate_count),
        };

        match self.prompter.show_input_box(&options).await? {
            None => Ok(None),
            Some(input) => parse_count(&input)
                .map(Some)
                .map_err(|_| HipsumError::InvalidCount(input)),
        }
    }

    async fn fetch(&self, request: &GenerationRequest) -> HipsumResult<Vec<String>> {
        self.progress.begin(PROGRESS_TITLE);
        self.progress.report(0);

        match self.generator.generate(request).await {
            Ok(blocks) => {
                self.progress.report(100);
                self.progress.finish();
                Ok(blocks)
            }
            Err(e) => {
                self.progress.abandon();
                Err(e)
            }
        }
    }
}

#[async_trait]
impl TextEditorCommand for GenerateCommand {
    async fn execute(&self, editor: &mut dyn TextEditor) -> HipsumResult<Outcome> {
        self.run(editor).await
    }
}

/// Register the generate command with the host
pub fn activate(registry: &mut CommandRegistry, command: GenerateCommand) {
    info!("🧔 Activating hipsum via {}", command.generator.name());
    registry.register_text_editor_command(COMMAND_ID, Arc::new(command));
}

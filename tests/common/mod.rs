#![allow(dead_code)]

pub mod mock_generator;
pub mod mock_host;

use hipsum::host::ProgressReporter;
use hipsum::{GenerateCommand, TextEditorCommand};
use mock_generator::MockGenerator;
use mock_host::{RecordingProgress, ScriptedPrompter};
use std::sync::Arc;

/// A generate command wired to mocks, with handles on each of them
pub struct TestContext {
    pub generator: Arc<MockGenerator>,
    pub prompter: Arc<ScriptedPrompter>,
    pub progress: Arc<RecordingProgress>,
    pub command: GenerateCommand,
}

impl TestContext {
    pub fn new(generator: MockGenerator, prompter: ScriptedPrompter) -> Self {
        let generator = Arc::new(generator);
        let prompter = Arc::new(prompter);
        let progress = Arc::new(RecordingProgress::new());
        let command = GenerateCommand::new(
            generator.clone(),
            prompter.clone(),
            progress.clone() as Arc<dyn ProgressReporter>,
        );

        Self {
            generator,
            prompter,
            progress,
            command,
        }
    }

    pub fn command(&self) -> &dyn TextEditorCommand {
        &self.command
    }
}

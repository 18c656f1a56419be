//! Mock Editor Host for Testing
//!
//! Scripted prompt answers, recorded progress events and an editor that
//! counts the edits it receives.

use async_trait::async_trait;
use hipsum::host::{
    InputBoxOptions, ProgressReporter, Prompter, Selection, TextBuffer, TextEdit, TextEditor,
};
use hipsum::quick_pick::{QuickPickItem, QuickPickOptions};
use hipsum::HipsumResult;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Prompter answering from a script; `None` entries dismiss the prompt
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    picks: Mutex<VecDeque<Option<&'static str>>>,
    inputs: Mutex<VecDeque<Option<&'static str>>>,
    /// Titles of the prompts shown, in order
    pub shown: Mutex<Vec<String>>,
    /// Pre-filled values of the input boxes shown
    pub prefilled: Mutex<Vec<String>>,
    /// Validation messages produced for rejected input
    pub rejections: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// `pick` is matched against item ids
    pub fn new(pick: Option<&'static str>, inputs: &[Option<&'static str>]) -> Self {
        let prompter = Self::default();
        prompter.picks.lock().unwrap().push_back(pick);
        prompter.inputs.lock().unwrap().extend(inputs.iter().copied());
        prompter
    }

    pub fn answering(pick: &'static str, count: &'static str) -> Self {
        Self::new(Some(pick), &[Some(count)])
    }

    /// Same answers for `times` invocations
    pub fn repeating(pick: &'static str, count: &'static str, times: usize) -> Self {
        let prompter = Self::default();
        for _ in 0..times {
            prompter.picks.lock().unwrap().push_back(Some(pick));
            prompter.inputs.lock().unwrap().push_back(Some(count));
        }
        prompter
    }

    pub fn get_shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }

    pub fn get_rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn show_quick_pick(
        &self,
        items: &[QuickPickItem],
        options: &QuickPickOptions,
    ) -> HipsumResult<Option<usize>> {
        self.shown.lock().unwrap().push(options.title.clone());
        let answer = self.picks.lock().unwrap().pop_front().flatten();
        Ok(answer.and_then(|id| items.iter().position(|item| item.id == id)))
    }

    async fn show_input_box(&self, options: &InputBoxOptions) -> HipsumResult<Option<String>> {
        self.shown.lock().unwrap().push(options.title.clone());
        self.prefilled.lock().unwrap().push(options.value.clone());
        loop {
            let Some(answer) = self.inputs.lock().unwrap().pop_front().flatten() else {
                return Ok(None);
            };
            match options.validate(answer) {
                Some(message) => self.rejections.lock().unwrap().push(message),
                None => return Ok(Some(answer.to_string())),
            }
        }
    }
}

/// Progress reporter recording every call
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn begin(&self, title: &str) {
        self.events.lock().unwrap().push(format!("begin {title}"));
    }

    fn report(&self, increment: u8) {
        self.events.lock().unwrap().push(format!("report {increment}"));
    }

    fn finish(&self) {
        self.events.lock().unwrap().push("finish".to_string());
    }

    fn abandon(&self) {
        self.events.lock().unwrap().push("abandon".to_string());
    }
}

/// Text buffer that counts edit transactions
#[derive(Debug)]
pub struct SpyEditor {
    pub buffer: TextBuffer,
    pub transactions: usize,
}

impl SpyEditor {
    pub fn new(text: &str, selection: Option<Selection>) -> Self {
        let mut buffer = TextBuffer::new(text);
        if let Some(selection) = selection {
            buffer.set_selection(selection);
        }
        Self {
            buffer,
            transactions: 0,
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }
}

impl TextEditor for SpyEditor {
    fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> HipsumResult<()> {
        self.transactions += 1;
        self.buffer.apply_edits(edits)
    }
}

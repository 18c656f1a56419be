//! Terminal Prompts
//!
//! Line-based prompts on a terminal. Questions go to stderr so stdout stays
//! free for the document. Answers given up front (from command line flags)
//! are consumed before anything is read.

use super::{InputBoxOptions, Prompter};
use crate::error::{HipsumError, HipsumResult};
use crate::quick_pick::{
    is_cancel_word, parse_pick, render_items, PickResult, QuickPickItem, QuickPickOptions,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Write};
use std::sync::{Arc, Mutex};
use tracing::debug;

type SharedReader = Arc<Mutex<Box<dyn BufRead + Send>>>;

pub struct TerminalPrompter {
    /// `None` when no interactive input is available
    reader: Option<SharedReader>,
    writer: Mutex<Box<dyn Write + Send>>,
    pick_answers: Mutex<VecDeque<String>>,
    input_answers: Mutex<VecDeque<String>>,
}

impl TerminalPrompter {
    pub fn new(reader: Option<Box<dyn BufRead + Send>>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            reader: reader.map(|r| Arc::new(Mutex::new(r))),
            writer: Mutex::new(writer),
            pick_answers: Mutex::new(VecDeque::new()),
            input_answers: Mutex::new(VecDeque::new()),
        }
    }

    /// Read answers from stdin
    pub fn stdin() -> Self {
        Self::new(
            Some(Box::new(BufReader::new(std::io::stdin()))),
            Box::new(std::io::stderr()),
        )
    }

    /// Only pre-supplied answers; an unanswered prompt counts as dismissed
    pub fn detached() -> Self {
        Self::new(None, Box::new(std::io::stderr()))
    }

    /// Queue an answer for the next single-select prompt
    pub fn with_pick_answer(self, answer: impl Into<String>) -> Self {
        if let Ok(mut queue) = self.pick_answers.lock() {
            queue.push_back(answer.into());
        }
        self
    }

    /// Queue an answer for the next free-text prompt
    pub fn with_input_answer(self, answer: impl Into<String>) -> Self {
        if let Ok(mut queue) = self.input_answers.lock() {
            queue.push_back(answer.into());
        }
        self
    }

    fn say(&self, text: &str) -> HipsumResult<()> {
        let mut writer = self.writer.lock()?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Next answer, queued first; `None` at end of input
    async fn next_answer(&self, queue: &Mutex<VecDeque<String>>) -> HipsumResult<Option<String>> {
        let queued = queue.lock()?.pop_front();
        if let Some(answer) = queued {
            self.say(&format!("{answer}\n"))?;
            return Ok(Some(answer));
        }

        let Some(reader) = self.reader.clone() else {
            debug!("No terminal input available");
            return Ok(None);
        };

        tokio::task::spawn_blocking(move || -> HipsumResult<Option<String>> {
            let mut reader = reader.lock()?;
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
        })
        .await
        .map_err(|e| HipsumError::Prompt(format!("terminal reader failed: {e}")))?
    }
}

impl std::fmt::Debug for TerminalPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalPrompter")
            .field("interactive", &self.reader.is_some())
            .finish()
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn show_quick_pick(
        &self,
        items: &[QuickPickItem],
        options: &QuickPickOptions,
    ) -> HipsumResult<Option<usize>> {
        loop {
            self.say(&format!("{}\n{}\n> ", options.title, render_items(items)))?;

            let Some(answer) = self.next_answer(&self.pick_answers).await? else {
                self.say("\n")?;
                return Ok(None);
            };

            match parse_pick(&answer, items) {
                PickResult::Selected(index) => return Ok(Some(index)),
                PickResult::Cancelled => return Ok(None),
                PickResult::NotRecognized => {
                    self.say(&format!("Not an option: {answer:?}\n"))?;
                }
            }
        }
    }

    async fn show_input_box(&self, options: &InputBoxOptions) -> HipsumResult<Option<String>> {
        loop {
            self.say(&format!("{} [{}]: ", options.title, options.value))?;

            let Some(answer) = self.next_answer(&self.input_answers).await? else {
                self.say("\n")?;
                return Ok(None);
            };
            if is_cancel_word(&answer) {
                return Ok(None);
            }

            let input = if answer.trim().is_empty() {
                options.value.clone()
            } else {
                answer
            };

            match options.validate(&input) {
                Some(message) => self.say(&format!("{message}\n"))?,
                None => return Ok(Some(input)),
            }
        }
    }
}

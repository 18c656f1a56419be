//! Editor Surface
//!
//! Positions, selections and the edit transaction a host applies to its
//! active document.

use crate::error::{HipsumError, HipsumResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A zero-based line/character position; characters are Unicode scalar values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// Parses the one-based `LINE:COL` form used on the command line
impl FromStr for Position {
    type Err = HipsumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, character) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| HipsumError::Selection(format!("expected LINE:COL, got {s:?}")))?;
        let parse = |part: &str| -> HipsumResult<usize> {
            match part.trim().parse::<usize>() {
                Ok(n) if n >= 1 => Ok(n - 1),
                _ => Err(HipsumError::Selection(format!(
                    "line and column start at 1, got {s:?}"
                ))),
            }
        };
        Ok(Position::new(parse(line)?, parse(character)?))
    }
}

/// A range between an anchor and the active (cursor) end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Empty selection at `position`
    pub fn caret(position: Position) -> Self {
        Self::new(position, position)
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "{}", self.active)
        } else {
            write!(f, "{}-{}", self.anchor, self.active)
        }
    }
}

/// Parses `LINE:COL` or `LINE:COL-LINE:COL`, one-based
impl FromStr for Selection {
    type Err = HipsumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('-') {
            Some((anchor, active)) => Ok(Selection::new(anchor.parse()?, active.parse()?)),
            None => Ok(Selection::caret(s.parse()?)),
        }
    }
}

/// A single replacement of a selection's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Selection,
    pub new_text: String,
}

/// Collects the replacements of one edit transaction
#[derive(Debug, Default)]
pub struct EditBuilder {
    edits: Vec<TextEdit>,
}

impl EditBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, range: Selection, new_text: impl Into<String>) -> &mut Self {
        self.edits.push(TextEdit {
            range,
            new_text: new_text.into(),
        });
        self
    }

    pub fn insert(&mut self, at: Position, text: impl Into<String>) -> &mut Self {
        self.replace(Selection::caret(at), text)
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn into_edits(self) -> Vec<TextEdit> {
        self.edits
    }
}

/// The active editable document and its selection, as seen by a command
pub trait TextEditor: Send {
    /// Current selection in the document
    fn selection(&self) -> Selection;

    /// Apply all edits as one transaction; either every edit lands or none does
    fn apply_edits(&mut self, edits: Vec<TextEdit>) -> HipsumResult<()>;
}

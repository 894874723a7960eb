//! # Command Layer
//!
//! The core logic of casegen. Each command lives in its own submodule and
//! implements a plain `run` function that does the work and returns a
//! structured [`CmdResult`].
//!
//! Commands never print and never call `std::process::exit`; they return
//! messages with levels and let the CLI layer decide how to render them.
//! This keeps the library usable from any front end and keeps the tests
//! free of terminal concerns.
//!
//! ## Command Modules
//!
//! - [`init`]: Scaffold a sample case file and placeholder asset
//! - [`generate`]: Load a case file, compute deltas, render the report

use serde::Serialize;
use std::path::PathBuf;

pub mod generate;
pub mod init;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files the command wrote, in write order.
    pub written_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }
}

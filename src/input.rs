//! Line-input abstraction for the interactive dialogs.
//!
//! `LineSource` is the seam between the session/registration flows and the
//! real console: ask a question, get back one trimmed line. Tests and
//! non-interactive drivers substitute `ScriptedInput` instead of driving
//! actual standard input.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Injectable "ask a question, get a line" capability.
pub trait LineSource {
    /// Show `prompt` and read one line, trimmed. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

/// Real console input: prompt to stdout, line from stdin.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl LineSource for ConsoleInput {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

/// Scripted input source replaying queued lines.
///
/// Records every prompt it is asked, so tests can assert on the dialog
/// sequence as well as the answers.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Queue up answers in the order they will be consumed.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts seen so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedInput {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().map(|line| line.trim().to_string())
    }
}

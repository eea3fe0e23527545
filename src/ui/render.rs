//! Rendering contract consumed by the session and registration flows.
//!
//! `Renderer` is the default terminal implementation; tests substitute a
//! collecting sink without coupling to stdout/stderr output.

use crate::ui::terminal::Renderer;

/// Injectable rendering interface.
///
/// Record content (greetings, listing entries) goes to stdout; chrome
/// (banner, separators, status, warnings, errors) goes to stderr.
pub trait RenderSink: Send + Sync {
    /// Render the startup banner title with its rule line.
    fn banner(&self, title: &str);
    /// Render one bulleted command-help line.
    fn hint(&self, text: &str);
    /// Render the dashed separator shown before each prompt.
    fn separator(&self);
    /// Render a titled section header.
    fn section(&self, title: &str);
    /// Render one 1-based listing entry.
    fn entry(&self, index: usize, text: &str);
    /// Render a multi-line greeting block.
    fn greeting(&self, text: &str);
    /// Render a status/lifecycle message.
    fn info(&self, msg: &str);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn banner(&self, title: &str) {
        self.banner(title);
    }

    fn hint(&self, text: &str) {
        self.hint(text);
    }

    fn separator(&self) {
        self.separator();
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn entry(&self, index: usize, text: &str) {
        self.entry(index, text);
    }

    fn greeting(&self, text: &str) {
        self.greeting(text);
    }

    fn info(&self, msg: &str) {
        self.info(msg);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}

//! Shared test fixtures for table/registration/session test modules.
//!
//! Keeping tiny but reusable helpers here prevents each test module from
//! rebuilding ad-hoc temp dir and roster fixture code.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ui::RenderSink;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
///
/// This helper is intentionally simple and std-only so unit tests can use it
/// without introducing new dependencies.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("starosta-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Canonical two-student backing-file fixture with header and rule lines.
pub fn roster_fixture_text() -> String {
    "| ФИО | Группа | Колледж | Год поступления | Курс |\n\
     |-----|--------|---------|-----------------|------|\n\
     | Иванов Иван Иванович | ТВ-101 | Технический колледж | 2023 | 2 |\n\
     | Петрова Анна Сергеевна | ЭК-205 | Экономический колледж | 2021 | 3 |\n"
        .to_string()
}

/// Render sink collecting every line instead of writing to the terminal.
#[derive(Debug, Default)]
pub struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl CollectingSink {
    /// Everything rendered so far, one entry per sink call.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("sink lock poisoned").clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().expect("sink lock poisoned").push(line);
    }
}

impl RenderSink for CollectingSink {
    fn banner(&self, title: &str) {
        self.push(title.to_string());
    }

    fn hint(&self, text: &str) {
        self.push(format!("• {text}"));
    }

    fn separator(&self) {
        self.push("---separator---".to_string());
    }

    fn section(&self, title: &str) {
        self.push(title.to_string());
    }

    fn entry(&self, index: usize, text: &str) {
        self.push(format!("{index}. {text}"));
    }

    fn greeting(&self, text: &str) {
        self.push(text.to_string());
    }

    fn info(&self, msg: &str) {
        self.push(msg.to_string());
    }

    fn warn(&self, msg: &str) {
        self.push(msg.to_string());
    }

    fn error(&self, msg: &str) {
        self.push(format!("Ошибка: {msg}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn roster_fixture_has_header_rule_and_two_rows() {
        let text = roster_fixture_text();
        assert!(text.contains("ФИО"));
        assert!(text.contains("---"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn collecting_sink_records_calls_in_order() {
        let sink = CollectingSink::default();
        sink.info("один");
        sink.entry(1, "два");
        assert_eq!(sink.lines(), ["один", "1. два"]);
    }
}

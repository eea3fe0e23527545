//! Interactive session loop: banner, command dispatch, repeat until exit.

use std::path::PathBuf;

use crate::greeting::greeting;
use crate::input::LineSource;
use crate::record::Student;
use crate::registration::register_student;
use crate::roster::Roster;
use crate::ui::RenderSink;

/// Reserved command terminating the session.
pub const CMD_EXIT: &str = "выход";
/// Reserved command listing all records.
pub const CMD_LIST: &str = "список";

pub const BANNER_TITLE: &str = "🎓 Система управления студентами";
pub const PROMPT_COMMAND: &str = "Введите команду: ";

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    /// Free-text name query.
    Query(String),
}

/// Parse one trimmed input line. `None` for blank input (re-prompt).
///
/// Reserved tokens match case-insensitively; anything else is a name query.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    if lowered == CMD_EXIT {
        Some(Command::Exit)
    } else if lowered == CMD_LIST {
        Some(Command::List)
    } else {
        Some(Command::Query(trimmed.to_string()))
    }
}

/// One interactive session over an owned roster and its backing file.
///
/// Single-threaded and blocking; no session state outlives `run` beyond the
/// rows appended to the backing file.
#[derive(Debug)]
pub struct Session {
    roster: Roster,
    roster_path: PathBuf,
}

impl Session {
    pub fn new(roster: Roster, roster_path: PathBuf) -> Self {
        Self {
            roster,
            roster_path,
        }
    }

    /// Current in-memory roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the loop until the exit command or end of input.
    pub fn run(&mut self, input: &mut dyn LineSource, ui: &dyn RenderSink) {
        ui.banner(BANNER_TITLE);
        ui.info("Доступные команды:");
        ui.hint("Введите ФИО студента для поиска");
        ui.hint("'список' - показать всех студентов");
        ui.hint("'выход' - завершить программу");

        loop {
            ui.separator();
            let Some(line) = input.ask(PROMPT_COMMAND) else {
                // A drained scripted source or closed stdin ends the session
                // the same way the exit command does.
                ui.info("👋 До свидания!");
                break;
            };
            match parse_command(&line) {
                None => continue,
                Some(Command::Exit) => {
                    tracing::debug!("session exit requested");
                    ui.info("👋 До свидания!");
                    break;
                }
                Some(Command::List) => self.list(ui),
                Some(Command::Query(name)) => self.query(&name, input, ui),
            }
        }
    }

    fn list(&self, ui: &dyn RenderSink) {
        ui.section("📋 Список всех студентов:");
        for (i, student) in self.roster.iter().enumerate() {
            ui.entry(i + 1, &format!("{} - {}", student.full_name, student.group));
        }
    }

    fn query(&mut self, name: &str, input: &mut dyn LineSource, ui: &dyn RenderSink) {
        tracing::debug!(%name, "name query");
        if let Some(student) = self.roster.find(name) {
            ui.greeting(&greeting(student));
            return;
        }
        let registered: Option<Student> =
            register_student(name, &mut self.roster, &self.roster_path, input, ui);
        if let Some(student) = registered {
            ui.greeting(&greeting(&student));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;
    use crate::table::read_roster;
    use crate::testsupport::{roster_fixture_text, CollectingSink, TestTempDir};

    fn session(dir: &TestTempDir) -> Session {
        let path = dir.write_text("students.md", &roster_fixture_text());
        let roster = Roster::new(read_roster(&path).unwrap());
        Session::new(roster, path)
    }

    #[test]
    fn parse_command_recognizes_tokens_case_insensitively() {
        assert_eq!(parse_command("выход"), Some(Command::Exit));
        assert_eq!(parse_command("  ВЫХОД  "), Some(Command::Exit));
        assert_eq!(parse_command("Список"), Some(Command::List));
        assert_eq!(
            parse_command("Иванов Иван Иванович"),
            Some(Command::Query("Иванов Иван Иванович".into()))
        );
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn exit_command_says_goodbye() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        s.run(&mut ScriptedInput::new(["выход"]), &ui);
        assert!(ui.lines().iter().any(|l| l.contains("До свидания")));
    }

    #[test]
    fn list_command_prints_numbered_entries() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        s.run(&mut ScriptedInput::new(["список", "выход"]), &ui);
        let lines = ui.lines();
        assert!(lines.iter().any(|l| l.contains("Список всех студентов")));
        assert!(lines
            .iter()
            .any(|l| l.contains("1. Иванов Иван Иванович - ТВ-101")));
        assert!(lines
            .iter()
            .any(|l| l.contains("2. Петрова Анна Сергеевна - ЭК-205")));
    }

    #[test]
    fn known_name_query_shows_the_greeting() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        s.run(
            &mut ScriptedInput::new(["иванов иван иванович", "выход"]),
            &ui,
        );
        assert!(ui
            .lines()
            .iter()
            .any(|l| l.contains("Добро пожаловать, Иванов Иван Иванович")));
    }

    #[test]
    fn unknown_name_declined_registration_shows_no_greeting() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        s.run(
            &mut ScriptedInput::new(["Неизвестный Некто", "нет", "выход"]),
            &ui,
        );
        assert!(ui.lines().iter().any(|l| l.contains("не найден в базе")));
        assert!(!ui.lines().iter().any(|l| l.contains("Добро пожаловать")));
        assert_eq!(s.roster().len(), 2);
    }

    #[test]
    fn registration_is_greeted_immediately_and_survives_lookup() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        s.run(
            &mut ScriptedInput::new([
                "Новикова Анна Павловна",
                "да",
                "ИС-202",
                "Политехнический колледж",
                "2022",
                "3",
                "новикова анна павловна",
                "выход",
            ]),
            &ui,
        );
        let greetings: Vec<_> = ui
            .lines()
            .iter()
            .filter(|l| l.contains("Добро пожаловать, Новикова Анна Павловна"))
            .cloned()
            .collect();
        // Once right after registration, once for the follow-up query.
        assert_eq!(greetings.len(), 2);
        assert_eq!(s.roster().len(), 3);
    }

    #[test]
    fn blank_input_reprompts_instead_of_querying() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        let mut input = ScriptedInput::new(["", "выход"]);
        s.run(&mut input, &ui);
        assert_eq!(input.prompts(), [PROMPT_COMMAND, PROMPT_COMMAND]);
        assert!(!ui.lines().iter().any(|l| l.contains("не найден")));
    }

    #[test]
    fn drained_input_ends_the_session() {
        let dir = TestTempDir::new("session");
        let mut s = session(&dir);
        let ui = CollectingSink::default();
        s.run(&mut ScriptedInput::new(Vec::<String>::new()), &ui);
        assert!(ui.lines().iter().any(|l| l.contains("До свидания")));
    }
}

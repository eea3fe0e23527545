//! Interactive registration flow for names that miss the roster.
//!
//! States: NotFound → PromptConfirm → {Collecting → Validated → Appended} |
//! Declined. There is no retry loop: any invalid answer aborts the whole
//! registration and discards the partial input. The backing file is written
//! before the in-memory roster so a failed append leaves both unchanged.

use std::path::Path;

use crate::error::RegistrationError;
use crate::input::LineSource;
use crate::record::Student;
use crate::roster::Roster;
use crate::table::append_student;
use crate::ui::RenderSink;

/// Affirmative confirmation token; anything else declines.
pub const CONFIRM_TOKEN: &str = "да";

pub const PROMPT_CONFIRM: &str = "Хотите зарегистрироваться? (да/нет): ";
pub const PROMPT_GROUP: &str = "Введите учебную группу: ";
pub const PROMPT_COLLEGE: &str = "Введите название колледжа: ";
pub const PROMPT_YEAR: &str = "Введите год поступления: ";
pub const PROMPT_COURSE: &str = "Введите текущий курс: ";

/// Collected-but-unvalidated registration answers.
#[derive(Debug)]
struct RegistrationForm {
    group: String,
    college: String,
    admission_year: i32,
    course: i32,
}

/// Run the registration dialog for a name that was not found.
///
/// Returns the new record so the caller can greet it immediately, or `None`
/// when the user declined or the registration aborted. On success the record
/// has been appended to both the backing file and `roster`.
pub fn register_student(
    full_name: &str,
    roster: &mut Roster,
    roster_path: &Path,
    input: &mut dyn LineSource,
    ui: &dyn RenderSink,
) -> Option<Student> {
    ui.warn(&format!("❌ Студент {full_name} не найден в базе."));

    let answer = input.ask(PROMPT_CONFIRM)?;
    if answer.to_lowercase() != CONFIRM_TOKEN {
        return None;
    }

    ui.section("📝 Регистрация нового студента:");
    let form = match collect_form(input).and_then(validated) {
        Ok(form) => form,
        Err(e) => {
            report(ui, &e);
            return None;
        }
    };

    let student = Student {
        full_name: full_name.to_string(),
        group: form.group,
        college: form.college,
        admission_year: form.admission_year,
        course: form.course,
    };

    // File first: a failed append must leave the roster untouched too.
    if let Err(e) = append_student(roster_path, &student) {
        report(ui, &RegistrationError::from(e));
        return None;
    }
    roster.push(student.clone());

    tracing::debug!(full_name = %student.full_name, "student registered");
    ui.info("✅ Студент успешно зарегистрирован!");
    Some(student)
}

/// Ask the four registration questions in the fixed order.
fn collect_form(input: &mut dyn LineSource) -> Result<RegistrationForm, RegistrationError> {
    let group = ask(input, PROMPT_GROUP)?;
    let college = ask(input, PROMPT_COLLEGE)?;
    let admission_year = parse_number(&ask(input, PROMPT_YEAR)?, "admission_year")?;
    let course = parse_number(&ask(input, PROMPT_COURSE)?, "course")?;
    Ok(RegistrationForm {
        group,
        college,
        admission_year,
        course,
    })
}

fn validated(form: RegistrationForm) -> Result<RegistrationForm, RegistrationError> {
    if !Student::admission_year_in_range(form.admission_year) {
        return Err(RegistrationError::YearOutOfRange(form.admission_year));
    }
    if !Student::course_in_range(form.course) {
        return Err(RegistrationError::CourseOutOfRange(form.course));
    }
    Ok(form)
}

fn ask(input: &mut dyn LineSource, prompt: &str) -> Result<String, RegistrationError> {
    input.ask(prompt).ok_or(RegistrationError::InputClosed)
}

fn parse_number(raw: &str, field: &'static str) -> Result<i32, RegistrationError> {
    raw.parse().map_err(|_| RegistrationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Report an aborted registration in the console protocol's phrasing.
fn report(ui: &dyn RenderSink, error: &RegistrationError) {
    tracing::debug!(%error, "registration aborted");
    match error {
        RegistrationError::YearOutOfRange(_) => ui.error("Некорректный год поступления"),
        RegistrationError::CourseOutOfRange(_) => ui.error("Некорректный номер курса"),
        RegistrationError::NotANumber { .. } => {
            ui.error("Введите корректные числовые значения")
        }
        RegistrationError::InputClosed => ui.error("Регистрация прервана"),
        RegistrationError::Io(e) => ui.error(&format!("Не удалось записать в файл: {e}")),
    }
}

//! Greeting and enrollment-metrics formatting.

use crate::record::Student;

/// Fixed reference year for the years-studying metric.
///
/// Deliberately a constant rather than wall-clock time so the derived metric
/// stays deterministic across runs and in tests. A real deployment would want
/// this configurable or clock-driven.
pub const REFERENCE_YEAR: i32 = 2024;

/// Remark appended for first-year students.
pub const REMARK_FIRST_COURSE: &str = "🌟 Вы только начинаете свой образовательный путь!";
/// Remark appended from the third course on.
pub const REMARK_SENIOR_COURSE: &str = "🎯 Вы уже опытный студент! Скоро диплом!";

/// Years studying, counted inclusively from the admission year.
pub fn years_studying(admission_year: i32) -> i32 {
    REFERENCE_YEAR - admission_year + 1
}

/// Render the multi-line greeting block for one student.
pub fn greeting(student: &Student) -> String {
    let mut text = format!("🎓 Добро пожаловать, {}!", student.full_name);
    text.push_str(&format!("\n{}", "=".repeat(50)));
    text.push_str("\n📊 Ваши образовательные метрики:");
    text.push_str(&format!("\n├─ 🏫 Колледж: {}", student.college));
    text.push_str(&format!("\n├─ 👥 Группа: {}", student.group));
    text.push_str(&format!("\n├─ 📅 Год поступления: {}", student.admission_year));
    text.push_str(&format!("\n├─ 📚 Текущий курс: {}", student.course));
    text.push_str(&format!(
        "\n└─ ⏱️ Лет обучения: {}",
        years_studying(student.admission_year)
    ));

    if student.course == 1 {
        text.push_str(&format!("\n\n{REMARK_FIRST_COURSE}"));
    } else if student.course >= 3 {
        text.push_str(&format!("\n\n{REMARK_SENIOR_COURSE}"));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(year: i32, course: i32) -> Student {
        Student {
            full_name: "Тестовый Студент".into(),
            group: "ТЕСТ-101".into(),
            college: "Тестовый колледж".into(),
            admission_year: year,
            course,
        }
    }

    #[test]
    fn greeting_contains_all_metrics_verbatim() {
        let s = student(2023, 2);
        let text = greeting(&s);
        assert!(text.contains(&s.full_name));
        assert!(text.contains(&s.group));
        assert!(text.contains(&s.college));
        assert!(text.contains("2023"));
        assert!(text.contains("Текущий курс: 2"));
    }

    #[test]
    fn years_studying_counts_inclusively() {
        assert_eq!(years_studying(2022), 3);
        assert_eq!(years_studying(REFERENCE_YEAR), 1);
        let text = greeting(&student(2022, 2));
        assert!(text.contains("Лет обучения: 3"), "got: {text}");
    }

    #[test]
    fn first_course_gets_the_starting_remark() {
        let text = greeting(&student(2024, 1));
        assert!(text.contains(REMARK_FIRST_COURSE));
        assert!(!text.contains(REMARK_SENIOR_COURSE));
    }

    #[test]
    fn second_course_gets_no_remark() {
        let text = greeting(&student(2023, 2));
        assert!(!text.contains(REMARK_FIRST_COURSE));
        assert!(!text.contains(REMARK_SENIOR_COURSE));
    }

    #[test]
    fn third_course_and_up_get_the_senior_remark() {
        for course in [3, 4, 5, 6] {
            let text = greeting(&student(2020, course));
            assert!(text.contains(REMARK_SENIOR_COURSE), "course {course}");
            assert!(!text.contains(REMARK_FIRST_COURSE), "course {course}");
        }
    }
}

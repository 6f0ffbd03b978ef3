use tracing::debug;

use super::error::ValidationError;
use super::input::{Field, FormInput};
use crate::scoring::{compute_report, Report, ScoringModel, SubjectSet, Tier, TIER_BOUNDARY};

const GRADE_RANGE: std::ops::RangeInclusive<i64> = 1..=12;
const PERCENT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Owns the form state, validates it on submit and keeps the latest report
/// or error for display.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    input: FormInput,
    report: Option<Report>,
    error: Option<ValidationError>,
    in_progress: bool,
    model: ScoringModel,
}

impl FormController {
    pub fn new(model: ScoringModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// True only while a submission is being evaluated.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Store the raw text of a field. No parsing happens here.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
    }

    /// Tier whose subject inputs should be shown for the grade as typed so far.
    ///
    /// An empty grade shows the low tier. Text that is not a number shows
    /// neither tier, leaving only the shared subjects visible.
    pub fn visible_tier(&self) -> Option<Tier> {
        let raw = self.input.text(Field::Grade).trim();
        if raw.is_empty() {
            return Some(Tier::Low);
        }
        let grade: f64 = raw.parse().ok()?;
        if grade > f64::from(TIER_BOUNDARY) {
            Some(Tier::High)
        } else if grade <= f64::from(TIER_BOUNDARY) {
            Some(Tier::Low)
        } else {
            None // NaN
        }
    }

    /// Fields currently shown, in display order.
    pub fn visible_fields(&self) -> Vec<Field> {
        let tier = self.visible_tier();
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Grade | Field::Attendance => true,
                Field::Subject(subject) => {
                    let shared =
                        Tier::High.contains(*subject) && Tier::Low.contains(*subject);
                    shared || tier.is_some_and(|t| t.contains(*subject))
                }
            })
            .collect()
    }

    /// Validate the form and, if it passes, replace the stored report.
    ///
    /// Checks run grade, then attendance, then marks; the first failure is
    /// stored and returned and later checks are skipped. A failure leaves any
    /// earlier report in place.
    pub fn submit(&mut self) -> Result<&Report, ValidationError> {
        self.in_progress = true;
        self.error = None;

        let outcome = self.evaluate();
        self.in_progress = false;

        match outcome {
            Ok(report) => {
                debug!(
                    grade = report.grade_level,
                    average = report.weighted_average,
                    letter = %report.letter_grade,
                    rank = %report.rank,
                    "report generated"
                );
                Ok(&*self.report.insert(report))
            }
            Err(e) => {
                debug!(category = ?e.category(), "submission rejected");
                self.error = Some(e);
                Err(e)
            }
        }
    }

    fn evaluate(&self) -> Result<Report, ValidationError> {
        let grade = parse_grade(self.input.get(Field::Grade))?;
        let attendance = parse_percentage(self.input.get(Field::Attendance))
            .ok_or(ValidationError::InvalidAttendance)?;

        let tier = Tier::for_grade(grade);
        let marks = tier
            .subjects()
            .map(|subject| {
                parse_percentage(self.input.get(Field::Subject(subject)))
                    .map(|mark| (subject, mark))
                    .ok_or(ValidationError::InvalidMarks)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(compute_report(
            grade,
            SubjectSet::new(marks),
            attendance,
            &self.model,
        ))
    }
}

/// Whole number in 1..=12, surrounding whitespace ignored.
fn parse_grade(raw: Option<&str>) -> Result<u8, ValidationError> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|g| GRADE_RANGE.contains(g))
        .and_then(|g| u8::try_from(g).ok())
        .ok_or(ValidationError::InvalidGrade)
}

/// Finite number in [0, 100].
fn parse_percentage(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && PERCENT_RANGE.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Subject;

    fn fill(form: &mut FormController, grade: &str, attendance: &str, marks: &[(Subject, &str)]) {
        form.edit(Field::Grade, grade);
        form.edit(Field::Attendance, attendance);
        for (subject, mark) in marks {
            form.edit(Field::Subject(*subject), *mark);
        }
    }

    fn worked_example() -> FormController {
        let mut form = FormController::default();
        fill(
            &mut form,
            "5",
            "90",
            &[
                (Subject::Maths, "80"),
                (Subject::Social, "70"),
                (Subject::Science, "90"),
                (Subject::English, "60"),
                (Subject::Tamil, "100"),
            ],
        );
        form
    }

    fn all_subjects(form: &mut FormController, mark: &str) {
        for subject in Subject::ALL {
            form.edit(Field::Subject(subject), mark);
        }
    }

    #[test]
    fn test_worked_example_submission() {
        let mut form = worked_example();
        let report = form.submit().unwrap().clone();

        assert_eq!(report.grade_level, 5);
        assert!((report.weighted_average - 79.0).abs() < 1e-9);
        assert_eq!(report.letter_grade, "B");
        assert_eq!(report.rank, "Top 50%");
        assert_eq!(report.performance, "Good");
        assert_eq!(report.breakdown.len(), 5);
        assert_eq!(form.report(), Some(&report));
        assert_eq!(form.error(), None);
        assert!(!form.is_in_progress());
    }

    #[test]
    fn test_grade_out_of_range() {
        for grade in ["0", "13", "", "abc", "8.5", "-3"] {
            let mut form = FormController::default();
            fill(&mut form, grade, "90", &[]);
            all_subjects(&mut form, "50");
            assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidGrade, "grade {:?}", grade);
            assert!(form.report().is_none());
            assert_eq!(form.error(), Some(ValidationError::InvalidGrade));
            assert!(!form.is_in_progress());
        }
    }

    #[test]
    fn test_grade_missing() {
        let mut form = FormController::default();
        assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidGrade);
    }

    #[test]
    fn test_attendance_out_of_range() {
        for attendance in ["101", "-1", "", "NaN", "inf", "ninety"] {
            let mut form = FormController::default();
            fill(&mut form, "5", attendance, &[]);
            all_subjects(&mut form, "50");
            assert_eq!(
                form.submit().unwrap_err(),
                ValidationError::InvalidAttendance,
                "attendance {:?}",
                attendance
            );
            assert!(form.report().is_none());
            assert!(!form.is_in_progress());
        }
    }

    #[test]
    fn test_mark_out_of_range() {
        let mut form = worked_example();
        form.edit(Field::Subject(Subject::Science), "150");
        assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidMarks);
        assert!(form.report().is_none());
        assert!(!form.is_in_progress());
    }

    #[test]
    fn test_missing_mark_in_active_tier() {
        let mut form = FormController::default();
        fill(&mut form, "10", "90", &[]);
        all_subjects(&mut form, "70");
        form.input.physics = None;
        assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidMarks);
    }

    #[test]
    fn test_grade_error_suppresses_later_checks() {
        let mut form = FormController::default();
        fill(&mut form, "13", "500", &[(Subject::Maths, "900")]);
        assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidGrade);

        form.edit(Field::Grade, "4");
        assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidAttendance);

        form.edit(Field::Attendance, "50");
        assert_eq!(form.submit().unwrap_err(), ValidationError::InvalidMarks);
    }

    #[test]
    fn test_inactive_tier_fields_not_validated() {
        let mut form = worked_example();
        form.edit(Field::Subject(Subject::Physics), "not a mark");
        form.edit(Field::Subject(Subject::Biology), "999");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_tier_boundary_submission() {
        let mut form = FormController::default();
        fill(&mut form, "8", "100", &[]);
        all_subjects(&mut form, "75");
        assert_eq!(form.submit().unwrap().breakdown.len(), 5);

        form.edit(Field::Grade, "9");
        let report = form.submit().unwrap();
        assert_eq!(report.breakdown.len(), 9);
        assert_eq!(report.breakdown.mark(Subject::Economics), Some(75.0));
        assert_eq!(report.breakdown.mark(Subject::Social), None);
    }

    #[test]
    fn test_attendance_displayed_with_single_rounding() {
        let mut form = worked_example();
        form.edit(Field::Attendance, "2.675");
        let report = form.submit().unwrap();
        assert_eq!(report.attendance, 2.67);
        assert_eq!(crate::output::format_fixed2(report.attendance), "2.67");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let mut form = worked_example();
        form.edit(Field::Grade, " 5 ");
        form.edit(Field::Attendance, " 90.0");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_error_cleared_on_success_and_report_replaced() {
        let mut form = worked_example();
        form.edit(Field::Grade, "0");
        assert!(form.submit().is_err());
        assert!(form.error().is_some());

        form.edit(Field::Grade, "5");
        let first = form.submit().unwrap().clone();
        assert_eq!(form.error(), None);

        form.edit(Field::Attendance, "50");
        let second = form.submit().unwrap().clone();
        assert_ne!(first, second);
        assert_eq!(second.attendance, 50.0);
        assert_eq!(form.report(), Some(&second));
    }

    #[test]
    fn test_failed_submission_keeps_previous_report() {
        let mut form = worked_example();
        let report = form.submit().unwrap().clone();
        form.edit(Field::Attendance, "101");
        assert!(form.submit().is_err());
        assert_eq!(form.report(), Some(&report));
        assert_eq!(form.error(), Some(ValidationError::InvalidAttendance));
    }

    #[test]
    fn test_resubmission_is_idempotent() {
        let mut form = worked_example();
        let first = form.submit().unwrap().clone();
        let second = form.submit().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_visible_tier() {
        let mut form = FormController::default();
        assert_eq!(form.visible_tier(), Some(Tier::Low));
        form.edit(Field::Grade, "8");
        assert_eq!(form.visible_tier(), Some(Tier::Low));
        form.edit(Field::Grade, "9");
        assert_eq!(form.visible_tier(), Some(Tier::High));
        form.edit(Field::Grade, "x");
        assert_eq!(form.visible_tier(), None);
    }

    #[test]
    fn test_visible_fields() {
        let mut form = FormController::default();
        form.edit(Field::Grade, "3");
        let labels: Vec<String> = form.visible_fields().iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec!["Grade (1-12)", "Maths", "Social", "Science", "English", "Tamil", "Attendance (%)"]
        );

        form.edit(Field::Grade, "11");
        assert_eq!(form.visible_fields().len(), 11);
        assert!(!form.visible_fields().contains(&Field::Subject(Subject::Social)));

        form.edit(Field::Grade, "?");
        assert_eq!(form.visible_fields().len(), 5);
    }
}

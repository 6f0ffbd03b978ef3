use crate::scoring::Subject;

/// An input slot on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Grade,
    Subject(Subject),
    Attendance,
}

impl Field {
    /// Every field in display order.
    pub const ALL: [Field; 13] = [
        Field::Grade,
        Field::Subject(Subject::Maths),
        Field::Subject(Subject::Biology),
        Field::Subject(Subject::Chemistry),
        Field::Subject(Subject::Physics),
        Field::Subject(Subject::History),
        Field::Subject(Subject::Geography),
        Field::Subject(Subject::Economics),
        Field::Subject(Subject::Social),
        Field::Subject(Subject::Science),
        Field::Subject(Subject::English),
        Field::Subject(Subject::Tamil),
        Field::Attendance,
    ];

    pub fn label(self) -> String {
        match self {
            Field::Grade => "Grade (1-12)".to_string(),
            Field::Subject(subject) => subject.name().to_string(),
            Field::Attendance => "Attendance (%)".to_string(),
        }
    }
}

/// Raw text of every form field. `None` until the field is first edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub grade: Option<String>,
    pub maths: Option<String>,
    pub biology: Option<String>,
    pub chemistry: Option<String>,
    pub physics: Option<String>,
    pub history: Option<String>,
    pub geography: Option<String>,
    pub economics: Option<String>,
    pub social: Option<String>,
    pub science: Option<String>,
    pub english: Option<String>,
    pub tamil: Option<String>,
    pub attendance: Option<String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Grade => &self.grade,
            Field::Attendance => &self.attendance,
            Field::Subject(subject) => match subject {
                Subject::Maths => &self.maths,
                Subject::Biology => &self.biology,
                Subject::Chemistry => &self.chemistry,
                Subject::Physics => &self.physics,
                Subject::History => &self.history,
                Subject::Geography => &self.geography,
                Subject::Economics => &self.economics,
                Subject::Social => &self.social,
                Subject::Science => &self.science,
                Subject::English => &self.english,
                Subject::Tamil => &self.tamil,
            },
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Grade => &mut self.grade,
            Field::Attendance => &mut self.attendance,
            Field::Subject(subject) => match subject {
                Subject::Maths => &mut self.maths,
                Subject::Biology => &mut self.biology,
                Subject::Chemistry => &mut self.chemistry,
                Subject::Physics => &mut self.physics,
                Subject::History => &mut self.history,
                Subject::Geography => &mut self.geography,
                Subject::Economics => &mut self.economics,
                Subject::Social => &mut self.social,
                Subject::Science => &mut self.science,
                Subject::English => &mut self.english,
                Subject::Tamil => &mut self.tamil,
            },
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Store `value` verbatim.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Text shown in the field, empty when never entered.
    pub fn text(&self, field: Field) -> &str {
        self.get(field).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_empty() {
        let form = FormInput::new();
        for field in Field::ALL {
            assert_eq!(form.get(field), None);
            assert_eq!(form.text(field), "");
        }
    }

    #[test]
    fn test_set_stores_verbatim() {
        let mut form = FormInput::new();
        form.set(Field::Grade, " 09 ");
        form.set(Field::Subject(Subject::Tamil), "abc");
        assert_eq!(form.get(Field::Grade), Some(" 09 "));
        assert_eq!(form.tamil.as_deref(), Some("abc"));
        assert_eq!(form.english, None);
    }

    #[test]
    fn test_each_field_has_own_slot() {
        let mut form = FormInput::new();
        for (i, field) in Field::ALL.iter().enumerate() {
            form.set(*field, i.to_string());
        }
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(form.get(*field), Some(i.to_string().as_str()));
        }
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::Grade.label(), "Grade (1-12)");
        assert_eq!(Field::Subject(Subject::Economics).label(), "Economics");
        assert_eq!(Field::Attendance.label(), "Attendance (%)");
    }
}

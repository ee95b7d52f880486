use crate::core::Field;
use crate::core::validation;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    Submit,
}

/// Values captured at a validation-passing submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Immutable snapshot of the contact form.
///
/// A field carries an error entry only once it has been validated — by an
/// edit of that field or by a submit attempt — and only while its current
/// value violates its rule. The pristine form renders clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
    errors: IndexMap<Field, String>,
    submission: Option<Submission>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn apply(&self, action: FormAction) -> FormState {
        let mut next = self.clone();
        match action {
            FormAction::Edit(field, value) => {
                next.set_value(field, value);
                match validation::validate_field(field, next.value(field)) {
                    Ok(()) => {
                        next.errors.shift_remove(&field);
                    }
                    Err(message) => {
                        next.errors.insert(field, message);
                    }
                }
            }
            FormAction::Submit => {
                next.errors = validation::validate_all(&next).into_iter().collect();
                if next.errors.is_empty() {
                    next.submission = Some(Submission {
                        first_name: next.first_name.clone(),
                        last_name: next.last_name.clone(),
                        email: next.email.clone(),
                        message: if next.message.is_empty() {
                            None
                        } else {
                            Some(next.message.clone())
                        },
                    });
                }
            }
        }
        next
    }

    fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormAction, FormState};
    use crate::core::Field;

    fn edit(form: &FormState, field: Field, value: &str) -> FormState {
        form.apply(FormAction::Edit(field, value.to_string()))
    }

    fn filled() -> FormState {
        let form = FormState::new();
        let form = edit(&form, Field::FirstName, "Hannah");
        let form = edit(&form, Field::LastName, "Brog");
        edit(&form, Field::Email, "han@gmail.com")
    }

    #[test]
    fn new_form_is_clean() {
        let form = FormState::new();
        assert_eq!(form.error_count(), 0);
        assert!(form.submission().is_none());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn short_first_name_sets_only_its_error() {
        let form = edit(&FormState::new(), Field::FirstName, "Amy");
        assert_eq!(
            form.error(Field::FirstName),
            Some("firstName must have at least 5 characters")
        );
        assert_eq!(form.error_count(), 1);
        assert!(form.error(Field::LastName).is_none());
        assert!(form.error(Field::Email).is_none());
    }

    #[test]
    fn valid_first_name_clears_the_error() {
        let form = edit(&FormState::new(), Field::FirstName, "Amy");
        let form = edit(&form, Field::FirstName, "Hannah");
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn invalid_email_sets_email_error() {
        let form = edit(&FormState::new(), Field::Email, "hello");
        assert_eq!(
            form.error(Field::Email),
            Some("email must be a valid email address")
        );
        assert_eq!(form.error_count(), 1);
    }

    #[test]
    fn message_never_errors() {
        let form = edit(&FormState::new(), Field::Message, "");
        assert_eq!(form.error_count(), 0);
        let form = edit(&form, Field::Message, "hello there");
        assert_eq!(form.error_count(), 0);
    }

    #[test]
    fn empty_submit_reports_three_errors() {
        let form = FormState::new().apply(FormAction::Submit);
        assert_eq!(form.error_count(), 3);
        assert_eq!(
            form.error(Field::FirstName),
            Some("firstName must have at least 5 characters")
        );
        assert_eq!(
            form.error(Field::LastName),
            Some("lastName is a required field")
        );
        assert_eq!(
            form.error(Field::Email),
            Some("email must be a valid email address")
        );
        assert!(form.error(Field::Message).is_none());
        assert!(form.submission().is_none());
    }

    #[test]
    fn submit_with_missing_email_reports_only_email() {
        let form = FormState::new();
        let form = edit(&form, Field::FirstName, "Hannah");
        let form = edit(&form, Field::LastName, "Brog");
        let form = form.apply(FormAction::Submit);
        assert_eq!(form.error_count(), 1);
        assert_eq!(
            form.error(Field::Email),
            Some("email must be a valid email address")
        );
        assert!(form.submission().is_none());
    }

    #[test]
    fn passing_submit_captures_values() {
        let form = filled().apply(FormAction::Submit);
        assert_eq!(form.error_count(), 0);
        let submission = form.submission().expect("submission");
        assert_eq!(submission.first_name, "Hannah");
        assert_eq!(submission.last_name, "Brog");
        assert_eq!(submission.email, "han@gmail.com");
        assert_eq!(submission.message, None);
    }

    #[test]
    fn passing_submit_includes_message_when_present() {
        let form = edit(&filled(), Field::Message, "hello there");
        let form = form.apply(FormAction::Submit);
        let submission = form.submission().expect("submission");
        assert_eq!(submission.message.as_deref(), Some("hello there"));
    }

    #[test]
    fn failed_submit_keeps_previous_submission() {
        let form = filled().apply(FormAction::Submit);
        let form = edit(&form, Field::Email, "broken");
        let form = form.apply(FormAction::Submit);
        assert_eq!(form.error_count(), 1);
        let submission = form.submission().expect("earlier submission survives");
        assert_eq!(submission.email, "han@gmail.com");
    }

    #[test]
    fn apply_leaves_the_receiver_untouched() {
        let original = FormState::new();
        let edited = edit(&original, Field::FirstName, "Amy");
        assert_eq!(original, FormState::new());
        assert_ne!(original, edited);
        // re-applying the same edit is idempotent
        assert_eq!(edited, edit(&edited, Field::FirstName, "Amy"));
    }

    #[test]
    fn submission_serializes_without_absent_message() {
        let form = filled().apply(FormAction::Submit);
        let json = serde_json::to_value(form.submission().expect("submission"))
            .expect("serializable");
        assert_eq!(json["firstName"], "Hannah");
        assert_eq!(json["lastName"], "Brog");
        assert_eq!(json["email"], "han@gmail.com");
        assert!(json.get("message").is_none());
    }
}

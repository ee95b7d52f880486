use crate::core::Field;
use crate::core::form::FormState;
use crate::input::validators::{self, Validator};

pub fn validators_for(field: Field) -> Vec<Validator> {
    match field {
        Field::FirstName => vec![validators::min_length(Field::FirstName.name(), 5)],
        Field::LastName => vec![validators::required(Field::LastName.name())],
        Field::Email => vec![validators::email(Field::Email.name())],
        Field::Message => Vec::new(),
    }
}

pub fn validate_field(field: Field, value: &str) -> Result<(), String> {
    for validator in validators_for(field) {
        validator(value)?;
    }
    Ok(())
}

pub fn validate_all(form: &FormState) -> Vec<(Field, String)> {
    Field::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, form.value(field))
                .err()
                .map(|message| (field, message))
        })
        .collect()
}

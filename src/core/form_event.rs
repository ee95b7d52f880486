use crate::core::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ValueChanged { field: Field, value: String },
    SubmitRequested,
}

//! Form descriptions for the modal flows and the validation applied when a
//! form is submitted.
//!
//! A [`FormSpec`] says which fields exist and what they accept; the
//! presentation layer turns it into inputs and hands the raw strings back as a
//! [`FormSubmission`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Transfer,
    Payment,
    AddPayee,
    AddGoal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Display-only value, never submitted
    ReadOnly { value: String },
    Text { max_length: Option<usize> },
    Number { min: f64, step: f64 },
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key used in the submission
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl FieldSpec {
    pub fn read_only(name: &str, label: &str, value: String) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::ReadOnly { value },
            required: false,
            placeholder: None,
        }
    }

    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text { max_length: None },
            required: true,
            placeholder: Some(placeholder.to_string()),
        }
    }

    pub fn amount(name: &str, label: &str, min: f64, step: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Number { min, step },
            required: true,
            placeholder: Some("0.00".to_string()),
        }
    }

    pub fn select(name: &str, label: &str, placeholder: Option<&str>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select { options },
            required: true,
            placeholder: placeholder.map(str::to_string),
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        if let FieldKind::Text { max_length } = &mut self.kind {
            *max_length = Some(max);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSpec {
    pub kind: FormKind,
    pub fields: Vec<FieldSpec>,
}

/// Raw field values keyed by field name, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    values: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Missing fields read as empty, like an untouched input
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Amount(f64),
    Choice(String),
}

/// A submission that passed validation, with amounts already parsed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedForm {
    values: BTreeMap<String, FieldValue>,
}

impl ValidatedForm {
    pub fn amount(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(FieldValue::Amount(amount)) => Some(*amount),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(FieldValue::Text(value)) | Some(FieldValue::Choice(value)) => Some(value),
            _ => None,
        }
    }
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Check every field in display order and stop at the first problem.
    pub fn validate(&self, submission: &FormSubmission) -> Result<ValidatedForm, ValidationError> {
        let mut validated = ValidatedForm::default();

        for field in &self.fields {
            let raw = submission.get(&field.name).trim();
            let value = match &field.kind {
                FieldKind::ReadOnly { .. } => continue,
                _ if raw.is_empty() => {
                    if field.required {
                        return Err(ValidationError::MissingField(field.label.clone()));
                    }
                    continue;
                }
                FieldKind::Text { max_length } => {
                    if let Some(max) = max_length {
                        if raw.chars().count() > *max {
                            return Err(ValidationError::FieldTooLong(field.label.clone(), *max));
                        }
                    }
                    FieldValue::Text(raw.to_string())
                }
                FieldKind::Number { min, .. } => {
                    let amount = parse_amount(&field.label, raw)?;
                    if amount < *min {
                        return Err(ValidationError::AmountBelowMinimum(field.label.clone(), *min));
                    }
                    FieldValue::Amount(amount)
                }
                FieldKind::Select { options } => {
                    if !options.iter().any(|option| option.value == raw) {
                        return Err(ValidationError::UnknownOption(field.label.clone(), raw.to_string()));
                    }
                    FieldValue::Choice(raw.to_string())
                }
            };
            validated.values.insert(field.name.clone(), value);
        }

        Ok(validated)
    }
}

/// Accepts "50", "50.00", "£1,250.00"
fn parse_amount(label: &str, raw: &str) -> Result<f64, ValidationError> {
    let cleaned = raw.replace(['£', ',', ' '], "");
    let amount = cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ValidationError::InvalidAmount(label.to_string(), raw.to_string()))?;
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive(label.to_string()));
    }
    Ok(amount)
}

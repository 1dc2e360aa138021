use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_connector::NewInquiry;

/// One field-level validation failure, serialized into 400 bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

impl FieldViolation {
    fn new(field: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Validate an untyped submission payload into a `NewInquiry`, or collect the
/// full violation list in field order (name, email, phone, postcode, service,
/// message). Unknown keys, including any client-supplied id or createdAt, are
/// ignored. Never panics.
pub fn validate_inquiry(payload: &Value) -> Result<NewInquiry, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = string_field(payload, "name").filter(|v| v.chars().count() >= 2);
    if name.is_none() {
        violations.push(FieldViolation::new("name", "Name is required"));
    }

    let email = string_field(payload, "email").filter(|v| is_plausible_email(v));
    if email.is_none() {
        violations.push(FieldViolation::new("email", "Invalid email address"));
    }

    let phone = match optional_string_field(payload, "phone") {
        Ok(value) => value,
        Err(()) => {
            violations.push(FieldViolation::new("phone", "Expected a string"));
            None
        }
    };

    let postcode = match optional_string_field(payload, "postcode") {
        Ok(value) => value,
        Err(()) => {
            violations.push(FieldViolation::new("postcode", "Expected a string"));
            None
        }
    };

    let service = string_field(payload, "service").filter(|v| !v.is_empty());
    if service.is_none() {
        violations.push(FieldViolation::new("service", "Please select a service"));
    }

    let message = string_field(payload, "message").filter(|v| v.chars().count() >= 10);
    if message.is_none() {
        violations.push(FieldViolation::new(
            "message",
            "Message must be at least 10 characters",
        ));
    }

    match (name, email, service, message) {
        (Some(name), Some(email), Some(service), Some(message)) if violations.is_empty() => {
            Ok(NewInquiry {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.map(str::to_string),
                postcode: postcode.map(str::to_string),
                service: service.to_string(),
                message: message.to_string(),
            })
        }
        _ => Err(violations),
    }
}

fn string_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload.get(key).and_then(Value::as_str)
}

/// Optional fields pass through unvalidated, but must be strings when present.
/// Null counts as absent.
fn optional_string_field<'a>(payload: &'a Value, key: &str) -> Result<Option<&'a str>, ()> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(()),
    }
}

/// RFC-plausible address check: exactly one `@`, non-empty local part, a
/// domain containing an interior dot, and no whitespace anywhere.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

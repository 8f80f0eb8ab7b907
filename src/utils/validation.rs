use crate::utils::error::{Result, TicketError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// IATA 機場代碼：三個大寫英文字母
pub fn validate_airport_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Airport code must be three uppercase letters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_distinct(field_name: &str, left: &str, right: &str) -> Result<()> {
    if left == right {
        return Err(TicketError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} -> {}", left, right),
            reason: "Origin and destination must differ".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TicketError::MissingConfigError {
        field: field_name.to_string(),
    })
}

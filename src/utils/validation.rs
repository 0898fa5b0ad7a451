use crate::utils::error::{ClockError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ClockError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(ClockError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ClockError::ConfigError {
            message: format!(
                "{}: unsupported value '{}'. Valid values: {}",
                field_name,
                value,
                allowed.join(", ")
            ),
        });
    }
    Ok(())
}

/// Inclusive range check shared by every clock field and advance amount.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ClockError::invalid_argument(
            field_name,
            value,
            format!("value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(ClockError::invalid_argument(
            field_name,
            value,
            "amount must not be negative",
        ));
    }
    Ok(())
}

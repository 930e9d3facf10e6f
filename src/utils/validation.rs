use crate::utils::error::ValidationError;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<(), ValidationError> {
    if url_str.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ValidationError::InvalidValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ValidationError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(
    field_name: &str,
    value: &'a Option<T>,
) -> Result<&'a T, ValidationError> {
    value.as_ref().ok_or_else(|| ValidationError::MissingField {
        field: field_name.to_string(),
    })
}

pub fn validate_not_empty(field_name: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_charset(
    field_name: &str,
    value: &str,
    allowed: impl Fn(char) -> bool,
    description: &str,
) -> Result<(), ValidationError> {
    if !value.chars().all(allowed) {
        return Err(ValidationError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value can only contain {}", description),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com").is_ok());
        assert!(validate_url("endpoint", "http://localhost:8000").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("Ada".to_string());
        assert_eq!(validate_required_field("name", &present).unwrap(), "Ada");

        let absent: Option<String> = None;
        assert!(matches!(
            validate_required_field("name", &absent),
            Err(ValidationError::MissingField { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Ada").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
        assert!(validate_not_empty("name", "").is_err());
        assert!(validate_not_empty("name", "   ").is_ok());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("page_size", 25, 1, 1000).is_ok());
        assert!(validate_range("page_size", 0, 1, 1000).is_err());
        assert!(validate_range("page_size", 1001, 1, 1000).is_err());
    }
}

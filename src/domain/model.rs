use crate::utils::error::ValidationError;
use crate::utils::validation::{validate_not_empty, validate_required_field, Validate};
use serde::{Deserialize, Serialize};

/// A stored person. `id` is assigned on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePerson {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerson {
    pub name: Option<String>,
}

fn validate_name(name: &Option<String>) -> Result<(), ValidationError> {
    let name = validate_required_field("name", name)?;
    validate_not_empty("name", name)
}

impl Validate for CreatePerson {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

impl Validate for UpdatePerson {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

impl CreatePerson {
    pub fn into_name(self) -> Result<String, ValidationError> {
        self.validate()?;
        Ok(self.name.unwrap_or_default())
    }
}

impl UpdatePerson {
    pub fn into_name(self) -> Result<String, ValidationError> {
        self.validate()?;
        Ok(self.name.unwrap_or_default())
    }
}

/// Body of every JSON response. Exactly one of the two fields is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error_message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error_message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_person_requires_name() {
        let missing: CreatePerson = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            missing.into_name(),
            Err(ValidationError::MissingField { .. })
        ));

        let null: CreatePerson = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert!(null.into_name().is_err());

        let empty: CreatePerson = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(matches!(
            empty.into_name(),
            Err(ValidationError::InvalidValue { .. })
        ));

        // Only the empty string is rejected.
        let spaces: CreatePerson = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert_eq!(spaces.into_name().unwrap(), "  ");

        let ok: CreatePerson = serde_json::from_str(r#"{"name": "Ada", "age": 36}"#).unwrap();
        assert_eq!(ok.into_name().unwrap(), "Ada");
    }

    #[test]
    fn test_update_person_requires_name() {
        let ok: UpdatePerson = serde_json::from_str(r#"{"name": "Ada L."}"#).unwrap();
        assert_eq!(ok.into_name().unwrap(), "Ada L.");

        let empty: UpdatePerson = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(empty.into_name().is_err());
    }

    #[test]
    fn test_envelope_shape() {
        let person = Person {
            id: "42".to_string(),
            name: "Ada".to_string(),
        };
        let success = serde_json::to_value(Envelope::success(&person)).unwrap();
        assert_eq!(
            success,
            json!({"data": {"id": "42", "name": "Ada"}, "errorMessage": null})
        );

        let failure = serde_json::to_value(Envelope::<()>::failure("Not Found")).unwrap();
        assert_eq!(failure, json!({"data": null, "errorMessage": "Not Found"}));
    }
}

//! User record and write DTO.
//!
//! [`User`] is what the store holds and the API returns. [`UserDto`] is the
//! body accepted by create and update; any `Id` it carries is ignored because
//! ids are assigned by the store.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: String,
}

impl User {
    pub fn from_dto(id: i32, dto: UserDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            department: dto.department,
        }
    }

    /// Overwrites every field except the id.
    pub fn apply(&mut self, dto: UserDto) {
        self.first_name = dto.first_name;
        self.last_name = dto.last_name;
        self.email = dto.email;
        self.department = dto.department;
    }
}

/// Required string fields must contain something other than whitespace.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Absent or `null` fields deserialize to empty strings so that missing
/// required fields surface as validation errors rather than parse errors.
/// camelCase names are accepted alongside the PascalCase ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    #[serde(
        default,
        alias = "firstName",
        deserialize_with = "crate::de::string_or_null"
    )]
    #[validate(custom(function = "not_blank", message = "The FirstName field is required."))]
    pub first_name: String,
    #[serde(
        default,
        alias = "lastName",
        deserialize_with = "crate::de::string_or_null"
    )]
    #[validate(custom(function = "not_blank", message = "The LastName field is required."))]
    pub last_name: String,
    #[serde(
        default,
        alias = "email",
        deserialize_with = "crate::de::string_or_null"
    )]
    #[validate(custom(function = "not_blank", message = "The Email field is required."))]
    pub email: String,
    #[serde(
        default,
        alias = "department",
        deserialize_with = "crate::de::string_or_null"
    )]
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> UserDto {
        UserDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: String::new(),
        }
    }

    #[test]
    fn test_user_serializes_pascal_case() {
        let user = User::from_dto(4, valid_dto());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["Id"], 4);
        assert_eq!(value["FirstName"], "Ada");
        assert_eq!(value["LastName"], "Lovelace");
        assert_eq!(value["Email"], "ada@example.com");
        assert_eq!(value["Department"], "");
    }

    #[test]
    fn test_dto_ignores_id_and_accepts_camel_case() {
        let dto: UserDto = serde_json::from_str(
            r#"{"Id":99,"firstName":"Grace","lastName":"Hopper","email":"grace@navy.mil","department":"Compilers"}"#,
        )
        .unwrap();

        assert_eq!(dto.first_name, "Grace");
        assert_eq!(dto.last_name, "Hopper");
        assert_eq!(dto.email, "grace@navy.mil");
        assert_eq!(dto.department, "Compilers");
    }

    #[test]
    fn test_dto_missing_and_null_fields_default_to_empty() {
        let dto: UserDto = serde_json::from_str(r#"{"FirstName":"A","Department":null}"#).unwrap();

        assert_eq!(dto.first_name, "A");
        assert!(dto.last_name.is_empty());
        assert!(dto.email.is_empty());
        assert!(dto.department.is_empty());
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_department_is_optional() {
        let dto = UserDto {
            department: String::new(),
            ..valid_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_email_format_is_not_checked() {
        let dto = UserDto {
            email: "not-an-email".to_string(),
            ..valid_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_reports_every_missing_field() {
        let errors = UserDto::default().validate().unwrap_err();
        let field_errors = errors.field_errors();

        assert_eq!(field_errors.len(), 3);

        let mut messages: Vec<String> = field_errors
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .collect();
        messages.sort();

        assert_eq!(
            messages,
            vec![
                "The Email field is required.",
                "The FirstName field is required.",
                "The LastName field is required.",
            ]
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let dto = UserDto {
            first_name: "   ".to_string(),
            last_name: " ".to_string(),
            email: "\t".to_string(),
            department: String::new(),
        };
        let errors = dto.validate().unwrap_err();

        assert_eq!(errors.field_errors().len(), 3);
        assert_eq!(
            errors.field_errors()["first_name"][0].message.as_deref(),
            Some("The FirstName field is required.")
        );
    }

    #[test]
    fn test_padded_values_are_kept_as_sent() {
        let dto = UserDto {
            first_name: " Ada ".to_string(),
            ..valid_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = User::from_dto(2, valid_dto());
        user.apply(UserDto {
            department: "Engineering".to_string(),
            ..valid_dto()
        });

        assert_eq!(user.id, 2);
        assert_eq!(user.department, "Engineering");
    }
}

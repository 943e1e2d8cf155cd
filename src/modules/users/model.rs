use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A registered user account.
///
/// `email_address` is unique and doubles as the login name presented in
/// Basic auth credentials. The `password` column holds a bcrypt hash and is
/// never serialized into a response.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public profile fields returned by `GET /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}

/// DTO for registering a new user.
///
/// Fields are optional at the deserialization layer so that a single
/// request reports every violated constraint at once instead of failing on
/// the first missing field.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(
        required(message = "A first name is required"),
        length(min = 1, message = "Please provide a first name")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "A last name is required"),
        length(min = 1, message = "Please provide a last name")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "An email address is required"),
        email(message = "Please provide a valid email address")
    )]
    pub email_address: Option<String>,
    #[validate(
        required(message = "A password is required"),
        length(
            min = 8,
            max = 20,
            message = "The password should be between 8 and 20 characters in length"
        )
    )]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(dto: &CreateUserDto) -> Vec<String> {
        let Err(errors) = dto.validate() else {
            return vec![];
        };
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter().filter_map(|e| e.message.as_deref()))
            .map(String::from)
            .collect()
    }

    fn valid_dto() -> CreateUserDto {
        CreateUserDto {
            first_name: Some("Joe".to_string()),
            last_name: Some("Smith".to_string()),
            email_address: Some("joe@smith.com".to_string()),
            password: Some("joepassword".to_string()),
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_body_reports_every_missing_field() {
        let dto = CreateUserDto {
            first_name: None,
            last_name: None,
            email_address: None,
            password: None,
        };

        let msgs = messages(&dto);
        assert_eq!(msgs.len(), 4);
        assert!(msgs.contains(&"A first name is required".to_string()));
        assert!(msgs.contains(&"A last name is required".to_string()));
        assert!(msgs.contains(&"An email address is required".to_string()));
        assert!(msgs.contains(&"A password is required".to_string()));
    }

    #[test]
    fn test_empty_first_name_is_rejected() {
        let dto = CreateUserDto {
            first_name: Some("".to_string()),
            ..valid_dto()
        };

        assert!(messages(&dto).contains(&"Please provide a first name".to_string()));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let dto = CreateUserDto {
            email_address: Some("not-an-email".to_string()),
            ..valid_dto()
        };

        assert!(messages(&dto).contains(&"Please provide a valid email address".to_string()));
    }

    #[test]
    fn test_password_length_bounds() {
        let too_short = CreateUserDto {
            password: Some("short".to_string()),
            ..valid_dto()
        };
        let too_long = CreateUserDto {
            password: Some("a".repeat(21)),
            ..valid_dto()
        };

        let expected =
            "The password should be between 8 and 20 characters in length".to_string();
        assert!(messages(&too_short).contains(&expected));
        assert!(messages(&too_long).contains(&expected));
    }

    #[test]
    fn test_profile_omits_password() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
            password: "$2b$12$notarealhash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let serialized = serde_json::to_string(&UserProfile::from(user)).unwrap();
        assert!(serialized.contains("joe@smith.com"));
        assert!(!serialized.contains("password"));
        assert!(!serialized.contains("notarealhash"));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A course as stored.
///
/// `user_id` references the owning user; it is set at creation from the
/// authenticated identity and never changes afterwards.
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub materials_needed: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner fields joined onto course responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct CourseOwner {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// A course together with the user that owns it, as returned by the read
/// endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseWithOwner {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub materials_needed: String,
    pub owner: CourseOwner,
}

/// Flat row produced by the explicit join against `users`.
#[derive(Debug, FromRow)]
pub struct CourseWithOwnerRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub materials_needed: String,
    pub owner_id: Uuid,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email_address: String,
}

impl From<CourseWithOwnerRow> for CourseWithOwner {
    fn from(row: CourseWithOwnerRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            estimated_time: row.estimated_time,
            materials_needed: row.materials_needed,
            owner: CourseOwner {
                id: row.owner_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email_address: row.owner_email_address,
            },
        }
    }
}

/// DTO for creating a course. The owner is taken from the authenticated
/// user, never from the body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(
        required(message = "A title is required"),
        length(min = 1, message = "Please provide a title")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "A description is required"),
        length(min = 1, message = "Please provide a description")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "An estimated time is required"),
        length(min = 1, message = "Please provide an estimated time")
    )]
    pub estimated_time: Option<String>,
    #[validate(
        required(message = "A list of needed materials is required"),
        length(min = 1, message = "Please provide the needed materials")
    )]
    pub materials_needed: Option<String>,
}

/// DTO for updating a course. Updates replace the full payload, so the
/// constraints match creation.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCourseDto {
    #[validate(
        required(message = "A title is required"),
        length(min = 1, message = "Please provide a title")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "A description is required"),
        length(min = 1, message = "Please provide a description")
    )]
    pub description: Option<String>,
    #[validate(
        required(message = "An estimated time is required"),
        length(min = 1, message = "Please provide an estimated time")
    )]
    pub estimated_time: Option<String>,
    #[validate(
        required(message = "A list of needed materials is required"),
        length(min = 1, message = "Please provide the needed materials")
    )]
    pub materials_needed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages<T: Validate>(dto: &T) -> Vec<String> {
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

    #[test]
    fn test_create_dto_reports_every_missing_field() {
        let dto = CreateCourseDto {
            title: None,
            description: None,
            estimated_time: None,
            materials_needed: None,
        };

        let msgs = messages(&dto);
        assert_eq!(msgs.len(), 4);
        assert!(msgs.contains(&"A title is required".to_string()));
        assert!(msgs.contains(&"A description is required".to_string()));
        assert!(msgs.contains(&"An estimated time is required".to_string()));
        assert!(msgs.contains(&"A list of needed materials is required".to_string()));
    }

    #[test]
    fn test_create_dto_rejects_empty_title() {
        let dto = CreateCourseDto {
            title: Some("".to_string()),
            description: Some("How to build REST APIs".to_string()),
            estimated_time: Some("4 hours".to_string()),
            materials_needed: Some("Laptop".to_string()),
        };

        assert!(messages(&dto).contains(&"Please provide a title".to_string()));
    }

    #[test]
    fn test_update_dto_requires_full_payload() {
        let dto = UpdateCourseDto {
            title: Some("Updated title".to_string()),
            description: None,
            estimated_time: Some("2 hours".to_string()),
            materials_needed: Some("Notebook".to_string()),
        };

        assert!(messages(&dto).contains(&"A description is required".to_string()));
    }

    #[test]
    fn test_row_flattens_into_owner() {
        let row = CourseWithOwnerRow {
            id: Uuid::new_v4(),
            title: "Build a Basic Bookcase".to_string(),
            description: "High-end furniture projects".to_string(),
            estimated_time: "12 hours".to_string(),
            materials_needed: "Drill press".to_string(),
            owner_id: Uuid::new_v4(),
            owner_first_name: "Joe".to_string(),
            owner_last_name: "Smith".to_string(),
            owner_email_address: "joe@smith.com".to_string(),
        };
        let owner_id = row.owner_id;

        let course = CourseWithOwner::from(row);
        assert_eq!(course.owner.id, owner_id);
        assert_eq!(course.owner.email_address, "joe@smith.com");
        assert_eq!(course.title, "Build a Basic Bookcase");
    }
}

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::modules::courses::model::{
    Course, CourseWithOwner, CourseWithOwnerRow, CreateCourseDto, UpdateCourseDto,
};
use crate::utils::errors::AppError;

const COURSE_WITH_OWNER_SELECT: &str = "SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
            u.id AS owner_id, u.first_name AS owner_first_name,
            u.last_name AS owner_last_name, u.email_address AS owner_email_address
     FROM courses c
     JOIN users u ON u.id = c.user_id";

pub struct CourseService;

impl CourseService {
    pub async fn create_course(
        db: &PgPool,
        owner_id: Uuid,
        dto: CreateCourseDto,
    ) -> Result<Course, AppError> {
        // ValidatedJson has already enforced presence of every field.
        let (Some(title), Some(description), Some(estimated_time), Some(materials_needed)) = (
            dto.title,
            dto.description,
            dto.estimated_time,
            dto.materials_needed,
        ) else {
            return Err(AppError::validation(vec![
                "Invalid request body".to_string(),
            ]));
        };

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, description, estimated_time, materials_needed, user_id,
                       created_at, updated_at",
        )
        .bind(&title)
        .bind(&description)
        .bind(&estimated_time)
        .bind(&materials_needed)
        .bind(owner_id)
        .fetch_one(db)
        .await
        .context("Failed to insert course")?;

        info!(course.id = %course.id, owner.id = %owner_id, "Course created");

        Ok(course)
    }

    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<CourseWithOwner>, AppError> {
        let query = format!("{COURSE_WITH_OWNER_SELECT} ORDER BY c.created_at");
        let rows = sqlx::query_as::<_, CourseWithOwnerRow>(&query)
            .fetch_all(db)
            .await
            .context("Failed to fetch courses")?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    pub async fn get_course_with_owner(
        db: &PgPool,
        id: Uuid,
    ) -> Result<CourseWithOwner, AppError> {
        let query = format!("{COURSE_WITH_OWNER_SELECT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CourseWithOwnerRow>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch course")?
            .ok_or_else(|| AppError::not_found(format!("Course with id {} not found", id)))?;

        Ok(CourseWithOwner::from(row))
    }

    /// Fetch the raw course record. Mutating handlers call this before the
    /// ownership check so absence surfaces as 404, not 403.
    pub async fn get_course(db: &PgPool, id: Uuid) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, estimated_time, materials_needed, user_id,
                    created_at, updated_at
             FROM courses
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course")?
        .ok_or_else(|| AppError::not_found(format!("Course with id {} not found", id)))?;

        Ok(course)
    }

    pub async fn update_course(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCourseDto,
    ) -> Result<(), AppError> {
        let (Some(title), Some(description), Some(estimated_time), Some(materials_needed)) = (
            dto.title,
            dto.description,
            dto.estimated_time,
            dto.materials_needed,
        ) else {
            return Err(AppError::validation(vec![
                "Invalid request body".to_string(),
            ]));
        };

        let result = sqlx::query(
            "UPDATE courses
             SET title = $2, description = $3, estimated_time = $4, materials_needed = $5,
                 updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&title)
        .bind(&description)
        .bind(&estimated_time)
        .bind(&materials_needed)
        .execute(db)
        .await
        .context("Failed to update course")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Course with id {} not found",
                id
            )));
        }

        info!(course.id = %id, "Course updated");

        Ok(())
    }

    pub async fn delete_course(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Course with id {} not found",
                id
            )));
        }

        info!(course.id = %id, "Course deleted");

        Ok(())
    }
}

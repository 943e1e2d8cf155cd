use axum::http::{StatusCode, header};
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::courses::model::{CourseWithOwner, CreateCourseDto, UpdateCourseDto};
use crate::modules::courses::service::CourseService;
use crate::modules::users::controller::{MessageResponse, ValidationErrorResponse};
use crate::state::AppState;
use crate::utils::auth_helpers::ensure_course_owner;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all courses with their owners
#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses, each with its owner", body = Vec<CourseWithOwner>)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseWithOwner>>, AppError> {
    let courses = CourseService::get_all_courses(&state.db).await?;
    Ok(Json(courses))
}

/// Get a single course with its owner
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The course with its owner", body = CourseWithOwner),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseWithOwner>, AppError> {
    let course = CourseService::get_course_with_owner(&state.db, id).await?;
    Ok(Json(course))
}

/// Create a course owned by the authenticated user
#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created, Location header set to the new course"),
        (status = 400, description = "Validation failure", body = ValidationErrorResponse),
        (status = 401, description = "Access denied", body = MessageResponse)
    ),
    security(("basic_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1]), AppError> {
    let course = CourseService::create_course(&state.db, auth_user.0.id, dto).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/courses/{}", course.id))],
    ))
}

/// Update a course owned by the authenticated user
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 204, description = "Course updated"),
        (status = 400, description = "Validation failure", body = ValidationErrorResponse),
        (status = 401, description = "Access denied", body = MessageResponse),
        (status = 403, description = "Authenticated user does not own the course"),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    security(("basic_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCourseDto>,
) -> Result<StatusCode, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    ensure_course_owner(&auth_user, course.user_id)?;

    CourseService::update_course(&state.db, id, dto).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a course owned by the authenticated user
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 401, description = "Access denied", body = MessageResponse),
        (status = 403, description = "Authenticated user does not own the course"),
        (status = 404, description = "Course not found", body = MessageResponse)
    ),
    security(("basic_auth" = [])),
    tag = "Courses"
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let course = CourseService::get_course(&state.db, id).await?;
    ensure_course_owner(&auth_user, course.user_id)?;

    CourseService::delete_course(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

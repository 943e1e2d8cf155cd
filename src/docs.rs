use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::courses::model::{
    CourseOwner, CourseWithOwner, CreateCourseDto, UpdateCourseDto,
};
use crate::modules::users::controller::{MessageResponse, ValidationErrorResponse};
use crate::modules::users::model::{CreateUserDto, UserProfile};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::get_current_user,
        crate::modules::users::controller::create_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            UserProfile,
            CreateUserDto,
            CourseOwner,
            CourseWithOwner,
            CreateCourseDto,
            UpdateCourseDto,
            MessageResponse,
            ValidationErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User registration and the authenticated profile"),
        (name = "Courses", description = "Course catalog with ownership-gated mutations")
    ),
    info(
        title = "Coursebook API",
        version = "0.1.0",
        description = "A REST API built with Rust, Axum, and PostgreSQL exposing users and courses, with HTTP Basic authentication on write operations.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

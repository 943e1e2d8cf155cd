use axum::body::Body;
use axum::http::Request;
use axum_extra::headers::{Authorization, HeaderMapExt};
use coursebook::config::cors::CorsConfig;
use coursebook::router::init_router;
use coursebook::state::AppState;
use coursebook::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Insert a user directly, hashing the password the way registration does.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, email: &str, password: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email_address, password)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, owner: &TestUser, title: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(title)
    .bind("A course seeded for tests")
    .bind("4 hours")
    .bind("Notebook")
    .bind(owner.id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Attach an `Authorization: Basic` header for the given credentials.
#[allow(dead_code)]
pub fn with_basic_auth(mut request: Request<Body>, email: &str, password: &str) -> Request<Body> {
    request
        .headers_mut()
        .typed_insert(Authorization::basic(email, password));
    request
}

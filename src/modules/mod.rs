//! Feature modules.
//!
//! Each module follows the same structure: `controller.rs` for HTTP
//! handlers, `service.rs` for business logic against the database,
//! `model.rs` for entities and DTOs, `router.rs` for route wiring.

pub mod courses;
pub mod users;

pub mod app;
pub mod authz;
pub mod config;
pub mod docs;
pub mod errors;
pub mod models;
pub mod routes;
pub mod utils;

// Re-export commonly used items for tests
pub use app::create_app;
pub use authz::{can, Action, Principal, Role};
pub use models::Resource;

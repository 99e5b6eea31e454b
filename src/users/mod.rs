pub mod dto;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod validation;

pub use dto::NewUser;
pub use repo_types::{User, UserStatus};
pub use services::UserRegistry;
pub use validation::UserValidationError;

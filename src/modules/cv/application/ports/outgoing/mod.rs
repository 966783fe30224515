pub mod cv_repository;
pub use cv_repository::{CVRepository, CVRepositoryError};

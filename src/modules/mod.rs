pub mod auth;
pub mod cv;

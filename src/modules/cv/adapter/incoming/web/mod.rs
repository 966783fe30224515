pub mod routes;
pub mod upsert_request;

pub use upsert_request::UpsertCVRequest;

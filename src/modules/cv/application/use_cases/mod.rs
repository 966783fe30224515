pub mod delete_cv;
pub mod fetch_or_create_cv;
pub mod upsert_cv;

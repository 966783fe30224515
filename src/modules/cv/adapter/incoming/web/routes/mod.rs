mod delete_cv;
mod get_cv;
mod upsert_cv;

pub use delete_cv::*;
pub use get_cv::*;
pub use upsert_cv::*;

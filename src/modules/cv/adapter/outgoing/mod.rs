pub(crate) mod cv_repo_postgres;
mod sea_orm_entity;

pub use cv_repo_postgres::CVRepoPostgres;

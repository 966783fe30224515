use crate::cv::application::use_cases::{
    delete_cv::IDeleteCVUseCase, fetch_or_create_cv::IFetchOrCreateCVUseCase,
    upsert_cv::IUpsertCVUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    fetch_or_create_cv: Arc<dyn IFetchOrCreateCVUseCase + Send + Sync>,
    upsert_cv: Arc<dyn IUpsertCVUseCase + Send + Sync>,
    delete_cv: Arc<dyn IDeleteCVUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            fetch_or_create_cv: Arc::new(StubFetchOrCreateCVUseCase),
            upsert_cv: Arc::new(StubUpsertCVUseCase),
            delete_cv: Arc::new(StubDeleteCVUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_fetch_or_create_cv(
        mut self,
        uc: impl IFetchOrCreateCVUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_or_create_cv = Arc::new(uc);
        self
    }

    pub fn with_upsert_cv(mut self, uc: impl IUpsertCVUseCase + Send + Sync + 'static) -> Self {
        self.upsert_cv = Arc::new(uc);
        self
    }

    pub fn with_delete_cv(mut self, uc: impl IDeleteCVUseCase + Send + Sync + 'static) -> Self {
        self.delete_cv = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            fetch_or_create_cv_use_case: self.fetch_or_create_cv,
            upsert_cv_use_case: self.upsert_cv,
            delete_cv_use_case: self.delete_cv,
        })
    }
}

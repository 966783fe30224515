use async_trait::async_trait;
use uuid::Uuid;

use crate::cv::application::use_cases::{
    delete_cv::{DeleteCVError, IDeleteCVUseCase},
    fetch_or_create_cv::{FetchOrCreateCVError, IFetchOrCreateCVUseCase},
    upsert_cv::{IUpsertCVUseCase, UpsertCVError},
};
use crate::cv::domain::{CvPatch, CvRecord};

#[derive(Default, Clone)]
pub struct StubFetchOrCreateCVUseCase;

#[async_trait]
impl IFetchOrCreateCVUseCase for StubFetchOrCreateCVUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<CvRecord, FetchOrCreateCVError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertCVUseCase;

#[async_trait]
impl IUpsertCVUseCase for StubUpsertCVUseCase {
    async fn execute(&self, _user_id: Uuid, _patch: CvPatch) -> Result<CvRecord, UpsertCVError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCVUseCase;

#[async_trait]
impl IDeleteCVUseCase for StubDeleteCVUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteCVError> {
        unimplemented!("Not used in this test")
    }
}

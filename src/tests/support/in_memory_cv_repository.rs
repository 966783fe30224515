use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::cv::application::ports::outgoing::{CVRepository, CVRepositoryError};
use crate::cv::domain::{CvContent, CvRecord};

/// `CVRepository` over a shared map, keyed by owner. Clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryCVRepository {
    records: Arc<Mutex<HashMap<Uuid, CvRecord>>>,
    creates: Arc<Mutex<usize>>,
}

impl InMemoryCVRepository {
    pub fn create_count(&self) -> usize {
        *self.creates.lock().unwrap()
    }

    pub fn stored(&self, user_id: Uuid) -> Option<CvRecord> {
        self.records.lock().unwrap().get(&user_id).cloned()
    }
}

#[async_trait]
impl CVRepository for InMemoryCVRepository {
    async fn fetch_cv_by_user_id(&self, user_id: Uuid) -> Result<Option<CvRecord>, CVRepositoryError> {
        Ok(self.stored(user_id))
    }

    async fn create_cv(&self, user_id: Uuid, content: CvContent) -> Result<CvRecord, CVRepositoryError> {
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&user_id) {
            return Err(CVRepositoryError::DatabaseError(
                "duplicate key value violates unique constraint \"uq_cvs_user_id\"".to_string(),
            ));
        }

        let now = Utc::now();
        let record = CvRecord {
            id: Uuid::new_v4(),
            user_id,
            content,
            created_at: now,
            updated_at: now,
        };
        records.insert(user_id, record.clone());
        *self.creates.lock().unwrap() += 1;
        Ok(record)
    }

    async fn update_cv(&self, user_id: Uuid, content: CvContent) -> Result<CvRecord, CVRepositoryError> {
        let mut records = self.records.lock().unwrap();
        let record = records.get_mut(&user_id).ok_or(CVRepositoryError::NotFound)?;
        record.content = content;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_cv(&self, user_id: Uuid) -> Result<(), CVRepositoryError> {
        self.records
            .lock()
            .unwrap()
            .remove(&user_id)
            .map(|_| ())
            .ok_or(CVRepositoryError::NotFound)
    }
}

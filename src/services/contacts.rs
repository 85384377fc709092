//! Contact messages service

use crate::{
    error::{AppError, AppResult},
    models::contact::Contact,
    repository::Repository,
};

#[derive(Clone)]
pub struct ContactsService {
    repository: Repository,
}

impl ContactsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Store a free-form contact submission. The body may carry any fields
    /// but must at least be a JSON object.
    pub async fn create(&self, fields: &serde_json::Value) -> AppResult<Contact> {
        if !fields.is_object() {
            return Err(AppError::Validation(
                "contact body must be a JSON object".to_string(),
            ));
        }
        self.repository.contacts.create(fields).await
    }

    pub async fn list(&self) -> AppResult<Vec<Contact>> {
        self.repository.contacts.list().await
    }
}

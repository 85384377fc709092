//! Package catalog service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::package::{CreatePackage, Package},
    repository::Repository,
};

#[derive(Clone)]
pub struct PackagesService {
    repository: Repository,
}

impl PackagesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: &CreatePackage) -> AppResult<Package> {
        self.repository.packages.create(data).await
    }

    pub async fn list(&self) -> AppResult<Vec<Package>> {
        self.repository.packages.list().await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.packages.delete(id).await
    }
}

// src/api/description_repo.rs

use crate::{
    api::client::ApiClient,
    common::error::AppError,
    models::description::{Description, DescriptionPayload},
};

#[derive(Clone)]
pub struct DescriptionRepository {
    client: ApiClient,
}

impl DescriptionRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Description>, AppError> {
        self.client
            .get_query("/descricoes", &[("empresa_id", company_id)])
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Description, AppError> {
        self.client.get(&format!("/descricoes/{}", id)).await
    }

    pub async fn create(&self, payload: &DescriptionPayload) -> Result<Description, AppError> {
        self.client.post("/descricoes", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &DescriptionPayload,
    ) -> Result<Description, AppError> {
        self.client.put(&format!("/descricoes/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/descricoes/{}", id)).await
    }
}

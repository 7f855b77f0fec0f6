// src/api/company_repo.rs

use crate::{
    api::client::{ApiClient, Upload},
    common::error::AppError,
    models::company::{Company, CompanyPayload},
};

#[derive(Clone)]
pub struct CompanyRepository {
    client: ApiClient,
}

impl CompanyRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        self.client.get("/empresas").await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Company, AppError> {
        self.client.get(&format!("/empresas/{}", id)).await
    }

    pub async fn create(&self, payload: &CompanyPayload) -> Result<Company, AppError> {
        self.client.post("/empresas", payload).await
    }

    pub async fn update(&self, id: i64, payload: &CompanyPayload) -> Result<Company, AppError> {
        self.client.put(&format!("/empresas/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/empresas/{}", id)).await
    }

    /// Envia o logo; o backend devolve a empresa atualizada.
    pub async fn upload_logo(&self, id: i64, upload: Upload) -> Result<Company, AppError> {
        self.client
            .upload(&format!("/empresas/{}/logo", id), upload)
            .await
    }
}

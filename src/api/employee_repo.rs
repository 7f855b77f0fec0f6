// src/api/employee_repo.rs

use crate::{
    api::client::{ApiClient, Upload},
    common::error::AppError,
    models::employee::{Employee, EmployeePayload, PhotoUploadResponse},
};

#[derive(Clone)]
pub struct EmployeeRepository {
    client: ApiClient,
}

impl EmployeeRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    // Todos os funcionários de uma empresa
    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<Employee>, AppError> {
        self.client
            .get_query("/funcionario", &[("empresa_id", company_id)])
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.client.get(&format!("/funcionario/{}", id)).await
    }

    pub async fn create(&self, payload: &EmployeePayload) -> Result<Employee, AppError> {
        self.client.post("/funcionario", payload).await
    }

    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<Employee, AppError> {
        self.client.put(&format!("/funcionario/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/funcionario/{}", id)).await
    }

    pub async fn upload_photo(
        &self,
        id: i64,
        upload: Upload,
    ) -> Result<PhotoUploadResponse, AppError> {
        self.client
            .upload(&format!("/funcionario/{}/foto", id), upload)
            .await
    }
}

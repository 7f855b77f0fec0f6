// src/services/company_service.rs

use validator::Validate;

use crate::{
    api::CompanyRepository,
    common::error::AppError,
    models::company::{Company, CompanyPayload},
    services::upload::UploadLimits,
};

#[derive(Clone)]
pub struct CompanyService {
    repo: CompanyRepository,
    limits: UploadLimits,
}

impl CompanyService {
    pub fn new(repo: CompanyRepository, limits: UploadLimits) -> Self {
        Self { repo, limits }
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        let mut companies = self.repo.list().await?;
        companies.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(companies)
    }

    pub async fn get(&self, id: i64) -> Result<Company, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, payload: &CompanyPayload) -> Result<Company, AppError> {
        payload.validate()?;
        let company = self.repo.create(payload).await?;
        tracing::info!("🏢 Empresa '{}' cadastrada (id {})", company.name, company.id);
        Ok(company)
    }

    pub async fn update(&self, id: i64, payload: &CompanyPayload) -> Result<Company, AppError> {
        payload.validate()?;
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        tracing::info!("Empresa {} removida", id);
        Ok(())
    }

    /// Confere o arquivo antes de enviar o logo.
    pub async fn upload_logo(
        &self,
        id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Company, AppError> {
        let upload = self.limits.image("logo", file_name, bytes)?;
        self.repo.upload_logo(id, upload).await
    }
}

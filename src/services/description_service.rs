// src/services/description_service.rs

use validator::Validate;

use crate::{
    api::DescriptionRepository,
    common::error::AppError,
    models::description::{Description, DescriptionPayload},
};

/// Descrição que corresponde ao setor/cargo do funcionário, sem diferenciar maiúsculas.
pub fn find_for<'a>(
    descriptions: &'a [Description],
    sector: &str,
    role: &str,
) -> Option<&'a Description> {
    let sector = sector.trim().to_lowercase();
    let role = role.trim().to_lowercase();
    descriptions
        .iter()
        .find(|d| d.sector.trim().to_lowercase() == sector && d.role.trim().to_lowercase() == role)
}

#[derive(Clone)]
pub struct DescriptionService {
    repo: DescriptionRepository,
}

impl DescriptionService {
    pub fn new(repo: DescriptionRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, company_id: i64) -> Result<Vec<Description>, AppError> {
        let mut descriptions = self.repo.list_by_company(company_id).await?;
        descriptions.sort_by(|a, b| (&a.sector, &a.role).cmp(&(&b.sector, &b.role)));
        Ok(descriptions)
    }

    pub async fn get(&self, id: i64) -> Result<Description, AppError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, payload: &DescriptionPayload) -> Result<Description, AppError> {
        payload.validate()?;
        let description = self.repo.create(payload).await?;
        tracing::info!(
            "📄 Descrição cadastrada: {} / {}",
            description.sector,
            description.role
        );
        Ok(description)
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &DescriptionPayload,
    ) -> Result<Description, AppError> {
        payload.validate()?;
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description(id: i64, sector: &str, role: &str) -> Description {
        Description {
            id,
            company_id: 1,
            sector: sector.to_string(),
            role: role.to_string(),
            schooling: None,
            training: None,
            behavioral_skills: None,
            technical_skills: None,
            experience: None,
            responsibilities: None,
        }
    }

    #[test]
    fn finds_description_ignoring_case_and_spaces() {
        let list = vec![
            description(1, "Produção", "Operador"),
            description(2, "Produção", "Supervisor"),
        ];
        assert_eq!(find_for(&list, "produção ", "SUPERVISOR").map(|d| d.id), Some(2));
        assert!(find_for(&list, "RH", "Operador").is_none());
    }
}

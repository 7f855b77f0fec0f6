// src/services/user_service.rs

use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    api::UserRepository,
    common::error::AppError,
    models::user::{Permission, User, UserPayload, UserRole},
};

#[derive(Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let mut users = self.repo.list().await?;
        // Ativos primeiro, depois por nome
        users.sort_by(|a, b| b.active.cmp(&a.active).then_with(|| a.name.cmp(&b.name)));
        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.repo.find_by_id(id).await
    }

    /// No cadastro a senha é obrigatória; na edição ela é opcional.
    pub async fn create(&self, payload: &UserPayload) -> Result<User, AppError> {
        payload.validate()?;
        if payload.password.is_none() {
            return Err(missing_password());
        }
        let user = self.repo.create(payload).await?;
        tracing::info!("🔑 Usuário '{}' criado", user.login);
        Ok(user)
    }

    pub async fn update(&self, id: i64, payload: &UserPayload) -> Result<User, AppError> {
        payload.validate()?;
        self.repo.update(id, payload).await
    }

    pub async fn set_active(&self, id: i64, active: bool) -> Result<User, AppError> {
        let user = self.repo.set_active(id, active).await?;
        tracing::info!(
            "Usuário '{}' {}",
            user.login,
            if user.active { "ativado" } else { "desativado" }
        );
        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    pub async fn roles(&self) -> Result<Vec<UserRole>, AppError> {
        self.repo.list_roles().await
    }

    pub async fn permissions(&self) -> Result<Vec<Permission>, AppError> {
        self.repo.list_permissions().await
    }
}

fn missing_password() -> AppError {
    let mut errors = ValidationErrors::new();
    let mut error = ValidationError::new("required");
    error.message = Some("Informe a senha do novo usuário.".into());
    errors.add("password", error);
    AppError::ValidationError(errors)
}

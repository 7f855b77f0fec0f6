// src/api/user_repo.rs

use crate::{
    api::client::ApiClient,
    common::error::AppError,
    models::user::{ActivePayload, Permission, User, UserPayload, UserRole},
};

// Usuários do sistema, cargos de acesso e permissões
#[derive(Clone)]
pub struct UserRepository {
    client: ApiClient,
}

impl UserRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.client.get("/usuario").await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<User, AppError> {
        self.client.get(&format!("/usuario/{}", id)).await
    }

    pub async fn create(&self, payload: &UserPayload) -> Result<User, AppError> {
        self.client.post("/usuario", payload).await
    }

    pub async fn update(&self, id: i64, payload: &UserPayload) -> Result<User, AppError> {
        self.client.put(&format!("/usuario/{}", id), payload).await
    }

    pub async fn set_active(&self, id: i64, active: bool) -> Result<User, AppError> {
        self.client
            .patch(&format!("/usuario/{}", id), &ActivePayload { active })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/usuario/{}", id)).await
    }

    pub async fn list_roles(&self) -> Result<Vec<UserRole>, AppError> {
        self.client.get("/cargos-usuarios").await
    }

    pub async fn list_permissions(&self) -> Result<Vec<Permission>, AppError> {
        self.client.get("/permissoes").await
    }
}

// src/api/auth_repo.rs

use crate::{
    api::client::ApiClient,
    common::error::AppError,
    models::auth::{LoginPayload, LoginResponse},
};

#[derive(Clone)]
pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, payload: &LoginPayload) -> Result<LoginResponse, AppError> {
        self.client.post("/login", payload).await
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.client
            .post_empty::<serde_json::Value>("/logout")
            .await
            .map(|_| ())
    }
}

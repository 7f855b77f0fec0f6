// src/models/auth.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;

// Dados para login
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "Informe o login."))]
    pub login: String,
    #[serde(rename = "senha")]
    #[validate(length(min = 1, message = "Informe a senha."))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "usuario", default)]
    pub user: Option<User>,
}

// O que lemos do payload do JWT. O backend pode omitir qualquer campo.
#[derive(Debug, Default, Deserialize)]
pub struct Claims {
    pub sub: Option<serde_json::Value>,
    pub exp: Option<i64>,
}

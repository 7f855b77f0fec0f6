// src/models/user.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::not_blank;

// Conta de acesso ao sistema (/usuario)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub login: String,
    // Nome do cargo de acesso (ver /cargos-usuarios)
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    #[serde(rename = "nome")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(length(min = 3, message = "O login deve ter no mínimo 3 caracteres."))]
    pub login: String,

    // Só enviada no cadastro ou na troca de senha
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: Option<String>,

    #[serde(rename = "cargo")]
    #[validate(custom(function = "not_blank"))]
    pub role: String,

    #[serde(rename = "ativo")]
    pub active: bool,
}

// /cargos-usuarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    // Slugs das permissões concedidas ao cargo
    #[serde(rename = "permissoes", default)]
    pub permissions: Vec<String>,
}

// /permissoes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub slug: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ActivePayload {
    #[serde(rename = "ativo")]
    pub active: bool,
}

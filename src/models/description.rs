// src/models/description.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::not_blank;

// ---
// Descrição de cargo (/descricoes)
// ---
// Perfil exigido para um cargo dentro de um setor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Description {
    pub id: i64,
    #[serde(rename = "empresa_id")]
    pub company_id: i64,
    #[serde(rename = "setor")]
    pub sector: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "escolaridade", default)]
    pub schooling: Option<String>,
    #[serde(rename = "treinamento", default)]
    pub training: Option<String>,
    #[serde(rename = "competencias_comportamentais", default)]
    pub behavioral_skills: Option<String>,
    #[serde(rename = "competencias_tecnicas", default)]
    pub technical_skills: Option<String>,
    #[serde(rename = "experiencia", default)]
    pub experience: Option<String>,
    #[serde(rename = "responsabilidades", default)]
    pub responsibilities: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DescriptionPayload {
    #[serde(rename = "empresa_id")]
    pub company_id: i64,

    #[serde(rename = "setor")]
    #[validate(custom(function = "not_blank"))]
    pub sector: String,

    #[serde(rename = "cargo")]
    #[validate(custom(function = "not_blank"))]
    pub role: String,

    #[serde(rename = "escolaridade", skip_serializing_if = "Option::is_none")]
    pub schooling: Option<String>,
    #[serde(rename = "treinamento", skip_serializing_if = "Option::is_none")]
    pub training: Option<String>,
    #[serde(rename = "competencias_comportamentais", skip_serializing_if = "Option::is_none")]
    pub behavioral_skills: Option<String>,
    #[serde(rename = "competencias_tecnicas", skip_serializing_if = "Option::is_none")]
    pub technical_skills: Option<String>,
    #[serde(rename = "experiencia", skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(rename = "responsabilidades", skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
}

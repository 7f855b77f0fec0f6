// src/models/company.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{not_blank, validate_cnpj, validate_hex_color};

// ---
// Empresa, como o backend devolve em /empresas
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    // Cor de destaque da empresa na interface (#RRGGBB)
    #[serde(rename = "cor", default)]
    pub color: Option<String>,
    // Caminho do logo no servidor, depois do upload
    #[serde(default)]
    pub logo: Option<String>,
}

// Dados do formulário de cadastro/edição
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompanyPayload {
    #[serde(rename = "nome")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(rename = "cnpj")]
    #[validate(custom(function = "validate_cnpj"))]
    pub tax_id: String,

    #[serde(rename = "cor", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,
}

impl From<&Company> for CompanyPayload {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            tax_id: company.tax_id.clone(),
            color: company.color.clone(),
        }
    }
}

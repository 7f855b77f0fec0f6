// src/models/employee.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::validation::{not_blank, validate_cpf, validate_phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "M" | "MASCULINO" => Some(Sex::Male),
            "F" | "FEMININO" => Some(Sex::Female),
            _ => None,
        }
    }
}

// ---
// Funcionário (/funcionario)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "empresa_id")]
    pub company_id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cpf")]
    pub document_id: String,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "sexo")]
    pub sex: Sex,
    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "data_admissao")]
    pub admission_date: NaiveDate,
    #[serde(rename = "setor")]
    pub sector: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "nivel", default)]
    pub level: Option<String>,
    #[serde(rename = "salario", default)]
    pub salary: Option<Decimal>,
    // Caminho da foto no servidor
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeePayload {
    #[serde(rename = "empresa_id")]
    pub company_id: i64,

    #[serde(rename = "nome")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(rename = "cpf")]
    #[validate(custom(function = "validate_cpf"))]
    pub document_id: String,

    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    #[serde(rename = "sexo")]
    pub sex: Sex,

    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,

    #[serde(rename = "data_admissao")]
    pub admission_date: NaiveDate,

    #[serde(rename = "setor")]
    #[validate(custom(function = "not_blank"))]
    pub sector: String,

    #[serde(rename = "cargo")]
    #[validate(custom(function = "not_blank"))]
    pub role: String,

    #[serde(rename = "nivel", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(rename = "salario", skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
}

impl From<&Employee> for EmployeePayload {
    fn from(e: &Employee) -> Self {
        Self {
            company_id: e.company_id,
            name: e.name.clone(),
            document_id: e.document_id.clone(),
            phone: e.phone.clone(),
            sex: e.sex,
            birth_date: e.birth_date,
            admission_date: e.admission_date,
            sector: e.sector.clone(),
            role: e.role.clone(),
            level: e.level.clone(),
            salary: e.salary,
        }
    }
}

// Resposta do upload de foto
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUploadResponse {
    #[serde(rename = "foto", alias = "caminho")]
    pub path: String,
}

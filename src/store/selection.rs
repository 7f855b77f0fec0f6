// src/store/selection.rs
//
// "Empresa atual" e "funcionário atual" escolhidos pelo usuário. As telas
// leem daqui em vez de chaves soltas no armazenamento local.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub company_id: Option<i64>,
    pub employee_id: Option<i64>,
}

impl Selection {
    /// Empresa informada explicitamente ou, na falta dela, a selecionada.
    pub fn company_or(&self, explicit: Option<i64>) -> Result<i64, AppError> {
        explicit
            .or(self.company_id)
            .ok_or(AppError::NoCompanySelected)
    }

    pub fn employee_or(&self, explicit: Option<i64>) -> Result<i64, AppError> {
        explicit
            .or(self.employee_id)
            .ok_or(AppError::NoEmployeeSelected)
    }
}

#[derive(Debug)]
pub struct SelectionStore {
    path: Option<PathBuf>,
    current: Selection,
}

impl SelectionStore {
    /// Seleção só em memória (testes, sessões descartáveis).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: Selection::default(),
        }
    }

    /// Carrega a seleção salva em `dir`; arquivo ausente ou ilegível começa vazio.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join("selection.json");
        let current = std::fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        Self {
            path: Some(path),
            current,
        }
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn company_id(&self) -> Option<i64> {
        self.current.company_id
    }

    pub fn employee_id(&self) -> Option<i64> {
        self.current.employee_id
    }

    /// Trocar de empresa invalida o funcionário selecionado.
    pub fn select_company(&mut self, company_id: i64) -> Result<(), AppError> {
        if self.current.company_id != Some(company_id) {
            self.current.employee_id = None;
        }
        self.current.company_id = Some(company_id);
        self.persist()
    }

    pub fn select_employee(&mut self, employee_id: i64) -> Result<(), AppError> {
        if self.current.company_id.is_none() {
            return Err(AppError::NoCompanySelected);
        }
        self.current.employee_id = Some(employee_id);
        self.persist()
    }

    pub fn forget_employee(&mut self) -> Result<(), AppError> {
        self.current.employee_id = None;
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), AppError> {
        self.current = Selection::default();
        self.persist()
    }

    fn persist(&self) -> Result<(), AppError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&self.current)?)?;
        Ok(())
    }
}

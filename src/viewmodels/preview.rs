// src/viewmodels/preview.rs

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::common::error::AppError;

/// Pré-visualização local de uma imagem escolhida antes do upload.
///
/// O arquivo temporário vive enquanto o slot o segura: trocar a imagem ou
/// descartar o slot apaga o anterior.
#[derive(Debug)]
pub struct PreviewSlot {
    dir: PathBuf,
    current: Option<PathBuf>,
}

impl PreviewSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            current: None,
        }
    }

    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("gestao-rh-previews"))
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Grava a nova pré-visualização e revoga a anterior.
    pub fn replace(&mut self, extension: &str, bytes: &[u8]) -> Result<&Path, AppError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{}.{}", Uuid::new_v4(), extension.trim_start_matches('.')));
        std::fs::write(&path, bytes)?;

        self.revoke();
        Ok(self.current.insert(path).as_path())
    }

    pub fn revoke(&mut self) {
        if let Some(old) = self.current.take() {
            if let Err(e) = std::fs::remove_file(&old) {
                tracing::debug!("Pré-visualização {:?} já não existia: {}", old, e);
            }
        }
    }
}

impl Drop for PreviewSlot {
    fn drop(&mut self) {
        self.revoke();
    }
}

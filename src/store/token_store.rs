// src/store/token_store.rs
//
// Persistência do token de sessão. No app desktop isso era um plugin de
// armazenamento seguro; aqui é um trait, com implementação em arquivo e em memória.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::dangerous::insecure_decode;
use serde::{Deserialize, Serialize};

use crate::{common::error::AppError, models::auth::Claims};

/// Token guardado mais o momento em que ele expira, quando dá para saber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = token_expiry(&token);
        Self { token, expires_at }
    }

    /// Tokens opacos (sem `exp`) valem até o servidor dizer o contrário.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Lê o `exp` do JWT sem verificar a assinatura (a chave é do backend).
///
/// Vale para qualquer algoritmo do cabeçalho (HS256, RS256, ES256...).
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let data = insecure_decode::<Claims>(token).ok()?;
    data.claims
        .exp
        .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0))
}

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<Session>, AppError>;
    async fn save(&self, session: &Session) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

// ---
// Armazenamento em arquivo JSON (permissão 0600 no unix)
// ---
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<Session>, AppError> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // Arquivo corrompido equivale a não ter sessão
                tracing::warn!("Sessão salva ilegível, ignorando: {}", e);
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: Mutex<Option<Session>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<Session>, AppError> {
        Ok(self.session.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    async fn save(&self, session: &Session) -> Result<(), AppError> {
        *self.session.lock().unwrap_or_else(|p| p.into_inner()) = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        *self.session.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}

// src/services/auth.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    api::{ApiClient, AuthRepository},
    common::error::AppError,
    models::{auth::LoginPayload, user::User},
    store::{Session, TokenStore},
};

#[derive(Clone)]
pub struct AuthService {
    repo: AuthRepository,
    client: ApiClient,
    store: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(repo: AuthRepository, client: ApiClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            repo,
            client,
            store,
        }
    }

    /// Autentica, guarda o token no armazenamento seguro e o ativa no cliente.
    pub async fn login(&self, payload: &LoginPayload) -> Result<Option<User>, AppError> {
        payload.validate()?;

        let response = self.repo.login(payload).await?;
        let session = Session::new(response.token);

        self.store.save(&session).await?;
        self.client.set_token(Some(session.token.clone()));

        tracing::info!("✅ Login realizado para '{}'", payload.login);
        Ok(response.user)
    }

    /// Encerra a sessão. O token local é apagado mesmo se o backend falhar.
    pub async fn logout(&self) -> Result<(), AppError> {
        if self.client.token().is_some() {
            if let Err(e) = self.repo.logout().await {
                tracing::warn!("Logout remoto falhou, limpando sessão local mesmo assim: {}", e);
            }
        }
        self.clear_session().await
    }

    /// Recupera a sessão salva. Sem sessão, ou com token vencido, é preciso logar de novo.
    pub async fn restore(&self) -> Result<Session, AppError> {
        let session = self.store.load().await?.ok_or(AppError::SessionExpired)?;

        if session.is_expired() {
            tracing::info!("Token salvo expirou, descartando sessão");
            self.clear_session().await?;
            return Err(AppError::SessionExpired);
        }

        self.client.set_token(Some(session.token.clone()));
        Ok(session)
    }

    /// Ponto único por onde passam os erros das telas: erro de sessão derruba o token.
    pub async fn handle_error(&self, err: AppError) -> AppError {
        if err.is_session_error() {
            if let Err(e) = self.clear_session().await {
                tracing::error!("Falha ao limpar sessão expirada: {}", e);
            }
        }
        err
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.token().is_some()
    }

    async fn clear_session(&self) -> Result<(), AppError> {
        self.client.set_token(None);
        self.store.clear().await
    }
}

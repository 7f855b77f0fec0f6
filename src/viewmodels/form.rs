// src/viewmodels/form.rs

use std::collections::HashMap;
use std::future::Future;

use validator::Validate;

use crate::{
    common::error::{AppError, UserFeedback},
    viewmodels::refresh::RefreshFlag,
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Closed,
    Editing,
    // Validação local falhou; nenhuma requisição foi feita
    Invalid(HashMap<String, Vec<String>>),
    Submitting,
    Failed(UserFeedback),
}

/// Modal de cadastro/edição: guarda o payload, valida e envia uma única vez.
#[derive(Debug)]
pub struct FormModal<P> {
    pub payload: P,
    state: FormState,
    refresh: RefreshFlag,
    success_message: Option<String>,
}

impl<P> FormModal<P>
where
    P: Validate + Clone,
{
    pub fn new(payload: P, refresh: RefreshFlag) -> Self {
        Self {
            payload,
            state: FormState::Closed,
            refresh,
            success_message: None,
        }
    }

    pub fn open(&mut self, payload: P) {
        self.payload = payload;
        self.state = FormState::Editing;
        self.success_message = None;
    }

    pub fn close(&mut self) {
        self.state = FormState::Closed;
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting)
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Valida e, se estiver tudo certo, executa `action` com uma cópia do payload.
    ///
    /// Sucesso: dispara o `RefreshFlag` e fecha. Falha: o modal continua aberto
    /// com a mensagem. Enquanto uma submissão está em andamento, outra é ignorada.
    pub async fn submit<T, F, Fut>(&mut self, success: &str, action: F) -> Option<T>
    where
        F: FnOnce(P) -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if self.is_submitting() || !self.is_open() {
            return None;
        }

        if let Err(errors) = self.payload.validate() {
            self.state = FormState::Invalid(AppError::ValidationError(errors).to_feedback().fields);
            return None;
        }

        self.state = FormState::Submitting;
        match action(self.payload.clone()).await {
            Ok(value) => {
                self.refresh.bump();
                self.success_message = Some(success.to_string());
                self.state = FormState::Closed;
                Some(value)
            }
            Err(e) => {
                tracing::warn!("Falha ao salvar formulário: {}", e);
                self.state = match &e {
                    AppError::ValidationError(errors) => {
                        FormState::Invalid(AppError::ValidationError(errors.clone()).to_feedback().fields)
                    }
                    _ => FormState::Failed(e.to_feedback()),
                };
                None
            }
        }
    }
}

// src/common/error.rs

use std::collections::HashMap;

use thiserror::Error;

/// Mensagem usada quando o backend não explica o erro.
pub const FALLBACK_MESSAGE: &str = "Ocorreu um erro inesperado.";

pub const SESSION_EXPIRED_MESSAGE: &str = "Sua sessão expirou. Faça login novamente.";

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // 401 / 403 vindos do backend, ou token local expirado
    #[error("Sessão expirada")]
    SessionExpired,

    #[error("Erro da API ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Erro de rede: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Resposta inválida do servidor: {0}")]
    InvalidResponse(String),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro de armazenamento local: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Arquivo muito grande: {size} bytes (máximo {max})")]
    FileTooLarge { size: usize, max: usize },

    #[error("Tipo de arquivo não suportado: {0}")]
    UnsupportedFileType(String),

    #[error("Arquivo vazio")]
    EmptyFile,

    #[error("Nenhuma empresa selecionada")]
    NoCompanySelected,

    #[error("Nenhum funcionário selecionado")]
    NoEmployeeSelected,

    #[error("Período inválido: {0}")]
    InvalidDateRange(String),

    #[error("Data inválida: {0}")]
    InvalidDate(String),

    #[error("Configuração inválida: {0}")]
    Config(String),
}

/// Telas para as quais um erro pode mandar o usuário.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
}

/// O que a interface mostra depois de uma falha.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFeedback {
    pub message: String,
    // Mensagens por campo, quando o erro é de validação
    pub fields: HashMap<String, Vec<String>>,
    pub redirect: Option<Route>,
}

impl UserFeedback {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: HashMap::new(),
            redirect: None,
        }
    }
}

impl AppError {
    pub fn is_session_error(&self) -> bool {
        matches!(self, AppError::SessionExpired)
    }

    /// Converte o erro na mensagem exibida ao usuário.
    pub fn to_feedback(&self) -> UserFeedback {
        match self {
            AppError::ValidationError(errors) => UserFeedback {
                message: "Um ou mais campos são inválidos.".to_string(),
                fields: field_messages(errors),
                redirect: None,
            },
            AppError::SessionExpired => UserFeedback {
                message: SESSION_EXPIRED_MESSAGE.to_string(),
                fields: HashMap::new(),
                redirect: Some(Route::Login),
            },
            AppError::Api { message, .. } => UserFeedback::message(message.clone()),
            AppError::Network(e) => {
                tracing::error!("Falha de rede: {}", e);
                UserFeedback::message("Não foi possível conectar ao servidor.")
            }
            AppError::FileTooLarge { max, .. } => UserFeedback::message(format!(
                "O arquivo excede o tamanho máximo de {}.",
                human_size(*max)
            )),
            AppError::UnsupportedFileType(_) => {
                UserFeedback::message("Tipo de arquivo não suportado.")
            }
            AppError::EmptyFile => UserFeedback::message("O arquivo está vazio."),
            AppError::NoCompanySelected => UserFeedback::message("Selecione uma empresa."),
            AppError::NoEmployeeSelected => UserFeedback::message("Selecione um funcionário."),
            AppError::InvalidDateRange(msg) | AppError::InvalidDate(msg) => {
                UserFeedback::message(msg.clone())
            }
            ref e => {
                tracing::error!("Erro interno: {}", e);
                UserFeedback::message(FALLBACK_MESSAGE)
            }
        }
    }
}

/// Classifica uma resposta de erro do backend.
///
/// 401 e 403 sempre viram `SessionExpired`; o resto carrega a mensagem do corpo.
pub fn classify_status(status: u16, body: &str) -> AppError {
    if status == 401 || status == 403 {
        return AppError::SessionExpired;
    }
    AppError::Api {
        status,
        message: message_from_body(body).unwrap_or_else(|| FALLBACK_MESSAGE.to_string()),
    }
}

// O backend não é consistente no nome do campo da mensagem
fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["error", "message", "mensagem", "detail"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
            .filter(|m| !m.trim().is_empty()),
        Ok(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Ok(_) => None,
        // Texto puro, desde que não seja uma página HTML inteira
        Err(_) if !trimmed.starts_with('<') => Some(trimmed.to_string()),
        Err(_) => None,
    }
}

fn field_messages(errors: &validator::ValidationErrors) -> HashMap<String, Vec<String>> {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }
    details
}

fn human_size(bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_and_forbidden_route_to_login() {
        for status in [401, 403] {
            let err = classify_status(status, r#"{"error":"token inválido"}"#);
            assert!(err.is_session_error());
            let feedback = err.to_feedback();
            assert_eq!(feedback.redirect, Some(Route::Login));
            assert_eq!(feedback.message, SESSION_EXPIRED_MESSAGE);
        }
    }

    #[test]
    fn message_is_taken_from_known_body_keys() {
        let err = classify_status(409, r#"{"mensagem":"CPF já cadastrado"}"#);
        assert_eq!(err.to_feedback().message, "CPF já cadastrado");

        let err = classify_status(400, r#"{"message":"nome obrigatório"}"#);
        assert_eq!(err.to_feedback().message, "nome obrigatório");
    }

    #[test]
    fn plain_text_body_is_used_as_message() {
        let err = classify_status(500, "banco indisponível");
        assert_eq!(err.to_feedback().message, "banco indisponível");
    }

    #[test]
    fn empty_or_html_body_falls_back() {
        assert_eq!(classify_status(502, "").to_feedback().message, FALLBACK_MESSAGE);
        assert_eq!(
            classify_status(502, "<html><body>Bad Gateway</body></html>")
                .to_feedback()
                .message,
            FALLBACK_MESSAGE
        );
        assert_eq!(
            classify_status(500, r#"{"codigo":12}"#).to_feedback().message,
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn other_errors_never_redirect() {
        let err = classify_status(404, r#"{"error":"não encontrado"}"#);
        assert_eq!(err.to_feedback().redirect, None);
        assert_eq!(AppError::NoCompanySelected.to_feedback().redirect, None);
    }

    #[test]
    fn file_too_large_mentions_limit() {
        let err = AppError::FileTooLarge {
            size: 6 * 1024 * 1024,
            max: 5 * 1024 * 1024,
        };
        assert_eq!(
            err.to_feedback().message,
            "O arquivo excede o tamanho máximo de 5 MB."
        );
    }
}

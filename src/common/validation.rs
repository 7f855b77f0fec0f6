// src/common/validation.rs
//
// Validadores usados nos payloads via `#[validate(custom(function = ...))]`.

use std::borrow::Cow;

use validator::ValidationError;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Campo obrigatório: não pode ser vazio nem só espaços.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "Campo obrigatório."));
    }
    Ok(())
}

fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

// Aceita pontuação (000.000.000-00), mas só caracteres esperados
fn only_document_chars(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/' | ' '))
}

pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if !only_document_chars(value) || digits(value).len() != 11 {
        return Err(error("cpf", "O CPF deve ter 11 dígitos."));
    }
    Ok(())
}

pub fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if !only_document_chars(value) || digits(value).len() != 14 {
        return Err(error("cnpj", "O CNPJ deve ter 14 dígitos."));
    }
    Ok(())
}

/// Cor no formato `#RRGGBB`.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(error("color", "A cor deve estar no formato #RRGGBB."));
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let count = digits(value).len();
    if !(10..=11).contains(&count) {
        return Err(error("phone", "O telefone deve ter DDD e 8 ou 9 dígitos."));
    }
    Ok(())
}

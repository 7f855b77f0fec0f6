// src/models/notification.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationKind {
    #[serde(rename = "falta")]
    Absence,
    #[serde(rename = "meia_falta")]
    HalfAbsence,
    #[serde(rename = "atestado")]
    MedicalCertificate,
    #[serde(rename = "advertencia")]
    Warning,
    #[serde(rename = "suspensao")]
    Suspension,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::Absence,
        NotificationKind::HalfAbsence,
        NotificationKind::MedicalCertificate,
        NotificationKind::Warning,
        NotificationKind::Suspension,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Absence => "Falta",
            NotificationKind::HalfAbsence => "Meia falta",
            NotificationKind::MedicalCertificate => "Atestado",
            NotificationKind::Warning => "Advertência",
            NotificationKind::Suspension => "Suspensão",
        }
    }

    /// Tipos que só fazem sentido em um único dia.
    pub fn is_single_day(&self) -> bool {
        matches!(
            self,
            NotificationKind::Absence | NotificationKind::HalfAbsence | NotificationKind::Warning
        )
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "falta" => Some(NotificationKind::Absence),
            "meia_falta" => Some(NotificationKind::HalfAbsence),
            "atestado" => Some(NotificationKind::MedicalCertificate),
            "advertencia" | "advertência" => Some(NotificationKind::Warning),
            "suspensao" | "suspensão" => Some(NotificationKind::Suspension),
            _ => None,
        }
    }
}

// ---
// Notificação disciplinar / de frequência (/notificacoes)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "funcionario_id")]
    pub employee_id: i64,
    #[serde(rename = "tipo")]
    pub kind: NotificationKind,
    #[serde(rename = "data_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "data_fim", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    // Caminho do anexo no servidor
    #[serde(rename = "anexo", default)]
    pub attachment: Option<String>,
}

impl Notification {
    /// Último dia coberto; sem data final, é o próprio dia inicial.
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationPayload {
    #[serde(rename = "funcionario_id")]
    pub employee_id: i64,

    #[serde(rename = "tipo")]
    pub kind: NotificationKind,

    #[serde(rename = "data_inicio")]
    pub start_date: NaiveDate,

    #[serde(rename = "data_fim", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000, message = "A descrição deve ter no máximo 2000 caracteres."))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentUploadResponse {
    #[serde(rename = "anexo", alias = "caminho")]
    pub path: String,
}

// src/services/notification_service.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    api::NotificationRepository,
    common::{dates, error::AppError},
    models::notification::{Notification, NotificationKind, NotificationPayload},
    services::upload::UploadLimits,
};

/// Totais exibidos no histórico de um funcionário.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSummary {
    pub counts: BTreeMap<NotificationKind, usize>,
    // falta = 1 por dia, meia falta = 0,5 por dia
    pub absence_days: Decimal,
    pub medical_leave_days: i64,
    pub suspension_days: i64,
}

pub fn summarize(notifications: &[Notification]) -> NotificationSummary {
    let mut summary = NotificationSummary::default();

    for n in notifications {
        *summary.counts.entry(n.kind).or_insert(0) += 1;

        // Registros com período invertido vindos do backend contam como um dia
        let days = dates::inclusive_days(n.start_date, n.last_day()).unwrap_or(1);
        match n.kind {
            NotificationKind::Absence => summary.absence_days += Decimal::from(days),
            NotificationKind::HalfAbsence => {
                summary.absence_days += Decimal::from(days) * Decimal::new(5, 1)
            }
            NotificationKind::MedicalCertificate => summary.medical_leave_days += days,
            NotificationKind::Suspension => summary.suspension_days += days,
            NotificationKind::Warning => {}
        }
    }

    summary
}

/// Regras de período que não cabem no `Validate` do payload.
pub fn check_period(payload: &NotificationPayload) -> Result<(), AppError> {
    let Some(end) = payload.end_date else {
        return Ok(());
    };

    if end < payload.start_date {
        return Err(AppError::InvalidDateRange(
            "A data final não pode ser anterior à data inicial.".to_string(),
        ));
    }
    if payload.kind.is_single_day() && end != payload.start_date {
        return Err(AppError::InvalidDateRange(format!(
            "{} vale para um único dia.",
            payload.kind.label()
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct NotificationService {
    repo: NotificationRepository,
    limits: UploadLimits,
}

impl NotificationService {
    pub fn new(repo: NotificationRepository, limits: UploadLimits) -> Self {
        Self { repo, limits }
    }

    /// Histórico do funcionário, do mais recente para o mais antigo.
    pub async fn list(&self, employee_id: i64) -> Result<Vec<Notification>, AppError> {
        let mut notifications = self.repo.list_by_employee(employee_id).await?;
        notifications.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));
        Ok(notifications)
    }

    pub async fn create(&self, payload: &NotificationPayload) -> Result<Notification, AppError> {
        payload.validate()?;
        check_period(payload)?;

        let notification = self.repo.create(payload).await?;
        tracing::info!(
            "📝 {} registrada para o funcionário {}",
            notification.kind.label(),
            notification.employee_id
        );
        Ok(notification)
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &NotificationPayload,
    ) -> Result<Notification, AppError> {
        payload.validate()?;
        check_period(payload)?;
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    pub async fn upload_attachment(
        &self,
        id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let upload = self.limits.attachment(file_name, bytes)?;
        let response = self.repo.upload_attachment(id, upload).await?;
        Ok(response.path)
    }

    /// Registro com anexo numa única operação.
    ///
    /// O arquivo é conferido antes de criar o registro. Se o envio do anexo
    /// falhar, o registro recém-criado é removido antes de devolver o erro.
    pub async fn create_with_attachment(
        &self,
        payload: &NotificationPayload,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Notification, AppError> {
        payload.validate()?;
        check_period(payload)?;
        let upload = self.limits.attachment(file_name, bytes)?;

        let mut notification = self.repo.create(payload).await?;
        match self.repo.upload_attachment(notification.id, upload).await {
            Ok(response) => {
                tracing::info!(
                    "📎 {} registrada com anexo para o funcionário {}",
                    notification.kind.label(),
                    notification.employee_id
                );
                notification.attachment = Some(response.path);
                Ok(notification)
            }
            Err(e) => {
                tracing::warn!(
                    "Envio do anexo falhou, desfazendo notificação {}: {}",
                    notification.id,
                    e
                );
                if let Err(rollback) = self.repo.delete(notification.id).await {
                    tracing::error!(
                        "Não foi possível remover a notificação {}: {}",
                        notification.id,
                        rollback
                    );
                }
                Err(e)
            }
        }
    }

    pub async fn summary(&self, employee_id: i64) -> Result<NotificationSummary, AppError> {
        let notifications = self.repo.list_by_employee(employee_id).await?;
        Ok(summarize(&notifications))
    }
}

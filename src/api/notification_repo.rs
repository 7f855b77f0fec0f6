// src/api/notification_repo.rs

use crate::{
    api::client::{ApiClient, Upload},
    common::error::AppError,
    models::notification::{AttachmentUploadResponse, Notification, NotificationPayload},
};

#[derive(Clone)]
pub struct NotificationRepository {
    client: ApiClient,
}

impl NotificationRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_by_employee(&self, employee_id: i64) -> Result<Vec<Notification>, AppError> {
        self.client
            .get_query("/notificacoes", &[("funcionario_id", employee_id)])
            .await
    }

    pub async fn create(&self, payload: &NotificationPayload) -> Result<Notification, AppError> {
        self.client.post("/notificacoes", payload).await
    }

    pub async fn update(
        &self,
        id: i64,
        payload: &NotificationPayload,
    ) -> Result<Notification, AppError> {
        self.client.put(&format!("/notificacoes/{}", id), payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.client.delete(&format!("/notificacoes/{}", id)).await
    }

    pub async fn upload_attachment(
        &self,
        id: i64,
        upload: Upload,
    ) -> Result<AttachmentUploadResponse, AppError> {
        self.client
            .upload(&format!("/notificacoes/{}/anexo", id), upload)
            .await
    }
}

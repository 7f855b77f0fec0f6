// tests/uploads_test.rs
// Envio de logo e de anexos contra o backend falso

mod support;

use chrono::NaiveDate;

use gestao_rh::{
    AppError,
    models::{
        auth::LoginPayload,
        notification::{NotificationKind, NotificationPayload},
    },
};

use support::{FAILING_ATTACHMENT, PASSWORD, ReceivedFile, TestApp, spawn_app};

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
const PDF_BODY: &[u8] = b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n";

async fn logged_in_app() -> TestApp {
    let app = spawn_app().await;
    app.state
        .auth_service
        .login(&LoginPayload {
            login: "ana".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();
    app
}

fn certificate() -> NotificationPayload {
    NotificationPayload {
        employee_id: 7,
        kind: NotificationKind::MedicalCertificate,
        start_date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 5, 8),
        description: Some("Atestado médico".to_string()),
    }
}

#[tokio::test]
async fn logo_upload_returns_updated_company() {
    let app = logged_in_app().await;

    let company = app
        .state
        .company_service
        .upload_logo(1, "logo.png", PNG_HEADER.to_vec())
        .await
        .unwrap();

    assert_eq!(company.logo.as_deref(), Some("/uploads/empresas/1/logo.png"));
    assert_eq!(
        app.mock.last_file(),
        Some(ReceivedFile {
            field: "logo".to_string(),
            file_name: "logo.png".to_string(),
            content_type: "image/png".to_string(),
            size: PNG_HEADER.len(),
        })
    );
}

#[tokio::test]
async fn pdf_attachment_goes_as_anexo_field() {
    let app = logged_in_app().await;

    let path = app
        .state
        .notification_service
        .upload_attachment(99, "atestado.pdf", PDF_BODY.to_vec())
        .await
        .unwrap();

    // O backend respondeu com `caminho` em vez de `anexo`
    assert_eq!(path, "/uploads/notificacoes/99/atestado.pdf");
    let received = app.mock.last_file().unwrap();
    assert_eq!(received.field, "anexo");
    assert_eq!(received.content_type, "application/pdf");
    assert_eq!(received.size, PDF_BODY.len());
}

#[tokio::test]
async fn create_with_attachment_fills_attachment_path() {
    let app = logged_in_app().await;

    let notification = app
        .state
        .notification_service
        .create_with_attachment(&certificate(), "atestado.pdf", PDF_BODY.to_vec())
        .await
        .unwrap();

    assert_eq!(notification.id, 99);
    assert_eq!(
        notification.attachment.as_deref(),
        Some("/uploads/notificacoes/99/atestado.pdf")
    );
    assert_eq!(app.mock.notifications_created(), 1);
    assert_eq!(app.mock.notifications_deleted(), 0);
}

#[tokio::test]
async fn oversized_attachment_never_creates_the_record() {
    let app = logged_in_app().await;

    let mut big = PDF_BODY.to_vec();
    big.resize(app.state.config.upload_limits.max_attachment_bytes + 1, b' ');

    let err = app
        .state
        .notification_service
        .create_with_attachment(&certificate(), "atestado.pdf", big)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::FileTooLarge { .. }));
    assert_eq!(app.mock.notifications_created(), 0);
    assert_eq!(app.mock.upload_count(), 0);
}

#[tokio::test]
async fn unsupported_attachment_never_creates_the_record() {
    let app = logged_in_app().await;

    let err = app
        .state
        .notification_service
        .create_with_attachment(&certificate(), "planilha.xlsx", b"PK\x03\x04".to_vec())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UnsupportedFileType(_)));
    assert_eq!(app.mock.notifications_created(), 0);
}

#[tokio::test]
async fn failed_attachment_upload_removes_created_record() {
    let app = logged_in_app().await;

    let err = app
        .state
        .notification_service
        .create_with_attachment(&certificate(), FAILING_ATTACHMENT, PDF_BODY.to_vec())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Api { status: 500, .. }));
    assert_eq!(err.to_feedback().message, "Falha ao gravar o anexo.");
    assert_eq!(app.mock.notifications_created(), 1);
    assert_eq!(app.mock.notifications_deleted(), 1);
}

// tests/support/mod.rs
// Backend falso para os testes de integração

#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use gestao_rh::{AppConfig, AppState, store::MemoryTokenStore};

pub const VALID_TOKEN: &str = "token-valido";
pub const PASSWORD: &str = "segredo123";

/// Parte multipart como o backend recebeu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedFile {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

// Nome de anexo que faz o backend falso responder 500
pub const FAILING_ATTACHMENT: &str = "falha.pdf";

#[derive(Clone, Default)]
pub struct MockState {
    pub uploads: Arc<AtomicUsize>,
    pub deletes: Arc<AtomicUsize>,
    pub logouts: Arc<AtomicUsize>,
    pub notifications_created: Arc<AtomicUsize>,
    pub notifications_deleted: Arc<AtomicUsize>,
    pub last_file: Arc<Mutex<Option<ReceivedFile>>>,
}

impl MockState {
    pub fn notifications_created(&self) -> usize {
        self.notifications_created.load(Ordering::SeqCst)
    }

    pub fn notifications_deleted(&self) -> usize {
        self.notifications_deleted.load(Ordering::SeqCst)
    }

    pub fn last_file(&self) -> Option<ReceivedFile> {
        self.last_file.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryTokenStore>,
    pub mock: MockState,
    pub addr: SocketAddr,
}

/// Sobe o backend falso numa porta livre e monta o `AppState` apontando para ele.
pub async fn spawn_app() -> TestApp {
    let mock = MockState::default();
    let router = router(mock.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let store = Arc::new(MemoryTokenStore::default());
    let config = AppConfig::new(format!("http://{}", addr));
    let state = AppState::with_token_store(config, store.clone()).unwrap();

    TestApp {
        state,
        store,
        mock,
        addr,
    }
}

fn router(mock: MockState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/empresas", get(list_companies))
        .route("/empresas/{id}/logo", post(upload_logo))
        .route("/funcionario", get(list_employees))
        .route("/funcionario/{id}", get(get_employee).delete(delete_employee))
        .route("/funcionario/{id}/foto", post(upload_photo))
        .route("/usuario", get(list_users))
        .route("/notificacoes", get(list_notifications).post(create_notification))
        .route("/notificacoes/{id}", delete(delete_notification))
        .route("/notificacoes/{id}/anexo", post(upload_attachment))
        .with_state(mock)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", VALID_TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Token inválido" })),
    )
        .into_response()
}

pub fn employee_json(id: i64, company_id: i64, name: &str, sex: &str, birth: &str) -> Value {
    json!({
        "id": id,
        "empresa_id": company_id,
        "nome": name,
        "cpf": "12345678901",
        "telefone": null,
        "sexo": sex,
        "data_nascimento": birth,
        "data_admissao": "2020-02-01",
        "setor": "Produção",
        "cargo": "Operador",
        "nivel": "Júnior",
        "salario": 2500.5,
        "foto": null
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["senha"] == PASSWORD {
        Json(json!({
            "token": VALID_TOKEN,
            "usuario": { "id": 1, "nome": "Ana Souza", "login": body["login"], "cargo": "admin", "ativo": true }
        }))
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "mensagem": "Login ou senha incorretos." })),
        )
            .into_response()
    }
}

async fn logout(State(mock): State<MockState>) -> StatusCode {
    mock.logouts.fetch_add(1, Ordering::SeqCst);
    StatusCode::NO_CONTENT
}

async fn list_companies(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        { "id": 2, "nome": "Zeta Ltda", "cnpj": "11222333000181", "cor": "#112233" },
        { "id": 1, "nome": "Alfa S.A.", "cnpj": "44555666000199" }
    ]))
    .into_response()
}

async fn list_employees(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let company_id: i64 = match query.get("empresa_id").and_then(|v| v.parse().ok()) {
        Some(id) => id,
        None => {
            return (StatusCode::BAD_REQUEST, "empresa_id é obrigatório").into_response();
        }
    };
    let all = vec![
        employee_json(1, 1, "João Silva", "M", "1990-03-15"),
        employee_json(2, 1, "Márcia Lima", "F", "1985-03-02"),
        employee_json(3, 2, "Pedro Alves", "M", "1992-07-20"),
    ];
    let filtered: Vec<Value> = all
        .into_iter()
        .filter(|e| e["empresa_id"] == company_id)
        .collect();
    Json(Value::Array(filtered)).into_response()
}

async fn get_employee(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == 1 {
        Json(employee_json(1, 1, "João Silva", "M", "1990-03-15")).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "mensagem": "Funcionário não encontrado." })),
        )
            .into_response()
    }
}

async fn delete_employee(
    State(mock): State<MockState>,
    headers: HeaderMap,
    Path(_id): Path<i64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    mock.deletes.fetch_add(1, Ordering::SeqCst);
    StatusCode::NO_CONTENT.into_response()
}

async fn upload_photo(
    State(mock): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    mock.uploads.fetch_add(1, Ordering::SeqCst);

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("foto") {
            let file_name = field.file_name().unwrap_or("sem-nome").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.unwrap_or_default();
            return Json(json!({
                "foto": format!("/uploads/{}/{}", id, file_name),
                "tipo": content_type,
                "tamanho": bytes.len()
            }))
            .into_response();
        }
    }
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "Campo 'foto' ausente." })),
    )
        .into_response()
}

// Lê a primeira parte do formulário e guarda o que chegou
async fn receive_file(mock: &MockState, multipart: &mut Multipart) -> Option<ReceivedFile> {
    let field = multipart.next_field().await.ok()??;
    let received = ReceivedFile {
        field: field.name().unwrap_or_default().to_string(),
        file_name: field.file_name().unwrap_or_default().to_string(),
        content_type: field.content_type().unwrap_or_default().to_string(),
        size: field.bytes().await.map(|b| b.len()).unwrap_or_default(),
    };
    mock.uploads.fetch_add(1, Ordering::SeqCst);
    *mock.last_file.lock().unwrap() = Some(received.clone());
    Some(received)
}

async fn upload_logo(
    State(mock): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match receive_file(&mock, &mut multipart).await {
        Some(file) if file.field == "logo" => Json(json!({
            "id": id,
            "nome": "Alfa S.A.",
            "cnpj": "44555666000199",
            "logo": format!("/uploads/empresas/{}/{}", id, file.file_name)
        }))
        .into_response(),
        _ => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Campo 'logo' ausente." })),
        )
            .into_response(),
    }
}

async fn upload_attachment(
    State(mock): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match receive_file(&mock, &mut multipart).await {
        Some(file) if file.file_name == FAILING_ATTACHMENT => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Falha ao gravar o anexo." })),
        )
            .into_response(),
        // Responde com a chave alternativa `caminho`
        Some(file) if file.field == "anexo" => Json(json!({
            "caminho": format!("/uploads/notificacoes/{}/{}", id, file.file_name)
        }))
        .into_response(),
        _ => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Campo 'anexo' ausente." })),
        )
            .into_response(),
    }
}

async fn delete_notification(
    State(mock): State<MockState>,
    headers: HeaderMap,
    Path(_id): Path<i64>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    mock.notifications_deleted.fetch_add(1, Ordering::SeqCst);
    StatusCode::NO_CONTENT.into_response()
}

// Sempre recusa: simula um cargo sem permissão
async fn list_users() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "Acesso negado" })),
    )
        .into_response()
}

async fn list_notifications(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let employee_id: i64 = query
        .get("funcionario_id")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    Json(json!([
        { "id": 1, "funcionario_id": employee_id, "tipo": "falta", "data_inicio": "2024-01-10" },
        { "id": 2, "funcionario_id": employee_id, "tipo": "atestado", "data_inicio": "2024-02-05", "data_fim": "2024-02-07" },
        { "id": 3, "funcionario_id": employee_id, "tipo": "meia_falta", "data_inicio": "2024-03-01", "data_fim": "2024-03-01" }
    ]))
    .into_response()
}

async fn create_notification(
    State(mock): State<MockState>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    mock.notifications_created.fetch_add(1, Ordering::SeqCst);
    body["id"] = json!(99);
    (StatusCode::CREATED, Json(body)).into_response()
}

// src/api/client.rs

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::{Method, RequestBuilder, multipart};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::common::error::{AppError, classify_status};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Cliente HTTP compartilhado por todos os repositórios.
///
/// Clonar é barato; o token fica num `Arc`, então um login feito por um
/// clone vale para todos.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

/// Arquivo pronto para ser enviado num formulário multipart.
#[derive(Debug, Clone)]
pub struct Upload {
    pub field: &'static str,
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, Uuid) {
        let request_id = Uuid::new_v4();
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }
        (builder, request_id)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let (builder, id) = self.request(Method::GET, path);
        self.send(builder, Method::GET, path, id).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (builder, id) = self.request(Method::GET, path);
        self.send(builder.query(query), Method::GET, path, id).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (builder, id) = self.request(Method::POST, path);
        self.send(builder.json(body), Method::POST, path, id).await
    }

    /// POST sem corpo (ex: /logout).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let (builder, id) = self.request(Method::POST, path);
        self.send(builder, Method::POST, path, id).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (builder, id) = self.request(Method::PUT, path);
        self.send(builder.json(body), Method::PUT, path, id).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (builder, id) = self.request(Method::PATCH, path);
        self.send(builder.json(body), Method::PATCH, path, id).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let (builder, id) = self.request(Method::DELETE, path);
        self.send::<serde_json::Value>(builder, Method::DELETE, path, id)
            .await
            .map(|_| ())
    }

    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        upload: Upload,
    ) -> Result<T, AppError> {
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(upload.mime)?;
        let form = multipart::Form::new().part(upload.field, part);

        let (builder, id) = self.request(Method::POST, path);
        self.send(builder.multipart(form), Method::POST, path, id)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: Method,
        path: &str,
        request_id: Uuid,
    ) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(%request_id, "{} {} falhou: {}", method, path, e);
            AppError::Network(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%request_id, status = status.as_u16(), "{} {}", method, path);
            return Err(classify_status(status.as_u16(), &text));
        }

        tracing::debug!(%request_id, status = status.as_u16(), "{} {}", method, path);

        // Respostas vazias (204, DELETE) viram `null`, que serve para `()` e `Option`
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(body).map_err(|e| {
            tracing::error!(%request_id, "Resposta inesperada em {} {}: {}", method, path, e);
            AppError::InvalidResponse(e.to_string())
        })
    }
}

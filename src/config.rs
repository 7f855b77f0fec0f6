// src/config.rs

use std::{env, path::PathBuf, sync::Arc, time::Duration};

use crate::{
    api::{
        ApiClient, AuthRepository, CompanyRepository, DescriptionRepository, EmployeeRepository,
        NotificationRepository, UserRepository,
    },
    common::error::AppError,
    services::{
        AuthService, CompanyService, DescriptionService, EmployeeService, NotificationService,
        UploadLimits, UserService,
    },
    store::{FileTokenStore, TokenStore},
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    // Onde ficam a sessão e a seleção atual
    pub data_dir: PathBuf,
    pub upload_limits: UploadLimits,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            timeout: Duration::from_secs(30),
            data_dir: PathBuf::from(".gestao-rh"),
            upload_limits: UploadLimits::default(),
        }
    }

    /// Lê as variáveis de ambiente (e o `.env`, se existir).
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .map_err(|_| AppError::Config("API_BASE_URL deve ser definida".to_string()))?;
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "API_BASE_URL inválida: '{}'",
                api_base_url
            )));
        }

        let mut config = Self::new(api_base_url);

        if let Some(secs) = parse_var::<u64>("API_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(dir) = env::var("RH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(max) = parse_var::<usize>("MAX_IMAGE_BYTES")? {
            config.upload_limits.max_image_bytes = max;
        }
        if let Some(max) = parse_var::<usize>("MAX_ATTACHMENT_BYTES")? {
            config.upload_limits.max_attachment_bytes = max;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} inválida: '{}'", name, value))),
        Err(_) => Ok(None),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: ApiClient,
    pub auth_service: AuthService,
    pub company_service: CompanyService,
    pub employee_service: EmployeeService,
    pub description_service: DescriptionService,
    pub user_service: UserService,
    pub notification_service: NotificationService,
}

impl AppState {
    /// Sessão persistida em arquivo dentro de `data_dir`.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let store = Arc::new(FileTokenStore::new(&config.data_dir));
        Self::with_token_store(config, store)
    }

    pub fn with_token_store(
        config: AppConfig,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, AppError> {
        let client = ApiClient::new(&config.api_base_url, config.timeout)?;
        let limits = config.upload_limits;

        // --- Monta o gráfico de dependências ---
        let auth_service = AuthService::new(AuthRepository::new(client.clone()), client.clone(), store);
        let company_service = CompanyService::new(CompanyRepository::new(client.clone()), limits);
        let employee_service = EmployeeService::new(EmployeeRepository::new(client.clone()), limits);
        let description_service = DescriptionService::new(DescriptionRepository::new(client.clone()));
        let user_service = UserService::new(UserRepository::new(client.clone()));
        let notification_service =
            NotificationService::new(NotificationRepository::new(client.clone()), limits);

        tracing::debug!("Cliente configurado para {}", client.base_url());

        Ok(Self {
            config,
            client,
            auth_service,
            company_service,
            employee_service,
            description_service,
            user_service,
            notification_service,
        })
    }
}

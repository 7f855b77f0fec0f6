pub mod auth;
pub use auth::AuthService;
pub mod company_service;
pub use company_service::CompanyService;
pub mod description_service;
pub use description_service::DescriptionService;
pub mod employee_service;
pub use employee_service::EmployeeService;
pub mod notification_service;
pub use notification_service::NotificationService;
pub mod upload;
pub use upload::UploadLimits;
pub mod user_service;
pub use user_service::UserService;

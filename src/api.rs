pub mod client;
pub use client::{ApiClient, Upload};
pub mod auth_repo;
pub use auth_repo::AuthRepository;
pub mod company_repo;
pub use company_repo::CompanyRepository;
pub mod description_repo;
pub use description_repo::DescriptionRepository;
pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod notification_repo;
pub use notification_repo::NotificationRepository;
pub mod user_repo;
pub use user_repo::UserRepository;

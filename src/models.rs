pub mod auth;
pub mod company;
pub mod description;
pub mod employee;
pub mod notification;
pub mod user;

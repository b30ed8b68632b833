pub mod admin;
pub mod articles;
pub mod auth;
pub mod home;
pub mod teams;

pub mod admin;
pub mod article;
pub mod auth;
pub mod catalog;
pub mod common;
pub mod home;
pub mod team;

pub mod admin;
pub mod article;
pub mod athlete;
pub mod game;
pub mod participation;
pub mod sport;
pub mod tag;
pub mod team;
pub mod tournament;
pub mod user;

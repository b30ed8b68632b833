mod article;
mod athlete;
mod game;
mod match_participation;
mod sport;
mod tag;
mod team;
mod tournament;
mod user;

pub use article::Article;
pub use athlete::Athlete;
pub use game::{Match, MatchStatus};
pub use match_participation::MatchParticipation;
pub use sport::Sport;
pub use tag::Tag;
pub use team::Team;
pub use tournament::Tournament;
pub use user::{Session, User};

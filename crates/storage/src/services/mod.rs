pub mod admin_site;
pub mod authorization;
pub mod pagination;
pub mod password;
pub mod slug;

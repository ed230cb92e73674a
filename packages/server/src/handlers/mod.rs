pub mod about;
pub mod auth;
pub mod link;
pub mod project;

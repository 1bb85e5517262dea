pub mod admin_auth;
pub mod admin_handlers;
pub mod admin_models;

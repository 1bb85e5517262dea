pub mod board_handlers;
pub mod board_models;

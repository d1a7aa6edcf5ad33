//! Built-in demo handlers.

pub mod main_handler;

pub use main_handler::MainHandler;

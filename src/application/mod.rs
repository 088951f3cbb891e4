pub mod commands;
pub mod dto;
pub mod error;
pub mod forms;
pub(crate) mod ownership;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;

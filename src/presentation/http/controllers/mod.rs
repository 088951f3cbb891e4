// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod notes;
pub mod pages;

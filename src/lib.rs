// Library root — re-exports all modules so integration tests can `use cantoctl::*`.

pub mod action;
pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod notify;
pub mod queue;
pub mod render;

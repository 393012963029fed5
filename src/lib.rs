//! Homelab dashboard web shell: JSON access layer, route table and dev server.

pub mod api;
pub mod cli;
pub mod config;
pub mod handlers;
pub mod hosts;
pub mod middleware;
pub mod models;
pub mod request_id;
pub mod routes;
pub mod server;
pub mod state;

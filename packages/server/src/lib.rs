// Acme Invoice Dashboard - API Core
//
// This crate provides the backend for the invoice dashboard: form-handling
// actions for invoices, credentials sign-in, and the request authorization
// policy. Rendering and routing UI concerns live elsewhere.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

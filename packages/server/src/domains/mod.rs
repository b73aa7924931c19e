pub mod auth;
pub mod invoices;

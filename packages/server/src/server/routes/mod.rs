// HTTP routes
pub mod auth;
pub mod health;
pub mod invoices;

pub use auth::*;
pub use health::*;
pub use invoices::*;

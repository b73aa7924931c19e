pub mod actions;
pub mod models;
pub mod schema;

pub use actions::{create_invoice, delete_invoice, update_invoice, ActionResult};
pub use schema::{ActionState, FieldErrors, InvoiceStatus};

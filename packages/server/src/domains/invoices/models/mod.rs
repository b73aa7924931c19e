pub mod invoice;

pub use invoice::{InvoiceUpdate, NewInvoice};

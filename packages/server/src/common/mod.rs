pub mod form;

pub use form::FormData;

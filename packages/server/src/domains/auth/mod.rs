pub mod actions;
pub mod errors;
pub mod policy;
pub mod session;

pub use actions::{authenticate, AuthOutcome};
pub use errors::SignInError;
pub use policy::{authorized, AuthDecision};
pub use session::{Session, SessionStore, SessionToken};

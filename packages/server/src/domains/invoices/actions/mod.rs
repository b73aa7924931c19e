pub mod create_invoice;
pub mod delete_invoice;
pub mod update_invoice;

pub use create_invoice::create_invoice;
pub use delete_invoice::delete_invoice;
pub use update_invoice::update_invoice;

use crate::domains::invoices::schema::ActionState;

/// Listing path revalidated and redirected to after successful writes
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Outcome of a mutation action.
///
/// Redirects are an explicit variant rather than a non-local jump; the HTTP
/// layer turns `Redirected` into an actual redirect response.
#[derive(Debug, Clone)]
pub enum ActionResult {
    /// The submission finished on the same page, successfully or not
    Completed(ActionState),
    /// The write succeeded and the client should navigate away
    Redirected(String),
}

impl ActionResult {
    /// The completed state, if the action did not redirect (test convenience)
    pub fn completed(&self) -> Option<&ActionState> {
        match self {
            Self::Completed(state) => Some(state),
            Self::Redirected(_) => None,
        }
    }
}

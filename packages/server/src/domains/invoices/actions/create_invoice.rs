//! Create invoice action - validates a submission and inserts the row

use tracing::{debug, error};

use super::{ActionResult, INVOICES_PATH};
use crate::common::FormData;
use crate::domains::invoices::models::NewInvoice;
use crate::domains::invoices::schema::{ActionState, CreateInvoiceInput};
use crate::kernel::ServerDeps;

/// Create a new invoice from a raw form submission.
///
/// On validation failure the field errors come back as state with no side
/// effects. On a confirmed insert the listing view is revalidated and the
/// client is redirected to it; a failed insert is logged and reported as a
/// static message.
pub async fn create_invoice(
    _prev: ActionState,
    form: &FormData,
    deps: &ServerDeps,
) -> ActionResult {
    let input = match CreateInvoiceInput::parse(form) {
        Ok(input) => input,
        Err(errors) => {
            return ActionResult::Completed(ActionState::invalid(
                errors,
                "Missing Fields. Failed to Create Invoice.",
            ));
        }
    };

    // Store amounts in cents; stamp the invoice with today's date
    let amount_in_cents = (input.amount * 100.0).round() as i64;
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let new_invoice = NewInvoice {
        customer_id: input.customer_id,
        amount: amount_in_cents,
        status: input.status,
        date,
    };

    debug!("Creating invoice for customer {}", new_invoice.customer_id);

    if let Err(e) = deps.invoices.insert(&new_invoice).await {
        error!("Failed to insert invoice: {}", e);
        return ActionResult::Completed(ActionState::message(
            "Database Error: Failed to Create Invoice.",
        ));
    }

    deps.view_cache.revalidate(INVOICES_PATH).await;
    ActionResult::Redirected(INVOICES_PATH.to_string())
}

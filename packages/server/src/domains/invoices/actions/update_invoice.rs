//! Update invoice action

use tracing::{debug, error};

use super::{ActionResult, INVOICES_PATH};
use crate::common::FormData;
use crate::domains::invoices::models::InvoiceUpdate;
use crate::domains::invoices::schema::{ActionState, UpdateInvoiceInput};
use crate::kernel::ServerDeps;

/// Update an existing invoice from a raw form submission.
///
/// Same contract as create, with the update variant of the schema: `id` is
/// required and the stored date is left untouched.
pub async fn update_invoice(
    _prev: ActionState,
    form: &FormData,
    deps: &ServerDeps,
) -> ActionResult {
    let input = match UpdateInvoiceInput::parse(form) {
        Ok(input) => input,
        Err(errors) => {
            return ActionResult::Completed(ActionState::invalid(
                errors,
                "Missing Fields. Failed to Update Invoice.",
            ));
        }
    };

    let update = InvoiceUpdate {
        id: input.id,
        customer_id: input.customer_id,
        amount: (input.amount * 100.0).round() as i64,
        status: input.status,
    };

    debug!("Updating invoice {}", update.id);

    if let Err(e) = deps.invoices.update(&update).await {
        error!("Failed to update invoice {}: {}", update.id, e);
        return ActionResult::Completed(ActionState::message(
            "Database Error: Failed to Update Invoice.",
        ));
    }

    deps.view_cache.revalidate(INVOICES_PATH).await;
    ActionResult::Redirected(INVOICES_PATH.to_string())
}

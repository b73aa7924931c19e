//! Delete invoice action

use tracing::{debug, error};

use super::{ActionResult, INVOICES_PATH};
use crate::common::FormData;
use crate::domains::invoices::schema::ActionState;
use crate::kernel::ServerDeps;

/// Delete the invoice named by the form's `id` field.
///
/// No schema validation beyond extracting the id. The caller stays on the
/// listing page, so success is reported as state rather than a redirect.
pub async fn delete_invoice(form: &FormData, deps: &ServerDeps) -> ActionResult {
    let Some(id) = form.get("id").filter(|id| !id.is_empty()) else {
        return ActionResult::Completed(ActionState::message(
            "Database Error: Failed to Delete Invoice.",
        ));
    };

    debug!("Deleting invoice {}", id);

    if let Err(e) = deps.invoices.delete(id).await {
        error!("Failed to delete invoice {}: {}", id, e);
        return ActionResult::Completed(ActionState::message(
            "Database Error: Failed to Delete Invoice.",
        ));
    }

    deps.view_cache.revalidate(INVOICES_PATH).await;
    ActionResult::Completed(ActionState::message("Deleted Invoice."))
}

//! Invoice form validation
//!
//! Each field is checked independently and every failure is reported; the
//! caller gets the full set of field errors in one pass rather than the first
//! one encountered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::common::FormData;

/// Invoice status as submitted from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// Per-field validation messages, keyed by the submitted field name
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// State threaded through a form submission attempt.
///
/// Created fresh per attempt, consumed by the client, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionState {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }

    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }
}

/// Validated input for invoice creation.
///
/// `id` is store-generated and `date` server-generated, so neither is part of
/// the submitted input.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInvoiceInput {
    pub customer_id: String,
    /// Dollar amount as submitted; converted to minor units by the action
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Validated input for invoice update: creation fields plus the row id.
/// `date` is never updated.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInvoiceInput {
    pub id: String,
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

const CUSTOMER_ERROR: &str = "Please select a customer.";
const AMOUNT_ERROR: &str = "Please enter an amount greater than $0.";
const STATUS_ERROR: &str = "Please select an invoice status.";
const ID_ERROR: &str = "Missing invoice id.";

fn check_customer(form: &FormData) -> Result<String, String> {
    match form.get("customerId") {
        Some(raw) if !raw.is_empty() => Ok(raw.to_string()),
        _ => Err(CUSTOMER_ERROR.to_string()),
    }
}

/// Coerce the submitted string to a number; coercion failure and
/// out-of-range values produce the same field error.
fn check_amount(form: &FormData) -> Result<f64, String> {
    form.get("amount")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|amount| *amount > 0.0)
        .ok_or_else(|| AMOUNT_ERROR.to_string())
}

fn check_status(form: &FormData) -> Result<InvoiceStatus, String> {
    form.get("status")
        .and_then(InvoiceStatus::parse)
        .ok_or_else(|| STATUS_ERROR.to_string())
}

fn check_id(form: &FormData) -> Result<String, String> {
    match form.get("id") {
        Some(raw) if !raw.is_empty() => Ok(raw.to_string()),
        _ => Err(ID_ERROR.to_string()),
    }
}

/// Record a field check outcome, accumulating the error message on failure
fn collect<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    checked: Result<T, String>,
) -> Option<T> {
    match checked {
        Ok(value) => Some(value),
        Err(message) => {
            errors.entry(field).or_default().push(message);
            None
        }
    }
}

impl CreateInvoiceInput {
    /// Validate a raw submission for the create variant
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = collect(&mut errors, "customerId", check_customer(form));
        let amount = collect(&mut errors, "amount", check_amount(form));
        let status = collect(&mut errors, "status", check_status(form));

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) => Ok(Self {
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

impl UpdateInvoiceInput {
    /// Validate a raw submission for the update variant (requires `id`)
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let id = collect(&mut errors, "id", check_id(form));
        let customer_id = collect(&mut errors, "customerId", check_customer(form));
        let amount = collect(&mut errors, "amount", check_amount(form));
        let status = collect(&mut errors, "status", check_status(form));

        match (id, customer_id, amount, status) {
            (Some(id), Some(customer_id), Some(amount), Some(status)) => Ok(Self {
                id,
                customer_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}

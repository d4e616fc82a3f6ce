//! Invoice entity and the `BX`-prefixed identity token.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::client::ClientId;
use super::project::ProjectId;

/// Prefix carried by every well-formed invoice identity.
const INVOICE_ID_PREFIX: &str = "BX";

/// Invoice identity token, `"BX"` followed by a zero-padded sequence
/// number (`BX0001`, `BX0002`, ...).
///
/// Tokens from external data are accepted verbatim even when malformed;
/// [`InvoiceId::sequence`] simply yields `None` for them so sequencing
/// skips over garbage instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

impl InvoiceId {
    /// Wrap a raw identity token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Render the canonical token for a sequence number.
    #[must_use]
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("{INVOICE_ID_PREFIX}{sequence:04}"))
    }

    /// Parse the numeric suffix, if the token carries one.
    #[must_use]
    pub fn sequence(&self) -> Option<u32> {
        self.0
            .strip_prefix(INVOICE_ID_PREFIX)
            .and_then(|suffix| suffix.parse().ok())
    }

    /// Borrow the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for InvoiceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Settled in full.
    Paid,
    /// Issued, awaiting payment.
    Pending,
    /// Past its due date without payment.
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// Invoice record owned by the entity store.
///
/// Unlike clients and projects, the identity is assigned by the caller
/// (via [`super::EntityStore::next_invoice_id`]) before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Invoice {
    /// Formatted identity token.
    pub id: InvoiceId,
    /// Billed client.
    pub client_id: ClientId,
    /// Projects covered by this invoice.
    pub project_ids: Vec<ProjectId>,
    /// Line-item description.
    pub description: String,
    /// Subtotal before tax.
    pub amount: f64,
    /// Payment deadline.
    pub due_date: NaiveDate,
    /// Payment state.
    pub status: InvoiceStatus,
}

// A line item is one service on an invoice. It is created from a form draft
// with a generated identifier and edited in place; its line total is always
// derived from quantity and unit price and can never be set directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single line item in an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LineItemDraft")]
pub struct InvoiceLineItem {
    /// Unique within an invoice
    pub id: String,

    /// Description of the service
    pub description: String,

    quantity: Decimal,

    unit_price: Decimal,

    /// quantity × unit_price, recomputed on every change. `None` when the
    /// product does not fit in a `Decimal`.
    line_total: Option<Decimal>,

    /// Whether the line participates in tax calculation
    pub taxable: bool,
}

/// Line item as submitted by a client. Any `lineTotal` in the payload is
/// ignored; the total is recomputed on conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    #[serde(default = "default_taxable")]
    pub taxable: bool,
}

fn default_taxable() -> bool {
    true
}

impl InvoiceLineItem {
    /// Create a line item with a freshly generated identifier.
    ///
    /// Values are not validated here; run
    /// [`validate_invoice_items`](crate::modules::invoices::services::validation::validate_invoice_items)
    /// before assembling an invoice.
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        taxable: bool,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            description,
            quantity,
            unit_price,
            taxable,
        )
    }

    pub fn with_id(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        taxable: bool,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price,
            line_total: quantity.checked_mul(unit_price),
            taxable,
        }
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `None` when quantity × unit_price is out of range
    pub fn line_total(&self) -> Option<Decimal> {
        self.line_total
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.recalculate();
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.line_total = self.quantity.checked_mul(self.unit_price);
    }
}

impl From<LineItemDraft> for InvoiceLineItem {
    fn from(draft: LineItemDraft) -> Self {
        let id = draft
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self::with_id(
            id,
            draft.description,
            draft.quantity,
            draft.unit_price,
            draft.taxable,
        )
    }
}

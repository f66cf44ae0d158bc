//! Quotation draft state
//!
//! Holds the quotation being composed and keeps the derived totals
//! consistent: item total = quantity x unit price, subtotal is the sum of
//! item totals, tax is applied as a percentage of the subtotal.

use serde::{Deserialize, Serialize};

/// One itemized row of the quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl LineItem {
    /// An empty row, the shape a newly added item starts with
    pub fn empty() -> Self {
        Self {
            description: String::new(),
            quantity: 1.0,
            unit_price: 0.0,
            total: 0.0,
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::empty()
    }
}

/// The quotation being composed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuotationDraft {
    pub company_name: String,
    pub company_phone: String,
    pub company_address: String,
    pub company_email: String,
    #[serde(rename = "companyGSTIN")]
    pub company_gstin: String,
    #[serde(rename = "companyPAN")]
    pub company_pan: String,
    pub company_contact_name: String,
    pub company_logo_url: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_address: String,
    pub client_email: String,
    pub quote_number: String,
    pub quote_date: String,
    pub valid_until: String,
    pub tax_rate: f64,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    pub notes: String,
    pub terms: String,
    pub items: Vec<LineItem>,
}

impl QuotationDraft {
    /// A fresh draft with one empty item row
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::empty()],
            ..Default::default()
        }
    }

    /// Append an empty item row
    pub fn add_item(&mut self) {
        self.items.push(LineItem::empty());
    }

    /// Remove an item row and recompute totals
    ///
    /// The last remaining row is never removed.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
            self.recalculate();
        }
    }

    /// Update one field of an item row and recompute totals
    pub fn set_item(&mut self, index: usize, description: &str, quantity: f64, unit_price: f64) {
        if let Some(item) = self.items.get_mut(index) {
            item.description = description.to_string();
            item.quantity = quantity;
            item.unit_price = unit_price;
            self.recalculate();
        }
    }

    /// Change the tax rate (percent) and recompute totals
    pub fn set_tax_rate(&mut self, rate: f64) {
        self.tax_rate = if rate.is_finite() { rate } else { 0.0 };
        self.recalculate();
    }

    /// Recompute item totals, subtotal, tax amount and grand total
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.total = item.quantity * item.unit_price;
        }
        self.subtotal = self.items.iter().map(|i| i.total).sum();
        self.tax_amount = self.subtotal * (self.tax_rate / 100.0);
        self.total = self.subtotal + self.tax_amount;
    }
}

/// Format an ISO `YYYY-MM-DD` date for display as `DD/MM/YYYY`
///
/// Anything that does not look like an ISO date is passed through
/// unchanged.
pub fn format_display_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month, day]
            if year.len() == 4
                && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) =>
        {
            format!("{}/{}/{}", day, month, year)
        }
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_one_empty_item() {
        let draft = QuotationDraft::new();
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0], LineItem::empty());
        assert_eq!(draft.total, 0.0);
    }

    #[test]
    fn test_item_update_recomputes_totals() {
        let mut draft = QuotationDraft::new();
        draft.set_tax_rate(18.0);
        draft.set_item(0, "Design work", 4.0, 1500.0);
        draft.add_item();
        draft.set_item(1, "Hosting", 12.0, 200.0);

        assert_eq!(draft.items[0].total, 6000.0);
        assert_eq!(draft.items[1].total, 2400.0);
        assert_eq!(draft.subtotal, 8400.0);
        assert_eq!(draft.tax_amount, 1512.0);
        assert_eq!(draft.total, 9912.0);
    }

    #[test]
    fn test_remove_item_recomputes() {
        let mut draft = QuotationDraft::new();
        draft.set_item(0, "A", 1.0, 100.0);
        draft.add_item();
        draft.set_item(1, "B", 1.0, 50.0);
        assert_eq!(draft.subtotal, 150.0);

        draft.remove_item(1);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.subtotal, 100.0);
        assert_eq!(draft.total, 100.0);
    }

    #[test]
    fn test_last_item_is_never_removed() {
        let mut draft = QuotationDraft::new();
        draft.set_item(0, "Only row", 2.0, 10.0);
        draft.remove_item(0);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].description, "Only row");
    }

    #[test]
    fn test_tax_rate_change_recomputes() {
        let mut draft = QuotationDraft::new();
        draft.set_item(0, "A", 1.0, 1000.0);
        draft.set_tax_rate(5.0);
        assert_eq!(draft.tax_amount, 50.0);
        assert_eq!(draft.total, 1050.0);

        draft.set_tax_rate(0.0);
        assert_eq!(draft.tax_amount, 0.0);
        assert_eq!(draft.total, 1000.0);
    }

    #[test]
    fn test_serde_camel_case_shape() {
        let mut draft = QuotationDraft::new();
        draft.quote_number = "Q-001".to_string();
        draft.company_gstin = "22AAAAA0000A1Z5".to_string();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["quoteNumber"], "Q-001");
        assert_eq!(json["companyGSTIN"], "22AAAAA0000A1Z5");
        assert!(json["items"].is_array());
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2025-03-07"), "07/03/2025");
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("tomorrow"), "tomorrow");
    }
}

//! QuoteForge Data Model
//!
//! Quotation drafts (line items and tax arithmetic) and company profile
//! records with field validation.

mod company;
mod quotation;

pub use company::{CompanyProfile, ValidationError, ValidationResult};
pub use quotation::{format_display_date, LineItem, QuotationDraft};

//! QuoteForge Document Renderer
//!
//! Assembles the quotation's document blocks into a display list using the
//! layout store's current position and style for each, and exposes the
//! print action. Purely a reader of layout state.

mod display_list;
mod printer;

pub use display_list::{build_display_list, BlockFragment};
pub use printer::print_document;

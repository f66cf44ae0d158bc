//! Print action
//!
//! Writes the assembled document to any writer, one block after another in
//! visual order. The document itself is not mutated.

use std::io::{self, Write};

use quoteforge_layout::{LayoutStore, StoragePort};
use quoteforge_model::QuotationDraft;

use crate::display_list::build_display_list;

/// Print the quotation document
pub fn print_document<S: StoragePort>(
    draft: &QuotationDraft,
    store: &LayoutStore<S>,
    out: &mut impl Write,
) -> io::Result<()> {
    for fragment in build_display_list(draft, store) {
        if fragment.lines.is_empty() {
            continue;
        }
        writeln!(out, "=== {} ===", fragment.title)?;
        for line in &fragment.lines {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteforge_layout::MemoryStorage;

    #[test]
    fn test_print_document() {
        let mut draft = QuotationDraft::new();
        draft.company_name = "Acme Traders".to_string();
        draft.quote_number = "Q-001".to_string();
        draft.set_item(0, "Design work", 1.0, 100.0);

        let store = LayoutStore::new(MemoryStorage::new());
        let mut out = Vec::new();
        print_document(&draft, &store, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== Header ===\nAcme Traders\n"));
        assert!(text.contains("QUOTATION Q-001"));
        assert!(text.contains("Design work"));
        // Empty notes/terms blocks are skipped entirely
        assert!(!text.contains("=== Notes ==="));
    }
}

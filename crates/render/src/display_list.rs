//! Display list assembly
//!
//! Flattens the quotation document into positioned, styled fragments, one
//! per template block, in visual (top-to-bottom) order.

use log::debug;

use quoteforge_geometry::Rect;
use quoteforge_layout::{BlockId, LayoutStore, StoragePort};
use quoteforge_model::{format_display_date, QuotationDraft};
use quoteforge_style::BlockStyle;

/// One positioned document block, ready to paint or print
#[derive(Debug, Clone, PartialEq)]
pub struct BlockFragment {
    pub id: BlockId,
    pub frame: Rect,
    pub style: BlockStyle,
    /// Short heading shown for the block
    pub title: String,
    /// Content lines inside the block
    pub lines: Vec<String>,
}

/// Build the display list for a quotation
///
/// Reads positions and styles from the layout store without mutating it.
/// Fragments come back sorted by vertical position, then horizontal.
pub fn build_display_list<S: StoragePort>(
    draft: &QuotationDraft,
    store: &LayoutStore<S>,
) -> Vec<BlockFragment> {
    let mut fragments: Vec<BlockFragment> = BlockId::all()
        .iter()
        .map(|id| BlockFragment {
            id: *id,
            frame: store.layout(*id).frame(),
            style: store.style(*id),
            title: block_title(*id).to_string(),
            lines: block_lines(*id, draft),
        })
        .collect();

    fragments.sort_by(|a, b| {
        (a.frame.y, a.frame.x)
            .partial_cmp(&(b.frame.y, b.frame.x))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!("Built display list with {} fragments", fragments.len());
    fragments
}

fn block_title(id: BlockId) -> &'static str {
    match id {
        BlockId::Header => "Header",
        BlockId::CompanyInfo => "Company",
        BlockId::ClientInfo => "Bill To",
        BlockId::Title => "Quotation",
        BlockId::ItemsTable => "Items",
        BlockId::Totals => "Totals",
        BlockId::Notes => "Notes",
        BlockId::Terms => "Terms",
        BlockId::Footer => "Footer",
    }
}

fn block_lines(id: BlockId, draft: &QuotationDraft) -> Vec<String> {
    match id {
        BlockId::Header => {
            let mut lines = vec![non_empty(&draft.company_name, "Quotation")];
            if !draft.company_logo_url.is_empty() {
                lines.push(format!("Logo: {}", draft.company_logo_url));
            }
            lines
        }
        BlockId::CompanyInfo => {
            let mut lines = Vec::new();
            push_if_set(&mut lines, "", &draft.company_address);
            push_if_set(&mut lines, "Contact: ", &draft.company_contact_name);
            push_if_set(&mut lines, "Phone: ", &draft.company_phone);
            push_if_set(&mut lines, "Email: ", &draft.company_email);
            push_if_set(&mut lines, "GSTIN: ", &draft.company_gstin);
            push_if_set(&mut lines, "PAN: ", &draft.company_pan);
            lines
        }
        BlockId::ClientInfo => {
            let mut lines = vec![non_empty(&draft.client_name, "(no client)")];
            push_if_set(&mut lines, "", &draft.client_address);
            push_if_set(&mut lines, "Phone: ", &draft.client_phone);
            push_if_set(&mut lines, "Email: ", &draft.client_email);
            lines
        }
        BlockId::Title => {
            let mut lines = vec![format!("QUOTATION {}", draft.quote_number)];
            push_if_set(&mut lines, "Date: ", &format_display_date(&draft.quote_date));
            push_if_set(&mut lines, "Valid until: ", &format_display_date(&draft.valid_until));
            lines
        }
        BlockId::ItemsTable => {
            let mut lines = vec!["Description | Qty | Unit Price | Total".to_string()];
            for item in &draft.items {
                lines.push(format!(
                    "{} | {} | {} | {}",
                    non_empty(&item.description, "-"),
                    item.quantity,
                    format_money(item.unit_price),
                    format_money(item.total),
                ));
            }
            lines
        }
        BlockId::Totals => {
            vec![
                format!("Subtotal: {}", format_money(draft.subtotal)),
                format!("Tax ({}%): {}", draft.tax_rate, format_money(draft.tax_amount)),
                format!("Total: {}", format_money(draft.total)),
            ]
        }
        BlockId::Notes => text_block(&draft.notes),
        BlockId::Terms => text_block(&draft.terms),
        BlockId::Footer => vec!["Thank you for your business.".to_string()],
    }
}

fn format_money(amount: f64) -> String {
    format!("\u{20b9}{:.2}", amount)
}

fn non_empty(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn push_if_set(lines: &mut Vec<String>, prefix: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{}{}", prefix, value));
    }
}

fn text_block(text: &str) -> Vec<String> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.lines().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoteforge_geometry::Point;
    use quoteforge_layout::MemoryStorage;

    fn draft() -> QuotationDraft {
        let mut draft = QuotationDraft::new();
        draft.company_name = "Acme Traders".to_string();
        draft.client_name = "Bharat Retail".to_string();
        draft.quote_number = "Q-042".to_string();
        draft.quote_date = "2025-03-07".to_string();
        draft.set_tax_rate(18.0);
        draft.set_item(0, "Design work", 4.0, 1500.0);
        draft
    }

    fn store() -> LayoutStore<MemoryStorage> {
        LayoutStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_one_fragment_per_block() {
        let fragments = build_display_list(&draft(), &store());
        assert_eq!(fragments.len(), BlockId::all().len());
    }

    #[test]
    fn test_fragments_in_visual_order() {
        let mut store = store();
        // Move the totals block above the header
        store.set_snap_to_grid(false);
        store.update_position(BlockId::Totals, Point::new(400.0, 0.0));

        let fragments = build_display_list(&draft(), &store);
        for pair in fragments.windows(2) {
            assert!(pair[0].frame.y <= pair[1].frame.y);
        }
        // header (0,0) sorts before totals (400,0)
        assert_eq!(fragments[0].id, BlockId::Header);
        assert_eq!(fragments[1].id, BlockId::Totals);
    }

    #[test]
    fn test_frames_come_from_store() {
        let fragments = build_display_list(&draft(), &store());
        let totals = fragments.iter().find(|f| f.id == BlockId::Totals).unwrap();
        assert_eq!(totals.frame, Rect::new(0.0, 580.0, 400.0, 120.0));
    }

    #[test]
    fn test_totals_lines() {
        let fragments = build_display_list(&draft(), &store());
        let totals = fragments.iter().find(|f| f.id == BlockId::Totals).unwrap();
        assert_eq!(totals.lines[0], "Subtotal: \u{20b9}6000.00");
        assert_eq!(totals.lines[1], "Tax (18%): \u{20b9}1080.00");
        assert_eq!(totals.lines[2], "Total: \u{20b9}7080.00");
    }

    #[test]
    fn test_title_uses_display_date() {
        let fragments = build_display_list(&draft(), &store());
        let title = fragments.iter().find(|f| f.id == BlockId::Title).unwrap();
        assert_eq!(title.lines[0], "QUOTATION Q-042");
        assert_eq!(title.lines[1], "Date: 07/03/2025");
    }

    #[test]
    fn test_items_table_rows() {
        let fragments = build_display_list(&draft(), &store());
        let items = fragments.iter().find(|f| f.id == BlockId::ItemsTable).unwrap();
        assert_eq!(items.lines.len(), 2);
        assert!(items.lines[1].contains("Design work"));
        assert!(items.lines[1].contains("\u{20b9}6000.00"));
    }
}

//! Document block identity and frames
//!
//! The quotation template has a fixed set of nine blocks; blocks are never
//! created or deleted at runtime.

use serde::{Deserialize, Serialize};

use quoteforge_geometry::{Rect, Size};

/// Fallback pixel width used when a block's width is `auto`
pub const FALLBACK_WIDTH: f32 = 200.0;
/// Fallback pixel height used when a block's height is `auto`
pub const FALLBACK_HEIGHT: f32 = 100.0;

/// Identifier of a document block, stable across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockId {
    Header,
    CompanyInfo,
    ClientInfo,
    Title,
    ItemsTable,
    Totals,
    Notes,
    Terms,
    Footer,
}

/// All template blocks in document order
pub const ALL_BLOCKS: [BlockId; 9] = [
    BlockId::Header,
    BlockId::CompanyInfo,
    BlockId::ClientInfo,
    BlockId::Title,
    BlockId::ItemsTable,
    BlockId::Totals,
    BlockId::Notes,
    BlockId::Terms,
    BlockId::Footer,
];

impl BlockId {
    /// All template blocks in document order
    pub fn all() -> &'static [BlockId] {
        &ALL_BLOCKS
    }

    /// Stable string form, as used in the persisted snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::CompanyInfo => "company-info",
            Self::ClientInfo => "client-info",
            Self::Title => "title",
            Self::ItemsTable => "items-table",
            Self::Totals => "totals",
            Self::Notes => "notes",
            Self::Terms => "terms",
            Self::Footer => "footer",
        }
    }

    /// Look up a block by its stable string form
    pub fn parse(id: &str) -> Option<Self> {
        ALL_BLOCKS.iter().find(|b| b.as_str() == id).copied()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A block dimension: a fixed pixel extent or natural sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Px(f32),
    /// Serialized as the string `"auto"`
    Auto(AutoMarker),
}

/// Serde marker for the `"auto"` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoMarker {
    #[serde(rename = "auto")]
    Auto,
}

impl Extent {
    pub const AUTO: Extent = Extent::Auto(AutoMarker::Auto);

    /// Pixel value, or `fallback` for auto sizing
    pub fn px_or(&self, fallback: f32) -> f32 {
        match self {
            Self::Px(v) => *v,
            Self::Auto(_) => fallback,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

impl From<f32> for Extent {
    fn from(value: f32) -> Self {
        Self::Px(value)
    }
}

/// Position and size of one document block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockLayout {
    pub x: f32,
    pub y: f32,
    pub width: Extent,
    pub height: Extent,
}

impl BlockLayout {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: Extent::Px(width),
            height: Extent::Px(height),
        }
    }

    /// Effective pixel size, auto extents replaced by the drag fallbacks
    pub fn effective_size(&self) -> Size {
        Size::new(
            self.width.px_or(FALLBACK_WIDTH),
            self.height.px_or(FALLBACK_HEIGHT),
        )
    }

    /// Frame rectangle using the effective size
    pub fn frame(&self) -> Rect {
        let size = self.effective_size();
        Rect::new(self.x, self.y, size.width, size.height)
    }

    /// Hard-coded starting frame for a template block
    pub fn default_for(id: BlockId) -> Self {
        match id {
            BlockId::Header => Self::new(0.0, 0.0, 600.0, 60.0),
            BlockId::CompanyInfo => Self::new(0.0, 80.0, 600.0, 180.0),
            BlockId::ClientInfo => Self::new(0.0, 280.0, 600.0, 40.0),
            BlockId::Title => Self::new(0.0, 340.0, 600.0, 50.0),
            BlockId::ItemsTable => Self::new(0.0, 400.0, 600.0, 160.0),
            BlockId::Totals => Self::new(0.0, 580.0, 400.0, 120.0),
            BlockId::Notes => Self::new(0.0, 720.0, 400.0, 80.0),
            BlockId::Terms => Self::new(0.0, 820.0, 400.0, 80.0),
            BlockId::Footer => Self::new(0.0, 920.0, 400.0, 60.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_id_string_round_trip() {
        for id in BlockId::all() {
            assert_eq!(BlockId::parse(id.as_str()), Some(*id));
        }
        assert_eq!(BlockId::parse("sidebar"), None);
    }

    #[test]
    fn test_block_id_serde_kebab_case() {
        let json = serde_json::to_string(&BlockId::ItemsTable).unwrap();
        assert_eq!(json, r#""items-table""#);
        let id: BlockId = serde_json::from_str(r#""company-info""#).unwrap();
        assert_eq!(id, BlockId::CompanyInfo);
    }

    #[test]
    fn test_extent_serde() {
        assert_eq!(serde_json::to_string(&Extent::Px(600.0)).unwrap(), "600.0");
        assert_eq!(serde_json::to_string(&Extent::AUTO).unwrap(), r#""auto""#);

        let px: Extent = serde_json::from_str("600").unwrap();
        assert_eq!(px, Extent::Px(600.0));
        let auto: Extent = serde_json::from_str(r#""auto""#).unwrap();
        assert!(auto.is_auto());
    }

    #[test]
    fn test_effective_size_fallbacks() {
        let layout = BlockLayout {
            x: 0.0,
            y: 0.0,
            width: Extent::AUTO,
            height: Extent::Px(80.0),
        };
        let size = layout.effective_size();
        assert_eq!(size.width, FALLBACK_WIDTH);
        assert_eq!(size.height, 80.0);
    }

    #[test]
    fn test_default_frames() {
        let totals = BlockLayout::default_for(BlockId::Totals);
        assert_eq!(totals.x, 0.0);
        assert_eq!(totals.y, 580.0);
        assert_eq!(totals.width, Extent::Px(400.0));
        assert_eq!(totals.height, Extent::Px(120.0));

        let header = BlockLayout::default_for(BlockId::Header);
        assert_eq!(header.frame().width, 600.0);
    }
}

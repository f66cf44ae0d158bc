//! QuoteForge Style System
//!
//! Typed style tokens for document blocks. Every attribute draws its value
//! from a fixed palette; anything outside the palette is rejected at the
//! mutation boundary and dropped when loading persisted state.

mod block_style;
mod error;
mod tokens;

pub use block_style::{BlockStyle, RawStyleOverride, StyleOverride};
pub use error::{StyleError, StyleResult};
pub use tokens::{
    BackgroundColor, BorderColor, BorderWidth, FontSize, FontWeight, Padding, StyleToken,
    TextColor,
};

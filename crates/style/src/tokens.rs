//! Style token palettes
//!
//! One enum per block style attribute. Tokens serialize to the same strings
//! the durable storage snapshot uses, so the persisted format is stable.

use crate::error::{StyleError, StyleResult};

/// Common surface of every style attribute palette
///
/// Parsing goes through the palette list, so a token outside the palette
/// can never produce a value.
pub trait StyleToken: Sized + Copy + PartialEq + 'static {
    /// Attribute name used in error messages and the storage snapshot
    const ATTRIBUTE: &'static str;

    /// All palette values, in panel display order
    fn all() -> &'static [Self];

    /// Storage token for this value
    fn token(&self) -> &'static str;

    /// Human-readable label for panel buttons
    fn label(&self) -> &'static str;

    /// Parse a storage token, rejecting anything outside the palette
    fn parse(token: &str) -> StyleResult<Self> {
        Self::all()
            .iter()
            .find(|v| v.token() == token)
            .copied()
            .ok_or_else(|| StyleError::unknown(Self::ATTRIBUTE, token))
    }
}

/// Font size palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Xs,
    #[default]
    Sm,
    Base,
    Lg,
    Xl,
    Xxl,
}

impl StyleToken for FontSize {
    const ATTRIBUTE: &'static str = "fontSize";

    fn all() -> &'static [Self] {
        &[Self::Xs, Self::Sm, Self::Base, Self::Lg, Self::Xl, Self::Xxl]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Base => "text-base",
            Self::Lg => "text-lg",
            Self::Xl => "text-xl",
            Self::Xxl => "text-2xl",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::Sm => "SM",
            Self::Base => "MD",
            Self::Lg => "LG",
            Self::Xl => "XL",
            Self::Xxl => "2XL",
        }
    }
}

/// Font weight palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

impl StyleToken for FontWeight {
    const ATTRIBUTE: &'static str = "fontWeight";

    fn all() -> &'static [Self] {
        &[Self::Normal, Self::Medium, Self::Bold]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Normal => "font-normal",
            Self::Medium => "font-medium",
            Self::Bold => "font-bold",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Medium => "Medium",
            Self::Bold => "Bold",
        }
    }
}

/// Text color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    #[default]
    Gray800,
    Black,
    Blue,
    Red,
    Green,
}

impl StyleToken for TextColor {
    const ATTRIBUTE: &'static str = "textColor";

    fn all() -> &'static [Self] {
        &[Self::Gray800, Self::Black, Self::Blue, Self::Red, Self::Green]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Gray800 => "text-gray-800",
            Self::Black => "text-black",
            Self::Blue => "text-blue-600",
            Self::Red => "text-red-600",
            Self::Green => "text-green-600",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Gray800 => "Gray 800",
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Green => "Green",
        }
    }
}

/// Background color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundColor {
    #[default]
    White,
    Gray50,
    Blue50,
    Yellow50,
    Green50,
}

impl StyleToken for BackgroundColor {
    const ATTRIBUTE: &'static str = "backgroundColor";

    fn all() -> &'static [Self] {
        &[Self::White, Self::Gray50, Self::Blue50, Self::Yellow50, Self::Green50]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::White => "bg-white",
            Self::Gray50 => "bg-gray-50",
            Self::Blue50 => "bg-blue-50",
            Self::Yellow50 => "bg-yellow-50",
            Self::Green50 => "bg-green-50",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Gray50 => "Gray 50",
            Self::Blue50 => "Blue 50",
            Self::Yellow50 => "Yellow 50",
            Self::Green50 => "Green 50",
        }
    }
}

/// Border color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderColor {
    #[default]
    Gray,
    Black,
    Blue,
    Red,
}

impl StyleToken for BorderColor {
    const ATTRIBUTE: &'static str = "borderStyle";

    fn all() -> &'static [Self] {
        &[Self::Gray, Self::Black, Self::Blue, Self::Red]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::Gray => "border-gray-300",
            Self::Black => "border-black",
            Self::Blue => "border-blue-500",
            Self::Red => "border-red-500",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Gray => "Gray",
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Red => "Red",
        }
    }
}

/// Border width palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderWidth {
    None,
    #[default]
    Thin,
    Medium,
    Thick,
}

impl StyleToken for BorderWidth {
    const ATTRIBUTE: &'static str = "borderWidth";

    fn all() -> &'static [Self] {
        &[Self::None, Self::Thin, Self::Medium, Self::Thick]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::None => "border-0",
            Self::Thin => "border",
            Self::Medium => "border-2",
            Self::Thick => "border-4",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Thin => "Thin",
            Self::Medium => "Medium",
            Self::Thick => "Thick",
        }
    }
}

/// Padding palette
///
/// Not exposed in the customization panel, but persisted snapshots may
/// carry an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    P0,
    P1,
    #[default]
    P2,
    P3,
    P4,
}

impl StyleToken for Padding {
    const ATTRIBUTE: &'static str = "padding";

    fn all() -> &'static [Self] {
        &[Self::P0, Self::P1, Self::P2, Self::P3, Self::P4]
    }

    fn token(&self) -> &'static str {
        match self {
            Self::P0 => "p-0",
            Self::P1 => "p-1",
            Self::P2 => "p-2",
            Self::P3 => "p-3",
            Self::P4 => "p-4",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::P0 => "None",
            Self::P1 => "Tight",
            Self::P2 => "Normal",
            Self::P3 => "Relaxed",
            Self::P4 => "Loose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for size in FontSize::all() {
            assert_eq!(FontSize::parse(size.token()).unwrap(), *size);
        }
        for color in TextColor::all() {
            assert_eq!(TextColor::parse(color.token()).unwrap(), *color);
        }
        for width in BorderWidth::all() {
            assert_eq!(BorderWidth::parse(width.token()).unwrap(), *width);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = FontSize::parse("text-9xl").unwrap_err();
        assert_eq!(err, StyleError::unknown("fontSize", "text-9xl"));
        assert!(BackgroundColor::parse("bg-pink-500").is_err());
        assert!(BorderColor::parse("").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FontSize::default().token(), "text-sm");
        assert_eq!(FontWeight::default().token(), "font-normal");
        assert_eq!(TextColor::default().token(), "text-gray-800");
        assert_eq!(BackgroundColor::default().token(), "bg-white");
        assert_eq!(BorderColor::default().token(), "border-gray-300");
        assert_eq!(BorderWidth::default().token(), "border");
        assert_eq!(Padding::default().token(), "p-2");
    }

    #[test]
    fn test_panel_option_counts() {
        assert_eq!(FontSize::all().len(), 6);
        assert_eq!(FontWeight::all().len(), 3);
        assert_eq!(TextColor::all().len(), 5);
        assert_eq!(BackgroundColor::all().len(), 5);
        assert_eq!(BorderColor::all().len(), 4);
        assert_eq!(BorderWidth::all().len(), 4);
    }
}

//! Block style resolution
//!
//! A [`BlockStyle`] is a fully resolved set of attributes; a
//! [`StyleOverride`] holds only the attributes a block deviates from the
//! defaults on. Overrides are what the durable snapshot stores.

use serde::{Deserialize, Serialize};

use crate::tokens::{
    BackgroundColor, BorderColor, BorderWidth, FontSize, FontWeight, Padding, StyleToken,
    TextColor,
};

/// Fully resolved style for one document block
///
/// Every attribute carries an in-palette value; there is no "unset" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockStyle {
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub text_color: TextColor,
    pub background_color: BackgroundColor,
    pub border_color: BorderColor,
    pub border_width: BorderWidth,
    pub padding: Padding,
}

impl BlockStyle {
    /// Apply an override on top of this style
    pub fn with_override(mut self, patch: &StyleOverride) -> Self {
        if let Some(v) = patch.font_size {
            self.font_size = v;
        }
        if let Some(v) = patch.font_weight {
            self.font_weight = v;
        }
        if let Some(v) = patch.text_color {
            self.text_color = v;
        }
        if let Some(v) = patch.background_color {
            self.background_color = v;
        }
        if let Some(v) = patch.border_color {
            self.border_color = v;
        }
        if let Some(v) = patch.border_width {
            self.border_width = v;
        }
        if let Some(v) = patch.padding {
            self.padding = v;
        }
        self
    }
}

/// Sparse per-block style override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleOverride {
    pub font_size: Option<FontSize>,
    pub font_weight: Option<FontWeight>,
    pub text_color: Option<TextColor>,
    pub background_color: Option<BackgroundColor>,
    pub border_color: Option<BorderColor>,
    pub border_width: Option<BorderWidth>,
    pub padding: Option<Padding>,
}

impl StyleOverride {
    /// True when no attribute is overridden
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge another override on top of this one
    ///
    /// Attributes set in `other` win; the rest keep their current value.
    pub fn merge(&mut self, other: &StyleOverride) {
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.font_weight.is_some() {
            self.font_weight = other.font_weight;
        }
        if other.text_color.is_some() {
            self.text_color = other.text_color;
        }
        if other.background_color.is_some() {
            self.background_color = other.background_color;
        }
        if other.border_color.is_some() {
            self.border_color = other.border_color;
        }
        if other.border_width.is_some() {
            self.border_width = other.border_width;
        }
        if other.padding.is_some() {
            self.padding = other.padding;
        }
    }

    /// Convert from the raw storage form, dropping out-of-palette tokens
    ///
    /// A corrupted or foreign token falls back to "not overridden" rather
    /// than failing the whole load.
    pub fn from_raw(raw: &RawStyleOverride) -> Self {
        fn parse_opt<T: StyleToken>(token: &Option<String>) -> Option<T> {
            token.as_deref().and_then(|t| T::parse(t).ok())
        }

        Self {
            font_size: parse_opt(&raw.font_size),
            font_weight: parse_opt(&raw.font_weight),
            text_color: parse_opt(&raw.text_color),
            background_color: parse_opt(&raw.background_color),
            border_color: parse_opt(&raw.border_style),
            border_width: parse_opt(&raw.border_width),
            padding: parse_opt(&raw.padding),
        }
    }

    /// Convert to the raw storage form
    pub fn to_raw(&self) -> RawStyleOverride {
        RawStyleOverride {
            font_size: self.font_size.map(|v| v.token().to_string()),
            font_weight: self.font_weight.map(|v| v.token().to_string()),
            text_color: self.text_color.map(|v| v.token().to_string()),
            background_color: self.background_color.map(|v| v.token().to_string()),
            border_style: self.border_color.map(|v| v.token().to_string()),
            border_width: self.border_width.map(|v| v.token().to_string()),
            padding: self.padding.map(|v| v.token().to_string()),
        }
    }
}

/// Wire/storage shape of a style override
///
/// Field names match the persisted `quotation-styles` snapshot. Values are
/// plain tokens; validation happens in [`StyleOverride::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_block_style() {
        let style = BlockStyle::default();
        assert_eq!(style.font_size, FontSize::Sm);
        assert_eq!(style.font_weight, FontWeight::Normal);
        assert_eq!(style.text_color, TextColor::Gray800);
        assert_eq!(style.background_color, BackgroundColor::White);
        assert_eq!(style.border_color, BorderColor::Gray);
        assert_eq!(style.border_width, BorderWidth::Thin);
        assert_eq!(style.padding, Padding::P2);
    }

    #[test]
    fn test_with_override_keeps_unset_attributes() {
        let patch = StyleOverride {
            font_size: Some(FontSize::Lg),
            ..Default::default()
        };
        let style = BlockStyle::default().with_override(&patch);
        assert_eq!(style.font_size, FontSize::Lg);
        assert_eq!(style.font_weight, FontWeight::Normal);
        assert_eq!(style.text_color, TextColor::Gray800);
    }

    #[test]
    fn test_merge_later_patch_wins() {
        let mut base = StyleOverride {
            font_size: Some(FontSize::Lg),
            text_color: Some(TextColor::Blue),
            ..Default::default()
        };
        base.merge(&StyleOverride {
            font_size: Some(FontSize::Xl),
            ..Default::default()
        });
        assert_eq!(base.font_size, Some(FontSize::Xl));
        assert_eq!(base.text_color, Some(TextColor::Blue));
    }

    #[test]
    fn test_from_raw_drops_unknown_tokens() {
        let raw = RawStyleOverride {
            font_size: Some("text-lg".to_string()),
            text_color: Some("text-hotpink".to_string()),
            ..Default::default()
        };
        let patch = StyleOverride::from_raw(&raw);
        assert_eq!(patch.font_size, Some(FontSize::Lg));
        assert_eq!(patch.text_color, None);
    }

    #[test]
    fn test_raw_round_trip() {
        let patch = StyleOverride {
            font_weight: Some(FontWeight::Bold),
            border_width: Some(BorderWidth::Thick),
            ..Default::default()
        };
        assert_eq!(StyleOverride::from_raw(&patch.to_raw()), patch);
    }

    #[test]
    fn test_raw_serde_shape() {
        let raw = StyleOverride {
            font_size: Some(FontSize::Lg),
            ..Default::default()
        }
        .to_raw();
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"fontSize":"text-lg"}"#);

        let parsed: RawStyleOverride =
            serde_json::from_str(r#"{"fontSize":"text-lg","borderStyle":"border-black"}"#).unwrap();
        assert_eq!(parsed.font_size.as_deref(), Some("text-lg"));
        assert_eq!(parsed.border_style.as_deref(), Some("border-black"));
    }
}

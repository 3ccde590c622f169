//! Style records
//!
//! Every property is optional; an unset property means "inherit / host
//! default". Components derive a base style from the theme and then merge the
//! caller's override on top with [`Style::merge`].

use petal_core::Color;
use petal_theme::{FontWeight, Shadow};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Column,
    Row,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

/// Visual style properties for an element
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Colors
    // =========================================================================

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    // =========================================================================
    // Box
    // =========================================================================

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = Some(x);
        self.padding_y = Some(y);
        self
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn min_h(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn max_w(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn w_full(mut self) -> Self {
        self.full_width = Some(true);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    // =========================================================================
    // Flex
    // =========================================================================

    pub fn row(mut self) -> Self {
        self.direction = Some(Direction::Row);
        self
    }

    pub fn column(mut self) -> Self {
        self.direction = Some(Direction::Column);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn justify(mut self, justify: Align) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Center children on both axes
    pub fn center(self) -> Self {
        self.align(Align::Center).justify(Align::Center)
    }

    // =========================================================================
    // Text
    // =========================================================================

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    // =========================================================================
    // Animated properties
    // =========================================================================

    /// Set opacity (clamped to `0.0..=1.0`)
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn scale(mut self, factor: f32) -> Self {
        self.scale = Some(factor);
        self
    }

    pub fn translate_y(mut self, offset: f32) -> Self {
        self.translate_y = Some(offset);
        self
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merge another style on top of this one
    ///
    /// Properties set in `other` win; unset properties keep this style's value.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.or(self.background),
            border_color: other.border_color.or(self.border_color),
            border_width: other.border_width.or(self.border_width),
            corner_radius: other.corner_radius.or(self.corner_radius),
            padding_x: other.padding_x.or(self.padding_x),
            padding_y: other.padding_y.or(self.padding_y),
            gap: other.gap.or(self.gap),
            min_height: other.min_height.or(self.min_height),
            width: other.width.or(self.width),
            max_width: other.max_width.or(self.max_width),
            full_width: other.full_width.or(self.full_width),
            direction: other.direction.or(self.direction),
            align: other.align.or(self.align),
            justify: other.justify.or(self.justify),
            opacity: other.opacity.or(self.opacity),
            text_color: other.text_color.or(self.text_color),
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            scale: other.scale.or(self.scale),
            translate_y: other.translate_y.or(self.translate_y),
            shadow: other.shadow.clone().or_else(|| self.shadow.clone()),
        }
    }

    /// Merge an optional override
    pub fn merge_opt(&self, other: Option<&Style>) -> Style {
        match other {
            Some(other) => self.merge(other),
            None => self.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

//! Tooltip view model, independent of any DOM.

use crate::constants::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y};

/// Placeholder shown for empty record fields.
pub const EMPTY_VALUE: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipRow {
    pub label: &'static str,
    pub value: String,
}

/// Heading plus labelled rows describing one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub heading: String,
    pub rows: Vec<TooltipRow>,
}

impl TooltipContent {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            rows: Vec::new(),
        }
    }

    /// Append a row; blank values are shown as [`EMPTY_VALUE`].
    pub fn row(mut self, label: &'static str, value: &str) -> Self {
        let value = value.trim();
        self.rows.push(TooltipRow {
            label,
            value: if value.is_empty() {
                EMPTY_VALUE.to_string()
            } else {
                value.to_string()
            },
        });
        self
    }
}

/// Anything that can describe itself in a tooltip.
pub trait TooltipSource {
    fn tooltip_content(&self) -> TooltipContent;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Tooltip {
    #[default]
    Hidden,
    /// `x`/`y` are the box's top-left corner in client (CSS) pixels.
    Visible {
        x: f64,
        y: f64,
        content: TooltipContent,
    },
}

impl Tooltip {
    /// Place `content` next to a pointer at client coordinates `(pointer_x, pointer_y)`.
    pub fn at(pointer_x: f64, pointer_y: f64, content: TooltipContent) -> Self {
        Tooltip::Visible {
            x: pointer_x + TOOLTIP_OFFSET_X,
            y: pointer_y + TOOLTIP_OFFSET_Y,
            content,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self, Tooltip::Visible { .. })
    }
}

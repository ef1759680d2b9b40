//! Per-node style overrides.
//!
//! Every field is optional. Several fields also carry a *sentinel* value that
//! the property panel uses as its "not overridden" default (`'0'` for spacing,
//! `'auto'` for sizes, `'none'` for max width). A sentinel is equivalent to an
//! absent value everywhere: the accessors on [`StyleProps`] return `None` for
//! both, so generation and merging never have to special-case them.

use serde::{Deserialize, Serialize};

const ZERO: &str = "0";
const AUTO: &str = "auto";
const NONE: &str = "none";
const EMPTY: &str = "";

/// Default gap step for containers
pub const DEFAULT_GAP: &str = "4";

/// Text/content alignment of a leaf inside its wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Main-axis distribution of a container's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

/// Cross-axis alignment of a container's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignItems {
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexWrap {
    Wrap,
    NoWrap,
}

/// Structured style overrides for a node.
///
/// The same shape doubles as a patch for [`StyleProps::merge`]: only the
/// fields that are `Some` in the patch are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    // Containers only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
}

/// Returns the value unless it is missing or equal to the sentinel
fn effective<'a>(value: &'a Option<String>, sentinel: &str) -> Option<&'a str> {
    match value.as_deref() {
        Some(v) if v != sentinel && !v.is_empty() => Some(v),
        _ => None,
    }
}

macro_rules! merge_fields {
    ($target:expr, $patch:expr, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = Some(value);
            }
        )+
    };
}

impl StyleProps {
    /// Style props given to a freshly grouped container
    pub fn container_defaults() -> Self {
        Self {
            gap: Some(DEFAULT_GAP.to_string()),
            justify: Some(Justify::Start),
            align_items: Some(AlignItems::Start),
            flex_wrap: Some(FlexWrap::NoWrap),
            ..Self::default()
        }
    }

    /// Shallow merge: every field set in `patch` overwrites the current value
    pub fn merge(&mut self, patch: StyleProps) {
        merge_fields!(
            self, patch,
            bg_color, text_color, border_color, text,
            width, height, max_width, min_height,
            margin_top, margin_right, margin_bottom, margin_left,
            padding_top, padding_right, padding_bottom, padding_left,
            alignment, display,
            gap, justify, align_items, flex_wrap,
        );
    }

    /// True when no field would change generated output
    pub fn is_effectively_empty(&self) -> bool {
        self.background_color().is_none()
            && self.color().is_none()
            && self.border_color().is_none()
            && self.width().is_none()
            && self.height().is_none()
            && self.max_width().is_none()
            && self.min_height().is_none()
            && self.margins().iter().all(|(_, v)| v.is_none())
            && self.paddings().iter().all(|(_, v)| v.is_none())
            && self.alignment.is_none()
    }

    pub fn background_color(&self) -> Option<&str> {
        effective(&self.bg_color, EMPTY)
    }

    pub fn color(&self) -> Option<&str> {
        effective(&self.text_color, EMPTY)
    }

    pub fn border_color(&self) -> Option<&str> {
        effective(&self.border_color, EMPTY)
    }

    pub fn width(&self) -> Option<&str> {
        effective(&self.width, AUTO)
    }

    pub fn height(&self) -> Option<&str> {
        effective(&self.height, AUTO)
    }

    pub fn max_width(&self) -> Option<&str> {
        effective(&self.max_width, NONE)
    }

    pub fn min_height(&self) -> Option<&str> {
        effective(&self.min_height, AUTO)
    }

    /// Gap step, falling back to the default when unset
    pub fn gap(&self) -> &str {
        effective(&self.gap, EMPTY).unwrap_or(DEFAULT_GAP)
    }

    /// Margins in top/right/bottom/left order, keyed by their style property name
    pub fn margins(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("marginTop", effective(&self.margin_top, ZERO)),
            ("marginRight", effective(&self.margin_right, ZERO)),
            ("marginBottom", effective(&self.margin_bottom, ZERO)),
            ("marginLeft", effective(&self.margin_left, ZERO)),
        ]
    }

    /// Paddings in top/right/bottom/left order, keyed by their style property name
    pub fn paddings(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("paddingTop", effective(&self.padding_top, ZERO)),
            ("paddingRight", effective(&self.padding_right, ZERO)),
            ("paddingBottom", effective(&self.padding_bottom, ZERO)),
            ("paddingLeft", effective(&self.padding_left, ZERO)),
        ]
    }
}

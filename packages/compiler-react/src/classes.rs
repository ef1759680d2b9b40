//! Utility class lists for wrappers and containers.

use pagecraft_model::{AlignItems, Alignment, FlexWrap, Justify, LayoutKind, StyleProps};

/// Class on the whole-page root element
pub const PAGE_SURFACE: &str = "min-h-screen w-full bg-white p-8 space-y-4";

const FULL_WIDTH: &str = "w-full";

/// Alignment rule for a leaf wrapper. `justify` has no flex equivalent.
pub fn alignment_class(alignment: Option<Alignment>) -> Option<&'static str> {
    match alignment? {
        Alignment::Left => Some("flex justify-start"),
        Alignment::Center => Some("flex justify-center"),
        Alignment::Right => Some("flex justify-end"),
        Alignment::Justify => None,
    }
}

pub fn layout_classes(layout: LayoutKind) -> &'static str {
    match layout {
        LayoutKind::FlexRow => "flex flex-row",
        LayoutKind::FlexCol => "flex flex-col",
        LayoutKind::Grid2 => "grid grid-cols-2",
        LayoutKind::Grid3 => "grid grid-cols-3",
        LayoutKind::Grid4 => "grid grid-cols-4",
    }
}

fn justify_class(justify: Justify) -> &'static str {
    match justify {
        Justify::Start => "justify-start",
        Justify::Center => "justify-center",
        Justify::End => "justify-end",
        Justify::Between => "justify-between",
        Justify::Around => "justify-around",
        Justify::Evenly => "justify-evenly",
    }
}

fn align_items_class(align: AlignItems) -> &'static str {
    match align {
        AlignItems::Start => "items-start",
        AlignItems::Center => "items-center",
        AlignItems::End => "items-end",
        AlignItems::Stretch => "items-stretch",
    }
}

/// Full class list of a container element
pub fn container_classes(layout: LayoutKind, style: &StyleProps) -> String {
    let mut classes = vec![
        FULL_WIDTH.to_string(),
        layout_classes(layout).to_string(),
        format!("gap-{}", style.gap()),
    ];

    if let Some(justify) = style.justify {
        classes.push(justify_class(justify).to_string());
    }
    if let Some(align) = style.align_items {
        classes.push(align_items_class(align).to_string());
    }
    if style.flex_wrap == Some(FlexWrap::Wrap) {
        classes.push("flex-wrap".to_string());
    }

    classes.join(" ")
}

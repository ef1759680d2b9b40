//! Category → element tag table.

/// Tag used for every wrapper outside semantic mode
pub const GENERIC_TAG: &str = "div";

/// Root tag in semantic mode
pub const MAIN_TAG: &str = "main";

/// Wrapper tag for a node of `category`
pub fn wrapper_tag(category: &str, semantic: bool) -> &'static str {
    if !semantic {
        return GENERIC_TAG;
    }

    match category {
        "Headers" => "header",
        "Footers" => "footer",
        "Navigation" => "nav",
        "Cards" => "article",
        "Data Display" | "Tables" => "section",
        "Forms" => "form",
        "Container" => "section",
        _ => GENERIC_TAG,
    }
}

pub fn root_tag(semantic: bool) -> &'static str {
    if semantic {
        MAIN_TAG
    } else {
        GENERIC_TAG
    }
}

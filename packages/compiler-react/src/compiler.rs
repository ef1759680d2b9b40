use crate::classes::{alignment_class, container_classes, PAGE_SURFACE};
use crate::context::{CompileOptions, CompilerContext};
use crate::splice::inject_style;
use crate::style_object::StyleObject;
use crate::tags::{root_tag, wrapper_tag};
use pagecraft_model::{Container, Document, Leaf, Node, StyleProps, CONTAINER_CATEGORY};

/// Returned instead of markup when the page has no nodes
pub const EMPTY_DOCUMENT_PLACEHOLDER: &str =
    "{/* Add components to the canvas to generate code */}";

const EMPTY_CONTAINER_PLACEHOLDER: &str = "{/* Empty container */}";

/// Compile a page document to JSX markup.
///
/// Output is a pure function of `document` and `options`: node order is the
/// document order and every attribute and style key is emitted in a fixed
/// order, so repeated calls return byte-identical strings.
pub fn compile_to_react(document: &Document, options: CompileOptions) -> String {
    if document.is_empty() {
        return EMPTY_DOCUMENT_PLACEHOLDER.to_string();
    }

    let ctx = CompilerContext::new(options);
    let root = root_tag(ctx.options.semantic);

    ctx.add_line(&format!("<{} className=\"{}\">", root, PAGE_SURFACE));
    ctx.push_indent();

    for (i, node) in document.iter().enumerate() {
        if i > 0 {
            ctx.blank_line();
        }
        match node {
            Node::Leaf(leaf) => compile_leaf(leaf, &ctx),
            Node::Container(container) => compile_container(container, &ctx),
        }
    }

    ctx.pop_indent();
    ctx.add_indented(&format!("</{}>", root));

    let output = ctx.get_output();
    tracing::debug!(
        nodes = document.len(),
        bytes = output.len(),
        semantic = ctx.options.semantic,
        "compiled page"
    );
    output
}

/// Leaf: wrapper element carrying margins and alignment, fragment carrying
/// colors, sizes and paddings
fn compile_leaf(leaf: &Leaf, ctx: &CompilerContext) {
    let style = &leaf.style;
    let tag = wrapper_tag(&leaf.category, ctx.options.semantic);

    if style.is_effectively_empty() {
        ctx.add_line(&format!("<{}>", tag));
        ctx.push_indent();
        ctx.add_block(&leaf.template);
        ctx.pop_indent();
        ctx.add_line(&format!("</{}>", tag));
        return;
    }

    let wrapper_style = StyleObject::from_pairs(
        style
            .margins()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v))),
    );

    ctx.add_line(&open_tag(tag, alignment_class(style.alignment), &wrapper_style));
    ctx.push_indent();
    ctx.add_block(&inject_style(&leaf.template, &fragment_overrides(style)));
    ctx.pop_indent();
    ctx.add_line(&format!("</{}>", tag));
}

fn compile_container(container: &Container, ctx: &CompilerContext) {
    let style = &container.style;
    let tag = wrapper_tag(CONTAINER_CATEGORY, ctx.options.semantic);
    let classes = container_classes(container.layout, style);

    let mut pairs = Vec::new();
    if let Some(bg) = style.background_color() {
        pairs.push(("backgroundColor", bg));
    }
    pairs.extend(
        style
            .paddings()
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v))),
    );
    let container_style = StyleObject::from_pairs(pairs);

    ctx.add_line(&open_tag(tag, Some(classes.as_str()), &container_style));
    ctx.push_indent();

    if container.children.is_empty() {
        ctx.add_line(EMPTY_CONTAINER_PLACEHOLDER);
    }
    for child in &container.children {
        compile_leaf(child, ctx);
    }

    ctx.pop_indent();
    ctx.add_line(&format!("</{}>", tag));
}

/// Inline style keys written onto the fragment's own opening tag, in output order
fn fragment_overrides(style: &StyleProps) -> Vec<(&'static str, &str)> {
    let mut overrides = Vec::new();

    let singles = [
        ("backgroundColor", style.background_color()),
        ("color", style.color()),
        ("borderColor", style.border_color()),
        ("width", style.width()),
        ("height", style.height()),
        ("maxWidth", style.max_width()),
        ("minHeight", style.min_height()),
    ];
    for (key, value) in singles.into_iter().chain(style.paddings()) {
        if let Some(value) = value {
            overrides.push((key, value));
        }
    }

    overrides
}

fn open_tag(tag: &str, class_name: Option<&str>, style: &StyleObject) -> String {
    let mut out = format!("<{}", tag);
    if let Some(class_name) = class_name {
        out.push_str(&format!(" className=\"{}\"", class_name));
    }
    if !style.is_empty() {
        out.push(' ');
        out.push_str(&style.to_attribute());
    }
    out.push('>');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::NodeId;

    fn leaf(template: &str, style: StyleProps) -> Leaf {
        Leaf {
            id: NodeId::new("n-1"),
            source_type: "Item".into(),
            category: "Buttons".into(),
            template: template.into(),
            style,
        }
    }

    #[test]
    fn test_fragment_override_order() {
        let style = StyleProps {
            padding_left: Some("1px".into()),
            width: Some("50%".into()),
            bg_color: Some("#000".into()),
            ..StyleProps::default()
        };

        assert_eq!(
            fragment_overrides(&style),
            vec![("backgroundColor", "#000"), ("width", "50%"), ("paddingLeft", "1px")]
        );
    }

    #[test]
    fn test_leaf_without_style_has_bare_wrapper() {
        let ctx = CompilerContext::new(CompileOptions::default());
        compile_leaf(&leaf("<button>Click</button>", StyleProps::default()), &ctx);

        assert_eq!(ctx.get_output(), "<div>\n  <button>Click</button>\n</div>\n");
    }

    #[test]
    fn test_sentinel_only_style_keeps_template_verbatim() {
        let style = StyleProps {
            width: Some("auto".into()),
            padding_left: Some("0".into()),
            text: Some("Ignored".into()),
            display: Some("block".into()),
            ..StyleProps::default()
        };
        let template = "<button style={{ color: 'red' }}>Click</button>";
        let ctx = CompilerContext::new(CompileOptions::default());
        compile_leaf(&leaf(template, style), &ctx);

        assert_eq!(
            ctx.get_output(),
            "<div>\n  <button style={{ color: 'red' }}>Click</button>\n</div>\n"
        );
    }

    #[test]
    fn test_open_tag_attribute_order() {
        let style = StyleObject::from_pairs([("marginTop", "2px")]);
        assert_eq!(
            open_tag("div", Some("flex justify-center"), &style),
            "<div className=\"flex justify-center\" style={{marginTop:'2px'}}>"
        );
    }
}

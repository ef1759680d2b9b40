use crate::{compile_to_react, CompileOptions, EMPTY_DOCUMENT_PLACEHOLDER};
use pagecraft_model::{
    Alignment, Container, Document, FlexWrap, LayoutKind, Leaf, Node, NodeId, StyleProps,
};

fn leaf(id: &str, category: &str, template: &str) -> Leaf {
    Leaf {
        id: NodeId::new(id),
        source_type: "Item".into(),
        category: category.into(),
        template: template.into(),
        style: StyleProps::default(),
    }
}

fn button() -> Leaf {
    leaf("b-1", "Buttons", "<button>Click</button>")
}

fn single(leaf: Leaf) -> Document {
    Document::from_nodes(vec![Node::Leaf(leaf)])
}

#[test]
fn test_empty_document_placeholder() {
    let result = compile_to_react(&Document::new(), CompileOptions::default());
    assert_eq!(result, EMPTY_DOCUMENT_PLACEHOLDER);
}

#[test]
fn test_single_unstyled_leaf() {
    let result = compile_to_react(&single(button()), CompileOptions::default());

    println!("Generated code:\n{}", result);

    assert_eq!(
        result,
        "<div className=\"min-h-screen w-full bg-white p-8 space-y-4\">\n  <div>\n    <button>Click</button>\n  </div>\n</div>"
    );
    assert!(!result.contains("style="));
}

#[test]
fn test_background_and_margin_split() {
    let mut leaf = button();
    leaf.style.bg_color = Some("#ff0000".into());
    leaf.style.margin_top = Some("16px".into());

    let result = compile_to_react(&single(leaf), CompileOptions::default());

    println!("Generated code:\n{}", result);

    assert!(result.contains("  <div style={{marginTop:'16px'}}>\n"));
    assert!(result.contains("    <button style={{backgroundColor:'#ff0000'}}>Click</button>\n"));
}

#[test]
fn test_margins_stay_on_wrapper() {
    let mut leaf = button();
    leaf.style.margin_left = Some("12px".into());

    let result = compile_to_react(&single(leaf), CompileOptions::default());

    let wrapper = result.lines().nth(1).unwrap();
    let fragment = result.lines().nth(2).unwrap();
    assert!(wrapper.contains("marginLeft:'12px'"));
    assert!(!fragment.contains("marginLeft"));
    assert_eq!(fragment.trim(), "<button>Click</button>");
}

#[test]
fn test_sentinel_values_are_suppressed() {
    let mut leaf = button();
    leaf.style.padding_top = Some("0".into());
    leaf.style.width = Some("auto".into());
    leaf.style.max_width = Some("none".into());
    leaf.style.min_height = Some("auto".into());
    leaf.style.margin_bottom = Some("0".into());

    let result = compile_to_react(&single(leaf.clone()), CompileOptions::default());
    assert!(!result.contains("style="));

    leaf.style.padding_top = Some("8px".into());
    let result = compile_to_react(&single(leaf), CompileOptions::default());
    assert_eq!(result.matches("paddingTop:'8px'").count(), 1);
    assert_eq!(result.matches("paddingTop").count(), 1);
}

#[test]
fn test_existing_fragment_style_is_overridden_per_key() {
    let mut leaf = leaf(
        "c-1",
        "Cards",
        "<div className=\"card\" style={{ color: '#333', padding: '12px' }}>\n  <h3>Title</h3>\n</div>",
    );
    leaf.style.text_color = Some("#fff".into());
    leaf.style.padding_left = Some("4px".into());

    let result = compile_to_react(&single(leaf), CompileOptions::default());

    println!("Generated code:\n{}", result);

    assert!(result.contains(
        "<div className=\"card\" style={{color:'#fff', padding:'12px', paddingLeft:'4px'}}>"
    ));
    assert!(result.contains("      <h3>Title</h3>\n"));
}

#[test]
fn test_alignment_class_on_wrapper() {
    let mut centered = button();
    centered.style.alignment = Some(Alignment::Center);
    let mut justified = leaf("b-2", "Buttons", "<button>Go</button>");
    justified.style.alignment = Some(Alignment::Justify);

    let document = Document::from_nodes(vec![centered.into(), justified.into()]);
    let result = compile_to_react(&document, CompileOptions::default());

    assert!(result.contains("<div className=\"flex justify-center\">"));
    assert_eq!(result.matches("justify-").count(), 1);
}

#[test]
fn test_entries_separated_by_blank_line() {
    let document = Document::from_nodes(vec![
        button().into(),
        leaf("b-2", "Buttons", "<button>Two</button>").into(),
    ]);

    let result = compile_to_react(&document, CompileOptions::default());
    assert!(result.contains("  </div>\n\n  <div>\n    <button>Two</button>"));
}

#[test]
fn test_container_emission() {
    let mut first = button();
    first.style.margin_right = Some("8px".into());
    let container = Container {
        id: NodeId::new("c-1"),
        layout: LayoutKind::FlexRow,
        children: vec![first, leaf("b-2", "Buttons", "<button>Two</button>")],
        style: StyleProps {
            bg_color: Some("#eee".into()),
            padding_top: Some("16px".into()),
            margin_top: Some("99px".into()),
            flex_wrap: Some(FlexWrap::Wrap),
            ..StyleProps::container_defaults()
        },
    };

    let result = compile_to_react(&Document::from_nodes(vec![container.into()]), CompileOptions::default());

    println!("Generated code:\n{}", result);

    let expected = "\
<div className=\"min-h-screen w-full bg-white p-8 space-y-4\">
  <div className=\"w-full flex flex-row gap-4 justify-start items-start flex-wrap\" style={{backgroundColor:'#eee', paddingTop:'16px'}}>
    <div style={{marginRight:'8px'}}>
      <button>Click</button>
    </div>
    <div>
      <button>Two</button>
    </div>
  </div>
</div>";
    assert_eq!(result, expected);
    // No margin support on the container itself
    assert!(!result.contains("99px"));
}

#[test]
fn test_empty_container_placeholder() {
    let container = Container {
        id: NodeId::new("c-1"),
        layout: LayoutKind::Grid2,
        children: vec![],
        style: StyleProps::container_defaults(),
    };

    let result = compile_to_react(&Document::from_nodes(vec![container.into()]), CompileOptions::default());
    assert!(result.contains("{/* Empty container */}"));
    assert!(result.contains("grid grid-cols-2"));
}

#[test]
fn test_semantic_mode_tags() {
    let container = Container {
        id: NodeId::new("c-1"),
        layout: LayoutKind::FlexCol,
        children: vec![leaf("f-1", "Forms", "<input />")],
        style: StyleProps::container_defaults(),
    };
    let document = Document::from_nodes(vec![
        leaf("h-1", "Headers", "<h1>Hi</h1>").into(),
        container.into(),
        leaf("x-1", "Buttons", "<button>x</button>").into(),
    ]);

    let semantic = compile_to_react(&document, CompileOptions::semantic());
    assert!(semantic.starts_with("<main className="));
    assert!(semantic.ends_with("</main>"));
    assert!(semantic.contains("  <header>\n    <h1>Hi</h1>\n  </header>"));
    assert!(semantic.contains("  <section className=\"w-full flex flex-col"));
    assert!(semantic.contains("    <form>\n      <input />\n    </form>"));
    assert!(semantic.contains("  <div>\n    <button>x</button>\n  </div>"));

    let generic = compile_to_react(&document, CompileOptions::default());
    assert!(!generic.contains("<header>"));
    assert!(!generic.contains("<section"));
    assert!(!generic.contains("<main"));
}

#[test]
fn test_compile_is_deterministic() {
    let mut styled = leaf(
        "c-1",
        "Cards",
        "<article style=\"border: 1px solid #ddd; border-radius: 8px\"><p>x</p></article>",
    );
    styled.style = serde_json::from_str(
        r##"{"bgColor":"#fafafa","borderColor":"#000","width":"320px","paddingTop":"4px","marginLeft":"2px","alignment":"right"}"##,
    )
    .unwrap();
    let document = Document::from_nodes(vec![
        styled.into(),
        Container {
            id: NodeId::new("c-2"),
            layout: LayoutKind::Grid4,
            children: vec![button()],
            style: StyleProps::container_defaults(),
        }
        .into(),
    ]);

    for options in [CompileOptions::default(), CompileOptions::semantic()] {
        let results: Vec<String> = (0..10)
            .map(|_| compile_to_react(&document, options.clone()))
            .collect();
        for i in 1..results.len() {
            assert_eq!(results[0], results[i], "Compilation {} differs from compilation 0", i);
        }
    }
}

//! Integration tests for editor crate: full add → edit → generate workflows

use pagecraft_editor::{
    CatalogItem, CompileOptions, EditSession, LayoutKind, NodeId, Recorder, StyleProps,
};
use pagecraft_model::{AlignItems, FlexWrap, Justify, Node};

fn primary_button() -> CatalogItem {
    CatalogItem::new("PrimaryButton", "<button>Click</button>")
}

#[test]
fn test_add_single_button() {
    let mut session = EditSession::new("page");

    let id = session.add(primary_button(), "Buttons");

    assert_eq!(session.document().len(), 1);
    let leaf = session.document().nodes[0].as_leaf().unwrap();
    assert_eq!(leaf.id, id);
    assert_eq!(leaf.source_type, "PrimaryButton");
    assert_eq!(leaf.category, "Buttons");
    assert_eq!(leaf.style, StyleProps::default());

    let code = session.generate(CompileOptions::default());
    println!("Generated code:\n{}", code);

    assert!(code.contains("  <div>\n    <button>Click</button>\n  </div>"));
    assert!(!code.contains("style="));
}

#[test]
fn test_background_and_margin_after_update() {
    let mut session = EditSession::new("page");
    let id = session.add(primary_button(), "Buttons");

    session.update_props(
        &id,
        StyleProps {
            bg_color: Some("#ff0000".into()),
            margin_top: Some("16px".into()),
            ..Default::default()
        },
    );

    let code = session.generate(CompileOptions::default());
    println!("Generated code:\n{}", code);

    let wrapper = code.lines().find(|l| l.trim_start().starts_with("<div style=")).unwrap();
    let fragment = code.lines().find(|l| l.contains("<button")).unwrap();
    assert_eq!(wrapper.trim(), "<div style={{marginTop:'16px'}}>");
    assert_eq!(fragment.trim(), "<button style={{backgroundColor:'#ff0000'}}>Click</button>");
}

#[test]
fn test_group_two_leaves_into_row() {
    let mut session = EditSession::new("page");
    let a = session.add(primary_button(), "Buttons");
    let b = session.add(CatalogItem::new("GhostButton", "<button>Cancel</button>"), "Buttons");

    session.toggle_multi_select(&a);
    session.toggle_multi_select(&b);
    let container_id = session.group(LayoutKind::FlexRow).unwrap();

    let nodes = &session.document().nodes;
    assert_eq!(nodes.len(), 1);
    let Node::Container(container) = &nodes[0] else {
        panic!("Expected container");
    };
    assert_eq!(container.id, container_id);
    assert_eq!(container.layout, LayoutKind::FlexRow);
    let children: Vec<&NodeId> = container.children.iter().map(|c| &c.id).collect();
    assert_eq!(children, vec![&a, &b]);
    assert_eq!(
        container.style,
        StyleProps {
            gap: Some("4".into()),
            justify: Some(Justify::Start),
            align_items: Some(AlignItems::Start),
            flex_wrap: Some(FlexWrap::NoWrap),
            ..Default::default()
        }
    );
}

#[test]
fn test_sentinel_padding_roundtrip() {
    let mut session = EditSession::new("page");
    let id = session.add(primary_button(), "Buttons");

    session.update_props(&id, StyleProps { padding_top: Some("0".into()), ..Default::default() });
    let code = session.generate(CompileOptions::default());
    assert!(!code.contains("paddingTop"));

    session.update_props(&id, StyleProps { padding_top: Some("8px".into()), ..Default::default() });
    let code = session.generate(CompileOptions::default());
    assert_eq!(code.matches("paddingTop:'8px'").count(), 1);
}

#[test]
fn test_child_margins_inside_container() {
    let mut session = EditSession::new("page");
    let a = session.add(primary_button(), "Buttons");
    let b = session.add(primary_button(), "Buttons");
    session.toggle_multi_select(&a);
    session.toggle_multi_select(&b);
    let container = session.group(LayoutKind::Grid2).unwrap();

    session.update_props(&b, StyleProps { margin_left: Some("12px".into()), ..Default::default() });
    session.update_props(&container, StyleProps { margin_left: Some("40px".into()), ..Default::default() });

    let code = session.generate(CompileOptions::default());
    println!("Generated code:\n{}", code);

    assert!(code.contains("    <div style={{marginLeft:'12px'}}>\n      <button>Click</button>"));
    assert!(!code.contains("40px"));
}

#[test]
fn test_generate_twice_is_identical() {
    let mut session = EditSession::new("page");
    let a = session.add(primary_button(), "Buttons");
    session.add(CatalogItem::new("Hero", "<header><h1>Hi</h1></header>"), "Headers");
    session.update_props(&a, StyleProps { width: Some("100%".into()), ..Default::default() });

    for options in [CompileOptions::default(), CompileOptions::semantic()] {
        assert_eq!(session.generate(options.clone()), session.generate(options));
    }
}

#[test]
fn test_full_workflow_with_sinks() {
    let notifications = Recorder::new();
    let clipboard = Recorder::new();
    let mut session = EditSession::new("page")
        .with_notifications(notifications.clone())
        .with_clipboard(clipboard.clone());

    let header = session.add(CatalogItem::new("Hero", "<h1>Welcome</h1>"), "Headers");
    let a = session.add(primary_button(), "Buttons");
    let b = session.add(primary_button(), "Buttons");

    session.toggle_multi_select(&a);
    session.toggle_multi_select(&b);
    let row = session.group(LayoutKind::FlexRow).unwrap();
    session.reorder(&row, Some(&header));

    let code = session.copy_code(CompileOptions::semantic());

    assert_eq!(clipboard.take(), vec![code.clone()]);
    assert_eq!(
        notifications.take(),
        vec![
            "Grouped 2 components into a flex-row container",
            "Code copied to clipboard",
        ]
    );

    let section = code.find("<section").unwrap();
    let heading = code.find("<header>").unwrap();
    assert!(section < heading, "container was moved above the header");
}

#[test]
fn test_snapshot_survives_json_roundtrip() -> anyhow::Result<()> {
    let mut session = EditSession::new("page");
    let a = session.add(primary_button(), "Buttons");
    let b = session.add(primary_button(), "Buttons");
    session.toggle_multi_select(&a);
    session.toggle_multi_select(&b);
    session.group(LayoutKind::Grid4);

    let json = session.to_json()?;
    let restored = EditSession::from_json("restored", &json)?;

    assert_eq!(
        restored.generate(CompileOptions::default()),
        session.generate(CompileOptions::default())
    );
    Ok(())
}

use pagecraft_compiler_react::{compile_to_react, CompileOptions};
use pagecraft_model::{Container, Document, LayoutKind, Leaf, NodeId, StyleProps};

fn leaf(id: &str, category: &str, template: &str) -> Leaf {
    Leaf {
        id: NodeId::new(id),
        source_type: id.to_string(),
        category: category.to_string(),
        template: template.to_string(),
        style: StyleProps::default(),
    }
}

fn main() {
    let mut header = leaf("header", "Headers", "<h1 className=\"text-3xl font-bold\">Pagecraft</h1>");
    header.style.margin_bottom = Some("24px".into());
    header.style.text_color = Some("#1e293b".into());

    let cards = Container {
        id: NodeId::new("cards"),
        layout: LayoutKind::Grid3,
        children: vec![
            leaf("card-1", "Cards", "<div className=\"rounded border p-4\">\n  <h3>Fast</h3>\n</div>"),
            leaf("card-2", "Cards", "<div className=\"rounded border p-4\">\n  <h3>Typed</h3>\n</div>"),
            leaf("card-3", "Cards", "<div className=\"rounded border p-4\">\n  <h3>Deterministic</h3>\n</div>"),
        ],
        style: StyleProps::container_defaults(),
    };

    let document = Document::from_nodes(vec![header.into(), cards.into()]);

    println!("{}", compile_to_react(&document, CompileOptions::default()));
    println!();
    println!("{}", compile_to_react(&document, CompileOptions::semantic()));
}

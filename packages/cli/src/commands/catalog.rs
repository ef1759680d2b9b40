use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_model::Catalog;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Catalog file (overrides config)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Print item templates as well
    #[arg(long)]
    pub templates: bool,
}

pub fn catalog(args: CatalogArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = match &args.file {
        Some(file) => cwd.join(file),
        None => config.get_catalog_path(cwd),
    };

    let source = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&source)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;

    print!("{}", render(&catalog, args.templates));
    Ok(())
}

fn render(catalog: &Catalog, templates: bool) -> String {
    let mut out = String::new();
    for category in catalog.categories() {
        out.push_str(&format!(
            "{} {}\n",
            category.category.bright_white().bold(),
            format!("({})", category.items.len()).dimmed()
        ));
        for item in &category.items {
            out.push_str(&format!("  {} {}\n", "•".cyan(), item.name));
            if templates {
                for line in item.template.lines() {
                    out.push_str(&format!("      {}\n", line.dimmed()));
                }
            }
        }
    }
    out
}

use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Source directory for page scripts
    #[arg(short, long, default_value = "pages")]
    pub src_dir: String,

    /// Emit semantic tags by default
    #[arg(long)]
    pub semantic: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

const STARTER_CATALOG: &str = r#"[
  {
    "category": "Headers",
    "items": [
      { "name": "SimpleHeader", "template": "<h1 className=\"text-3xl font-bold\">Welcome</h1>" }
    ]
  },
  {
    "category": "Buttons",
    "items": [
      { "name": "PrimaryButton", "template": "<button className=\"px-4 py-2 rounded bg-blue-600 text-white\">Get started</button>" },
      { "name": "GhostButton", "template": "<button className=\"px-4 py-2 rounded border\">Learn more</button>" }
    ]
  },
  {
    "category": "Footers",
    "items": [
      { "name": "SimpleFooter", "template": "<p className=\"text-sm text-gray-500\">Made with Pagecraft</p>" }
    ]
  }
]
"#;

const STARTER_PAGE: &str = r#"[
  { "op": "add", "category": "Headers", "item": "SimpleHeader", "as": "title" },
  { "op": "add", "category": "Buttons", "item": "PrimaryButton", "as": "primary" },
  { "op": "add", "category": "Buttons", "item": "GhostButton", "as": "secondary" },
  { "op": "toggle", "target": "primary" },
  { "op": "toggle", "target": "secondary" },
  { "op": "group", "layout": "flex-row", "as": "actions" },
  { "op": "add", "category": "Footers", "item": "SimpleFooter", "as": "footer" },
  { "op": "updateProps", "target": "footer", "patch": { "marginTop": "32px" } }
]
"#;

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagecraft project...".bright_blue().bold()
    );

    let config = Config {
        src_dir: args.src_dir.clone(),
        semantic: args.semantic,
        ..Config::default()
    };

    let src_dir = config.get_src_dir(cwd);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), config.src_dir);
    }

    write_if_missing(&config.get_catalog_path(cwd), STARTER_CATALOG, &config.catalog)?;
    write_if_missing(&src_dir.join("home.page.json"), STARTER_PAGE, "home.page.json")?;

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/home.page.json", config.src_dir);
    println!("  2. Run: pagecraft build");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

fn write_if_missing(path: &Path, content: &str, label: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, content)?;
    println!("  {} Created {}", "✓".green(), label);
    Ok(())
}

use crate::config::Config;
use crate::script::PageScript;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{EditSession, EditorState};
use pagecraft_compiler_react::CompileOptions;
use pagecraft_model::{Catalog, IdGenerator};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PAGE_EXTENSION: &str = ".page.json";

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Emit category-specific tags (overrides config)
    #[arg(long)]
    pub semantic: bool,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn build(args: BuildArgs, cwd: &Path) -> Result<()> {
    let root = cwd.join(&args.path);
    let config = Config::load(&root)?;
    let src_dir = config.get_src_dir(&root);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {}", src_dir.display()));
    }

    let catalog_path = config.get_catalog_path(&root);
    let catalog_source = fs::read_to_string(&catalog_path)
        .with_context(|| format!("Cannot read catalog {}", catalog_path.display()))?;
    let catalog = Catalog::from_json(&catalog_source)
        .with_context(|| format!("Invalid catalog {}", catalog_path.display()))?;

    let options = CompileOptions {
        semantic: args.semantic || config.semantic,
        ..CompileOptions::default()
    };
    let out_dir = match &args.out_dir {
        Some(out) => root.join(out),
        None => config.get_out_dir(&root),
    };

    if !args.stdout {
        println!("{}", "🔨 Building pages...".bright_blue().bold());
    }

    let pages = find_page_files(&src_dir);
    if pages.is_empty() {
        println!("{}", "⚠️  No .page.json files found".yellow());
        return Ok(());
    }
    tracing::info!(count = pages.len(), src = %src_dir.display(), "found page scripts");

    let mut success_count = 0;
    let mut error_count = 0;

    for page in &pages {
        let relative_path = page.strip_prefix(&src_dir).unwrap_or(page);
        match build_page(page, relative_path, &catalog, &options) {
            Ok(code) if args.stdout => {
                success_count += 1;
                println!("{}", code);
            }
            Ok(code) => {
                let output_file = out_dir.join(output_name(relative_path));
                write_output(&output_file, &code)?;
                success_count += 1;
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_file.display()
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    if args.stdout {
        return if error_count == 0 {
            Ok(())
        } else {
            Err(anyhow!("{} pages failed", error_count))
        };
    }

    println!();
    if error_count == 0 {
        println!("{} Built {} pages successfully", "✅".green(), success_count);
    } else {
        println!(
            "{} Built {} pages, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }

    Ok(())
}

fn find_page_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_page_file(path))
        .collect();
    files.sort();
    files
}

fn is_page_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(PAGE_EXTENSION))
        .unwrap_or(false)
}

/// `blog/post.page.json` → `blog/post.jsx`
fn output_name(relative_path: &Path) -> PathBuf {
    let name = relative_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(PAGE_EXTENSION))
        .unwrap_or("page");
    relative_path.with_file_name(format!("{}.jsx", name))
}

/// Replay one script in a fresh session and generate its markup
fn build_page(
    path: &Path,
    relative_path: &Path,
    catalog: &Catalog,
    options: &CompileOptions,
) -> Result<String> {
    let source = fs::read_to_string(path)?;
    let script = PageScript::from_json(&source)?;

    let key = relative_path.to_string_lossy().replace('\\', "/");
    let state = EditorState::new(IdGenerator::new(&key));
    let mut session = EditSession::from_state(key.clone(), state);

    let report = script.replay(&mut session, catalog)?;
    tracing::info!(
        page = %key,
        applied = report.applied,
        ignored = report.ignored,
        "replayed page script"
    );

    Ok(session.generate(options.clone()))
}

fn write_output(output_file: &Path, code: &str) -> Result<()> {
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_file, code)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::{init, InitArgs};

    fn build_args(stdout: bool) -> BuildArgs {
        BuildArgs {
            path: PathBuf::from("."),
            semantic: false,
            stdout,
            out_dir: None,
        }
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name(Path::new("home.page.json")), PathBuf::from("home.jsx"));
        assert_eq!(
            output_name(Path::new("blog/post.page.json")),
            PathBuf::from("blog/post.jsx")
        );
    }

    #[test]
    fn test_is_page_file() {
        assert!(is_page_file(Path::new("pages/home.page.json")));
        assert!(!is_page_file(Path::new("pages/catalog.json")));
        assert!(!is_page_file(Path::new("pages/home.page.jsonx")));
    }

    #[test]
    fn test_build_initialized_project() {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                src_dir: "pages".into(),
                semantic: false,
                force: false,
            },
            dir.path(),
        )
        .unwrap();

        build(build_args(false), dir.path()).unwrap();

        let output = fs::read_to_string(dir.path().join("dist/home.jsx")).unwrap();
        assert!(output.starts_with("<div className=\"min-h-screen w-full bg-white p-8 space-y-4\">"));
        assert!(output.contains("flex flex-row"));
        assert!(output.contains("marginTop:'32px'"));
    }

    #[test]
    fn test_build_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::from_json(
            r#"[{ "category": "Buttons", "items": [{ "name": "B", "template": "<button>b</button>" }] }]"#,
        )
        .unwrap();
        let page = dir.path().join("a.page.json");
        fs::write(&page, r#"[{ "op": "add", "category": "Buttons", "item": "B" }]"#).unwrap();

        let first = build_page(&page, Path::new("a.page.json"), &catalog, &CompileOptions::default()).unwrap();
        let second = build_page(&page, Path::new("a.page.json"), &catalog, &CompileOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(build(build_args(false), dir.path()).is_err());
    }
}

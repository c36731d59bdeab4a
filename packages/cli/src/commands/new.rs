use super::{id_generator, open_store};
use crate::config::Config;
use anyhow::{bail, Result};
use blockpage_editor::{Editor, Intent};
use blockpage_model::ComponentType;
use blockpage_store::PageStore;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Page id, used as the file name
    pub page: String,

    /// Block type to add from the catalog, in page order (repeatable)
    #[arg(short, long = "block", value_name = "TYPE")]
    pub blocks: Vec<ComponentType>,

    /// Overwrite an existing page
    #[arg(short, long)]
    pub force: bool,
}

pub fn new_page(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);

    if store.exists(&args.page) && !args.force {
        bail!("Page '{}' already exists (use --force to overwrite)", args.page);
    }

    let mut editor =
        Editor::with_config(Vec::new(), config.editor_config()).with_ids(id_generator(&config, &[]));

    for component_type in &args.blocks {
        let outcome = editor.dispatch(Intent::AddFromCatalog {
            component_type: *component_type,
            template: None,
        });
        if !outcome.is_changed() {
            bail!("No template available for block type '{}'", component_type);
        }
    }

    store.save(&args.page, editor.components())?;

    println!(
        "{} Created page {} with {} block(s)",
        "✓".green(),
        args.page.bright_white(),
        editor.components().len()
    );
    for component in editor.components() {
        println!("  {} {}", component.component_type.to_string().cyan(), component.id().dimmed());
    }

    Ok(())
}

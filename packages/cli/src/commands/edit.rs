use super::{id_generator, open_store};
use crate::config::Config;
use anyhow::{Context, Result};
use blockpage_editor::{Editor, Intent, LogListener};
use blockpage_store::PageStore;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Page id
    pub page: String,

    /// JSON array of intents to apply, in order
    pub script: PathBuf,

    /// Apply the script without saving the result
    #[arg(long)]
    pub dry_run: bool,
}

/// What a script did to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSummary {
    pub changed: usize,
    pub ignored: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_len: usize,
}

/// Dispatch every intent in order
pub fn run_script(editor: &mut Editor, intents: Vec<Intent>) -> EditSummary {
    let mut changed = 0;
    let mut ignored = 0;
    for intent in intents {
        if editor.dispatch(intent).is_changed() {
            changed += 1;
        } else {
            ignored += 1;
        }
    }

    EditSummary {
        changed,
        ignored,
        can_undo: editor.can_undo(),
        can_redo: editor.can_redo(),
        history_len: editor.history().len(),
    }
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);

    let script_path = PathBuf::from(cwd).join(&args.script);
    let source = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read script {}", script_path.display()))?;
    let intents: Vec<Intent> = serde_json::from_str(&source)
        .with_context(|| format!("Invalid intent script {}", script_path.display()))?;

    let components = store.load(&args.page)?;
    let ids = id_generator(&config, &components);
    let mut editor = Editor::with_config(components, config.editor_config())
        .with_ids(ids)
        .with_listener(LogListener);

    info!(page = %args.page, intents = intents.len(), "Running intent script");
    let summary = run_script(&mut editor, intents);

    println!(
        "{} {} intent(s) applied, {} ignored",
        "✓".green(),
        summary.changed.to_string().bright_white(),
        summary.ignored
    );
    println!(
        "  history: {} snapshot(s), undo {}, redo {}",
        summary.history_len,
        yes_no(summary.can_undo),
        yes_no(summary.can_redo)
    );

    if !editor.is_dirty() {
        println!("  {} No changes to save", "•".dimmed());
    } else if args.dry_run {
        println!("  {} Dry run, {} not saved", "⚠️".yellow(), args.page);
    } else {
        store.save(&args.page, editor.components())?;
        editor.mark_saved();
        println!(
            "  {} Saved {} ({} block(s))",
            "✓".green(),
            args.page.bright_white(),
            editor.components().len()
        );
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

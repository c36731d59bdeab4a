use super::open_store;
use crate::config::Config;
use anyhow::Result;
use blockpage_model::Component;
use blockpage_store::{PageDocument, PageStore};
use clap::Args;
use colored::Colorize;
use serde_json::Value;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Page id
    pub page: String,

    /// Print the page document as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = open_store(&config, cwd);
    let components = store.load(&args.page)?;

    if args.json {
        let document = PageDocument {
            id: args.page,
            components,
        };
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!(
        "{} {} ({} block(s))",
        "📄".bright_blue(),
        args.page.bright_white().bold(),
        components.len()
    );
    for (index, component) in components.iter().enumerate() {
        println!("{}", describe(index, component));
    }

    Ok(())
}

/// One-line summary: position, type, id and the block's heading when it has one
fn describe(index: usize, component: &Component) -> String {
    let mut line = format!(
        "  {:>2}. {:<12} {}",
        index + 1,
        component.component_type.to_string().cyan(),
        component.id().dimmed()
    );
    if let Some(Value::String(heading)) = component.content.get("heading") {
        line.push_str(&format!("  \"{}\"", heading));
    }
    if let Some(template) = &component.template {
        line.push_str(&format!("  [{}]", template));
    }
    line
}

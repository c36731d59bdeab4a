use anyhow::Result;
use blockpage_model::{ComponentType, TemplateCatalog};
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct BlocksArgs {
    /// Only list templates for this block type
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub component_type: Option<ComponentType>,
}

pub fn blocks(args: BlocksArgs, _cwd: &str) -> Result<()> {
    let catalog = TemplateCatalog::builtin();

    let types: Vec<ComponentType> = match args.component_type {
        Some(component_type) => vec![component_type],
        None => ComponentType::ALL.to_vec(),
    };

    println!("{}", "🧱 Available blocks".bright_blue().bold());
    for component_type in types {
        println!();
        println!("{}", component_type.to_string().cyan().bold());

        let default_id = catalog.default_for(component_type).map(|t| t.id.as_str());
        for template in catalog.for_type(component_type) {
            let marker = if Some(template.id.as_str()) == default_id {
                " (default)".green().to_string()
            } else {
                String::new()
            };
            println!("  {:<20} {}{}", template.id.bright_white(), template.name, marker);
        }
    }

    Ok(())
}

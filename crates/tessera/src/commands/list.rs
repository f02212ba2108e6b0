use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tessera_core::Config;

#[derive(Serialize)]
struct TemplateSummary<'a> {
    name: &'a str,
    description: &'a str,
    lang: &'a str,
    repeated_files: usize,
    root_files: usize,
}

pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let config = ctx.load_config()?;

    if json {
        output_json(&config)
    } else {
        output_human(&config, ctx.verbose)
    }
}

fn output_json(config: &Config) -> Result<()> {
    let templates: Vec<_> = config
        .templates
        .iter()
        .map(|t| TemplateSummary {
            name: &t.name,
            description: &t.desc,
            lang: &t.lang,
            repeated_files: t.repeated_group().files.len(),
            root_files: t.root.len(),
        })
        .collect();

    let output = serde_json::json!({
        "path": config.path,
        "templates": templates,
        "count": templates.len(),
    });
    print_json(&serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn output_human(config: &Config, verbose: bool) -> Result<()> {
    if config.templates.is_empty() {
        print_text(&format!("{} No templates loaded from {}", "!".yellow(), config.path))?;
        return Ok(());
    }

    print_text(&format!("{} Templates in {}:", "→".cyan(), config.path))?;
    for template in &config.templates {
        print_text(&format!("  {} {}", "•".cyan(), template.name))?;
        if !template.desc.is_empty() {
            print_text(&format!("    {}", template.desc))?;
        }
        if verbose {
            print_text(&format!("    Language: {}", template.lang))?;
            print_text(&format!("    Folder: {}", template.repeated_group().folder))?;
        }
    }
    print_text(&format!(
        "\n{} Total: {} template(s)",
        "→".cyan(),
        config.templates.len()
    ))?;
    Ok(())
}

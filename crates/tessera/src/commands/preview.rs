use crate::context::{Context, find_template};
use crate::output::print_text;
use anyhow::Result;
use tessera_core::{BoxStyle, generate_preview};

pub fn run(ctx: &Context, name: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let template = find_template(&config, name)?;

    print_text(&generate_preview(template, &BoxStyle::default()))?;
    Ok(())
}

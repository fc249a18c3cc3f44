//! Enum command handler

use anyhow::{Context, Result};

use iconforge::application::EnumOptions;
use iconforge::presentation::factory::create_enum_use_case;

use super::Invocation;

pub fn cmd_enum(inv: &Invocation) -> Result<()> {
    inv.start("enum");
    let sink = inv.event_sink();

    let options = EnumOptions::from_config(&inv.root, &inv.config.enum_gen);
    let result = create_enum_use_case()
        .execute_with_events(&options, sink.as_ref())
        .context("generating the icon enum")?;

    inv.complete("enum", result.count, 0);
    Ok(())
}

//! Copy command handler

use anyhow::{Context, Result};

use iconforge::presentation::factory::create_copy_use_case;

use super::Invocation;

pub fn cmd_copy(inv: &Invocation) -> Result<()> {
    inv.start("copy");
    let sink = inv.event_sink();

    let result = create_copy_use_case()
        .execute_with_events(&inv.root, &inv.config.copy, sink.as_ref())
        .context("copying assets")?;

    inv.complete("copy", result.copied.len(), result.failures.len());
    result.ensure_success()?;
    Ok(())
}

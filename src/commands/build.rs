//! Build command handler

use anyhow::{Context, Result};

use iconforge::application::BuildOptions;
use iconforge::presentation::factory::create_build_use_case;

use super::Invocation;

pub fn cmd_build(inv: &Invocation) -> Result<()> {
    inv.start("build");
    let sink = inv.event_sink();

    let options = BuildOptions::from_config(&inv.root, &inv.config);
    let result = create_build_use_case()
        .execute_with_events(&options, sink.as_ref())
        .context("building the icon package")?;

    let written = 1 + result.components.written + result.copy.copied.len();
    inv.complete("build", written, result.copy.failures.len());
    result.copy.ensure_success()?;
    Ok(())
}

//! Components command handler

use anyhow::{Context, Result};

use iconforge::application::ComponentsOptions;
use iconforge::presentation::factory::create_components_use_case;

use super::Invocation;

pub fn cmd_components(inv: &Invocation, no_mirror: bool) -> Result<()> {
    inv.start("components");
    let sink = inv.event_sink();

    let mut options = ComponentsOptions::from_config(&inv.root, &inv.config.components);
    if no_mirror {
        options = options.without_mirror();
    }

    let result = create_components_use_case()
        .execute_with_events(&options, sink.as_ref())
        .context("generating components")?;

    inv.complete("components", result.written, 0);
    Ok(())
}

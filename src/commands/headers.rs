//! Headers command handler
//!
//! Best-effort: every file is attempted, failures are reported as they
//! happen and the command fails at the end if any file failed.

use anyhow::Result;

use iconforge::presentation::factory::create_headers_use_case;

use super::Invocation;

pub fn cmd_headers(inv: &Invocation) -> Result<()> {
    inv.start("headers");
    let sink = inv.event_sink();

    let result = create_headers_use_case().execute_with_events(
        &inv.root,
        &inv.config.headers.directories,
        sink.as_ref(),
    );

    inv.complete("headers", result.updated(), result.failures.len());
    result.ensure_success()?;
    Ok(())
}

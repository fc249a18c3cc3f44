//! Diff command handler
//!
//! Lists generated files that are new or differ from disk, plus stale files
//! left in the component output directory. `-v` prints the unified diff;
//! `--check` turns any difference into a failure.

use anyhow::{bail, Context, Result};

use iconforge::application::{ChangeType, ComponentsOptions, DiffResult, EnumOptions};
use iconforge::presentation::factory::create_diff_use_case;

use crate::ui::json::{self, events::DiffEntryEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::Invocation;

pub fn cmd_diff(inv: &Invocation, check: bool) -> Result<()> {
    inv.start("diff");

    let enum_options = EnumOptions::from_config(&inv.root, &inv.config.enum_gen);
    let components_options =
        ComponentsOptions::from_config(&inv.root, &inv.config.components).without_mirror();
    let result = create_diff_use_case()
        .execute(&enum_options, &components_options)
        .context("comparing generated output")?;

    if inv.ui.json {
        for entry in &result.entries {
            let _ = json::emit_event(&DiffEntryEvent::from(entry));
        }
    } else {
        print!("{}", render_diff(inv, &result));
    }

    let changed = result.count(ChangeType::New)
        + result.count(ChangeType::Modified)
        + result.count(ChangeType::Stale);
    inv.complete("diff", changed, 0);

    if check && result.has_changes() {
        bail!("{} generated file(s) out of date", changed);
    }
    Ok(())
}

fn render_diff(inv: &Invocation, result: &DiffResult) -> String {
    let color = inv.ui.color;
    let mut out = String::new();

    for entry in &result.entries {
        let label = match entry.change_type {
            ChangeType::New => ColoredText::success("new").render(color),
            ChangeType::Modified => ColoredText::warning("modified").render(color),
            ChangeType::Stale => ColoredText::error("stale").render(color),
            ChangeType::Unchanged if inv.ui.show_files() => {
                ColoredText::dim("unchanged").render(color)
            }
            ChangeType::Unchanged => continue,
        };
        out.push_str(&format!(
            "{} {:<9} {}",
            Icon::Diff.colored(color, inv.ui.unicode),
            label,
            entry.path.display()
        ));
        if entry.change_type != ChangeType::Unchanged {
            out.push_str(&format!(
                " {}",
                ColoredText::dim(format!("({})", entry.diff.summary())).render(color)
            ));
        }
        out.push('\n');

        if inv.ui.show_files() && !entry.diff.unified.is_empty() {
            out.push_str(&entry.diff.unified);
        }
    }

    let new = result.count(ChangeType::New);
    let modified = result.count(ChangeType::Modified);
    let stale = result.count(ChangeType::Stale);
    let unchanged = result.count(ChangeType::Unchanged);
    let (icon, summary) = if result.has_changes() {
        let mut summary = format!("{new} new, {modified} modified");
        if stale > 0 {
            summary.push_str(&format!(", {stale} stale"));
        }
        summary.push_str(&format!(", {unchanged} unchanged"));
        (Icon::Warning, summary)
    } else {
        (Icon::Success, format!("up to date ({unchanged} files)"))
    };
    out.push_str(&format!(
        "{} {}\n",
        icon.colored(color, inv.ui.unicode),
        summary
    ));
    out
}

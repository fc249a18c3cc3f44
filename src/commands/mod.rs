//! Command handlers
//!
//! Each handler builds its use case through the presentation factory, wires
//! the event sink for the chosen output mode and turns results into an
//! `anyhow::Result`.

pub mod build;
pub mod components;
pub mod copy;
pub mod diff;
pub mod enums;
pub mod headers;

use std::path::PathBuf;

use anyhow::{Context, Result};

use iconforge::config::{Config, ConfigWarning};
use iconforge::domain::ports::PipelineEventSink;
use iconforge::presentation::Cli;

use crate::ui::context::UiContext;
use crate::ui::json::{self, events::CompleteEvent, events::StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::sink::{ConsoleEventSink, JsonEventSink};

/// Everything a command needs: resolved root, layered config, UI settings
pub struct Invocation {
    pub root: PathBuf,
    pub config: Config,
    pub ui: UiContext,
}

impl Invocation {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("resolving the current directory")?,
        };

        let (config, warnings) = Config::load_for_project(&root, cli.config.as_deref())
            .context("loading configuration")?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

        let invocation = Self { root, config, ui };
        invocation.report_config_warnings(&warnings);
        Ok(invocation)
    }

    /// Event sink for the chosen output mode
    pub fn event_sink(&self) -> Box<dyn PipelineEventSink> {
        if self.ui.json {
            Box::new(JsonEventSink)
        } else {
            Box::new(ConsoleEventSink::new(self.ui))
        }
    }

    pub fn start(&self, command: &str) {
        if self.ui.json {
            let _ = json::emit_event(&StartEvent::new(command));
        }
    }

    /// Final `complete` event (JSON) for a command that did not fail fatally
    pub fn complete(&self, command: &str, written: usize, failed: usize) {
        if self.ui.json {
            let event = if failed == 0 {
                CompleteEvent::success(command)
            } else {
                CompleteEvent::failure(command)
            };
            let _ = json::emit_event(&event.with_counts(written, failed));
        }
    }

    fn report_config_warnings(&self, warnings: &[ConfigWarning]) {
        for warning in warnings {
            if self.ui.json {
                let _ = json::emit(serde_json::json!({
                    "event": "warning",
                    "message": warning.to_string(),
                }));
            } else {
                eprintln!(
                    "{} {}",
                    Icon::Warning.colored(self.ui.color, self.ui.unicode),
                    ColoredText::warning(warning.to_string()).render(self.ui.color)
                );
            }
        }
    }
}

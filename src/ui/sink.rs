//! Event sinks rendering pipeline progress for the terminal or as NDJSON

use iconforge::domain::ports::{PipelineEvent, PipelineEventSink};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Human-readable progress lines
///
/// Per-file events are shown from `-v` on; warnings, failures and stage
/// summaries are always shown.
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    /// Line for an event, or None when the event is hidden at this verbosity
    pub fn render(&self, event: &PipelineEvent) -> Option<String> {
        let color = self.ui.color;
        match event {
            PipelineEvent::Started { stage, source } if self.ui.show_files() => Some(format!(
                "{} {} {}",
                self.icon(Icon::Progress),
                ColoredText::info(*stage).bold().render(color),
                ColoredText::dim(source.display().to_string()).render(color)
            )),
            PipelineEvent::ArtifactWritten { path } if self.ui.show_files() => Some(format!(
                "  {} {}",
                self.icon(Icon::Arrow),
                path.display()
            )),
            PipelineEvent::FileCopied { from, to } if self.ui.show_files() => Some(format!(
                "  {} {} {}",
                self.icon(Icon::Arrow),
                from.display(),
                ColoredText::dim(format!("-> {}", to.display())).render(color)
            )),
            PipelineEvent::HeaderInserted { path } if self.ui.show_files() => Some(format!(
                "  {} {} {}",
                self.icon(Icon::Success),
                path.display(),
                ColoredText::dim("(inserted)").render(color)
            )),
            PipelineEvent::HeaderReplaced { path } if self.ui.show_files() => Some(format!(
                "  {} {} {}",
                self.icon(Icon::Success),
                path.display(),
                ColoredText::dim("(updated)").render(color)
            )),
            PipelineEvent::HeaderUnchanged { path } if self.ui.verbose > 1 => Some(format!(
                "  {} {}",
                self.icon(Icon::Pending),
                ColoredText::dim(path.display().to_string()).render(color)
            )),
            PipelineEvent::EmptyDirectory { path } => Some(format!(
                "{} {}",
                self.icon(Icon::Warning),
                ColoredText::warning(format!("no assets found in {}", path.display()))
                    .render(color)
            )),
            PipelineEvent::Warning { message } => Some(format!(
                "{} {}",
                self.icon(Icon::Warning),
                ColoredText::warning(message.as_str()).render(color)
            )),
            PipelineEvent::ItemFailed { path, error } => Some(format!(
                "{} {}: {}",
                self.icon(Icon::Error),
                path.display(),
                ColoredText::error(error.as_str()).render(color)
            )),
            PipelineEvent::Completed {
                stage,
                written,
                failed,
            } => {
                let (icon, summary) = if *failed == 0 {
                    (Icon::Success, format!("{stage}: {written} written"))
                } else {
                    (
                        Icon::Error,
                        format!("{stage}: {written} written, {failed} failed"),
                    )
                };
                Some(format!("{} {}", self.icon(icon), summary))
            }
            _ => None,
        }
    }
}

impl PipelineEventSink for ConsoleEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let Some(line) = self.render(&event) else {
            return;
        };
        match event {
            PipelineEvent::Warning { .. }
            | PipelineEvent::EmptyDirectory { .. }
            | PipelineEvent::ItemFailed { .. } => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// NDJSON event stream on stdout
pub struct JsonEventSink;

impl PipelineEventSink for JsonEventSink {
    fn on_event(&self, event: PipelineEvent) {
        let _ = json::emit(json::events::pipeline_event(&event));
    }
}

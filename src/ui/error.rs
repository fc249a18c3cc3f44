use iconforge::IconforgeError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json::{self, events::ErrorEvent};
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// `[ERROR]` block for a fatal error, with a fix hint where one is known
pub fn format_error(err: &anyhow::Error, supports_color: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        ColoredText::error("[ERROR]").bold().render(supports_color),
        err
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(fix) = err.downcast_ref::<IconforgeError>().and_then(fix_hint) {
        out.push_str(&format!("  FIX: {}\n", fix));
    }
    out
}

fn fix_hint(err: &IconforgeError) -> Option<&'static str> {
    match err {
        IconforgeError::InvalidAssetPath { .. } => {
            Some("Move the file into a <size>px directory, e.g. icons/16px/name.svg")
        }
        IconforgeError::DuplicateIdentifier { .. } => {
            Some("Rename one of the files so their generated names differ")
        }
        IconforgeError::DirectoryNotFound { .. } => {
            Some("Check --root or the source paths in iconforge.toml")
        }
        IconforgeError::InvalidConfig { .. } => Some("Fix the TOML syntax and try again"),
        _ => None,
    }
}

fn error_path(err: &anyhow::Error) -> Option<String> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<IconforgeError>())
        .and_then(IconforgeError::path)
        .map(|p| p.display().to_string())
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut event = ErrorEvent::new(format!("{:#}", err));
        if let Some(path) = error_path(err) {
            event = event.with_path(path);
        }
        let _ = json::emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    if caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                error_path(err).as_deref(),
                Some("iconforge"),
            )
        );
    }

    eprint!("{}", format_error(err, caps.supports_color));
}

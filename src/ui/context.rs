use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use iconforge::config::{ColorMode, Config};
use iconforge::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color.map(ColorMode::from).unwrap_or(config.output.color) {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode,
        }
    }

    /// Per-file lines are shown from `-v` on
    pub fn show_files(&self) -> bool {
        self.verbose > 0
    }
}

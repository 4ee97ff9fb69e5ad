use clap::{Args, ValueEnum};
use serde_json::{json, Value};

use crate::preferences::{JsonFileStore, PreferenceStore, Theme, ThemeSetting};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

/// Arguments for showing or changing the display theme
#[derive(Args)]
pub struct ThemeArgs {
    /// New theme; omit to show the current one
    pub action: Option<ThemeAction>,
}

pub fn run_theme(
    args: ThemeArgs,
    setting: &mut ThemeSetting<JsonFileStore>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let changed = match args.action {
        None => false,
        Some(action) => {
            apply(action, setting)?;
            true
        }
    };

    Ok(json!({
        "theme": setting.current().as_str(),
        "changed": changed,
        "path": setting.store().path().display().to_string(),
    }))
}

fn apply<S: PreferenceStore>(
    action: ThemeAction,
    setting: &mut ThemeSetting<S>,
) -> Result<(), Box<dyn std::error::Error>> {
    let next = match action {
        ThemeAction::Light => Theme::Light,
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Toggle => setting.current().toggled(),
    };
    setting.update(next)?;
    tracing::info!(theme = %next, "theme updated");
    Ok(())
}

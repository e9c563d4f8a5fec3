use appicons::AppIconsError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Error.colored(supports_color, supports_unicode);
    let mut out = format!("{} {}\n", icon, err);

    if let Some(AppIconsError::SourceNotFound { .. }) = err.downcast_ref::<AppIconsError>() {
        out.push_str(
            "\n  Place the master icon at that path, or point to it with --source\n  (or APPICONS_SOURCE, or [source] path in appicons.toml).\n",
        );
    }
    out
}

/// Color and unicode for the error line: the resolved settings when a
/// context exists, otherwise what the terminal supports.
fn error_style(ui: Option<&UiContext>) -> (bool, bool) {
    match ui {
        Some(ui) => (ui.color, ui.unicode),
        None => {
            let caps = detect_capabilities();
            (caps.supports_color, caps.supports_unicode)
        }
    }
}

pub fn print_error(err: &anyhow::Error, json: bool, ui: Option<&UiContext>) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(path) = err.downcast_ref::<AppIconsError>().and_then(|e| e.path()) {
            output["path"] = serde_json::json!(path.display().to_string());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    let (color, unicode) = error_style(ui);
    eprint!("{}", format_error(err, color, unicode));
}

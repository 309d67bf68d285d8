//! Small browser helpers run through `document::eval`.

use dioxus::prelude::*;

/// Resolve after `ms` milliseconds using the browser's timer.
pub async fn sleep(ms: u32) {
    let script = format!(
        "await new Promise(resolve => setTimeout(resolve, {})); return true;",
        ms
    );
    let _ = document::eval(&script).await;
}

/// Put `text` on the user's clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let literal = serde_json::to_string(text).map_err(|e| e.to_string())?;
    let script = format!(
        "await navigator.clipboard.writeText({}); return true;",
        literal
    );

    document::eval(&script)
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to copy: {}", e))
}

/// Progress of a page's initial load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

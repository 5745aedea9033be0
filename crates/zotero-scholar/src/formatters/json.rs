//! JSON output formatting.

use serde_json::{Value, json};

use crate::notify::Notification;
use crate::state::ViewState;

/// Render the whole view as JSON.
///
/// Results keep every field the search returned; the selection carries a
/// `semanticData` object once enriched.
#[must_use]
pub fn view_json(state: &ViewState) -> Value {
    json!({
        "query": state.query(),
        "loading": state.is_loading(),
        "results": state.results(),
        "selected": state.selected(),
    })
}

/// Render a list of notifications as JSON.
#[must_use]
pub fn notifications_json<'a>(notifications: impl IntoIterator<Item = &'a Notification>) -> Value {
    Value::Array(
        notifications
            .into_iter()
            .map(|n| json!({"id": n.id, "title": n.title, "description": n.description}))
            .collect(),
    )
}

/// The view plus the failures raised while producing it, for one-shot output.
#[must_use]
pub fn report_json<'a>(
    state: &ViewState,
    notifications: impl IntoIterator<Item = &'a Notification>,
) -> Value {
    let mut report = view_json(state);
    report["notifications"] = notifications_json(notifications);
    report
}

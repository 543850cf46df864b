use serde_json::{json, Value};

use crate::draw_engine::models::{BallStatus, Snapshot};

/// Label on the draw button once the pool is empty.
const FINISHED_LABEL: &str = "Finished";
const DRAW_LABEL: &str = "Draw";
const EMPTY_POOL_MESSAGE: &str = "All numbers have been drawn!";
const READY_LABEL: &str = "Ready";

/// One pool ball.
fn available_ball(number: i64) -> Value {
    json!({ "number": number, "status": BallStatus::Available })
}

/// One history ball; the newest gets the highlight ring.
fn history_ball(number: i64, is_last: bool) -> Value {
    json!({ "number": number, "status": BallStatus::Chosen, "highlight": is_last })
}

/// Map a [`Snapshot`] to the JSON document a web client renders.
///
/// `trivia` is the text shown under the current number, if any.
pub fn to_view_state(snapshot: &Snapshot, trivia: Option<&str>) -> Value {
    let available: Vec<Value> = snapshot.pool.iter().map(|&n| available_ball(n)).collect();
    let history: Vec<Value> = snapshot
        .history
        .iter()
        .map(|e| history_ball(e.value, e.is_last))
        .collect();

    let empty_pool_message = if snapshot.pool.is_empty() {
        Some(EMPTY_POOL_MESSAGE)
    } else {
        None
    };

    let draw_label = if snapshot.can_draw { DRAW_LABEL } else { FINISHED_LABEL };

    json!({
        "range": { "min": snapshot.range.min, "max": snapshot.range.max },
        "current": snapshot.current,
        "draw_enabled": snapshot.can_draw,
        "undo_enabled": snapshot.can_undo,
        "draw_label": draw_label,
        "available": { "count": available.len(), "balls": available },
        "history": { "count": history.len(), "balls": history },
        "trivia": trivia,
        "empty_pool_message": empty_pool_message,
    })
}

/// Plain-text board for terminal front-ends.
pub fn render_text(snapshot: &Snapshot, trivia: Option<&str>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Range: {}\n", snapshot.range));
    match snapshot.current {
        Some(n) => out.push_str(&format!("Current: ( {n} )\n")),
        None => out.push_str(&format!("Current: [ {READY_LABEL} ]\n")),
    }
    if let Some(text) = trivia {
        out.push_str(&format!("  {text}\n"));
    }

    out.push_str(&format!("Available ({}): ", snapshot.remaining()));
    if snapshot.pool.is_empty() {
        out.push_str(EMPTY_POOL_MESSAGE);
    } else {
        out.push_str(&join(snapshot.pool.iter().map(|n| n.to_string())));
    }
    out.push('\n');

    if !snapshot.history.is_empty() {
        let drawn = snapshot.history.iter().map(|e| {
            if e.is_last {
                format!("[{}]", e.value)
            } else {
                e.value.to_string()
            }
        });
        out.push_str(&format!("Drawn ({}): {}\n", snapshot.drawn(), join(drawn)));
    }

    out
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(" ")
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::Value;
use slotboard_domain::{BatchId, WeekSchedule, Weekday};

use crate::view::{BatchRow, BatchTable, ScheduleView};

/// Classifies raw model output text into a renderable view.
///
/// The text is only attempted as JSON when it plausibly is JSON: after
/// trimming surrounding whitespace it must start with `{` or `[`.
/// Anything else, including text that merely contains JSON somewhere
/// inside it, is shown literally. A failed parse of plausible JSON also
/// falls back to the literal text, unchanged.
#[must_use]
pub fn classify_text(raw: &str) -> ScheduleView {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => classify_value(&value),
            Err(_) => ScheduleView::RawText(raw.to_owned()),
        }
    } else {
        ScheduleView::RawText(raw.to_owned())
    }
}

/// Classifies an already-parsed JSON value into a renderable view.
///
/// An object whose top-level keys all look like batch identifiers
/// becomes a [`BatchTable`] with rows in key order. Any other object,
/// and any array, becomes a pretty-printed structured dump. A bare JSON
/// string renders as its contents; any other scalar renders as its JSON
/// text.
#[must_use]
pub fn classify_value(value: &Value) -> ScheduleView {
    match value {
        Value::Object(map) => {
            if map.keys().all(|key| BatchId::matches_key(key)) {
                ScheduleView::BatchTable(batch_table(map))
            } else {
                ScheduleView::Structured(pretty(value))
            }
        }
        Value::Array(_) => ScheduleView::Structured(pretty(value)),
        Value::String(text) => ScheduleView::RawText(text.clone()),
        other => ScheduleView::RawText(other.to_string()),
    }
}

fn batch_table(map: &serde_json::Map<String, Value>) -> BatchTable {
    let rows = map
        .iter()
        .map(|(batch, days)| BatchRow {
            batch: batch.clone(),
            week: week_schedule(days),
        })
        .collect();
    BatchTable { rows }
}

fn week_schedule(days: &Value) -> WeekSchedule {
    let mut week = WeekSchedule::default();
    let Value::Object(day_map) = days else {
        // A malformed batch value still gets a row, with every cell empty.
        return week;
    };
    for day in Weekday::ALL {
        if let Some(Value::Array(entries)) = day_map.get(day.as_str()) {
            *week.slots_mut(day) = entries.iter().map(slot_label).collect();
        }
    }
    week
}

fn slot_label(entry: &Value) -> String {
    match entry {
        Value::String(label) => label.clone(),
        other => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slotboard_domain::Weekday;

use crate::view::ScheduleView;

/// Renders a classified view as plain text.
///
/// Batch tables print one heading per batch followed by the five weekday
/// lines, each slot label in square brackets. Structured and raw views
/// print their text as-is.
#[must_use]
pub fn render_text(view: &ScheduleView) -> String {
    match view {
        ScheduleView::BatchTable(table) => {
            let mut out = String::new();
            for row in &table.rows {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str("Batch ");
                out.push_str(&row.batch);
                out.push('\n');
                for day in Weekday::ALL {
                    out.push_str("  ");
                    out.push_str(day.as_str());
                    out.push(':');
                    for slot in row.slots(day) {
                        out.push_str(" [");
                        out.push_str(slot);
                        out.push(']');
                    }
                    out.push('\n');
                }
            }
            out
        }
        ScheduleView::Structured(text) | ScheduleView::RawText(text) => text.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::classify::classify_text;

    #[test]
    fn test_batch_table_text_layout() {
        let raw = r#"{"B001": {"Monday": ["09:00-10:00 - CS101", "11:00-12:00 - CS102"]}}"#;
        let text = classify_text(raw).to_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Batch B001");
        assert_eq!(lines[1], "  Monday: [09:00-10:00 - CS101] [11:00-12:00 - CS102]");
        assert_eq!(lines[2], "  Tuesday:");
        assert_eq!(lines[5], "  Friday:");
    }

    #[test]
    fn test_raw_text_displays_verbatim() {
        let text = classify_text("service unavailable").to_string();
        assert_eq!(text, "service unavailable");
    }
}

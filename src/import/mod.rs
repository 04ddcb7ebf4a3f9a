pub mod sheet;

use crate::types::campaign::CampaignInput;
use serde_json::Value;
use std::collections::BTreeMap;

pub const CAMPAIGN_MESSAGE_COLUMN: &str = "Campaign Message";
pub const CALL_TO_ACTION_COLUMN: &str = "Call to Action";
pub const KEYWORD_COLUMN: &str = "Keyword";

/// One data row keyed by header text, as read from the first sheet.
pub type RawRow = BTreeMap<String, Value>;

/// Rows lacking either field, or carrying only whitespace in one, are dropped.
pub fn import_campaigns(rows: &[RawRow]) -> Vec<CampaignInput> {
    let campaigns: Vec<CampaignInput> = rows
        .iter()
        .filter_map(|row| {
            let message = truthy_text(row.get(CAMPAIGN_MESSAGE_COLUMN))?;
            let cta = truthy_text(row.get(CALL_TO_ACTION_COLUMN))?;
            if message.trim().is_empty() || cta.trim().is_empty() {
                return None;
            }
            Some(CampaignInput::new(message, cta))
        })
        .collect();

    let dropped = rows.len() - campaigns.len();
    if dropped > 0 {
        tracing::debug!(dropped, "skipped campaign rows without message and call to action");
    }
    campaigns
}

/// Only falsy cells are dropped here; whitespace and duplicates pass through.
pub fn import_keywords(rows: &[RawRow]) -> Vec<String> {
    let keywords: Vec<String> = rows
        .iter()
        .filter_map(|row| truthy_text(row.get(KEYWORD_COLUMN)))
        .collect();

    let dropped = rows.len() - keywords.len();
    if dropped > 0 {
        tracing::debug!(dropped, "skipped empty keyword rows");
    }
    keywords
}

/// Text of a cell that counts as truthy: not null, not `false`, not zero, not "".
fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => {
            let float = number.as_f64()?;
            if float == 0.0 || float.is_nan() {
                return None;
            }
            Some(number_text(number, float))
        }
        other => Some(other.to_string()),
    }
}

fn number_text(number: &serde_json::Number, float: f64) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if float.fract() == 0.0 && float.abs() < 1e15 {
        return format!("{}", float as i64);
    }
    float.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(pairs: &[(&str, Value)]) -> RawRow {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn campaign_rows_need_both_fields() {
        let rows = vec![
            row(&[
                (CAMPAIGN_MESSAGE_COLUMN, json!("Buy now")),
                (CALL_TO_ACTION_COLUMN, json!("")),
            ]),
            row(&[
                (CAMPAIGN_MESSAGE_COLUMN, json!("Buy now")),
                (CALL_TO_ACTION_COLUMN, json!("Shop")),
            ]),
            row(&[(CALL_TO_ACTION_COLUMN, json!("Orphan CTA"))]),
        ];

        let campaigns = import_campaigns(&rows);
        assert_eq!(campaigns, vec![CampaignInput::new("Buy now", "Shop")]);
    }

    #[test]
    fn campaign_rows_with_blank_text_are_dropped() {
        let rows = vec![row(&[
            (CAMPAIGN_MESSAGE_COLUMN, json!("   ")),
            (CALL_TO_ACTION_COLUMN, json!("Shop")),
        ])];
        assert!(import_campaigns(&rows).is_empty());
    }

    #[test]
    fn campaign_text_is_kept_verbatim() {
        let rows = vec![row(&[
            (CAMPAIGN_MESSAGE_COLUMN, json!("  Padded message ")),
            (CALL_TO_ACTION_COLUMN, json!(2024)),
        ])];
        let campaigns = import_campaigns(&rows);
        assert_eq!(campaigns[0].campaign_message, "  Padded message ");
        assert_eq!(campaigns[0].call_to_action, "2024");
    }

    #[test]
    fn keywords_keep_whitespace_and_duplicates() {
        let rows = vec![
            row(&[(KEYWORD_COLUMN, json!("summer"))]),
            row(&[(KEYWORD_COLUMN, json!(""))]),
            row(&[(KEYWORD_COLUMN, json!(" "))]),
            row(&[(KEYWORD_COLUMN, json!("summer"))]),
            row(&[(KEYWORD_COLUMN, json!(0))]),
            row(&[("Other", json!("ignored"))]),
        ];

        let keywords = import_keywords(&rows);
        assert_eq!(keywords, vec!["summer", " ", "summer"]);
    }

    #[test]
    fn float_cells_render_like_spreadsheet_text() {
        let rows = vec![
            row(&[(KEYWORD_COLUMN, json!(3.0))]),
            row(&[(KEYWORD_COLUMN, json!(2.5))]),
            row(&[(KEYWORD_COLUMN, json!(true))]),
        ];
        assert_eq!(import_keywords(&rows), vec!["3", "2.5", "true"]);
    }
}

//! Admission gate for new records and lenient cleaning of persisted
//! custom-service payloads.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::domain::{
    custom_service::truncate_name, CustomServiceCategories, CustomServiceItem, FinanceRecord,
    NumericField, RecordDraft, ServiceCategory,
};
use crate::errors::ValidationError;

static MONTH_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").ok());

/// Returns true when `value` has the `YYYY-MM` shape.
pub fn is_month_key(value: &str) -> bool {
    MONTH_PATTERN
        .as_ref()
        .map_or(false, |pattern| pattern.is_match(value))
}

/// Checks a draft before it is admitted into the record collection.
///
/// The date must be present and shaped `YYYY-MM`; every amount that is
/// present must parse to a non-negative number. The first failure wins.
pub fn validate_record(draft: &RecordDraft) -> Result<(), ValidationError> {
    let date = match draft.date.as_deref() {
        Some(date) if !date.is_empty() => date,
        _ => return Err(ValidationError::MissingDate),
    };
    if !is_month_key(date) {
        return Err(ValidationError::InvalidDateFormat);
    }
    for field in NumericField::ALL {
        if let Some(raw) = draft.amounts.get(&field) {
            if parse_amount(raw).is_none() {
                return Err(ValidationError::InvalidAmount { field: field.key() });
            }
        }
    }
    Ok(())
}

/// Validates a draft and turns it into a record, generating an id when the
/// draft does not carry one.
pub fn admit_record(draft: RecordDraft) -> Result<FinanceRecord, ValidationError> {
    validate_record(&draft)?;
    let RecordDraft {
        id,
        date,
        amounts,
        custom_service,
    } = draft;
    let date = date.ok_or(ValidationError::MissingDate)?;
    let mut record = match id {
        Some(id) => FinanceRecord::with_id(id, date),
        None => FinanceRecord::new(date),
    };
    for (field, raw) in &amounts {
        record.set_amount(*field, parse_amount(raw).unwrap_or(0.0));
    }
    record.custom_service = normalize_custom_service(custom_service);
    Ok(record)
}

/// Parses user-entered amount text. Blank input counts as 0.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Reapplies the item rules to already-typed categories.
pub fn normalize_custom_service(services: CustomServiceCategories) -> CustomServiceCategories {
    let mut normalized = CustomServiceCategories::default();
    for category in ServiceCategory::ALL {
        *normalized.items_mut(category) = services
            .items(category)
            .iter()
            .map(|item| CustomServiceItem::new(&item.name, item.value))
            .collect();
    }
    normalized
}

/// Cleans an arbitrary JSON value into the four fixed categories. Never
/// fails: unknown keys are dropped, non-array categories become empty, and
/// anything that is not an object yields the all-empty default.
pub fn validate_custom_service(raw: &Value) -> CustomServiceCategories {
    let mut result = CustomServiceCategories::default();
    let Some(object) = raw.as_object() else {
        return result;
    };
    for category in ServiceCategory::ALL {
        if let Some(Value::Array(items)) = object.get(category.key()) {
            *result.items_mut(category) = items.iter().map(clean_item).collect();
        }
    }
    result
}

fn clean_item(raw: &Value) -> CustomServiceItem {
    let name = match raw.get("name") {
        Some(Value::String(name)) => truncate_name(name),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => {
            truncate_name(&number.to_string())
        }
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    };
    let value = raw.get("value").map(number_like).unwrap_or(f64::NAN);
    CustomServiceItem {
        name,
        value: if value >= 0.0 { value } else { 0.0 },
    }
}

/// Loose numeric reading of a JSON scalar; NaN when it cannot be read.
pub(crate) fn number_like(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Null => 0.0,
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_date_is_rejected_first() {
        let draft = RecordDraft::default().with_amount(NumericField::Assets, "-1");
        assert_eq!(validate_record(&draft), Err(ValidationError::MissingDate));
        assert_eq!(
            validate_record(&RecordDraft::new("")),
            Err(ValidationError::MissingDate)
        );
    }

    #[test]
    fn date_must_be_year_and_month() {
        for bad in ["2024-1", "2024-01-15", "24-01", "2024/01", "２０２４-01"] {
            assert_eq!(
                validate_record(&RecordDraft::new(bad)),
                Err(ValidationError::InvalidDateFormat),
                "{bad} should be rejected"
            );
        }
        assert_eq!(validate_record(&RecordDraft::new("2024-01")), Ok(()));
    }

    #[test]
    fn negative_or_non_numeric_amounts_name_the_field() {
        let draft = RecordDraft::new("2024-01").with_amount(NumericField::ExpenseRent, "-5");
        let err = validate_record(&draft).unwrap_err();
        assert_eq!(err.to_string(), "expense_rent must be a valid non-negative number");

        let draft = RecordDraft::new("2024-01").with_amount(NumericField::BankIn, "abc");
        assert_eq!(
            validate_record(&draft),
            Err(ValidationError::InvalidAmount { field: "bank_in" })
        );

        let draft = RecordDraft::new("2024-01").with_amount(NumericField::Assets, "NaN");
        assert!(validate_record(&draft).is_err());
    }

    #[test]
    fn unbounded_amounts_are_rejected() {
        for raw in ["Infinity", "inf", "1e999"] {
            let draft = RecordDraft::new("2024-01").with_amount(NumericField::IncomeOther, raw);
            assert_eq!(
                validate_record(&draft),
                Err(ValidationError::InvalidAmount { field: "income_other" }),
                "{raw} should be rejected"
            );
        }
        assert_eq!(parse_amount("1e300"), Some(1e300));
    }

    #[test]
    fn blank_amount_is_accepted_as_zero() {
        let draft = RecordDraft::new("2024-01").with_amount(NumericField::Equity, "  ");
        assert_eq!(validate_record(&draft), Ok(()));
        let record = admit_record(draft).unwrap();
        assert_eq!(record.equity, 0.0);
    }

    #[test]
    fn admit_record_parses_amounts_and_keeps_id() {
        let mut draft = RecordDraft::new("2024-06")
            .with_amount(NumericField::IncomeOther, "1250.50")
            .with_amount(NumericField::ExpenseCogs, "300");
        draft.id = Some("record-7".into());
        let record = admit_record(draft).unwrap();
        assert_eq!(record.id, "record-7");
        assert_eq!(record.income_other, 1250.5);
        assert_eq!(record.expense_cogs, 300.0);
        assert_eq!(record.bank_out, 0.0);
    }

    #[test]
    fn admit_record_generates_id_when_absent() {
        let first = admit_record(RecordDraft::new("2024-06")).unwrap();
        let second = admit_record(RecordDraft::new("2024-06")).unwrap();
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn custom_service_items_are_truncated_and_clamped() {
        let raw = json!({ "OT": [{ "name": "x".repeat(50), "value": -5 }] });
        let cleaned = validate_custom_service(&raw);
        assert_eq!(
            cleaned.ot,
            vec![CustomServiceItem {
                name: "x".repeat(40),
                value: 0.0
            }]
        );
        assert!(cleaned.sld.is_empty());
        assert!(cleaned.physc.is_empty());
        assert!(cleaned.apa.is_empty());
    }

    #[test]
    fn custom_service_degrades_to_empty_on_bad_shapes() {
        assert_eq!(
            validate_custom_service(&json!("nope")),
            CustomServiceCategories::default()
        );
        assert_eq!(
            validate_custom_service(&Value::Null),
            CustomServiceCategories::default()
        );
        let cleaned = validate_custom_service(&json!({
            "OT": "not a list",
            "XYZ": [{ "name": "dropped", "value": 10 }],
            "APA": [{ "value": "12.5" }, { "name": 7 }]
        }));
        assert!(cleaned.ot.is_empty());
        assert_eq!(cleaned.apa.len(), 2);
        assert_eq!(cleaned.apa[0], CustomServiceItem { name: String::new(), value: 12.5 });
        assert_eq!(cleaned.apa[1], CustomServiceItem { name: "7".into(), value: 0.0 });
    }

    #[test]
    fn falsy_names_become_blank() {
        let cleaned = validate_custom_service(&json!({
            "SLD": [{ "name": 0, "value": 1 }, { "name": false }, { "name": "" }, { "name": 0.5 }]
        }));
        let names: Vec<&str> = cleaned.sld.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["", "", "", "0.5"]);
    }

    #[test]
    fn normalize_reapplies_item_rules() {
        let mut services = CustomServiceCategories::default();
        services.sld.push(CustomServiceItem {
            name: "z".repeat(45),
            value: -1.0,
        });
        let normalized = normalize_custom_service(services);
        assert_eq!(normalized.sld[0].name.len(), 40);
        assert_eq!(normalized.sld[0].value, 0.0);
    }
}

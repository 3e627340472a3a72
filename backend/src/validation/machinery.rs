//! # Machinery Validator
//!
//! Validates one category-specific machinery record against the schema
//! registered for a unit type, producing either a normalized copy of the
//! record or a list of field-level issues.
//!
//! Normalization mirrors the behavior of the original onboarding form
//! contract: unknown keys are dropped, numeric fields submitted as enum
//! strings ("30") are coerced to numbers, and an optional machine count
//! defaults to one machine when absent. All rule failures for a record are
//! gathered before returning; validation never stops at the first bad field.

use crate::schemas::{machinery_schema, FieldKind, FieldRule, MachinerySchema};
use common::model::unit_type::UnitType;
use common::model::validation::Issue;
use serde_json::{Map, Value};

/// Validates `record` against the schema registered for `unit`.
///
/// A category with no registered schema imposes no machinery constraints, so
/// the record passes through untouched.
pub fn validate_machinery(unit: UnitType, record: &Value) -> Result<Value, Vec<Issue>> {
    let Some(schema) = machinery_schema(unit) else {
        return Ok(record.clone());
    };

    let Some(object) = record.as_object() else {
        return Err(vec![Issue::new("", "machinery entry must be a JSON object")]);
    };

    match schema {
        MachinerySchema::Fields(rules) => apply_rules(rules, object, Map::new()),
        MachinerySchema::Discriminated { tag, variants } => {
            let tag_value = match object.get(*tag).and_then(Value::as_str) {
                Some(v) => v,
                None => {
                    return Err(vec![Issue::new(
                        *tag,
                        format!("must be one of: {}", schema.tag_values().join(", ")),
                    )]);
                }
            };
            let Some(variant) = variants.iter().find(|v| v.tags.contains(&tag_value)) else {
                return Err(vec![Issue::new(
                    *tag,
                    format!("must be one of: {}", schema.tag_values().join(", ")),
                )]);
            };
            // The discriminator itself is part of the normalized record.
            let mut seed = Map::new();
            seed.insert(tag.to_string(), Value::String(tag_value.to_string()));
            apply_rules(variant.fields, object, seed)
        }
    }
}

fn apply_rules(
    rules: &[FieldRule],
    object: &Map<String, Value>,
    mut normalized: Map<String, Value>,
) -> Result<Value, Vec<Issue>> {
    let mut issues = Vec::new();

    for rule in rules {
        match object.get(rule.name) {
            None | Some(Value::Null) => {
                if rule.required {
                    issues.push(Issue::new(rule.name, "is required"));
                } else if matches!(rule.kind, FieldKind::MachineCount) {
                    // Optional machine count implies a single machine.
                    normalized.insert(rule.name.to_string(), Value::from(1));
                }
            }
            Some(value) => match check_field(rule, value) {
                Ok(checked) => {
                    normalized.insert(rule.name.to_string(), checked);
                }
                Err(mut field_issues) => issues.append(&mut field_issues),
            },
        }
    }

    if issues.is_empty() {
        Ok(Value::Object(normalized))
    } else {
        Err(issues)
    }
}

fn check_field(rule: &FieldRule, value: &Value) -> Result<Value, Vec<Issue>> {
    match rule.kind {
        FieldKind::Text => match value.as_str() {
            Some(s) => Ok(Value::String(s.to_string())),
            None => Err(vec![Issue::new(rule.name, "must be a string")]),
        },
        FieldKind::Number => {
            if value.is_number() {
                Ok(value.clone())
            } else {
                Err(vec![Issue::new(rule.name, "must be a number")])
            }
        }
        FieldKind::Enum(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => Ok(value.clone()),
            _ => Err(vec![Issue::new(
                rule.name,
                format!("must be one of: {}", allowed.join(", ")),
            )]),
        },
        FieldKind::EnumArray(allowed) => {
            let Some(items) = value.as_array() else {
                return Err(vec![Issue::new(rule.name, "must be an array")]);
            };
            let mut issues = Vec::new();
            for (i, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(s) if allowed.contains(&s) => {}
                    _ => issues.push(Issue::new(
                        format!("{}[{}]", rule.name, i),
                        format!("must be one of: {}", allowed.join(", ")),
                    )),
                }
            }
            if issues.is_empty() {
                Ok(value.clone())
            } else {
                Err(issues)
            }
        }
        FieldKind::NumberOrEnum(allowed) => {
            coerce_number(value, allowed).map_err(|msg| vec![Issue::new(rule.name, msg)])
        }
        FieldKind::NumberOrEnumArray(allowed) => {
            let Some(items) = value.as_array() else {
                return Err(vec![Issue::new(rule.name, "must be an array")]);
            };
            let mut issues = Vec::new();
            let mut coerced = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match coerce_number(item, allowed) {
                    Ok(n) => coerced.push(n),
                    Err(msg) => issues.push(Issue::new(format!("{}[{}]", rule.name, i), msg)),
                }
            }
            if issues.is_empty() {
                Ok(Value::Array(coerced))
            } else {
                Err(issues)
            }
        }
        FieldKind::PositiveInt => match positive_int(value) {
            Some(n) => Ok(Value::from(n)),
            None => Err(vec![Issue::new(rule.name, "must be a positive integer")]),
        },
        FieldKind::MachineCount => match positive_int(value) {
            Some(n) => Ok(Value::from(n)),
            None => Err(vec![Issue::new(rule.name, "must be a positive integer")]),
        },
    }
}

/// A plain JSON number passes as-is; a string must be a member of the closed
/// set and is coerced to the number it spells.
fn coerce_number(value: &Value, allowed: &[&str]) -> Result<Value, String> {
    if value.is_number() {
        return Ok(value.clone());
    }
    if let Some(s) = value.as_str() {
        if allowed.contains(&s) {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Value::from(n));
            }
        }
        return Err(format!("must be a number or one of: {}", allowed.join(", ")));
    }
    Err(format!("must be a number or one of: {}", allowed.join(", ")))
}

fn positive_int(value: &Value) -> Option<i64> {
    let n = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })?;
    (n > 0).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn weaving_record_validates_and_normalizes() {
        let record = json!({
            "machineType": "Rapier Loom",
            "typeOfYarn": "Cotton",
            "noOfMachines": 3,
            "somethingElse": "dropped"
        });
        let normalized = validate_machinery(UnitType::WeavingUnit, &record).unwrap();
        assert_eq!(normalized["noOfMachines"], 3);
        assert_eq!(normalized["machineType"], "Rapier Loom");
        assert!(normalized.get("somethingElse").is_none());
    }

    #[test]
    fn negative_machine_count_is_rejected() {
        let record = json!({
            "machineType": "Rapier Loom",
            "typeOfYarn": "Cotton",
            "noOfMachines": -1
        });
        let issues = validate_machinery(UnitType::WeavingUnit, &record).unwrap_err();
        assert_eq!(paths(&issues), vec!["noOfMachines"]);
    }

    #[test]
    fn all_field_failures_are_reported_together() {
        let record = json!({
            "machineType": "Steam Loom",
            "typeOfYarn": "Wool",
            "noOfMachines": 0
        });
        let issues = validate_machinery(UnitType::WeavingUnit, &record).unwrap_err();
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn knitting_coerces_enum_strings_to_numbers() {
        let record = json!({
            "diameter": "30",
            "gauge": ["24", 28, "60"],
            "machineType": "Single Jersey",
            "machineCylinderTrack": 2,
            "takedownRollerType": "Tubular",
            "typeOfYarn": ["cotton"],
            "machineBrand": "Santoni",
            "noOfMachines": 5
        });
        let normalized = validate_machinery(UnitType::KnittingUnit, &record).unwrap();
        assert_eq!(normalized["diameter"], 30);
        assert_eq!(normalized["gauge"], json!([24, 28, 60]));
    }

    #[test]
    fn knitting_rejects_out_of_set_gauge_string() {
        let record = json!({
            "diameter": 30,
            "gauge": ["25"],
            "machineType": "Single Jersey",
            "machineCylinderTrack": 2,
            "takedownRollerType": "Tubular",
            "typeOfYarn": ["cotton"],
            "machineBrand": "Santoni",
            "noOfMachines": 5
        });
        let issues = validate_machinery(UnitType::KnittingUnit, &record).unwrap_err();
        assert_eq!(paths(&issues), vec!["gauge[0]"]);
    }

    #[test]
    fn dyeing_jigger_allows_missing_fabric_type() {
        let record = json!({
            "DyeingMachineType": "Jigger",
            "noOfMachines": 2
        });
        let normalized = validate_machinery(UnitType::DyeingUnit, &record).unwrap();
        assert_eq!(normalized["DyeingMachineType"], "Jigger");
    }

    #[test]
    fn dyeing_jet_requires_fabric_type() {
        let record = json!({
            "DyeingMachineType": "Jet",
            "noOfMachines": 2
        });
        let issues = validate_machinery(UnitType::DyeingUnit, &record).unwrap_err();
        assert_eq!(paths(&issues), vec!["typeOfFabric"]);
    }

    #[test]
    fn dyeing_rejects_unknown_discriminator() {
        let record = json!({
            "DyeingMachineType": "Microwave",
            "noOfMachines": 2
        });
        let issues = validate_machinery(UnitType::DyeingUnit, &record).unwrap_err();
        assert_eq!(paths(&issues), vec!["DyeingMachineType"]);
    }

    #[test]
    fn optional_machine_count_defaults_to_one() {
        let record = json!({ "machineType": "Band Knife" });
        let normalized = validate_machinery(UnitType::CuttingUnit, &record).unwrap();
        assert_eq!(normalized["noOfMachines"], 1);
    }

    #[test]
    fn empty_schema_accepts_anything_and_strips_it() {
        let record = json!({ "whatever": true });
        let normalized = validate_machinery(UnitType::CheckingUnit, &record).unwrap();
        assert_eq!(normalized, json!({}));
    }

    #[test]
    fn non_object_record_is_rejected() {
        let issues = validate_machinery(UnitType::WeavingUnit, &json!("loom")).unwrap_err();
        assert_eq!(issues.len(), 1);
    }
}

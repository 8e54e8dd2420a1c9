use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

use super::value::{OptionValue, OptionsTree};

impl OptionsTree {
    /// Builds a tree from a JSON object. Any other root shape is rejected.
    pub fn from_json_value(value: &Value) -> ChartResult<Self> {
        let Value::Object(fields) = value else {
            return Err(ChartError::NonObjectRoot {
                kind: json_kind(value),
            });
        };
        Ok(tree_from_object(fields))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidOptions(format!("failed to parse options json: {e}")))?;
        Self::from_json_value(&value)
    }

    /// Serializes the tree to a JSON object. Function values have no JSON
    /// representation and are dropped.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        Value::Object(object_from_tree(self))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.to_json_value()).map_err(|e| {
            ChartError::InvalidOptions(format!("failed to serialize options json: {e}"))
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn tree_from_object(fields: &Map<String, Value>) -> OptionsTree {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), value_from_json(value)))
        .collect()
}

fn value_from_json(value: &Value) -> OptionValue {
    match value {
        Value::Null => OptionValue::Null,
        Value::Bool(flag) => OptionValue::Bool(*flag),
        Value::Number(number) => OptionValue::Number(number.clone()),
        Value::String(text) => OptionValue::String(text.clone()),
        Value::Array(items) => OptionValue::Seq(items.iter().map(value_from_json).collect()),
        Value::Object(fields) => OptionValue::Tree(tree_from_object(fields)),
    }
}

fn object_from_tree(tree: &OptionsTree) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, value) in tree.iter() {
        if let Some(json) = value_to_json(value) {
            fields.insert(key.to_owned(), json);
        }
    }
    fields
}

fn value_to_json(value: &OptionValue) -> Option<Value> {
    match value {
        OptionValue::Null => Some(Value::Null),
        OptionValue::Bool(flag) => Some(Value::Bool(*flag)),
        OptionValue::Number(number) => Some(Value::Number(number.clone())),
        OptionValue::String(text) => Some(Value::String(text.clone())),
        OptionValue::Seq(items) => Some(Value::Array(
            items.iter().filter_map(value_to_json).collect(),
        )),
        OptionValue::Tree(tree) => Some(Value::Object(object_from_tree(tree))),
        OptionValue::LegendLabels(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{OptionValue, OptionsTree};
    use crate::core::types::{Dataset, LegendLabelEntry};
    use crate::error::ChartError;

    fn no_labels(_datasets: &[Dataset]) -> Vec<LegendLabelEntry> {
        Vec::new()
    }

    #[test]
    fn json_object_round_trips_through_tree() {
        let source = json!({
            "responsive": true,
            "scales": { "y": { "ticks": { "stepSize": 50 } } },
            "events": ["mousemove", "click"],
            "label": null
        });

        let tree = OptionsTree::from_json_value(&source).expect("parse tree");
        assert_eq!(tree.to_json_value(), source);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let error = OptionsTree::from_json_value(&json!([1, 2, 3]))
            .expect_err("array root must fail");
        assert!(matches!(error, ChartError::NonObjectRoot { kind: "an array" }));

        let error = OptionsTree::from_json_str("42").expect_err("number root must fail");
        assert!(matches!(error, ChartError::NonObjectRoot { kind: "a number" }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let error = OptionsTree::from_json_str("{ not json").expect_err("parse must fail");
        assert!(matches!(error, ChartError::InvalidOptions(_)));
    }

    #[test]
    fn function_values_are_dropped_on_serialization() {
        let tree = OptionsTree::new()
            .with("usePointStyle", true)
            .with("generateLabels", OptionValue::LegendLabels(no_labels));

        assert_eq!(tree.to_json_value(), json!({ "usePointStyle": true }));
    }

    #[test]
    fn integer_numbers_serialize_without_fraction() {
        let tree = OptionsTree::new().with("borderWidth", 1i64);
        let rendered = tree.to_json_pretty().expect("serialize");
        assert!(rendered.contains("\"borderWidth\": 1"));
        assert!(!rendered.contains("1.0"));
    }
}

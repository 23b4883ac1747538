//! Property-based tests for the JSON output layout.

#[cfg(test)]
mod proptest_tests {
    use crate::strategy::json::to_pretty_json;
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(|pairs| {
                    Value::Object(pairs.into_iter().collect::<Map<String, Value>>())
                }),
            ]
        })
    }

    proptest! {
        /// Property: written JSON parses back to the same value
        #[test]
        fn pretty_json_round_trips(value in json_value()) {
            let text = to_pretty_json(&value).unwrap();
            let parsed: Value = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(parsed, value);
        }

        /// Property: written JSON ends with exactly one newline
        #[test]
        fn pretty_json_has_single_trailing_newline(value in json_value()) {
            let text = to_pretty_json(&value).unwrap();
            prop_assert!(text.ends_with('\n'));
            prop_assert!(!text.ends_with("\n\n"));
        }

        /// Property: every line is indented by a multiple of four spaces
        #[test]
        fn pretty_json_indents_by_four(value in json_value()) {
            let text = to_pretty_json(&value).unwrap();
            for line in text.lines() {
                let indent = line.len() - line.trim_start_matches(' ').len();
                prop_assert_eq!(indent % 4, 0, "line {:?}", line);
            }
        }

        /// Property: serialization is deterministic
        #[test]
        fn pretty_json_is_deterministic(value in json_value()) {
            prop_assert_eq!(to_pretty_json(&value).unwrap(), to_pretty_json(&value).unwrap());
        }
    }
}

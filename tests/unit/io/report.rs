//! Tests for flat key-value reports

#[cfg(test)]
mod tests {
    use kolam::algorithm::kind::PatternKind;
    use kolam::analysis::classifier::classify;
    use kolam::io::report::{flatten, to_json};
    use serde_json::{Value, json};

    // Tests nested records flatten into dotted keys
    #[test]
    fn test_flatten_classification() {
        let record = classify(&[], 7, Some(PatternKind::Spiral));
        let report = flatten(&record).expect("Failed to flatten");

        assert_eq!(report.get("pattern_type"), Some(&json!("spiral")));
        assert_eq!(report.get("symmetry.radial"), Some(&Value::Bool(true)));
        assert_eq!(
            report.get("attributes.looped_traversal"),
            Some(&Value::Bool(false))
        );
        assert_eq!(
            report.get("repetition.description"),
            Some(&json!("Continuous spiral pattern"))
        );
        assert!(report.keys().all(|key| !key.is_empty()));
    }

    // Tests arrays stay whole and scalars get a key
    #[test]
    fn test_arrays_and_scalars() {
        let report = flatten(&json!({"list": [1, 2], "empty": {}})).expect("Failed to flatten");
        assert_eq!(report.get("list"), Some(&json!([1, 2])));
        assert_eq!(report.get("empty"), Some(&json!({})));

        let scalar = flatten(&5).expect("Failed to flatten");
        assert_eq!(scalar.get("value"), Some(&json!(5)));
    }

    // Tests the JSON rendering is a single-level object
    #[test]
    fn test_to_json() {
        let record = classify(&[], 7, Some(PatternKind::Basic));
        let text = to_json(&record).expect("Failed to render");
        let parsed: Value = serde_json::from_str(&text).expect("Failed to parse");

        let object = parsed.as_object().expect("Report should be an object");
        assert!(object.values().all(|value| !value.is_object()));
        assert_eq!(object.get("symmetry.diagonal"), Some(&Value::Bool(true)));
    }
}

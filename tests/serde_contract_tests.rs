use serde_json::json;
use tikzplot_rs::{SeriesSpec, StyleValue};

#[test]
fn series_spec_round_trips_through_json_preserving_option_order() {
    let spec = SeriesSpec::new("sigma", "callFD", "CallFD")
        .with_comment("Crank-Nicolson call price")
        .with_option("mark", "o")
        .with_option("thick", true)
        .with_option("mark size", "2pt");

    let encoded = serde_json::to_string(&spec).expect("encode");
    let decoded: SeriesSpec = serde_json::from_str(&encoded).expect("decode");

    assert_eq!(decoded, spec);
    let keys: Vec<&str> = decoded.options.keys().map(String::as_str).collect();
    assert_eq!(keys, ["mark", "thick", "mark size"]);
}

#[test]
fn style_values_use_untagged_json_forms() {
    let spec = SeriesSpec::new("x", "y", "L")
        .with_option("thick", true)
        .with_option("mark", "o");

    let encoded = serde_json::to_value(&spec).expect("encode");
    assert_eq!(encoded["options"]["thick"], json!(true));
    assert_eq!(encoded["options"]["mark"], json!("o"));
}

#[test]
fn flag_decodes_from_json_boolean() {
    let value: StyleValue = serde_json::from_value(json!(false)).expect("decode");
    assert_eq!(value, StyleValue::Flag(false));

    let value: StyleValue = serde_json::from_value(json!("2pt")).expect("decode");
    assert_eq!(value, StyleValue::Text("2pt".to_owned()));
}

#[test]
fn comment_is_omitted_from_json_when_absent() {
    let spec = SeriesSpec::new("x", "y", "L");
    let encoded = serde_json::to_value(&spec).expect("encode");
    assert!(encoded.get("comment").is_none());
    assert!(encoded.get("options").is_none());
}

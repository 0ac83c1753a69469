//! Tests for the serde shape of translation tables.

use phrasing::{PluralRange, TranslationTable, TranslationValue, Translator, context, rule_map};

const TABLE_JSON: &str = r#"{
    "values": {
        "Hello": "Hi",
        "%n comments": [[0, 0, "%n comments"], [1, 1, "%n comment"], [2, null, "%n comments"]],
        "%n results": {"one": "%n result", "other": "%n results"}
    },
    "contexts": [
        {
            "matches": {"gender": "female"},
            "values": {"%{name} updated their profile": "%{name} updated her profile"}
        }
    ]
}"#;

#[test]
fn deserializes_all_value_shapes() {
    let table: TranslationTable = serde_json::from_str(TABLE_JSON).unwrap();

    assert_eq!(table.get("Hello"), Some(&TranslationValue::from("Hi")));
    assert_eq!(
        table.get("%n comments").and_then(TranslationValue::as_ranges),
        Some(
            &[
                PluralRange::exactly(0, "%n comments"),
                PluralRange::exactly(1, "%n comment"),
                PluralRange::at_least(2, "%n comments"),
            ][..]
        )
    );
    assert_eq!(
        table.get("%n results").and_then(TranslationValue::as_rule_map),
        Some(&rule_map! { "one" => "%n result", "other" => "%n results" })
    );
    assert_eq!(table.contexts.len(), 1);
    assert_eq!(table.contexts[0].matches, context! { "gender" => "female" });
}

#[test]
fn missing_sections_default_to_empty() {
    let table: TranslationTable = serde_json::from_str("{}").unwrap();
    assert!(table.is_empty());

    let table: TranslationTable =
        serde_json::from_str(r#"{"contexts": [{"values": {"Hi": "Yo"}}]}"#).unwrap();
    assert!(table.values.is_empty());
    assert!(table.contexts[0].matches.is_empty());
}

#[test]
fn deserialized_table_resolves() {
    let table: TranslationTable = serde_json::from_str(TABLE_JSON).unwrap();
    let translator = Translator::with_table(table);
    assert_eq!(translator.translate_text("%n comments", Some(1), None, None), "1 comment");
    assert_eq!(translator.translate_text("%n comments", Some(12), None, None), "12 comments");
}

#[test]
fn ranges_serialize_as_triples() {
    let value = TranslationValue::from(vec![PluralRange::at_most(-2, "ago")]);
    insta::assert_snapshot!(serde_json::to_string(&value).unwrap(), @r#"[[null,-2,"ago"]]"#);
}

#[test]
fn rejects_unknown_value_shapes() {
    assert!(serde_json::from_str::<TranslationTable>(r#"{"values": {"Hi": 3}}"#).is_err());
    assert!(serde_json::from_str::<TranslationTable>(r#"{"values": {"Hi": [[1, 2]]}}"#).is_err());
}

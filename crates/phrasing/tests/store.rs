//! Tests for the translation store: loading, merging and resets.

use phrasing::{
    ContextPartition, TranslationStore, TranslationTable, TranslationValue, Translator, context,
};

fn partition(gender: &str, text: &str) -> ContextPartition {
    ContextPartition::builder()
        .matches(context! { "gender" => gender })
        .value("Welcome", text)
        .build()
}

#[test]
fn first_add_adopts_table() {
    let mut store = TranslationStore::new();
    assert!(store.table().is_none());

    let table = TranslationTable::builder().value("Hello", "Hi").build();
    store.add(table.clone());
    assert_eq!(store.table(), Some(&table));
}

#[test]
fn merge_overwrites_keys_and_appends_partitions() {
    let mut translator = Translator::with_table(
        TranslationTable::builder()
            .value("Hello", "Hi")
            .value("Bye", "See you")
            .context(partition("male", "Welcome, sir"))
            .build(),
    );
    translator.add(
        TranslationTable::builder()
            .value("Hello", "Hey")
            .context(partition("female", "Welcome, madam"))
            .context(partition("male", "Welcome, mister"))
            .build(),
    );

    let table = translator.table().unwrap();
    assert_eq!(table.get("Hello"), Some(&TranslationValue::from("Hey")));
    assert_eq!(table.get("Bye"), Some(&TranslationValue::from("See you")));
    assert_eq!(table.contexts.len(), 3);

    let male = context! { "gender" => "male" };
    let female = context! { "gender" => "female" };
    assert_eq!(translator.translate_text("Welcome", None, None, Some(&male)), "Welcome, sir");
    assert_eq!(
        translator.translate_text("Welcome", None, None, Some(&female)),
        "Welcome, madam"
    );
}

#[test]
fn add_optional_none_is_noop() {
    let mut store = TranslationStore::new();
    store.add_optional(None);
    assert!(store.table().is_none());
}

#[test]
fn global_context_set_and_clear() {
    let mut store = TranslationStore::new();
    store.set_context("gender", "female");
    store.set_context("region", "ca");
    store.set_context("gender", "male");
    assert_eq!(store.global_context(), &context! { "gender" => "male", "region" => "ca" });

    store.clear_context("gender");
    store.clear_context("missing");
    assert_eq!(store.global_context(), &context! { "region" => "ca" });
}

#[test]
fn resets_are_independent() {
    let mut translator = Translator::with_table(TranslationTable::builder().value("Hello", "Hi").build());
    translator.set_context("gender", "female");

    translator.reset_data();
    assert!(translator.table().is_none());
    assert_eq!(translator.global_context().len(), 1);
    assert_eq!(translator.translate_text("Hello", None, None, None), "Hello");

    translator.add(TranslationTable::builder().value("Hello", "Hallo").build());
    translator.reset_context();
    assert!(translator.global_context().is_empty());
    assert_eq!(translator.translate_text("Hello", None, None, None), "Hallo");

    translator.set_context("gender", "male");
    translator.reset();
    assert!(translator.table().is_none());
    assert!(translator.global_context().is_empty());
}

#[test]
fn add_after_reset_adopts_new_table() {
    let mut translator = Translator::with_table(
        TranslationTable::builder()
            .context(partition("male", "Welcome, sir"))
            .build(),
    );
    translator.reset_data();
    translator.add(TranslationTable::builder().value("Hello", "Hi").build());
    assert!(translator.table().unwrap().contexts.is_empty());
}

#[test]
fn builder_seeds_global_context() {
    let translator = Translator::builder()
        .table(
            TranslationTable::builder()
                .context(partition("female", "Welcome, madam"))
                .build(),
        )
        .global_context(context! { "gender" => "female" })
        .build();
    assert_eq!(translator.translate_text("Welcome", None, None, None), "Welcome, madam");
}

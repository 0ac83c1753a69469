//! Token substitution for quantities and named placeholders.

use crate::types::Placeholders;

/// Token replaced by the negated quantity.
const NEGATED_QUANTITY_TOKEN: &str = "-%n";

/// Token replaced by the quantity.
const QUANTITY_TOKEN: &str = "%n";

/// Opening of a `%{name}` placeholder token.
const PLACEHOLDER_OPEN: &str = "%{";

/// Closing of a `%{name}` placeholder token.
const PLACEHOLDER_CLOSE: char = '}';

/// Replace quantity tokens in `text`.
///
/// `-%n` becomes the negated quantity and `%n` the quantity itself. The
/// negated token is replaced first since it contains `%n`. With no quantity,
/// the text is returned unchanged.
///
/// # Example
///
/// ```
/// use phrasing::apply_quantity;
///
/// assert_eq!(apply_quantity("Due -%n days ago", Some(-3)), "Due 3 days ago");
/// assert_eq!(apply_quantity("%n comments", Some(2)), "2 comments");
/// assert_eq!(apply_quantity("%n comments", None), "%n comments");
/// ```
pub fn apply_quantity(text: &str, quantity: Option<i64>) -> String {
    let Some(n) = quantity else {
        return text.to_string();
    };
    text.replace(NEGATED_QUANTITY_TOKEN, &n.wrapping_neg().to_string())
        .replace(QUANTITY_TOKEN, &n.to_string())
}

/// Replace every `%{key}` token in `text` with the matching placeholder value.
///
/// Tokens without a matching placeholder are left as-is. Values are inserted
/// verbatim, so tokens inside a value are never expanded and the result does
/// not depend on the order of keys.
///
/// # Example
///
/// ```
/// use phrasing::{apply_placeholders, placeholders};
///
/// let names = placeholders! { "name" => "John" };
/// assert_eq!(apply_placeholders("Welcome %{name}", Some(&names)), "Welcome John");
/// assert_eq!(apply_placeholders("Welcome %{guest}", Some(&names)), "Welcome %{guest}");
/// ```
pub fn apply_placeholders(text: &str, placeholders: Option<&Placeholders>) -> String {
    let Some(placeholders) = placeholders.filter(|p| !p.is_empty()) else {
        return text.to_string();
    };

    // Single left-to-right pass: inserted values are never rescanned.
    let mut result = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + PLACEHOLDER_OPEN.len()..];
        let Some(end) = after_open.find(PLACEHOLDER_CLOSE) else {
            rest = &rest[start..];
            break;
        };
        match placeholders.get(&after_open[..end]) {
            Some(value) => {
                result.push_str(value);
                rest = &after_open[end + 1..];
            }
            None => {
                result.push_str(PLACEHOLDER_OPEN);
                rest = after_open;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Apply quantity then placeholder substitution to a template.
pub fn render(text: &str, quantity: Option<i64>, placeholders: Option<&Placeholders>) -> String {
    apply_placeholders(&apply_quantity(text, quantity), placeholders)
}

/// Render the phrase key itself, used whenever no translation applies.
pub fn original_text(
    phrase: &str,
    quantity: Option<i64>,
    placeholders: Option<&Placeholders>,
) -> String {
    render(phrase, quantity, placeholders)
}

#[cfg(test)]
mod tests {
    use super::{apply_placeholders, apply_quantity, render};
    use crate::placeholders;

    #[test]
    fn negated_token_is_replaced_before_plain_token() {
        assert_eq!(apply_quantity("-%n / %n", Some(5)), "-5 / 5");
        assert_eq!(apply_quantity("-%n / %n", Some(-5)), "5 / -5");
    }

    #[test]
    fn quantity_replaces_every_occurrence() {
        assert_eq!(apply_quantity("%n of %n", Some(7)), "7 of 7");
    }

    #[test]
    fn minimum_quantity_does_not_overflow() {
        assert_eq!(
            apply_quantity("-%n", Some(i64::MIN)),
            i64::MIN.to_string()
        );
    }

    #[test]
    fn placeholders_replace_all_keys() {
        let values = placeholders! { "name" => "Jane", "album" => "Hen's Night" };
        assert_eq!(
            apply_placeholders("%{name}: %{album} (%{name})", Some(&values)),
            "Jane: Hen's Night (Jane)"
        );
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        let forward = placeholders! { "a" => "%{b}", "b" => "X" };
        assert_eq!(apply_placeholders("[%{a}]", Some(&forward)), "[%{b}]");

        let backward = placeholders! { "a" => "X", "b" => "%{a}" };
        assert_eq!(apply_placeholders("[%{b}]", Some(&backward)), "[%{a}]");
    }

    #[test]
    fn unknown_and_unterminated_tokens_are_kept() {
        let values = placeholders! { "name" => "Jane" };
        assert_eq!(
            apply_placeholders("%{who} and %{name} at 100%{", Some(&values)),
            "%{who} and Jane at 100%{"
        );
        assert_eq!(apply_placeholders("%{name", Some(&values)), "%{name");
        assert_eq!(apply_placeholders("%{x %{name}", Some(&values)), "%{x Jane");
    }

    #[test]
    fn placeholder_values_are_not_substituted_quantities() {
        let values = placeholders! { "label" => "%n" };
        assert_eq!(render("%{label} items", Some(3), Some(&values)), "%n items");
    }
}

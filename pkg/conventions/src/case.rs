//! String-case utilities shared by the rule checks.

use convert_case::{Case, Casing};

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// Explicit words of `value` joined by single spaces. Runs of separators
/// and separators at either end produce no words.
fn normalize_separators(value: &str) -> String {
    value
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical kebab-case rendering, e.g. `thisIsAName` → `this-is-a-name`.
pub fn kebab_case(value: &str) -> String {
    normalize_separators(value).to_case(Case::Kebab)
}

/// Canonical camelCase rendering, e.g. `this-is-a-name` → `thisIsAName`.
pub fn camel_case(value: &str) -> String {
    normalize_separators(value).to_case(Case::Camel)
}

pub fn is_kebab_case(value: &str) -> bool {
    kebab_case(value) == value
}

pub fn is_camel_case(value: &str) -> bool {
    camel_case(value) == value
}

/// Split a camel/Pascal-case identifier before every uppercase letter and
/// lowercase the pieces: `thisIsA` → `["this", "is", "a"]`.
pub fn split_humps(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in value.chars() {
        if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Split a kebab-case identifier on `-` and lowercase the non-empty pieces.
pub fn split_dashes(value: &str) -> Vec<String> {
    value
        .split('-')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whether two identifiers name the same thing in either case convention:
/// equal once both are kebab-cased, or equal once both are camel-cased.
pub fn same_identifier(a: &str, b: &str) -> bool {
    kebab_case(a) == kebab_case(b) || camel_case(a) == camel_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("testName"), "test-name");
        assert_eq!(kebab_case("test-name"), "test-name");
        assert_eq!(kebab_case("BadTableName"), "bad-table-name");
        assert_eq!(kebab_case("test-name-bad_table_name"), "test-name-bad-table-name");
        assert_eq!(kebab_case("thisIsAWellNamedExample"), "this-is-a-well-named-example");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn test_stray_separators_are_not_words() {
        assert_eq!(kebab_case("-test-name-"), "test-name");
        assert_eq!(kebab_case("test--name"), "test-name");
        assert_eq!(kebab_case("test_-_name"), "test-name");
        assert_eq!(kebab_case("---"), "");
        assert_eq!(camel_case("--x--"), "x");
        assert_eq!(camel_case("__this__is_a__"), "thisIsA");

        assert!(!is_kebab_case("-test-name-"));
        assert!(!is_kebab_case("test--name"));
        assert!(!is_kebab_case("test-name-"));
        assert!(!is_camel_case("-thisIsA"));
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("this-is-a-well-named-example"), "thisIsAWellNamedExample");
        assert_eq!(camel_case("ThisIsABadlyNamedFunction"), "thisIsABadlyNamedFunction");
        assert_eq!(camel_case("thisIsAWellNamedFunction"), "thisIsAWellNamedFunction");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_canonical_forms_are_idempotent() {
        for value in [
            "testName",
            "test-service",
            "ThisIsABadlyNamedFunction",
            "this-is-a-well-named-example",
            "Bad_table_name",
            "thisIsAWellNamedFunction",
            "",
        ] {
            let kebab = kebab_case(value);
            assert_eq!(kebab_case(&kebab), kebab, "kebab of {value:?}");
            let camel = camel_case(value);
            assert_eq!(camel_case(&camel), camel, "camel of {value:?}");
        }
    }

    #[test]
    fn test_predicates() {
        assert!(is_kebab_case("test-name"));
        assert!(!is_kebab_case("testName"));
        assert!(is_camel_case("thisIsAWellNamedExample"));
        assert!(!is_camel_case("ThisIsABadlyNamedFunction"));
        assert!(!is_camel_case("this-is-a-badly-named-example"));
    }

    #[test]
    fn test_split_humps() {
        assert_eq!(split_humps("thisIsAName"), vec!["this", "is", "a", "name"]);
        assert_eq!(split_humps("ThisIs"), vec!["this", "is"]);
        assert_eq!(split_humps("name"), vec!["name"]);
        assert!(split_humps("").is_empty());
    }

    #[test]
    fn test_split_dashes() {
        assert_eq!(split_dashes("this-is-a-name"), vec!["this", "is", "a", "name"]);
        assert_eq!(split_dashes("This-Is"), vec!["this", "is"]);
        assert_eq!(split_dashes("-this--is-"), vec!["this", "is"]);
        assert!(split_dashes("").is_empty());
    }

    #[test]
    fn test_tokenizers_agree_on_matching_names() {
        assert_eq!(
            split_humps("thisIsAWellNamedExample"),
            split_dashes("this-is-a-well-named-example")
        );
    }

    #[test]
    fn test_same_identifier() {
        assert!(same_identifier("thisIsAWellNamedExample", "this-is-a-well-named-example"));
        assert!(same_identifier("thisIsAWellNamedExample", "thisIsAWellNamedExample"));
        assert!(!same_identifier("thisIsABadlyNamedFunction", "this-is-a-badly-named-example"));
    }

    fn arb_identifier() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{0,24}"
    }

    proptest! {
        #[test]
        fn prop_kebab_case_is_idempotent(value in arb_identifier()) {
            let kebab = kebab_case(&value);
            prop_assert_eq!(kebab_case(&kebab), kebab.clone());
            prop_assert!(is_kebab_case(&kebab));
        }

        #[test]
        fn prop_camel_case_is_idempotent(value in arb_identifier()) {
            let camel = camel_case(&value);
            prop_assert_eq!(camel_case(&camel), camel.clone());
            prop_assert!(is_camel_case(&camel));
        }

        #[test]
        fn prop_kebab_case_has_no_empty_words(value in arb_identifier()) {
            let kebab = kebab_case(&value);
            prop_assert!(!kebab.starts_with('-'), "{:?} -> {:?}", value, kebab);
            prop_assert!(!kebab.ends_with('-'), "{:?} -> {:?}", value, kebab);
            prop_assert!(!kebab.contains("--"), "{:?} -> {:?}", value, kebab);
        }
    }
}

use pkg_constants::naming::{HANDLER_PATH_SEPARATOR, HANDLER_SUFFIX, NAME_SEPARATOR};
use pkg_types::descriptor::FunctionDescriptor;

use crate::case::{is_camel_case, is_kebab_case, same_identifier};

/// Final path segment of a handler reference.
pub fn handler_file_name(handler: &str) -> &str {
    handler
        .rsplit(HANDLER_PATH_SEPARATOR)
        .next()
        .unwrap_or(handler)
}

/// Handler file name with the `.handler` suffix removed, when present.
pub fn handler_base(handler: &str) -> &str {
    let file_name = handler_file_name(handler);
    file_name.strip_suffix(HANDLER_SUFFIX).unwrap_or(file_name)
}

/// Derive a function's logical name from its qualified name.
///
/// The exact `service-stage-` prefix is stripped when present. Otherwise the
/// text after the first `stage-` is used, and failing that the whole
/// qualified name.
pub fn logical_name<'a>(qualified_name: &'a str, service: &str, stage: &str) -> &'a str {
    let default_prefix = format!("{service}{NAME_SEPARATOR}{stage}{NAME_SEPARATOR}");
    if let Some(rest) = qualified_name.strip_prefix(&default_prefix) {
        return rest;
    }

    let stage_prefix = format!("{stage}{NAME_SEPARATOR}");
    match qualified_name.find(&stage_prefix) {
        Some(idx) => &qualified_name[idx + stage_prefix.len()..],
        None => qualified_name,
    }
}

/// Handler file names are kebab-case and end in `.handler`.
pub fn check_handler_name(handler: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let file_name = handler_file_name(handler);
    let base = handler_base(handler);

    if !is_kebab_case(base) {
        errors.push(format!("Handler \"{handler}\" is not kebab case"));
    }
    if base == file_name {
        errors.push(format!(
            "Handler \"{handler}\" does not end in \"{HANDLER_SUFFIX}\""
        ));
    }

    errors
}

/// Function names are camelCase and deployed under the default
/// `service-stage-function` name.
pub fn check_function_name(function: &FunctionDescriptor, service: &str, stage: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let logical = logical_name(&function.qualified_name, service, stage);

    if !is_camel_case(logical) {
        errors.push(format!("Function \"{logical}\" is not camel case"));
    }

    let expected = [service, stage, logical].join(NAME_SEPARATOR);
    if function.qualified_name != expected {
        errors.push(format!(
            "Function \"{}\" has a custom name, expected the default name \"{expected}\"",
            function.qualified_name
        ));
    }

    errors
}

/// A function's logical name and its handler file name are the same
/// identifier in camelCase and kebab-case respectively.
pub fn check_handler_matches_function(
    function: &FunctionDescriptor,
    handler: &str,
    service: &str,
    stage: &str,
) -> Vec<String> {
    let logical = logical_name(&function.qualified_name, service, stage);
    let base = handler_base(handler);

    if same_identifier(logical, base) {
        return Vec::new();
    }
    vec![format!(
        "Function \"{logical}\" does not match handler name \"{base}{HANDLER_SUFFIX}\""
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: &str = "test-name";
    const STAGE: &str = "tst";

    fn make_function(logical: &str, handler: &str) -> FunctionDescriptor {
        FunctionDescriptor::new(
            logical,
            &format!("{SERVICE}-{STAGE}-{logical}"),
            Some(handler),
        )
    }

    #[test]
    fn test_handler_parts() {
        assert_eq!(handler_file_name("src/a/b-c.handler"), "b-c.handler");
        assert_eq!(handler_file_name("b-c.handler"), "b-c.handler");
        assert_eq!(handler_base("src/a/b-c.handler"), "b-c");
        assert_eq!(handler_base("src/a/b-c"), "b-c");
        assert_eq!(handler_base(""), "");
    }

    #[test]
    fn test_logical_name_strips_default_prefix() {
        assert_eq!(
            logical_name("test-name-tst-thisIsAName", SERVICE, STAGE),
            "thisIsAName"
        );
    }

    #[test]
    fn test_logical_name_falls_back_to_stage_prefix() {
        assert_eq!(logical_name("other-tst-thisIsAName", SERVICE, STAGE), "thisIsAName");
    }

    #[test]
    fn test_logical_name_falls_back_to_whole_name() {
        assert_eq!(
            logical_name("ThisIsABadlyNamedFunction", SERVICE, STAGE),
            "ThisIsABadlyNamedFunction"
        );
        // The whole name is then checked, so a manual PascalCase name fails
        // both function-name rules.
        let function = FunctionDescriptor::new(
            "fn",
            "ThisIsABadlyNamedFunction",
            Some("src/this-is-a-badly-named-function.handler"),
        );
        let errors = check_function_name(&function, SERVICE, STAGE);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("is not camel case"));
        assert!(errors[1].contains("has a custom name"));
    }

    #[test]
    fn test_valid_handler_name() {
        assert!(check_handler_name("src/this-is-a-well-named-example.handler").is_empty());
        assert!(check_handler_name("path/to/name.handler").is_empty());
    }

    #[test]
    fn test_handler_not_kebab_case() {
        for handler in [
            "src/This-is-a-badly-named-example.handler",
            "src/thisIsABadlyNamedExample.handler",
        ] {
            let errors = check_handler_name(handler);
            assert_eq!(errors.len(), 1, "{handler}");
            assert!(errors[0].contains("is not kebab case"));
        }
    }

    #[test]
    fn test_handler_missing_suffix() {
        let errors = check_handler_name("this-is-a-badly-named-example");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("does not end in \".handler\""));
    }

    #[test]
    fn test_handler_missing_suffix_and_not_kebab_case() {
        let errors = check_handler_name("This-is-a-badly-named-example");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("is not kebab case"));
        assert!(errors[1].contains("does not end in \".handler\""));
    }

    #[test]
    fn test_valid_function_name() {
        let function = make_function(
            "thisIsAWellNamedExample",
            "src/this-is-a-well-named-example.handler",
        );
        assert!(check_function_name(&function, SERVICE, STAGE).is_empty());
    }

    #[test]
    fn test_function_not_camel_case() {
        for logical in ["this-is-a-badly-named-example", "ThisIsABadlyNamedFunction"] {
            let function = make_function(logical, "src/this-is-a-badly-named-example.handler");
            let errors = check_function_name(&function, SERVICE, STAGE);
            assert_eq!(errors.len(), 1, "{logical}");
            assert!(errors[0].contains("is not camel case"));
        }
    }

    #[test]
    fn test_function_with_custom_name() {
        let function = FunctionDescriptor::new(
            "thisIsAName",
            "other-name-tst-thisIsAName",
            Some("src/this-is-a-name.handler"),
        );
        let errors = check_function_name(&function, SERVICE, STAGE);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("expected the default name \"test-name-tst-thisIsAName\""));
    }

    #[test]
    fn test_handler_matches_function() {
        for handler in [
            "src/this-is-a-well-named-example.handler",
            "this-is-a-well-named-example.handler",
            "this-is-a-well-named-example",
        ] {
            let function = make_function("thisIsAWellNamedExample", handler);
            assert!(
                check_handler_matches_function(&function, handler, SERVICE, STAGE).is_empty(),
                "{handler}"
            );
        }
    }

    #[test]
    fn test_handler_does_not_match_function() {
        for handler in [
            "src/this-is-a-badly-named-example.handler",
            "this-is-a-badly-named-example.handler",
            "this-is-a-badly-named-example",
        ] {
            let function = make_function("thisIsABadlyNamedFunction", handler);
            let errors = check_handler_matches_function(&function, handler, SERVICE, STAGE);
            assert_eq!(errors.len(), 1, "{handler}");
            assert!(errors[0].contains("does not match handler name"));
        }
    }
}

/// First run of ASCII digits in `value`, e.g. `14` in `nodejs14.x`.
pub fn first_digit_run(value: &str) -> Option<&str> {
    value
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| !run.is_empty())
}

/// The provider runtime and the bundler target embed the same major version.
pub fn check_build_target(provider_runtime: &str, bundler_target: &str) -> Vec<String> {
    if first_digit_run(provider_runtime) == first_digit_run(bundler_target) {
        return Vec::new();
    }
    vec![format!(
        "Provider runtime \"{provider_runtime}\" does not match esbuild node version \"{bundler_target}\""
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_digit_run() {
        assert_eq!(first_digit_run("nodejs14.x"), Some("14"));
        assert_eq!(first_digit_run("node18"), Some("18"));
        assert_eq!(first_digit_run("v20.1"), Some("20"));
        assert_eq!(first_digit_run("node"), None);
    }

    #[test]
    fn test_same_node_version() {
        assert!(check_build_target("nodejs14.x", "node14").is_empty());
    }

    #[test]
    fn test_different_node_versions() {
        let errors = check_build_target("nodejs14.x", "node12");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("does not match esbuild node version"));
    }

    #[test]
    fn test_versions_compare_as_strings() {
        assert_eq!(check_build_target("nodejs14.x", "node014").len(), 1);
        assert_eq!(check_build_target("nodejs18.x", "node").len(), 1);
    }
}

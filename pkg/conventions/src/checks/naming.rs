use pkg_constants::naming::{FORBIDDEN_SERVICE_WORD, MAX_SERVICE_NAME_LEN, STAGE_NAME_LEN};

use crate::case::is_kebab_case;

/// Service names are kebab-case, never mention "service", and fit in 23
/// characters.
pub fn check_service_name(name: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !is_kebab_case(name) {
        errors.push(format!("Service name \"{name}\" is not kebab case"));
    }
    if name.to_lowercase().contains(FORBIDDEN_SERVICE_WORD) {
        errors.push(format!(
            "Service name \"{name}\" should not include the word \"{FORBIDDEN_SERVICE_WORD}\""
        ));
    }
    if name.chars().count() > MAX_SERVICE_NAME_LEN {
        errors.push(format!(
            "Service name \"{name}\" must be less than {MAX_SERVICE_NAME_LEN} characters"
        ));
    }

    errors
}

/// Stage names are exactly three lowercase letters.
pub fn check_stage_name(stage: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if !stage.chars().all(|c| c.is_ascii_lowercase()) {
        errors.push(format!(
            "Stage name \"{stage}\" must only contain alphabet characters in lower case"
        ));
    }
    if stage.chars().count() != STAGE_NAME_LEN {
        errors.push(format!(
            "Stage name \"{stage}\" must be {STAGE_NAME_LEN} characters long"
        ));
    }

    errors
}

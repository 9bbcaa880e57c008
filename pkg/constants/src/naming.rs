//! Naming-convention limits and literals.

/// Maximum length of a service name.
pub const MAX_SERVICE_NAME_LEN: usize = 23;

/// Exact length of a stage name.
pub const STAGE_NAME_LEN: usize = 3;

/// Word a service name must not contain (case-insensitive).
pub const FORBIDDEN_SERVICE_WORD: &str = "service";

/// Suffix every handler reference ends with.
pub const HANDLER_SUFFIX: &str = ".handler";

/// Separator between path segments of a handler reference.
pub const HANDLER_PATH_SEPARATOR: char = '/';

/// Separator joining service, stage and function into a qualified name.
pub const NAME_SEPARATOR: &str = "-";

//! Host lifecycle event names.

/// Fired by the host right before function templates are compiled.
pub const BEFORE_COMPILE_FUNCTIONS: &str = "before:package:compileFunctions";

/// Fired by the host when the on-demand command is invoked.
pub const CONVENTIONS_COMMAND: &str = "conventions:conventions";

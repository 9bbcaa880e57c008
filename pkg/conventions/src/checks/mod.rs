//! Rule checks. Every check is a pure function returning its violation
//! messages in a fixed order; an empty list means the input passed. Checks on
//! the same input never short-circuit each other.

pub mod function;
pub mod naming;
pub mod resource;
pub mod runtime;

pub use function::{check_function_name, check_handler_matches_function, check_handler_name};
pub use naming::{check_service_name, check_stage_name};
pub use resource::{check_parameter_name, check_table_name};
pub use runtime::check_build_target;

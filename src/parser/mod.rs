pub mod script_parser;

pub use script_parser::ScriptParser;
pub use script_parser::ParseOutput;
pub use script_parser::{is_script_format, is_script_format_with_threshold};

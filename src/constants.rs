// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines crate-wide constants used throughout the codebase.
// - TIMESTAMP_FORMAT: chrono pattern for the leading `[YYYY-MM-DD HH:MM:SS]`
// - ANSI_RESET: escape that ends every painted line
// - TYPE_NAME: how the logger refers to itself in error and display text
// - FIELD_*: keys accepted by attribute-style lookup

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const ANSI_RESET: &str = "\x1b[0m";

pub const TYPE_NAME: &str = "Logger";

pub const FIELD_NAME: &str = "name";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_COLORIZATION: &str = "colorization";
pub const FIELD_POLICY: &str = "policy";

pub const FIELDS: [&str; 4] = [FIELD_NAME, FIELD_LEVEL, FIELD_COLORIZATION, FIELD_POLICY];

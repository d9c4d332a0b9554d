// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                 TINTLOG                                      ║
// ║                     Named, Leveled, Colored Console Logs                     ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// A small logger you hold by value: give it a name and a minimum level, then
// call `info`, `warning`, `error`... Each call prints one line to stdout:
//
//   [2025-07-08 14:02:11] [Demo] [WARNING]: disk almost full
//
// painted in the level's color and followed by an ANSI reset.
//
// 🎚️ LEVELS
// ---------
//   SILENT(0) < DEBUG(10) < INFO(20) < WARNING(30) < ERROR(40) < CRITICAL(50)
//
// `log(message, level, false)` drops anything below the minimum level. The
// per-level helpers print unconditionally unless the logger is switched to
// `Policy::Filtered`.
//
// 🎨 COLORS
// ---------
// Each level has a default color; a logger can override any of them. `colored`
// takes care of NO_COLOR, CLICOLOR_FORCE and non-terminal output.
//
// 📜 LICENSE: MIT
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod constants;
pub mod error;
pub mod extras;
pub mod level;
pub mod logger;
pub mod sink;

pub use colored::Color;
pub use error::{LoggerError, Result};
pub use extras::Extras;
pub use level::{parse_color, Level};
pub use logger::{Field, Logger, Policy};
pub use sink::{ConsoleSink, Line, LineSink, MemorySink};

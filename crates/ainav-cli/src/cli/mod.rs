//! # CLI Behavior
//!
//! This is **one possible UI client** for ainav. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`ainav`)
//!
//! Running `ainav` with no subcommand lists tools, exactly like `ainav list`. The
//! listing flags work on the bare command too: `ainav -c image -s text-to-image`.
//!
//! ### Browsing vs. Lookups
//!
//! Browsing (`list`, `news`) never fails on an unknown category: it shows an empty
//! page. Lookups by id (`show`, `fav`, `read`) fail with exit code 1.
//!
//! ### Search History
//!
//! `ainav -q <text>` records the search in the recent searches kept in
//! `<home>/prefs.json`; `ainav history` shows them.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Terminal output (headings, rows, page strip, category tree)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;

//! # Ainav CLI
//!
//! The `ainav` binary is a thin terminal client over the `ainav` library. This file
//! only invokes `cli::run()` and turns an error into exit code 1; everything else lives
//! in `src/cli/`.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/ainav-cli/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with colored (render.rs)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/ainav/src/api.rs)                        │
//! │  - Turns raw arguments into selectors                       │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument parsing,
//! logging setup, rendering, `--json` output and exit codes.
//!
//! ## Testing Approach
//!
//! Business logic is unit tested in the library. This crate has end-to-end tests in
//! `tests/` that run the real binary against a temporary `AINAV_HOME`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! # CLI Behavior
//!
//! This is **one possible UI client** for addrbook. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`addrbook`)
//!
//! Running `addrbook` with no subcommand starts the prompt loop:
//!
//! ```text
//! How can I help you? Type <help> if you need help.
//! Enter command: add Ann +380501111111 07.03.1990
//! Added <Ann> with phone <+380501111111>. Birthday: 07.03.1990
//! Enter command: exit
//! Good bye
//! ```
//!
//! The loop ends on `exit` (or `close`, `good bye`) and at end of input, so
//! piping a script into it works. Mistakes in a line are reported and the
//! loop goes on; storage failures end it with a non-zero exit code.
//!
//! ## One-shot (`addrbook run <line...>`)
//!
//! Runs a single command line, e.g. `addrbook run show all 5`. Here an input
//! mistake is an error exit.
//!
//! ## Module Structure
//!
//! - `commands`: `run()`, context wiring, per-subcommand handlers, the prompt loop
//! - `print`: colored output of command messages
//! - `setup`: argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;

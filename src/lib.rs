//! Octocard is a terminal viewer for GitHub user profile cards.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the card state, endpoint derivation, the load flow
//!   (minimum-delay timer followed by the profile fetch), configuration,
//!   and the error taxonomy.
//! - [`api`] defines the profile payload and the HTTP call that fetches it.
//! - [`ui`] renders the full-screen terminal interface and runs the event
//!   loop that drives the loading indicator and the card reveal.
//! - [`cli`] parses command-line arguments and dispatches either into the
//!   terminal interface or the TUI-less `--plain` path.
//!
//! The runtime entrypoint lives in the binary crate (`src/main.rs`) and
//! routes through [`cli::run`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;

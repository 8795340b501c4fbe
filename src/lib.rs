//! Mpmp is a Command Line Interface (CLI) of solvers for [Matt Parker's Maths
//! Puzzles](https://www.think-maths.co.uk/maths-puzzles), one subcommand per
//! puzzle.
//!
//! The solvers cover puzzles 2 through 7: the steam-train fuel problem,
//! counting 46-point Scrabble hands, the card-flipping guarantee, triangular
//! coin solitaire, the million-pound bank balance, and unique distancing on a
//! square grid. Each subcommand prints the puzzle's classic presentation by
//! default and a JSON document with `--format=json`.
//!
//! # Installation
//!
//! If you have [Rust installed](https://rustup.rs/), you can install mpmp
//! with:
//!
//! ```shell
//! cargo install --path .
//! ```
//!
//! Rust 1.46 or newer is required (2018 edition).
//!
//! # Usage
//!
//! View CLI help with `mpmp help` or `mpmp help <subcommand>`.
//!
//! ## Configuration
//!
//! All arguments have built-in defaults (the numbers from the original
//! puzzles), so no configuration is needed to get started. To change the
//! defaults, either:
//!
//! - Place a configuration file at `~/.config/mpmp/mpmp.toml`
//! - Use the `--config path/to/mpmp.toml` flag
//!
//! Any subset of the configuration may be given:
//!
//! ```toml
//! [output]
//! format = "text"
//!
//! [train]
//! tank_capacity = 500.0
//! distance = 800.0
//!
//! [scrabble]
//! hand_size = 7
//! target_value = 46
//!
//! [cards]
//! cards = 4
//! up_or_down = false
//!
//! [coins]
//! rows = 4
//! ignore_symmetry = false
//!
//! [balance]
//! target = 1000000
//!
//! [distance]
//! grid_size = 6
//! ```
//!
//! Environment variables override the file, e.g.
//! `MPMP__TRAIN__TANK_CAPACITY=750` (note the double underscores between
//! levels). Command-line arguments override both.
//!
//! ## Commands
//!
//! ```mpmp config```
//!
//! Echoes current config (with any overrides applied) and exits.
//!
//! <br>
//!
//! ---
//!
//! ```mpmp train [-t capacity] [distance]```
//!
//! Minimum fuel for a steam train to cross a desert wider than its tank,
//! dropping fuel along the track to pick up on later passes.
//!
//! <br>
//!
//! ---
//!
//! ```mpmp scrabble [-s hand_size] [--slow] [value]```
//!
//! How many distinct Scrabble hands total exactly `value` points. `--slow`
//! uses the brute-force count over letter multisets instead of the grouped
//! fast count; both give the same answer.
//!
//! <br>
//!
//! ---
//!
//! ```mpmp cards [--up-or-down] [cards]```
//!
//! The Gray-code flip sequence that guarantees all cards pass through face
//! down, shown as a table of states, and whether it covers every starting
//! orientation. With `--up-or-down`, all face up counts as a win too and one
//! fewer flip bit is needed.
//!
//! <br>
//!
//! ---
//!
//! ```mpmp coins [-i] [-s start] [rows]```
//!
//! Every way to reduce the triangular coin board to a single coin,
//! shortest solutions first. `-i` skips symmetric opening removals; `-s`
//! fixes the opening removal to one cell.
//!
//! <br>
//!
//! ---
//!
//! ```mpmp balance [target]```
//!
//! The two opening deposits whose Fibonacci growth lands exactly on the
//! target balance as late as possible, and the day-by-day table.
//!
//! <br>
//!
//! ---
//!
//! ```mpmp distance [n]```
//!
//! All ways (up to symmetry) to place n counters on an n×n grid with every
//! pairwise distance different.
//!
//! ## Examples
//!
//! ```shell
//! # The classic puzzle: 800 miles with a 500-mile tank.
//! mpmp train
//!
//! # A 1000-mile crossing with the same tank.
//! mpmp train 1000
//!
//! # How many 7-tile hands score exactly 46?
//! mpmp scrabble
//!
//! # ...and how many 5-tile hands score 24, double-checked the slow way?
//! mpmp scrabble --slow -s 5 24
//!
//! # The 15-flip sequence for four cards.
//! mpmp cards
//!
//! # All 84 coin-solitaire solutions, or just the 14 up-to-symmetry ones.
//! mpmp coins
//! mpmp coins -i
//!
//! # Reach exactly a million pounds.
//! mpmp balance
//!
//! # The two essentially different 6-counter placements.
//! mpmp distance
//!
//! # Any result as JSON.
//! mpmp --format=json balance 100
//! ```

#[cfg(not(debug_assertions))]
use human_panic::setup_panic;

mod app_config;
mod cli;
mod core;

pub use crate::core::puzzles;

use anyhow::Result;

#[doc(hidden)]
/// Main entrypoint
pub fn run() -> Result<()> {
    // Human Panic. Only enabled when *not* debugging.
    #[cfg(not(debug_assertions))]
    {
        setup_panic!();
    }

    // Better Panic. Only enabled *when* debugging.
    #[cfg(debug_assertions)]
    {
        better_panic::Settings::debug()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .install();
    }

    // Setup Logging
    env_logger::init();

    // Get CLI arguments and flags (one may have provided the config file to use)
    let cli_matches = cli::cli_config()?;

    let mut settings = config::Config::default();
    // Use cmdline arg config file if provided, otherwise fall back to the
    // default ~/.config/... path, which doesn't have to exist.
    if let Some(config_file) = cli_matches.value_of("config") {
        settings.merge(config::File::with_name(config_file))?;
    } else {
        settings.merge(
            config::File::with_name(&shellexpand::tilde("~/.config/mpmp/mpmp.toml"))
                .required(false),
        )?;
    }

    // Override with environment variables, if present
    // Example of overriding: MPMP__BALANCE__TARGET=144
    // (Note double underscore to reach into lower struct levels!)
    settings.merge(config::Environment::with_prefix("MPMP_").separator("__"))?;

    // Match against CLI subcommands, which delegate to functions
    cli::cli_match(settings, cli_matches)
}

use std::fmt::Display;
use std::str::FromStr;

use anyhow::Result;
use clap::{crate_description, crate_version};
use clap::{App, AppSettings, Arg};
use strum::VariantNames;

use crate::app_config::{CompleteAppConfig, OutputFormatChoices};
use crate::core::commands;

/// Match commands
pub fn cli_match(config: config::Config, cli_matches: clap::ArgMatches) -> Result<()> {
    // Handle config subcommand first, because it doesn't need any valid
    // configuration, and is helpful for debugging bad config!
    if let Some(("config", _config_matches)) = cli_matches.subcommand() {
        commands::print_config(config)?;
        return Ok(());
    }

    // Everything else resolves arguments against the merged configuration.
    let app_config: CompleteAppConfig = config.try_into()?;
    let format = arg_opt(&cli_matches, "format").unwrap_or(app_config.output.format);

    match cli_matches.subcommand() {
        Some(("train", train_matches)) => {
            let capacity = arg_or(train_matches, "tank", app_config.train.tank_capacity);
            let distance = arg_or(train_matches, "distance", app_config.train.distance);
            commands::train(distance, capacity, format)?;
        }
        Some(("scrabble", scrabble_matches)) => {
            let hand_size = arg_or(scrabble_matches, "hand_size", app_config.scrabble.hand_size);
            let value = arg_or(scrabble_matches, "value", app_config.scrabble.target_value);
            let slow = scrabble_matches.is_present("slow");
            commands::scrabble(value, hand_size, slow, format)?;
        }
        Some(("cards", cards_matches)) => {
            let cards = arg_or(cards_matches, "cards", app_config.cards.cards);
            let up_or_down =
                cards_matches.is_present("up_or_down") || app_config.cards.up_or_down;
            commands::cards(cards, up_or_down, format)?;
        }
        Some(("coins", coins_matches)) => {
            let rows = arg_or(coins_matches, "rows", app_config.coins.rows);
            let ignore_symmetry =
                coins_matches.is_present("ignore_symmetry") || app_config.coins.ignore_symmetry;
            let start = arg_opt(coins_matches, "start");
            commands::coins(rows, start, ignore_symmetry, format)?;
        }
        Some(("balance", balance_matches)) => {
            let target = arg_or(balance_matches, "target", app_config.balance.target);
            commands::balance(target, format)?;
        }
        Some(("distance", distance_matches)) => {
            let grid_size = arg_or(distance_matches, "n", app_config.distance.grid_size);
            commands::distance(grid_size, format)?;
        }
        _ => {
            // Clap rejects a missing subcommand (SubcommandRequiredElseHelp).
            // This section should never execute.
            unreachable!("No matching subcommand!");
        }
    }
    Ok(())
}

/// A CLI argument if it was given, exiting clap-style if it doesn't parse.
fn arg_opt<T>(matches: &clap::ArgMatches, name: &str) -> Option<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    match matches.value_of_t::<T>(name) {
        Ok(value) => Some(value),
        Err(e) if e.kind == clap::ErrorKind::ArgumentNotFound => None,
        Err(e) => e.exit(),
    }
}

/// A CLI argument with a configured fallback.
fn arg_or<T>(matches: &clap::ArgMatches, name: &str, fallback: T) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    arg_opt(matches, name).unwrap_or(fallback)
}

/// Configure Clap
/// This function will configure clap and match arguments
pub fn cli_config() -> Result<clap::ArgMatches> {
    let cli_app = App::new("mpmp")
        .setting(AppSettings::ArgRequiredElseHelp)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .about("Set a custom config file")
                .takes_value(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .about("Print results in this format")
                .possible_values(OutputFormatChoices::VARIANTS)
                .takes_value(true),
        )
        .subcommand(
            App::new("train")
                .about("Minimum fuel for the steam train's desert crossing")
                .arg(
                    Arg::new("tank")
                        .short('t')
                        .long("tank")
                        .value_name("CAPACITY")
                        .about("Fuel tank capacity")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("distance")
                        .about("Distance to travel")
                        .takes_value(true),
                ),
        )
        .subcommand(
            App::new("scrabble")
                .about("Count Scrabble hands with an exact point total")
                .arg(
                    Arg::new("hand_size")
                        .short('s')
                        .long("hand-size")
                        .value_name("N")
                        .about("Number of tiles in the hand")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("slow")
                        .long("slow")
                        .about("Use the brute-force count over letter multisets"),
                )
                .arg(
                    Arg::new("value")
                        .about("Target hand point value")
                        .takes_value(true),
                ),
        )
        .subcommand(
            App::new("cards")
                .about("Flip sequence guaranteed to pass through all cards face down")
                .arg(
                    Arg::new("up_or_down")
                        .long("up-or-down")
                        .about("Count all face up as a win too"),
                )
                .arg(
                    Arg::new("cards")
                        .about("Number of cards")
                        .takes_value(true),
                ),
        )
        .subcommand(
            App::new("coins")
                .about("All ways to leave one coin on the triangular board")
                .arg(
                    Arg::new("ignore_symmetry")
                        .short('i')
                        .long("ignore-symmetry")
                        .about("Skip symmetric starting locations"),
                )
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .value_name("INDEX")
                        .about("Cell of the opening removal")
                        .takes_value(true),
                )
                .arg(
                    Arg::new("rows")
                        .about("Number of rows")
                        .takes_value(true),
                ),
        )
        .subcommand(
            App::new("balance")
                .about("Two deposits that grow to the target as late as possible")
                .arg(
                    Arg::new("target")
                        .about("Target balance")
                        .takes_value(true),
                ),
        )
        .subcommand(
            App::new("distance")
                .about("Place n counters on an n x n grid, all distances unique")
                .arg(
                    Arg::new("n")
                        .value_name("N")
                        .about("Size of grid and number of counters")
                        .takes_value(true),
                ),
        )
        .subcommand(App::new("config").about("Show Configuration"));

    // Get matches
    let cli_matches = cli_app.get_matches();

    Ok(cli_matches)
}

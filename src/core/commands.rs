//! One function per subcommand: validate inputs, run the solver, print the
//! result in the selected output format.
//!
//! Text output reproduces the classic presentation of each puzzle; JSON
//! output is a single document per run.

use anyhow::{bail, Result};
use indicatif::ProgressBar;
use log::debug;
use serde_json::json;

use super::puzzles::{balance, cards, coins, distance, scrabble, train};
use crate::app_config::{CompleteAppConfig, OutputFormatChoices};

/// Largest distance-to-capacity ratio the train command accepts. The number
/// of caching trips grows exponentially with the ratio; past this it stops
/// finishing in reasonable time.
const MAX_TRAIN_RATIO: f64 = 10.0;

pub fn train(distance: f64, capacity: f64, format: OutputFormatChoices) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        bail!("distance must be a non-negative number");
    }
    if !capacity.is_finite() || capacity <= 0.0 {
        bail!("tank capacity must be a positive number");
    }
    if distance / capacity > MAX_TRAIN_RATIO {
        bail!(
            "a distance more than {}x the tank capacity takes an impractical number of refuelling trips",
            MAX_TRAIN_RATIO
        );
    }

    let plan = train::fuel_required(distance, capacity);
    debug!("train plan: {:?}", plan);
    match format {
        OutputFormatChoices::Text => println!("{:.2}", plan.fuel),
        OutputFormatChoices::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

pub fn scrabble(
    value: u32,
    hand_size: usize,
    slow: bool,
    format: OutputFormatChoices,
) -> Result<()> {
    if hand_size > 25 {
        bail!("hands of more than 25 tiles take an impractical time to count");
    }
    if slow && hand_size > 8 {
        bail!("the brute-force count is only practical for hands of up to 8 tiles");
    }

    let hands = if slow {
        scrabble::hand_count_naive(value, hand_size)
    } else {
        scrabble::hand_count(value, hand_size)
    };
    debug!("scrabble: {} hands of {} worth {}", hands, hand_size, value);
    let count = scrabble::HandCount {
        target_value: value,
        hand_size,
        hands,
    };
    match format {
        OutputFormatChoices::Text => println!("{}", count.hands),
        OutputFormatChoices::Json => println!("{}", serde_json::to_string_pretty(&count)?),
    }
    Ok(())
}

pub fn cards(cards: usize, up_or_down: bool, format: OutputFormatChoices) -> Result<()> {
    if cards < 1 || cards > 16 {
        bail!("cards must be between 1 and 16; the flip table doubles with every card");
    }

    let bits = (cards - usize::from(up_or_down)) as u32;
    let check = cards::check_flips(cards::gray_flips(bits), cards, up_or_down);
    debug!(
        "cards: {} flips over {} cards, success={}",
        check.flips.len(),
        cards,
        check.success
    );
    match format {
        OutputFormatChoices::Text => print_flip_table(&check),
        OutputFormatChoices::Json => println!("{}", serde_json::to_string_pretty(&check)?),
    }
    Ok(())
}

fn print_flip_table(check: &cards::FlipCheck) {
    println!("Flip\tFlipped\tBits\tDecimal");
    println!("----\t-------\t----\t-------");
    for (i, &state) in check.states.iter().enumerate() {
        let flip = if i == 0 {
            String::new()
        } else {
            check.flips[i - 1].to_string()
        };
        let flipped: String = cards::flipped_cards(state)
            .iter()
            .map(|card| card.to_string())
            .collect();
        println!(
            "{}\t{}\t{:0width$b}\t{}",
            flip,
            flipped,
            state,
            state,
            width = check.cards
        );
    }
    println!("{}", if check.success { "Success" } else { "Failure" });
}

pub fn coins(
    rows: usize,
    start: Option<usize>,
    ignore_symmetry: bool,
    format: OutputFormatChoices,
) -> Result<()> {
    if rows < 1 || rows > 5 {
        bail!("rows must be between 1 and 5; larger boards have an impractical number of solutions");
    }
    let board = match start {
        Some(cell) => {
            let cells = (rows + 1) * rows / 2;
            if cell < 1 || cell > cells {
                bail!("start must be a cell index between 1 and {}", cells);
            }
            coins::Triangle::with_removed(rows, cell)
        }
        None => coins::Triangle::new(rows),
    };

    let spinner = searching_spinner("Searching move sequences");
    let solutions = board.solve(ignore_symmetry);
    spinner.finish_and_clear();
    debug!("coins: {} solutions on {} rows", solutions.len(), rows);

    match format {
        OutputFormatChoices::Text => {
            if solutions.is_empty() {
                println!("No solutions");
            }
            for moves in &solutions {
                println!("{} moves: {}", moves.len(), render_moves(moves));
            }
        }
        OutputFormatChoices::Json => {
            let rendered: Vec<Vec<String>> = solutions
                .iter()
                .map(|moves| moves.iter().map(|mv| mv.to_string()).collect())
                .collect();
            let doc = json!({
                "rows": rows,
                "count": rendered.len(),
                "solutions": rendered,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn render_moves(moves: &[coins::Move]) -> String {
    let moves: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
    moves.join(", ")
}

pub fn balance(target: u64, format: OutputFormatChoices) -> Result<()> {
    if target < 1 {
        bail!("the target balance must be at least 1");
    }

    let plan = balance::find_deposits(target)?;
    debug!("balance plan: {:?}", plan);
    match format {
        OutputFormatChoices::Text => print_balance_table(&plan),
        OutputFormatChoices::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}

fn print_balance_table(plan: &balance::DepositPlan) {
    let balances = balance::daily_balances(plan.first, plan.second, plan.days);
    println!("Day\tDeposit\tBalance");
    println!("---\t-------\t-------");
    println!("1\t{}\t{}", plan.first, balances[0]);
    println!("2\t{}\t{}", plan.second, balances[1]);
    for day in 3..=plan.days as usize {
        println!("{}\t\t{}", day, thousands(balances[day - 1]));
    }
}

/// Groups digits in threes, `1,000,000` style.
fn thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn distance(grid_size: usize, format: OutputFormatChoices) -> Result<()> {
    if grid_size < 1 || grid_size > 8 {
        bail!("the grid size must be between 1 and 8");
    }

    let spinner = searching_spinner("Searching counter placements");
    let solutions = distance::Grid::new(grid_size).solve();
    spinner.finish_and_clear();
    debug!("distance: {} boards before deduplication", solutions.len());
    let unique = dedup_solutions(solutions);

    match format {
        OutputFormatChoices::Text => {
            for grid in &unique {
                println!("{}", grid.render());
                println!("{:?}", grid.distances());
                println!();
            }
            println!("{} unique solutions", unique.len());
        }
        OutputFormatChoices::Json => {
            let rendered: Vec<serde_json::Value> = unique
                .iter()
                .map(|grid| {
                    json!({
                        "pieces": grid.pieces(),
                        "distances": grid.distances(),
                    })
                })
                .collect();
            let doc = json!({
                "grid_size": grid_size,
                "count": rendered.len(),
                "solutions": rendered,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

/// Keeps the first board found of each solution family. Boards count as the
/// same solution when their distance sets match, which folds reflections and
/// rotations together.
fn dedup_solutions(solutions: Vec<distance::Grid>) -> Vec<distance::Grid> {
    let mut unique: Vec<distance::Grid> = Vec::new();
    for grid in solutions {
        if !unique.iter().any(|kept| kept.same_distances(&grid)) {
            unique.push(grid);
        }
    }
    unique
}

/// Spinner on stderr while a search runs; hidden when stderr isn't a
/// terminal.
fn searching_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(100);
    spinner
}

/// Show the configuration file
pub fn print_config(config: config::Config) -> Result<()> {
    let app_config: CompleteAppConfig = config.try_into()?;
    println!("{}", toml::to_string(&app_config)?);

    Ok(())
}

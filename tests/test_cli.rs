#[cfg(test)]
extern crate assert_cmd;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn mpmp() -> Command {
    Command::cargo_bin("mpmp").expect("Calling binary failed")
}

fn config_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).expect("Writing config fixture failed");
    path
}

#[test]
fn no_arguments_prints_help_and_fails() {
    let mut cmd = mpmp();
    cmd.assert().failure();
}

#[test]
fn unknown_subcommand_fails() {
    let mut cmd = mpmp();
    cmd.arg("foobar");
    cmd.assert().failure();
}

#[test]
fn flags_without_a_subcommand_print_help_and_fail() {
    let mut cmd = mpmp();
    cmd.args(&["-f", "json"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("USAGE:"));
}

#[test]
fn help_lists_the_puzzles() {
    let mut cmd = mpmp();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("train"))
        .stdout(predicate::str::contains("scrabble"))
        .stdout(predicate::str::contains("coins"));
}

#[test]
fn train_answers_the_classic_crossing() {
    let mut cmd = mpmp();
    cmd.arg("train");
    cmd.assert().success().stdout("1733.33\n");
}

#[test]
fn train_takes_tank_and_distance() {
    let mut cmd = mpmp();
    cmd.args(&["train", "-t", "10", "40"]);
    cmd.assert().success().stdout("4184.22\n");
}

#[test]
fn train_rejects_long_hauls() {
    let mut cmd = mpmp();
    cmd.args(&["train", "-t", "1", "100"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("impractical number of refuelling trips"));
}

#[test]
fn train_rejects_non_numeric_distances() {
    let mut cmd = mpmp();
    cmd.args(&["train", "over the hills"]);
    cmd.assert().failure();
}

#[test]
fn scrabble_counts_the_classic_hand() {
    let mut cmd = mpmp();
    cmd.arg("scrabble");
    cmd.assert().success().stdout("138\n");
}

#[test]
fn scrabble_slow_path_agrees() {
    let mut cmd = mpmp();
    cmd.args(&["scrabble", "--slow", "-s", "3", "5"]);
    cmd.assert().success().stdout("309\n");
}

#[test]
fn scrabble_unreachable_value_counts_zero() {
    let mut cmd = mpmp();
    cmd.args(&["scrabble", "-s", "3", "30"]);
    cmd.assert().success().stdout("0\n");
}

#[test]
fn cards_prints_the_flip_table() {
    let mut cmd = mpmp();
    cmd.arg("cards");
    cmd.assert().success().stdout(concat!(
        "Flip\tFlipped\tBits\tDecimal\n",
        "----\t-------\t----\t-------\n",
        "\t\t0000\t0\n",
        "1\t1\t0001\t1\n",
        "2\t12\t0011\t3\n",
        "1\t2\t0010\t2\n",
        "3\t23\t0110\t6\n",
        "1\t123\t0111\t7\n",
        "2\t13\t0101\t5\n",
        "1\t3\t0100\t4\n",
        "4\t34\t1100\t12\n",
        "1\t134\t1101\t13\n",
        "2\t1234\t1111\t15\n",
        "1\t234\t1110\t14\n",
        "3\t24\t1010\t10\n",
        "1\t124\t1011\t11\n",
        "2\t14\t1001\t9\n",
        "1\t4\t1000\t8\n",
        "Success\n",
    ));
}

#[test]
fn cards_up_or_down_halves_the_walk() {
    let mut cmd = mpmp();
    cmd.args(&["cards", "--up-or-down"]);
    cmd.assert().success().stdout(concat!(
        "Flip\tFlipped\tBits\tDecimal\n",
        "----\t-------\t----\t-------\n",
        "\t\t0000\t0\n",
        "1\t1\t0001\t1\n",
        "2\t12\t0011\t3\n",
        "1\t2\t0010\t2\n",
        "3\t23\t0110\t6\n",
        "1\t123\t0111\t7\n",
        "2\t13\t0101\t5\n",
        "1\t3\t0100\t4\n",
        "Success\n",
    ));
}

#[test]
fn cards_rejects_out_of_range_counts() {
    let mut cmd = mpmp();
    cmd.args(&["cards", "40"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 16"));
}

#[test]
fn coins_lists_every_solution() {
    let mut cmd = mpmp();
    cmd.arg("coins");
    cmd.assert()
        .success()
        .stdout(
            predicate::str::starts_with(concat!(
                "6 moves: 9, 7-9, 10-8, 2-7-9, 3-10-8-3, 1-6\n",
                "6 moves: 9, 7-9, 10-8, 2-7-9, 3-8-10-3, 1-6\n",
            ))
            .and(predicate::function(|out: &str| out.lines().count() == 84)),
        );
}

#[test]
fn coins_ignore_symmetry_prunes_starting_cells() {
    let mut cmd = mpmp();
    cmd.args(&["coins", "-i"]);
    cmd.assert().success().stdout(concat!(
        "6 moves: 2, 7-2, 1-4, 9-7-2, 6-1-4-6, 10-3\n",
        "6 moves: 2, 7-2, 1-4, 9-7-2, 6-4-1-6, 10-3\n",
        "7 moves: 2, 7-2, 9-7, 1-4, 7-2, 6-1-4-6, 10-3\n",
        "7 moves: 2, 7-2, 9-7, 1-4, 7-2, 6-4-1-6, 10-3\n",
        "7 moves: 2, 7-2, 6-4, 1-6, 10-3, 4-1-6, 8-10-3\n",
        "7 moves: 2, 7-2, 1-4, 6-1, 9-7-2, 1-4-6, 10-3\n",
        "8 moves: 2, 7-2, 9-7, 1-4, 6-1, 7-2, 1-4-6, 10-3\n",
        "8 moves: 2, 7-2, 6-4, 1-6, 10-3, 8-10, 4-1-6, 10-3\n",
        "8 moves: 2, 7-2, 6-4, 1-6, 4-1, 10-3, 1-6, 8-10-3\n",
        "8 moves: 2, 7-2, 1-4, 9-7, 6-1, 7-2, 1-4-6, 10-3\n",
        "8 moves: 2, 7-2, 1-4, 6-1, 4-6, 10-3, 1-6, 8-10-3\n",
        "9 moves: 2, 7-2, 6-4, 1-6, 10-3, 4-1, 8-10, 1-6, 10-3\n",
        "9 moves: 2, 7-2, 6-4, 1-6, 4-1, 10-3, 8-10, 1-6, 10-3\n",
        "9 moves: 2, 7-2, 1-4, 6-1, 4-6, 10-3, 8-10, 1-6, 10-3\n",
    ));
}

#[test]
fn coins_with_a_fixed_start() {
    let mut cmd = mpmp();
    cmd.args(&["coins", "-s", "3"]);
    cmd.assert().success().stdout(
        predicate::str::starts_with("6 moves: 3, 10-3, 1-6, 8-10-3, 4-6-1-4, 7-2\n")
            .and(predicate::function(|out: &str| out.lines().count() == 14)),
    );
}

#[test]
fn coins_corner_start_has_no_solutions() {
    let mut cmd = mpmp();
    cmd.args(&["coins", "-s", "1"]);
    cmd.assert().success().stdout("No solutions\n");
}

#[test]
fn coins_single_cell_is_already_solved() {
    let mut cmd = mpmp();
    cmd.args(&["coins", "1"]);
    cmd.assert().success().stdout("0 moves: \n");
}

#[test]
fn coins_rejects_a_start_off_the_board() {
    let mut cmd = mpmp();
    cmd.args(&["coins", "-s", "11"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));
}

#[test]
fn coins_rejects_oversized_boards() {
    let mut cmd = mpmp();
    cmd.args(&["coins", "6"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn balance_prints_the_deposit_table() {
    let mut cmd = mpmp();
    cmd.args(&["balance", "100"]);
    cmd.assert().success().stdout(concat!(
        "Day\tDeposit\tBalance\n",
        "---\t-------\t-------\n",
        "1\t4\t4\n",
        "2\t6\t10\n",
        "3\t\t14\n",
        "4\t\t24\n",
        "5\t\t38\n",
        "6\t\t62\n",
        "7\t\t100\n",
    ));
}

#[test]
fn balance_reaches_a_million_on_day_nineteen() {
    let mut cmd = mpmp();
    cmd.arg("balance");
    cmd.assert()
        .success()
        .stdout(
            predicate::str::starts_with(concat!(
                "Day\tDeposit\tBalance\n",
                "---\t-------\t-------\n",
                "1\t144\t144\n",
                "2\t154\t298\n",
            ))
            .and(predicate::str::ends_with("19\t\t1,000,000\n")),
        );
}

#[test]
fn balance_rejects_a_zero_target() {
    let mut cmd = mpmp();
    cmd.args(&["balance", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn distance_draws_every_board() {
    let mut cmd = mpmp();
    cmd.args(&["distance", "3"]);
    cmd.assert().success().stdout(concat!(
        "+-+-+-+\n",
        "|O|O| |\n",
        "+-+-+-+\n",
        "| | |O|\n",
        "+-+-+-+\n",
        "| | | |\n",
        "+-+-+-+\n",
        "[1, 2, 5]\n",
        "\n",
        "+-+-+-+\n",
        "|O|O| |\n",
        "+-+-+-+\n",
        "| | | |\n",
        "+-+-+-+\n",
        "|O| | |\n",
        "+-+-+-+\n",
        "[1, 4, 5]\n",
        "\n",
        "+-+-+-+\n",
        "|O|O| |\n",
        "+-+-+-+\n",
        "| | | |\n",
        "+-+-+-+\n",
        "| | |O|\n",
        "+-+-+-+\n",
        "[1, 5, 8]\n",
        "\n",
        "3 unique solutions\n",
    ));
}

#[test]
fn distance_single_counter_is_trivial() {
    let mut cmd = mpmp();
    cmd.args(&["distance", "1"]);
    cmd.assert().success().stdout(concat!(
        "+-+\n",
        "|O|\n",
        "+-+\n",
        "[]\n",
        "\n",
        "1 unique solutions\n",
    ));
}

#[test]
fn distance_rejects_oversized_grids() {
    let mut cmd = mpmp();
    cmd.args(&["distance", "9"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 8"));
}

#[test]
fn json_output_for_balance() {
    let mut cmd = mpmp();
    cmd.args(&["--format", "json", "balance", "100"]);
    cmd.assert().success().stdout(concat!(
        "{\n",
        "  \"target\": 100,\n",
        "  \"first\": 4,\n",
        "  \"second\": 6,\n",
        "  \"days\": 7\n",
        "}\n",
    ));
}

#[test]
fn json_output_for_coins() {
    let mut cmd = mpmp();
    cmd.args(&["-f", "json", "coins", "-i"]);
    let assert = cmd.assert().success();
    let doc: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("coins output is not valid JSON");
    assert_eq!(doc["rows"], 4);
    assert_eq!(doc["count"], 14);
    assert_eq!(doc["solutions"][0][0], "2");
    assert_eq!(doc["solutions"][0][5], "10-3");
}

#[test]
fn json_output_for_train() {
    let mut cmd = mpmp();
    cmd.args(&["-f", "json", "train", "500"]);
    cmd.assert().success().stdout(concat!(
        "{\n",
        "  \"distance\": 500.0,\n",
        "  \"capacity\": 500.0,\n",
        "  \"fuel\": 500.0,\n",
        "  \"round_trips\": 0\n",
        "}\n",
    ));
}

#[test]
fn config_prints_the_defaults_as_toml() {
    let mut cmd = mpmp();
    cmd.arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("format = \"text\""))
        .stdout(predicate::str::contains("[train]"))
        .stdout(predicate::str::contains("tank_capacity = 500.0"))
        .stdout(predicate::str::contains("[balance]"))
        .stdout(predicate::str::contains("target = 1000000"));
}

#[test]
fn config_reflects_environment_overrides() {
    let mut cmd = mpmp();
    cmd.env("MPMP__TRAIN__TANK_CAPACITY", "750");
    cmd.arg("config");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tank_capacity = 750.0"));
}

#[test]
fn config_file_feeds_the_commands() {
    let path = config_fixture("mpmp_test_balance.toml", "[balance]\ntarget = 100\n");
    let mut cmd = mpmp();
    cmd.args(&["-c", path.to_str().expect("Fixture path is not UTF-8")]);
    cmd.arg("balance");
    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("7\t\t100\n"));
    let _ = fs::remove_file(&path);
}

#[test]
fn arguments_override_the_config_file() {
    let path = config_fixture("mpmp_test_train_arg.toml", "[train]\ndistance = 1000.0\n");
    let mut cmd = mpmp();
    cmd.args(&["-c", path.to_str().expect("Fixture path is not UTF-8")]);
    cmd.args(&["train", "800"]);
    cmd.assert().success().stdout("1733.33\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn environment_overrides_the_config_file() {
    let path = config_fixture("mpmp_test_train_env.toml", "[train]\ndistance = 500.0\n");
    let mut cmd = mpmp();
    cmd.env("MPMP__TRAIN__DISTANCE", "1000");
    cmd.args(&["-c", path.to_str().expect("Fixture path is not UTF-8")]);
    cmd.arg("train");
    cmd.assert().success().stdout("3836.50\n");
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_config_file_fails() {
    let mut cmd = mpmp();
    cmd.args(&["-c", "/definitely/not/here.toml", "train"]);
    cmd.assert().failure();
}

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString, EnumVariantNames};

/// How command results are printed.
#[derive(
    AsRefStr, EnumVariantNames, EnumString, EnumIter, Clone, Copy, Debug, Deserialize, Serialize,
)]
pub enum OutputFormatChoices {
    /// The plain tables and figures the puzzles are usually shown with.
    #[strum(serialize = "text")]
    #[serde(rename = "text")]
    Text,
    /// A single JSON document per run.
    #[strum(serialize = "json")]
    #[serde(rename = "json")]
    Json,
}

impl Default for OutputFormatChoices {
    fn default() -> Self {
        OutputFormatChoices::Text
    }
}

/// The whole configuration tree. Every section and field is optional in the
/// config file; missing pieces fall back to the puzzle's classic setup. Also
/// used by the `config` subcommand to echo the merged configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CompleteAppConfig {
    pub output: OutputConfig,
    pub train: TrainConfig,
    pub scrabble: ScrabbleConfig,
    pub cards: CardsConfig,
    pub coins: CoinsConfig,
    pub balance: BalanceConfig,
    pub distance: DistanceConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormatChoices,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainConfig {
    pub tank_capacity: f64,
    pub distance: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            tank_capacity: 500.0,
            distance: 800.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrabbleConfig {
    pub hand_size: usize,
    pub target_value: u32,
}

impl Default for ScrabbleConfig {
    fn default() -> Self {
        ScrabbleConfig {
            hand_size: 7,
            target_value: 46,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CardsConfig {
    pub cards: usize,
    pub up_or_down: bool,
}

impl Default for CardsConfig {
    fn default() -> Self {
        CardsConfig {
            cards: 4,
            up_or_down: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinsConfig {
    pub rows: usize,
    pub ignore_symmetry: bool,
}

impl Default for CoinsConfig {
    fn default() -> Self {
        CoinsConfig {
            rows: 4,
            ignore_symmetry: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub target: u64,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        BalanceConfig { target: 1_000_000 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DistanceConfig {
    pub grid_size: usize,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        DistanceConfig { grid_size: 6 }
    }
}

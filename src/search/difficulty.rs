use crate::search::eval::EvalLayer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a tier picks its move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Random,
    GreedyCapture,
    Minimax,
}

/// Search settings a difficulty tier resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierProfile {
    pub depth: u32,
    pub time_budget: Duration,
    pub layer: EvalLayer,
    pub strategy: StrategyKind,
}

const fn tier(depth: u32, ms: u64, layer: EvalLayer, strategy: StrategyKind) -> TierProfile {
    TierProfile { depth, time_budget: Duration::from_millis(ms), layer, strategy }
}

// Indexed by level - 1.
const TIER_TABLE: [TierProfile; 10] = [
    tier(1, 1_000, EvalLayer::Material, StrategyKind::Random),
    tier(2, 1_000, EvalLayer::Material, StrategyKind::GreedyCapture),
    tier(3, 1_000, EvalLayer::Material, StrategyKind::Minimax),
    tier(4, 2_000, EvalLayer::Positional, StrategyKind::Minimax),
    tier(5, 2_000, EvalLayer::Positional, StrategyKind::Minimax),
    tier(6, 3_000, EvalLayer::CenterControl, StrategyKind::Minimax),
    tier(8, 3_000, EvalLayer::CenterControl, StrategyKind::Minimax),
    tier(10, 5_000, EvalLayer::RiverCrossing, StrategyKind::Minimax),
    tier(12, 8_000, EvalLayer::RiverCrossing, StrategyKind::Minimax),
    tier(15, 12_000, EvalLayer::RiverCrossing, StrategyKind::Minimax),
];

/// The ten difficulty tiers, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Novice = 1,
    Beginner = 2,
    Elementary = 3,
    Intermediate = 4,
    IntermediateAdvanced = 5,
    Advanced = 6,
    Expert = 7,
    Master = 8,
    Grandmaster = 9,
    InternationalMaster = 10,
}

impl Difficulty {
    pub const ALL: [Difficulty; 10] = [
        Difficulty::Novice,
        Difficulty::Beginner,
        Difficulty::Elementary,
        Difficulty::Intermediate,
        Difficulty::IntermediateAdvanced,
        Difficulty::Advanced,
        Difficulty::Expert,
        Difficulty::Master,
        Difficulty::Grandmaster,
        Difficulty::InternationalMaster,
    ];

    pub fn level(self) -> u8 { self as u8 }

    pub fn from_level(level: u8) -> Option<Difficulty> {
        Self::ALL.get(usize::from(level).checked_sub(1)?).copied()
    }

    pub fn profile(self) -> TierProfile { TIER_TABLE[usize::from(self.level()) - 1] }

    /// Label for menus; carries no behaviour.
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Novice => "Novice - random moves",
            Difficulty::Beginner => "Beginner - grabs the most valuable capture",
            Difficulty::Elementary => "Elementary - basic defence",
            Difficulty::Intermediate => "Intermediate - short lookahead",
            Difficulty::IntermediateAdvanced => "Upper intermediate - deeper lookahead",
            Difficulty::Advanced => "Advanced - positional play",
            Difficulty::Expert => "Expert - deep tactics",
            Difficulty::Master => "Master - long calculation",
            Difficulty::Grandmaster => "Grandmaster - very long calculation",
            Difficulty::InternationalMaster => "International master - maximum strength",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self { Difficulty::IntermediateAdvanced }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level(), self.description())
    }
}

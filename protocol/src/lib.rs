use serde::{Deserialize, Serialize};
use std::fmt;

/// ---- Statistic categories ----
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatChoice {
    Points,
    Assists,
    Rebounds,
}

impl fmt::Display for StatChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatChoice::Points => write!(f, "Points"),
            StatChoice::Assists => write!(f, "Assists"),
            StatChoice::Rebounds => write!(f, "Rebounds"),
        }
    }
}

impl Default for StatChoice {
    fn default() -> Self {
        StatChoice::Points
    }
}

impl StatChoice {
    pub const ALL: [StatChoice; 3] = [StatChoice::Points, StatChoice::Assists, StatChoice::Rebounds];

    /// The label the backend expects in a start-game request.
    pub fn request_label(&self) -> &'static str {
        match self {
            StatChoice::Points => "Points",
            StatChoice::Assists => "Assists",
            StatChoice::Rebounds => "Rebounds",
        }
    }
}

/// Human label for a backend stat marker, with the internal `total_` prefix
/// stripped. An unset marker reads as "points".
pub fn stat_label(stat_type: Option<&str>) -> String {
    match stat_type {
        Some(s) => s.strip_prefix("total_").unwrap_or(s).to_string(),
        None => "points".to_string(),
    }
}

/// ---- Guess encoding ----
/// The backend scores `guess: 1` as "hidden player is lower" and `guess: 2`
/// as "hidden player is higher". Ties count in the guesser's favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Lower,
    Higher,
}

impl Guess {
    pub fn wire_code(self) -> u8 {
        match self {
            Guess::Lower => 1,
            Guess::Higher => 2,
        }
    }
}

/// ---- Career totals ----
/// The context blob the stateless backend round-trips on every guess.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareerTotals {
    pub total_points: i64,
    pub total_assists: i64,
    pub total_rebounds: i64,
}

impl CareerTotals {
    /// Look a total up by its backend marker.
    pub fn value_of(&self, stat_type: &str) -> Option<i64> {
        match stat_type {
            "total_points" => Some(self.total_points),
            "total_assists" => Some(self.total_assists),
            "total_rebounds" => Some(self.total_rebounds),
            _ => None,
        }
    }
}

/// ---- start-game ----
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub stat_type: Option<String>,
}

/// Round descriptor returned by a successful start-game call. `player1` is
/// the revealed player; `player2`'s value stays hidden until a guess resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundStart {
    pub player1: String,
    pub player2: String,
    pub player1_id: i64,
    pub player2_id: i64,
    pub player1_stats: CareerTotals,
    pub player2_stats: CareerTotals,
    pub player1_stat_value: i64,
    pub stat_type: String,
    pub score: u32,
}

/// ---- submit-guess ----
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    pub guess: u8,
    pub player1_id: i64,
    pub player1_name: String,
    pub player1_stats: CareerTotals,
    pub player2_id: i64,
    pub player2_name: String,
    pub player2_stats: CareerTotals,
    pub stat_type: String,
    pub score: u32,
}

/// Outcome of a guess. `player2_stat` (the reveal) and both names are present
/// on every outcome; the next-round pairing fields only accompany a correct
/// one, so they decode as options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub correct: bool,
    pub score: u32,
    pub player1_stat: i64,
    pub player2_stat: i64,
    #[serde(default)]
    pub game_over: bool,
    pub player1: String,
    pub player2: String,
    #[serde(default)]
    pub player1_id: Option<i64>,
    #[serde(default)]
    pub player2_id: Option<i64>,
    #[serde(default)]
    pub player1_stats: Option<CareerTotals>,
    #[serde(default)]
    pub player2_stats: Option<CareerTotals>,
    #[serde(default)]
    pub player1_stat_value: Option<i64>,
    #[serde(default)]
    pub old_player1: Option<String>,
    #[serde(default)]
    pub old_player2: Option<String>,
}

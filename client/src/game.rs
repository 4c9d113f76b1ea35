use hoopstreak_protocol::{stat_label, CareerTotals, Guess, GuessOutcome, GuessRequest, RoundStart};

/// The player whose statistic value is currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownPlayer {
    pub id: i64,
    pub name: String,
    pub stats: CareerTotals,
    pub stat_value: i64,
}

/// The player whose value is withheld until the guess resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct HiddenPlayer {
    pub id: i64,
    pub name: String,
    pub stats: CareerTotals,
}

/// Authoritative state of one running game. Owned by the app and mutated only
/// by replacing it through the constructors below; `stat_type` is fixed when
/// the game starts and carried forward verbatim on every promotion.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub shown: ShownPlayer,
    pub hidden: HiddenPlayer,
    pub stat_type: String,
    pub score: u32,
}

impl GameState {
    pub fn from_start(round: &RoundStart) -> Self {
        GameState {
            shown: ShownPlayer {
                id: round.player1_id,
                name: round.player1.clone(),
                stats: round.player1_stats,
                stat_value: round.player1_stat_value,
            },
            hidden: HiddenPlayer {
                id: round.player2_id,
                name: round.player2.clone(),
                stats: round.player2_stats,
            },
            stat_type: round.stat_type.clone(),
            score: round.score,
        }
    }

    /// Full game context for a submit-guess request; the backend is stateless
    /// and re-derives everything from this.
    pub fn guess_request(&self, guess: Guess) -> GuessRequest {
        GuessRequest {
            guess: guess.wire_code(),
            player1_id: self.shown.id,
            player1_name: self.shown.name.clone(),
            player1_stats: self.shown.stats,
            player2_id: self.hidden.id,
            player2_name: self.hidden.name.clone(),
            player2_stats: self.hidden.stats,
            stat_type: self.stat_type.clone(),
            score: self.score,
        }
    }

    /// The promoted state after a correct guess: the hidden player becomes the
    /// shown one, carrying its now-revealed value, and the outcome's fresh
    /// player takes the hidden seat. Returns None when the outcome does not
    /// carry a next pairing (wrong guess, or a malformed response).
    pub fn next_round(&self, outcome: &GuessOutcome) -> Option<GameState> {
        if !outcome.correct {
            return None;
        }
        Some(GameState {
            shown: ShownPlayer {
                id: outcome.player1_id?,
                name: outcome.player1.clone(),
                stats: outcome.player1_stats?,
                stat_value: outcome.player1_stat_value?,
            },
            hidden: HiddenPlayer {
                id: outcome.player2_id?,
                name: outcome.player2.clone(),
                stats: outcome.player2_stats?,
            },
            stat_type: self.stat_type.clone(),
            score: outcome.score,
        })
    }

    /// Display label for the compared category, e.g. "career points".
    pub fn stat_label(&self) -> String {
        stat_label(Some(&self.stat_type))
    }
}

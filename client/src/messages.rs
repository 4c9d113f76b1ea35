use hoopstreak_protocol::{GuessOutcome, RoundStart, StatChoice};

use crate::portrait::Portrait;

#[derive(Debug, Clone)]
pub enum Msg {
    // Setup screen
    StartGame(Option<StatChoice>),
    GameStarted(Result<RoundStart, String>),

    // Active round
    GuessHigher,
    GuessLower,
    GuessResolved(Result<GuessOutcome, String>),
    /// Fires once the incoming portrait is warmed and the transition window
    /// has elapsed; commits the staged promotion.
    AdvanceRound(Option<Portrait>),
    /// Fires after the reveal window on a wrong guess.
    RoundLost,

    // Portrait resolution
    PortraitResolved(i64, Option<Portrait>),

    // Quit confirmation and restart
    QuitPressed,
    QuitConfirmed,
    QuitDeclined,
    RestartPressed,

    // Alert overlay
    DismissAlert,

    // Debug log panel
    ToggleLog,
}

use std::collections::HashMap;
use std::time::Duration;

use iced::{Element, Task};

use hoopstreak_protocol::{Guess, GuessOutcome};

use crate::game::GameState;
use crate::messages::Msg;
use crate::portrait::{self, PortraitFill};
use crate::states::Screen;
use crate::transport::Backend;
use crate::ui;

// Visual-transition windows, matching the card animations.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(600);
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(1200);

pub struct App {
    pub screen: Screen,
    pub backend: Backend,

    /// The running game, if any. Replaced whole on every transition; the
    /// screens only ever read it.
    pub game: Option<GameState>,
    /// Promoted state parked during the correct-guess transition window.
    pub staged: Option<GameState>,
    /// The hidden player's value once a guess response reveals it.
    pub revealed_stat: Option<i64>,
    pub final_score: Option<u32>,
    pub final_line: Option<String>,

    /// Resolved card backdrops keyed by player id. An entry is either a
    /// loaded headshot or the settled gradient fallback.
    pub portraits: HashMap<i64, PortraitFill>,
    /// True from the moment a guess is dispatched until its flow fully
    /// exits; the guess buttons read this.
    pub guess_locked: bool,
    pub starting: bool,
    pub alert: Option<String>,
    pub confirm_quit: bool,

    pub log: Vec<String>,
    pub show_log: bool,
}

impl Default for App {
    fn default() -> Self {
        App {
            screen: Screen::Setup,
            backend: Backend::from_env(),
            game: None,
            staged: None,
            revealed_stat: None,
            final_score: None,
            final_line: None,
            portraits: HashMap::new(),
            guess_locked: false,
            starting: false,
            alert: None,
            confirm_quit: false,
            log: Vec::new(),
            show_log: false,
        }
    }
}

impl App {
    pub fn log<S: Into<String>>(&mut self, s: S) {
        self.log.push(s.into());
        if self.log.len() > 400 {
            self.log.remove(0);
        }
    }

    /// Kick off apply-mode resolution for a card backdrop. Settled entries
    /// (including fallbacks) are never refetched.
    fn resolve_portrait(&self, player_id: i64) -> Task<Msg> {
        if self.portraits.contains_key(&player_id) {
            return Task::none();
        }
        let http = self.backend.http();
        Task::perform(
            async move { portrait::resolve(&http, player_id).await },
            move |resolved| Msg::PortraitResolved(player_id, resolved),
        )
    }

    fn submit_guess(&mut self, guess: Guess) -> Task<Msg> {
        if self.guess_locked {
            return Task::none();
        }
        let Some(game) = self.game.clone() else {
            return Task::none();
        };
        // locked synchronously at dispatch; every exit path of the flow
        // unlocks exactly once
        self.guess_locked = true;
        self.log(format!("guess: {guess:?} at score {}", game.score));
        let backend = self.backend.clone();
        Task::perform(
            async move {
                backend
                    .submit_guess(guess, &game)
                    .await
                    .map_err(|e| e.to_string())
            },
            Msg::GuessResolved,
        )
    }

    fn settle_guess(&mut self, outcome: GuessOutcome) -> Task<Msg> {
        let Some(game) = self.game.as_ref() else {
            self.guess_locked = false;
            return Task::none();
        };
        let stat_label = game.stat_label();
        let next = game.next_round(&outcome);
        self.revealed_stat = Some(outcome.player2_stat);

        if outcome.correct {
            let Some(next) = next else {
                // flagged correct but the next pairing is unusable
                self.log("correct outcome arrived without a next pairing");
                self.revealed_stat = None;
                self.alert = Some("Error processing guess!".to_string());
                self.guess_locked = false;
                return Task::none();
            };
            self.log(format!("correct, score {}", next.score));
            let incoming = next.hidden.id;
            self.staged = Some(next);
            let http = self.backend.http();
            Task::perform(
                async move {
                    // warm the incoming portrait; a miss must not hold the
                    // transition back
                    let preloaded = portrait::resolve(&http, incoming).await;
                    tokio::time::sleep(ADVANCE_DELAY).await;
                    preloaded
                },
                Msg::AdvanceRound,
            )
        } else {
            self.log(format!("wrong, final score {}", outcome.score));
            self.final_score = Some(outcome.score);
            self.final_line = Some(format!(
                "{} had {} career {}",
                outcome.player2,
                ui::grouped(outcome.player2_stat),
                stat_label,
            ));
            Task::perform(tokio::time::sleep(GAME_OVER_DELAY), |_| Msg::RoundLost)
        }
    }

    fn reset(&mut self) {
        self.screen = Screen::Setup;
        self.game = None;
        self.staged = None;
        self.revealed_stat = None;
        self.final_score = None;
        self.final_line = None;
        self.portraits.clear();
        self.guess_locked = false;
        self.starting = false;
        self.alert = None;
        self.confirm_quit = false;
    }

    pub(crate) fn update(&mut self, msg: Msg) -> Task<Msg> {
        match msg {
            Msg::StartGame(choice) => {
                if self.starting {
                    return Task::none();
                }
                self.starting = true;
                let picked = choice
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "backend's pick".to_string());
                self.log(format!("starting game ({picked})"));
                let backend = self.backend.clone();
                Task::perform(
                    async move { backend.start_game(choice).await.map_err(|e| e.to_string()) },
                    Msg::GameStarted,
                )
            }

            Msg::GameStarted(Ok(round)) => {
                self.starting = false;
                let state = GameState::from_start(&round);
                self.log(format!(
                    "game on: {} vs {} ({})",
                    state.shown.name,
                    state.hidden.name,
                    state.stat_label()
                ));
                let shown = state.shown.id;
                let hidden = state.hidden.id;
                self.game = Some(state);
                self.revealed_stat = None;
                self.guess_locked = false;
                self.screen = Screen::Game;
                Task::batch([self.resolve_portrait(shown), self.resolve_portrait(hidden)])
            }
            Msg::GameStarted(Err(e)) => {
                self.starting = false;
                self.log(format!("start-game failed: {e}"));
                self.alert = Some("Failed to start game. Make sure the backend is running!".to_string());
                Task::none()
            }

            Msg::GuessHigher => self.submit_guess(Guess::Higher),
            Msg::GuessLower => self.submit_guess(Guess::Lower),

            Msg::GuessResolved(Ok(outcome)) => self.settle_guess(outcome),
            Msg::GuessResolved(Err(e)) => {
                // nothing was committed; the round stands exactly as it was
                self.log(format!("submit-guess failed: {e}"));
                self.alert = Some("Error processing guess!".to_string());
                self.guess_locked = false;
                Task::none()
            }

            Msg::AdvanceRound(preloaded) => {
                if let Some(next) = self.staged.take() {
                    self.portraits
                        .retain(|id, _| *id == next.shown.id || *id == next.hidden.id);
                    self.portraits
                        .insert(next.hidden.id, PortraitFill::from(preloaded));
                    self.revealed_stat = None;
                    self.game = Some(next);
                }
                self.guess_locked = false;
                Task::none()
            }

            Msg::RoundLost => {
                self.guess_locked = false;
                self.screen = Screen::GameOver;
                Task::none()
            }

            Msg::PortraitResolved(player_id, resolved) => {
                self.portraits.insert(player_id, PortraitFill::from(resolved));
                Task::none()
            }

            Msg::QuitPressed => {
                if self.screen == Screen::Game && self.game.is_some() {
                    self.confirm_quit = true;
                }
                Task::none()
            }
            Msg::QuitConfirmed => {
                self.confirm_quit = false;
                if let Some(game) = &self.game {
                    self.final_score = Some(game.score);
                    self.final_line = None;
                    self.screen = Screen::GameOver;
                }
                Task::none()
            }
            Msg::QuitDeclined => {
                self.confirm_quit = false;
                Task::none()
            }

            Msg::RestartPressed => {
                self.reset();
                Task::none()
            }

            Msg::DismissAlert => {
                self.alert = None;
                Task::none()
            }
            Msg::ToggleLog => {
                self.show_log = !self.show_log;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Msg> {
        if let Some(message) = &self.alert {
            return ui::overlays::alert_view(message);
        }
        if self.confirm_quit {
            let score = self.game.as_ref().map(|g| g.score).unwrap_or(0);
            return ui::overlays::confirm_quit_view(score);
        }
        match self.screen {
            Screen::Setup => self.setup_view(),
            Screen::Game => self.game_view(),
            Screen::GameOver => self.game_over_view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::{correct_outcome, incorrect_outcome, test_round_start};

    fn started_app() -> App {
        let mut app = App::default();
        let _ = app.update(Msg::GameStarted(Ok(test_round_start())));
        app
    }

    #[test]
    fn test_start_success_enters_game_screen() {
        let app = started_app();
        assert_eq!(app.screen, Screen::Game);
        assert!(!app.starting);
        assert!(!app.guess_locked);
        assert_eq!(app.revealed_stat, None);

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.score, 0);
        assert_eq!(game.stat_label(), "points");
        assert_eq!(game.shown.stat_value, 3195);
    }

    #[test]
    fn test_start_failure_stays_on_setup_with_alert() {
        let mut app = App::default();
        let _ = app.update(Msg::StartGame(None));
        assert!(app.starting);

        let _ = app.update(Msg::GameStarted(Err("connection refused".to_string())));
        assert_eq!(app.screen, Screen::Setup);
        assert!(!app.starting);
        assert!(app.alert.is_some());
        assert!(app.game.is_none());
    }

    #[test]
    fn test_guess_dispatch_locks_input() {
        let mut app = started_app();
        let _ = app.update(Msg::GuessHigher);
        assert!(app.guess_locked);

        // a second press while locked must not re-dispatch
        let _ = app.update(Msg::GuessLower);
        assert!(app.guess_locked);
    }

    #[test]
    fn test_correct_guess_stages_then_commits_promotion() {
        let mut app = started_app();
        let before = app.game.clone().unwrap();
        let _ = app.update(Msg::GuessHigher);

        let _ = app.update(Msg::GuessResolved(Ok(correct_outcome(1))));
        // value revealed immediately, commit held for the transition window
        assert_eq!(app.revealed_stat, Some(5248));
        assert!(app.guess_locked);
        assert!(app.staged.is_some());
        assert_eq!(app.game.as_ref().unwrap(), &before);

        let _ = app.update(Msg::AdvanceRound(None));
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.shown.id, before.hidden.id);
        assert_eq!(game.shown.stat_value, 5248);
        assert_eq!(game.score, 1);
        assert_eq!(game.stat_type, before.stat_type);
        assert_eq!(app.revealed_stat, None);
        assert!(!app.guess_locked);
        assert!(app.staged.is_none());
        // the unloadable incoming portrait settled on the fallback
        assert!(matches!(
            app.portraits.get(&game.hidden.id),
            Some(PortraitFill::Fallback)
        ));
    }

    #[tokio::test]
    async fn test_wrong_guess_reveals_then_ends_game() {
        let mut app = started_app();
        let _ = app.update(Msg::GuessHigher);

        let _ = app.update(Msg::GuessResolved(Ok(incorrect_outcome(2))));
        assert_eq!(app.revealed_stat, Some(5248));
        assert_eq!(app.final_score, Some(2));
        assert_eq!(app.screen, Screen::Game); // reveal window still showing

        let _ = app.update(Msg::RoundLost);
        assert_eq!(app.screen, Screen::GameOver);
        assert!(!app.guess_locked);
    }

    #[test]
    fn test_transport_failure_unlocks_without_commit() {
        let mut app = started_app();
        let before = app.game.clone().unwrap();
        let _ = app.update(Msg::GuessHigher);

        let _ = app.update(Msg::GuessResolved(Err("timed out".to_string())));
        assert!(!app.guess_locked);
        assert!(app.alert.is_some());
        assert_eq!(app.game.as_ref().unwrap(), &before);
        assert_eq!(app.revealed_stat, None);
        assert!(app.staged.is_none());
        assert_eq!(app.screen, Screen::Game);
    }

    #[test]
    fn test_malformed_correct_outcome_is_an_error_not_a_commit() {
        let mut app = started_app();
        let before = app.game.clone().unwrap();
        let _ = app.update(Msg::GuessHigher);

        let mut outcome = correct_outcome(1);
        outcome.player1_stats = None;
        let _ = app.update(Msg::GuessResolved(Ok(outcome)));
        assert!(!app.guess_locked);
        assert!(app.alert.is_some());
        assert!(app.staged.is_none());
        assert_eq!(app.game.as_ref().unwrap(), &before);
    }

    #[test]
    fn test_quit_needs_confirmation() {
        let mut app = started_app();
        let _ = app.update(Msg::QuitPressed);
        assert!(app.confirm_quit);

        // declining changes nothing
        let _ = app.update(Msg::QuitDeclined);
        assert!(!app.confirm_quit);
        assert_eq!(app.screen, Screen::Game);

        // confirming ends the game at the current score, no network involved
        let _ = app.update(Msg::GuessResolved(Ok(correct_outcome(5))));
        let _ = app.update(Msg::AdvanceRound(None));
        let _ = app.update(Msg::QuitPressed);
        let _ = app.update(Msg::QuitConfirmed);
        assert_eq!(app.screen, Screen::GameOver);
        assert_eq!(app.final_score, Some(5));
    }

    #[test]
    fn test_restart_always_yields_the_nulled_state() {
        let mut app = started_app();
        let _ = app.update(Msg::GuessResolved(Ok(correct_outcome(7))));
        let _ = app.update(Msg::AdvanceRound(None));
        let _ = app.update(Msg::QuitPressed);
        let _ = app.update(Msg::QuitConfirmed);

        let _ = app.update(Msg::RestartPressed);
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.game.is_none());
        assert!(app.staged.is_none());
        assert_eq!(app.revealed_stat, None);
        assert_eq!(app.final_score, None);
        assert!(app.portraits.is_empty());
        assert!(!app.guess_locked);
        assert!(!app.confirm_quit);
    }

    #[test]
    fn test_portrait_resolution_is_idempotent() {
        let mut app = started_app();
        let id = app.game.as_ref().unwrap().shown.id;

        let _ = app.update(Msg::PortraitResolved(id, None));
        assert!(matches!(app.portraits.get(&id), Some(PortraitFill::Fallback)));

        // a settled entry is left alone by apply-mode
        let task = app.resolve_portrait(id);
        drop(task);
        assert!(matches!(app.portraits.get(&id), Some(PortraitFill::Fallback)));
    }
}

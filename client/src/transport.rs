use std::time::Duration;

use hoopstreak_protocol::{Guess, GuessOutcome, RoundStart, StartGameRequest, StatChoice};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::game::GameState;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

// Bounded wait; a dead backend shows up as an alert instead of a stuck client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("backend unreachable: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed backend response: {0}")]
    Decode(String),
}

/// Handle to the two backend endpoints. Cheap to clone into async tasks.
#[derive(Debug, Clone)]
pub struct Backend {
    base: String,
    http: reqwest::Client,
}

impl Backend {
    pub fn new(base: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("http client");
        Backend { base: base.into(), http }
    }

    /// Base path from `HOOPSTREAK_API`, falling back to the local dev backend.
    pub fn from_env() -> Self {
        let base = std::env::var("HOOPSTREAK_API").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Backend::new(base)
    }

    /// The underlying client, shared with portrait fetching.
    pub fn http(&self) -> reqwest::Client {
        self.http.clone()
    }

    /// Ask the backend for a fresh pairing in the given category. `None`
    /// defers the category choice to the backend.
    pub async fn start_game(&self, choice: Option<StatChoice>) -> Result<RoundStart, TransportError> {
        let req = StartGameRequest {
            stat_type: choice.map(|c| c.request_label().to_string()),
        };
        self.post_json("start-game", &req).await
    }

    /// Submit a guess, resubmitting the full game context (the backend keeps
    /// no state between rounds).
    pub async fn submit_guess(
        &self,
        guess: Guess,
        state: &GameState,
    ) -> Result<GuessOutcome, TransportError> {
        let req = state.guess_request(guess);
        self.post_json("submit-guess", &req).await
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base, endpoint);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tests::test_round_start;
    use axum::{routing::post, Json, Router};
    use hoopstreak_protocol::GuessRequest;
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Mirrors the real backend: normalizes the requested label to an internal
    /// marker and returns a full round descriptor.
    async fn stub_start(Json(req): Json<StartGameRequest>) -> Json<Value> {
        let stat_type = match req.stat_type.as_deref() {
            Some("Points") => "total_points",
            Some("Assists") => "total_assists",
            _ => "total_rebounds",
        };
        let shown_value = match stat_type {
            "total_points" => 3195,
            "total_assists" => 902,
            _ => 791,
        };
        Json(json!({
            "player1": "Ayo Dosunmu", "player2": "Jalen Green",
            "player1_id": 1630245, "player2_id": 1630224,
            "player1_stats": {"total_points": 3195, "total_assists": 902, "total_rebounds": 791},
            "player2_stats": {"total_points": 5248, "total_assists": 874, "total_rebounds": 1141},
            "player1_stat_value": shown_value,
            "stat_type": stat_type,
            "score": 0
        }))
    }

    /// Stateless comparison over the resubmitted context, ties in the
    /// guesser's favor, exactly like the real scorer.
    async fn stub_guess(Json(req): Json<GuessRequest>) -> Json<Value> {
        let p1 = req.player1_stats.value_of(&req.stat_type).unwrap();
        let p2 = req.player2_stats.value_of(&req.stat_type).unwrap();
        let correct = if req.guess == 1 { p1 >= p2 } else { p2 >= p1 };
        if correct {
            Json(json!({
                "correct": true, "score": req.score + 1,
                "player1": req.player2_name, "player2": "Franz Wagner",
                "player1_id": req.player2_id, "player2_id": 1630532,
                "player1_stats": req.player2_stats,
                "player2_stats": {"total_points": 4310, "total_assists": 823, "total_rebounds": 1306},
                "player1_stat_value": p2,
                "old_player1": req.player1_name, "old_player2": req.player2_name,
                "player1_stat": p1, "player2_stat": p2,
                "game_over": false
            }))
        } else {
            Json(json!({
                "correct": false, "score": req.score,
                "player1_stat": p1, "player2_stat": p2,
                "game_over": true,
                "player1": req.player1_name, "player2": req.player2_name
            }))
        }
    }

    fn stub_router() -> Router {
        Router::new()
            .route("/start-game", post(stub_start))
            .route("/submit-guess", post(stub_guess))
    }

    #[tokio::test]
    async fn test_start_game_normalizes_category() {
        let base = serve(stub_router()).await;
        let backend = Backend::new(base);

        let round = backend.start_game(Some(StatChoice::Assists)).await.unwrap();
        assert_eq!(round.stat_type, "total_assists");
        assert_eq!(round.player1_stat_value, 902);
        assert_eq!(round.score, 0);
    }

    #[tokio::test]
    async fn test_start_game_defers_unset_category() {
        let base = serve(stub_router()).await;
        let backend = Backend::new(base);

        let round = backend.start_game(None).await.unwrap();
        assert_eq!(round.stat_type, "total_rebounds");
    }

    #[tokio::test]
    async fn test_submit_guess_round_trip() {
        let base = serve(stub_router()).await;
        let backend = Backend::new(base);
        let state = GameState::from_start(&test_round_start());

        // hidden player has 5248 points vs 3195 shown: "higher" is correct
        let outcome = backend.submit_guess(Guess::Higher, &state).await.unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.player2_stat, 5248);
        assert_eq!(outcome.player1_id, Some(state.hidden.id));
        assert!(state.next_round(&outcome).is_some());

        // and "lower" loses, with the reveal still present
        let outcome = backend.submit_guess(Guess::Lower, &state).await.unwrap();
        assert!(!outcome.correct);
        assert!(outcome.game_over);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.player2_stat, 5248);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        // nothing listens here
        let backend = Backend::new("http://127.0.0.1:1/api");
        let err = backend.start_game(None).await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }

    #[tokio::test]
    async fn test_malformed_response_is_decode_error() {
        async fn garbage() -> Json<Value> {
            Json(json!({"unexpected": true}))
        }
        let base = serve(Router::new().route("/start-game", post(garbage))).await;
        let backend = Backend::new(base);

        let err = backend.start_game(None).await.unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}

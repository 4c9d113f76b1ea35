use iced::widget::image::Handle;
use thiserror::Error;

/// Known mirrors of the player-headshot media host, in priority order.
pub fn candidate_urls(player_id: i64) -> Vec<String> {
    vec![
        format!("https://stats.nba.com/media/players/230x185/{player_id}.png"),
        format!("https://cdn.nba.com/headshots/nba/latest/1040x760/{player_id}.png"),
        format!("https://ak-static.cms.nba.com/wp-content/uploads/headshots/nba/latest/260x190/{player_id}.png"),
    ]
}

/// A successfully resolved headshot, ready to hand to an image widget.
#[derive(Debug, Clone)]
pub struct Portrait {
    pub handle: Handle,
    pub source: usize,
}

/// What a player card draws behind the name plate. `Fallback` is recorded on
/// exhaustion so the card settles on its gradient without refetching.
#[derive(Debug, Clone)]
pub enum PortraitFill {
    Image(Handle),
    Fallback,
}

impl From<Option<Portrait>> for PortraitFill {
    fn from(resolved: Option<Portrait>) -> Self {
        match resolved {
            Some(p) => PortraitFill::Image(p.handle),
            None => PortraitFill::Fallback,
        }
    }
}

#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("undecodable image data: {0}")]
    Image(#[from] image::ImageError),
}

/// Resolve a player's headshot over the fixed mirror list.
pub async fn resolve(http: &reqwest::Client, player_id: i64) -> Option<Portrait> {
    let resolved = resolve_from(http, &candidate_urls(player_id)).await;
    if resolved.is_none() {
        log::warn!("all headshot sources failed for player {player_id}");
    }
    resolved
}

/// Try candidates strictly in order and return the first that fetches and
/// decodes; a failed attempt advances immediately. Returns None on
/// exhaustion — the caller falls back to a gradient fill, never an error.
pub async fn resolve_from(http: &reqwest::Client, urls: &[String]) -> Option<Portrait> {
    for (source, url) in urls.iter().enumerate() {
        match fetch_decodable(http, url).await {
            Ok(bytes) => {
                log::debug!("headshot loaded from source {} ({url})", source + 1);
                return Some(Portrait {
                    handle: Handle::from_bytes(bytes),
                    source,
                });
            }
            Err(e) => {
                log::warn!("headshot source {} failed ({url}): {e}", source + 1);
            }
        }
    }
    None
}

async fn fetch_decodable(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let bytes = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    // reject bodies the renderer could not draw (error pages, truncations)
    image::load_from_memory(&bytes)?;
    Ok(bytes.to_vec())
}

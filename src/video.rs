// meta-yt - YouTube metadata client
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Developer interface for video fetching
//!
//! [`Video::fetch`] drives the attempt loop: up to `retries` strictly
//! sequential player calls, each optionally routed through the next proxy
//! in the rotation. Transport and decode failures consume one attempt
//! each; a provider response without `videoDetails` is a definitive
//! rejection and ends the loop at once.

use crate::api::client::InnertubeClient;
use crate::api::player::{PlayerResponse, Thumbnail};
use crate::error::{MetaYtError, Result};
use crate::proxy::{self, ProxyConfig};
use serde_json::Value;
use tracing::{debug, warn};

/// Retry budget used by [`Video::new`]
pub const DEFAULT_RETRIES: u32 = 5;

/// A YouTube video and the metadata the player API reports for it
///
/// A `Video` only exists fully populated: every field below was extracted
/// from a single successful player response. Caption tracks are listed
/// with [`Video::captions`], which reads from the retained [`Video::metadata`]
/// without another network call.
#[derive(Debug, Clone)]
pub struct Video {
    /// Canonical short link, `https://youtu.be/{video_id}`
    pub url: String,

    pub title: String,

    pub video_id: String,

    /// Channel display name
    pub channel: String,

    /// Duration in seconds
    pub duration: u64,

    /// View count at fetch time
    pub views: u64,

    /// URL of the highest-resolution thumbnail
    pub thumbnail: String,

    /// Every thumbnail rendition, in provider order (ascending resolution)
    pub thumbnails: Vec<Thumbnail>,

    pub channel_id: String,

    /// `https://www.youtube.com/channel/{channel_id}`
    pub channel_url: String,

    /// Provider keywords; empty when the video declares none
    pub keywords: Vec<String>,

    /// Full decoded player response
    pub metadata: Value,
}

impl Video {
    /// Fetch a video with the default retry budget and no proxies
    pub async fn new(video_id: &str) -> Result<Self> {
        Self::fetch(video_id, DEFAULT_RETRIES, &[]).await
    }

    /// Fetch a video from the player API
    ///
    /// Up to `retries` sequential attempts are made. When `proxies` is
    /// non-empty, attempt `i` is routed through `proxies[i % len]`.
    ///
    /// # Errors
    ///
    /// - [`MetaYtError::InvalidVideoId`] / [`MetaYtError::InvalidRetries`]
    ///   before any network call when the arguments are unusable.
    /// - [`MetaYtError::VideoFetch`] immediately when the provider answers
    ///   without `videoDetails`; the remaining budget is not spent.
    /// - Otherwise the last attempt's transient error (network, status,
    ///   decode, missing field) once the budget is exhausted.
    pub async fn fetch(video_id: &str, retries: u32, proxies: &[ProxyConfig]) -> Result<Self> {
        Self::fetch_with(&InnertubeClient::new(), video_id, retries, proxies).await
    }

    /// Fetch against a specific [`InnertubeClient`]
    ///
    /// Same contract as [`Video::fetch`]; used to aim the request at a
    /// different host (tests, mirrors).
    pub async fn fetch_with(
        client: &InnertubeClient,
        video_id: &str,
        retries: u32,
        proxies: &[ProxyConfig],
    ) -> Result<Self> {
        if video_id.is_empty() {
            return Err(MetaYtError::InvalidVideoId);
        }
        if retries == 0 {
            return Err(MetaYtError::InvalidRetries);
        }

        let mut last_error = None;
        for attempt in 0..retries {
            let proxy = proxy::select(proxies, attempt as usize);
            if let Some(ref proxy) = proxy {
                debug!(attempt, proxy = proxy.url(), "routing attempt through proxy");
            }

            let outcome = match client.player(video_id, proxy.as_ref()).await {
                Ok(raw) => Self::from_player_response(video_id, raw),
                Err(err) => Err(err),
            };

            match outcome {
                Ok(video) => return Ok(video),
                // Definitive rejection: retrying cannot change the answer.
                Err(err @ MetaYtError::VideoFetch { .. }) => return Err(err),
                Err(err) => {
                    warn!(attempt, video_id, error = %err, "player attempt failed");
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or(MetaYtError::InvalidRetries))
    }

    /// Build the record from one decoded player response
    fn from_player_response(video_id: &str, raw: Value) -> Result<Self> {
        let parsed: PlayerResponse = serde_json::from_value(raw.clone())?;

        let Some(details) = parsed.video_details else {
            let playability = parsed.playability_status.unwrap_or_default();
            return Err(MetaYtError::VideoFetch {
                video_id: video_id.to_string(),
                status: playability.status.unwrap_or_default(),
                reason: playability.reason.unwrap_or_default(),
            });
        };

        let id = details
            .video_id
            .ok_or(MetaYtError::MissingField("videoDetails.videoId"))?;
        let channel_id = details
            .channel_id
            .ok_or(MetaYtError::MissingField("videoDetails.channelId"))?;
        let title = details
            .title
            .ok_or(MetaYtError::MissingField("videoDetails.title"))?;
        let channel = details
            .author
            .ok_or(MetaYtError::MissingField("videoDetails.author"))?;
        let duration = parse_count("videoDetails.lengthSeconds", details.length_seconds)?;
        let views = parse_count("videoDetails.viewCount", details.view_count)?;

        let thumbnails = details
            .thumbnail
            .map(|set| set.thumbnails)
            .unwrap_or_default();
        let thumbnail = thumbnails
            .last()
            .map(|t| t.url.clone())
            .ok_or(MetaYtError::MissingField("videoDetails.thumbnail.thumbnails"))?;

        let url = format!("https://youtu.be/{id}");
        let channel_url = format!("https://www.youtube.com/channel/{channel_id}");

        Ok(Self {
            url,
            title,
            video_id: id,
            channel,
            duration,
            views,
            thumbnail,
            thumbnails,
            channel_id,
            channel_url,
            keywords: details.keywords.unwrap_or_default(),
            metadata: raw,
        })
    }
}

/// Convert one of the provider's stringly-typed counters
fn parse_count(field: &'static str, value: Option<String>) -> Result<u64> {
    let value = value.ok_or(MetaYtError::MissingField(field))?;
    value
        .parse()
        .map_err(|_| MetaYtError::invalid_field(field, value))
}

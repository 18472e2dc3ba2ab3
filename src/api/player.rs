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

//! Serde views over the loosely-typed player response
//!
//! The provider omits whole subtrees freely (videos without captions,
//! details without keywords), so every level here is optional and a
//! missing segment reads as "absent" rather than failing the decode.
//! Field names mirror the provider's camelCase JSON.

use serde::{Deserialize, Serialize};

/// Top-level player response, reduced to the parts this crate reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerResponse {
    #[serde(default)]
    pub video_details: Option<VideoDetails>,

    #[serde(default)]
    pub playability_status: Option<PlayabilityStatus>,
}

/// The `videoDetails` object of a successful player response
///
/// Numeric fields arrive as decimal strings; conversion happens at record
/// construction where a bad value can be reported with its field path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoDetails {
    #[serde(default)]
    pub video_id: Option<String>,

    #[serde(default)]
    pub channel_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Channel display name
    #[serde(default)]
    pub author: Option<String>,

    /// Duration in seconds, as a decimal string
    #[serde(default)]
    pub length_seconds: Option<String>,

    /// View counter, as a decimal string
    #[serde(default)]
    pub view_count: Option<String>,

    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    #[serde(default)]
    pub thumbnail: Option<ThumbnailSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ThumbnailSet {
    #[serde(default)]
    pub thumbnails: Vec<Thumbnail>,
}

/// One thumbnail rendition; the provider lists them in ascending
/// resolution, so the last entry is the best one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,
}

/// The provider's explanation when no `videoDetails` is served
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayabilityStatus {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,
}

// Caption tracklist views, read back out of the retained raw metadata.

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Captions {
    #[serde(default)]
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaptionTrack {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub language_code: Option<String>,

    #[serde(default)]
    pub name: Option<TrackName>,
}

/// Display name of a caption track, as a list of text runs
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TrackName {
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TextRun {
    #[serde(default)]
    pub text: Option<String>,
}

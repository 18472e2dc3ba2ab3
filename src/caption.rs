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

//! Caption track selection
//!
//! A pure filter over metadata that has already been fetched: no network
//! traffic happens here, and a video without caption data is an ordinary
//! outcome (empty list), never an error.

use crate::api::player::Captions;
use crate::video::Video;

/// Marker text YouTube puts in the display name of machine-generated
/// tracks
const AUTO_GENERATED_MARKER: &str = "auto-generated";

/// Reference to one caption track: where its transport lives and what
/// language it carries. The subtitle body itself is never fetched by this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Opaque fetch location of the caption transport
    pub base_url: String,

    /// Provider language tag, e.g. `en` or `pt-BR`
    pub language_code: String,

    /// True for tracks produced by speech recognition
    pub is_generated: bool,
}

impl Video {
    /// List the video's caption tracks, in provider order
    ///
    /// Auto-generated tracks are dropped unless `include_generated` is
    /// set. Tracks without a base URL or language code are skipped, and
    /// missing caption data yields an empty list.
    pub fn captions(&self, include_generated: bool) -> Vec<Caption> {
        let tracks = self
            .metadata
            .get("captions")
            .cloned()
            .and_then(|captions| serde_json::from_value::<Captions>(captions).ok())
            .and_then(|captions| captions.player_captions_tracklist_renderer)
            .map(|renderer| renderer.caption_tracks)
            .unwrap_or_default();

        tracks
            .into_iter()
            .filter_map(|track| {
                // A track with no display-name runs counts as not generated.
                let is_generated = track
                    .name
                    .as_ref()
                    .and_then(|name| name.runs.first())
                    .and_then(|run| run.text.as_deref())
                    .map(|text| text.contains(AUTO_GENERATED_MARKER))
                    .unwrap_or(false);

                if is_generated && !include_generated {
                    return None;
                }

                Some(Caption {
                    base_url: track.base_url?,
                    language_code: track.language_code?,
                    is_generated,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// A Video built straight from raw metadata; only `metadata` matters
    /// for caption selection.
    fn video_with_metadata(metadata: Value) -> Video {
        Video {
            url: "https://youtu.be/abc".to_string(),
            title: "T".to_string(),
            video_id: "abc".to_string(),
            channel: "A".to_string(),
            duration: 10,
            views: 100,
            thumbnail: "t1".to_string(),
            thumbnails: Vec::new(),
            channel_id: "c1".to_string(),
            channel_url: "https://www.youtube.com/channel/c1".to_string(),
            keywords: Vec::new(),
            metadata,
        }
    }

    fn two_track_metadata() -> Value {
        json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {
                            "baseUrl": "u1",
                            "languageCode": "en",
                            "name": {"runs": [{"text": "English"}]}
                        },
                        {
                            "baseUrl": "u2",
                            "languageCode": "en",
                            "name": {"runs": [{"text": "English (auto-generated)"}]}
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn generated_tracks_are_dropped_by_default() {
        let video = video_with_metadata(two_track_metadata());
        let captions = video.captions(false);

        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].base_url, "u1");
        assert!(!captions[0].is_generated);
    }

    #[test]
    fn generated_tracks_are_kept_on_request() {
        let video = video_with_metadata(two_track_metadata());
        let captions = video.captions(true);

        assert_eq!(captions.len(), 2);
        assert_eq!(captions[0].base_url, "u1");
        assert_eq!(captions[1].base_url, "u2");
        assert!(captions[1].is_generated);
    }

    #[test]
    fn missing_caption_sections_yield_empty() {
        for metadata in [
            json!({}),
            json!({"captions": {}}),
            json!({"captions": {"playerCaptionsTracklistRenderer": {}}}),
            json!({"captions": "not an object"}),
        ] {
            let video = video_with_metadata(metadata);
            assert!(video.captions(true).is_empty());
        }
    }

    #[test]
    fn track_without_runs_counts_as_not_generated() {
        let video = video_with_metadata(json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {"baseUrl": "u1", "languageCode": "en", "name": {}},
                        {"baseUrl": "u2", "languageCode": "fr"}
                    ]
                }
            }
        }));

        let captions = video.captions(false);
        assert_eq!(captions.len(), 2);
        assert!(captions.iter().all(|c| !c.is_generated));
    }

    #[test]
    fn tracks_missing_url_or_language_are_skipped() {
        let video = video_with_metadata(json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {"languageCode": "en"},
                        {"baseUrl": "u2"},
                        {"baseUrl": "u3", "languageCode": "de"}
                    ]
                }
            }
        }));

        let captions = video.captions(true);
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].base_url, "u3");
        assert_eq!(captions[0].language_code, "de");
    }
}

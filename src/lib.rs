//! YouTube video metadata without the official Data API
//!
//! `meta-yt` talks to the player endpoint YouTube's own web clients use,
//! retries transient failures (optionally rotating through a proxy list),
//! and exposes the result as a [`Video`] record plus its caption-track
//! listing.
//!
//! ```no_run
//! use meta_yt::Video;
//!
//! # async fn example() -> meta_yt::Result<()> {
//! let video = Video::new("dQw4w9WgXcQ").await?;
//! println!("{} ({} s, {} views)", video.title, video.duration, video.views);
//!
//! for caption in video.captions(false) {
//!     println!("{}: {}", caption.language_code, caption.base_url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod caption;
pub mod error;
pub mod proxy;
pub mod video;

// Re-export main types for easier use
pub use api::client::InnertubeClient;
pub use api::player::Thumbnail;
pub use caption::Caption;
pub use error::{MetaYtError, Result};
pub use proxy::{ProxyConfig, ProxyScheme};
pub use video::{Video, DEFAULT_RETRIES};

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

//! Innertube API surface
//!
//! Request plumbing for the player endpoint plus the serde views over its
//! response. This module knows how to perform a single attempt; the retry
//! policy lives with [`crate::video::Video`].

pub mod client;
pub mod player;

pub use client::InnertubeClient;

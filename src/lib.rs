//! Asynchronous client for the osu! API v2.
//!
//! ```no_run
//! # async fn run() -> osu_client::Result<()> {
//! let client = osu_client::Osuapi::with_credentials(15748, "client secret");
//! let user = client.fetch_user("Sawsha").await?;
//! println!("{} is #{}", user, user.global_rank);
//! client.close();
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

pub mod config;
mod error;
pub mod osuapi;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::osuapi::models::{
    Beatmap, BeatmapCompact, Beatmapset, BeatmapsetType, MostPlayed, Score, ScoreType, User,
    UserBeatmap,
};
pub use crate::osuapi::Osuapi;

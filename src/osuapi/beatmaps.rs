use reqwest::Method;

use super::models::{self, Beatmap};
use super::Osuapi;
use crate::error::{Error, Result};

impl Osuapi {
    pub async fn fetch_beatmap(&self, beatmap_id: u64) -> Result<Beatmap> {
        let json = self
            .request::<()>(Method::GET, &format!("/beatmaps/{}", beatmap_id), None)
            .await?;

        // misses come back as a null `error`, sometimes as a message
        if json.get("error").is_some() {
            return Err(Error::BeatmapNotFound(beatmap_id.to_string()));
        }
        models::from_value(json)
    }
}


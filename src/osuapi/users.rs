use std::fmt::Display;

use reqwest::Method;

use super::models::{self, BeatmapsetType, MostPlayed, Score, ScoreType, User, UserBeatmap};
use super::{is_null_error, Osuapi};
use crate::error::{Error, Result};

impl Osuapi {
    /// Fetches a user by either username or id
    pub async fn fetch_user(&self, user: impl Display) -> Result<User> {
        let user = user.to_string();
        let json = self
            .request(Method::GET, &format!("/users/{}", user), Some(&[("limit", 5)]))
            .await?;

        if is_null_error(&json) {
            return Err(Error::UserNotFound(user));
        }
        models::from_value(json)
    }

    /// `kind` is one of best, firsts or recent
    pub async fn fetch_user_scores(
        &self,
        user: impl Display,
        kind: impl AsRef<str>,
        limit: u32,
        include_fails: bool,
    ) -> Result<Vec<Score>> {
        let kind: ScoreType = kind.as_ref().parse()?;
        let query = [
            ("limit", limit.to_string()),
            ("include_fails", if include_fails { "1" } else { "0" }.to_owned()),
        ];

        let json = self
            .request(
                Method::GET,
                &format!("/users/{}/scores/{}", user, kind),
                Some(&query),
            )
            .await?;
        models::from_value(json)
    }

    /// Lists one of a user's beatmap collections. Entries of the most played
    /// collection also carry the difficulty that was played.
    pub async fn fetch_user_beatmaps(
        &self,
        user: impl Display,
        kind: impl AsRef<str>,
        limit: u32,
    ) -> Result<Vec<UserBeatmap>> {
        let kind: BeatmapsetType = kind.as_ref().parse()?;

        let json = self
            .request(
                Method::GET,
                &format!("/users/{}/beatmapsets/{}", user, kind),
                Some(&[("limit", limit)]),
            )
            .await?;

        let beatmaps = match kind {
            BeatmapsetType::MostPlayed => models::from_value::<Vec<MostPlayed>>(json)?
                .into_iter()
                .map(UserBeatmap::MostPlayed)
                .collect(),
            _ => models::from_value::<Vec<models::Beatmapset>>(json)?
                .into_iter()
                .map(UserBeatmap::Beatmapset)
                .collect(),
        };
        Ok(beatmaps)
    }
}

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, ParseResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Placeholder used for string fields the API left out
pub const MISSING: &str = "None";

/// Builds a typed record out of a raw API payload
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Parses the API's ISO-8601 timestamps, which may carry a bare trailing `Z`
pub fn parse_timestamp(s: &str) -> ParseResult<NaiveDateTime> {
    let trimmed = s.strip_suffix('Z').unwrap_or(s);
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_utc()))
}

mod de {
    use chrono::NaiveDateTime;
    use serde::de::{Deserialize, Deserializer, Error};

    /// null becomes the type's default
    pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| super::parse_timestamp(&s).map_err(D::Error::custom))
            .transpose()
    }
}

fn join<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreType {
    Best,
    Firsts,
    Recent,
}

impl ScoreType {
    pub const ALL: [ScoreType; 3] = [ScoreType::Best, ScoreType::Firsts, ScoreType::Recent];

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreType::Best => "best",
            ScoreType::Firsts => "firsts",
            ScoreType::Recent => "recent",
        }
    }
}

impl FromStr for ScoreType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ScoreType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("Score type must be in {}", join(&ScoreType::ALL)))
            })
    }
}

impl AsRef<str> for ScoreType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of a user's beatmap collections to list
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeatmapsetType {
    Favourite,
    Graveyard,
    Loved,
    MostPlayed,
    Pending,
    Ranked,
}

impl BeatmapsetType {
    pub const ALL: [BeatmapsetType; 6] = [
        BeatmapsetType::Favourite,
        BeatmapsetType::Graveyard,
        BeatmapsetType::Loved,
        BeatmapsetType::MostPlayed,
        BeatmapsetType::Pending,
        BeatmapsetType::Ranked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BeatmapsetType::Favourite => "favourite",
            BeatmapsetType::Graveyard => "graveyard",
            BeatmapsetType::Loved => "loved",
            BeatmapsetType::MostPlayed => "most_played",
            BeatmapsetType::Pending => "pending",
            BeatmapsetType::Ranked => "ranked",
        }
    }
}

impl FromStr for BeatmapsetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BeatmapsetType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "Beatmap type must be in {}",
                    join(&BeatmapsetType::ALL)
                ))
            })
    }
}

impl AsRef<str> for BeatmapsetType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BeatmapsetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Level {
    #[serde(deserialize_with = "de::nullable")]
    pub current: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub progress: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradeCounts {
    #[serde(deserialize_with = "de::nullable")]
    pub ss: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub ssh: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub s: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub sh: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub a: u32,
}

#[derive(Deserialize)]
struct RawUser {
    id: u64,
    username: String,
    avatar_url: Option<String>,
    country_code: Option<String>,
    country: Option<Country>,
    #[serde(default, deserialize_with = "de::timestamp")]
    join_date: Option<NaiveDateTime>,
    profile_order: Option<Vec<String>>,
    playmode: Option<String>,
    playstyle: Option<Vec<String>>,
    follower_count: Option<u64>,
    statistics: Option<RawStatistics>,
}

#[derive(Default, Deserialize)]
struct RawStatistics {
    global_rank: Option<u64>,
    country_rank: Option<u64>,
    pp: Option<f64>,
    hit_accuracy: Option<f64>,
    play_count: Option<u64>,
    level: Option<Level>,
    maximum_combo: Option<u64>,
    total_hits: Option<u64>,
    total_score: Option<u64>,
    grade_counts: Option<GradeCounts>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawUser")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub avatar_url: String,

    pub global_rank: u64,
    pub country_rank: u64,
    pub pp: f64,
    pub accuracy: f64,
    pub play_count: u64,
    pub level: Level,
    pub max_combo: u64,
    pub total_hits: u64,
    pub total_score: u64,
    pub grade_counts: GradeCounts,

    pub country_code: String,
    pub country: Option<Country>,
    pub join_date: Option<NaiveDateTime>,
    pub profile_order: Vec<String>,
    pub playmode: String,
    pub playstyle: Vec<String>,
    pub follower_count: u64,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        let stats = raw.statistics.unwrap_or_default();
        User {
            id: raw.id,
            username: raw.username,
            avatar_url: raw.avatar_url.unwrap_or_default(),

            global_rank: stats.global_rank.unwrap_or(0),
            country_rank: stats.country_rank.unwrap_or(0),
            pp: stats.pp.unwrap_or(0.0),
            accuracy: stats.hit_accuracy.unwrap_or(0.0),
            play_count: stats.play_count.unwrap_or(0),
            level: stats.level.unwrap_or_default(),
            max_combo: stats.maximum_combo.unwrap_or(0),
            total_hits: stats.total_hits.unwrap_or(0),
            total_score: stats.total_score.unwrap_or(0),
            grade_counts: stats.grade_counts.unwrap_or_default(),

            country_code: raw
                .country_code
                .filter(|code| !code.is_empty())
                .unwrap_or_else(|| MISSING.to_owned()),
            country: raw.country,
            join_date: raw.join_date,
            profile_order: raw.profile_order.unwrap_or_default(),
            playmode: raw.playmode.unwrap_or_default(),
            playstyle: raw.playstyle.unwrap_or_default(),
            follower_count: raw.follower_count.unwrap_or(0),
        }
    }
}

impl User {
    /// Discord-style flag emoji for the user's country
    pub fn country_emoji(&self) -> String {
        if self.country_code == MISSING {
            MISSING.to_owned()
        } else {
            format!(":flag_{}:", self.country_code.to_lowercase())
        }
    }

    pub fn formatted_accuracy(&self) -> String {
        format!("{:.2}", self.accuracy)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Hype {
    #[serde(deserialize_with = "de::nullable")]
    pub current: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub required: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Beatmapset {
    #[serde(deserialize_with = "de::nullable")]
    pub id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub user_id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub artist: String,
    #[serde(deserialize_with = "de::nullable")]
    pub artist_unicode: String,
    #[serde(deserialize_with = "de::nullable")]
    pub title: String,
    #[serde(deserialize_with = "de::nullable")]
    pub title_unicode: String,
    #[serde(deserialize_with = "de::nullable")]
    pub creator: String,
    #[serde(deserialize_with = "de::nullable")]
    pub source: String,
    #[serde(deserialize_with = "de::nullable")]
    pub status: String,
    #[serde(deserialize_with = "de::nullable")]
    pub preview_url: String,
    #[serde(deserialize_with = "de::nullable")]
    pub favourite_count: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub play_count: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub offset: i64,
    pub hype: Option<Hype>,
    pub track_id: Option<u64>,
    #[serde(deserialize_with = "de::nullable")]
    pub nsfw: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub spotlight: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub video: bool,

    #[serde(deserialize_with = "de::nullable")]
    pub covers: BTreeMap<String, String>,
}

impl Beatmapset {
    /// Looks up a cover image URL, or describes the valid cover names when
    /// there is no such cover
    pub fn covers(&self, cover: &str) -> Cow<'_, str> {
        match self.covers.get(cover) {
            Some(url) => Cow::Borrowed(url),
            None => {
                let names = self.covers.keys().collect::<Vec<_>>();
                Cow::Owned(format!("Cover not in covers!\nChoose from {}", join(&names)))
            }
        }
    }

    pub fn cover_url(&self, cover: &str) -> Option<&str> {
        self.covers.get(cover).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BeatmapCompact {
    #[serde(deserialize_with = "de::nullable")]
    pub id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub beatmapset_id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub user_id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub difficulty_rating: f64,
    #[serde(deserialize_with = "de::nullable")]
    pub mode: String,
    #[serde(deserialize_with = "de::nullable")]
    pub status: String,
    #[serde(deserialize_with = "de::nullable")]
    pub total_length: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub version: String,
}

#[derive(Default, Deserialize)]
struct RawParentSet {
    #[serde(flatten)]
    set: Beatmapset,
    #[serde(default, deserialize_with = "de::timestamp")]
    submitted_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "de::timestamp")]
    ranked_date: Option<NaiveDateTime>,
}

#[derive(Deserialize)]
struct RawBeatmap {
    id: u64,
    #[serde(default, deserialize_with = "de::nullable")]
    beatmapset_id: u64,
    #[serde(default, deserialize_with = "de::nullable")]
    difficulty_rating: f64,
    #[serde(default, deserialize_with = "de::nullable")]
    mode: String,
    #[serde(default, deserialize_with = "de::nullable")]
    status: String,
    #[serde(default, deserialize_with = "de::nullable")]
    version: String,
    #[serde(default, deserialize_with = "de::nullable")]
    cs: f64,
    #[serde(default, deserialize_with = "de::nullable")]
    drain: f64,
    #[serde(default, deserialize_with = "de::nullable")]
    ar: f64,
    #[serde(default, deserialize_with = "de::nullable")]
    bpm: f64,
    #[serde(default, deserialize_with = "de::nullable")]
    max_combo: u64,
    #[serde(default, deserialize_with = "de::nullable")]
    passcount: u64,
    #[serde(default, deserialize_with = "de::nullable")]
    playcount: u64,
    #[serde(default, deserialize_with = "de::nullable")]
    url: String,
    #[serde(default, deserialize_with = "de::timestamp")]
    last_updated: Option<NaiveDateTime>,
    #[serde(default)]
    beatmapset: RawParentSet,
}

/// A single difficulty along with the parts of its beatmapset worth having
/// at hand
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawBeatmap")]
pub struct Beatmap {
    pub id: u64,
    pub beatmapset_id: u64,
    pub difficulty_rating: f64,
    pub mode: String,
    pub status: String,
    /// Difficulty name
    pub version: String,
    pub cs: f64,
    pub drain: f64,
    pub ar: f64,
    pub bpm: f64,
    pub max_combo: u64,
    pub pass_count: u64,
    pub play_count: u64,
    pub url: String,

    pub artist: String,
    pub title: String,
    pub creator: String,
    pub favourite_count: u64,
    pub nsfw: bool,

    pub submitted_date: Option<NaiveDateTime>,
    pub ranked_date: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,

    pub beatmapset: Beatmapset,
}

impl From<RawBeatmap> for Beatmap {
    fn from(raw: RawBeatmap) -> Self {
        let parent = raw.beatmapset;
        Beatmap {
            id: raw.id,
            beatmapset_id: raw.beatmapset_id,
            difficulty_rating: raw.difficulty_rating,
            mode: raw.mode,
            status: raw.status,
            version: raw.version,
            cs: raw.cs,
            drain: raw.drain,
            ar: raw.ar,
            bpm: raw.bpm,
            max_combo: raw.max_combo,
            pass_count: raw.passcount,
            play_count: raw.playcount,
            url: raw.url,

            artist: parent.set.artist.clone(),
            title: parent.set.title.clone(),
            creator: parent.set.creator.clone(),
            favourite_count: parent.set.favourite_count,
            nsfw: parent.set.nsfw,

            submitted_date: parent.submitted_date,
            ranked_date: parent.ranked_date,
            last_updated: raw.last_updated,

            beatmapset: parent.set,
        }
    }
}

impl Beatmap {
    pub fn covers(&self, cover: &str) -> Cow<'_, str> {
        self.beatmapset.covers(cover)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreStatistics {
    #[serde(deserialize_with = "de::nullable")]
    pub count_50: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub count_100: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub count_300: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub count_geki: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub count_katu: u32,
    #[serde(deserialize_with = "de::nullable")]
    pub count_miss: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Score {
    #[serde(deserialize_with = "de::nullable")]
    pub id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub user_id: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub accuracy: f64,
    #[serde(deserialize_with = "de::nullable")]
    pub max_combo: u64,
    /// Short mod codes in the order the API lists them
    #[serde(deserialize_with = "de::nullable")]
    pub mods: Vec<String>,
    #[serde(deserialize_with = "de::nullable")]
    pub rank: String,
    #[serde(deserialize_with = "de::nullable")]
    pub pp: f64,
    #[serde(deserialize_with = "de::nullable")]
    pub passed: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub perfect: bool,
    #[serde(deserialize_with = "de::nullable")]
    pub score: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub mode: String,
    #[serde(deserialize_with = "de::nullable")]
    pub replay: bool,
    #[serde(deserialize_with = "de::timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(deserialize_with = "de::nullable")]
    pub statistics: ScoreStatistics,

    #[serde(deserialize_with = "de::nullable")]
    pub beatmapset: Beatmapset,
    #[serde(deserialize_with = "de::nullable")]
    pub beatmap: BeatmapCompact,
}

/// Entry of a user's most played list
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MostPlayed {
    #[serde(deserialize_with = "de::nullable")]
    pub count: u64,
    #[serde(deserialize_with = "de::nullable")]
    pub beatmapset: Beatmapset,
    #[serde(deserialize_with = "de::nullable")]
    pub beatmap: BeatmapCompact,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UserBeatmap {
    Beatmapset(Beatmapset),
    MostPlayed(MostPlayed),
}

impl UserBeatmap {
    pub fn beatmapset(&self) -> &Beatmapset {
        match self {
            UserBeatmap::Beatmapset(set) => set,
            UserBeatmap::MostPlayed(entry) => &entry.beatmapset,
        }
    }

    pub fn beatmap(&self) -> Option<&BeatmapCompact> {
        match self {
            UserBeatmap::Beatmapset(_) => None,
            UserBeatmap::MostPlayed(entry) => Some(&entry.beatmap),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn user_json() -> Value {
        json!({
            "id": 14895608,
            "username": "Sawsha",
            "avatar_url": "https://a.ppy.sh/14895608",
            "country_code": "US",
            "country": { "code": "US", "name": "United States" },
            "join_date": "2019-08-06T21:36:51+00:00",
            "profile_order": ["me", "recent_activity", "top_ranks"],
            "playmode": "osu",
            "playstyle": ["mouse", "keyboard"],
            "follower_count": 12,
            "statistics": {
                "global_rank": null,
                "country_rank": null,
                "pp": 0,
                "hit_accuracy": 97.12345,
                "play_count": 4021,
                "level": { "current": 88, "progress": 41 },
                "maximum_combo": 1204,
                "total_hits": 500000,
                "total_score": 1234567890,
                "grade_counts": { "ss": 1, "ssh": 0, "s": 20, "sh": 2, "a": 90 }
            }
        })
    }

    fn beatmap_json() -> Value {
        json!({
            "id": 129891,
            "beatmapset_id": 39804,
            "difficulty_rating": 4.58,
            "mode": "osu",
            "status": "ranked",
            "version": "Insane",
            "cs": 4,
            "drain": 6.5,
            "ar": 9,
            "bpm": 180.04,
            "max_combo": 1078,
            "passcount": 100,
            "playcount": 2000,
            "url": "https://osu.ppy.sh/beatmaps/129891",
            "last_updated": null,
            "beatmapset": {
                "id": 39804,
                "artist": "xi",
                "title": "FREEDOM DiVE",
                "creator": "Nakagawa-Kanon",
                "favourite_count": 7000,
                "nsfw": false,
                "submitted_date": "2011-10-28T14:54:53Z",
                "ranked_date": null,
                "covers": {
                    "card": "https://assets.ppy.sh/card.jpg",
                    "cover": "https://assets.ppy.sh/cover.jpg",
                    "list": "https://assets.ppy.sh/list.jpg"
                }
            }
        })
    }

    #[test]
    fn null_global_rank_becomes_zero() {
        let user: User = from_value(user_json()).unwrap();
        assert_eq!(user.global_rank, 0);
        assert_eq!(user.country_rank, 0);
        assert_eq!(user.pp, 0.0);
        assert_eq!(user.level.current, 88);
        assert_eq!(user.grade_counts.s, 20);
        assert_eq!(user.formatted_accuracy(), "97.12");
        assert_eq!(user.country_emoji(), ":flag_us:");
        assert_eq!(user.to_string(), "Sawsha");
        assert_eq!(
            user.join_date,
            Some(NaiveDate::from_ymd(2019, 8, 6).and_hms(21, 36, 51))
        );
    }

    #[test]
    fn missing_statistics_fall_back_to_defaults() {
        let user: User = from_value(json!({ "id": 2, "username": "peppy" })).unwrap();
        assert_eq!(user.global_rank, 0);
        assert_eq!(user.play_count, 0);
        assert_eq!(user.country_code, MISSING);
        assert_eq!(user.country_emoji(), MISSING);
        assert!(user.profile_order.is_empty());
        assert!(user.join_date.is_none());
    }

    #[test]
    fn null_last_updated_is_none() {
        let beatmap: Beatmap = from_value(beatmap_json()).unwrap();
        assert!(beatmap.last_updated.is_none());
        assert!(beatmap.ranked_date.is_none());
        assert_eq!(
            beatmap.submitted_date,
            Some(NaiveDate::from_ymd(2011, 10, 28).and_hms(14, 54, 53))
        );
        assert_eq!(beatmap.title, "FREEDOM DiVE");
        assert_eq!(beatmap.artist, "xi");
        assert_eq!(beatmap.favourite_count, 7000);
        assert_eq!(beatmap.version, "Insane");
        assert_eq!(beatmap.pass_count, 100);
        assert_eq!(beatmap.beatmapset.id, 39804);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let mut payload = beatmap_json();
        payload["last_updated"] = json!("last tuesday");
        let err = from_value::<Beatmap>(payload).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn parses_timestamps_with_and_without_offsets() {
        let expected = NaiveDate::from_ymd(2021, 3, 13).and_hms(12, 34, 56);
        assert_eq!(parse_timestamp("2021-03-13T12:34:56Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2021-03-13T12:34:56").unwrap(), expected);
        assert_eq!(parse_timestamp("2021-03-13T12:34:56+00:00").unwrap(), expected);
        assert!(parse_timestamp("13/03/2021").is_err());
    }

    #[test]
    fn cover_lookup() {
        let beatmap: Beatmap = from_value(beatmap_json()).unwrap();
        assert_eq!(beatmap.covers("card"), "https://assets.ppy.sh/card.jpg");
        assert_eq!(
            beatmap.beatmapset.cover_url("list"),
            Some("https://assets.ppy.sh/list.jpg")
        );

        let message = beatmap.covers("slimcover");
        assert_eq!(message, "Cover not in covers!\nChoose from card, cover, list");
        assert!(beatmap.beatmapset.cover_url("slimcover").is_none());
    }

    #[test]
    fn compact_records_ignore_extra_keys() {
        let compact: BeatmapCompact = from_value(json!({
            "id": 1,
            "beatmapset_id": 2,
            "difficulty_rating": 5.5,
            "mode": "osu",
            "status": "ranked",
            "total_length": 120,
            "user_id": 3,
            "version": "Extra",
            "checksum": "deadbeef",
            "failtimes": { "fail": [], "exit": [] }
        }))
        .unwrap();
        assert_eq!(compact.version, "Extra");
        assert_eq!(compact.total_length, 120);
    }

    #[test]
    fn score_defaults() {
        let score: Score = from_value(json!({
            "id": 3,
            "user_id": 2,
            "accuracy": 0.9812,
            "max_combo": 900,
            "mods": ["HD", "DT"],
            "rank": "S",
            "pp": null,
            "passed": true,
            "perfect": false,
            "created_at": "2021-03-13T12:34:56+00:00",
            "statistics": { "count_300": 800, "count_100": 12, "count_50": 1, "count_miss": 0 },
            "beatmap": { "id": 1, "version": "Insane" },
            "beatmapset": { "id": 4, "title": "Song", "covers": {} }
        }))
        .unwrap();
        assert_eq!(score.pp, 0.0);
        assert_eq!(score.mods, vec!["HD", "DT"]);
        assert_eq!(score.statistics.count_300, 800);
        assert_eq!(score.beatmap.version, "Insane");
        assert_eq!(score.beatmapset.title, "Song");
        assert!(score.created_at.is_some());
    }

    #[test]
    fn score_type_parsing() {
        for kind in ScoreType::ALL.iter() {
            assert_eq!(kind.as_str().parse::<ScoreType>().unwrap(), *kind);
        }

        let err = "worst".parse::<ScoreType>().unwrap_err();
        assert_eq!(err.to_string(), "Score type must be in best, firsts, recent");
    }

    #[test]
    fn beatmapset_type_parsing() {
        assert_eq!(
            "most_played".parse::<BeatmapsetType>().unwrap(),
            BeatmapsetType::MostPlayed
        );

        let err = "hated".parse::<BeatmapsetType>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Beatmap type must be in favourite, graveyard, loved, most_played, pending, ranked"
        );
    }
}

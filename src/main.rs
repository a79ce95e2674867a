#[macro_use]
extern crate log;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use chrono_humanize::HumanTime;
use structopt::StructOpt;

use osu_client::{Beatmap, BeatmapsetType, Config, Osuapi, Score, ScoreType, User, UserBeatmap};

#[derive(StructOpt)]
struct Opt {
    /// Path to the config file (defaults to config.toml in current dir)
    #[structopt(short = "c", long = "config")]
    config: Option<PathBuf>,

    /// Log more, can be repeated
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Show a user's profile
    User { user: String },

    /// List a user's scores
    Scores {
        user: String,
        /// One of best, firsts, recent
        #[structopt(short = "k", long = "kind", default_value = "best")]
        kind: ScoreType,
        #[structopt(short = "l", long = "limit", default_value = "5")]
        limit: u32,
        #[structopt(long = "include-fails")]
        include_fails: bool,
    },

    /// List one of a user's beatmap collections
    Beatmaps {
        user: String,
        /// One of favourite, graveyard, loved, most_played, pending, ranked
        #[structopt(short = "k", long = "kind", default_value = "favourite")]
        kind: BeatmapsetType,
        #[structopt(short = "l", long = "limit", default_value = "5")]
        limit: u32,
    },

    /// Show a single beatmap difficulty
    Beatmap { id: u64 },

    /// Show a user's profile along with their best scores
    Profile {
        user: String,
        #[structopt(short = "l", long = "limit", default_value = "5")]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();

    let config_path = opt.config.unwrap_or_else(|| PathBuf::from("config.toml"));
    let config = Config::from_path(&config_path)?;

    let verbosity = if config.debug { 4 } else { 1 + opt.verbose };
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity)
        .init()?;

    let osuapi = Osuapi::new(config);
    let result = run(&osuapi, opt.command).await;
    osuapi.close();
    result
}

async fn run(osuapi: &Osuapi, command: Command) -> Result<()> {
    match command {
        Command::User { user } => {
            let user = osuapi
                .fetch_user(&user)
                .await
                .with_context(|| format!("fetching user {}", user))?;
            print_user(&user);
        }

        Command::Scores {
            user,
            kind,
            limit,
            include_fails,
        } => {
            let scores = osuapi
                .fetch_user_scores(&user, kind, limit, include_fails)
                .await
                .with_context(|| format!("fetching {} scores of {}", kind, user))?;
            scores.iter().for_each(print_score);
        }

        Command::Beatmaps { user, kind, limit } => {
            let beatmaps = osuapi
                .fetch_user_beatmaps(&user, kind, limit)
                .await
                .with_context(|| format!("fetching {} beatmaps of {}", kind, user))?;
            for entry in beatmaps {
                let set = entry.beatmapset();
                match &entry {
                    UserBeatmap::MostPlayed(played) => println!(
                        "{} - {} [{}] played {} times",
                        set.artist, set.title, played.beatmap.version, played.count
                    ),
                    UserBeatmap::Beatmapset(_) => {
                        println!("{} - {} ({}) by {}", set.artist, set.title, set.status, set.creator)
                    }
                }
            }
        }

        Command::Beatmap { id } => {
            let beatmap = osuapi
                .fetch_beatmap(id)
                .await
                .with_context(|| format!("fetching beatmap {}", id))?;
            print_beatmap(&beatmap);
        }

        Command::Profile { user, limit } => {
            debug!("fetching profile and best scores of {} concurrently", user);
            let (profile, scores) = futures::try_join!(
                osuapi.fetch_user(&user),
                osuapi.fetch_user_scores(&user, ScoreType::Best, limit, false),
            )
            .with_context(|| format!("fetching profile of {}", user))?;
            print_user(&profile);
            scores.iter().for_each(print_score);
        }
    }

    Ok(())
}

fn print_user(user: &User) {
    println!("{} ({}) {}", user.username, user.id, user.country_emoji());
    println!(
        "  #{} global, #{} in {}",
        user.global_rank, user.country_rank, user.country_code
    );
    println!(
        "  {:.2}pp, {}% accuracy, level {}",
        user.pp,
        user.formatted_accuracy(),
        user.level.current
    );
    println!(
        "  {} plays, max combo {}",
        user.play_count, user.max_combo
    );
    if let Some(joined) = user.join_date {
        println!("  joined {}", HumanTime::from(Utc.from_utc_datetime(&joined)));
    }
}

fn print_score(score: &Score) {
    let mods = if score.mods.is_empty() {
        String::from("NM")
    } else {
        score.mods.join("")
    };
    println!(
        "{} - {} [{}] +{} {} {:.2}% {:.2}pp",
        score.beatmapset.artist,
        score.beatmapset.title,
        score.beatmap.version,
        mods,
        score.rank,
        score.accuracy * 100.0,
        score.pp
    );
}

fn print_beatmap(beatmap: &Beatmap) {
    println!(
        "{} - {} [{}] mapped by {}",
        beatmap.artist, beatmap.title, beatmap.version, beatmap.creator
    );
    println!(
        "  {:.2}* AR{} CS{} HP{} {}bpm, {} ({})",
        beatmap.difficulty_rating,
        beatmap.ar,
        beatmap.cs,
        beatmap.drain,
        beatmap.bpm,
        beatmap.status,
        beatmap.url
    );
    if let Some(ranked) = beatmap.ranked_date {
        println!("  ranked {}", HumanTime::from(Utc.from_utc_datetime(&ranked)));
    }
    println!("  cover: {}", beatmap.covers("cover"));
}

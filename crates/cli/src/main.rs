#![deny(warnings)]

use anyhow::Context;
use charades_core::animation::{Animator, GestureSequence};
use charades_core::config::{
    resolve_optional_u64, resolve_u32_with_default, Env, GameConfig, RoundCount, ScoringRules,
    StdEnv, TimeLimit, DEFAULT_MAX_ROUNDS, DEFAULT_TIME_LIMIT_SECS, ENV_MAX_ROUNDS, ENV_SEED,
    ENV_TIME_LIMIT_SECS,
};
use charades_core::game::{AnswerOutcome, Game, GameSummary, RoundEvent, TimerEvent, WordBank};
use charades_core::matcher::{check_alternatives, MatchResult};
use charades_core::pose::{compute_pose, phase, Gesture, CYCLE_LENGTH};
use charades_core::skeleton::{Proportions, Skeleton};
use charades_core::speech::{ChannelRecognizer, SpeechError, SpeechRecognizer, Utterance};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

const ROUND_BREAK: Duration = Duration::from_secs(2);

#[derive(Parser, Debug)]
#[command(name = "charades")]
#[command(about = "Stick-figure charades: procedural gestures and spoken-answer matching")]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the gesture catalog.
    Gestures,
    /// Print the pose of one gesture at a frame.
    Pose {
        gesture: String,
        #[arg(long, default_value_t = 0)]
        frame: u64,
        /// Include 2D joint positions.
        #[arg(long)]
        skeleton: bool,
    },
    /// Run the animator over a gesture sequence and print one JSON line per frame.
    Animate {
        /// Comma-separated gesture names; defaults to idle.
        #[arg(long, value_delimiter = ',')]
        gestures: Vec<String>,
        /// Word from the built-in bank whose gestures to play.
        #[arg(long, conflicts_with = "gestures")]
        word: Option<String>,
        #[arg(long, default_value_t = CYCLE_LENGTH)]
        frames: u64,
    },
    /// Check a spoken answer; separate ranked alternatives with '|'.
    Check { answer: String, target: String },
    /// Play an interactive game on stdin.
    Play {
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        time_limit: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerCommand {
    Hint,
    Skip,
    Pause,
    Resume,
    Quit,
}

impl PlayerCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            ":hint" => Some(Self::Hint),
            ":skip" => Some(Self::Skip),
            ":pause" => Some(Self::Pause),
            ":resume" => Some(Self::Resume),
            ":quit" | ":q" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    match args.command {
        Command::Gestures => {
            for g in Gesture::ALL {
                println!("{:<12} {:?}", g.name(), g.category());
            }
        }
        Command::Pose {
            gesture,
            frame,
            skeleton,
        } => {
            let pose = compute_pose(&gesture, frame);
            let mut out = serde_json::json!({
                "gesture": gesture,
                "frame": frame,
                "t": phase(frame),
                "pose": pose,
            });
            if skeleton {
                out["skeleton"] =
                    serde_json::to_value(Skeleton::from_pose(&pose, &Proportions::default()))?;
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Animate {
            gestures,
            word,
            frames,
        } => animate(gestures, word, frames)?,
        Command::Check { answer, target } => {
            let utterance = Utterance::parse_line(&answer);
            let out = match check_alternatives(utterance.transcripts(), &target) {
                Some(ranked) => serde_json::to_value(ranked)?,
                None => serde_json::to_value(MatchResult {
                    is_correct: false,
                    similarity: 0.0,
                })?,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Play {
            rounds,
            time_limit,
            seed,
        } => {
            let cfg = build_config(rounds, time_limit, seed, &StdEnv)?;
            tracing::info!(
                rounds = cfg.rounds.get(),
                time_limit_secs = cfg.time_limit.secs,
                "config loaded"
            );
            run_game(cfg).await?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_config(
    rounds: Option<u32>,
    time_limit: Option<u32>,
    seed: Option<u64>,
    env: &impl Env,
) -> anyhow::Result<GameConfig> {
    let rounds = resolve_u32_with_default(rounds, ENV_MAX_ROUNDS, env, DEFAULT_MAX_ROUNDS)?;
    let secs =
        resolve_u32_with_default(time_limit, ENV_TIME_LIMIT_SECS, env, DEFAULT_TIME_LIMIT_SECS)?;

    Ok(GameConfig {
        rounds: RoundCount::new(rounds)?,
        time_limit: TimeLimit::new(secs)?,
        scoring: ScoringRules::default(),
        seed: resolve_optional_u64(seed, ENV_SEED, env)?,
    })
}

fn animate(gestures: Vec<String>, word: Option<String>, frames: u64) -> anyhow::Result<()> {
    let sequence = match word {
        Some(w) => {
            let bank = WordBank::builtin();
            let entry = bank
                .find(&w)
                .with_context(|| format!("unknown word: {w}"))?;
            entry.sequence()
        }
        None if gestures.is_empty() => None,
        None => Some(GestureSequence::new(gestures)?),
    };

    let mut animator = Animator::new();
    animator.start(sequence);
    for _ in 0..frames {
        let Some(frame) = animator.tick() else {
            break;
        };
        println!("{}", serde_json::to_string(&frame)?);
    }
    animator.stop();
    Ok(())
}

/// Runs on its own thread: stdin has no cancellable async reader.
fn read_stdin(transcripts: mpsc::Sender<String>, commands: mpsc::Sender<PlayerCommand>) {
    for line in std::io::stdin().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!(error = %e, "reading stdin failed");
                break;
            }
        };
        let sent = match PlayerCommand::parse(&line) {
            Some(cmd) => commands.blocking_send(cmd).is_ok(),
            None => transcripts.blocking_send(line).is_ok(),
        };
        if !sent {
            break;
        }
    }
}

async fn run_game(cfg: GameConfig) -> anyhow::Result<()> {
    let (transcript_tx, recognizer) = ChannelRecognizer::channel(16);
    let (command_tx, mut command_rx) = mpsc::channel::<PlayerCommand>(16);
    std::thread::spawn(move || read_stdin(transcript_tx, command_tx));

    println!("Say (type) the word the figure is acting out. Separate alternatives with '|'.");
    println!("Commands: :hint :skip :pause :resume :quit");

    let mut game = Game::new(cfg, WordBank::builtin());
    let summary = play(&mut game, &recognizer, &mut command_rx).await;
    print_summary(&summary);
    Ok(())
}

/// Drives one game to completion. The clock restarts with every round, so a
/// round always gets its full time limit no matter how long the break was.
async fn play<R: SpeechRecognizer>(
    game: &mut Game,
    recognizer: &R,
    commands: &mut mpsc::Receiver<PlayerCommand>,
) -> GameSummary {
    let mut clock = tokio::time::interval(Duration::from_secs(1));
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut summary = announce(game.start(), &mut clock);

    loop {
        if let Some(summary) = summary.take() {
            return summary;
        }
        tokio::select! {
            _ = clock.tick() => match game.tick() {
                TimerEvent::Tick { remaining } if remaining % 10 == 0 || remaining <= 5 => {
                    println!("  {remaining}s left");
                }
                TimerEvent::TimeUp { word } => {
                    println!("Time's up! The answer was \"{word}\".");
                    tokio::time::sleep(ROUND_BREAK).await;
                    summary = announce(game.next_round(), &mut clock);
                }
                _ => {}
            },
            heard = recognizer.listen() => match heard {
                Ok(utterance) => match game.submit(&utterance) {
                    AnswerOutcome::Correct { transcript, earned, .. } => {
                        println!("Correct! \"{transcript}\" +{earned}");
                        tokio::time::sleep(ROUND_BREAK).await;
                        summary = announce(game.next_round(), &mut clock);
                    }
                    AnswerOutcome::Incorrect { transcript, similarity } => {
                        println!("\"{transcript}\" is not it ({:.0}% close). Try again!", similarity * 100.0);
                    }
                    AnswerOutcome::NotPlaying => {}
                },
                Err(SpeechError::Closed) => summary = Some(game.end()),
                Err(e) => println!("{e}"),
            },
            Some(cmd) = commands.recv() => match cmd {
                PlayerCommand::Hint => match game.use_hint() {
                    Some(hint) => println!("Hint: {hint}"),
                    None => println!("No hint available."),
                },
                PlayerCommand::Skip => summary = announce(game.skip(), &mut clock),
                PlayerCommand::Pause => {
                    if game.pause() {
                        println!("Paused.");
                    }
                }
                PlayerCommand::Resume => {
                    if game.resume() {
                        println!("Resumed.");
                    }
                }
                PlayerCommand::Quit => summary = Some(game.end()),
            },
        }
    }
}

/// Prints the round that just started and restarts the round clock; returns
/// the summary once the game is over.
fn announce(event: RoundEvent, clock: &mut Interval) -> Option<GameSummary> {
    match event {
        RoundEvent::Started { round, word } => {
            let gestures = if word.gestures.is_empty() {
                "idle".to_owned()
            } else {
                word.gestures.join(" -> ")
            };
            println!();
            println!("Round {round} ({}): the figure performs {gestures}", word.category.as_str());
            clock.reset();
            None
        }
        RoundEvent::Finished(summary) => Some(summary),
        RoundEvent::NotPlaying => None,
    }
}

fn print_summary(summary: &GameSummary) {
    println!();
    println!("Final score: {}", summary.score);
    println!(
        "Correct {} / Wrong {} / Skipped {} / Hints {}",
        summary.stats.correct, summary.stats.wrong, summary.stats.skipped, summary.stats.hints_used
    );
    println!("{}", summary.grade.message());
}

#[cfg(test)]
mod tests {
    use super::*;
    use charades_core::config::MapEnv;

    #[test]
    fn env_fills_in_missing_flags() {
        let env = MapEnv::default()
            .with_var(ENV_MAX_ROUNDS, "3")
            .with_var(ENV_SEED, "99");
        let cfg = build_config(None, Some(45), None, &env).expect("valid config");
        assert_eq!(cfg.rounds.get(), 3);
        assert_eq!(cfg.time_limit.secs, 45);
        assert_eq!(cfg.seed, Some(99));
    }

    #[test]
    fn zero_rounds_is_rejected() {
        assert!(build_config(Some(0), None, None, &MapEnv::default()).is_err());
    }

    fn one_word_bank_game(rounds: u32) -> Game {
        let config = GameConfig {
            rounds: RoundCount::new(rounds).expect("non-zero"),
            seed: Some(1),
            ..GameConfig::default()
        };
        let rabbit = *WordBank::builtin().find("토끼").expect("built-in word");
        Game::new(config, WordBank::from_entries(vec![rabbit]))
    }

    #[tokio::test(start_paused = true)]
    async fn each_round_gets_the_full_time_limit() {
        let (tx, recognizer) = ChannelRecognizer::channel(4);
        let (_command_tx, mut commands) = mpsc::channel(4);
        let mut game = one_word_bank_game(2);

        tx.send("토끼".to_owned()).await.unwrap();
        let second = tokio::spawn(async move {
            // lands halfway between the new round's start and its first tick
            tokio::time::sleep(ROUND_BREAK + Duration::from_millis(500)).await;
            tx.send("토끼".to_owned()).await.unwrap();
            tx
        });

        let summary = play(&mut game, &recognizer, &mut commands).await;
        assert_eq!(summary.stats.correct, 2);
        assert_eq!(summary.score, 2 * (100 + 30 * 10));
        drop(second.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn skipped_round_starts_a_fresh_second() {
        let (tx, recognizer) = ChannelRecognizer::channel(4);
        let (command_tx, mut commands) = mpsc::channel(4);
        let mut game = one_word_bank_game(2);

        let driver = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(900)).await;
            command_tx.send(PlayerCommand::Skip).await.unwrap();
            tokio::time::sleep(Duration::from_millis(500)).await;
            tx.send("토끼".to_owned()).await.unwrap();
            (tx, command_tx)
        });

        let summary = play(&mut game, &recognizer, &mut commands).await;
        assert_eq!(summary.stats.skipped, 1);
        assert_eq!(summary.score, 100 + 30 * 10);
        drop(driver.await.unwrap());
    }

    #[test]
    fn player_commands_are_prefixed() {
        assert_eq!(PlayerCommand::parse(" :skip "), Some(PlayerCommand::Skip));
        assert_eq!(PlayerCommand::parse(":q"), Some(PlayerCommand::Quit));
        assert_eq!(PlayerCommand::parse("skip"), None);
    }
}

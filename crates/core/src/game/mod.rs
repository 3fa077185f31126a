//! Round, timer and scoring state machine.
//!
//! Every transition returns an event describing what happened; the driver
//! (CLI loop, UI) decides how to present it and when to call the next
//! transition. Nothing here sleeps or spawns.

mod words;

use crate::animation::GestureSequence;
use crate::config::GameConfig;
use crate::matcher::check_alternatives;
use crate::speech::Utterance;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashSet;

pub use words::{WordBank, WordCategory, WordEntry};

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct GameStats {
    pub correct: u32,
    pub wrong: u32,
    pub skipped: u32,
    pub hints_used: u32,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Perfect,
    Great,
    Good,
    Fair,
    TryAgain,
}

impl Grade {
    pub fn from_correct(correct: u32, rounds: u32) -> Self {
        let rate = u64::from(correct) * 100;
        let rounds = u64::from(rounds.max(1));
        if rate >= rounds * 100 {
            Self::Perfect
        } else if rate >= rounds * 80 {
            Self::Great
        } else if rate >= rounds * 60 {
            Self::Good
        } else if rate >= rounds * 40 {
            Self::Fair
        } else {
            Self::TryAgain
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! Every word guessed.",
            Self::Great => "Great job!",
            Self::Good => "Good! Keep practicing.",
            Self::Fair => "Not bad, you'll do better next time.",
            Self::TryAgain => "So close. Don't give up!",
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GameSummary {
    pub score: u32,
    pub rounds: u32,
    pub stats: GameStats,
    pub grade: Grade,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GameSnapshot {
    pub round: u32,
    pub max_rounds: u32,
    pub score: u32,
    pub remaining_secs: u32,
    pub paused: bool,
    pub playing: bool,
    pub word: Option<WordEntry>,
    pub stats: GameStats,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum RoundEvent {
    Started { round: u32, word: WordEntry },
    Finished(GameSummary),
    NotPlaying,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u32 },
    /// The clock ran out; the round counts as wrong.
    TimeUp { word: &'static str },
    Paused,
    /// No round clock is running.
    Idle,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum AnswerOutcome {
    Correct {
        transcript: String,
        similarity: f32,
        earned: u32,
    },
    Incorrect {
        transcript: String,
        similarity: f32,
    },
    NotPlaying,
}

pub struct Game {
    config: GameConfig,
    bank: WordBank,
    rng: StdRng,
    round: u32,
    score: u32,
    remaining: u32,
    playing: bool,
    clock_running: bool,
    paused: bool,
    current: Option<WordEntry>,
    used: HashSet<&'static str>,
    stats: GameStats,
}

impl Game {
    pub fn new(config: GameConfig, bank: WordBank) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            remaining: config.time_limit.secs,
            config,
            bank,
            rng,
            round: 1,
            score: 0,
            playing: false,
            clock_running: false,
            paused: false,
            current: None,
            used: HashSet::new(),
            stats: GameStats::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.current.as_ref()
    }

    pub fn current_sequence(&self) -> Option<GestureSequence> {
        self.current.as_ref().and_then(WordEntry::sequence)
    }

    pub fn start(&mut self) -> RoundEvent {
        self.reset();
        self.playing = true;
        tracing::info!(rounds = self.config.rounds.get(), "game started");
        self.start_round()
    }

    pub fn reset(&mut self) {
        self.round = 1;
        self.score = 0;
        self.remaining = self.config.time_limit.secs;
        self.playing = false;
        self.clock_running = false;
        self.paused = false;
        self.current = None;
        self.used.clear();
        self.stats = GameStats::default();
    }

    /// Advances the round clock by one second.
    pub fn tick(&mut self) -> TimerEvent {
        if !self.playing || !self.clock_running {
            return TimerEvent::Idle;
        }
        if self.paused {
            return TimerEvent::Paused;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return TimerEvent::Tick {
                remaining: self.remaining,
            };
        }

        self.clock_running = false;
        self.stats.wrong += 1;
        let word = self.current.map(|w| w.word).unwrap_or_default();
        tracing::info!(round = self.round, word, "time up");
        TimerEvent::TimeUp { word }
    }

    /// Checks each ranked alternative against the current word; the first
    /// accepted one ends the round and scores it.
    pub fn submit(&mut self, utterance: &Utterance) -> AnswerOutcome {
        let word = match self.current {
            Some(w) if self.playing && self.clock_running => w.word,
            _ => return AnswerOutcome::NotPlaying,
        };

        let Some(ranked) = check_alternatives(utterance.transcripts(), word) else {
            return AnswerOutcome::Incorrect {
                transcript: String::new(),
                similarity: 0.0,
            };
        };

        if !ranked.result.is_correct {
            tracing::debug!(transcript = %ranked.transcript, similarity = ranked.result.similarity, "wrong answer");
            return AnswerOutcome::Incorrect {
                transcript: ranked.transcript,
                similarity: ranked.result.similarity,
            };
        }

        self.clock_running = false;
        self.stats.correct += 1;
        let earned = self.config.scoring.award(self.remaining);
        self.score = self.score.saturating_add(earned);
        tracing::info!(round = self.round, word, earned, score = self.score, "correct answer");
        AnswerOutcome::Correct {
            transcript: ranked.transcript,
            similarity: ranked.result.similarity,
            earned,
        }
    }

    /// Reveals the hint for the current word at a score penalty. Only while
    /// the round clock runs.
    pub fn use_hint(&mut self) -> Option<&'static str> {
        let word = self.current.filter(|_| self.playing && self.clock_running)?;
        self.stats.hints_used += 1;
        self.score = self.score.saturating_sub(self.config.scoring.hint_penalty);
        Some(word.hint)
    }

    pub fn skip(&mut self) -> RoundEvent {
        if !self.playing {
            return RoundEvent::NotPlaying;
        }
        self.stats.skipped += 1;
        tracing::info!(round = self.round, "round skipped");
        self.next_round()
    }

    pub fn next_round(&mut self) -> RoundEvent {
        if !self.playing {
            return RoundEvent::NotPlaying;
        }
        self.clock_running = false;
        self.round += 1;
        self.start_round()
    }

    /// Returns whether the game was newly paused.
    pub fn pause(&mut self) -> bool {
        let changed = self.playing && !self.paused;
        self.paused |= changed;
        changed
    }

    /// Returns whether the game was newly resumed.
    pub fn resume(&mut self) -> bool {
        let changed = self.paused;
        self.paused = false;
        changed
    }

    pub fn end(&mut self) -> GameSummary {
        self.playing = false;
        self.clock_running = false;
        self.paused = false;
        let summary = self.summary();
        tracing::info!(score = summary.score, grade = ?summary.grade, "game over");
        summary
    }

    pub fn summary(&self) -> GameSummary {
        let rounds = self.config.rounds.get();
        GameSummary {
            score: self.score,
            rounds,
            stats: self.stats,
            grade: Grade::from_correct(self.stats.correct, rounds),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round,
            max_rounds: self.config.rounds.get(),
            score: self.score,
            remaining_secs: self.remaining,
            paused: self.paused,
            playing: self.playing,
            word: self.current,
            stats: self.stats,
        }
    }

    fn start_round(&mut self) -> RoundEvent {
        if self.round > self.config.rounds.get() {
            return RoundEvent::Finished(self.end());
        }
        let Some(word) = self.draw_word() else {
            tracing::warn!("word bank is empty");
            return RoundEvent::Finished(self.end());
        };

        self.current = Some(word);
        self.remaining = self.config.time_limit.secs;
        self.clock_running = true;
        tracing::info!(round = self.round, category = word.category.as_str(), "round started");
        RoundEvent::Started {
            round: self.round,
            word,
        }
    }

    /// Picks a word not yet used this game; once every word has been shown
    /// the history starts over.
    fn draw_word(&mut self) -> Option<WordEntry> {
        if self.bank.words().iter().all(|w| self.used.contains(w.word)) {
            self.used.clear();
        }
        let fresh: Vec<&WordEntry> = self
            .bank
            .words()
            .iter()
            .filter(|w| !self.used.contains(w.word))
            .collect();
        let word = fresh.choose(&mut self.rng).map(|w| **w)?;
        self.used.insert(word.word);
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RoundCount, TimeLimit};

    fn game(rounds: u32, secs: u32) -> Game {
        let config = GameConfig {
            rounds: RoundCount::new(rounds).unwrap(),
            time_limit: TimeLimit::new(secs).unwrap(),
            seed: Some(42),
            ..GameConfig::default()
        };
        Game::new(config, WordBank::builtin())
    }

    fn started_word(event: RoundEvent) -> WordEntry {
        match event {
            RoundEvent::Started { word, .. } => word,
            other => panic!("expected a started round, got {other:?}"),
        }
    }

    #[test]
    fn correct_answer_scores_base_plus_time_bonus() {
        let mut g = game(5, 30);
        let word = started_word(g.start());

        for _ in 0..5 {
            g.tick();
        }
        let outcome = g.submit(&Utterance::single(word.word));
        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                transcript: word.word.to_owned(),
                similarity: 1.0,
                earned: 100 + 25 * 10,
            }
        );
        assert_eq!(g.snapshot().score, 350);
        assert_eq!(g.snapshot().stats.correct, 1);

        // the round is over until the driver advances it
        assert_eq!(g.submit(&Utterance::single(word.word)), AnswerOutcome::NotPlaying);
        assert_eq!(g.tick(), TimerEvent::Idle);
    }

    #[test]
    fn lower_ranked_alternative_can_win() {
        let mut g = game(1, 30);
        let word = started_word(g.start());
        let line = format!("zzzz | {}", word.word);
        match g.submit(&Utterance::parse_line(&line)) {
            AnswerOutcome::Correct { transcript, .. } => assert_eq!(transcript, word.word),
            other => panic!("expected correct, got {other:?}"),
        }
    }

    #[test]
    fn wrong_answer_keeps_the_clock_running() {
        let mut g = game(1, 30);
        started_word(g.start());
        match g.submit(&Utterance::single("zzzzzzzz")) {
            AnswerOutcome::Incorrect { similarity, .. } => assert!(similarity < 0.8),
            other => panic!("expected incorrect, got {other:?}"),
        }
        assert_eq!(g.tick(), TimerEvent::Tick { remaining: 29 });
    }

    #[test]
    fn clock_runs_out() {
        let mut g = game(2, 3);
        let word = started_word(g.start());
        assert_eq!(g.tick(), TimerEvent::Tick { remaining: 2 });
        assert_eq!(g.tick(), TimerEvent::Tick { remaining: 1 });
        assert_eq!(g.tick(), TimerEvent::TimeUp { word: word.word });
        assert_eq!(g.tick(), TimerEvent::Idle);
        assert_eq!(g.snapshot().stats.wrong, 1);
    }

    #[test]
    fn pause_freezes_the_clock() {
        let mut g = game(1, 10);
        started_word(g.start());
        assert!(g.pause());
        assert!(!g.pause());
        assert_eq!(g.tick(), TimerEvent::Paused);
        assert_eq!(g.snapshot().remaining_secs, 10);
        assert!(g.resume());
        assert_eq!(g.tick(), TimerEvent::Tick { remaining: 9 });
    }

    #[test]
    fn hint_penalty_never_goes_negative() {
        let mut g = game(2, 30);
        let word = started_word(g.start());
        assert_eq!(g.use_hint(), Some(word.hint));
        assert_eq!(g.snapshot().score, 0);

        assert_eq!(g.use_hint(), Some(word.hint));
        g.submit(&Utterance::single(word.word));
        assert_eq!(g.snapshot().score, 400);
        assert_eq!(g.snapshot().stats.hints_used, 2);
    }

    #[test]
    fn hints_are_free_between_rounds() {
        let mut g = game(2, 30);
        let word = started_word(g.start());
        g.submit(&Utterance::single(word.word));
        assert_eq!(g.use_hint(), None);

        let mut g = game(2, 3);
        started_word(g.start());
        for _ in 0..3 {
            g.tick();
        }
        assert_eq!(g.use_hint(), None);
        assert_eq!(g.snapshot().score, 0);
        assert_eq!(g.snapshot().stats.hints_used, 0);

        let next = started_word(g.next_round());
        assert_eq!(g.use_hint(), Some(next.hint));
    }

    #[test]
    fn game_finishes_after_last_round() {
        let mut g = game(2, 30);
        started_word(g.start());
        started_word(g.skip());
        match g.skip() {
            RoundEvent::Finished(summary) => {
                assert_eq!(summary.stats.skipped, 2);
                assert_eq!(summary.grade, Grade::TryAgain);
                assert_eq!(summary.rounds, 2);
            }
            other => panic!("expected finish, got {other:?}"),
        }
        assert!(!g.is_playing());
        assert_eq!(g.skip(), RoundEvent::NotPlaying);
        assert_eq!(g.use_hint(), None);
    }

    #[test]
    fn words_do_not_repeat_until_bank_is_exhausted() {
        let bank_size = WordBank::builtin().len() as u32;
        let mut g = game(bank_size + 1, 30);
        let mut seen = HashSet::new();
        seen.insert(started_word(g.start()).word);
        for _ in 1..bank_size {
            assert!(seen.insert(started_word(g.next_round()).word));
        }
        // the 51st round starts over with a fresh pool
        started_word(g.next_round());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = started_word(game(3, 30).start());
        let b = started_word(game(3, 30).start());
        assert_eq!(a, b);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_correct(5, 5), Grade::Perfect);
        assert_eq!(Grade::from_correct(4, 5), Grade::Great);
        assert_eq!(Grade::from_correct(3, 5), Grade::Good);
        assert_eq!(Grade::from_correct(2, 5), Grade::Fair);
        assert_eq!(Grade::from_correct(1, 5), Grade::TryAgain);
    }

    #[test]
    fn current_sequence_follows_the_word() {
        let mut g = game(1, 30);
        let word = started_word(g.start());
        let seq = g.current_sequence().expect("built-in words all have gestures");
        assert_eq!(seq.names().len(), word.gestures.len());
    }
}

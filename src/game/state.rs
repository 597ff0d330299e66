//! The game controller: owns every piece of mutable session state and advances
//! it one frame or one clock tick at a time. Nothing here touches the browser.

use rand::Rng;

use super::clock::{ClockEvent, GameClock, Phase};
use super::feedback::{Feedback, FeedbackSlot, Outcome, Score};
use super::spawner::WordPool;
use super::word::{FallingWord, Point, VocabularyEntry};
use super::zones::{CategoryZone, layout_zones, zone_at};
use crate::config::GameConfig;

pub struct Game<R: Rng> {
    cfg: GameConfig,
    rng: R,
    clock: GameClock,
    pool: WordPool,
    words: Vec<FallingWord>,
    zones: [CategoryZone; 3],
    score: Score,
    feedback: FeedbackSlot,
}

impl<R: Rng> Game<R> {
    pub fn new(cfg: GameConfig, vocabulary: &[VocabularyEntry], rng: R) -> Self {
        Self {
            clock: GameClock::new(cfg.countdown_secs, cfg.play_secs),
            pool: WordPool::new(vocabulary),
            words: Vec::new(),
            zones: layout_zones(&cfg),
            score: Score::default(),
            feedback: FeedbackSlot::default(),
            cfg,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn countdown(&self) -> u32 {
        self.clock.countdown()
    }

    pub fn time_remaining(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn words(&self) -> &[FallingWord] {
        &self.words
    }

    pub fn zones(&self) -> &[CategoryZone] {
        &self.zones
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn visible_feedback(&self, now: f64) -> Option<&Feedback> {
        self.feedback.visible(now, self.cfg.feedback_duration_ms)
    }

    /// Countdown timer callback. On `Started` the caller should cancel the
    /// countdown timer and start the play timer; the first word is already
    /// spawned.
    pub fn countdown_tick(&mut self) -> ClockEvent {
        let event = self.clock.tick_countdown();
        if event == ClockEvent::Started {
            log::info!("countdown finished, {} words in pool", self.pool.len());
            self.spawn_or_finish();
        }
        event
    }

    pub fn play_tick(&mut self) -> ClockEvent {
        let event = self.clock.tick_play();
        if event == ClockEvent::TimeUp {
            log::info!("time up, final score {}", self.score.value());
        }
        event
    }

    /// Advance one display frame with the latest fingertip position. Returns
    /// the outcomes of words that left the board this frame.
    pub fn frame(&mut self, fingertip: Option<Point>, now: f64) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        if self.clock.phase() != Phase::Playing {
            return outcomes;
        }
        if self.words.is_empty() && !self.spawn_or_finish() {
            return outcomes;
        }

        let height = self.cfg.canvas_height;
        let mut missed = Vec::new();
        self.words.retain_mut(|w| {
            w.advance(fingertip);
            if w.is_missed(height) {
                missed.push(w.entry);
                return false;
            }
            true
        });
        for entry in missed {
            log::debug!("'{}' fell off the canvas", entry.text);
            self.resolve(Outcome::MissedOffscreen, now, &mut outcomes);
        }

        for w in &mut self.words {
            if w.try_pickup(fingertip, self.cfg.pickup_radius) {
                log::debug!("picked up '{}'", w.entry.text);
            }
        }

        let release_radius = self.cfg.release_radius;
        let mut released = Vec::new();
        self.words.retain(|w| {
            if w.should_release(fingertip, release_radius) {
                released.push(w.clone());
                return false;
            }
            true
        });
        for w in released {
            let outcome = self.classify(&w);
            log::debug!("released '{}' at ({:.0}, {:.0})", w.entry.text, w.pos.x, w.pos.y);
            self.resolve(outcome, now, &mut outcomes);
        }

        outcomes
    }

    fn classify(&self, word: &FallingWord) -> Outcome {
        match zone_at(&self.zones, word.pos) {
            Some(zone) if zone.category == word.entry.category => Outcome::Scored,
            Some(_) => Outcome::Misclassified {
                correct: word.entry.category,
            },
            None => Outcome::Unclassified,
        }
    }

    fn resolve(&mut self, outcome: Outcome, now: f64, outcomes: &mut Vec<Outcome>) {
        let points = self.cfg.points;
        match outcome {
            Outcome::Scored => self.score.award(points.correct),
            Outcome::Misclassified { .. } => self.score.penalize(points.wrong_zone),
            Outcome::Unclassified => self.score.penalize(points.unclassified),
            Outcome::MissedOffscreen => self.score.penalize(points.missed),
        }
        log::info!("{:?}, score now {}", outcome, self.score.value());
        self.feedback.show(outcome, &points, now);
        outcomes.push(outcome);
    }

    /// Spawn the next word, or end the game when the pool is dry. Returns
    /// whether play continues.
    fn spawn_or_finish(&mut self) -> bool {
        match self.pool.spawn(&mut self.rng, &self.cfg) {
            Some(word) => {
                log::debug!(
                    "spawned '{}' at x={:.0} speed={:.2}",
                    word.entry.text,
                    word.pos.x,
                    word.speed
                );
                self.words.push(word);
                true
            }
            None => {
                if self.clock.end() {
                    log::info!("vocabulary exhausted, final score {}", self.score.value());
                }
                false
            }
        }
    }
}

#[cfg(test)]
impl<R: Rng> Game<R> {
    pub(crate) fn set_score(&mut self, points: u32) {
        self.score = Score::new(points);
    }

    pub(crate) fn words_mut(&mut self) -> &mut Vec<FallingWord> {
        &mut self.words
    }
}

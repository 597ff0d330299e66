//! Draws each vocabulary entry exactly once per game.

use rand::Rng;

use super::word::{FallingWord, Point, VocabularyEntry};
use crate::config::GameConfig;

/// Entries not yet shown this game. Exhaustion is terminal; the pool is never
/// refilled.
pub struct WordPool {
    remaining: Vec<VocabularyEntry>,
}

impl WordPool {
    pub fn new(entries: &[VocabularyEntry]) -> Self {
        Self {
            remaining: entries.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remove a uniformly random entry and turn it into a falling word with a
    /// random start column and fall speed. `None` once the pool is empty.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, cfg: &GameConfig) -> Option<FallingWord> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.remaining.len());
        let entry = self.remaining.swap_remove(idx);
        let x = rng.gen_range(cfg.spawn_margin..=cfg.canvas_width - cfg.spawn_margin);
        let speed = rng.gen_range(cfg.fall_speed_min..=cfg.fall_speed_max);
        Some(FallingWord::new(entry, Point::new(x, cfg.spawn_y), speed))
    }
}

//! Score keeping and the single-slot feedback message.

use super::word::Category;
use crate::config::Points;

/// Non-negative running score; penalties floor at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn new(points: u32) -> Self {
        Self(points)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn award(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }

    pub fn penalize(&mut self, points: u32) {
        self.0 = self.0.saturating_sub(points);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);

    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.0, self.1, self.2)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub color: Rgb,
    pub issued_at: f64,
}

/// How a word left the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Scored,
    Misclassified { correct: Category },
    Unclassified,
    MissedOffscreen,
}

impl Outcome {
    pub fn message(self, points: &Points) -> (String, Rgb) {
        match self {
            Outcome::Scored => (format!("答對了！ +{} 分！", points.correct), Rgb::GREEN),
            Outcome::Misclassified { correct } => {
                (format!("答錯了！這是屬於「{}」", correct.label()), Rgb::RED)
            }
            Outcome::Unclassified => ("未放入正確區塊！".to_string(), Rgb::ORANGE),
            Outcome::MissedOffscreen => (format!("詞彙掉落，分數 -{}！", points.missed), Rgb::RED),
        }
    }
}

/// Latest message wins; nothing is queued.
#[derive(Default)]
pub struct FeedbackSlot {
    current: Option<Feedback>,
}

impl FeedbackSlot {
    pub fn show(&mut self, outcome: Outcome, points: &Points, now: f64) {
        let (text, color) = outcome.message(points);
        self.current = Some(Feedback {
            text,
            color,
            issued_at: now,
        });
    }

    pub fn visible(&self, now: f64, duration_ms: f64) -> Option<&Feedback> {
        self.current
            .as_ref()
            .filter(|f| now < f.issued_at + duration_ms)
    }
}

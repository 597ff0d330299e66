//! Game lifecycle timing: a pre-game countdown followed by the play timer.
//!
//! [`GameClock`] holds the pure countdown state and phase; the browser
//! side drives it through [`Interval`] handles, one per timer, each of which
//! clears its `setInterval` when cancelled or dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Countdown,
    Playing,
    Ended,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Countdown => "countdown",
            Phase::Playing => "playing",
            Phase::Ended => "ended",
        }
    }
}

/// What a one-second tick changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEvent {
    None,
    Started,
    TimeUp,
}

pub struct GameClock {
    phase: Phase,
    countdown: u32,
    remaining: u32,
}

impl GameClock {
    pub fn new(countdown_secs: u32, play_secs: u32) -> Self {
        Self {
            phase: Phase::Countdown,
            countdown: countdown_secs,
            remaining: play_secs,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Pre-game tick. Returns `Started` exactly once, on the tick that brings
    /// the countdown to zero.
    pub fn tick_countdown(&mut self) -> ClockEvent {
        if self.phase != Phase::Countdown {
            return ClockEvent::None;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.phase = Phase::Playing;
            return ClockEvent::Started;
        }
        ClockEvent::None
    }

    /// Play tick; ignored outside `Playing`.
    pub fn tick_play(&mut self) -> ClockEvent {
        if self.phase != Phase::Playing {
            return ClockEvent::None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = Phase::Ended;
            return ClockEvent::TimeUp;
        }
        ClockEvent::None
    }

    /// End early (pool exhausted). Returns false if already ended.
    pub fn end(&mut self) -> bool {
        if self.phase == Phase::Ended {
            return false;
        }
        self.phase = Phase::Ended;
        true
    }
}

/// Whether a countdown tick should hand over to the play timer. A game that
/// ended on the very tick it started (empty pool) gets no play timer.
pub fn play_timer_due(event: ClockEvent, phase: Phase) -> bool {
    event == ClockEvent::Started && phase == Phase::Playing
}

// --- Browser timers ----------------------------------------------------------

/// A running `setInterval`. Cancelling clears the interval immediately but keeps
/// the closure alive until the handle drops, so a timer may cancel itself from
/// inside its own callback.
pub struct Interval {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period_ms: i32, f: impl FnMut() + 'static) -> Result<Self> {
        let win = web_sys::window().ok_or(GameError::NoWindow)?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            id: Some(id),
            _callback: callback,
        })
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(win) = web_sys::window() {
                win.clear_interval_with_handle(id);
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Handles for the two one-second timers.
#[derive(Default)]
pub struct ClockTimers {
    pub countdown: Option<Interval>,
    pub play: Option<Interval>,
}

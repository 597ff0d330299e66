//! Hand-tracked word sorting.
//!
//! Words fall one at a time from the top of the canvas; the player pinches
//! them with an index fingertip (reported by a pose model running in the page)
//! and drops them into one of three category zones along the bottom edge.
//!
//! The pure logic lives in the submodules and is driven by [`state::Game`].
//! This module is the browser shell around it: it owns the canvas, the frame
//! loop, the two one-second timers and the pose slot, all on the page's single
//! thread.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, window};

use crate::config::GameConfig;
use crate::error::{GameError, Result};

pub mod clock;
pub mod feedback;
pub mod pose;
mod render;
pub mod spawner;
pub mod state;
pub mod word;
pub mod zones;

pub use clock::{ClockEvent, Phase};
pub use feedback::Outcome;
pub use state::Game;
pub use word::{Category, FallingWord, Point, VocabularyEntry};

use clock::{ClockTimers, Interval};
use pose::PoseSlot;

const CANVAS_ID: &str = "word-sort-canvas";
const TICK_MS: i32 = 1000;

/// Browser-side session: controller plus the surfaces it draws on.
struct Session {
    ctx: CanvasRenderingContext2d,
    video: Option<HtmlVideoElement>,
    game: Game<SmallRng>,
    pose: PoseSlot,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    static TIMERS: RefCell<ClockTimers> = RefCell::new(ClockTimers::default());
}

pub fn start(cfg: GameConfig, video: Option<HtmlVideoElement>) -> Result<()> {
    cfg.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    // Create / reuse the canvas
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(CANVAS_ID) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| GameError::Canvas(format!("#{CANVAS_ID} is not a canvas")))?,
        None => {
            let c: HtmlCanvasElement = doc
                .create_element("canvas")?
                .dyn_into()
                .map_err(|_| GameError::Canvas("could not create canvas".into()))?;
            c.set_id(CANVAS_ID);
            doc.body().ok_or(GameError::NoDocument)?.append_child(&c)?;
            c
        }
    };
    canvas.set_width(cfg.canvas_width as u32);
    canvas.set_height(cfg.canvas_height as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| GameError::Canvas("no 2d context".into()))?
        .dyn_into()
        .map_err(|_| GameError::Canvas("unexpected context type".into()))?;

    if let Some(v) = &video {
        v.set_width(cfg.canvas_width as u32);
        v.set_height(cfg.canvas_height as u32);
    }

    log::info!(
        "starting word sort: {}x{} canvas, {}s countdown, {}s play, {} words, mirror_pose_x={}",
        cfg.canvas_width,
        cfg.canvas_height,
        cfg.countdown_secs,
        cfg.play_secs,
        crate::VOCABULARY.len(),
        cfg.mirror_pose_x
    );

    let game = Game::new(cfg, crate::VOCABULARY, SmallRng::from_entropy());
    let session = Session {
        ctx,
        video,
        game,
        pose: PoseSlot::default(),
    };
    let first_loop = SESSION.with(|s| s.replace(Some(session)).is_none());

    // A restart replaces the session; stale timers go with it.
    TIMERS.with(|t| {
        let mut timers = t.borrow_mut();
        timers.play = None;
        timers.countdown = Some(Interval::start(TICK_MS, on_countdown_tick)?);
        Ok::<_, GameError>(())
    })?;

    if first_loop {
        start_frame_loop();
    }
    Ok(())
}

fn on_countdown_tick() {
    let (event, phase) = SESSION.with(|s| {
        s.borrow_mut()
            .as_mut()
            .map(|session| (session.game.countdown_tick(), session.game.phase()))
            .unwrap_or((ClockEvent::None, Phase::Countdown))
    });
    if event != ClockEvent::Started {
        return;
    }
    TIMERS.with(|t| {
        let mut timers = t.borrow_mut();
        if let Some(countdown) = timers.countdown.as_mut() {
            countdown.cancel();
        }
        if !clock::play_timer_due(event, phase) {
            log::info!("phase -> ended before play began");
            return;
        }
        log::info!("phase -> playing");
        match Interval::start(TICK_MS, on_play_tick) {
            Ok(play) => timers.play = Some(play),
            Err(err) => log::error!("could not start play timer: {err}"),
        }
    });
}

fn on_play_tick() {
    let event = SESSION.with(|s| {
        s.borrow_mut()
            .as_mut()
            .map(|session| session.game.play_tick())
            .unwrap_or(ClockEvent::None)
    });
    if event == ClockEvent::TimeUp {
        log::info!("phase -> ended");
        TIMERS.with(|t| {
            if let Some(play) = t.borrow_mut().play.as_mut() {
                play.cancel();
            }
        });
    }
}

/// Pose callback entry: store the fingertip of the first hand, in displayed
/// coordinates, replacing whatever was there.
pub fn submit_hands(results: &JsValue) {
    SESSION.with(|s| {
        if let Some(session) = s.borrow().as_ref() {
            let cfg = session.game.config();
            let tip = pose::fingertip_from_js(results).map(|(x, y)| {
                pose::to_display_space(x, y, cfg.canvas_width, cfg.mirror_pose_x)
            });
            session.pose.publish(tip);
        }
    });
}

pub fn current_score() -> u32 {
    SESSION.with(|s| s.borrow().as_ref().map(|s| s.game.score()).unwrap_or(0))
}

pub fn current_phase() -> Option<Phase> {
    SESSION.with(|s| s.borrow().as_ref().map(|s| s.game.phase()))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow_mut().as_mut() {
                frame_tick(session, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(f: &FrameCallback) {
    if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
        if let Err(err) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }
}

fn frame_tick(session: &mut Session, now: f64) {
    let was_playing = session.game.phase() == Phase::Playing;
    let tip = session.pose.latest();
    session.game.frame(tip, now);
    if was_playing && session.game.phase() == Phase::Ended {
        log::info!("phase -> ended");
        TIMERS.with(|t| {
            if let Some(play) = t.borrow_mut().play.as_mut() {
                play.cancel();
            }
        });
    }
    render::render_frame(&session.ctx, session.video.as_ref(), &session.game, now);
}

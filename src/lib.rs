//! Word Sort core crate.
//!
//! A hand-tracked classroom game: vocabulary falls down a webcam-backed canvas
//! and the player drags each word into its category zone. The pose model runs
//! in the page and reports fingertip positions through [`submit_hands`]; all
//! gameplay, timing and drawing happens here.

use wasm_bindgen::prelude::*;
use web_sys::HtmlVideoElement;

pub mod config;
pub mod error;
pub mod game;
mod logging;

pub use config::{GameConfig, Points};
pub use error::GameError;
pub use game::{Category, ClockEvent, Game, Outcome, Phase, VocabularyEntry};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// Vocabulary: educational technology terms, five per category.
// -----------------------------------------------------------------------------

pub const VOCABULARY: &[VocabularyEntry] = &[
    VocabularyEntry::new("簡報軟體", Category::Tools),
    VocabularyEntry::new("學習管理系統", Category::Tools),
    VocabularyEntry::new("視訊會議", Category::Tools),
    VocabularyEntry::new("電子白板", Category::Tools),
    VocabularyEntry::new("測驗工具", Category::Tools),
    VocabularyEntry::new("人工智慧", Category::DigitalTech),
    VocabularyEntry::new("虛擬實境", Category::DigitalTech),
    VocabularyEntry::new("擴增實境", Category::DigitalTech),
    VocabularyEntry::new("大數據", Category::DigitalTech),
    VocabularyEntry::new("雲端運算", Category::DigitalTech),
    VocabularyEntry::new("建構主義", Category::LearningTheory),
    VocabularyEntry::new("行為主義", Category::LearningTheory),
    VocabularyEntry::new("認知負荷", Category::LearningTheory),
    VocabularyEntry::new("社會學習", Category::LearningTheory),
    VocabularyEntry::new("翻轉課堂", Category::LearningTheory),
];

// -----------------------------------------------------------------------------
// Page-facing entrypoints
// -----------------------------------------------------------------------------

/// Start (or restart) a game. `config_json` may override any subset of
/// [`GameConfig`] fields; `video` is the camera element the pose model reads.
#[wasm_bindgen]
pub fn start_game(
    config_json: Option<String>,
    video: Option<HtmlVideoElement>,
) -> Result<(), JsValue> {
    let cfg = load_config(config_json.as_deref()).inspect_err(|err| {
        log::error!("rejected config: {err}");
    })?;
    game::start(cfg, video).map_err(|err| {
        log::error!("could not start game: {err}");
        err.into()
    })
}

#[cfg(feature = "serde_json")]
fn load_config(json: Option<&str>) -> Result<GameConfig, GameError> {
    match json {
        Some(json) if !json.trim().is_empty() => GameConfig::from_json(json),
        _ => Ok(GameConfig::default()),
    }
}

#[cfg(not(feature = "serde_json"))]
fn load_config(json: Option<&str>) -> Result<GameConfig, GameError> {
    if json.is_some_and(|j| !j.trim().is_empty()) {
        log::warn!("built without serde_json; ignoring config override");
    }
    Ok(GameConfig::default())
}

/// Hand-pose result callback: an array of hands, each with a `keypoints`
/// array of `{x, y}` objects. Only the first hand's index fingertip is used.
#[wasm_bindgen]
pub fn submit_hands(results: JsValue) {
    game::submit_hands(&results);
}

#[wasm_bindgen]
pub fn current_score() -> u32 {
    game::current_score()
}

/// "countdown", "playing", "ended", or "" before the first `start_game`.
#[wasm_bindgen]
pub fn current_phase() -> String {
    game::current_phase()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default()
}

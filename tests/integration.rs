// Integration tests (native) for the `word-sort` crate.
// These tests avoid wasm-specific functionality and drive the public game
// controller the way the browser shell does: clock ticks plus frames.

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_sort::{ClockEvent, Game, GameConfig, Outcome, Phase, VOCABULARY};
use word_sort::game::Point;

fn new_game(seed: u64) -> Game<StdRng> {
    Game::new(GameConfig::default(), VOCABULARY, StdRng::seed_from_u64(seed))
}

fn start(game: &mut Game<StdRng>) {
    while game.countdown_tick() != ClockEvent::Started {}
}

#[test]
fn score_never_negative_when_every_word_is_missed() {
    let mut game = new_game(11);
    start(&mut game);
    let mut misses = 0;
    for frame in 0..20_000 {
        misses += game
            .frame(None, frame as f64 * 16.0)
            .iter()
            .filter(|o| **o == Outcome::MissedOffscreen)
            .count();
        if game.phase() == Phase::Ended {
            break;
        }
    }
    assert_eq!(misses, VOCABULARY.len());
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), Phase::Ended);
}

#[test]
fn fingertip_drag_into_matching_zone_scores() {
    let mut game = new_game(5);
    start(&mut game);
    let word = game.words()[0].clone();
    let zone = *game
        .zones()
        .iter()
        .find(|z| z.category == word.entry.category)
        .unwrap();
    let target = zone.rect.center();

    // Hover over the word to pick it up.
    let mut now = 0.0;
    let mut tip = Point::new(word.pos.x, word.pos.y + word.speed);
    game.frame(Some(tip), now);
    assert!(game.words()[0].dragging);

    // Carry it sideways to the zone column; it keeps falling on its own.
    tip.x = target.x;
    while game.words().first().is_some_and(|w| w.pos.y < target.y) {
        now += 16.0;
        tip.y = game.words()[0].pos.y;
        let outcomes = game.frame(Some(tip), now);
        assert!(outcomes.is_empty(), "released early: {outcomes:?}");
    }

    // Let go inside the zone.
    let outcomes = game.frame(None, now + 16.0);
    assert_eq!(outcomes, vec![Outcome::Scored]);
    assert_eq!(game.score(), 10);
    assert_eq!(game.visible_feedback(now + 16.0).unwrap().text, "答對了！ +10 分！");
}

#[test]
fn play_timer_expiry_stops_the_game() {
    let mut game = new_game(2);
    start(&mut game);
    let mut time_up = 0;
    for _ in 0..120 {
        if game.play_tick() == ClockEvent::TimeUp {
            time_up += 1;
        }
    }
    assert_eq!(time_up, 1);
    assert_eq!(game.time_remaining(), 0);
    let pool_before = game.pool_len();
    for frame in 0..2_000 {
        assert!(game.frame(None, frame as f64).is_empty());
    }
    assert_eq!(game.pool_len(), pool_before, "no spawns after the game ended");
}

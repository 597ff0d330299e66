//! Latest-value slot between the pose detector callback and the frame loop.

use std::cell::Cell;

use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;

use super::word::Point;

/// Index of the index-finger tip in the hand keypoint list.
pub const INDEX_FINGER_TIP: u32 = 8;

/// Most-recent-result-wins cell. The detector overwrites it whenever it has a
/// new result; the frame loop reads it once per tick.
#[derive(Default)]
pub struct PoseSlot(Cell<Option<Point>>);

impl PoseSlot {
    pub fn publish(&self, fingertip: Option<Point>) {
        self.0.set(fingertip);
    }

    pub fn latest(&self) -> Option<Point> {
        self.0.get()
    }
}

/// Map detector coordinates into displayed (mirrored) canvas space.
pub fn to_display_space(x: f64, y: f64, canvas_width: f64, mirror_x: bool) -> Point {
    if mirror_x {
        Point::new(canvas_width - x, y)
    } else {
        Point::new(x, y)
    }
}

/// Pull `results[0].keypoints[8]` out of a detector result list. Anything
/// missing or non-numeric reads as "no fingertip".
pub fn fingertip_from_js(results: &JsValue) -> Option<(f64, f64)> {
    if !Array::is_array(results) {
        log::debug!("pose result is not an array");
        return None;
    }
    let hands = Array::from(results);
    let hand = hands.get(0);
    if hand.is_undefined() || hand.is_null() {
        return None;
    }
    let keypoints = Reflect::get(&hand, &JsValue::from_str("keypoints")).ok()?;
    if !Array::is_array(&keypoints) {
        log::debug!("hand without keypoints array");
        return None;
    }
    let tip = Array::from(&keypoints).get(INDEX_FINGER_TIP);
    if tip.is_undefined() || tip.is_null() {
        return None;
    }
    let x = Reflect::get(&tip, &JsValue::from_str("x")).ok()?.as_f64()?;
    let y = Reflect::get(&tip, &JsValue::from_str("y")).ok()?.as_f64()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keeps_only_latest_value() {
        let slot = PoseSlot::default();
        assert_eq!(slot.latest(), None);
        slot.publish(Some(Point::new(1.0, 2.0)));
        slot.publish(Some(Point::new(3.0, 4.0)));
        assert_eq!(slot.latest(), Some(Point::new(3.0, 4.0)));
        slot.publish(None);
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn mirroring_flips_x_only() {
        assert_eq!(to_display_space(100.0, 50.0, 1000.0, true), Point::new(900.0, 50.0));
        assert_eq!(to_display_space(100.0, 50.0, 1000.0, false), Point::new(100.0, 50.0));
    }
}

//! Drop targets along the bottom strip of the canvas.

use super::word::{Category, Point};
use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Strict interior test on all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryZone {
    pub category: Category,
    pub rect: Rect,
}

/// One zone per category, each a third of the canvas wide minus the gap,
/// laid out left to right in [`Category::ALL`] order.
pub fn layout_zones(cfg: &GameConfig) -> [CategoryZone; 3] {
    let third = cfg.canvas_width / 3.0;
    let w = third - cfg.zone_gap;
    let y = cfg.canvas_height - cfg.zone_height - cfg.zone_bottom_margin;
    Category::ALL.map(|category| {
        let i = category as usize as f64;
        CategoryZone {
            category,
            rect: Rect {
                x: i * third + cfg.zone_inset,
                y,
                w,
                h: cfg.zone_height,
            },
        }
    })
}

/// First zone (in enumeration order) strictly containing `p`.
pub fn zone_at(zones: &[CategoryZone], p: Point) -> Option<&CategoryZone> {
    zones.iter().find(|z| z.rect.contains(p))
}

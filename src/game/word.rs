//! Vocabulary types and the falling word state machine.

/// The three sorting bins. Enumeration order is the left-to-right zone order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Tools,
    DigitalTech,
    LearningTheory,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Tools,
        Category::DigitalTech,
        Category::LearningTheory,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Tools => "工具",
            Category::DigitalTech => "數位科技",
            Category::LearningTheory => "學習理論",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub text: &'static str,
    pub category: Category,
}

impl VocabularyEntry {
    pub const fn new(text: &'static str, category: Category) -> Self {
        Self { text, category }
    }
}

/// Canvas-space position (displayed, i.e. mirrored, coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A word on its way down. It is either falling freely or being dragged; the
/// terminal states are reported as a [`super::Outcome`] when it is removed.
#[derive(Clone, Debug)]
pub struct FallingWord {
    pub entry: VocabularyEntry,
    pub pos: Point,
    pub speed: f64,
    pub dragging: bool,
}

impl FallingWord {
    pub fn new(entry: VocabularyEntry, pos: Point, speed: f64) -> Self {
        Self {
            entry,
            pos,
            speed,
            dragging: false,
        }
    }

    /// One frame of motion. Gravity applies whether or not the word is held;
    /// a held word follows the fingertip horizontally only.
    pub fn advance(&mut self, fingertip: Option<Point>) {
        self.pos.y += self.speed;
        if self.dragging {
            if let Some(tip) = fingertip {
                self.pos.x = tip.x;
            }
        }
    }

    /// Fell past the bottom edge. Held words are never considered missed.
    pub fn is_missed(&self, canvas_height: f64) -> bool {
        self.pos.y > canvas_height && !self.dragging
    }

    /// Start dragging if the fingertip hovers within `radius`. Returns true on
    /// the transition.
    pub fn try_pickup(&mut self, fingertip: Option<Point>, radius: f64) -> bool {
        match fingertip {
            Some(tip) if !self.dragging && tip.distance(self.pos) < radius => {
                self.dragging = true;
                true
            }
            _ => false,
        }
    }

    /// A held word is released when the hand is gone or has moved further
    /// than `radius` away from it.
    pub fn should_release(&self, fingertip: Option<Point>, radius: f64) -> bool {
        if !self.dragging {
            return false;
        }
        match fingertip {
            None => true,
            Some(tip) => tip.distance(self.pos) > radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_at(x: f64, y: f64) -> FallingWord {
        FallingWord::new(
            VocabularyEntry::new("大數據", Category::DigitalTech),
            Point::new(x, y),
            1.5,
        )
    }

    #[test]
    fn falling_word_advances_by_its_speed() {
        let mut w = word_at(100.0, 10.0);
        w.advance(Some(Point::new(400.0, 10.0)));
        assert_eq!(w.pos, Point::new(100.0, 11.5));
    }

    #[test]
    fn dragged_word_follows_fingertip_x_and_keeps_falling() {
        let mut w = word_at(100.0, 10.0);
        w.dragging = true;
        w.advance(Some(Point::new(130.0, 500.0)));
        assert_eq!(w.pos, Point::new(130.0, 11.5));
    }

    #[test]
    fn dragged_word_without_fingertip_keeps_its_x() {
        let mut w = word_at(100.0, 10.0);
        w.dragging = true;
        w.advance(None);
        assert_eq!(w.pos.x, 100.0);
    }

    #[test]
    fn pickup_requires_strictly_inside_radius() {
        let mut w = word_at(100.0, 100.0);
        assert!(!w.try_pickup(Some(Point::new(130.0, 100.0)), 30.0));
        assert!(!w.dragging);
        assert!(w.try_pickup(Some(Point::new(129.0, 100.0)), 30.0));
        assert!(w.dragging);
        // already dragging: no second transition
        assert!(!w.try_pickup(Some(Point::new(100.0, 100.0)), 30.0));
    }

    #[test]
    fn pickup_without_hand_is_a_noop() {
        let mut w = word_at(100.0, 100.0);
        assert!(!w.try_pickup(None, 30.0));
        assert!(!w.dragging);
    }

    #[test]
    fn release_when_hand_lost_or_too_far() {
        let mut w = word_at(100.0, 100.0);
        assert!(!w.should_release(None, 50.0), "not dragging");
        w.dragging = true;
        assert!(w.should_release(None, 50.0));
        assert!(!w.should_release(Some(Point::new(150.0, 100.0)), 50.0));
        assert!(w.should_release(Some(Point::new(151.0, 100.0)), 50.0));
    }

    #[test]
    fn offscreen_only_counts_when_not_dragging() {
        let mut w = word_at(100.0, 601.0);
        assert!(w.is_missed(600.0));
        w.dragging = true;
        assert!(!w.is_missed(600.0));
        let edge = word_at(100.0, 600.0);
        assert!(!edge.is_missed(600.0));
    }
}

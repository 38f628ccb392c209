use glam::Vec2;

/// Cursor samples that only prime the last position.
///
/// Window systems often report a jump to the initial cursor position on
/// the first few events after the cursor is captured.
pub(crate) const WARMUP_SAMPLES: u32 = 3;

/// Tracks the last cursor position and turns positions into deltas.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CursorTracker {
    last: Vec2,
    warmup_remaining: u32,
}

impl CursorTracker {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            last: Vec2::ZERO,
            warmup_remaining: WARMUP_SAMPLES,
        }
    }

    /// Last reported cursor position.
    #[must_use]
    pub(crate) fn position(&self) -> Vec2 {
        self.last
    }

    /// Record a cursor position and return the movement since the last
    /// one, with y pointing up.
    ///
    /// Returns `None` while warming up.
    pub(crate) fn handle_position(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let previous = self.last;
        self.last = Vec2::new(x, y);
        if self.warmup_remaining > 0 {
            self.warmup_remaining -= 1;
            return None;
        }
        Some(Vec2::new(x - previous.x, previous.y - y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_samples_only_prime() {
        let mut cursor = CursorTracker::new();
        assert_eq!(cursor.handle_position(400.0, 300.0), None);
        assert_eq!(cursor.handle_position(10.0, 10.0), None);
        assert_eq!(cursor.handle_position(100.0, 100.0), None);
        assert_eq!(cursor.position(), Vec2::new(100.0, 100.0));
        assert_eq!(
            cursor.handle_position(110.0, 90.0),
            Some(Vec2::new(10.0, 10.0))
        );
    }

    #[test]
    fn moving_down_screen_is_negative_y() {
        let mut cursor = CursorTracker::new();
        for _ in 0..WARMUP_SAMPLES {
            let _ = cursor.handle_position(0.0, 0.0);
        }
        assert_eq!(cursor.handle_position(0.0, 5.0), Some(Vec2::new(0.0, -5.0)));
    }
}

//! Chain solver
//!
//! The head eases toward the target; every other segment is dragged along by
//! a maximum-gap constraint, resolved once per tick from head to tail.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Viewport;
use crate::lerp;

/// The snake body, head first. Empty means "not playing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub segments: Vec<Vec2>,
}

impl Snake {
    /// A chain of `len` segments all stacked on `at`
    pub fn collapsed(at: Vec2, len: usize) -> Self {
        Self {
            segments: vec![at; len],
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Option<Vec2> {
        self.segments.first().copied()
    }

    pub fn tail(&self) -> Option<Vec2> {
        self.segments.last().copied()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Exponentially smooth the head toward `target` (normalized space)
    pub fn follow(&mut self, target: Vec2, alpha: f32) {
        if let Some(head) = self.segments.first_mut() {
            *head = lerp(*head, target, alpha);
        }
    }

    /// Pull each segment to within `gap` pixels of its predecessor.
    ///
    /// Single pass, head to tail: a segment is only ever moved toward the
    /// already-resolved segment in front of it, never pushed away.
    pub fn resolve(&mut self, viewport: Viewport, gap: f32) {
        for i in 1..self.segments.len() {
            let prev = viewport.to_pixels(self.segments[i - 1]);
            let cur = viewport.to_pixels(self.segments[i]);
            let offset = cur - prev;
            let dist = offset.length();
            if dist > gap {
                let pulled = prev + offset * (gap / dist);
                self.segments[i] = viewport.to_normalized(pulled);
            }
        }
    }

    /// Append `count` segments stacked on the current tail
    pub fn grow(&mut self, count: usize) {
        if let Some(tail) = self.tail() {
            self.segments.extend(std::iter::repeat_n(tail, count));
        }
    }

    /// One solver step: head pursuit then gap resolution
    pub fn step(&mut self, target: Vec2, viewport: Viewport, alpha: f32, gap: f32) {
        self.follow(target, alpha);
        self.resolve(viewport, gap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VP: Viewport = Viewport {
        width: 1000.0,
        height: 1000.0,
    };

    fn max_gap(snake: &Snake, viewport: Viewport) -> f32 {
        snake
            .segments
            .windows(2)
            .map(|w| viewport.distance(w[0], w[1]))
            .fold(0.0, f32::max)
    }

    #[test]
    fn test_empty_chain_is_noop() {
        let mut snake = Snake::default();
        snake.step(Vec2::ONE, VP, 0.5, 10.0);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_follow_halves_distance() {
        let mut snake = Snake::collapsed(Vec2::splat(0.5), 3);
        snake.follow(Vec2::new(0.5, 0.6), 0.5);
        assert!((snake.segments[0].y - 0.55).abs() < 1e-6);
        assert_eq!(snake.segments[1], Vec2::splat(0.5));
    }

    #[test]
    fn test_resolve_pulls_to_exact_gap() {
        let mut snake = Snake {
            segments: vec![Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.6)],
        };
        snake.resolve(VP, 10.0);
        assert!((VP.distance(snake.segments[0], snake.segments[1]) - 10.0).abs() < 1e-3);
        // Pulled along the original line
        assert!((snake.segments[1].x - 0.5).abs() < 1e-6);
        assert!(snake.segments[1].y > 0.5);
    }

    #[test]
    fn test_resolve_never_pushes() {
        let close = vec![Vec2::new(0.5, 0.5), Vec2::new(0.503, 0.5)];
        let mut snake = Snake {
            segments: close.clone(),
        };
        snake.resolve(VP, 10.0);
        assert_eq!(snake.segments, close);
    }

    #[test]
    fn test_resolve_uses_pixel_space() {
        // 0.05 horizontally is 100px on a 2000px-wide viewport but only 5px tall
        let wide = Viewport::new(2000.0, 100.0);
        let mut horizontal = Snake {
            segments: vec![Vec2::new(0.5, 0.5), Vec2::new(0.55, 0.5)],
        };
        horizontal.resolve(wide, 10.0);
        assert!((horizontal.segments[1].x - 0.505).abs() < 1e-5);

        let mut vertical = Snake {
            segments: vec![Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.55)],
        };
        vertical.resolve(wide, 10.0);
        assert_eq!(vertical.segments[1], Vec2::new(0.5, 0.55));
    }

    #[test]
    fn test_grow_copies_tail() {
        let mut snake = Snake {
            segments: vec![Vec2::new(0.2, 0.2), Vec2::new(0.3, 0.3)],
        };
        snake.grow(5);
        assert_eq!(snake.len(), 7);
        assert!(snake.segments[1..].iter().all(|&p| p == Vec2::new(0.3, 0.3)));
    }

    #[test]
    fn test_grow_empty_chain_does_nothing() {
        let mut snake = Snake::default();
        snake.grow(5);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_head_converges_geometrically() {
        let target = Vec2::new(0.9, 0.1);
        let mut snake = Snake::collapsed(Vec2::splat(0.5), 4);
        let mut last = snake.segments[0].distance(target);
        for _ in 0..30 {
            snake.step(target, VP, 0.5, 10.0);
            let d = snake.segments[0].distance(target);
            assert!(d <= last * 0.5 + 1e-7);
            last = d;
        }
        assert!(last < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_gap_holds_after_every_step(
            width in 1.0f32..4000.0,
            height in 1.0f32..4000.0,
            len in 1usize..40,
            targets in prop::collection::vec((0.0f32..=1.0, 0.0f32..=1.0), 1..30),
        ) {
            let viewport = Viewport::new(width, height);
            let mut snake = Snake::collapsed(Vec2::splat(0.5), len);
            for (x, y) in targets {
                snake.step(Vec2::new(x, y), viewport, 0.5, 10.0);
                let worst = max_gap(&snake, viewport);
                prop_assert!(worst <= 10.0 + 1e-2, "gap {} exceeded", worst);
            }
        }

        #[test]
        fn prop_gap_holds_after_growth(
            len in 1usize..20,
            grow in 0usize..10,
            x in 0.0f32..=1.0,
            y in 0.0f32..=1.0,
        ) {
            let mut snake = Snake::collapsed(Vec2::splat(0.5), len);
            snake.step(Vec2::new(x, y), VP, 0.5, 10.0);
            snake.grow(grow);
            snake.step(Vec2::new(y, x), VP, 0.5, 10.0);
            prop_assert_eq!(snake.len(), len + grow);
            prop_assert!(max_gap(&snake, VP) <= 10.0 + 1e-2);
        }
    }
}

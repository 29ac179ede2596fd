//! Target input channel
//!
//! The input collaborator (pointer, touch, hand tracker) writes the pursuit
//! target whenever it has a new reading. The simulation reads the most recent
//! value once per tick. There is no queue: a newer write replaces an older one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

/// Anything that can hand the simulation its latest pursuit target.
pub trait TargetSource {
    /// Latest normalized target, or `None` if nothing has been reported yet
    fn latest_target(&self) -> Option<Vec2>;
}

/// Marker stored before the first write (all-ones NaN, never a valid target)
const EMPTY: u64 = u64::MAX;

/// Single-slot, last-write-wins target position.
///
/// Both coordinates are packed into one atomic word so a reader never sees an
/// x from one write paired with a y from another. Clones share the slot.
#[derive(Debug, Clone)]
pub struct TargetSlot {
    bits: Arc<AtomicU64>,
}

impl Default for TargetSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetSlot {
    pub fn new() -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(EMPTY)),
        }
    }

    /// Replace the stored target
    pub fn set(&self, x: f32, y: f32) {
        let packed = ((x.to_bits() as u64) << 32) | y.to_bits() as u64;
        self.bits.store(packed, Ordering::Release);
    }

    /// Read the most recent target
    pub fn latest(&self) -> Option<Vec2> {
        let packed = self.bits.load(Ordering::Acquire);
        if packed == EMPTY {
            return None;
        }
        let x = f32::from_bits((packed >> 32) as u32);
        let y = f32::from_bits(packed as u32);
        Some(Vec2::new(x, y))
    }
}

impl TargetSource for TargetSlot {
    fn latest_target(&self) -> Option<Vec2> {
        self.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot = TargetSlot::new();
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let slot = TargetSlot::new();
        slot.set(0.1, 0.2);
        slot.set(0.7, 0.3);
        assert_eq!(slot.latest(), Some(Vec2::new(0.7, 0.3)));
    }

    #[test]
    fn test_clones_share_slot() {
        let writer = TargetSlot::new();
        let reader = writer.clone();
        writer.set(0.25, 0.75);
        assert_eq!(reader.latest_target(), Some(Vec2::new(0.25, 0.75)));
    }

    #[test]
    fn test_cross_thread_write() {
        let slot = TargetSlot::new();
        let writer = slot.clone();
        std::thread::spawn(move || {
            for i in 0..=100 {
                let v = i as f32 / 100.0;
                writer.set(v, v);
            }
        })
        .join()
        .expect("writer thread panicked");

        let latest = slot.latest().expect("slot written");
        assert_eq!(latest.x, latest.y);
        assert_eq!(latest, Vec2::new(1.0, 1.0));
    }
}

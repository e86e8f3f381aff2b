//! Movement primitives used by goal execution

use rand::Rng;

use crate::core::types::Vec2;

/// One step of length `speed` from `from` straight toward `to`
///
/// Returns a zero displacement when the two points coincide.
pub fn move_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance > 0.0 {
        delta * (speed / distance)
    } else {
        Vec2::ZERO
    }
}

/// Independent integer jitter in `-step..=step` on each axis
pub fn explore_offset<R: Rng + ?Sized>(rng: &mut R, step: i32) -> Vec2 {
    let dx = rng.gen_range(-step..=step);
    let dy = rng.gen_range(-step..=step);
    Vec2::new(dx as f32, dy as f32)
}

//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter
pub type Tick = u64;

/// 2D position or displacement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

/// Axis-aligned rectangle that pets are kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2 {
            x: pos.x.clamp(self.min.x, self.max.x),
            y: pos.y.clamp(self.min.y, self.max.y),
        }
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }

    /// True when min <= max on both axes
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
        assert!((b.distance(&a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::new(Vec2::new(25.0, 25.0), Vec2::new(775.0, 450.0));
        assert_eq!(bounds.clamp(Vec2::new(0.0, 600.0)), Vec2::new(25.0, 450.0));
        assert_eq!(bounds.clamp(Vec2::new(100.0, 100.0)), Vec2::new(100.0, 100.0));
        assert!(bounds.contains(Vec2::new(25.0, 450.0)));
        assert!(!bounds.contains(Vec2::new(24.9, 100.0)));
    }

    #[test]
    fn test_inverted_bounds_invalid() {
        let bounds = Bounds::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 20.0));
        assert!(!bounds.is_valid());
    }
}

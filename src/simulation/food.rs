//! Consumable food items
//!
//! Food appears at random (or when the player asks for it), counts down
//! its lifetime every tick and disappears when the counter reaches zero
//! or when a pet eats it.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub position: Vec2,
    /// Ticks left before the item disappears
    pub lifetime: u32,
}

impl FoodItem {
    pub fn new(position: Vec2, lifetime: u32) -> Self {
        Self { position, lifetime }
    }

    /// Check if a position is close enough to eat this item
    pub fn within_reach(&self, pos: Vec2, radius: f32) -> bool {
        self.position.distance(&pos) <= radius
    }

    /// Count down one tick. Returns true once the item has expired.
    pub fn age(&mut self) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_reach_boundary() {
        let food = FoodItem::new(Vec2::new(0.0, 0.0), 10);
        assert!(food.within_reach(Vec2::new(30.0, 0.0), 30.0));
        assert!(!food.within_reach(Vec2::new(30.1, 0.0), 30.0));
    }

    #[test]
    fn test_age_until_expired() {
        let mut food = FoodItem::new(Vec2::ZERO, 2);
        assert!(!food.age());
        assert!(food.age());
        // Never underflows
        assert!(food.age());
        assert_eq!(food.lifetime, 0);
    }
}

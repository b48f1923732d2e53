//! Player character record stored by [`CharacterDatabase`](crate::CharacterDatabase).

use crate::error::TableError;
use core::fmt;

const MAX_HEALTH: i32 = 100;

/// A character's stats. Health starts full; moral alignment lives in
/// `[0.0, 1.0]` and is kept rounded to one decimal place.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    name: String,
    height: u32,
    weight: u32,
    health: i32,
    moral_align: f64,
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

impl Character {
    pub fn new(name: impl Into<String>, height: u32, weight: u32, moral_align: f64) -> Self {
        Self {
            name: name.into(),
            height,
            weight,
            health: MAX_HEALTH,
            moral_align: round_tenth(moral_align),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn moral_align(&self) -> f64 {
        self.moral_align
    }

    /// Raises health by `amount`, capped at 100.
    pub fn heal(&mut self, amount: i32) -> Result<(), TableError> {
        if amount <= 0 {
            return Err(TableError::InvalidArgument("must be a positive number"));
        }
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
        Ok(())
    }

    /// Lowers health by `amount`, floored at 0.
    pub fn injure(&mut self, amount: i32) -> Result<(), TableError> {
        if amount <= 0 {
            return Err(TableError::InvalidArgument("must be a positive number"));
        }
        self.health = self.health.saturating_sub(amount).max(0);
        Ok(())
    }

    /// Shifts moral alignment by `delta`; the result must stay in `[0.0, 1.0]`.
    pub fn change(&mut self, delta: f64) -> Result<(), TableError> {
        let shifted = self.moral_align + delta;
        if !(0.0..=1.0).contains(&shifted) {
            return Err(TableError::InvalidArgument(
                "moral alignment must not exceed 1.0 or be below 0.0",
            ));
        }
        self.moral_align = round_tenth(shifted);
        Ok(())
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Height: {}, Weight: {}, Health: {} Moral Alignment: {}",
            self.name, self.height, self.weight, self.health, self.moral_align
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_full_health_with_rounded_alignment() {
        let c = Character::new("Gandalf", 20, 20, 0.74);
        assert_eq!(c.health(), 100);
        assert_eq!(c.moral_align(), 0.7);
        assert_eq!(c.name(), "Gandalf");
    }

    #[test]
    fn heal_and_injure_clamp() {
        let mut c = Character::new("FB", 5, 10, 1.0);
        c.injure(60).unwrap();
        assert_eq!(c.health(), 40);
        c.heal(20).unwrap();
        assert_eq!(c.health(), 60);
        c.heal(500).unwrap();
        assert_eq!(c.health(), 100);
        c.injure(i32::MAX).unwrap();
        assert_eq!(c.health(), 0);
    }

    #[test]
    fn non_positive_amounts_rejected() {
        let mut c = Character::new("Ea", 100, 200, 0.0);
        for amount in [0, -5] {
            assert!(matches!(c.heal(amount), Err(TableError::InvalidArgument(_))));
            assert!(matches!(c.injure(amount), Err(TableError::InvalidArgument(_))));
        }
        assert_eq!(c.health(), 100);
    }

    #[test]
    fn change_stays_in_range() {
        let mut c = Character::new("Gandalf", 20, 20, 0.7);
        c.change(-0.5).unwrap();
        assert_eq!(c.moral_align(), 0.2);
        assert!(c.change(-0.3).is_err());
        assert!(c.change(0.9).is_err());
        assert_eq!(c.moral_align(), 0.2);
        c.change(0.8).unwrap();
        assert_eq!(c.moral_align(), 1.0);
    }

    #[test]
    fn display_format() {
        let c = Character::new("FB", 5, 10, 1.0);
        assert_eq!(
            c.to_string(),
            "Name: FB, Height: 5, Weight: 10, Health: 100 Moral Alignment: 1"
        );
    }
}

//! Ammo and power grid accounting for the player's ship.

use super::error::ResourceError;

/// Resource a weapon draws on when it fires.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    Ammo,
    Power,
}

/// Amount of one resource charged for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCost {
    pub kind: ResourceKind,
    pub amount: u32,
}

impl ResourceCost {
    pub const fn new(kind: ResourceKind, amount: u32) -> Self {
        Self { kind, amount }
    }
}

/// Player-side ammo and power grid.
///
/// All mutation goes through the methods below, which never let either value
/// underflow. `capacity` is the ship's regular grid; Emergency Power may push
/// `power_grid` above it, up to the configured ceiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    pub power_grid: u32,
    pub capacity: u32,
    pub ammo: u32,
}

impl ResourcePool {
    pub const fn new(power_grid: u32, capacity: u32, ammo: u32) -> Self {
        Self {
            power_grid,
            capacity,
            ammo,
        }
    }

    /// Full grid at the given capacity.
    pub const fn charged(capacity: u32, ammo: u32) -> Self {
        Self::new(capacity, capacity, ammo)
    }

    pub const fn available(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Ammo => self.ammo,
            ResourceKind::Power => self.power_grid,
        }
    }

    /// Deducts `cost` in full or not at all.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Insufficient`] if the pool holds less than
    /// the requested amount. The pool is left untouched in that case.
    pub fn try_spend(&mut self, cost: ResourceCost) -> Result<(), ResourceError> {
        let available = self.available(cost.kind);
        if available < cost.amount {
            return Err(ResourceError::Insufficient {
                kind: cost.kind,
                required: cost.amount,
                available,
            });
        }

        match cost.kind {
            ResourceKind::Ammo => self.ammo -= cost.amount,
            ResourceKind::Power => self.power_grid -= cost.amount,
        }
        Ok(())
    }

    /// End-of-turn regeneration, clamped to `capacity`.
    ///
    /// An Emergency Power overcharge is pulled back down to capacity.
    pub fn regenerate(&mut self, amount: u32) {
        self.power_grid = self.power_grid.saturating_add(amount).min(self.capacity);
    }

    /// Adds power up to `ceiling`. Returns the amount actually gained.
    pub fn boost_power(&mut self, amount: u32, ceiling: u32) -> u32 {
        let before = self.power_grid;
        self.power_grid = self.power_grid.saturating_add(amount).min(ceiling).max(before);
        self.power_grid - before
    }

    /// Removes power, floored at zero. Returns the amount actually lost.
    pub fn drain_power(&mut self, amount: u32) -> u32 {
        let before = self.power_grid;
        self.power_grid = self.power_grid.saturating_sub(amount);
        before - self.power_grid
    }

    pub fn add_ammo(&mut self, amount: u32) {
        self.ammo = self.ammo.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_is_all_or_nothing() {
        let mut pool = ResourcePool::new(10, 100, 1);
        let err = pool
            .try_spend(ResourceCost::new(ResourceKind::Ammo, 2))
            .unwrap_err();
        assert_eq!(
            err,
            ResourceError::Insufficient {
                kind: ResourceKind::Ammo,
                required: 2,
                available: 1
            }
        );
        assert_eq!(pool.ammo, 1);

        pool.try_spend(ResourceCost::new(ResourceKind::Power, 10))
            .unwrap();
        assert_eq!(pool.power_grid, 0);
        assert!(
            pool.try_spend(ResourceCost::new(ResourceKind::Power, 1))
                .is_err()
        );
        assert_eq!(pool.power_grid, 0);
    }

    #[test]
    fn regenerate_clamps_to_capacity() {
        let mut pool = ResourcePool::new(95, 100, 0);
        pool.regenerate(4);
        assert_eq!(pool.power_grid, 99);
        pool.regenerate(4);
        assert_eq!(pool.power_grid, 100);
    }

    #[test]
    fn regenerate_settles_overcharge_to_capacity() {
        let mut pool = ResourcePool::new(130, 100, 0);
        pool.regenerate(4);
        assert_eq!(pool.power_grid, 100);
    }

    #[test]
    fn boost_and_drain_respect_bounds() {
        let mut pool = ResourcePool::new(135, 100, 0);
        assert_eq!(pool.boost_power(30, 140), 5);
        assert_eq!(pool.power_grid, 140);

        let mut low = ResourcePool::new(6, 100, 0);
        assert_eq!(low.drain_power(25), 6);
        assert_eq!(low.power_grid, 0);
    }
}

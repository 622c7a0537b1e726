use crate::card::ManaCost;
use crate::game::zones::Battlefield;

/// Mana available for the rest of the turn.
///
/// `green` is the part of `total` that can pay green costs. Lands refill the
/// pool at the start of each turn; filter artifacts add floating mana.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManaPool {
    pub total: u32,
    pub green: u32,
}

impl ManaPool {
    pub fn new() -> Self {
        ManaPool::default()
    }

    /// One mana per land in play, green from green producing lands
    pub fn from_battlefield(battlefield: &Battlefield) -> Self {
        ManaPool {
            total: battlefield.land_count(),
            green: battlefield.green_land_count(),
        }
    }

    pub fn can_pay(&self, cost: &ManaCost) -> bool {
        self.green >= cost.green && self.total >= cost.total_value()
    }

    /// Pay a cost, spending non-green mana on generic costs first.
    /// Returns false and leaves the pool untouched if the cost is unaffordable.
    pub fn pay(&mut self, cost: &ManaCost) -> bool {
        if !self.can_pay(cost) {
            return false;
        }
        self.total -= cost.total_value();
        self.green -= cost.green;
        self.green = self.green.min(self.total);
        true
    }

    /// A land entered this turn and can be tapped right away
    pub fn add_land(&mut self, green: bool) {
        self.total += 1;
        if green {
            self.green += 1;
        }
    }

    /// Add one floating mana
    pub fn add_floating(&mut self, green: bool) {
        self.add_land(green);
    }
}

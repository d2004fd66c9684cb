//! Static board definitions.
//!
//! Locations, scene cards and upgrade prices arrive already parsed. The
//! engine treats them as read-only inputs: a [`BoardDefinition`] is checked
//! once with [`BoardDefinition::validate`] and then copied into a new
//! session. [`standard`] builds the stock board.

pub mod standard;
pub mod upgrade;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Location;
use crate::cards::SceneCard;
use crate::core::{is_reserved_location, SetupError, CASTING_OFFICE, MAX_RANK, MIN_RANK, TRAILER};

pub use standard::standard_board;
pub use upgrade::{Currency, Upgrade, UpgradeTable};

/// Everything that is fixed before the first day starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDefinition {
    pub locations: Vec<Location>,
    pub cards: Vec<SceneCard>,
    pub upgrades: UpgradeTable,
}

impl BoardDefinition {
    /// Number of locations that receive a scene card each day.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.locations.iter().filter(|l| !l.is_reserved()).count()
    }

    /// Check the definition can run a game of `num_days` days.
    pub fn validate(&self, num_days: u32) -> Result<(), SetupError> {
        let invalid = |msg: String| Err(SetupError::InvalidDefinition(msg));

        let mut names = FxHashSet::default();
        for location in &self.locations {
            if !names.insert(location.name.as_str()) {
                return invalid(format!("duplicate location {:?}", location.name));
            }
        }
        for required in [TRAILER, CASTING_OFFICE] {
            if !names.contains(required) {
                return invalid(format!("missing location {:?}", required));
            }
        }

        let mut location_roles = FxHashSet::default();
        for location in &self.locations {
            for neighbor in &location.neighbors {
                let Some(other) = self.locations.iter().find(|l| &l.name == neighbor) else {
                    return invalid(format!("{} lists unknown neighbor {:?}", location.name, neighbor));
                };
                if !other.is_neighbor(&location.name) {
                    return invalid(format!("{} -> {} is one-way", location.name, neighbor));
                }
            }

            if is_reserved_location(&location.name) {
                if !location.takes().is_empty() || !location.location_roles().is_empty() {
                    return invalid(format!("{} cannot have takes or roles", location.name));
                }
                continue;
            }

            if location.takes().is_empty() {
                return invalid(format!("{} has no takes", location.name));
            }
            let mut numbers = FxHashSet::default();
            for take in location.takes() {
                if !(1..=4).contains(&take.number) || !numbers.insert(take.number) {
                    return invalid(format!("{} has bad take number {}", location.name, take.number));
                }
            }
            for role in location.location_roles() {
                check_rank(&role.name, role.rank)?;
                if !location_roles.insert(role.name.as_str()) {
                    return invalid(format!("duplicate location role {:?}", role.name));
                }
            }
        }

        let mut ids = FxHashSet::default();
        for card in &self.cards {
            if !ids.insert(&card.id) {
                return invalid(format!("duplicate card id {:?}", card.id.as_str()));
            }
            if card.budget == 0 {
                return invalid(format!("{} has no budget", card.id));
            }
            let mut card_roles = FxHashSet::default();
            for role in &card.roles {
                check_rank(&role.name, role.rank)?;
                if !card_roles.insert(role.name.as_str()) || location_roles.contains(role.name.as_str()) {
                    return invalid(format!("{} has ambiguous role {:?}", card.id, role.name));
                }
            }
        }

        for upgrade in self.upgrades.iter() {
            if !(MIN_RANK + 1..=MAX_RANK).contains(&upgrade.rank) {
                return invalid(format!("upgrade to unreachable rank {}", upgrade.rank));
            }
        }

        let needed = self.set_count() * num_days as usize;
        if self.cards.len() < needed {
            return Err(SetupError::NotEnoughCards {
                needed,
                available: self.cards.len(),
            });
        }
        Ok(())
    }
}

fn check_rank(role: &str, rank: u8) -> Result<(), SetupError> {
    if (MIN_RANK..=MAX_RANK).contains(&rank) {
        Ok(())
    } else {
        Err(SetupError::InvalidDefinition(format!("role {:?} has rank {}", role, rank)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Take;
    use crate::cards::{Area, Role};

    fn minimal() -> BoardDefinition {
        BoardDefinition {
            locations: vec![
                Location::new(TRAILER, ["Jail"], Area::default()),
                Location::new(CASTING_OFFICE, ["Jail"], Area::default()),
                Location::new("Jail", [TRAILER, CASTING_OFFICE], Area::default())
                    .with_take(Take::new(1, Area::default()))
                    .with_role(Role::off_card("Prisoner", 2, "Zzz")),
            ],
            cards: (1..=3)
                .map(|i| {
                    SceneCard::new(format!("{:02}.png", i), "Scene", 3)
                        .with_role(Role::on_card("Lead", 2, "Line"))
                })
                .collect(),
            upgrades: UpgradeTable::standard(),
        }
    }

    #[test]
    fn test_minimal_is_valid() {
        let def = minimal();
        assert_eq!(def.set_count(), 1);
        assert!(def.validate(3).is_ok());
    }

    #[test]
    fn test_not_enough_cards() {
        assert_eq!(
            minimal().validate(4),
            Err(SetupError::NotEnoughCards { needed: 4, available: 3 })
        );
    }

    #[test]
    fn test_one_way_neighbor() {
        let mut def = minimal();
        def.locations[0].neighbors.push(CASTING_OFFICE.to_string());
        assert!(matches!(def.validate(3), Err(SetupError::InvalidDefinition(_))));
    }

    #[test]
    fn test_missing_reserved_location() {
        let mut def = minimal();
        def.locations.remove(1);
        def.locations[1].neighbors.retain(|n| n.as_str() != CASTING_OFFICE);
        assert!(matches!(def.validate(3), Err(SetupError::InvalidDefinition(_))));
    }

    #[test]
    fn test_duplicate_card_id() {
        let mut def = minimal();
        let copy = def.cards[0].clone();
        def.cards.push(copy);
        assert!(matches!(def.validate(3), Err(SetupError::InvalidDefinition(_))));
    }

    #[test]
    fn test_bad_role_rank() {
        let mut def = minimal();
        def.cards[0].roles[0].rank = 7;
        assert!(matches!(def.validate(3), Err(SetupError::InvalidDefinition(_))));
    }

    #[test]
    fn test_card_role_shadowing_location_role() {
        let mut def = minimal();
        def.cards[1].roles[0].name = "Prisoner".to_string();
        assert!(matches!(def.validate(3), Err(SetupError::InvalidDefinition(_))));
    }

    #[test]
    fn test_standard_board_is_valid() {
        let def = standard_board();
        assert_eq!(def.set_count(), 10);
        assert_eq!(def.cards.len(), 40);
        assert!(def.validate(4).is_ok());
    }
}

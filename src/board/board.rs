//! The board: who is where, who is working what, and which scene is
//! shooting at each location.
//!
//! `Board` owns no players and no locations. It only relates them by id
//! and name, so every mutating operation here takes the players, deck and
//! locations it has to keep consistent.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::location::Location;
use crate::cards::{CardId, Deck, Role};
use crate::core::{DeckError, GameError, GameRng, Player, PlayerId, PlayerMap, TRAILER};

/// All locations on the board, looked up by name.
///
/// Iteration follows definition order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Location>", into = "Vec<Location>")]
pub struct Locations {
    list: Vec<Location>,
    index: FxHashMap<String, usize>,
}

impl Locations {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&i| &self.list[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Location> {
        let i = *self.index.get(name)?;
        Some(&mut self.list[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Location> {
        self.list.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl From<Vec<Location>> for Locations {
    fn from(list: Vec<Location>) -> Self {
        let index = list
            .iter()
            .enumerate()
            .map(|(i, loc)| (loc.name.clone(), i))
            .collect();
        Self { list, index }
    }
}

impl From<Locations> for Vec<Location> {
    fn from(locations: Locations) -> Self {
        locations.list
    }
}

/// Money paid to one player when a scene wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub player: PlayerId,
    pub dollars: u32,
}

/// What happened when a scene wrapped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapReport {
    pub location: String,
    pub card: CardId,

    /// Bonus dice, sorted highest first. Empty when nobody was on the card.
    pub bonus_rolls: Vec<u8>,

    /// One entry per paid player, in the order they were first paid.
    pub payouts: Vec<Payout>,
}

impl WrapReport {
    fn pay(&mut self, players: &mut PlayerMap<Player>, player: PlayerId, dollars: u32) {
        players[player].dollars += dollars;
        match self.payouts.iter_mut().find(|p| p.player == player) {
            Some(payout) => payout.dollars += dollars,
            None => self.payouts.push(Payout { player, dollars }),
        }
    }
}

/// Relations between players, roles, locations and scene cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    player_locations: OrdMap<PlayerId, String>,
    player_roles: OrdMap<PlayerId, String>,
    scene_cards: OrdMap<String, CardId>,
    scenes_remaining: u32,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scenes still to be wrapped today.
    #[must_use]
    pub fn scenes_remaining(&self) -> u32 {
        self.scenes_remaining
    }

    // === Dealing ===

    /// Deal one scene card to every location except Trailer and Casting
    /// Office, and reset the day's scene count to the number dealt.
    ///
    /// Returns the number of cards dealt.
    pub fn deal_scene_cards(
        &mut self,
        deck: &mut Deck,
        locations: &mut Locations,
    ) -> Result<u32, DeckError> {
        let mut dealt = 0;
        for location in locations.iter_mut().filter(|l| !l.is_reserved()) {
            let card = deck.draw()?;
            debug!(location = %location.name, card = %card.id, "dealt scene card");
            location.set_scene_card(card);
            self.scene_cards.insert(location.name.clone(), card.id.clone());
            dealt += 1;
        }
        self.scenes_remaining = dealt;
        Ok(dealt)
    }

    // === Player placement ===

    pub fn set_player_location(&mut self, player: PlayerId, location: impl Into<String>) {
        self.player_locations.insert(player, location.into());
    }

    #[must_use]
    pub fn player_location(&self, player: PlayerId) -> Option<&str> {
        self.player_locations.get(&player).map(String::as_str)
    }

    /// Set or clear the role a player is working.
    pub fn set_player_role(&mut self, player: PlayerId, role: Option<String>) {
        match role {
            Some(role) => {
                self.player_roles.insert(player, role);
            }
            None => {
                self.player_roles.remove(&player);
            }
        }
    }

    #[must_use]
    pub fn player_role(&self, player: PlayerId) -> Option<&str> {
        self.player_roles.get(&player).map(String::as_str)
    }

    /// Every player id the board holds a location or role for. May repeat.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.player_locations
            .keys()
            .chain(self.player_roles.keys())
            .copied()
    }

    /// Players standing at `location`, in seating order.
    #[must_use]
    pub fn players_at(&self, location: &str) -> Vec<PlayerId> {
        self.player_locations
            .iter()
            .filter(|(_, loc)| loc.as_str() == location)
            .map(|(&player, _)| player)
            .collect()
    }

    // === Scenes ===

    #[must_use]
    pub fn scene_card(&self, location: &str) -> Option<&CardId> {
        self.scene_cards.get(location)
    }

    /// On-card roles of the scene shooting at `location`.
    #[must_use]
    pub fn scene_card_roles<'a>(&self, location: &str, deck: &'a Deck) -> Option<&'a [Role]> {
        let id = self.scene_cards.get(location)?;
        deck.drawn_card(id).map(|card| card.roles.as_slice())
    }

    /// Close out the scene at `location`.
    ///
    /// If anyone was working an on-card role, `budget` dice are rolled,
    /// sorted highest first and handed out round-robin over the on-card
    /// players, starting with `active` (or the next on-card player after
    /// `active` in seating order). Off-card players then receive their
    /// role's rank in dollars. Without on-card players nobody is paid.
    ///
    /// Afterwards every role at the location is vacated, the rehearsal
    /// tokens of everyone there are cleared, the takes are reset, the card
    /// is discarded, the location is marked wrapped and the day's scene
    /// count drops by one.
    pub fn wrap_scene(
        &mut self,
        active: PlayerId,
        players: &mut PlayerMap<Player>,
        deck: &mut Deck,
        location: &mut Location,
        rng: &mut GameRng,
    ) -> Result<WrapReport, GameError> {
        let card_id = self
            .scene_cards
            .get(&location.name)
            .cloned()
            .ok_or_else(|| GameError::CardNotInPlay(location.name.clone()))?;
        let budget = deck
            .drawn_card(&card_id)
            .ok_or_else(|| GameError::CardNotInPlay(card_id.as_str().to_string()))?
            .budget;

        let present = self.players_at(&location.name);
        let mut on_card = Vec::new();
        let mut off_card = Vec::new();
        for &player in &present {
            let Some(role) = self.player_role(player).and_then(|name| location.role(name)) else {
                continue;
            };
            if role.on_card {
                on_card.push(player);
            } else {
                off_card.push((player, role.rank));
            }
        }

        let mut report = WrapReport {
            location: location.name.clone(),
            card: card_id.clone(),
            bonus_rolls: Vec::new(),
            payouts: Vec::new(),
        };

        if !on_card.is_empty() {
            let mut rolls = rng.roll_dice(usize::from(budget));
            rolls.sort_unstable_by(|a, b| b.cmp(a));

            let start = on_card.iter().position(|&p| p >= active).unwrap_or(0);
            for (i, &die) in rolls.iter().enumerate() {
                let player = on_card[(start + i) % on_card.len()];
                report.pay(players, player, u32::from(die));
            }
            for &(player, rank) in &off_card {
                report.pay(players, player, u32::from(rank));
            }
            report.bonus_rolls = rolls;
        }

        for &player in &present {
            self.player_roles.remove(&player);
            players[player].rehearsal_tokens = 0;
        }

        location.release_roles();
        location.reset_takes();
        location.clear_scene();
        self.scene_cards.remove(&location.name);
        deck.discard(&card_id);

        location.set_wrapped(true);
        self.scenes_remaining = self.scenes_remaining.saturating_sub(1);

        info!(
            location = %location.name,
            card = %card_id,
            remaining = self.scenes_remaining,
            "scene wrapped"
        );
        Ok(report)
    }

    /// End-of-day cleanup: everyone back to the Trailer with no role and no
    /// rehearsal tokens, the remaining scene discarded, every location
    /// unwrapped. New cards are dealt separately.
    pub fn end_day(
        &mut self,
        players: &mut PlayerMap<Player>,
        deck: &mut Deck,
        locations: &mut Locations,
    ) {
        for (id, player) in players.iter_mut() {
            self.player_locations.insert(id, TRAILER.to_string());
            player.rehearsal_tokens = 0;
        }
        self.player_roles.clear();
        self.scene_cards.clear();

        while let Some(card) = deck.discard_last_drawn_card() {
            debug!(card = %card, "discarded scene left at end of day");
        }
        for location in locations.iter_mut() {
            location.reset();
        }
        self.scenes_remaining = 0;
    }

    /// Check the board against the deck and locations it relates.
    ///
    /// Returns a description of the first inconsistency found.
    pub fn check_consistency(&self, deck: &Deck, locations: &Locations) -> Result<(), String> {
        for (player, name) in &self.player_locations {
            if !locations.contains(name) {
                return Err(format!("{} is at unknown location {:?}", player, name));
            }
        }
        for (player, role) in &self.player_roles {
            let location = self
                .player_location(*player)
                .and_then(|name| locations.get(name))
                .ok_or_else(|| format!("{} has a role but no location", player))?;
            if location.role(role).is_none() {
                return Err(format!("{} works {:?}, not found at {}", player, role, location.name));
            }
        }
        for (name, card) in &self.scene_cards {
            if !deck.is_drawn(card) {
                return Err(format!("{} at {} is not in play", card, name));
            }
            let location = locations
                .get(name)
                .ok_or_else(|| format!("scene at unknown location {:?}", name))?;
            if location.scene_card() != Some(card) {
                return Err(format!("{} disagrees about its scene card", name));
            }
        }
        Ok(())
    }
}

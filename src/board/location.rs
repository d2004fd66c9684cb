//! Locations and their shot counters.
//!
//! A location owns its fixed roles and takes. While a scene is being shot
//! there it also carries a copy of the scene card's roles, so that the
//! `occupied` flags of card roles live next to those of location roles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Area, CardId, Role, SceneCard};
use crate::core::is_reserved_location;

/// One shot counter on a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Take {
    /// 1..=4, unique within a location.
    pub number: u8,
    pub wrapped: bool,
    pub area: Area,
}

impl Take {
    #[must_use]
    pub fn new(number: u8, area: Area) -> Self {
        Self {
            number,
            wrapped: false,
            area,
        }
    }
}

/// A place on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub neighbors: SmallVec<[String; 4]>,
    pub area: Area,
    takes: SmallVec<[Take; 3]>,
    roles: Vec<Role>,
    scene_roles: Vec<Role>,
    scene_card: Option<CardId>,
    wrapped: bool,
}

impl Location {
    /// Create a location with no takes or roles.
    #[must_use]
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        neighbors: impl IntoIterator<Item = S>,
        area: Area,
    ) -> Self {
        Self {
            name: name.into(),
            neighbors: neighbors.into_iter().map(Into::into).collect(),
            area,
            takes: SmallVec::new(),
            roles: Vec::new(),
            scene_roles: Vec::new(),
            scene_card: None,
            wrapped: false,
        }
    }

    /// Add a take (builder pattern). Takes are kept sorted by number.
    #[must_use]
    pub fn with_take(mut self, take: Take) -> Self {
        self.takes.push(take);
        self.takes.sort_by_key(|t| t.number);
        self
    }

    /// Add a fixed location role (builder pattern).
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(Role {
            on_card: false,
            ..role
        });
        self
    }

    /// Trailer and Casting Office never host scenes.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        is_reserved_location(&self.name)
    }

    #[must_use]
    pub fn is_neighbor(&self, name: &str) -> bool {
        self.neighbors.iter().any(|n| n == name)
    }

    // === Takes ===

    #[must_use]
    pub fn takes(&self) -> &[Take] {
        &self.takes
    }

    /// Number of takes still to be shot.
    #[must_use]
    pub fn shots(&self) -> usize {
        self.takes.iter().filter(|t| !t.wrapped).count()
    }

    /// Wrap the lowest-numbered unwrapped take.
    ///
    /// Returns the number of the take wrapped, or `None` if all takes are
    /// already wrapped.
    pub fn wrap_shot(&mut self) -> Option<u8> {
        let take = self.takes.iter_mut().find(|t| !t.wrapped)?;
        take.wrapped = true;
        Some(take.number)
    }

    /// Mark every take unwrapped.
    pub fn reset_takes(&mut self) {
        for take in &mut self.takes {
            take.wrapped = false;
        }
    }

    // === Roles ===

    /// Roles fixed to this location.
    #[must_use]
    pub fn location_roles(&self) -> &[Role] {
        &self.roles
    }

    /// Roles from the scene card currently shooting here.
    #[must_use]
    pub fn scene_roles(&self) -> &[Role] {
        &self.scene_roles
    }

    /// Location roles followed by the current scene's roles.
    pub fn all_roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter().chain(self.scene_roles.iter())
    }

    #[must_use]
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.all_roles().find(|r| r.name == name)
    }

    pub fn role_mut(&mut self, name: &str) -> Option<&mut Role> {
        self.roles
            .iter_mut()
            .chain(self.scene_roles.iter_mut())
            .find(|r| r.name == name)
    }

    /// Roles a player of `rank` could take right now.
    pub fn available_roles(&self, rank: u8) -> impl Iterator<Item = &Role> {
        self.all_roles().filter(move |r| r.is_available_to(rank))
    }

    /// Mark every role unoccupied.
    pub fn release_roles(&mut self) {
        for role in self.roles.iter_mut().chain(self.scene_roles.iter_mut()) {
            role.occupied = false;
        }
    }

    // === Scene ===

    #[must_use]
    pub fn scene_card(&self) -> Option<&CardId> {
        self.scene_card.as_ref()
    }

    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn set_wrapped(&mut self, wrapped: bool) {
        self.wrapped = wrapped;
    }

    /// Start shooting `card` here. Only the board calls this, while dealing.
    pub fn set_scene_card(&mut self, card: &SceneCard) {
        self.scene_card = Some(card.id.clone());
        self.scene_roles = card.roles.clone();
        for role in &mut self.scene_roles {
            role.on_card = true;
            role.occupied = false;
        }
        self.wrapped = false;
    }

    /// Drop the current scene and its roles, returning the card id.
    pub fn clear_scene(&mut self) -> Option<CardId> {
        self.scene_roles.clear();
        self.scene_card.take()
    }

    /// Return the location to its start-of-day condition, with no scene.
    pub fn reset(&mut self) {
        self.clear_scene();
        self.release_roles();
        self.reset_takes();
        self.wrapped = false;
    }
}

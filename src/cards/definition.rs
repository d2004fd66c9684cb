//! Scene cards, roles and layout areas.
//!
//! All three are descriptive records: once the board definition is loaded
//! they never change, except for a role's `occupied` flag which tracks
//! whether someone is currently working it.

use serde::{Deserialize, Serialize};

/// Unique identifier for a scene card, derived from its image filename.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a card ID from a raw string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the ID from an image filename: directory and extension are
    /// dropped, so `"cards/07.png"` becomes `"07"`.
    ///
    /// ```
    /// use deadwood::cards::CardId;
    ///
    /// assert_eq!(CardId::from_image("cards/07.png"), CardId::new("07"));
    /// assert_eq!(CardId::from_image("12"), CardId::new("12"));
    /// ```
    #[must_use]
    pub fn from_image(image: &str) -> Self {
        let file = image.rsplit(['/', '\\']).next().unwrap_or(image);
        let stem = match file.rfind('.') {
            Some(dot) if dot > 0 => &file[..dot],
            _ => file,
        };
        Self(stem.to_string())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Rectangle on the board image. Only the renderer cares about it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub h: u32,
    pub w: u32,
}

impl Area {
    #[must_use]
    pub const fn new(x: u32, y: u32, h: u32, w: u32) -> Self {
        Self { x, y, h, w }
    }
}

/// An acting part, either printed on a scene card or fixed to a location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,

    /// Minimum player rank needed to take the role.
    pub rank: u8,

    /// Flavor text.
    pub line: String,

    /// True for roles printed on the scene card, false for location roles.
    pub on_card: bool,

    /// Someone is working this role right now.
    pub occupied: bool,

    pub area: Area,
}

impl Role {
    /// A role printed on a scene card.
    #[must_use]
    pub fn on_card(name: impl Into<String>, rank: u8, line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank,
            line: line.into(),
            on_card: true,
            occupied: false,
            area: Area::default(),
        }
    }

    /// A role fixed to a location.
    #[must_use]
    pub fn off_card(name: impl Into<String>, rank: u8, line: impl Into<String>) -> Self {
        Self {
            on_card: false,
            ..Self::on_card(name, rank, line)
        }
    }

    /// Set the layout area (builder pattern).
    #[must_use]
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = area;
        self
    }

    /// Whether a player of `rank` could take this role right now.
    #[must_use]
    pub fn is_available_to(&self, rank: u8) -> bool {
        !self.occupied && self.rank <= rank
    }
}

/// A scene: budget plus the roles printed on the card.
///
/// ```
/// use deadwood::cards::{Role, SceneCard};
///
/// let card = SceneCard::new("cards/03.png", "Evil Wears a Hat", 4)
///     .with_role(Role::on_card("The Duke", 4, "Howdy, partner."));
///
/// assert_eq!(card.id.as_str(), "03");
/// assert!(card.role("The Duke").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneCard {
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub image: String,

    /// Dice total needed to succeed when acting. Also the number of bonus
    /// dice rolled when the scene wraps.
    pub budget: u8,

    pub roles: Vec<Role>,
}

impl SceneCard {
    /// Create a card with no roles; the ID is derived from `image`.
    #[must_use]
    pub fn new(image: impl Into<String>, title: impl Into<String>, budget: u8) -> Self {
        let image = image.into();
        Self {
            id: CardId::from_image(&image),
            title: title.into(),
            description: String::new(),
            image,
            budget,
            roles: Vec::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an on-card role (builder pattern).
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(Role {
            on_card: true,
            ..role
        });
        self
    }

    /// Find an on-card role by name.
    #[must_use]
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }
}

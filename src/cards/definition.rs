//! Card definitions.
//!
//! A `Card` is a value with a stable `CardId`, a bank value and a kind.
//! Cards move between the draw pile, hands, banks and property sets by
//! value; the only field that ever changes is a wildcard's active color.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorSet};

/// Unique identifier for a physical card in the game.
///
/// Identity is independent of face value: two $1M cards have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What an action card does when played for its effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PassGo,
    DealBreaker,
    SlyDeal,
    ForcedDeal,
    DebtCollector,
    Birthday,
    JustSayNo,
    House,
    Hotel,
    DoubleRent,
    /// Rent for either of two colors.
    PropertyRent(Color, Color),
    /// Rent for any one color.
    WildRent,
}

impl ActionKind {
    /// Display name printed on the card.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::PassGo => "Pass Go",
            ActionKind::DealBreaker => "Deal Breaker",
            ActionKind::SlyDeal => "Sly Deal",
            ActionKind::ForcedDeal => "Forced Deal",
            ActionKind::DebtCollector => "Debt Collector",
            ActionKind::Birthday => "It's My Birthday",
            ActionKind::JustSayNo => "Just Say No",
            ActionKind::House => "House",
            ActionKind::Hotel => "Hotel",
            ActionKind::DoubleRent => "Double The Rent",
            ActionKind::PropertyRent(..) => "Rent",
            ActionKind::WildRent => "Wild Rent",
        }
    }

    /// Colors this card can charge rent for, if it is a rent card.
    #[must_use]
    pub const fn rent_colors(self) -> Option<ColorSet> {
        match self {
            ActionKind::PropertyRent(a, b) => Some(ColorSet::Dual(a, b)),
            ActionKind::WildRent => Some(ColorSet::Any),
            _ => None,
        }
    }

    /// Whether playing this card opens a response window for the opponent.
    #[must_use]
    pub const fn targets_opponent(self) -> bool {
        matches!(
            self,
            ActionKind::DealBreaker
                | ActionKind::SlyDeal
                | ActionKind::ForcedDeal
                | ActionKind::DebtCollector
                | ActionKind::Birthday
                | ActionKind::PropertyRent(..)
                | ActionKind::WildRent
        )
    }
}

/// Placement state of a property card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyCard {
    /// Colors the card may count as.
    pub colors: ColorSet,

    /// Color group the card currently counts toward.
    ///
    /// `None` only for a full wildcard that has not been placed yet.
    pub active: Option<Color>,
}

/// The three card families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Money,
    Property(PropertyCard),
    Action(ActionKind),
}

/// A physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity.
    pub id: CardId,

    /// Printed name.
    pub name: String,

    /// Bank value in $M.
    pub value: u32,

    /// Card family and family-specific data.
    pub kind: CardKind,
}

impl Card {
    /// A money card.
    #[must_use]
    pub fn money(id: CardId, value: u32) -> Self {
        Self {
            id,
            name: format!("${value}M"),
            value,
            kind: CardKind::Money,
        }
    }

    /// An ordinary single-color property.
    #[must_use]
    pub fn property(id: CardId, name: impl Into<String>, color: Color, value: u32) -> Self {
        Self::wildcard(id, name, ColorSet::Single(color), value)
    }

    /// A property with an arbitrary color set.
    #[must_use]
    pub fn wildcard(id: CardId, name: impl Into<String>, colors: ColorSet, value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            kind: CardKind::Property(PropertyCard {
                colors,
                active: colors.default_color(),
            }),
        }
    }

    /// An action or rent card.
    #[must_use]
    pub fn action(id: CardId, kind: ActionKind, value: u32) -> Self {
        let name = match kind {
            ActionKind::PropertyRent(a, b) => format!("Rent: {a} & {b}"),
            other => other.name().to_string(),
        };
        Self {
            id,
            name,
            value,
            kind: CardKind::Action(kind),
        }
    }

    /// Property placement data, if this is a property.
    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyCard> {
        match &self.kind {
            CardKind::Property(p) => Some(p),
            _ => None,
        }
    }

    /// Action kind, if this is an action card.
    #[must_use]
    pub fn action_kind(&self) -> Option<ActionKind> {
        match self.kind {
            CardKind::Action(kind) => Some(kind),
            _ => None,
        }
    }

    /// Whether this is a money card.
    #[must_use]
    pub fn is_money(&self) -> bool {
        matches!(self.kind, CardKind::Money)
    }

    /// Whether this is a full ("any" color) wildcard, which is never payable.
    #[must_use]
    pub fn is_full_wildcard(&self) -> bool {
        self.as_property().is_some_and(|p| p.colors.is_full_wildcard())
    }

    /// Whether this is a Just Say No card.
    #[must_use]
    pub fn is_just_say_no(&self) -> bool {
        self.action_kind() == Some(ActionKind::JustSayNo)
    }

    /// The color group this property counts toward.
    #[must_use]
    pub fn active_color(&self) -> Option<Color> {
        self.as_property().and_then(|p| p.active)
    }

    /// Reassign a property's active color.
    ///
    /// Returns false (and leaves the card untouched) if this is not a
    /// property or `color` is not in its color set.
    pub fn set_active_color(&mut self, color: Color) -> bool {
        match &mut self.kind {
            CardKind::Property(p) if p.colors.contains(color) => {
                p.active = Some(color);
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

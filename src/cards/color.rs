//! Property colors, set sizes and the rent schedule.

use serde::{Deserialize, Serialize};

/// A property color group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
    Railroad,
    Utility,
}

/// Extra rent for a complete set carrying a House ($M).
pub const HOUSE_RENT_BONUS: u32 = 3;

/// Extra rent for a complete set carrying a Hotel ($M).
pub const HOTEL_RENT_BONUS: u32 = 4;

impl Color {
    /// Every color, in board order.
    pub const ALL: [Color; 10] = [
        Color::Brown,
        Color::LightBlue,
        Color::Pink,
        Color::Orange,
        Color::Red,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Railroad,
        Color::Utility,
    ];

    /// Number of cards that make this color a complete set.
    #[must_use]
    pub const fn set_size(self) -> usize {
        match self {
            Color::Brown | Color::Blue | Color::Utility => 2,
            Color::Railroad => 4,
            Color::LightBlue
            | Color::Pink
            | Color::Orange
            | Color::Red
            | Color::Yellow
            | Color::Green => 3,
        }
    }

    /// Rent by number of cards held, one entry per card up to the set size.
    #[must_use]
    pub const fn rent_schedule(self) -> &'static [u32] {
        match self {
            Color::Brown => &[1, 2],
            Color::LightBlue => &[1, 2, 3],
            Color::Pink => &[1, 2, 4],
            Color::Orange => &[1, 3, 5],
            Color::Red => &[2, 3, 6],
            Color::Yellow => &[2, 4, 6],
            Color::Green => &[2, 4, 7],
            Color::Blue => &[3, 8],
            Color::Railroad => &[1, 2, 3, 4],
            Color::Utility => &[1, 2],
        }
    }

    /// Base rent for `count` cards of this color, capped at a complete set.
    ///
    /// ```
    /// use monopoly_deal::cards::Color;
    ///
    /// assert_eq!(Color::Blue.rent_for(0), 0);
    /// assert_eq!(Color::Blue.rent_for(1), 3);
    /// assert_eq!(Color::Blue.rent_for(2), 8);
    /// assert_eq!(Color::Blue.rent_for(5), 8);
    /// ```
    #[must_use]
    pub fn rent_for(self, count: usize) -> u32 {
        if count == 0 {
            return 0;
        }
        let schedule = self.rent_schedule();
        schedule[count.min(schedule.len()) - 1]
    }

    /// Whether Houses and Hotels may be built on this color.
    #[must_use]
    pub const fn accepts_buildings(self) -> bool {
        !matches!(self, Color::Railroad | Color::Utility)
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Brown => "brown",
            Color::LightBlue => "light blue",
            Color::Pink => "pink",
            Color::Orange => "orange",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Railroad => "railroad",
            Color::Utility => "utility",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The colors a property (or rent card) can count as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSet {
    /// An ordinary single-color property.
    Single(Color),
    /// A two-way wildcard; the first color is the default placement.
    Dual(Color, Color),
    /// A full wildcard, usable as any color.
    Any,
}

impl ColorSet {
    /// Check whether `color` is one of the allowed colors.
    #[must_use]
    pub fn contains(self, color: Color) -> bool {
        match self {
            ColorSet::Single(c) => c == color,
            ColorSet::Dual(a, b) => a == color || b == color,
            ColorSet::Any => true,
        }
    }

    /// Default placement color, if there is one.
    #[must_use]
    pub fn default_color(self) -> Option<Color> {
        match self {
            ColorSet::Single(c) | ColorSet::Dual(c, _) => Some(c),
            ColorSet::Any => None,
        }
    }

    /// Whether the card can move between color groups.
    #[must_use]
    pub fn is_wildcard(self) -> bool {
        !matches!(self, ColorSet::Single(_))
    }

    /// Whether this is a full ("any") wildcard.
    #[must_use]
    pub fn is_full_wildcard(self) -> bool {
        matches!(self, ColorSet::Any)
    }

    /// Iterate over the allowed colors.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

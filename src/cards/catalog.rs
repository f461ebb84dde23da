//! The physical 106-card deck.
//!
//! `build_deck` returns every card in a fixed order with ids `0..106`.
//! Shuffling is the caller's job (see `GameRng::shuffle`), so the catalog
//! itself is deterministic.

use super::color::{Color, ColorSet};
use super::definition::{ActionKind, Card, CardId};

/// Number of cards in a full deck.
pub const CATALOG_SIZE: usize = 106;

const MONEY: &[(u32, usize)] = &[(1, 6), (2, 5), (3, 3), (4, 3), (5, 2), (10, 1)];

const PROPERTIES: &[(Color, u32, &[&str])] = &[
    (Color::Brown, 1, &["Baltic Avenue", "Mediterranean Avenue"]),
    (
        Color::LightBlue,
        1,
        &["Connecticut Avenue", "Vermont Avenue", "Oriental Avenue"],
    ),
    (
        Color::Pink,
        2,
        &["St. Charles Place", "Virginia Avenue", "States Avenue"],
    ),
    (
        Color::Orange,
        2,
        &["New York Avenue", "St. James Place", "Tennessee Avenue"],
    ),
    (
        Color::Red,
        3,
        &["Kentucky Avenue", "Indiana Avenue", "Illinois Avenue"],
    ),
    (
        Color::Yellow,
        3,
        &["Ventnor Avenue", "Marvin Gardens", "Atlantic Avenue"],
    ),
    (
        Color::Green,
        4,
        &["Pacific Avenue", "North Carolina Avenue", "Pennsylvania Avenue"],
    ),
    (Color::Blue, 4, &["Boardwalk", "Park Place"]),
    (Color::Utility, 2, &["Electric Company", "Water Works"]),
    (
        Color::Railroad,
        2,
        &[
            "Reading Railroad",
            "Pennsylvania Railroad",
            "B. & O. Railroad",
            "Short Line",
        ],
    ),
];

const WILDCARDS: &[(ColorSet, u32, usize)] = &[
    (ColorSet::Dual(Color::Orange, Color::Pink), 2, 2),
    (ColorSet::Dual(Color::LightBlue, Color::Brown), 1, 1),
    (ColorSet::Dual(Color::LightBlue, Color::Railroad), 2, 1),
    (ColorSet::Dual(Color::Blue, Color::Green), 4, 1),
    (ColorSet::Dual(Color::Railroad, Color::Green), 4, 1),
    (ColorSet::Dual(Color::Red, Color::Yellow), 3, 2),
    (ColorSet::Dual(Color::Utility, Color::Railroad), 4, 1),
    (ColorSet::Any, 0, 2),
];

const ACTIONS: &[(ActionKind, u32, usize)] = &[
    (ActionKind::PassGo, 1, 10),
    (ActionKind::DealBreaker, 5, 2),
    (ActionKind::JustSayNo, 4, 3),
    (ActionKind::SlyDeal, 3, 3),
    (ActionKind::ForcedDeal, 3, 3),
    (ActionKind::DebtCollector, 3, 3),
    (ActionKind::Birthday, 2, 3),
    (ActionKind::House, 3, 3),
    (ActionKind::Hotel, 4, 2),
    (ActionKind::DoubleRent, 1, 2),
    (ActionKind::PropertyRent(Color::Pink, Color::Orange), 1, 2),
    (ActionKind::PropertyRent(Color::Railroad, Color::Utility), 1, 2),
    (ActionKind::PropertyRent(Color::Green, Color::Blue), 1, 2),
    (ActionKind::PropertyRent(Color::Brown, Color::LightBlue), 1, 2),
    (ActionKind::PropertyRent(Color::Red, Color::Yellow), 1, 2),
    (ActionKind::WildRent, 3, 3),
];

fn wildcard_name(colors: ColorSet) -> String {
    match colors {
        ColorSet::Dual(a, b) => format!("{} & {} Wildcard", title(a), title(b)),
        ColorSet::Single(c) => format!("{} Wildcard", title(c)),
        ColorSet::Any => "Property Wildcard".to_string(),
    }
}

fn title(color: Color) -> String {
    color
        .name()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the full deck in catalog order.
///
/// ```
/// use monopoly_deal::cards::{build_deck, CATALOG_SIZE};
///
/// let deck = build_deck();
/// assert_eq!(deck.len(), CATALOG_SIZE);
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CATALOG_SIZE);
    let mut next_id = 0u32;
    let mut next = || {
        let id = CardId::new(next_id);
        next_id += 1;
        id
    };

    for &(value, count) in MONEY {
        for _ in 0..count {
            cards.push(Card::money(next(), value));
        }
    }

    for &(color, value, names) in PROPERTIES {
        for &name in names {
            cards.push(Card::property(next(), name, color, value));
        }
    }

    for &(colors, value, count) in WILDCARDS {
        for _ in 0..count {
            cards.push(Card::wildcard(next(), wildcard_name(colors), colors, value));
        }
    }

    for &(kind, value, count) in ACTIONS {
        for _ in 0..count {
            cards.push(Card::action(next(), kind, value));
        }
    }

    cards
}

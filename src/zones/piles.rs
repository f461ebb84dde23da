//! Draw pile, discard pile and the last-action slot.
//!
//! The draw pile is ordered; its top is the end of the `Vec`, so drawing is
//! a pop. The discard pile is an unordered bag. The last-action slot shows
//! the most recently played action card and is never reshuffled.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Cards produced by a draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards drawn, in draw order. May be fewer than requested.
    pub cards: Vec<Card>,

    /// Whether the discard pile was reshuffled into the draw pile.
    pub reshuffled: bool,
}

/// Shared card piles.
///
/// ## Example
///
/// ```
/// use monopoly_deal::cards::{Card, CardId};
/// use monopoly_deal::core::GameRng;
/// use monopoly_deal::zones::Piles;
///
/// let deck: Vec<Card> = (0..3).map(|i| Card::money(CardId::new(i), 1)).collect();
/// let mut piles = Piles::new(deck);
/// let mut rng = GameRng::new(0);
///
/// let outcome = piles.draw(5, &mut rng);
/// assert_eq!(outcome.cards.len(), 3);
/// assert_eq!(piles.draw_len(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    /// Draw pile; the last element is the top card.
    pub draw: Vec<Card>,

    /// Discard pile.
    pub discard: Vec<Card>,

    /// Last action card played, excluded from reshuffles.
    pub action_slot: Option<Card>,
}

impl Piles {
    /// Create piles with `deck` as the draw pile (already in draw order).
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            draw: deck,
            discard: Vec::new(),
            action_slot: None,
        }
    }

    /// Shuffle the draw pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw);
    }

    /// Draw up to `count` cards, reshuffling the discard pile in if the draw
    /// pile runs out. Yields fewer cards when both piles are exhausted.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> DrawOutcome {
        let mut outcome = DrawOutcome::default();

        while outcome.cards.len() < count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.draw.append(&mut self.discard);
                rng.shuffle(&mut self.draw);
                outcome.reshuffled = true;
            }

            match self.draw.pop() {
                Some(card) => outcome.cards.push(card),
                None => break,
            }
        }

        outcome
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Show `card` in the last-action slot.
    ///
    /// The previous occupant moves to the discard pile.
    pub fn play_action(&mut self, card: Card) {
        if let Some(previous) = self.action_slot.replace(card) {
            self.discard.push(previous);
        }
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Total cards held by the piles, including the action slot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw.len() + self.discard.len() + usize::from(self.action_slot.is_some())
    }

    /// Check whether the piles hold no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

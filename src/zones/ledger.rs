//! Per-player holdings: hand, money pile and property sets.
//!
//! ## Queries
//!
//! Asset values, complete sets and rent due are derived on demand and never
//! mutate the ledger.
//!
//! ## Mutations
//!
//! Removals are addressed by `CardId` (or by position for the index-based
//! variants) and return `None` when the card is no longer there. A stale
//! reference is a no-op, never a panic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{ActionKind, Card, CardId, Color, HOTEL_RENT_BONUS, HOUSE_RENT_BONUS};
use crate::core::action::AssetRef;

/// Properties of one color, plus any buildings on them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    /// Property cards counting toward this color.
    pub cards: Vec<Card>,

    /// House, if built.
    pub house: Option<Card>,

    /// Hotel, if built.
    pub hotel: Option<Card>,
}

impl PropertySet {
    /// Whether the set has at least the required number of cards.
    #[must_use]
    pub fn is_complete(&self, color: Color) -> bool {
        self.cards.len() >= color.set_size()
    }

    /// Buildings on this set.
    pub fn buildings(&self) -> impl Iterator<Item = &Card> {
        self.house.iter().chain(self.hotel.iter())
    }

    fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.house.is_none() && self.hotel.is_none()
    }

    fn card_count(&self) -> usize {
        self.cards.len() + self.buildings().count()
    }
}

/// Everything a player holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLedger {
    /// Hand; order is display-only.
    pub hand: Vec<Card>,

    /// Money pile, including action cards banked for value.
    pub money: Vec<Card>,

    /// Property sets keyed by color.
    pub properties: FxHashMap<Color, PropertySet>,
}

impl PlayerLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Hand ===

    /// Look up a card in hand.
    #[must_use]
    pub fn hand_card(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove a card from hand.
    pub fn take_from_hand(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(index))
    }

    /// First Just Say No card in hand.
    #[must_use]
    pub fn just_say_no(&self) -> Option<CardId> {
        self.hand.iter().find(|c| c.is_just_say_no()).map(|c| c.id)
    }

    /// Whether the hand holds a Just Say No card.
    #[must_use]
    pub fn has_just_say_no(&self) -> bool {
        self.just_say_no().is_some()
    }

    // === Money ===

    /// Add a card to the money pile.
    pub fn add_money(&mut self, card: Card) {
        self.money.push(card);
    }

    /// Remove a card from the money pile by id.
    pub fn remove_money(&mut self, id: CardId) -> Option<Card> {
        let index = self.money.iter().position(|c| c.id == id)?;
        self.remove_money_at(index)
    }

    /// Remove a card from the money pile by position.
    pub fn remove_money_at(&mut self, index: usize) -> Option<Card> {
        (index < self.money.len()).then(|| self.money.remove(index))
    }

    /// Sum of money pile values.
    #[must_use]
    pub fn money_value(&self) -> u32 {
        self.money.iter().map(|c| c.value).sum()
    }

    // === Properties ===

    /// Place a property in `color`, updating its active color.
    ///
    /// Returns the card back if it is not a property or cannot count as
    /// `color`.
    pub fn add_property(&mut self, mut card: Card, color: Color) -> Result<(), Card> {
        if !card.set_active_color(color) {
            return Err(card);
        }
        self.properties.entry(color).or_default().cards.push(card);
        Ok(())
    }

    /// Remove a placed property by id.
    pub fn remove_property(&mut self, id: CardId) -> Option<Card> {
        let color = self.property_color(id)?;
        let index = self.properties.get(&color)?.cards.iter().position(|c| c.id == id)?;
        self.remove_property_at(color, index)
    }

    /// Remove a placed property by color and position.
    pub fn remove_property_at(&mut self, color: Color, index: usize) -> Option<Card> {
        let set = self.properties.get_mut(&color)?;
        if index >= set.cards.len() {
            return None;
        }
        let card = set.cards.remove(index);
        if set.is_empty() {
            self.properties.remove(&color);
        }
        Some(card)
    }

    /// Look up a placed property.
    #[must_use]
    pub fn property(&self, id: CardId) -> Option<&Card> {
        self.properties
            .values()
            .flat_map(|set| set.cards.iter())
            .find(|c| c.id == id)
    }

    /// The color group a placed property sits in.
    #[must_use]
    pub fn property_color(&self, id: CardId) -> Option<Color> {
        self.properties
            .iter()
            .find(|(_, set)| set.cards.iter().any(|c| c.id == id))
            .map(|(&color, _)| color)
    }

    /// Property cards in one color group.
    #[must_use]
    pub fn properties_of(&self, color: Color) -> &[Card] {
        self.properties
            .get(&color)
            .map_or(&[][..], |set| set.cards.as_slice())
    }

    /// Number of property cards in one color group.
    #[must_use]
    pub fn property_count(&self, color: Color) -> usize {
        self.properties_of(color).len()
    }

    /// Property sets in board order.
    pub fn sets(&self) -> impl Iterator<Item = (Color, &PropertySet)> {
        Color::ALL
            .into_iter()
            .filter_map(move |color| self.properties.get(&color).map(|set| (color, set)))
    }

    /// Move a placed wildcard to another of its colors.
    ///
    /// Returns false (ledger unchanged) if the card is not placed here or
    /// cannot count as `color`.
    pub fn move_property(&mut self, id: CardId, color: Color) -> bool {
        let allowed = self
            .property(id)
            .and_then(Card::as_property)
            .is_some_and(|p| p.colors.contains(color));
        if !allowed {
            return false;
        }
        match self.remove_property(id) {
            Some(card) => self.add_property(card, color).is_ok(),
            None => false,
        }
    }

    /// Remove a whole color group, buildings included.
    ///
    /// Full wildcards are never seized: they stay behind under `color`.
    pub fn take_set(&mut self, color: Color) -> Option<PropertySet> {
        let mut set = self.properties.remove(&color)?;
        let (kept, taken): (Vec<Card>, Vec<Card>) =
            set.cards.into_iter().partition(Card::is_full_wildcard);
        set.cards = taken;
        if !kept.is_empty() {
            self.properties.insert(
                color,
                PropertySet {
                    cards: kept,
                    ..PropertySet::default()
                },
            );
        }
        Some(set)
    }

    /// Whether `color` holds at least one property that could be seized.
    #[must_use]
    pub fn has_seizable(&self, color: Color) -> bool {
        self.properties_of(color).iter().any(|c| !c.is_full_wildcard())
    }

    /// Merge a color group into ours.
    ///
    /// A building whose slot is already taken goes to the money pile.
    pub fn add_set(&mut self, color: Color, incoming: PropertySet) {
        let PropertySet { cards, house, hotel } = incoming;
        let mut spill = Vec::new();
        {
            let set = self.properties.entry(color).or_default();
            set.cards.extend(cards);
            for (slot, building) in [(&mut set.house, house), (&mut set.hotel, hotel)] {
                if let Some(card) = building {
                    if slot.is_none() {
                        *slot = Some(card);
                    } else {
                        spill.push(card);
                    }
                }
            }
        }
        self.money.extend(spill);
    }

    // === Buildings ===

    /// Put a House or Hotel on `color`.
    ///
    /// Returns the card back if it is not a building or its slot is taken.
    pub fn add_building(&mut self, color: Color, card: Card) -> Result<(), Card> {
        let Some(set) = self.properties.get_mut(&color) else {
            return Err(card);
        };
        let slot = match card.action_kind() {
            Some(ActionKind::House) => &mut set.house,
            Some(ActionKind::Hotel) => &mut set.hotel,
            _ => return Err(card),
        };
        if slot.is_some() {
            return Err(card);
        }
        *slot = Some(card);
        Ok(())
    }

    /// Remove a building by id.
    pub fn remove_building(&mut self, id: CardId) -> Option<Card> {
        let (&color, set) = self
            .properties
            .iter_mut()
            .find(|(_, set)| set.buildings().any(|c| c.id == id))?;
        let card = if set.house.as_ref().is_some_and(|c| c.id == id) {
            set.house.take()
        } else {
            set.hotel.take()
        };
        if set.is_empty() {
            self.properties.remove(&color);
        }
        card
    }

    /// Look up a building.
    #[must_use]
    pub fn building(&self, id: CardId) -> Option<&Card> {
        self.properties
            .values()
            .flat_map(PropertySet::buildings)
            .find(|c| c.id == id)
    }

    // === Derived queries ===

    /// Whether a color group is complete.
    #[must_use]
    pub fn is_complete(&self, color: Color) -> bool {
        self.properties
            .get(&color)
            .is_some_and(|set| set.is_complete(color))
    }

    /// Complete color groups, in board order.
    #[must_use]
    pub fn complete_colors(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&color| self.is_complete(color))
            .collect()
    }

    /// Number of complete color groups.
    #[must_use]
    pub fn complete_sets(&self) -> usize {
        self.complete_colors().len()
    }

    /// Rent charged for `color`: the schedule for the cards held, plus
    /// building bonuses while the set is complete.
    #[must_use]
    pub fn rent_due(&self, color: Color) -> u32 {
        let Some(set) = self.properties.get(&color) else {
            return 0;
        };
        let mut rent = color.rent_for(set.cards.len());
        if set.is_complete(color) {
            if set.house.is_some() {
                rent += HOUSE_RENT_BONUS;
            }
            if set.hotel.is_some() {
                rent += HOTEL_RENT_BONUS;
            }
        }
        rent
    }

    /// Total value of money, properties and buildings.
    #[must_use]
    pub fn asset_value(&self) -> u32 {
        let property_value: u32 = self
            .properties
            .values()
            .flat_map(|set| set.cards.iter().chain(set.buildings()))
            .map(|c| c.value)
            .sum();
        self.money_value() + property_value
    }

    /// Asset value excluding full wildcards, which are never payable.
    #[must_use]
    pub fn available_asset_value(&self) -> u32 {
        self.available_assets()
            .into_iter()
            .filter_map(|asset| self.payable_value(asset))
            .sum()
    }

    /// Whether the player has anything of value to pay with.
    #[must_use]
    pub fn has_any_available_assets(&self) -> bool {
        self.available_asset_value() > 0
    }

    /// Every asset that may be surrendered in a payment.
    #[must_use]
    pub fn available_assets(&self) -> Vec<AssetRef> {
        let mut assets: Vec<AssetRef> = self.money.iter().map(|c| AssetRef::Money(c.id)).collect();
        for (_, set) in self.sets() {
            assets.extend(
                set.cards
                    .iter()
                    .filter(|c| !c.is_full_wildcard())
                    .map(|c| AssetRef::Property(c.id)),
            );
            assets.extend(set.buildings().map(|c| AssetRef::Building(c.id)));
        }
        assets
    }

    /// Value of an asset if it is held and payable.
    #[must_use]
    pub fn payable_value(&self, asset: AssetRef) -> Option<u32> {
        let card = match asset {
            AssetRef::Money(id) => self.money.iter().find(|c| c.id == id),
            AssetRef::Property(id) => self.property(id).filter(|c| !c.is_full_wildcard()),
            AssetRef::Building(id) => self.building(id),
        }?;
        Some(card.value)
    }

    /// Cards held in every zone of this ledger.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len()
            + self.money.len()
            + self.properties.values().map(PropertySet::card_count).sum::<usize>()
    }
}

/// Move one payable asset from `from` to `to`.
///
/// Money lands in the payee's money pile, a property keeps its color group,
/// and a building lands in the payee's money pile. Returns false (both
/// ledgers unchanged) if the asset is gone or is a full wildcard.
pub fn transfer_asset(from: &mut PlayerLedger, to: &mut PlayerLedger, asset: AssetRef) -> bool {
    if from.payable_value(asset).is_none() {
        return false;
    }
    match asset {
        AssetRef::Money(id) => match from.remove_money(id) {
            Some(card) => {
                to.add_money(card);
                true
            }
            None => false,
        },
        AssetRef::Property(id) => {
            let Some(color) = from.property_color(id) else {
                return false;
            };
            let Some(card) = from.remove_property(id) else {
                return false;
            };
            match to.add_property(card, color) {
                Ok(()) => true,
                Err(card) => {
                    let restored = from.add_property(card, color);
                    debug_assert!(restored.is_ok(), "property could not return to its own set");
                    false
                }
            }
        }
        AssetRef::Building(id) => match from.remove_building(id) {
            Some(card) => {
                to.add_money(card);
                true
            }
            None => false,
        },
    }
}

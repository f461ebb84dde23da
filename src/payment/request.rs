//! Payment requests and settlement.
//!
//! ## Capping
//!
//! A request records what was asked (`requested`) and what can actually be
//! collected (`capped`): the requested amount limited by the payer's
//! available assets. Full wildcards never count and can never be selected.
//!
//! ## Selection
//!
//! The payer toggles assets in and out of the selection; the running total
//! is recomputed on every toggle. Confirming is allowed as soon as anything
//! is selected, so a short payment is final. With nothing payable
//! (`capped == 0`) an empty confirmation settles the request.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::action::AssetRef;
use crate::core::error::ActionError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::zones::{transfer_asset, PlayerLedger};

/// Whether the current selection covers the capped amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Selected total is below the capped amount.
    Insufficient,
    /// Selected total meets or exceeds the capped amount.
    Sufficient,
}

/// Result of a confirmed payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    /// Value transferred ($M).
    pub amount: u32,
    /// Cards transferred.
    pub cards: usize,
}

/// A pending payment from one player to another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Player who owes.
    pub payer: PlayerId,

    /// Player who collects.
    pub payee: PlayerId,

    /// Amount demanded by the action.
    pub requested: u32,

    /// Amount actually owed: `min(requested, payer's available assets)`.
    pub capped: u32,

    /// Assets chosen so far.
    pub selection: SmallVec<[AssetRef; 8]>,

    selected: u32,
}

impl PaymentRequest {
    /// Open a request against `payer_ledger`.
    ///
    /// ```
    /// use monopoly_deal::cards::{Card, CardId};
    /// use monopoly_deal::core::PlayerId;
    /// use monopoly_deal::payment::PaymentRequest;
    /// use monopoly_deal::zones::PlayerLedger;
    ///
    /// let mut ledger = PlayerLedger::new();
    /// ledger.add_money(Card::money(CardId::new(1), 2));
    ///
    /// let request = PaymentRequest::new(PlayerId::new(1), PlayerId::new(0), 5, &ledger);
    /// assert_eq!(request.capped, 2);
    /// ```
    #[must_use]
    pub fn new(payer: PlayerId, payee: PlayerId, requested: u32, payer_ledger: &PlayerLedger) -> Self {
        Self {
            payer,
            payee,
            requested,
            capped: requested.min(payer_ledger.available_asset_value()),
            selection: SmallVec::new(),
            selected: 0,
        }
    }

    /// Running total of the selection.
    #[must_use]
    pub fn selected_total(&self) -> u32 {
        self.selected
    }

    /// Whether `asset` is currently selected.
    #[must_use]
    pub fn is_selected(&self, asset: AssetRef) -> bool {
        self.selection.contains(&asset)
    }

    /// Select or deselect an asset.
    ///
    /// Returns whether the asset is selected afterwards.
    pub fn toggle(&mut self, asset: AssetRef, payer_ledger: &PlayerLedger) -> Result<bool, ActionError> {
        if let Some(index) = self.selection.iter().position(|&a| a == asset) {
            self.selection.remove(index);
            self.recompute(payer_ledger);
            return Ok(false);
        }

        if let AssetRef::Property(id) = asset {
            if payer_ledger.property(id).is_some_and(|c| c.is_full_wildcard()) {
                return Err(ActionError::ProtectedAsset);
            }
        }
        if payer_ledger.payable_value(asset).is_none() {
            return Err(ActionError::AssetNotFound(asset.card()));
        }

        self.selection.push(asset);
        self.recompute(payer_ledger);
        Ok(true)
    }

    /// Select every available asset.
    pub fn select_all(&mut self, payer_ledger: &PlayerLedger) {
        self.selection = payer_ledger.available_assets().into_iter().collect();
        self.recompute(payer_ledger);
    }

    /// Whether the selection covers the capped amount.
    #[must_use]
    pub fn status(&self) -> PaymentStatus {
        if self.selected >= self.capped {
            PaymentStatus::Sufficient
        } else {
            PaymentStatus::Insufficient
        }
    }

    /// How far the selection exceeds the capped amount. No change is given.
    #[must_use]
    pub fn overpayment(&self) -> u32 {
        self.selected.saturating_sub(self.capped)
    }

    /// Check that the request can be confirmed as it stands.
    pub fn validate_confirm(&self) -> Result<(), ActionError> {
        if self.selection.is_empty() && self.capped > 0 {
            return Err(ActionError::EmptySelection);
        }
        Ok(())
    }

    /// Transfer the selection from payer to payee.
    ///
    /// Money moves first, then properties grouped by color, then buildings.
    /// Assets that are no longer held are skipped.
    pub fn settle(&self, players: &mut PlayerMap<PlayerLedger>) -> Result<Settlement, ActionError> {
        self.validate_confirm()?;
        let Some((payer, payee)) = players.pair_mut(self.payer, self.payee) else {
            return Err(ActionError::NoPendingPayment);
        };

        let mut ordered: Vec<AssetRef> = self.selection.to_vec();
        ordered.sort_by_key(|asset| match *asset {
            AssetRef::Money(_) => (0, None),
            AssetRef::Property(id) => (1, payer.property_color(id)),
            AssetRef::Building(_) => (2, None),
        });

        let mut settlement = Settlement::default();
        for asset in ordered {
            let value = payer.payable_value(asset);
            match value {
                Some(value) if transfer_asset(payer, payee, asset) => {
                    settlement.amount += value;
                    settlement.cards += 1;
                }
                _ => debug!(?asset, "skipping asset no longer held by payer"),
            }
        }

        Ok(settlement)
    }

    fn recompute(&mut self, payer_ledger: &PlayerLedger) {
        self.selected = self
            .selection
            .iter()
            .filter_map(|&asset| payer_ledger.payable_value(asset))
            .sum();
    }
}

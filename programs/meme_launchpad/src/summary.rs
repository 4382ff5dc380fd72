use anchor_lang::prelude::Pubkey;

use crate::constants::ALPHA_PROGRESS_BPS;
use crate::state::TokenInfo;

/// What a token card and the detail page show for one token.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenSummary {
    pub address: Pubkey,
    pub name: String,
    pub symbol: String,
    pub metadata: String,
    pub creator: Pubkey,
    pub current_price: f64,
    pub start_price: Option<f64>,
    pub market_cap: f64,
    pub max_supply: f64,
    pub creator_supply_percent: f64,
    pub progress_bps: u16,
    pub completed: bool,
}

impl TokenSummary {
    pub fn new(address: Pubkey, info: &TokenInfo, current_price: f64, start_price: Option<f64>) -> Self {
        let creator_supply_percent = if info.max_supply == 0 {
            0.0
        } else {
            info.creator_allocation as f64 * 100.0 / info.max_supply as f64
        };
        TokenSummary {
            address,
            name: info.name.clone(),
            symbol: info.symbol.clone(),
            metadata: info.metadata.clone(),
            creator: info.creator,
            current_price,
            start_price,
            market_cap: info.current_supply_ui() * current_price,
            max_supply: info.max_supply_ui(),
            creator_supply_percent,
            progress_bps: info.progress_bps(),
            completed: info.completed,
        }
    }

    /// Percent change of the current price over the start price.
    pub fn price_change_percent(&self) -> Option<f64> {
        let start = self.start_price.filter(|p| *p > 0.0)?;
        Some((self.current_price - start) / start * 100.0)
    }

    /// Close to DEX migration: trending tokens shown in their own section.
    pub fn is_alpha(&self) -> bool {
        !self.completed && self.progress_bps >= ALPHA_PROGRESS_BPS
    }
}

/// Splits summaries into the alpha section and the rest, keeping order.
pub fn partition_alpha(tokens: Vec<TokenSummary>) -> (Vec<TokenSummary>, Vec<TokenSummary>) {
    tokens.into_iter().partition(TokenSummary::is_alpha)
}

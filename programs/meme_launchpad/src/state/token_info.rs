use anchor_lang::prelude::*;

use crate::constants::TOKEN_DECIMALS;

/// Live state of a launched token, as returned by the program's
/// `get_token_info` view. Owned by the program; only read here.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    // metadata URI (image and description)
    pub metadata: String,
    pub creator: Pubkey,
    pub creator_allocation: u64,
    pub max_supply: u64,
    pub current_supply: u64,
    // virtual reserves the program prices trades against
    pub virtual_sol_reserves: u64,
    pub virtual_token_reserves: u64,
    // set once the curve has sold out and migrated
    pub completed: bool,
    pub creation_time: i64,
}

impl TokenInfo {
    /// Current supply in whole tokens.
    pub fn current_supply_ui(&self) -> f64 {
        to_ui_amount(self.current_supply)
    }

    pub fn max_supply_ui(&self) -> f64 {
        to_ui_amount(self.max_supply)
    }

    /// Share of max supply already in circulation, in basis points.
    pub fn progress_bps(&self) -> u16 {
        if self.max_supply == 0 {
            return 0;
        }
        let bps = (self.current_supply as u128) * 10_000 / (self.max_supply as u128);
        bps.min(10_000) as u16
    }
}

/// Converts an amount in the mint's smallest unit into whole tokens.
pub fn to_ui_amount(amount: u64) -> f64 {
    amount as f64 / 10f64.powi(TOKEN_DECIMALS as i32)
}

use anchor_lang::solana_program::pubkey::MAX_SEED_LEN;

use crate::constants::{MAX_SYMBOL_LEN, TOKEN_DECIMALS};
use crate::error::ConfigError;

/// Parameters fixed when a token is created. `max_supply` counts whole
/// tokens; the mint itself works in base units of `TOKEN_DECIMALS`.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenConfig {
    pub name: String,
    pub symbol: String,
    pub metadata_uri: String,
    pub max_supply: u64,
    pub start_price: f64,
}

impl TokenConfig {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        metadata_uri: impl Into<String>,
        max_supply: u64,
        start_price: f64,
    ) -> Result<Self, ConfigError> {
        let config = TokenConfig {
            name: name.into().trim().to_string(),
            symbol: symbol.into().trim().to_string(),
            metadata_uri: metadata_uri.into(),
            max_supply,
            start_price,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from one of the preset supply tiers offered at creation.
    pub fn from_tier(
        name: impl Into<String>,
        symbol: impl Into<String>,
        metadata_uri: impl Into<String>,
        tier: SupplyTier,
    ) -> Result<Self, ConfigError> {
        Self::new(name, symbol, metadata_uri, tier.max_supply(), tier.start_price())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if self.symbol.is_empty() {
            return Err(ConfigError::EmptySymbol);
        }
        if self.symbol.chars().count() > MAX_SYMBOL_LEN {
            return Err(ConfigError::SymbolTooLong { max: MAX_SYMBOL_LEN });
        }
        // the symbol is a mint address seed
        if self.symbol.len() > MAX_SEED_LEN {
            return Err(ConfigError::SymbolTooManyBytes { max: MAX_SEED_LEN });
        }
        if self.max_supply == 0 {
            return Err(ConfigError::ZeroMaxSupply);
        }
        self.base_supply()?;
        if !self.start_price.is_finite() || self.start_price <= 0.0 {
            return Err(ConfigError::InvalidStartPrice(self.start_price));
        }
        Ok(())
    }

    /// Max supply in the mint's base units, as sent to the program.
    pub fn base_supply(&self) -> Result<u64, ConfigError> {
        self.max_supply
            .checked_mul(10u64.pow(TOKEN_DECIMALS as u32))
            .ok_or(ConfigError::SupplyOverflow(self.max_supply))
    }
}

/// Max supply presets, in whole tokens. Larger supplies start at proportionally lower prices
/// so that every tier opens at the same fully diluted valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplyTier {
    OneMillion,
    TenMillion,
    HundredMillion,
    OneBillion,
}

impl SupplyTier {
    pub const ALL: [SupplyTier; 4] = [
        SupplyTier::OneMillion,
        SupplyTier::TenMillion,
        SupplyTier::HundredMillion,
        SupplyTier::OneBillion,
    ];

    pub fn max_supply(self) -> u64 {
        match self {
            SupplyTier::OneMillion => 1_000_000,
            SupplyTier::TenMillion => 10_000_000,
            SupplyTier::HundredMillion => 100_000_000,
            SupplyTier::OneBillion => 1_000_000_000,
        }
    }

    pub fn start_price(self) -> f64 {
        match self {
            SupplyTier::OneMillion => 0.000001,
            SupplyTier::TenMillion => 0.0000001,
            SupplyTier::HundredMillion => 0.00000001,
            SupplyTier::OneBillion => 0.000000001,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SupplyTier::OneMillion => "1 Million",
            SupplyTier::TenMillion => "10 Million",
            SupplyTier::HundredMillion => "100 Million",
            SupplyTier::OneBillion => "1 Billion",
        }
    }

    pub fn from_max_supply(max_supply: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.max_supply() == max_supply)
    }
}

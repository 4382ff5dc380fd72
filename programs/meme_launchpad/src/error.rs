use anchor_lang::prelude::*;
use thiserror::Error;

/// Error codes raised by the launchpad program. Anchor numbers them from
/// `ERROR_CODE_OFFSET` (6000) in declaration order.
/// The table mirrors the deployed meme launchpad program's error enum variant
/// for variant; codes are positional, so the order must match that program.
#[error_code]
pub enum LaunchpadError {
    #[msg("Insufficient token balance")]
    InsufficientTokenBalance,
    #[msg("Insufficient SOL balance")]
    InsufficientSolBalance,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Invalid token amount")]
    InvalidTokenAmount,
    #[msg("Invalid SOL amount")]
    InvalidSolAmount,
    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,
    #[msg("Token sold limit reached")]
    TokenSoldLimitReached,
    #[msg("Bonding curve not active")]
    BondingCurveNotActive,
}

impl LaunchpadError {
    const ALL: [LaunchpadError; 8] = [
        LaunchpadError::InsufficientTokenBalance,
        LaunchpadError::InsufficientSolBalance,
        LaunchpadError::ArithmeticOverflow,
        LaunchpadError::InvalidTokenAmount,
        LaunchpadError::InvalidSolAmount,
        LaunchpadError::SlippageExceeded,
        LaunchpadError::TokenSoldLimitReached,
        LaunchpadError::BondingCurveNotActive,
    ];

    /// Maps a custom program error number back to its variant.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| u32::from(*e) == code)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Token name must not be empty")]
    EmptyName,
    #[error("Token symbol must not be empty")]
    EmptySymbol,
    #[error("Token symbol exceeds {max} characters")]
    SymbolTooLong { max: usize },
    #[error("Token symbol exceeds {max} bytes")]
    SymbolTooManyBytes { max: usize },
    #[error("Max supply must be greater than zero")]
    ZeroMaxSupply,
    #[error("Max supply of {0} tokens does not fit in base units")]
    SupplyOverflow(u64),
    #[error("Start price must be a positive number, got {0}")]
    InvalidStartPrice(f64),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read registry: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed registry: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid address {address} for {contract} on network {network_id}")]
    InvalidAddress {
        network_id: u64,
        contract: String,
        address: String,
    },
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Transaction rejected: {0}")]
    Rejected(String),
    #[error("Transaction reverted with program error {code}: {message}")]
    Reverted { code: u32, message: String },
    #[error("Failed to serialize program data: {0}")]
    Serialization(#[from] std::io::Error),
    #[error("View call returned no data")]
    EmptyReturnData,
    #[error("No program address for {0} seeds")]
    InvalidSeeds(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Builds a revert error from a custom program error number.
    pub fn reverted(code: u32) -> Self {
        let message = match LaunchpadError::from_code(code) {
            Some(err) => err.to_string(),
            None => "unknown program error".to_string(),
        };
        ClientError::Reverted { code, message }
    }

    /// The decoded program error, if this is a revert the launchpad raised.
    pub fn program_error(&self) -> Option<LaunchpadError> {
        match self {
            ClientError::Reverted { code, .. } => LaunchpadError::from_code(*code),
            _ => None,
        }
    }
}

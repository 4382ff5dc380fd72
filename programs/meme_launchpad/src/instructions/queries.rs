use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_lang::AnchorDeserialize;

use super::*;
use crate::error::ClientError;
use crate::state::TokenInfo;

pub const GET_ALL_TOKENS: &str = "get_all_tokens";
pub const GET_TOKEN_COUNT: &str = "get_token_count";
pub const GET_TOKEN_INFO: &str = "get_token_info";
pub const GET_CURRENT_PRICE: &str = "get_current_price";

/// Read-only program views. They are simulated rather than submitted and
/// answer through the transaction's return data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    AllTokens,
    TokenCount,
    TokenInfo(Pubkey),
    CurrentPrice(Pubkey),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::AllTokens => GET_ALL_TOKENS,
            View::TokenCount => GET_TOKEN_COUNT,
            View::TokenInfo(_) => GET_TOKEN_INFO,
            View::CurrentPrice(_) => GET_CURRENT_PRICE,
        }
    }

    pub fn instruction(&self, program_id: &Pubkey) -> Instruction {
        let accounts = match self {
            View::AllTokens | View::TokenCount => {
                vec![AccountMeta::new_readonly(global_state_address(program_id), false)]
            }
            View::TokenInfo(mint) | View::CurrentPrice(mint) => vec![
                AccountMeta::new_readonly(bonding_curve_address(program_id, mint), false),
                AccountMeta::new_readonly(*mint, false),
            ],
        };
        // views take no arguments
        Instruction {
            program_id: *program_id,
            accounts,
            data: sighash(self.name()).to_vec(),
        }
    }

    /// Recovers a view from its instruction, as a chain simulator would.
    pub fn from_instruction(ix: &Instruction) -> Option<View> {
        let discriminator = ix.data.get(..8)?;
        let mint = ix.accounts.get(1).map(|meta| meta.pubkey);
        if discriminator == sighash(GET_ALL_TOKENS) {
            Some(View::AllTokens)
        } else if discriminator == sighash(GET_TOKEN_COUNT) {
            Some(View::TokenCount)
        } else if discriminator == sighash(GET_TOKEN_INFO) {
            mint.map(View::TokenInfo)
        } else if discriminator == sighash(GET_CURRENT_PRICE) {
            mint.map(View::CurrentPrice)
        } else {
            None
        }
    }
}

pub fn decode_all_tokens(data: &[u8]) -> Result<Vec<Pubkey>, ClientError> {
    Ok(Vec::<Pubkey>::try_from_slice(data)?)
}

pub fn decode_token_count(data: &[u8]) -> Result<u64, ClientError> {
    Ok(u64::try_from_slice(data)?)
}

pub fn decode_token_info(data: &[u8]) -> Result<TokenInfo, ClientError> {
    Ok(TokenInfo::try_from_slice(data)?)
}

/// Raw 1e18 fixed point price.
pub fn decode_current_price(data: &[u8]) -> Result<u128, ClientError> {
    Ok(u128::try_from_slice(data)?)
}

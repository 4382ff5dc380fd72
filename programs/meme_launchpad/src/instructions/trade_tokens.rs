use std::result::Result;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::{self, get_associated_token_address},
    token,
};

use super::*;
use crate::error::ClientError;

pub const BUY_TOKENS: &str = "buy_tokens";
pub const SELL_TOKENS: &str = "sell_tokens";

/// Spend `sol_amount` lamports; revert if fewer than `min_tokens_out` come back.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyTokensArgs {
    pub sol_amount: u64,
    pub min_tokens_out: u64,
}

/// Sell `token_amount`; revert if proceeds fall below `min_sol_out` lamports.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellTokensArgs {
    pub token_amount: u64,
    pub min_sol_out: u64,
}

/// Accounts shared by `buy_tokens` and `sell_tokens`, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeTokensAccounts {
    pub trader: Pubkey,
    /// Trader's associated token account, created on first buy
    pub trader_token_account: Pubkey,
    pub sol_escrow: Pubkey,
    pub bonding_curve: Pubkey,
    pub bonding_curve_token_account: Pubkey,
    pub global_state: Pubkey,
    pub token_mint: Pubkey,
}

impl TradeTokensAccounts {
    pub fn derive(program_id: &Pubkey, trader: &Pubkey, token_mint: &Pubkey) -> Self {
        let bonding_curve = bonding_curve_address(program_id, token_mint);
        TradeTokensAccounts {
            trader: *trader,
            trader_token_account: get_associated_token_address(trader, token_mint),
            sol_escrow: sol_escrow_address(program_id, &bonding_curve),
            bonding_curve,
            bonding_curve_token_account: get_associated_token_address(&bonding_curve, token_mint),
            global_state: global_state_address(program_id),
            token_mint: *token_mint,
        }
    }

    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.trader, true),
            AccountMeta::new(self.trader_token_account, false),
            AccountMeta::new(self.sol_escrow, false),
            AccountMeta::new(self.bonding_curve, false),
            AccountMeta::new(self.bonding_curve_token_account, false),
            AccountMeta::new(self.global_state, false),
            AccountMeta::new_readonly(self.token_mint, false),
            AccountMeta::new_readonly(token::ID, false),
            AccountMeta::new_readonly(associated_token::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }
}

pub fn buy_tokens(
    program_id: &Pubkey,
    trader: &Pubkey,
    token_mint: &Pubkey,
    args: BuyTokensArgs,
) -> Result<Instruction, ClientError> {
    trade(program_id, trader, token_mint, BUY_TOKENS, &args)
}

pub fn sell_tokens(
    program_id: &Pubkey,
    trader: &Pubkey,
    token_mint: &Pubkey,
    args: SellTokensArgs,
) -> Result<Instruction, ClientError> {
    trade(program_id, trader, token_mint, SELL_TOKENS, &args)
}

fn trade<T: AnchorSerialize>(
    program_id: &Pubkey,
    trader: &Pubkey,
    token_mint: &Pubkey,
    name: &str,
    args: &T,
) -> Result<Instruction, ClientError> {
    let accounts = TradeTokensAccounts::derive(program_id, trader, token_mint);
    Ok(Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: instruction_data(name, args)?,
    })
}

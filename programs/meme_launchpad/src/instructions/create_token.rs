use std::result::Result;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::sysvar::rent;
use anchor_lang::system_program;
use anchor_spl::{
    associated_token::{self, get_associated_token_address},
    metadata::mpl_token_metadata::ID as METAPLEX_ID,
    token,
};

use super::*;
use crate::error::ClientError;

pub const CREATE_TOKEN: &str = "create_token";

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct CreateTokenArgs {
    pub name: String,
    pub symbol: String,
    pub metadata: String,
    pub total_supply: u64,
}

/// Accounts the program's `create_token` instruction expects, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateTokenAccounts {
    /// Pays for every account created and becomes the token's creator
    pub payer: Pubkey,
    /// Protocol-wide parameters and the token registry
    pub global_state: Pubkey,
    /// Curve state PDA for the new mint
    pub bonding_curve: Pubkey,
    /// Holds the SOL collected by purchases
    pub sol_escrow: Pubkey,
    pub token_mint: Pubkey,
    /// Curve-owned token account the supply is minted into
    pub bonding_curve_token_account: Pubkey,
    /// Metaplex metadata PDA for name, symbol and URI
    pub metadata: Pubkey,
}

impl CreateTokenAccounts {
    pub fn derive(program_id: &Pubkey, payer: &Pubkey, symbol: &str) -> Result<Self, ClientError> {
        let token_mint = token_mint_address(program_id, payer, symbol)?;
        let bonding_curve = bonding_curve_address(program_id, &token_mint);
        Ok(CreateTokenAccounts {
            payer: *payer,
            global_state: global_state_address(program_id),
            bonding_curve,
            sol_escrow: sol_escrow_address(program_id, &bonding_curve),
            token_mint,
            bonding_curve_token_account: get_associated_token_address(&bonding_curve, &token_mint),
            metadata: metadata_address(&token_mint),
        })
    }

    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.global_state, false),
            AccountMeta::new(self.bonding_curve, false),
            AccountMeta::new_readonly(self.sol_escrow, false),
            AccountMeta::new(self.token_mint, false),
            AccountMeta::new(self.bonding_curve_token_account, false),
            AccountMeta::new(self.metadata, false),
            AccountMeta::new_readonly(token::ID, false),
            AccountMeta::new_readonly(METAPLEX_ID, false),
            AccountMeta::new_readonly(associated_token::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(rent::ID, false),
        ]
    }
}

/// Builds the instruction that launches a token with its bonding curve.
pub fn create_token(
    program_id: &Pubkey,
    payer: &Pubkey,
    args: &CreateTokenArgs,
) -> Result<Instruction, ClientError> {
    let accounts = CreateTokenAccounts::derive(program_id, payer, &args.symbol)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: instruction_data(CREATE_TOKEN, args)?,
    })
}

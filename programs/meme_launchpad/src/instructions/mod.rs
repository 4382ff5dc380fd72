pub mod create_token;
pub mod queries;
pub mod trade_tokens;

pub use create_token::*;
pub use queries::*;
pub use trade_tokens::*;

use anchor_lang::solana_program::{hash::hash, pubkey::Pubkey};
use anchor_lang::AnchorSerialize;
use anchor_spl::metadata::mpl_token_metadata::ID as METAPLEX_ID;

use crate::constants::*;
use crate::error::ClientError;

/// Anchor instruction discriminator: the first 8 bytes of
/// `sha256("global:<instruction name>")`.
pub fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

/// Discriminator followed by the borsh encoded arguments.
pub fn instruction_data<T: AnchorSerialize>(name: &str, args: &T) -> Result<Vec<u8>, ClientError> {
    let mut data = sighash(name).to_vec();
    args.serialize(&mut data)?;
    Ok(data)
}

pub fn global_state_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[SEED_GLOBAL_STATE.as_bytes()], program_id).0
}

pub fn bonding_curve_address(program_id: &Pubkey, token_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[SEED_BONDING_CURVE.as_bytes(), token_mint.as_ref()],
        program_id,
    )
    .0
}

pub fn sol_escrow_address(program_id: &Pubkey, bonding_curve: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[SEED_SOL_ESCROW.as_bytes(), bonding_curve.as_ref()],
        program_id,
    )
    .0
}

/// Mints are derived from the creator and the symbol so the creation call
/// needs no extra signer. Every seed is capped at `MAX_SEED_LEN` bytes, so a
/// long symbol has no mint address.
pub fn token_mint_address(
    program_id: &Pubkey,
    creator: &Pubkey,
    symbol: &str,
) -> Result<Pubkey, ClientError> {
    Pubkey::try_find_program_address(
        &[
            SEED_TOKEN_MINT.as_bytes(),
            creator.as_ref(),
            symbol.as_bytes(),
        ],
        program_id,
    )
    .map(|(address, _)| address)
    .ok_or(ClientError::InvalidSeeds(SEED_TOKEN_MINT))
}

pub fn metadata_address(token_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            SEED_METADATA.as_bytes(),
            METAPLEX_ID.as_ref(),
            token_mint.as_ref(),
        ],
        &METAPLEX_ID,
    )
    .0
}

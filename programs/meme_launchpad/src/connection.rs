use std::future::Future;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;

use crate::error::ClientError;
use crate::transaction::TxSignature;

/// The chain as seen by the launchpad client: a signing wallet plus the
/// ability to simulate, send and confirm single-instruction transactions.
///
/// Implementations own signing, fee payment, blockhashes and retries at the
/// RPC level. The client never retries a transaction itself.
pub trait LaunchpadConnection: Send + Sync + 'static {
    /// Wallet that signs and pays for every submitted instruction.
    fn payer(&self) -> Pubkey;

    /// Runs a read-only instruction and returns its return data.
    fn simulate(
        &self,
        instruction: Instruction,
    ) -> impl Future<Output = Result<Vec<u8>, ClientError>> + Send;

    /// Signs and broadcasts a transaction. Errors if the wallet or the RPC
    /// node rejects it before broadcast.
    fn send(
        &self,
        instruction: Instruction,
    ) -> impl Future<Output = Result<TxSignature, ClientError>> + Send;

    /// Resolves once the transaction is confirmed, or errors if it reverted
    /// or was dropped.
    fn confirm(
        &self,
        signature: &TxSignature,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}

use std::collections::HashMap;
use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::connection::LaunchpadConnection;
use crate::constants::{DEFAULT_NETWORK_ID, DEFAULT_SLIPPAGE_BPS};
use crate::error::ClientError;
use crate::instructions::{self, BuyTokensArgs, CreateTokenArgs, SellTokensArgs, View};
use crate::quote;
use crate::registry::DeploymentRegistry;
use crate::state::{TokenConfig, TokenInfo};
use crate::summary::TokenSummary;
use crate::transaction::{PendingTransaction, TxKind, TxStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub network_id: u64,
    /// Tolerance used by the quote helpers, in basis points
    pub slippage_bps: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network_id: DEFAULT_NETWORK_ID,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
        }
    }
}

/// Client-side view of the launchpad, published to subscribers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaunchpadState {
    /// Token mints in the program's registry order
    pub tokens: Vec<Pubkey>,
    /// Number of completed token-list reads
    pub refreshes: u64,
    /// Latest lifecycle status per write intent
    pub last_status: HashMap<TxKind, TxStatus>,
}

struct Inner<C> {
    connection: Arc<C>,
    program_id: Option<Pubkey>,
    config: ClientConfig,
    state: watch::Sender<LaunchpadState>,
}

/// Facade over the launchpad program.
///
/// Writes (`create_token`, `buy_tokens`, `sell_tokens`) each submit a single
/// instruction and return a [`PendingTransaction`]; confirmation is awaited on
/// a task of its own, so intents never block one another. When a write
/// confirms, the token list is read again exactly once before the handle
/// reports `Confirmed`. Failed writes trigger no read.
///
/// When the registry has no launchpad for the configured network, writes are
/// no-ops returning `None` and reads return `Ok(None)`.
///
/// Writes spawn onto the ambient Tokio runtime and must be called from
/// within one.
pub struct LaunchpadClient<C> {
    inner: Arc<Inner<C>>,
}

impl<C> Clone for LaunchpadClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: LaunchpadConnection> LaunchpadClient<C> {
    pub fn new(connection: Arc<C>, registry: &DeploymentRegistry, config: ClientConfig) -> Self {
        let program_id = registry.launchpad(config.network_id).address();
        if program_id.is_none() {
            warn!(
                "No launchpad deployment for network {}; writes and reads are disabled",
                config.network_id
            );
        }
        let (state, _) = watch::channel(LaunchpadState::default());
        Self {
            inner: Arc::new(Inner {
                connection,
                program_id,
                config,
                state,
            }),
        }
    }

    pub fn program_id(&self) -> Option<Pubkey> {
        self.inner.program_id
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn subscribe(&self) -> watch::Receiver<LaunchpadState> {
        self.inner.state.subscribe()
    }

    pub fn state(&self) -> LaunchpadState {
        self.inner.state.borrow().clone()
    }

    pub fn last_status(&self, kind: TxKind) -> Option<TxStatus> {
        self.inner.state.borrow().last_status.get(&kind).cloned()
    }

    /// True once the latest `create_token` has confirmed.
    pub fn is_create_confirmed(&self) -> bool {
        self.is_confirmed(TxKind::CreateToken)
    }

    pub fn is_confirmed(&self, kind: TxKind) -> bool {
        self.last_status(kind).is_some_and(|s| s.is_confirmed())
    }

    // ---- writes ----

    pub fn create_token(
        &self,
        name: &str,
        symbol: &str,
        metadata_uri: &str,
        total_supply: u64,
    ) -> Option<PendingTransaction> {
        let Some(program_id) = self.inner.program_id else {
            debug!("Skipping create_token for {symbol}: launchpad not configured");
            return None;
        };
        let args = CreateTokenArgs {
            name: name.to_string(),
            symbol: symbol.to_string(),
            metadata: metadata_uri.to_string(),
            total_supply,
        };
        debug!("Submitting create_token for {symbol} with supply {total_supply}");
        let payer = self.inner.connection.payer();
        let ix = instructions::create_token(&program_id, &payer, &args);
        Some(self.submit(TxKind::CreateToken, ix))
    }

    /// Creates a token from a configuration, sending its max supply in base
    /// units. The start price only drives the local curve projection and is
    /// not sent. An invalid configuration is an error and nothing is submitted.
    pub fn launch(&self, config: &TokenConfig) -> Result<Option<PendingTransaction>, ClientError> {
        config.validate()?;
        let total_supply = config.base_supply()?;
        Ok(self.create_token(
            &config.name,
            &config.symbol,
            &config.metadata_uri,
            total_supply,
        ))
    }

    /// Buys `token` with `sol_amount` lamports. `min_tokens_out` is the
    /// caller's slippage floor; see [`LaunchpadClient::quote_min_tokens_out`].
    pub fn buy_tokens(
        &self,
        token: &Pubkey,
        min_tokens_out: u64,
        sol_amount: u64,
    ) -> Option<PendingTransaction> {
        let Some(program_id) = self.inner.program_id else {
            debug!("Skipping buy_tokens for {token}: launchpad not configured");
            return None;
        };
        let args = BuyTokensArgs {
            sol_amount,
            min_tokens_out,
        };
        let trader = self.inner.connection.payer();
        let ix = instructions::buy_tokens(&program_id, &trader, token, args);
        Some(self.submit(TxKind::BuyTokens, ix))
    }

    pub fn sell_tokens(
        &self,
        token: &Pubkey,
        token_amount: u64,
        min_sol_out: u64,
    ) -> Option<PendingTransaction> {
        let Some(program_id) = self.inner.program_id else {
            debug!("Skipping sell_tokens for {token}: launchpad not configured");
            return None;
        };
        let args = SellTokensArgs {
            token_amount,
            min_sol_out,
        };
        let trader = self.inner.connection.payer();
        let ix = instructions::sell_tokens(&program_id, &trader, token, args);
        Some(self.submit(TxKind::SellTokens, ix))
    }

    fn submit(
        &self,
        kind: TxKind,
        ix: Result<Instruction, ClientError>,
    ) -> PendingTransaction {
        let ix = match ix {
            Ok(ix) => ix,
            Err(err) => {
                warn!("Could not build {kind}: {err}");
                self.record(kind, TxStatus::Failed(err.to_string()));
                return PendingTransaction::failed(kind, err.to_string());
            }
        };

        self.record(kind, TxStatus::Pending);
        let (status_tx, status_rx) = watch::channel(TxStatus::Pending);
        let client = self.clone();
        tokio::spawn(async move {
            let status = client.drive(kind, ix).await;
            client.record(kind, status.clone());
            // the caller may have dropped its handle
            let _ = status_tx.send(status);
        });
        PendingTransaction::new(kind, status_rx)
    }

    async fn drive(&self, kind: TxKind, ix: Instruction) -> TxStatus {
        let connection = &self.inner.connection;
        let signature = match connection.send(ix).await {
            Ok(signature) => signature,
            Err(err) => {
                warn!("{kind} was not submitted: {err}");
                return TxStatus::Failed(err.to_string());
            }
        };
        debug!("{kind} submitted as {signature}");

        if let Err(err) = connection.confirm(&signature).await {
            warn!("{kind} {signature} failed: {err}");
            return TxStatus::Failed(err.to_string());
        }
        info!("{kind} {signature} confirmed");

        if let Err(err) = self.refresh_tokens().await {
            warn!("Token list refresh after {kind} failed: {err}");
        }
        TxStatus::Confirmed(signature)
    }

    fn record(&self, kind: TxKind, status: TxStatus) {
        self.inner.state.send_modify(|state| {
            state.last_status.insert(kind, status);
        });
    }

    // ---- reads ----

    async fn view(&self, view: View) -> Result<Option<Vec<u8>>, ClientError> {
        let Some(program_id) = self.inner.program_id else {
            return Ok(None);
        };
        let data = self
            .inner
            .connection
            .simulate(view.instruction(&program_id))
            .await?;
        if data.is_empty() {
            return Err(ClientError::EmptyReturnData);
        }
        Ok(Some(data))
    }

    pub async fn get_all_tokens(&self) -> Result<Option<Vec<Pubkey>>, ClientError> {
        match self.view(View::AllTokens).await? {
            Some(data) => Ok(Some(instructions::decode_all_tokens(&data)?)),
            None => Ok(None),
        }
    }

    pub async fn get_token_count(&self) -> Result<Option<u64>, ClientError> {
        match self.view(View::TokenCount).await? {
            Some(data) => Ok(Some(instructions::decode_token_count(&data)?)),
            None => Ok(None),
        }
    }

    pub async fn get_token_info(&self, token: &Pubkey) -> Result<Option<TokenInfo>, ClientError> {
        match self.view(View::TokenInfo(*token)).await? {
            Some(data) => Ok(Some(instructions::decode_token_info(&data)?)),
            None => Ok(None),
        }
    }

    /// Current price as a decimal, converted from the program's 1e18 fixed point.
    pub async fn get_current_price(&self, token: &Pubkey) -> Result<Option<f64>, ClientError> {
        match self.view(View::CurrentPrice(*token)).await? {
            Some(data) => {
                let raw = instructions::decode_current_price(&data)?;
                Ok(Some(quote::normalize_price(raw)))
            }
            None => Ok(None),
        }
    }

    /// Reads the token list again and publishes it to subscribers.
    pub async fn refresh_tokens(&self) -> Result<Option<Vec<Pubkey>>, ClientError> {
        let Some(tokens) = self.get_all_tokens().await? else {
            return Ok(None);
        };
        debug!("Token list refreshed: {} tokens", tokens.len());
        self.inner.state.send_modify(|state| {
            state.tokens = tokens.clone();
            state.refreshes += 1;
        });
        Ok(Some(tokens))
    }

    pub async fn get_token_summary(
        &self,
        token: &Pubkey,
        start_price: Option<f64>,
    ) -> Result<Option<TokenSummary>, ClientError> {
        let Some(info) = self.get_token_info(token).await? else {
            return Ok(None);
        };
        let price = self.get_current_price(token).await?.unwrap_or_default();
        Ok(Some(TokenSummary::new(*token, &info, price, start_price)))
    }

    /// Slippage floor for buying with `sol_in` lamports, quoted from the
    /// token's current virtual reserves and the configured tolerance.
    pub async fn quote_min_tokens_out(
        &self,
        token: &Pubkey,
        sol_in: u64,
    ) -> Result<Option<u64>, ClientError> {
        let info = self.get_token_info(token).await?;
        Ok(info.and_then(|info| quote::min_tokens_out(&info, sol_in, self.inner.config.slippage_bps)))
    }

    /// Slippage floor for selling `tokens_in`.
    pub async fn quote_min_sol_out(
        &self,
        token: &Pubkey,
        tokens_in: u64,
    ) -> Result<Option<u64>, ClientError> {
        let info = self.get_token_info(token).await?;
        Ok(info.and_then(|info| quote::min_sol_out(&info, tokens_in, self.inner.config.slippage_bps)))
    }
}

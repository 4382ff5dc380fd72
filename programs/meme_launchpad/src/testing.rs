use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{AnchorDeserialize, AnchorSerialize};

use crate::client::{ClientConfig, LaunchpadClient};
use crate::connection::LaunchpadConnection;
use crate::constants::{DEFAULT_NETWORK_ID, LAUNCHPAD_CONTRACT_NAME};
use crate::error::{ClientError, LaunchpadError};
use crate::instructions::{
    sighash, BuyTokensArgs, CreateTokenArgs, View, BUY_TOKENS, CREATE_TOKEN, SELL_TOKENS,
};
use crate::registry::DeploymentRegistry;
use crate::state::TokenInfo;
use crate::transaction::{TxKind, TxSignature, TxStatus};

#[derive(Clone, Debug)]
enum Outcome {
    Confirm,
    Revert(u32),
    Reject,
}

/// In-memory chain: answers views from its own tables and settles every
/// submitted transaction with a configurable outcome.
struct MockConnection {
    payer: Pubkey,
    outcome: Mutex<Outcome>,
    tokens: Mutex<Vec<Pubkey>>,
    infos: Mutex<HashMap<Pubkey, TokenInfo>>,
    prices: Mutex<HashMap<Pubkey, u128>>,
    sent: Mutex<Vec<Instruction>>,
    in_flight: Mutex<HashMap<TxSignature, Instruction>>,
    view_calls: Mutex<HashMap<&'static str, usize>>,
    confirm_delay: Duration,
}

impl MockConnection {
    fn new() -> Self {
        MockConnection {
            payer: Pubkey::new_unique(),
            outcome: Mutex::new(Outcome::Confirm),
            tokens: Mutex::new(Vec::new()),
            infos: Mutex::new(HashMap::new()),
            prices: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            in_flight: Mutex::new(HashMap::new()),
            view_calls: Mutex::new(HashMap::new()),
            confirm_delay: Duration::ZERO,
        }
    }

    fn with_delay(confirm_delay: Duration) -> Self {
        MockConnection {
            confirm_delay,
            ..Self::new()
        }
    }

    fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    fn list_token(&self, mint: Pubkey, info: TokenInfo, raw_price: u128) {
        self.tokens.lock().unwrap().push(mint);
        self.infos.lock().unwrap().insert(mint, info);
        self.prices.lock().unwrap().insert(mint, raw_price);
    }

    fn sent(&self) -> Vec<Instruction> {
        self.sent.lock().unwrap().clone()
    }

    fn view_calls(&self, name: &str) -> usize {
        self.view_calls
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .unwrap_or_default()
    }
}

impl LaunchpadConnection for MockConnection {
    fn payer(&self) -> Pubkey {
        self.payer
    }

    async fn simulate(&self, instruction: Instruction) -> Result<Vec<u8>, ClientError> {
        let view = View::from_instruction(&instruction)
            .ok_or_else(|| ClientError::Connection("unknown view".to_string()))?;
        *self.view_calls.lock().unwrap().entry(view.name()).or_default() += 1;
        let data = match view {
            View::AllTokens => self.tokens.lock().unwrap().try_to_vec()?,
            View::TokenCount => (self.tokens.lock().unwrap().len() as u64).try_to_vec()?,
            View::TokenInfo(mint) => match self.infos.lock().unwrap().get(&mint) {
                Some(info) => info.try_to_vec()?,
                None => Vec::new(),
            },
            View::CurrentPrice(mint) => match self.prices.lock().unwrap().get(&mint) {
                Some(price) => price.try_to_vec()?,
                None => Vec::new(),
            },
        };
        Ok(data)
    }

    async fn send(&self, instruction: Instruction) -> Result<TxSignature, ClientError> {
        if let Outcome::Reject = *self.outcome.lock().unwrap() {
            return Err(ClientError::Rejected("user declined".to_string()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(instruction.clone());
        let signature = TxSignature(format!("sig-{}", sent.len()));
        self.in_flight
            .lock()
            .unwrap()
            .insert(signature.clone(), instruction);
        Ok(signature)
    }

    async fn confirm(&self, signature: &TxSignature) -> Result<(), ClientError> {
        if !self.confirm_delay.is_zero() {
            tokio::time::sleep(self.confirm_delay).await;
        }
        let instruction = self
            .in_flight
            .lock()
            .unwrap()
            .remove(signature)
            .ok_or_else(|| ClientError::Connection("unknown signature".to_string()))?;
        let outcome = self.outcome.lock().unwrap().clone();
        match outcome {
            Outcome::Revert(code) => Err(ClientError::reverted(code)),
            Outcome::Reject => Err(ClientError::Rejected("dropped".to_string())),
            Outcome::Confirm => {
                if instruction.data[..8] == sighash(CREATE_TOKEN) {
                    let args = CreateTokenArgs::try_from_slice(&instruction.data[8..])?;
                    let info = TokenInfo {
                        name: args.name,
                        symbol: args.symbol,
                        metadata: args.metadata,
                        creator: instruction.accounts[0].pubkey,
                        creator_allocation: 0,
                        max_supply: args.total_supply,
                        current_supply: 0,
                        virtual_sol_reserves: 30_000_000_000,
                        virtual_token_reserves: args.total_supply,
                        completed: false,
                        creation_time: 1_700_000_000,
                    };
                    // account 4 is the new mint
                    self.list_token(instruction.accounts[4].pubkey, info, 1_000_000_000_000);
                }
                Ok(())
            }
        }
    }
}

fn registry() -> DeploymentRegistry {
    let mut registry = DeploymentRegistry::default();
    registry.insert(DEFAULT_NETWORK_ID, LAUNCHPAD_CONTRACT_NAME, crate::ID);
    registry
}

fn client(connection: &Arc<MockConnection>) -> LaunchpadClient<MockConnection> {
    LaunchpadClient::new(connection.clone(), &registry(), ClientConfig::default())
}

fn unconfigured_client(connection: &Arc<MockConnection>) -> LaunchpadClient<MockConnection> {
    let config = ClientConfig {
        network_id: 1,
        ..ClientConfig::default()
    };
    LaunchpadClient::new(connection.clone(), &registry(), config)
}

fn token_info(creator: Pubkey) -> TokenInfo {
    TokenInfo {
        name: "Doge Moon".to_string(),
        symbol: "DMOON".to_string(),
        metadata: "ipfs://doge".to_string(),
        creator,
        creator_allocation: 250_000_000_000,
        max_supply: 1_000_000_000_000,
        current_supply: 400_000_000_000,
        virtual_sol_reserves: 30_000_000_000,
        virtual_token_reserves: 1_073_000_000_000_000,
        completed: false,
        creation_time: 1_700_000_000,
    }
}

#[tokio::test]
async fn test_writes_are_noops_without_deployment() {
    let connection = Arc::new(MockConnection::new());
    let client = unconfigured_client(&connection);
    let mint = Pubkey::new_unique();

    assert_eq!(client.program_id(), None);
    assert!(client.create_token("Doge Moon", "DMOON", "ipfs://doge", 1_000_000).is_none());
    assert!(client.buy_tokens(&mint, 1, 1_000).is_none());
    assert!(client.sell_tokens(&mint, 1, 1).is_none());
    assert!(connection.sent().is_empty());

    assert_eq!(client.get_all_tokens().await.unwrap(), None);
    assert_eq!(client.get_token_count().await.unwrap(), None);
    assert_eq!(client.get_token_info(&mint).await.unwrap(), None);
    assert_eq!(client.get_current_price(&mint).await.unwrap(), None);
    assert_eq!(connection.view_calls(View::AllTokens.name()), 0);
    assert!(!client.is_create_confirmed());
}

#[tokio::test]
async fn test_confirmed_create_refreshes_once() {
    let _ = env_logger::builder().is_test(true).try_init();
    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    let mut updates = client.subscribe();

    let pending = client
        .create_token("Doge Moon", "DMOON", "ipfs://doge", 1_000_000)
        .unwrap();
    assert_eq!(pending.kind(), TxKind::CreateToken);

    let status = pending.wait().await;
    assert_eq!(status, TxStatus::Confirmed(TxSignature("sig-1".to_string())));
    assert_eq!(connection.view_calls(View::AllTokens.name()), 1);
    assert!(client.is_create_confirmed());

    let state = client.state();
    assert_eq!(state.refreshes, 1);
    assert_eq!(state.tokens.len(), 1);
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().tokens, state.tokens);

    let sent = connection.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].program_id, crate::ID);
    assert_eq!(sent[0].accounts[0].pubkey, connection.payer());
}

#[tokio::test]
async fn test_reverted_trade_does_not_refresh() {
    let connection = Arc::new(MockConnection::new());
    connection.set_outcome(Outcome::Revert(u32::from(LaunchpadError::SlippageExceeded)));
    let client = client(&connection);
    let mint = Pubkey::new_unique();

    let status = client.buy_tokens(&mint, 1_000, 5_000).unwrap().wait().await;
    match status {
        TxStatus::Failed(reason) => assert!(reason.contains("Slippage tolerance exceeded")),
        other => panic!("expected failure, got {other:?}"),
    }
    let status = client.sell_tokens(&mint, 10, 1).unwrap().wait().await;
    assert!(matches!(status, TxStatus::Failed(_)));

    assert_eq!(connection.view_calls(View::AllTokens.name()), 0);
    assert_eq!(client.state().refreshes, 0);
    assert!(!client.is_confirmed(TxKind::BuyTokens));
    assert!(matches!(
        client.last_status(TxKind::SellTokens),
        Some(TxStatus::Failed(_))
    ));
}

#[tokio::test]
async fn test_rejected_submission_fails_without_refresh() {
    let connection = Arc::new(MockConnection::new());
    connection.set_outcome(Outcome::Reject);
    let client = client(&connection);

    let status = client
        .create_token("Doge Moon", "DMOON", "ipfs://doge", 1_000_000)
        .unwrap()
        .wait()
        .await;
    assert_eq!(
        status,
        TxStatus::Failed("Transaction rejected: user declined".to_string())
    );
    assert!(connection.sent().is_empty());
    assert_eq!(connection.view_calls(View::AllTokens.name()), 0);
}

#[tokio::test]
async fn test_each_confirmed_write_refreshes_exactly_once() {
    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    let mint = Pubkey::new_unique();

    let buy = client.buy_tokens(&mint, 900, 1_000).unwrap();
    let sell = client.sell_tokens(&mint, 500, 10).unwrap();
    assert!(buy.wait().await.is_confirmed());
    assert!(sell.wait().await.is_confirmed());

    assert_eq!(connection.view_calls(View::AllTokens.name()), 2);
    assert_eq!(client.state().refreshes, 2);

    let sent = connection.sent();
    let buy_ix = sent
        .iter()
        .find(|ix| ix.data[..8] == sighash(BUY_TOKENS))
        .unwrap();
    let args = BuyTokensArgs::try_from_slice(&buy_ix.data[8..]).unwrap();
    assert_eq!(args.min_tokens_out, 900);
    assert_eq!(args.sol_amount, 1_000);
    assert!(sent.iter().any(|ix| ix.data[..8] == sighash(SELL_TOKENS)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_intents_do_not_block_each_other() {
    let connection = Arc::new(MockConnection::with_delay(Duration::from_millis(50)));
    let client = client(&connection);
    let mint = Pubkey::new_unique();

    let create = client
        .create_token("Doge Moon", "DMOON", "ipfs://doge", 1_000_000)
        .unwrap();
    let buy = client.buy_tokens(&mint, 1, 1).unwrap();
    assert!(create.status().is_pending());
    assert!(buy.status().is_pending());
    assert_eq!(client.last_status(TxKind::BuyTokens), Some(TxStatus::Pending));

    let (create, buy) = tokio::join!(create.wait(), buy.wait());
    assert!(create.is_confirmed());
    assert!(buy.is_confirmed());
    assert_eq!(connection.view_calls(View::AllTokens.name()), 2);
}

#[tokio::test]
async fn test_reads_decode_program_views() {
    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    let mint = Pubkey::new_unique();
    let info = token_info(Pubkey::new_unique());
    connection.list_token(mint, info.clone(), 2_500_000_000_000_000);

    assert_eq!(client.get_all_tokens().await.unwrap(), Some(vec![mint]));
    assert_eq!(client.get_token_count().await.unwrap(), Some(1));
    assert_eq!(client.get_token_info(&mint).await.unwrap(), Some(info));
    assert_eq!(client.get_current_price(&mint).await.unwrap(), Some(0.0025));

    let summary = client
        .get_token_summary(&mint, Some(0.002))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.symbol, "DMOON");
    assert!((summary.market_cap - 1_000.0).abs() < 1e-9);

    // reads never publish to subscribers; only refreshes do
    assert_eq!(client.state().refreshes, 0);
    assert_eq!(client.refresh_tokens().await.unwrap(), Some(vec![mint]));
    assert_eq!(client.state().tokens, vec![mint]);
}

#[tokio::test]
async fn test_unknown_token_view_is_an_error() {
    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    let missing = Pubkey::new_unique();

    assert!(matches!(
        client.get_token_info(&missing).await,
        Err(ClientError::EmptyReturnData)
    ));
    assert!(client.get_current_price(&missing).await.is_err());
}

#[tokio::test]
async fn test_quote_helpers_apply_configured_slippage() {
    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    let mint = Pubkey::new_unique();
    let info = token_info(Pubkey::new_unique());
    connection.list_token(mint, info.clone(), 1);

    let floor = client
        .quote_min_tokens_out(&mint, 1_000_000_000)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        floor,
        crate::quote::min_tokens_out(&info, 1_000_000_000, 50).unwrap()
    );
    assert!(floor < crate::quote::tokens_out_for_sol(&info, 1_000_000_000).unwrap());

    let sol_floor = client.quote_min_sol_out(&mint, 1_000_000_000).await.unwrap();
    assert!(sol_floor.is_some());
}

#[tokio::test]
async fn test_launch_from_tier_feeds_session() {
    use crate::curve::CurveProjection;
    use crate::session::{Intent, Session};
    use crate::state::{SupplyTier, TokenConfig};

    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    let config =
        TokenConfig::from_tier("Doge Moon", "DMOON", "ipfs://doge", SupplyTier::OneMillion).unwrap();

    let projection = CurveProjection::from_config(&config);
    assert_eq!(projection.points().count(), 21);

    let mut session = Session::default();
    session.apply(Intent::OpenCreateDialog);

    let status = client.launch(&config).unwrap().unwrap().wait().await;
    assert!(status.is_confirmed());

    let tokens = client.state().tokens;
    session.apply(Intent::TokensRefreshed(tokens.clone()));
    session.apply(Intent::TokenCreated(tokens[0]));
    assert_eq!(session.tokens, tokens);
    assert!(!session.create_dialog_open);

    let sent = connection.sent();
    let args = CreateTokenArgs::try_from_slice(&sent[0].data[8..]).unwrap();
    assert_eq!(args.total_supply, 1_000_000_000_000);
    assert_eq!(args.symbol, "DMOON");
}

#[tokio::test]
async fn test_launched_tier_reports_its_supply_in_whole_tokens() {
    use crate::state::{SupplyTier, TokenConfig};

    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    for (i, tier) in SupplyTier::ALL.into_iter().enumerate() {
        let symbol = format!("TIER{i}");
        let config = TokenConfig::from_tier("Tiered", symbol.as_str(), "", tier).unwrap();
        assert!(client.launch(&config).unwrap().unwrap().wait().await.is_confirmed());

        let mint = client.state().tokens[i];
        let summary = client
            .get_token_summary(&mint, Some(tier.start_price()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.symbol, symbol);
        assert_eq!(summary.max_supply, tier.max_supply() as f64, "{}", tier.label());
    }
}

#[tokio::test]
async fn test_oversized_symbol_fails_the_handle_instead_of_panicking() {
    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);

    let pending = client
        .create_token("Doge Moon", "ABCDEFGHIJKLMNOPQRSTUVWXYZABCDEFG", "ipfs://doge", 1_000_000)
        .unwrap();
    assert!(matches!(pending.wait().await, TxStatus::Failed(_)));
    assert!(matches!(
        client.last_status(TxKind::CreateToken),
        Some(TxStatus::Failed(_))
    ));

    let rockets = client
        .create_token("Rocket", "🚀🚀🚀🚀🚀🚀🚀🚀🚀", "", 1_000_000)
        .unwrap();
    assert!(matches!(rockets.wait().await, TxStatus::Failed(_)));

    assert!(connection.sent().is_empty());
    assert_eq!(connection.view_calls(View::AllTokens.name()), 0);
    assert_eq!(client.state().refreshes, 0);
}

#[tokio::test]
async fn test_launch_rejects_invalid_config_before_submitting() {
    use crate::error::ConfigError;
    use crate::state::TokenConfig;

    let connection = Arc::new(MockConnection::new());
    let client = client(&connection);
    // fields are public, so a config can skip `TokenConfig::new`
    let config = TokenConfig {
        name: "Rocket".to_string(),
        symbol: "🚀🚀🚀🚀🚀🚀🚀🚀🚀".to_string(),
        metadata_uri: String::new(),
        max_supply: 1_000_000,
        start_price: 0.000001,
    };
    assert!(matches!(
        client.launch(&config),
        Err(ClientError::Config(ConfigError::SymbolTooManyBytes { max: 32 }))
    ));

    let overflowing = TokenConfig {
        symbol: "BIG".to_string(),
        max_supply: u64::MAX,
        ..config
    };
    assert!(matches!(
        client.launch(&overflowing),
        Err(ClientError::Config(ConfigError::SupplyOverflow(u64::MAX)))
    ));
    assert!(connection.sent().is_empty());
    assert!(client.last_status(TxKind::CreateToken).is_none());
}

use std::fmt;

use tokio::sync::watch;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxSignature(pub String);

impl fmt::Display for TxSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three write intents. Each has its own independent lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxKind {
    CreateToken,
    BuyTokens,
    SellTokens,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TxKind::CreateToken => "create_token",
            TxKind::BuyTokens => "buy_tokens",
            TxKind::SellTokens => "sell_tokens",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TxStatus {
    Pending,
    Confirmed(TxSignature),
    Failed(String),
}

impl TxStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, TxStatus::Pending)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, TxStatus::Confirmed(_))
    }
}

/// Handle to a submitted write. Status moves from `Pending` to exactly one of
/// `Confirmed` or `Failed` and never changes afterwards.
#[derive(Clone, Debug)]
pub struct PendingTransaction {
    kind: TxKind,
    status: watch::Receiver<TxStatus>,
}

impl PendingTransaction {
    pub(crate) fn new(kind: TxKind, status: watch::Receiver<TxStatus>) -> Self {
        Self { kind, status }
    }

    /// A handle that failed before anything was sent.
    pub(crate) fn failed(kind: TxKind, reason: String) -> Self {
        let (_, status) = watch::channel(TxStatus::Failed(reason));
        Self::new(kind, status)
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    pub fn status(&self) -> TxStatus {
        self.status.borrow().clone()
    }

    /// Waits until the transaction settles.
    pub async fn wait(mut self) -> TxStatus {
        // a settled value is seen even after the sender is gone
        if let Ok(status) = self.status.wait_for(|status| !status.is_pending()).await {
            return status.clone();
        }
        TxStatus::Failed("transaction task dropped".to_string())
    }
}

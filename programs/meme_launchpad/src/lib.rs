/*
 ███╗   ███╗███████╗███╗   ███╗███████╗    ██╗      █████╗ ██╗   ██╗███╗   ██╗ ██████╗██╗  ██╗
 ████╗ ████║██╔════╝████╗ ████║██╔════╝    ██║     ██╔══██╗██║   ██║████╗  ██║██╔════╝██║  ██║
 ██╔████╔██║█████╗  ██╔████╔██║█████╗      ██║     ███████║██║   ██║██╔██╗ ██║██║     ███████║
 ██║╚██╔╝██║██╔══╝  ██║╚██╔╝██║██╔══╝      ██║     ██╔══██║██║   ██║██║╚██╗██║██║     ██╔══██║
 ██║ ╚═╝ ██║███████╗██║ ╚═╝ ██║███████╗    ███████╗██║  ██║╚██████╔╝██║ ╚████║╚██████╗██║  ██║
 ╚═╝     ╚═╝╚══════╝╚═╝     ╚═╝╚══════╝    ╚══════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝ ╚═════╝╚═╝  ╚═╝

  ✨ Client for the Meme Launchpad bonding curve program ✨

 💹 Projected price
   ^
   |                                    /
   |                                  /
   |                               /
   |                            /
   |                        _/
   |                   __/
   |            ___--
   |_____-----
   +---------------------------------> Supply sold (% of max)

 🔹 Create - launch a token with its own bonding curve
 🔹 Trade - buy and sell against the curve with a slippage floor
 🔹 Watch - every confirmed write refreshes the token list

 🚀 Create → 📈 Buy / Sell → 🔄 Refresh
*/

use anchor_lang::prelude::*;

pub mod client;
pub mod connection;
pub mod constants;
pub mod curve;
pub mod error;
pub mod instructions;
pub mod quote;
pub mod registry;
pub mod session;
pub mod state;
pub mod summary;
pub mod transaction;

#[cfg(test)]
mod testing;

pub use client::{ClientConfig, LaunchpadClient, LaunchpadState};
pub use connection::LaunchpadConnection;
pub use curve::{project_curve, ChartRow, CurvePoint, CurveProjection};
pub use error::{ClientError, ConfigError, LaunchpadError, RegistryError};
pub use registry::{Deployment, DeploymentRegistry};
pub use session::{Intent, Session};
pub use state::{SupplyTier, TokenConfig, TokenInfo};
pub use summary::TokenSummary;
pub use transaction::{PendingTransaction, TxKind, TxSignature, TxStatus};

declare_id!("CEHHsuVxvA8qtm2sWYrEp3E3nf1mJSvb6pVRhc1ZHQRL");

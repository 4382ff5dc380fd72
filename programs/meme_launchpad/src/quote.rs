//! Price conversions and trade quotes used before a buy or sell is submitted.
//!
//! The program prices trades with a constant product over virtual reserves:
//!
//! ```text
//! virtual_sol_reserves * virtual_token_reserves = k
//! ```
//!
//! Buying with `sol_in` lamports moves the curve to
//! `(vs + sol_in) * vt' = k`, so the buyer receives `vt - vt'` tokens. Selling
//! works the other way round. These quotes are estimates; the program's own
//! arithmetic is authoritative and the slippage floor guards the difference.

use crate::constants::{BPS_DENOMINATOR, PRICE_SCALE};
use crate::state::TokenInfo;

/// Converts a 1e18 fixed point on-chain price into a decimal.
pub fn normalize_price(raw: u128) -> f64 {
    raw as f64 / PRICE_SCALE as f64
}

// Safe (a*b) / d with overflow checks
#[inline]
fn mul_div(a: u128, b: u128, d: u128) -> Option<u128> {
    a.checked_mul(b)?.checked_div(d)
}

/// Tokens (smallest unit) received for spending `sol_in` lamports.
pub fn tokens_out_for_sol(info: &TokenInfo, sol_in: u64) -> Option<u64> {
    let vs = info.virtual_sol_reserves as u128;
    let vt = info.virtual_token_reserves as u128;
    let new_token_reserves = mul_div(vs, vt, vs.checked_add(sol_in as u128)?)?;
    u64::try_from(vt.checked_sub(new_token_reserves)?).ok()
}

/// Lamports received for selling `tokens_in` (smallest unit).
pub fn sol_out_for_tokens(info: &TokenInfo, tokens_in: u64) -> Option<u64> {
    let vs = info.virtual_sol_reserves as u128;
    let vt = info.virtual_token_reserves as u128;
    let new_sol_reserves = mul_div(vs, vt, vt.checked_add(tokens_in as u128)?)?;
    u64::try_from(vs.checked_sub(new_sol_reserves)?).ok()
}

/// Lowers a quoted amount by `slippage_bps`, producing the floor to submit.
pub fn apply_slippage(quoted: u64, slippage_bps: u16) -> u64 {
    let bps = slippage_bps.min(BPS_DENOMINATOR) as u128;
    let keep = BPS_DENOMINATOR as u128 - bps;
    // quoted * keep fits in u128 for any u64 quote
    (quoted as u128 * keep / BPS_DENOMINATOR as u128) as u64
}

/// `min_tokens_out` for a buy of `sol_in` lamports.
pub fn min_tokens_out(info: &TokenInfo, sol_in: u64, slippage_bps: u16) -> Option<u64> {
    tokens_out_for_sol(info, sol_in).map(|q| apply_slippage(q, slippage_bps))
}

/// `min_sol_out` for a sale of `tokens_in`.
pub fn min_sol_out(info: &TokenInfo, tokens_in: u64, slippage_bps: u16) -> Option<u64> {
    sol_out_for_tokens(info, tokens_in).map(|q| apply_slippage(q, slippage_bps))
}

/// Parses an amount typed into a trade field. Empty, non-numeric, negative
/// and non-finite input all mean "no value".
pub fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// The two linked fields of the trade panel: a token amount and its cost at
/// the current price. Editing one recomputes the other; invalid input clears
/// the dependent field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeForm {
    pub amount: String,
    pub cost: String,
}

impl TradeForm {
    pub fn set_amount(&mut self, input: &str, current_price: f64) {
        self.amount = input.to_string();
        self.cost = match parse_amount(input) {
            Some(tokens) => format!("{:.6}", tokens * current_price),
            None => String::new(),
        };
    }

    pub fn set_cost(&mut self, input: &str, current_price: f64) {
        self.cost = input.to_string();
        self.amount = match parse_amount(input) {
            Some(sol) if current_price > 0.0 => format!("{:.6}", sol / current_price),
            _ => String::new(),
        };
    }
}

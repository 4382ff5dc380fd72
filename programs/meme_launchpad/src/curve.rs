//! Projected price curve shown next to a token.
//!
//! The projection is a display aid computed from the creation parameters
//! alone. It follows a simple quadratic
//!
//! ```text
//! supply(p)     = max_supply * p / 100
//! price(p)      = start_price * (1 + p/100)^2
//! market_cap(p) = supply(p) * price(p)
//! ```
//!
//! sampled every 5% of max supply. It is not the program's settlement
//! formula (that prices trades from virtual reserves, see [`crate::quote`])
//! and it does not move after trades.

use crate::constants::{CURVE_SAMPLE_COUNT, CURVE_STEP_PERCENT};
use crate::state::TokenConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub percentage: u32,
    pub supply: f64,
    pub price: f64,
    pub market_cap: f64,
}

impl CurvePoint {
    /// Formats the point the way the chart labels it.
    pub fn to_chart_row(&self) -> ChartRow {
        ChartRow {
            supply: format!("{:.1}", self.supply / 1_000_000.0),
            price: format!("{:.8}", self.price),
            market_cap: format!("{:.2}", self.market_cap / 1_000_000.0),
            percentage: self.percentage,
        }
    }
}

/// Display strings for one chart sample: supply and market cap in millions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRow {
    pub supply: String,
    pub price: String,
    pub market_cap: String,
    pub percentage: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveProjection {
    max_supply: f64,
    start_price: f64,
}

impl CurveProjection {
    pub fn new(max_supply: f64, start_price: f64) -> Self {
        Self {
            max_supply,
            start_price,
        }
    }

    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(config.max_supply as f64, config.start_price)
    }

    pub fn point(&self, percentage: u32) -> CurvePoint {
        let p = percentage as f64;
        let supply = self.max_supply * p / 100.0;
        let price = self.start_price * (1.0 + p / 100.0).powi(2);
        CurvePoint {
            percentage,
            supply,
            price,
            market_cap: supply * price,
        }
    }

    /// The 21 samples at 0%, 5%, ..., 100%. Cloning the iterator restarts it.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + Clone + '_ {
        (0..CURVE_SAMPLE_COUNT as u32).map(move |i| self.point(i * CURVE_STEP_PERCENT))
    }

    pub fn chart_rows(&self) -> Vec<ChartRow> {
        self.points().map(|p| p.to_chart_row()).collect()
    }
}

/// Projects the display curve for a token's max supply and start price.
pub fn project_curve(max_supply: f64, start_price: f64) -> Vec<CurvePoint> {
    CurveProjection::new(max_supply, start_price).points().collect()
}

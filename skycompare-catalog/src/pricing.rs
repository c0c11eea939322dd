use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::route::RouteClass;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency every generated price is quoted in
    pub currency: String,

    /// Base fare bounds for domestic routes (inclusive)
    pub domestic_base: (u32, u32),

    /// Base fare bounds for international routes (inclusive)
    pub international_base: (u32, u32),

    /// Premium for non-stop flights
    pub direct_multiplier: f64,

    /// One stop is the baseline
    pub one_stop_multiplier: f64,

    /// Discount for two or more stops
    pub multi_stop_multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "INR".to_string(),
            domestic_base: (2000, 8000),
            international_base: (30000, 120000),
            direct_multiplier: 1.3,
            one_stop_multiplier: 1.0,
            multi_stop_multiplier: 0.8,
        }
    }
}

/// Fare calculation for generated flights
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    pub fn base_range(&self, route: RouteClass) -> RangeInclusive<u32> {
        let (min, max) = match route {
            RouteClass::Domestic => self.config.domestic_base,
            RouteClass::International => self.config.international_base,
        };
        min..=max
    }

    pub fn stop_multiplier(&self, stops: u32) -> f64 {
        match stops {
            0 => self.config.direct_multiplier,
            1 => self.config.one_stop_multiplier,
            _ => self.config.multi_stop_multiplier,
        }
    }

    /// Scales a base fare by the stop multiplier, rounded to a whole unit.
    pub fn final_price(&self, base_price: u32, stops: u32) -> u32 {
        (base_price as f64 * self.stop_multiplier(stops)).round() as u32
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

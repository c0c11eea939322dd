use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;

const WINDOW_DAYS: i64 = 7;
const MIN_PRICE: u32 = 200;
const MAX_PRICE: u32 = 499;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceTier {
    Selected,
    Cheapest,
    Expensive,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: u32,
    pub is_selected: bool,
    /// Bar height for charting; cheaper days draw taller bars (20..=100).
    pub bar_height_percent: f64,
    pub tier: PriceTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTimeline {
    pub points: Vec<PricePoint>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
}

/// Mock fares for the week either side of `departure_date`.
///
/// Days before `today` are left out. The departure day itself is shown 10%
/// cheaper than its draw.
pub fn price_timeline<R: Rng + ?Sized>(
    rng: &mut R,
    departure_date: NaiveDate,
    today: NaiveDate,
) -> PriceTimeline {
    let raw: Vec<(NaiveDate, u32, bool)> = (-WINDOW_DAYS..=WINDOW_DAYS)
        .filter_map(|offset| departure_date.checked_add_signed(Duration::days(offset)))
        .filter(|date| *date >= today)
        .map(|date| {
            let is_selected = date == departure_date;
            let mut price = rng.gen_range(MIN_PRICE..=MAX_PRICE);
            if is_selected {
                price = price * 9 / 10;
            }
            (date, price, is_selected)
        })
        .collect();

    let min_price = raw.iter().map(|(_, p, _)| *p).min();
    let max_price = raw.iter().map(|(_, p, _)| *p).max();

    let points = match (min_price, max_price) {
        (Some(min), Some(max)) => raw
            .into_iter()
            .map(|(date, price, is_selected)| PricePoint {
                date,
                price,
                is_selected,
                bar_height_percent: bar_height(price, min, max),
                tier: tier(price, is_selected, min, max),
            })
            .collect(),
        _ => Vec::new(),
    };

    PriceTimeline {
        points,
        min_price,
        max_price,
    }
}

fn bar_height(price: u32, min: u32, max: u32) -> f64 {
    if max == min {
        return 100.0;
    }
    100.0 - f64::from(price - min) / f64::from(max - min) * 80.0
}

fn tier(price: u32, is_selected: bool, min: u32, max: u32) -> PriceTier {
    if is_selected {
        PriceTier::Selected
    } else if price == min {
        PriceTier::Cheapest
    } else if f64::from(price) >= f64::from(max) * 0.9 {
        PriceTier::Expensive
    } else {
        PriceTier::Normal
    }
}

use crate::domain::model::{MedianMode, PriceStats};

/// Prices of every route-matching ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSample {
    prices: Vec<u64>,
}

impl PriceSample {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, price: u64) {
        self.prices.push(price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn sum(&self) -> u128 {
        self.prices.iter().map(|&p| p as u128).sum()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.sum() as f64 / self.len() as f64)
    }

    pub fn median(&self, mode: MedianMode) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        let mut sorted = self.prices.clone();
        sorted.sort_unstable();

        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            return Some(sorted[mid] as f64);
        }

        let (low, high) = (sorted[mid - 1], sorted[mid]);
        let median = match mode {
            MedianMode::Interpolated => (low as f64 + high as f64) / 2.0,
            MedianMode::LegacyTruncated => ((low as u128 + high as u128) / 2) as f64,
        };
        Some(median)
    }

    /// `None` when the sample is empty.
    pub fn stats(&self, mode: MedianMode) -> Option<PriceStats> {
        let mean = self.mean()?;
        let median = self.median(mode)?;
        Some(PriceStats {
            count: self.len(),
            mean,
            median,
            difference: mean - median,
        })
    }
}

impl FromIterator<u64> for PriceSample {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

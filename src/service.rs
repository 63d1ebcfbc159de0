use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{PackError, Result};
use crate::solver::Solver;
use crate::store::PackSizeStore;
use crate::types::{PackResult, PackSize};

pub const MAX_PACK_SIZE: i64 = 1_000_000;
pub const MAX_PACK_COUNT: usize = 20;
/// Upper bound on DP table entries for one calculation.
pub const MAX_TABLE_LEN: u64 = 20_000_000;

/// Checks raw sizes and normalizes them: deduplicated, ascending.
pub fn validate_pack_sizes(sizes: &[i64]) -> Result<Vec<PackSize>> {
    if sizes.is_empty() {
        return Err(PackError::EmptyPackSizes);
    }

    if let Some(&bad) = sizes.iter().find(|&&s| s <= 0 || s > MAX_PACK_SIZE) {
        return Err(PackError::InvalidPackSize(bad));
    }

    let mut seen = HashSet::with_capacity(sizes.len());
    let mut unique: Vec<PackSize> = sizes
        .iter()
        .filter(|&&s| seen.insert(s))
        .map(|&s| s as PackSize)
        .collect();
    unique.sort_unstable();

    if unique.len() > MAX_PACK_COUNT {
        return Err(PackError::TooManyPackSizes(unique.len()));
    }

    Ok(unique)
}

/// Answers pack calculations against whatever sizes the store currently holds.
#[derive(Clone)]
pub struct PackCalculator {
    store: Arc<dyn PackSizeStore>,
}

impl PackCalculator {
    pub fn new(store: Arc<dyn PackSizeStore>) -> Self {
        Self { store }
    }

    pub fn calculate(&self, order_size: i64) -> Result<Vec<PackResult>> {
        if order_size <= 0 {
            return Err(PackError::OrderSizePositive);
        }

        let sizes = self.store.pack_sizes();
        if sizes.is_empty() {
            return Err(PackError::NoPackSizes);
        }

        let solver = Solver::new(&sizes);
        let required = solver.table_len(order_size as u64);
        if required > MAX_TABLE_LEN {
            tracing::warn!(order_size, required, ?sizes, "order exceeds table limit");
            return Err(PackError::OrderTooLarge {
                order_size,
                required,
            });
        }

        let solution = solver.solve(order_size as u64);
        tracing::debug!(
            order_size,
            shipped = solution.total_items(),
            packs = solution.total_packs(),
            "calculated packs"
        );

        Ok(solution.results())
    }

    pub fn update_pack_sizes(&self, sizes: &[i64]) -> Result<Vec<PackSize>> {
        let sizes = validate_pack_sizes(sizes)?;
        self.store.replace_pack_sizes(sizes.clone());
        tracing::info!(?sizes, "pack sizes updated");
        Ok(sizes)
    }

    pub fn pack_sizes(&self) -> Vec<PackSize> {
        self.store.pack_sizes()
    }
}

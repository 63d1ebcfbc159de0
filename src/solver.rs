use crate::table::MinPackTable;
use crate::types::{PackSize, Solution};

/// Picks the pack combination for an order: whole packs only, fewest items
/// shipped, then fewest packs.
///
/// Large orders are reduced by pre-allocating packs of the largest size so the
/// DP table only ever spans `O(min_pack * max_pack)` amounts.
pub struct Solver {
    sizes: Vec<PackSize>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    dp_amount: u64,
    large_packs: u64,
    total_items: u64,
    total_packs: u64,
}

impl Candidate {
    fn beats(&self, other: &Candidate) -> bool {
        (self.total_items, self.total_packs) < (other.total_items, other.total_packs)
    }
}

impl Solver {
    /// # Panics
    ///
    /// Panics if `pack_sizes` is empty or contains a zero.
    pub fn new(pack_sizes: &[PackSize]) -> Self {
        assert!(!pack_sizes.is_empty(), "at least one pack size is required");
        assert!(
            pack_sizes.iter().all(|&s| s > 0),
            "pack sizes must be positive"
        );

        let mut sizes = pack_sizes.to_vec();
        sizes.sort_unstable();
        sizes.dedup();
        Self { sizes }
    }

    pub fn pack_sizes(&self) -> &[PackSize] {
        &self.sizes
    }

    /// Largest order whose shipped total still fits in a `u64`.
    pub fn max_order_size(&self) -> u64 {
        u64::MAX - self.max_pack()
    }

    /// Number of entries the DP table needs for `order_size`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Solver::solve`].
    pub fn table_len(&self, order_size: u64) -> u64 {
        let (_, effective_order) = self.split_order(order_size);
        effective_order + self.min_pack()
    }

    /// # Panics
    ///
    /// Panics if `order_size` is zero or above [`Solver::max_order_size`].
    pub fn solve(&self, order_size: u64) -> Solution {
        let (base_large_packs, effective_order) = self.split_order(order_size);

        // Best remainder may overshoot by up to one smallest pack
        let max_target = effective_order + self.min_pack() - 1;
        let table = MinPackTable::build(&self.sizes, max_target as usize);

        let Some(best) = self.search(&table, base_large_packs, effective_order) else {
            return Self::fallback(order_size, self.sizes[0]);
        };

        let mut solution = Solution::new();
        solution.add(self.sizes[self.sizes.len() - 1], best.large_packs);
        table.reconstruct_into(best.dp_amount as usize, &mut solution);
        solution
    }

    fn min_pack(&self) -> u64 {
        self.sizes[0] as u64
    }

    fn max_pack(&self) -> u64 {
        self.sizes[self.sizes.len() - 1] as u64
    }

    /// Splits an order into pre-allocated largest packs and the amount left
    /// for the DP window.
    fn split_order(&self, order_size: u64) -> (u64, u64) {
        assert!(order_size > 0, "order size must be positive");
        assert!(
            order_size <= self.max_order_size(),
            "order size exceeds {}",
            self.max_order_size()
        );

        let min_pack = self.min_pack();
        let max_pack = self.max_pack();
        let dp_limit = std::cmp::max(min_pack * max_pack, max_pack + min_pack);

        // Bulk of a large order goes straight to the largest pack
        if order_size > dp_limit {
            let base = (order_size - dp_limit) / max_pack;
            (base, order_size - base * max_pack)
        } else {
            (0, order_size)
        }
    }

    /// Sweeps the number of extra largest packs upward, pairing each with the
    /// smallest reachable remainder. Ties keep the earliest candidate.
    fn search(
        &self,
        table: &MinPackTable,
        base_large_packs: u64,
        effective_order: u64,
    ) -> Option<Candidate> {
        let min_pack = self.min_pack();
        let max_pack = self.max_pack();

        let mut best: Option<Candidate> = None;
        for extra in 0..=effective_order / max_pack {
            let remainder = effective_order - extra * max_pack;
            let search_end = remainder + min_pack - 1;

            let Some(t) = table.first_reachable_in(remainder as usize, search_end as usize)
            else {
                continue;
            };
            let Some(dp_packs) = table.packs_to_reach(t) else {
                continue;
            };

            let large_packs = base_large_packs + extra;
            let candidate = Candidate {
                dp_amount: t as u64,
                large_packs,
                total_items: large_packs * max_pack + t as u64,
                total_packs: large_packs + dp_packs as u64,
            };

            if best.as_ref().is_none_or(|b| candidate.beats(b)) {
                best = Some(candidate);
            }
        }
        best
    }

    fn fallback(order_size: u64, min_pack: PackSize) -> Solution {
        let mut solution = Solution::new();
        solution.add(min_pack, order_size.div_ceil(min_pack as u64));
        solution
    }
}

/// Convenience wrapper around [`Solver`] for a single order.
pub fn solve(order_size: u64, pack_sizes: &[PackSize]) -> Solution {
    Solver::new(pack_sizes).solve(order_size)
}

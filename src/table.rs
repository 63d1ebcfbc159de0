use crate::types::{PackSize, Solution};

const UNREACHABLE: u32 = u32::MAX;

/// Fewest packs needed to reach every amount in `0..=max_target` exactly,
/// along with the pack size that completed each amount.
#[derive(Debug, Clone)]
pub struct MinPackTable {
    packs: Vec<u32>,
    from: Vec<PackSize>,
}

impl MinPackTable {
    /// `sizes` must be sorted ascending and contain no zero.
    pub fn build(sizes: &[PackSize], max_target: usize) -> Self {
        let mut packs = vec![UNREACHABLE; max_target + 1];
        let mut from = vec![0; max_target + 1];
        packs[0] = 0;

        for amount in 1..=max_target {
            for &size in sizes {
                let step = size as usize;
                // Sorted, so no later size fits either
                if step > amount {
                    break;
                }
                let prev = packs[amount - step];
                if prev != UNREACHABLE && prev + 1 < packs[amount] {
                    packs[amount] = prev + 1;
                    from[amount] = size;
                }
            }
        }

        Self { packs, from }
    }

    pub fn max_target(&self) -> usize {
        self.packs.len() - 1
    }

    pub fn packs_to_reach(&self, amount: usize) -> Option<u32> {
        match self.packs.get(amount) {
            Some(&n) if n != UNREACHABLE => Some(n),
            _ => None,
        }
    }

    /// Smallest reachable amount in `start..=end`, with `end` clipped to the table.
    pub fn first_reachable_in(&self, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.max_target());
        (start..=end).find(|&amount| self.packs[amount] != UNREACHABLE)
    }

    /// Adds the packs that make up `amount` to `solution`.
    pub fn reconstruct_into(&self, amount: usize, solution: &mut Solution) {
        debug_assert!(self.packs_to_reach(amount).is_some());
        let mut remaining = amount;
        while remaining > 0 {
            let size = self.from[remaining];
            if size == 0 {
                break;
            }
            solution.add(size, 1);
            remaining -= size as usize;
        }
    }
}

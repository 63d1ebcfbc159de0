use parking_lot::RwLock;

use crate::types::PackSize;

/// Holds the configured pack sizes for the lifetime of the process.
///
/// Implementations hand out and take in owned copies so a caller can never
/// observe the set changing underneath it.
pub trait PackSizeStore: Send + Sync {
    fn pack_sizes(&self) -> Vec<PackSize>;
    fn replace_pack_sizes(&self, sizes: Vec<PackSize>);
}

#[derive(Debug, Default)]
pub struct MemoryPackSizeStore {
    sizes: RwLock<Vec<PackSize>>,
}

impl MemoryPackSizeStore {
    pub fn new(sizes: &[PackSize]) -> Self {
        Self {
            sizes: RwLock::new(sizes.to_vec()),
        }
    }
}

impl PackSizeStore for MemoryPackSizeStore {
    fn pack_sizes(&self) -> Vec<PackSize> {
        self.sizes.read().clone()
    }

    fn replace_pack_sizes(&self, sizes: Vec<PackSize>) {
        *self.sizes.write() = sizes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_returns_initial_sizes() {
        let store = MemoryPackSizeStore::new(&[250, 500, 1000]);
        assert_eq!(store.pack_sizes(), vec![250, 500, 1000]);
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryPackSizeStore::new(&[]);
        assert!(store.pack_sizes().is_empty());
    }

    #[test]
    fn test_replace() {
        let store = MemoryPackSizeStore::new(&[250]);
        store.replace_pack_sizes(vec![100, 200, 300]);
        assert_eq!(store.pack_sizes(), vec![100, 200, 300]);
    }

    #[test]
    fn test_read_returns_copy() {
        let store = MemoryPackSizeStore::new(&[250, 500]);
        let mut sizes = store.pack_sizes();
        sizes[0] = 9999;
        assert_eq!(store.pack_sizes(), vec![250, 500]);
    }

    #[test]
    fn test_new_copies_input() {
        let mut initial = vec![100, 200];
        let store = MemoryPackSizeStore::new(&initial);
        initial[0] = 9999;
        assert_eq!(store.pack_sizes(), vec![100, 200]);
    }

    #[test]
    fn test_concurrent_access() {
        let store = Arc::new(MemoryPackSizeStore::new(&[250, 500, 1000]));
        let handles: Vec<_> = (1..=100u32)
            .map(|v| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.replace_pack_sizes(vec![v, v * 2]);
                    let sizes = store.pack_sizes();
                    // Every snapshot is one complete write
                    assert_eq!(sizes.len(), 2);
                    assert_eq!(sizes[1], sizes[0] * 2);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}

//! Stacking-order allocation with periodic compaction.

/// Stacking value the counter is seeded with; the first focused window gets `BASE + 1`.
pub const Z_ORDER_BASE: u32 = 100;
/// Once the counter exceeds this value the next allocation compacts open windows first.
pub const Z_ORDER_CEILING: u32 = 10_000;

/// Monotonic stacking counter shared by every window surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrderAllocator {
    counter: u32,
}

impl Default for ZOrderAllocator {
    fn default() -> Self {
        Self {
            counter: Z_ORDER_BASE,
        }
    }
}

impl ZOrderAllocator {
    /// Current (highest handed out) stacking value.
    pub fn current(&self) -> u32 {
        self.counter
    }

    /// Whether the next allocation must be preceded by [`Self::renormalize`].
    pub fn needs_renormalize(&self) -> bool {
        self.counter > Z_ORDER_CEILING
    }

    /// Advances the counter and returns the new top-most stacking value.
    pub fn allocate(&mut self) -> u32 {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    /// Compacts the given stacking slots (one per open window) to `BASE + 1 ..= BASE + n`.
    ///
    /// Slots are ordered by their current value; ties keep their iteration order. The counter
    /// ends at the highest reassigned value, or at the base when there is nothing to compact.
    pub fn renormalize<'a>(&mut self, slots: impl IntoIterator<Item = &'a mut u32>) {
        let mut slots: Vec<&'a mut u32> = slots.into_iter().collect();
        slots.sort_by_key(|slot| **slot);

        self.counter = Z_ORDER_BASE;
        for slot in slots {
            self.counter += 1;
            *slot = self.counter;
        }
    }

    #[cfg(test)]
    pub(crate) fn with_counter(counter: u32) -> Self {
        Self { counter }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn allocate_starts_just_above_base() {
        let mut z = ZOrderAllocator::default();
        assert_eq!(z.allocate(), Z_ORDER_BASE + 1);
        assert_eq!(z.allocate(), Z_ORDER_BASE + 2);
        assert!(!z.needs_renormalize());
    }

    #[test]
    fn renormalize_compacts_and_preserves_order() {
        let mut z = ZOrderAllocator::with_counter(Z_ORDER_CEILING + 1);
        let mut slots = [9_000, 10_001, 4_200];

        assert!(z.needs_renormalize());
        z.renormalize(slots.iter_mut());

        assert_eq!(slots, [102, 103, 101]);
        assert_eq!(z.current(), 103);
        assert!(!z.needs_renormalize());
    }

    #[test]
    fn renormalize_with_no_open_windows_resets_to_base() {
        let mut z = ZOrderAllocator::with_counter(20_000);
        z.renormalize(std::iter::empty());
        assert_eq!(z.current(), Z_ORDER_BASE);
    }
}

//! Growable per-page selection masks.
//!
//! A mask records, for one page, which ordinal positions are selected:
//! bit *i* set means "the row at ordinal *i* within that page's last
//! fetch is selected." The mask is backed by a vector of words rather
//! than a single integer so that page sizes beyond the native bit
//! width are never silently truncated.

const WORD_BITS: usize = 64;

/// Bit vector marking selected ordinals on a single page.
///
/// Masks are kept in canonical form (no trailing all-zero words), so
/// equality is value equality: two masks with the same set bits always
/// compare equal regardless of how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMask {
    words: Vec<u64>,
}

impl SelectionMask {
    /// Creates an empty mask (nothing selected).
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Creates a mask with the low `n` bits set.
    ///
    /// This is the shape bulk range selection writes: ordinals
    /// `0..n` selected, everything above clear.
    pub fn low_bits(n: usize) -> Self {
        let mut words = vec![u64::MAX; n / WORD_BITS];
        let rem = n % WORD_BITS;
        if rem > 0 {
            words.push((1u64 << rem) - 1);
        }
        Self { words }
    }

    /// Returns true if no bit is set.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if the given bit is set.
    pub fn is_set(&self, bit: usize) -> bool {
        match self.words.get(bit / WORD_BITS) {
            Some(word) => word & (1u64 << (bit % WORD_BITS)) != 0,
            None => false,
        }
    }

    /// Sets the given bit, growing the backing storage if needed.
    pub fn set(&mut self, bit: usize) {
        let word_index = bit / WORD_BITS;
        if word_index >= self.words.len() {
            self.words.resize(word_index + 1, 0);
        }
        self.words[word_index] |= 1u64 << (bit % WORD_BITS);
    }

    /// Clears the given bit.
    pub fn clear(&mut self, bit: usize) {
        if let Some(word) = self.words.get_mut(bit / WORD_BITS) {
            *word &= !(1u64 << (bit % WORD_BITS));
        }
        self.normalize();
    }

    /// Flips the given bit.
    pub fn toggle(&mut self, bit: usize) {
        if self.is_set(bit) {
            self.clear(bit);
        } else {
            self.set(bit);
        }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns one past the highest set bit, or 0 for an empty mask.
    ///
    /// A mask fits a page of size `n` iff `width() <= n`.
    pub fn width(&self) -> usize {
        match self.words.last() {
            // Canonical form guarantees the last word is non-zero
            Some(word) => (self.words.len() - 1) * WORD_BITS + (WORD_BITS - word.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Returns a copy with only the bits below `len` retained.
    pub fn truncated(&self, len: usize) -> Self {
        let mut out = self.clone();
        out.words.truncate(len.div_ceil(WORD_BITS));
        let rem = len % WORD_BITS;
        if rem > 0 {
            if let Some(word) = out.words.last_mut() {
                *word &= (1u64 << rem) - 1;
            }
        }
        out.normalize();
        out
    }

    /// Iterates over the indices of set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            (0..WORD_BITS)
                .filter(move |b| word & (1u64 << b) != 0)
                .map(move |b| wi * WORD_BITS + b)
        })
    }

    /// Restores canonical form by dropping trailing all-zero words.
    fn normalize(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask() {
        let mask = SelectionMask::empty();
        assert!(mask.is_empty());
        assert_eq!(mask.count_ones(), 0);
        assert_eq!(mask.width(), 0);
        assert!(!mask.is_set(0));
    }

    #[test]
    fn test_low_bits() {
        let mask = SelectionMask::low_bits(5);
        assert_eq!(mask.count_ones(), 5);
        assert!(mask.is_set(0));
        assert!(mask.is_set(4));
        assert!(!mask.is_set(5));
        assert_eq!(mask.width(), 5);
    }

    #[test]
    fn test_low_bits_across_word_boundary() {
        let mask = SelectionMask::low_bits(100);
        assert_eq!(mask.count_ones(), 100);
        assert!(mask.is_set(63));
        assert!(mask.is_set(64));
        assert!(mask.is_set(99));
        assert!(!mask.is_set(100));
        assert_eq!(mask.width(), 100);
    }

    #[test]
    fn test_set_and_clear_beyond_native_width() {
        let mut mask = SelectionMask::empty();
        mask.set(200);
        assert!(mask.is_set(200));
        assert_eq!(mask.width(), 201);

        mask.clear(200);
        assert!(mask.is_empty());
        assert_eq!(mask, SelectionMask::empty());
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut mask = SelectionMask::low_bits(12);
        let original = mask.clone();

        for bit in [0, 7, 11, 31, 64, 130] {
            mask.toggle(bit);
            mask.toggle(bit);
            assert_eq!(mask, original, "double toggle of bit {} changed the mask", bit);
        }
    }

    #[test]
    fn test_equality_is_canonical() {
        let mut a = SelectionMask::empty();
        a.set(70);
        a.clear(70);
        a.set(3);

        let mut b = SelectionMask::empty();
        b.set(3);

        assert_eq!(a, b);
    }

    #[test]
    fn test_truncated() {
        let mask = SelectionMask::low_bits(12);
        assert_eq!(mask.truncated(5), SelectionMask::low_bits(5));
        assert_eq!(mask.truncated(12), mask);
        assert_eq!(mask.truncated(40), mask);
        assert_eq!(mask.truncated(0), SelectionMask::empty());
    }

    #[test]
    fn test_truncated_across_words() {
        let mask = SelectionMask::low_bits(130);
        assert_eq!(mask.truncated(65), SelectionMask::low_bits(65));
    }

    #[test]
    fn test_ones_iteration_order() {
        let mut mask = SelectionMask::empty();
        mask.set(66);
        mask.set(0);
        mask.set(5);

        let ones: Vec<usize> = mask.ones().collect();
        assert_eq!(ones, vec![0, 5, 66]);
    }
}

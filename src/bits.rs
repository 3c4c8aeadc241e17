// bits.rs - One-bit-per-cell storage

pub type Word = u64;
pub const WORD_BITS: usize = Word::BITS as usize;

/// Word holding cell `idx`.
#[inline]
pub const fn word_index(idx: usize) -> usize {
    idx / WORD_BITS
}

/// Position of cell `idx` inside its word.
#[inline]
pub const fn bit_position(idx: usize) -> usize {
    idx % WORD_BITS
}

#[inline]
pub const fn mask(idx: usize) -> Word {
    1 << bit_position(idx)
}

/// Writes `alive` into the bits selected by `mask` without branching.
#[inline]
pub const fn blend(word: Word, mask: Word, alive: bool) -> Word {
    (word & !mask) | ((alive as Word).wrapping_neg() & mask)
}

/// Fixed-length bit sequence; bit `i` set means cell `i` is alive.
///
/// Bits past `len` in the final word are padding and always stay clear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitBuffer {
    words: Vec<Word>,
    len: usize,
}

impl BitBuffer {
    /// All cells dead.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        self.words[word_index(idx)] & mask(idx) != 0
    }

    #[inline]
    pub fn set_alive(&mut self, idx: usize) {
        self.check(idx);
        self.words[word_index(idx)] |= mask(idx);
    }

    #[inline]
    pub fn set_dead(&mut self, idx: usize) {
        self.check(idx);
        self.words[word_index(idx)] &= !mask(idx);
    }

    #[inline]
    pub fn set(&mut self, idx: usize, alive: bool) {
        self.check(idx);
        let word = &mut self.words[word_index(idx)];
        *word = blend(*word, mask(idx), alive);
    }

    #[inline]
    pub fn toggle(&mut self, idx: usize) {
        self.check(idx);
        self.words[word_index(idx)] ^= mask(idx);
    }

    // Writes past `len` would land in padding bits and skew population counts.
    #[inline]
    fn check(&self, idx: usize) {
        assert!(idx < self.len, "cell index {idx} out of range for {} cells", self.len);
    }

    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of set bits in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let base = i * WORD_BITS;
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(base + bit)
            })
        })
    }
}

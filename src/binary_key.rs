use crate::MAX_KEY_BITS;

/// A scalar that can be sorted by its binary representation.
///
/// `key` maps the value to an unsigned integer whose natural order matches the order of the value,
/// so the most significant differing bit of two keys decides which value is smaller.
pub trait BinaryKey: Copy + 'static {
    /// Width of the key in bits, the highest bit index is `BITS - 1`.
    const BITS: u32;

    fn key(&self) -> u64;

    /// Value of bit `index` of the key, bits past the key width read as 0.
    #[inline(always)]
    fn bit(&self, index: u32) -> bool {
        index < MAX_KEY_BITS && (self.key() >> index) & 1 == 1
    }

    /// Index of the most significant set bit of the key, 0 for a zero key.
    #[inline(always)]
    fn top_bit(&self) -> u32 {
        (self.key() | 1).ilog2()
    }
}

macro_rules! unsigned_key {
    ($($t:ty),*) => {
        $(
            impl BinaryKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn key(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

unsigned_key!(u8, u16, u32, u64, usize);

impl BinaryKey for i64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn key(&self) -> u64 {
        (*self as u64) ^ (1 << 63)
    }
}

impl BinaryKey for i32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn key(&self) -> u64 {
        ((*self as u32) ^ (1 << 31)) as u64
    }
}

impl BinaryKey for i16 {
    const BITS: u32 = 16;

    #[inline(always)]
    fn key(&self) -> u64 {
        ((*self as u16) ^ (1 << 15)) as u64
    }
}

impl BinaryKey for i8 {
    const BITS: u32 = 8;

    #[inline(always)]
    fn key(&self) -> u64 {
        ((*self as u8) ^ (1 << 7)) as u64
    }
}

impl BinaryKey for f64 {
    const BITS: u32 = 64;

    #[inline(always)]
    fn key(&self) -> u64 {
        // see f64::total_cmp
        let bits = self.to_bits();
        (bits ^ ((bits as i64 >> 63) as u64 >> 1)) ^ (1 << 63)
    }
}

impl BinaryKey for f32 {
    const BITS: u32 = 32;

    #[inline(always)]
    fn key(&self) -> u64 {
        // see f32::total_cmp
        let bits = self.to_bits();
        ((bits ^ ((bits as i32 >> 31) as u32 >> 1)) ^ (1 << 31)) as u64
    }
}

impl BinaryKey for bool {
    const BITS: u32 = 1;

    #[inline(always)]
    fn key(&self) -> u64 {
        *self as u64
    }
}

mod binary_key;
mod partition;
mod sort;

pub use binary_key::*;
pub use partition::partition;
pub use sort::*;

// every built-in key is mapped into a u64
pub(crate) const MAX_KEY_BITS: u32 = u64::BITS;
// the larger side is pushed and the smaller side (at most half) is processed next,
// so there can never be more pending entries than halvings of a usize length
pub(crate) const WORK_STACK_LEN: usize = usize::BITS as usize + 1;

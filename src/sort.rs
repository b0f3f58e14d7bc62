// MSB binary quicksort, partitioning on one bit per pass from the top bit down.
// See https://en.wikipedia.org/wiki/Radix_sort#In-place_MSD_radix_sort_implementations

use crate::{partition, BinaryKey, WORK_STACK_LEN};

/// Sort `values` by bits `[min_bit..=current_bit]`, recursing into the smaller side of each split
/// and looping on the larger one.
///
/// Returns the deepest level of recursion that was reached, which never exceeds `log2(values.len())`.
fn descend<T, F>(mut values: &mut [T], mut current_bit: u32, min_bit: u32, bit: &mut F) -> u32
where
    F: FnMut(&T, u32) -> bool,
{
    debug_assert!(current_bit >= min_bit);

    let mut depth = 0;

    while values.len() >= 2 {
        let split = partition(values, current_bit, bit);
        if current_bit == min_bit {
            break;
        }
        current_bit -= 1;

        let (left, right) = std::mem::take(&mut values).split_at_mut(split);
        let (smaller, larger) = if left.len() <= right.len() { (left, right) } else { (right, left) };

        // a side with less than two elements is already sorted, including the empty side of a
        // split where every element agreed on the bit
        if smaller.len() >= 2 {
            depth = depth.max(1 + descend(smaller, current_bit, min_bit, bit));
        }
        values = larger;
    }

    depth
}

/// Sort `values` ascending by bits `[0..=top_bit]` as reported by `bit`.
///
/// This sort is unstable and in-place. Bits above `top_bit` are never inspected.
#[inline]
pub fn sort_by_bits<T, F>(values: &mut [T], top_bit: u32, bit: F)
where
    F: FnMut(&T, u32) -> bool,
{
    sort_by_bit_span(values, top_bit, 0, bit);
}

/// Sort `values` ascending by the integer formed from bits `[min_bit..=top_bit]`.
///
/// Elements which agree on every bit of the span end up adjacent, in unspecified order.
/// `min_bit` must not be larger than `top_bit`.
#[inline]
pub fn sort_by_bit_span<T, F>(values: &mut [T], top_bit: u32, min_bit: u32, mut bit: F)
where
    F: FnMut(&T, u32) -> bool,
{
    debug_assert!(min_bit <= top_bit, "empty bit span {}..={}", min_bit, top_bit);

    if values.len() < 2 || min_bit > top_bit {
        return;
    }

    descend(values, top_bit, min_bit, &mut bit);
}

/// Same result as [`sort_by_bit_span`], driven by a fixed size stack of pending ranges instead of
/// recursion.
pub fn sort_by_bit_span_iterative<T, F>(values: &mut [T], top_bit: u32, min_bit: u32, mut bit: F)
where
    F: FnMut(&T, u32) -> bool,
{
    debug_assert!(min_bit <= top_bit, "empty bit span {}..={}", min_bit, top_bit);

    if values.len() < 2 || min_bit > top_bit {
        return;
    }

    let mut stack = [(0_usize, 0_usize, 0_u32); WORK_STACK_LEN];
    let mut stack_len = 0;

    let (mut start, mut end, mut current_bit) = (0, values.len(), top_bit);

    loop {
        if end - start >= 2 {
            let split = start + partition(&mut values[start..end], current_bit, &mut bit);

            if current_bit > min_bit {
                current_bit -= 1;

                let (smaller, larger) = if split - start <= end - split {
                    ((start, split), (split, end))
                } else {
                    ((split, end), (start, split))
                };

                // the smaller side is at most half of the current range, which bounds the stack
                if larger.1 - larger.0 >= 2 {
                    debug_assert!(stack_len < WORK_STACK_LEN);
                    stack[stack_len] = (larger.0, larger.1, current_bit);
                    stack_len += 1;
                }
                (start, end) = smaller;
                continue;
            }
        }

        if stack_len == 0 {
            break;
        }
        stack_len -= 1;
        (start, end, current_bit) = stack[stack_len];
    }
}

/// Index of the minimum and the maximum element, found in a single pass.
fn min_max_indices<T, F>(values: &[T], mut is_less: F) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> bool,
{
    if values.is_empty() {
        return None;
    }

    let (mut min, mut max) = (0, 0);
    for (i, v) in values.iter().enumerate().skip(1) {
        if is_less(v, &values[min]) {
            min = i;
        } else if is_less(&values[max], v) {
            max = i;
        }
    }

    Some((min, max))
}

/// Sort `values` over the bit span spanned by the top bits of its minimum and maximum element.
///
/// The span is `[top_bit_of(min)..=top_bit_of(max)]`, with minimum and maximum taken by `Ord`.
/// Bits above the span are zero for every element when the encoding is unsigned and
/// monotonic with `Ord`. Bits below the span are not inspected, so elements which only differ there
/// keep an unspecified relative order, e.g. `[3, 2]` has the span `[1..=1]` and stays as it is.
/// Plain integers and other scalar keys are fully sorted by [`sort_auto_span`].
pub fn sort_by_auto_span<T, F, G>(values: &mut [T], bit: F, mut top_bit_of: G)
where
    T: Ord,
    F: FnMut(&T, u32) -> bool,
    G: FnMut(&T) -> u32,
{
    if values.len() < 2 {
        return;
    }
    let Some((min, max)) = min_max_indices(values, T::lt) else {
        return;
    };

    let top_bit = top_bit_of(&values[max]);
    let min_bit = top_bit_of(&values[min]);

    sort_by_bit_span(values, top_bit, min_bit, bit);
}

/// Sort scalar `values` ascending by every bit of their key.
#[inline]
pub fn sort<K: BinaryKey>(values: &mut [K]) {
    sort_by_bits(values, K::BITS - 1, |k, i| k.bit(i));
}

/// Sort scalar `values` ascending, only partitioning on the bits where their keys differ.
///
/// One pass collects the bits in which any key differs from the first key. Bits above the highest
/// such bit and below the lowest one are equal for all keys and are skipped.
pub fn sort_auto_span<K: BinaryKey>(values: &mut [K]) {
    let Some((first, rest)) = values.split_first() else {
        return;
    };

    let first = first.key();
    let differing = rest.iter().fold(0_u64, |acc, k| acc | (k.key() ^ first));
    if differing == 0 {
        return;
    }

    let top_bit = differing.ilog2();
    let min_bit = differing.trailing_zeros();

    sort_by_bit_span(values, top_bit, min_bit, |k, i| k.bit(i));
}

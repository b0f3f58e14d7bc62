/// Reorder `values` in place so that every element with bit `bit_index` unset precedes every element
/// with the bit set.
///
/// Returns the split index: `values[..split]` all have the bit clear, `values[split..]` all have it set.
/// The order within each side is unspecified.
#[inline]
pub fn partition<T, F>(values: &mut [T], bit_index: u32, bit: &mut F) -> usize
where
    F: FnMut(&T, u32) -> bool,
{
    let mut left = 0;
    let mut right = values.len();

    loop {
        while left < right && !bit(&values[left], bit_index) {
            left += 1;
        }
        while left < right && bit(&values[right - 1], bit_index) {
            right -= 1;
        }
        if left >= right {
            break;
        }
        // values[left] has the bit set and values[right - 1] has it clear, so they are distinct
        debug_assert!(left < right - 1);
        values.swap(left, right - 1);
        left += 1;
        right -= 1;
    }

    left
}

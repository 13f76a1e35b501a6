//! Array techniques: prefix sums, two pointers and sliding windows
//!
//! Sums of `i64` values are accumulated as `i128`, which holds the sum of any
//! slice that fits in memory, so none of these helpers can overflow.

use rustc_hash::FxHashMap;

/// Precomputed prefix sums answering inclusive range-sum queries in O(1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSum {
    sums: Vec<i128>, // sums[i] = values[..i].sum(), so sums.len() == values.len() + 1
}

impl PrefixSum {
    pub fn new(values: &[i64]) -> Self {
        PrefixSum {
            sums: prefix_sums(values),
        }
    }

    /// Sum of `values[left..=right]`, `None` if the range is empty or out of bounds
    pub fn range_sum(&self, left: usize, right: usize) -> Option<i128> {
        if left > right || right >= self.len() {
            return None;
        }
        Some(self.sums[right + 1] - self.sums[left])
    }

    pub fn total(&self) -> i128 {
        self.sums.last().copied().unwrap_or(0)
    }

    /// Number of underlying values
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The running sums, starting with the leading 0
    pub fn sums(&self) -> &[i128] {
        &self.sums
    }
}

/// Running sums with a leading 0
pub fn prefix_sums(values: &[i64]) -> Vec<i128> {
    let mut sums = Vec::with_capacity(values.len() + 1);
    sums.push(0);
    let mut running: i128 = 0;
    for &v in values {
        running += i128::from(v);
        sums.push(running);
    }
    sums
}

/// Indices `(i, j)` with `i < j` and `sorted[i] + sorted[j] == target`
pub fn two_sum_sorted(sorted: &[i64], target: i64) -> Option<(usize, usize)> {
    if sorted.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, sorted.len() - 1);
    while left < right {
        let sum = i128::from(sorted[left]) + i128::from(sorted[right]);
        match sum.cmp(&i128::from(target)) {
            std::cmp::Ordering::Equal => return Some((left, right)),
            std::cmp::Ordering::Less => left += 1,
            std::cmp::Ordering::Greater => right -= 1,
        }
    }
    None
}

/// Reverse with two converging pointers
pub fn reverse_in_place<T>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }
    let (mut left, mut right) = (0, values.len() - 1);
    while left < right {
        values.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Rotate right by `k` using three reversals
pub fn rotate_right<T>(values: &mut [T], k: usize) {
    if values.is_empty() {
        return;
    }
    let k = k % values.len();
    reverse_in_place(values);
    reverse_in_place(&mut values[..k]);
    reverse_in_place(&mut values[k..]);
}

/// Kadane's algorithm: best sum of a non-empty contiguous run with its bounds
pub fn max_subarray(values: &[i64]) -> Option<(i128, usize, usize)> {
    let (&first, rest) = values.split_first()?;
    let first = i128::from(first);
    let (mut best, mut best_start, mut best_end) = (first, 0, 0);
    let (mut current, mut start) = (first, 0);
    for (offset, &v) in rest.iter().enumerate() {
        let i = offset + 1;
        if current < 0 {
            current = i128::from(v);
            start = i;
        } else {
            current += i128::from(v);
        }
        if current > best {
            best = current;
            best_start = start;
            best_end = i;
        }
    }
    Some((best, best_start, best_end))
}

/// Largest sum of any window of exactly `k` consecutive values
pub fn max_window_sum(values: &[i64], k: usize) -> Option<i128> {
    if k == 0 || k > values.len() {
        return None;
    }
    let mut window: i128 = values[..k].iter().map(|&v| i128::from(v)).sum();
    let mut best = window;
    for i in k..values.len() {
        window += i128::from(values[i]) - i128::from(values[i - k]);
        best = best.max(window);
    }
    Some(best)
}

/// Remove consecutive duplicates from a sorted vector in place; returns the new length
pub fn dedup_sorted<T: PartialEq>(values: &mut Vec<T>) -> usize {
    if values.is_empty() {
        return 0;
    }
    let mut write = 1;
    for read in 1..values.len() {
        if values[read] != values[write - 1] {
            values.swap(write, read);
            write += 1;
        }
    }
    values.truncate(write);
    write
}

/// Merge two sorted slices into one sorted vector
pub fn merge_sorted<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merged.push(a[i].clone());
            i += 1;
        } else {
            merged.push(b[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}

/// Move every zero to the end, keeping the order of the others
pub fn move_zeros(values: &mut [i64]) {
    let mut write = 0;
    for read in 0..values.len() {
        if values[read] != 0 {
            values.swap(write, read);
            write += 1;
        }
    }
}

/// Number of contiguous subarrays summing to `k`, via prefix sums seen so far
pub fn subarray_sum_count(values: &[i64], k: i64) -> usize {
    let mut seen: FxHashMap<i128, usize> = FxHashMap::default();
    seen.insert(0, 1);
    let mut running: i128 = 0;
    let mut count = 0;
    for &v in values {
        running += i128::from(v);
        count += seen.get(&(running - i128::from(k))).copied().unwrap_or(0);
        *seen.entry(running).or_insert(0) += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_sum_ranges() {
        let ps = PrefixSum::new(&[3, -1, 4, 1, 5]);
        assert_eq!(ps.sums(), &[0, 3, 2, 6, 7, 12]);
        assert_eq!(ps.range_sum(0, 4), Some(12));
        assert_eq!(ps.range_sum(1, 3), Some(4));
        assert_eq!(ps.range_sum(2, 2), Some(4));
        assert_eq!(ps.range_sum(3, 1), None);
        assert_eq!(ps.range_sum(0, 5), None);
        assert_eq!(ps.total(), 12);

        let empty = PrefixSum::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.range_sum(0, 0), None);
    }

    #[test]
    fn test_two_pointer_helpers() {
        assert_eq!(two_sum_sorted(&[1, 2, 4, 7, 11], 15), Some((2, 4)));
        assert_eq!(two_sum_sorted(&[1, 2], 10), None);

        let mut v = vec![1, 2, 3, 4, 5];
        reverse_in_place(&mut v);
        assert_eq!(v, vec![5, 4, 3, 2, 1]);

        let mut v = vec![1, 2, 3, 4, 5];
        rotate_right(&mut v, 7);
        assert_eq!(v, vec![4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_kadane() {
        assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Some((6, 3, 6)));
        assert_eq!(max_subarray(&[-3, -1, -2]), Some((-1, 1, 1)));
        assert_eq!(max_subarray(&[]), None);
    }

    #[test]
    fn test_windows_and_counts() {
        assert_eq!(max_window_sum(&[2, 1, 5, 1, 3, 2], 3), Some(9));
        assert_eq!(max_window_sum(&[1], 2), None);
        assert_eq!(subarray_sum_count(&[1, 1, 1], 2), 2);
        assert_eq!(subarray_sum_count(&[1, -1, 0], 0), 3);
    }

    #[test]
    fn test_in_place_compaction() {
        let mut v = vec![1, 1, 2, 3, 3, 3, 4];
        assert_eq!(dedup_sorted(&mut v), 4);
        assert_eq!(v, vec![1, 2, 3, 4]);

        let mut v = [0, 1, 0, 3, 12];
        move_zeros(&mut v);
        assert_eq!(v, [1, 3, 12, 0, 0]);

        assert_eq!(merge_sorted(&[1, 4, 6], &[2, 3, 7, 8]), vec![1, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_sums_past_i64_range_are_exact() {
        let max = i128::from(i64::MAX);

        let ps = PrefixSum::new(&[i64::MAX, 1]);
        assert_eq!(ps.total(), max + 1);
        assert_eq!(ps.range_sum(1, 1), Some(1));
        assert_eq!(prefix_sums(&[i64::MIN, -1]), vec![0, -max - 1, -max - 2]);

        assert_eq!(two_sum_sorted(&[i64::MAX - 1, i64::MAX], 0), None);
        assert_eq!(two_sum_sorted(&[i64::MIN, -1, i64::MAX], -1), Some((0, 2)));

        assert_eq!(subarray_sum_count(&[i64::MAX], i64::MIN), 0);
        assert_eq!(subarray_sum_count(&[i64::MAX, i64::MIN, 1], 0), 1);

        assert_eq!(max_window_sum(&[i64::MAX, i64::MAX, 0], 2), Some(2 * max));
        assert_eq!(max_subarray(&[i64::MAX, i64::MAX]), Some((2 * max, 0, 1)));
        assert_eq!(max_subarray(&[i64::MIN, i64::MIN]), Some((-max - 1, 0, 0)));
    }
}

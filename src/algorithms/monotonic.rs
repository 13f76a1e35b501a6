//! Monotonic stack and deque scans
//!
//! A monotonic stack keeps the indices of still-unresolved elements in sorted
//! order of their values. When a new element breaks the order, every index it
//! pops has found its answer. Each index is pushed and popped at most once, so
//! all scans here are O(n).

use crate::collections::LinkedStack;
use std::collections::VecDeque;

/// For each index, the index of the next strictly greater element to its right
pub fn next_greater<T: PartialOrd>(values: &[T]) -> Vec<Option<usize>> {
    scan_right(values, |top, current| top < current)
}

/// For each index, the index of the next strictly smaller element to its right
pub fn next_smaller<T: PartialOrd>(values: &[T]) -> Vec<Option<usize>> {
    scan_right(values, |top, current| top > current)
}

/// For each index, the index of the nearest strictly greater element to its left
pub fn previous_greater<T: PartialOrd>(values: &[T]) -> Vec<Option<usize>> {
    scan_left(values, |top, current| top <= current)
}

/// For each index, the index of the nearest strictly smaller element to its left
pub fn previous_smaller<T: PartialOrd>(values: &[T]) -> Vec<Option<usize>> {
    scan_left(values, |top, current| top >= current)
}

/// Resolve pending indices when `resolves(values[top], values[i])` holds
fn scan_right<T, F>(values: &[T], resolves: F) -> Vec<Option<usize>>
where
    F: Fn(&T, &T) -> bool,
{
    let mut answer = vec![None; values.len()];
    let mut pending: LinkedStack<usize> = LinkedStack::new();
    for (i, current) in values.iter().enumerate() {
        while let Ok(&top) = pending.peek() {
            if !resolves(&values[top], current) {
                break;
            }
            answer[top] = Some(i);
            let _ = pending.pop();
        }
        pending.push(i);
    }
    answer
}

/// Discard stack entries while `discard(values[top], values[i])` holds; what
/// remains on top is the answer for `i`
fn scan_left<T, F>(values: &[T], discard: F) -> Vec<Option<usize>>
where
    F: Fn(&T, &T) -> bool,
{
    let mut answer = Vec::with_capacity(values.len());
    let mut candidates: LinkedStack<usize> = LinkedStack::new();
    for (i, current) in values.iter().enumerate() {
        while let Ok(&top) = candidates.peek() {
            if !discard(&values[top], current) {
                break;
            }
            let _ = candidates.pop();
        }
        answer.push(candidates.peek().ok().copied());
        candidates.push(i);
    }
    answer
}

/// Days to wait for a warmer temperature (0 when none comes)
pub fn daily_temperatures(temperatures: &[i32]) -> Vec<usize> {
    next_greater(temperatures)
        .into_iter()
        .enumerate()
        .map(|(i, next)| next.map_or(0, |j| j - i))
        .collect()
}

/// Stock span: consecutive days up to and including today with price <= today's
pub fn stock_span(prices: &[u32]) -> Vec<usize> {
    previous_greater(prices)
        .into_iter()
        .enumerate()
        .map(|(i, prev)| prev.map_or(i + 1, |j| i - j))
        .collect()
}

/// Area of the largest rectangle under a histogram
///
/// The area is a `u128` since height times width can exceed `u64`.
pub fn largest_rectangle(heights: &[u64]) -> u128 {
    let left = previous_smaller(heights);
    let right = next_smaller(heights);
    heights
        .iter()
        .enumerate()
        .map(|(i, &h)| {
            let start = left[i].map_or(0, |l| l + 1);
            let end = right[i].unwrap_or(heights.len());
            u128::from(h) * (end - start) as u128
        })
        .max()
        .unwrap_or(0)
}

/// Maximum of every window of width `k`, using a deque of decreasing values
pub fn sliding_window_max<T: PartialOrd + Copy>(values: &[T], k: usize) -> Vec<T> {
    if k == 0 || k > values.len() {
        return Vec::new();
    }
    let mut window: VecDeque<usize> = VecDeque::with_capacity(k);
    let mut maxima = Vec::with_capacity(values.len() + 1 - k);
    for (i, &current) in values.iter().enumerate() {
        if window.front().is_some_and(|&front| front + k <= i) {
            window.pop_front();
        }
        while window.back().is_some_and(|&back| values[back] <= current) {
            window.pop_back();
        }
        window.push_back(i);
        if i + 1 >= k {
            if let Some(&front) = window.front() {
                maxima.push(values[front]);
            }
        }
    }
    maxima
}

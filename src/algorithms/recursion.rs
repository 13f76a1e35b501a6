//! Recursive algorithms
//!
//! Each function is written recursively on purpose: base case first, then a
//! recursive case that shrinks the problem. Functions whose results overflow
//! quickly return `Option` and report overflow as `None`.

use rustc_hash::FxHashMap;

/// Largest n with n! in `u64`
const MAX_FACTORIAL_INPUT: u64 = 20;

/// Largest n with F(n) in `u64`
const MAX_FIBONACCI_INPUT: u32 = 93;

/// n! with overflow checking
pub fn factorial(n: u64) -> Option<u64> {
    if n > MAX_FACTORIAL_INPUT {
        return None;
    }
    if n <= 1 {
        return Some(1);
    }
    factorial(n - 1)?.checked_mul(n)
}

/// nth Fibonacci number, naive double recursion (exponential time)
pub fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// nth Fibonacci number with memoisation (linear time); `None` past F(93)
pub fn fibonacci_memo(n: u32) -> Option<u64> {
    fn go(n: u32, memo: &mut FxHashMap<u32, u64>) -> Option<u64> {
        if n < 2 {
            return Some(u64::from(n));
        }
        if let Some(&cached) = memo.get(&n) {
            return Some(cached);
        }
        let value = go(n - 1, memo)?.checked_add(go(n - 2, memo)?)?;
        memo.insert(n, value);
        Some(value)
    }

    // Overflowing inputs are rejected before recursing n levels deep
    if n > MAX_FIBONACCI_INPUT {
        return None;
    }
    let mut memo = FxHashMap::default();
    go(n, &mut memo)
}

/// base^exp by repeated squaring, O(log exp) multiplications
pub fn power(base: i64, exp: u32) -> Option<i64> {
    if exp == 0 {
        return Some(1);
    }
    let half = power(base, exp / 2)?;
    let squared = half.checked_mul(half)?;
    if exp % 2 == 0 {
        Some(squared)
    } else {
        squared.checked_mul(base)
    }
}

pub fn sum_digits(n: u64) -> u64 {
    if n < 10 {
        n
    } else {
        n % 10 + sum_digits(n / 10)
    }
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

pub fn reverse_string(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut rest = reverse_string(chars.as_str());
            rest.push(first);
            rest
        }
    }
}

/// Exact palindrome check by comparing the outer characters and recursing inward
pub fn is_palindrome(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    fn go(chars: &[char]) -> bool {
        match chars {
            [] | [_] => true,
            [first, middle @ .., last] => first == last && go(middle),
        }
    }
    go(&chars)
}

/// Recursive binary search over a sorted slice
pub fn binary_search<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    match target.cmp(&sorted[mid]) {
        std::cmp::Ordering::Equal => Some(mid),
        std::cmp::Ordering::Less => binary_search(&sorted[..mid], target),
        std::cmp::Ordering::Greater => {
            binary_search(&sorted[mid + 1..], target).map(|i| i + mid + 1)
        }
    }
}

/// A single Tower of Hanoi move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanoiMove {
    pub disk: u32,
    pub from: char,
    pub to: char,
}

/// Moves that transfer `disks` disks from peg `from` to peg `to` (2^n - 1 moves)
pub fn hanoi(disks: u32, from: char, to: char, via: char) -> Vec<HanoiMove> {
    fn go(n: u32, from: char, to: char, via: char, moves: &mut Vec<HanoiMove>) {
        if n == 0 {
            return;
        }
        go(n - 1, from, via, to, moves);
        moves.push(HanoiMove { disk: n, from, to });
        go(n - 1, via, to, from, moves);
    }

    let mut moves = Vec::new();
    go(disks, from, to, via, &mut moves);
    moves
}

/// Every ordering of `items`, generated by swapping each element to the front
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn go<T: Clone>(work: &mut Vec<T>, start: usize, out: &mut Vec<Vec<T>>) {
        if start == work.len() {
            out.push(work.clone());
            return;
        }
        for i in start..work.len() {
            work.swap(start, i);
            go(work, start + 1, out);
            work.swap(start, i);
        }
    }

    let mut out = Vec::new();
    let mut work = items.to_vec();
    go(&mut work, 0, &mut out);
    out
}

/// Every subset of `items` (the power set), by include/exclude recursion
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    match items.split_first() {
        None => vec![Vec::new()],
        Some((first, rest)) => {
            let without = subsets(rest);
            let mut all = without.clone();
            for mut subset in without {
                subset.insert(0, first.clone());
                all.push(subset);
            }
            all
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_huge_inputs_return_none_without_deep_recursion() {
        assert_eq!(factorial(5_000_000), None);
        assert_eq!(factorial(u64::MAX), None);
        assert_eq!(fibonacci_memo(5_000_000), None);
        assert_eq!(fibonacci_memo(u32::MAX), None);
    }

    #[test]
    fn test_fibonacci_variants_agree() {
        for n in 0..20 {
            assert_eq!(fibonacci_memo(n), Some(fibonacci(n)));
        }
        assert_eq!(fibonacci_memo(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci_memo(94), None);
    }

    #[test]
    fn test_power_and_gcd() {
        assert_eq!(power(2, 10), Some(1024));
        assert_eq!(power(-3, 3), Some(-27));
        assert_eq!(power(10, 0), Some(1));
        assert_eq!(power(2, 63), None);
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(sum_digits(9045), 18);
    }

    #[test]
    fn test_string_recursion() {
        assert_eq!(reverse_string("stack"), "kcats");
        assert_eq!(reverse_string(""), "");
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("queue"));
    }

    #[test]
    fn test_binary_search() {
        let sorted = [1, 3, 5, 7, 9, 11];
        for (i, v) in sorted.iter().enumerate() {
            assert_eq!(binary_search(&sorted, v), Some(i));
        }
        assert_eq!(binary_search(&sorted, &4), None);
        assert_eq!(binary_search(&[] as &[i32], &4), None);
    }

    #[test]
    fn test_hanoi() {
        let moves = hanoi(3, 'A', 'C', 'B');
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], HanoiMove { disk: 1, from: 'A', to: 'C' });
        assert_eq!(moves[3], HanoiMove { disk: 3, from: 'A', to: 'C' });
    }

    #[test]
    fn test_permutations_and_subsets() {
        let perms = permutations(&[1, 2, 3]);
        assert_eq!(perms.len(), 6);
        assert!(perms.contains(&vec![3, 1, 2]));

        let sets = subsets(&['a', 'b']);
        assert_eq!(sets, vec![vec![], vec!['b'], vec!['a'], vec!['a', 'b']]);
    }
}

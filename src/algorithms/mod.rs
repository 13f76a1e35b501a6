//! Algorithms built on the linear containers
//!
//! - [`monotonic`]: next/previous greater and smaller scans, histogram and window maxima
//! - [`expression`]: bracket matching, infix to postfix, postfix evaluation
//! - [`recursion`]: factorial, Fibonacci, Hanoi, binary search and friends
//! - [`arrays`]: prefix sums, two pointers, Kadane, sliding windows
//! - [`strings`]: palindromes, anagrams, run-length encoding, unique windows

pub mod arrays;
pub mod expression;
pub mod monotonic;
pub mod recursion;
pub mod strings;

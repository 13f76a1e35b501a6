//! String techniques: two pointers, counting and sliding windows
//!
//! All functions operate on `char`s, not bytes, so multi-byte text is handled
//! one code point at a time.

use rustc_hash::FxHashMap;

/// Palindrome check over alphanumerics only, ignoring case
pub fn is_palindrome(s: &str) -> bool {
    let mut forward = s.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase);
    let mut backward = s
        .chars()
        .rev()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase);
    loop {
        match (forward.next(), backward.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => continue,
            _ => return false,
        }
    }
}

/// Occurrences of each character
pub fn char_frequency(s: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Whether `a` and `b` use exactly the same characters, whitespace and case ignored
pub fn is_anagram(a: &str, b: &str) -> bool {
    let normalize = |s: &str| -> String {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    };
    let mut counts = char_frequency(&normalize(a));
    for c in normalize(b).chars() {
        match counts.get_mut(&c) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return false,
        }
    }
    counts.values().all(|&n| n == 0)
}

/// Words in reverse order, separated by single spaces
pub fn reverse_words(s: &str) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// Longest substring without repeated characters
pub fn longest_unique_substring(s: &str) -> &str {
    let mut last_seen: FxHashMap<char, usize> = FxHashMap::default();
    let (mut best_start, mut best_end) = (0, 0);
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if let Some(&prev) = last_seen.get(&c) {
            if prev >= start {
                start = prev + c.len_utf8();
            }
        }
        last_seen.insert(c, i);
        let end = i + c.len_utf8();
        if end - start > best_end - best_start {
            best_start = start;
            best_end = end;
        }
    }
    &s[best_start..best_end]
}

/// Run-length encoding: "aaabcc" becomes "a3b1c2"
pub fn run_length_encode(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        out.push(c);
        out.push_str(&run.to_string());
    }
    out
}

/// Index (in chars) of the first character that appears exactly once
pub fn first_unique_char(s: &str) -> Option<usize> {
    let counts = char_frequency(s);
    s.chars().position(|c| counts.get(&c) == Some(&1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromes() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("race a car"));
    }

    #[test]
    fn test_anagrams() {
        assert!(is_anagram("listen", "silent"));
        assert!(is_anagram("Dormitory", "dirty room"));
        assert!(!is_anagram("stack", "stacks"));
        assert!(!is_anagram("queue", "queen"));
    }

    #[test]
    fn test_frequency_and_unique() {
        let counts = char_frequency("hello");
        assert_eq!(counts.get(&'l'), Some(&2));
        assert_eq!(counts.get(&'h'), Some(&1));
        assert_eq!(first_unique_char("loveleetcode"), Some(2));
        assert_eq!(first_unique_char("aabb"), None);
    }

    #[test]
    fn test_sliding_window_substring() {
        assert_eq!(longest_unique_substring("abcabcbb"), "abc");
        assert_eq!(longest_unique_substring("pwwkew"), "wke");
        assert_eq!(longest_unique_substring("abba"), "ab");
        assert_eq!(longest_unique_substring(""), "");
    }

    #[test]
    fn test_rewrites() {
        assert_eq!(reverse_words("  the sky  is blue "), "blue is sky the");
        assert_eq!(run_length_encode("aaabcc"), "a3b1c2");
        assert_eq!(run_length_encode(""), "");
    }
}

// SPDX-FileCopyrightText: 2025 Chain Gateway Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Round-robin API-key rotation
//!
//! The swap-quote upstream enforces per-key quotas, so outbound calls are
//! spread across a fixed, ordered key set. The cursor advances by one
//! (mod key count) on every selection - before the outbound call is even
//! issued - so success and failure rotate identically and the index is
//! always in `[0, len)`.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;

/// Errors from constructing a [`KeyRotator`]
#[derive(Debug, Error)]
pub enum KeyRotatorError {
    /// The configured key list was empty
    #[error("at least one API key is required")]
    NoKeys,
}

/// Fair round-robin selector over an ordered set of API keys
#[derive(Debug)]
pub struct KeyRotator {
    keys: Vec<Box<str>>,
    cursor: AtomicUsize,
}

impl KeyRotator {
    /// Create a rotator over the given keys, starting at index 0.
    pub fn new(keys: Vec<String>) -> Result<Self, KeyRotatorError> {
        let keys: Vec<Box<str>> = keys
            .into_iter()
            .map(String::into_boxed_str)
            .filter(|k| !k.trim().is_empty())
            .collect();
        if keys.is_empty() {
            return Err(KeyRotatorError::NoKeys);
        }
        Ok(Self {
            keys,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Create a rotator from a space-separated key list, the format the
    /// upstream key set is provisioned in via environment configuration.
    pub fn from_separated(raw: &str) -> Result<Self, KeyRotatorError> {
        Self::new(raw.split_whitespace().map(str::to_string).collect())
    }

    /// Select the current key and advance the cursor.
    ///
    /// The read-and-advance is a single atomic update with no await point,
    /// so concurrent callers each get a distinct slot in the rotation.
    pub fn next_key(&self) -> &str {
        let len = self.keys.len();
        let index = self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| {
                Some((i + 1) % len)
            })
            .unwrap_or(0);
        &self.keys[index]
    }

    /// Number of keys in the rotation.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the rotation holds no keys. Always false by construction.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn rejects_empty_key_sets() {
        assert!(matches!(KeyRotator::new(vec![]), Err(KeyRotatorError::NoKeys)));
        assert!(matches!(
            KeyRotator::from_separated("   "),
            Err(KeyRotatorError::NoKeys)
        ));
    }

    #[test]
    fn parses_space_separated_keys() {
        let rotator = KeyRotator::from_separated("key-a key-b  key-c").expect("keys");
        assert_eq!(rotator.len(), 3);
        assert_eq!(rotator.next_key(), "key-a");
        assert_eq!(rotator.next_key(), "key-b");
        assert_eq!(rotator.next_key(), "key-c");
    }

    #[test]
    fn rotation_is_deterministic_round_robin() {
        let rotator = KeyRotator::new(vec!["a".into(), "b".into(), "c".into()]).expect("keys");

        let selected: Vec<&str> = (0..7).map(|_| rotator.next_key()).collect();
        assert_eq!(selected, ["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn two_keys_three_calls_selects_first_key_twice() {
        let rotator = KeyRotator::new(vec!["key0".into(), "key1".into()]).expect("keys");
        assert_eq!(rotator.next_key(), "key0");
        assert_eq!(rotator.next_key(), "key1");
        assert_eq!(rotator.next_key(), "key0");
    }

    #[test]
    fn single_key_always_selected() {
        let rotator = KeyRotator::new(vec!["only".into()]).expect("keys");
        for _ in 0..5 {
            assert_eq!(rotator.next_key(), "only");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_use_is_fair() {
        let rotator = Arc::new(KeyRotator::new(vec!["a".into(), "b".into()]).expect("keys"));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let rotator = Arc::clone(&rotator);
            handles.push(tokio::spawn(async move {
                let mut counts = [0usize; 2];
                for _ in 0..100 {
                    match rotator.next_key() {
                        "a" => counts[0] += 1,
                        _ => counts[1] += 1,
                    }
                }
                counts
            }));
        }

        let mut totals = [0usize; 2];
        for handle in handles {
            let counts = handle.await.expect("task");
            totals[0] += counts[0];
            totals[1] += counts[1];
        }

        // 400 selections over 2 keys land exactly evenly
        assert_eq!(totals, [200, 200]);
    }
}

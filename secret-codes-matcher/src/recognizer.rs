//! Streaming trigger recognition.
//!
//! Feeds typed text into a pending buffer and scans its suffixes left to
//! right. Characters that can no longer begin any phrase are dropped as soon
//! as the scan moves past them, so the buffer never grows beyond the longest
//! registered phrase.

use std::sync::Arc;

use crate::normalize;
use crate::registry::ActionRegistry;

/// Recognizes registered phrases at the end of a stream of typed text.
///
/// One recognizer serves one input source. Calls to [`feed`](Self::feed)
/// must be serialized; the `&mut self` receiver also rules out re-entering
/// `feed` from inside a firing action.
#[derive(Debug)]
pub struct TriggerRecognizer {
    registry: Arc<ActionRegistry>,
    /// Normalized suffix of the input that may still grow into a phrase.
    /// Empty, or a proper prefix of some registered phrase.
    pending: String,
}

impl TriggerRecognizer {
    /// Create a recognizer with an empty pending buffer.
    pub fn new(registry: Arc<ActionRegistry>) -> Self {
        Self {
            registry,
            pending: String::new(),
        }
    }

    /// The registry this recognizer matches against.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Feed typed text into the recognizer.
    ///
    /// Scans suffixes of the pending buffer plus `text` from the longest to
    /// the shortest and stops at the first one that either
    /// - is a proper prefix of a longer phrase: kept as pending input, or
    /// - equals a phrase: the buffer is cleared and the action fires.
    ///
    /// Suffixes rejected along the way are discarded. At most one action
    /// fires per call. Returns the phrase that fired, if any.
    pub fn feed(&mut self, text: &str) -> Option<&str> {
        let mut buffer = std::mem::take(&mut self.pending);
        buffer.push_str(&normalize(text));

        for (start, _) in buffer.char_indices() {
            let piece = &buffer[start..];

            if self.registry.extends_beyond(piece) {
                if start > 0 {
                    log::trace!("Dropped {} unmatchable leading bytes", start);
                }
                self.pending = piece.to_string();
                log::trace!("Pending trigger input: '{}'", self.pending);
                return None;
            }

            if let Some((phrase, action)) = self.registry.exact(piece) {
                // pending is already empty, so a failing action cannot strand state
                log::debug!("Trigger phrase '{}' completed", phrase);
                action();
                return Some(phrase);
            }
        }

        if !buffer.is_empty() {
            log::trace!("No viable trigger prefix in '{}', buffer cleared", buffer);
        }
        None
    }

    #[cfg(test)]
    fn pending(&self) -> &str {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ActionRegistry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Build a recognizer where each phrase bumps its own counter.
    fn recognizer(phrases: &[&str]) -> (TriggerRecognizer, Vec<Arc<AtomicUsize>>) {
        let mut builder = ActionRegistry::builder();
        let mut counters = Vec::new();
        for phrase in phrases {
            let counter = Arc::new(AtomicUsize::new(0));
            let c = Arc::clone(&counter);
            builder = builder.register(*phrase, move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
            counters.push(counter);
        }
        let registry = Arc::new(builder.build().unwrap());
        (TriggerRecognizer::new(registry), counters)
    }

    fn count(c: &Arc<AtomicUsize>) -> usize {
        c.load(Ordering::SeqCst)
    }

    #[test]
    fn test_exact_match_fires_once() {
        let (mut rec, counters) = recognizer(&["abc"]);
        assert_eq!(rec.feed("a"), None);
        assert_eq!(rec.pending(), "a");
        assert_eq!(rec.feed("b"), None);
        assert_eq!(rec.pending(), "ab");
        assert_eq!(rec.feed("c"), Some("abc"));
        assert_eq!(count(&counters[0]), 1);
        assert_eq!(rec.pending(), "");
    }

    #[test]
    fn test_leading_noise_is_discarded() {
        let (mut rec, counters) = recognizer(&["abc"]);
        assert_eq!(rec.feed("xyzabc"), Some("abc"));
        assert_eq!(count(&counters[0]), 1);
        assert_eq!(rec.pending(), "");
    }

    #[test]
    fn test_no_match_drains_buffer() {
        let (mut rec, counters) = recognizer(&["abc"]);
        assert_eq!(rec.feed("xyzxyzxyz"), None);
        assert_eq!(count(&counters[0]), 0);
        assert_eq!(rec.pending(), "");
    }

    #[test]
    fn test_prefix_phrase_is_retained_not_fired() {
        let (mut rec, counters) = recognizer(&["ab", "abc"]);
        rec.feed("a");
        rec.feed("b");
        assert_eq!(count(&counters[0]), 0);
        assert_eq!(rec.pending(), "ab");
        assert_eq!(rec.feed("c"), Some("abc"));
        assert_eq!(count(&counters[0]), 0);
        assert_eq!(count(&counters[1]), 1);
    }

    #[test]
    fn test_prefix_phrase_abandoned_on_divergence() {
        let (mut rec, counters) = recognizer(&["ab", "abc"]);
        rec.feed("a");
        rec.feed("b");
        assert_eq!(rec.feed("x"), None);
        assert_eq!(count(&counters[0]), 0);
        assert_eq!(rec.pending(), "");
    }

    #[test]
    fn test_divergent_prefixes() {
        let (mut rec, counters) = recognizer(&["ab", "ax"]);
        rec.feed("a");
        assert_eq!(rec.feed("b"), Some("ab"));
        assert_eq!(count(&counters[0]), 1);

        rec.feed("a");
        assert_eq!(rec.feed("x"), Some("ax"));
        assert_eq!(count(&counters[1]), 1);

        rec.feed("a");
        assert_eq!(rec.feed("z"), None);
        assert_eq!(rec.pending(), "");
        assert_eq!(count(&counters[0]), 1);
        assert_eq!(count(&counters[1]), 1);
    }

    #[test]
    fn test_empty_feed_is_noop() {
        let (mut rec, counters) = recognizer(&["abc"]);
        for _ in 0..3 {
            assert_eq!(rec.feed(""), None);
            assert_eq!(rec.pending(), "");
        }
        rec.feed("ab");
        for _ in 0..3 {
            assert_eq!(rec.feed(""), None);
            assert_eq!(rec.pending(), "ab");
        }
        assert_eq!(count(&counters[0]), 0);
    }

    #[test]
    fn test_case_normalization() {
        let (mut rec, counters) = recognizer(&["abc"]);
        assert_eq!(rec.feed("ABC"), Some("abc"));
        assert_eq!(count(&counters[0]), 1);
    }

    #[test]
    fn test_restart_inside_failed_attempt() {
        // "aab": the first 'a' is dropped and "ab" survives.
        let (mut rec, counters) = recognizer(&["abc"]);
        rec.feed("a");
        rec.feed("a");
        assert_eq!(rec.pending(), "a");
        rec.feed("b");
        assert_eq!(rec.pending(), "ab");
        assert_eq!(rec.feed("c"), Some("abc"));
        assert_eq!(count(&counters[0]), 1);
    }

    #[test]
    fn test_longest_suffix_wins() {
        let (mut rec, counters) = recognizer(&["xabc", "abc"]);
        assert_eq!(rec.feed("xabc"), Some("xabc"));
        assert_eq!(count(&counters[0]), 1);
        assert_eq!(count(&counters[1]), 0);
    }

    #[test]
    fn test_one_action_per_feed() {
        let (mut rec, counters) = recognizer(&["abc"]);
        // The phrase appears twice but only the trailing suffix can match.
        assert_eq!(rec.feed("abcabc"), Some("abc"));
        assert_eq!(count(&counters[0]), 1);
        assert_eq!(rec.pending(), "");
    }

    #[test]
    fn test_pending_bounded_by_longest_phrase() {
        let (mut rec, _) = recognizer(&["abcd", "xy"]);
        for ch in "qabcqabxabcabcxqxyaab".chars() {
            rec.feed(&ch.to_string());
            assert!(rec.pending().chars().count() < rec.registry().longest_phrase_len());
        }
    }

    #[test]
    fn test_multibyte_input() {
        let (mut rec, counters) = recognizer(&["äöü"]);
        rec.feed("xÄ");
        assert_eq!(rec.pending(), "ä");
        assert_eq!(rec.feed("ÖÜ"), Some("äöü"));
        assert_eq!(count(&counters[0]), 1);
    }

    #[test]
    fn test_panicking_action_leaves_buffer_empty() {
        let registry = ActionRegistry::builder()
            .register("boom", || panic!("action failed"))
            .register("ok", || {})
            .build()
            .unwrap();
        let mut rec = TriggerRecognizer::new(Arc::new(registry));
        rec.feed("bo");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            rec.feed("om");
        }));
        assert!(result.is_err());
        assert_eq!(rec.pending(), "");
        assert_eq!(rec.feed("ok"), Some("ok"));
    }
}

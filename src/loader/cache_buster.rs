//! Cache-defeating query stamps
//!
//! Each resource request carries `v=<stamp>`. Stamps are wall-clock
//! milliseconds, bumped when needed so they strictly increase across the
//! whole process.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Next stamp, strictly greater than every stamp handed out before
pub fn next_stamp() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_STAMP.compare_exchange_weak(
            prev,
            candidate,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

/// Append `v=<stamp>` using `?` or `&` depending on the existing query
pub fn with_cache_buster(path: &str) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", path, separator, next_stamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamps_strictly_increase() {
        let stamps: Vec<i64> = (0..100).map(|_| next_stamp()).collect();
        assert!(stamps.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_separator_choice() {
        assert!(with_cache_buster("data/person.json").starts_with("data/person.json?v="));
        assert!(with_cache_buster("data/person.json?lang=en")
            .starts_with("data/person.json?lang=en&v="));
    }
}

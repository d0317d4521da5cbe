//! Unique identifier generation
//!
//! Names for buttons and tabs that were left unnamed are generated here.
//! The counter is process-wide and never reset, so two calls never return
//! the same name even within the same millisecond.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

static UNIQUE: AtomicU64 = AtomicU64::new(0);

/// Prefix for generated button names
pub const BUTTON_NAME_PREFIX: &str = "button-name";

/// Prefix for generated tab names
pub const TAB_NAME_PREFIX: &str = "tab-name";

/// Generate a fresh identifier, e.g. `button-name_7_482913304_1718000000000`
pub fn generate(prefix: &str) -> String {
    let unique = UNIQUE.fetch_add(1, Ordering::Relaxed);
    let random = Uuid::new_v4().as_u128() % 1_000_000_000;
    let time = Utc::now().timestamp_millis();
    format!("{}_{}_{:09}_{}", prefix, unique, random, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_uses_prefix() {
        let id = generate(BUTTON_NAME_PREFIX);
        assert!(id.starts_with("button-name_"));
    }

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate(TAB_NAME_PREFIX)).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generate_is_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..250).map(|_| generate("x")).collect::<Vec<_>>()))
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.extend(handle.join().unwrap());
        }
        assert_eq!(ids.len(), 1000);
    }
}

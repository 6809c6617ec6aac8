//! Locale-aware name comparison.
//!
//! # Responsibility
//! - Order display names with the CLDR root collation, matching what a
//!   browser `localeCompare` returns without an explicit locale.
//!
//! # Invariants
//! - Default tertiary strength: base letters, then accents, then case
//!   (lowercase first).
//! - Canonically equivalent strings (NFC vs NFD) compare equal.
//! - A collator that fails to load degrades to code-point order and is
//!   reported once per thread.

use icu_collator::{Collator, CollatorOptions};
use log::error;
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = load_root_collator();
}

fn load_root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            error!("event=collator_load module=contacts status=error fallback=codepoint error={err}");
            None
        }
    }
}

/// Compares two names with root-locale collation.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| compare_with(collator.as_ref(), left, right))
}

/// Stable sort of `items` by the name returned from `name_of`.
///
/// Items whose names collate equal keep their prior relative order.
pub fn sort_by_name<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str,
{
    ROOT_COLLATOR.with(|collator| {
        items.sort_by(|left, right| {
            compare_with(collator.as_ref(), name_of(left), name_of(right))
        })
    });
}

fn compare_with(collator: Option<&Collator>, left: &str, right: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(left, right),
        None => left.cmp(right),
    }
}

#[cfg(test)]
mod tests {
    use super::{compare_names, sort_by_name};
    use std::cmp::Ordering;

    #[test]
    fn case_is_ignored_at_primary_level() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Zoe", "adam"), Ordering::Greater);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_tie() {
        assert_eq!(compare_names("eva", "Eva"), Ordering::Less);
        assert_eq!(compare_names("Eva", "eva"), Ordering::Greater);
    }

    #[test]
    fn accents_only_break_ties() {
        assert_eq!(compare_names("Zoë", "Zoe"), Ordering::Greater);
        assert_eq!(compare_names("Émile", "Eric"), Ordering::Less);
    }

    #[test]
    fn composed_and_decomposed_forms_are_equal() {
        assert_eq!(compare_names("Jos\u{e9}", "Jose\u{301}"), Ordering::Equal);
    }

    #[test]
    fn letters_outside_decomposition_sort_with_their_base() {
        assert_eq!(compare_names("Łukasz", "Zoe"), Ordering::Less);
        assert_eq!(compare_names("Đorđe", "Zoe"), Ordering::Less);
        assert_eq!(compare_names("Øyvind", "Peter"), Ordering::Less);
        assert_eq!(compare_names("Øyvind", "Oscar"), Ordering::Greater);
    }

    #[test]
    fn symbols_sort_before_letters() {
        assert_eq!(compare_names("~x", "a"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Ann", "Anna"), Ordering::Less);
        assert_eq!(compare_names("", "a"), Ordering::Less);
    }

    #[test]
    fn sort_by_name_keeps_order_of_equal_names() {
        let mut items = vec![("Bravo", 1), ("alpha", 2), ("Bravo", 3)];
        sort_by_name(&mut items, |item| item.0);
        assert_eq!(items, [("alpha", 2), ("Bravo", 1), ("Bravo", 3)]);
    }
}

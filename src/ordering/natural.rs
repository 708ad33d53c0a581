// src/ordering/natural.rs

use icu_collator::options::CollatorOptions;
use icu_collator::preferences::CollationNumericOrdering;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use log::warn;
use once_cell::sync::Lazy;
use std::cmp::Ordering;

// Root collation with numeric ordering switched on.
static COLLATOR: Lazy<Option<CollatorBorrowed<'static>>> = Lazy::new(|| {
    let mut prefs = CollatorPreferences::default();
    prefs.numeric_ordering = Some(CollationNumericOrdering::True);
    match Collator::try_new(prefs, CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("Collator unavailable, falling back to byte order: {}", e);
            None
        }
    }
});

/// Compares two strings the way a person reads file names.
///
/// Uses Unicode collation with numeric ordering: runs of digits compare by
/// value, so `file2` sorts before `file10`. Punctuation sorts before digits
/// and digits before letters. Accented letters sort next to their base
/// letter. Lower case comes before upper case. Strings the collator treats
/// as equal (such as `01` and `1`) fall back to byte order, which makes the
/// comparison a total order.
///
/// # Examples
///
/// ```
/// use mdmerge::ordering::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("file2.md", "file10.md"), Ordering::Less);
/// assert_eq!(natural_cmp("Beta.md", "alpha.md"), Ordering::Greater);
/// assert_eq!(natural_cmp("a.md", "A.md"), Ordering::Less);
/// assert_eq!(natural_cmp("école.md", "zeta.md"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let collated = match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    };
    collated.then_with(|| a.cmp(b))
}

//! Sort engine.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use super::types::{ProductView, SortDirection, SortKey, SortSpec};

/// Return the views ordered by `spec`, leaving the input untouched.
///
/// `SortDirection::None` keeps input order for any key. Ascending and
/// descending use a stable sort, so rows that compare equal keep their
/// relative input order in both directions.
pub fn sort(views: &[ProductView], spec: &SortSpec) -> Vec<ProductView> {
    let mut sorted = views.to_vec();
    match spec.direction {
        SortDirection::None => {}
        SortDirection::Ascending => sorted.sort_by(|a, b| compare(a, b, spec.key)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a, spec.key)),
    }
    sorted
}

/// Compare two views on a single column, ascending.
pub fn compare(a: &ProductView, b: &ProductView, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Category => collate(&a.category.title, &b.category.title),
        SortKey::Owner => collate(&a.owner.name, &b.owner.name),
    }
}

/// Dictionary-style string ordering under the root locale.
///
/// Uses the Unicode collation algorithm with CLDR root data, so accented
/// letters sort with their base letter and lowercase sorts before uppercase
/// when strings differ only in case. Strings the collator considers equal
/// fall back to code point order, which keeps the ordering total.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => fold_case(a).cmp(fold_case(b)),
        })
        .then_with(|| a.cmp(b))
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(error) => {
            warn!(%error, "root collation data unavailable, sorting by case-folded text");
            None
        }
    }
}

fn fold_case(s: &str) -> impl Iterator<Item = char> {
    s.chars().flat_map(char::to_lowercase)
}

//! Page merge rule shared by the classic pager and infinite scroll.

use std::collections::HashSet;

use crate::model::Entity;

/// How a fulfilled page response combines with already-loaded items.
///
/// The caller chooses the mode when dispatching the fetch; it is carried
/// through the lifecycle event rather than inferred from call ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Swap `items` wholesale for the response (classic pager, first page).
    Replace,
    /// Append response entities whose identity key is not already loaded
    /// (infinite scroll). Existing entries keep their order; newcomers keep
    /// server order among themselves.
    Append,
}

/// Merge a page response into the loaded item list.
///
/// Append is idempotent: merging the same response twice leaves the list
/// unchanged after the first merge. Entities without an identity key are
/// always appended; the server assigns keys, so this only arises with
/// malformed responses and losing an entry would be worse than a duplicate.
pub fn merge_page<T: Entity>(existing: Vec<T>, incoming: Vec<T>, mode: FetchMode) -> Vec<T> {
    match mode {
        FetchMode::Replace => incoming,
        FetchMode::Append => {
            let mut seen: HashSet<_> = existing.iter().filter_map(Entity::id).collect();
            let mut merged = existing;
            for item in incoming {
                match item.id() {
                    Some(id) if !seen.insert(id) => {}
                    _ => merged.push(item),
                }
            }
            merged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    fn tag(id: i64) -> Tag {
        Tag {
            id: Some(id),
            name: Some(format!("tag-{id}")),
            photos: Vec::new(),
        }
    }

    fn ids(tags: &[Tag]) -> Vec<i64> {
        tags.iter().filter_map(|t| t.id).collect()
    }

    #[test]
    fn replace_discards_existing_items() {
        let merged = merge_page(vec![tag(1), tag(2)], vec![tag(3)], FetchMode::Replace);
        assert_eq!(ids(&merged), vec![3]);
    }

    #[test]
    fn append_skips_already_loaded_keys() {
        let merged = merge_page(
            vec![tag(1), tag(2)],
            vec![tag(2), tag(3)],
            FetchMode::Append,
        );
        assert_eq!(ids(&merged), vec![1, 2, 3]);
    }

    #[test]
    fn append_preserves_existing_order() {
        let merged = merge_page(
            vec![tag(5), tag(1)],
            vec![tag(1), tag(9), tag(5), tag(7)],
            FetchMode::Append,
        );
        assert_eq!(ids(&merged), vec![5, 1, 9, 7]);
    }

    #[test]
    fn append_is_idempotent() {
        let once = merge_page(vec![tag(1)], vec![tag(2), tag(3)], FetchMode::Append);
        let twice = merge_page(once.clone(), vec![tag(2), tag(3)], FetchMode::Append);
        assert_eq!(once, twice);
    }

    #[test]
    fn append_dedupes_within_one_response() {
        let merged = merge_page(Vec::new(), vec![tag(4), tag(4)], FetchMode::Append);
        assert_eq!(ids(&merged), vec![4]);
    }
}

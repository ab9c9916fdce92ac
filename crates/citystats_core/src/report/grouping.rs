//! Ordered multimap construction for per-report grouping.

use std::collections::HashMap;
use std::hash::Hash;

/// Groups items by key, keeping first-encounter key order and input order
/// inside each group.
///
/// Built fresh per call; nothing is cached across reports.
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a T) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();

    for item in items {
        let k = key(item);
        match slots.get(&k) {
            Some(&slot) => groups[slot].1.push(item),
            None => {
                slots.insert(k.clone(), groups.len());
                groups.push((k, vec![item]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::group_by;

    #[test]
    fn group_by_keeps_first_encounter_order() {
        let items = ["b1", "a1", "b2", "c1", "a2"];
        let groups = group_by(&items, |item| &item[..1]);

        let keys: Vec<&str> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(groups[0].1, vec![&"b1", &"b2"]);
        assert_eq!(groups[1].1, vec![&"a1", &"a2"]);
    }

    #[test]
    fn group_by_on_empty_input_is_empty() {
        let items: [u32; 0] = [];
        assert!(group_by(&items, |n| *n).is_empty());
    }
}

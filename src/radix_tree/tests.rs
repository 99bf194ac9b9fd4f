use crate::types::RadixKey;

use super::RadixTree;

// Build a key from a string of '0' and '1' characters.
fn k(bits: &str) -> RadixKey {
    let value = bits.chars().enumerate().fold(0_u128, |acc, (i, c)| {
        if c == '1' {
            acc | 1_u128 << (127 - i)
        } else {
            acc
        }
    });
    RadixKey::new(value, bits.len() as u8)
}

fn keys<V>(tree: &RadixTree<V>) -> Vec<String> {
    tree.iter().map(|(key, _)| key.to_string()).collect()
}

#[test]
fn test_insert_get_replace() {
    let mut tree = RadixTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.nodes_count(), 1);

    assert_eq!(tree.insert(k("0000"), 1), None);
    assert_eq!(tree.insert(k("0011"), 2), None);
    assert_eq!(tree.len(), 2);

    assert_eq!(tree.get(&k("0000")), Some(&1));
    assert_eq!(tree.get(&k("0011")), Some(&2));
    assert_eq!(tree.get(&k("00")), None);
    assert_eq!(tree.get(&k("001")), None);
    assert_eq!(tree.get(&k("00110")), None);
    assert_eq!(tree.get(&RadixKey::EMPTY), None);

    assert_eq!(tree.insert(k("0011"), 3), Some(2));
    assert_eq!(tree.get(&k("0011")), Some(&3));
    assert_eq!(tree.len(), 2);
    assert!(tree.contains_key(&k("0011")));
}

#[test]
fn test_split_and_compact() {
    let mut tree = RadixTree::new();
    tree.insert(k("0000"), "a");
    assert_eq!(tree.nodes_count(), 2);

    // diverges at bit 2, so a branch node for "00" is created.
    tree.insert(k("0011"), "b");
    assert_eq!(tree.nodes_count(), 4);

    // the branch node takes the value.
    tree.insert(k("00"), "c");
    assert_eq!(tree.nodes_count(), 4);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(&k("00")), Some(&"c"));

    // still needed to branch
    assert_eq!(tree.remove(&k("00")), Some("c"));
    assert_eq!(tree.nodes_count(), 4);
    assert_eq!(tree.get(&k("0000")), Some(&"a"));

    // the branch node is left with one child, and is compacted away.
    assert_eq!(tree.remove(&k("0011")), Some("b"));
    assert_eq!(tree.nodes_count(), 2);
    assert_eq!(tree.get(&k("0000")), Some(&"a"));
    assert_eq!(tree.longest_match(&k("00001111")), Some((k("0000"), &"a")));

    assert_eq!(tree.remove(&k("0000")), Some("a"));
    assert_eq!(tree.nodes_count(), 1);
    assert!(tree.is_empty());
}

#[test]
fn test_insert_prefix_of_existing() {
    let mut tree = RadixTree::new();
    tree.insert(k("0101"), 1);
    tree.insert(k("01"), 2);
    assert_eq!(tree.nodes_count(), 3);
    assert_eq!(tree.get(&k("01")), Some(&2));
    assert_eq!(tree.get(&k("0101")), Some(&1));
    assert_eq!(keys(&tree), vec!["01", "0101"]);
}

#[test]
fn test_remove_absent() {
    let mut tree = RadixTree::new();
    tree.insert(k("0000"), 1);
    tree.insert(k("0011"), 2);

    assert_eq!(tree.remove(&k("1")), None);
    assert_eq!(tree.remove(&k("0001")), None);
    assert_eq!(tree.remove(&k("000")), None);
    assert_eq!(tree.remove(&k("00000")), None);
    // a node that only branches
    assert_eq!(tree.remove(&k("00")), None);
    assert_eq!(tree.remove(&RadixKey::EMPTY), None);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree.nodes_count(), 4);
}

#[test]
fn test_longest_match() {
    let mut tree = RadixTree::new();
    assert_eq!(tree.longest_match(&k("0101")), None);

    tree.insert(k("01"), "short");
    tree.insert(k("0101"), "long");
    tree.insert(k("011"), "other");

    assert_eq!(tree.longest_match(&k("010111")), Some((k("0101"), &"long")));
    assert_eq!(tree.longest_match(&k("0101")), Some((k("0101"), &"long")));
    assert_eq!(tree.longest_match(&k("0100")), Some((k("01"), &"short")));
    assert_eq!(tree.longest_match(&k("010")), Some((k("01"), &"short")));
    assert_eq!(tree.longest_match(&k("0111")), Some((k("011"), &"other")));
    assert_eq!(tree.longest_match(&k("0")), None);
    assert_eq!(tree.longest_match(&k("1")), None);

    tree.insert(RadixKey::EMPTY, "default");
    assert_eq!(tree.longest_match(&k("1")), Some((RadixKey::EMPTY, &"default")));
    assert_eq!(tree.longest_match(&RadixKey::EMPTY), Some((RadixKey::EMPTY, &"default")));
    assert_eq!(tree.longest_match(&k("0101")), Some((k("0101"), &"long")));

    assert_eq!(tree.remove(&RadixKey::EMPTY), Some("default"));
    assert_eq!(tree.longest_match(&k("1")), None);
}

#[test]
fn test_less_and_more_specifics() {
    let mut tree = RadixTree::new();
    for (i, key) in ["", "0", "01", "0110", "011011", "0111", "1"].iter().enumerate() {
        tree.insert(k(key), i);
    }

    let less = tree
        .less_specifics(&k("011011"))
        .map(|(key, _)| key.to_string())
        .collect::<Vec<_>>();
    assert_eq!(less, vec!["", "0", "01", "0110"]);

    // the search key does not have to be stored
    let less = tree
        .less_specifics(&k("0100"))
        .map(|(key, _)| key.to_string())
        .collect::<Vec<_>>();
    assert_eq!(less, vec!["", "0", "01"]);

    assert_eq!(tree.less_specifics(&RadixKey::EMPTY).count(), 0);

    let more = tree
        .more_specifics(&k("01"))
        .map(|(key, _)| key.to_string())
        .collect::<Vec<_>>();
    assert_eq!(more, vec!["0110", "011011", "0111"]);

    // "011" is not stored, but it's a prefix of stored keys
    let more = tree
        .more_specifics(&k("011"))
        .map(|(key, _)| key.to_string())
        .collect::<Vec<_>>();
    assert_eq!(more, vec!["0110", "011011", "0111"]);

    assert_eq!(tree.more_specifics(&k("00")).count(), 0);
    assert_eq!(tree.more_specifics(&k("011011")).count(), 0);
    assert_eq!(tree.more_specifics(&RadixKey::EMPTY).count(), 6);
}

#[test]
fn test_iter_in_key_order() {
    let mut tree = RadixTree::new();
    let mut inserted = vec!["10", "0", "1101", "", "00", "111", "01", "1"];
    for key in inserted.iter() {
        tree.insert(k(key), key.len());
    }

    inserted.sort();
    assert_eq!(keys(&tree), inserted);
    assert_eq!((&tree).into_iter().count(), tree.len());
}

#[test]
fn test_clear() {
    let mut tree = RadixTree::new();
    tree.insert(k("1"), ());
    tree.insert(k("0"), ());
    tree.insert(RadixKey::EMPTY, ());
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.nodes_count(), 1);
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn test_full_length_keys() {
    let mut tree = RadixTree::new();
    let all_ones = RadixKey::new(u128::MAX, 128);
    let all_zeros = RadixKey::new(0, 128);
    tree.insert(all_ones, 1);
    tree.insert(all_zeros, 0);
    tree.insert(all_ones.truncate(127), 2);

    assert_eq!(tree.get(&all_ones), Some(&1));
    assert_eq!(tree.get(&all_zeros), Some(&0));
    assert_eq!(tree.longest_match(&all_ones), Some((all_ones, &1)));
    assert_eq!(
        tree.longest_match(&RadixKey::new(u128::MAX - 1, 128)),
        Some((all_ones.truncate(127), &2))
    );
    assert_eq!(tree.remove(&all_ones), Some(1));
    assert_eq!(tree.remove(&all_ones.truncate(127)), Some(2));
    assert_eq!(tree.nodes_count(), 2);
}

use bodhi_tree::{BstSet, Cursor, NodeHandle, RevCursor};
use pretty_assertions::assert_eq;

fn sample_set() -> BstSet<i32> {
    // Shape: 5 at the root, 3 -> (1, 4), 8 on the right.
    [5, 3, 8, 1, 4].into_iter().collect()
}

#[test]
fn cursor_starts_at_the_root() {
    let set = sample_set();

    let cursor = set.cursor();
    assert_eq!(cursor.value(), &5);

    let rev = set.rev_cursor();
    assert_eq!(rev.value(), &5);
}

#[test]
fn forward_walk_yields_sorted_values() {
    let set = sample_set();

    let mut cursor = set.cursor();
    cursor.descend_min();

    let mut seen = Vec::new();
    while !cursor.is_end() {
        seen.push(*cursor.value());
        cursor.move_next();
    }
    assert_eq!(seen, vec![1, 3, 4, 5, 8]);
}

#[test]
fn reverse_walk_yields_descending_values() {
    let set = sample_set();

    let mut cursor = set.rev_cursor();
    cursor.descend_max();

    let mut seen = Vec::new();
    while !cursor.is_end() {
        seen.push(*cursor.value());
        cursor.move_next(); // toward smaller values
    }
    assert_eq!(seen, vec![8, 5, 4, 3, 1]);
}

#[test]
fn next_then_prev_returns_to_the_same_position() {
    let set = sample_set();

    let mut cursor = set.cursor();
    cursor.descend_min();

    while !cursor.is_end() {
        let here: Cursor<'_, i32> = cursor;

        cursor.move_next();
        if cursor.is_end() {
            break;
        }
        cursor.move_prev();
        assert_eq!(cursor, here);

        cursor.move_next();
    }

    let mut cursor = set.rev_cursor();
    cursor.descend_max();
    let here: RevCursor<'_, i32> = cursor;
    cursor.move_next();
    cursor.move_prev();
    assert_eq!(cursor, here);
}

#[test]
fn boundaries_yield_the_end_sentinel() {
    let set = sample_set();

    // Off the back.
    let mut cursor = set.cursor();
    cursor.descend_max();
    assert_eq!(cursor.value(), &8);
    cursor.move_next();
    assert!(cursor.is_end());

    // The sentinel absorbs further movement in both directions.
    cursor.move_next();
    cursor.move_prev();
    assert!(cursor.is_end());
    assert_eq!(cursor.try_value(), None);

    // Off the front.
    let mut cursor = set.cursor();
    cursor.descend_min();
    cursor.move_prev();
    assert!(cursor.is_end());
}

#[test]
#[should_panic(expected = "`Cursor::value()` - cursor is at the end sentinel!")]
fn dereferencing_the_sentinel_panics() {
    let set: BstSet<i32> = BstSet::new();
    let _ = set.cursor().value();
}

#[test]
fn advance_and_rewind_compose() {
    let set = sample_set();

    let mut cursor = set.cursor();
    cursor.descend_min();
    cursor.advance_by(3);
    assert_eq!(cursor.value(), &5);

    cursor.rewind_by(2);
    assert_eq!(cursor.value(), &3);

    // Advancing past the end parks at the sentinel.
    cursor.advance_by(100);
    assert!(cursor.is_end());
}

#[test]
fn mutable_cursor_converts_to_shared() {
    let mut set = sample_set();

    let mut cursor = set.cursor_mut();
    cursor.descend_min();

    let shared = cursor.as_cursor();
    assert_eq!(shared.value(), &1);

    let shared: Cursor<'_, i32> = cursor.into();
    assert_eq!(shared.value(), &1);
}

#[test]
fn cursor_equality_is_position_identity() {
    let set = sample_set();

    let mut a = set.cursor();
    let mut b = set.cursor();
    assert_eq!(a, b);

    a.move_next();
    assert_ne!(a, b);

    b.move_next();
    assert_eq!(a, b);

    // Two end sentinels over the same tree are equal.
    a.advance_by(100);
    b.advance_by(100);
    assert_eq!(a, b);
}

#[test]
fn mutable_cursor_edits_non_key_payload() {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Entry {
        key: i32,
        hits: u32,
    }

    let mut set: BstSet<Entry> = BstSet::new();
    set.insert(Entry { key: 2, hits: 0 });
    set.insert(Entry { key: 1, hits: 0 });

    let mut cursor = set.cursor_mut();
    cursor.descend_min();
    // `hits` sorts after `key`, and keys here are distinct, so bumping it
    // cannot reorder the set.
    cursor.value_mut().hits += 1;
    cursor.move_next();
    cursor.value_mut().hits += 1;

    let hits: Vec<_> = set.iter().map(|entry| entry.hits).collect();
    assert_eq!(hits, vec![1, 1]);
}

#[test]
fn handle_round_trip_preserves_the_value() {
    let mut set = sample_set();

    let node = set.extract(&4);
    assert!(!node.is_empty());

    let copy = node.clone();
    assert_eq!(copy, node);

    assert_eq!(node.into_value(), Some(4));
    // The deep copy still holds its own value after the original is gone.
    assert_eq!(copy.value(), &4);

    let outcome = set.insert_node(copy);
    assert!(outcome.inserted);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
}

#[test]
fn handle_swap_is_structural() {
    let mut set = sample_set();

    let mut full = set.extract(&8);
    let mut empty = NodeHandle::new();

    full.swap(&mut empty);
    assert!(full.is_empty());
    assert_eq!(empty.value(), &8);
}

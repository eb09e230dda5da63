use super::*;

#[test]
fn child_key_round_trip() {
    let key = ChildKey {
        parent: NodeId(42),
        letter: 'q',
    };

    let bytes = <ChildKey as redb::Value>::as_bytes(&key);
    let decoded = <ChildKey as redb::Value>::from_bytes(&bytes);
    assert_eq!(key, decoded);
}

#[test]
fn child_key_ordering_parent_before_letter() {
    let key1 = ChildKey {
        parent: NodeId(1),
        letter: 'z',
    };
    let key2 = ChildKey {
        parent: NodeId(2),
        letter: 'a',
    };
    let key3 = ChildKey {
        parent: NodeId(2),
        letter: 'b',
    };

    let bytes1 = <ChildKey as redb::Value>::as_bytes(&key1);
    let bytes2 = <ChildKey as redb::Value>::as_bytes(&key2);
    let bytes3 = <ChildKey as redb::Value>::as_bytes(&key3);

    assert_eq!(
        <ChildKey as redb::Key>::compare(&bytes1, &bytes2),
        std::cmp::Ordering::Less
    );
    assert_eq!(
        <ChildKey as redb::Key>::compare(&bytes2, &bytes3),
        std::cmp::Ordering::Less
    );
    assert_eq!(
        <ChildKey as redb::Key>::compare(&bytes3, &bytes3),
        std::cmp::Ordering::Equal
    );
}

#[test]
fn parent_range_brackets_all_letters() {
    let range = ChildKey::parent_range(NodeId(7));

    let low = <ChildKey as redb::Value>::as_bytes(range.start());
    let high = <ChildKey as redb::Value>::as_bytes(range.end());
    let digit = <ChildKey as redb::Value>::as_bytes(&ChildKey {
        parent: NodeId(7),
        letter: '0',
    });
    let letter = <ChildKey as redb::Value>::as_bytes(&ChildKey {
        parent: NodeId(7),
        letter: 'z',
    });
    let other_parent = <ChildKey as redb::Value>::as_bytes(&ChildKey {
        parent: NodeId(8),
        letter: '\0',
    });

    use std::cmp::Ordering::Less;
    assert_eq!(<ChildKey as redb::Key>::compare(&low, &digit), Less);
    assert_eq!(<ChildKey as redb::Key>::compare(&digit, &letter), Less);
    assert_eq!(<ChildKey as redb::Key>::compare(&letter, &high), Less);
    assert_eq!(<ChildKey as redb::Key>::compare(&high, &other_parent), Less);
}

#[test]
fn node_record_round_trip() {
    let record = NodeRecord {
        id: NodeId(3),
        parent: Some(NodeId(0)),
        letter: Some('c'),
        completion_count: 5,
        path: "c".to_string(),
    };

    let bytes = <NodeRecord as redb::Value>::as_bytes(&record);
    let decoded = <NodeRecord as redb::Value>::from_bytes(&bytes);
    assert_eq!(record, decoded);
}

#[test]
fn root_record_round_trip() {
    let record = NodeRecord {
        id: NodeId(0),
        parent: None,
        letter: None,
        completion_count: 0,
        path: String::new(),
    };

    let bytes = <NodeRecord as redb::Value>::as_bytes(&record);
    let decoded = <NodeRecord as redb::Value>::from_bytes(&bytes);
    assert_eq!(record, decoded);
}

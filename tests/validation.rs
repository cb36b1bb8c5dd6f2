mod common;

use common::{create_test_transaction, MockContext};
use txset::{Hash256, TxSetFrame};

#[test]
fn check_valid_accepts_a_gap_free_canonical_set() {
    let parent = Hash256::from_bytes([3; 32]);
    let mut frame = TxSetFrame::new(parent);
    frame.add(create_test_transaction("alice", 1, 10, 0x01));
    frame.add(create_test_transaction("alice", 2, 10, 0x02));
    frame.add(create_test_transaction("bob", 1, 10, 0x03));
    frame.sort_for_hash();

    let ctx = MockContext::new(parent, 10);
    assert!(frame.check_valid(&ctx));
}

#[test]
fn check_valid_rejects_a_sequence_gap() {
    let parent = Hash256::zero();
    let mut frame = TxSetFrame::new(parent);
    frame.add(create_test_transaction("alice", 1, 10, 0x01));
    frame.add(create_test_transaction("alice", 3, 10, 0x02)); // gap: missing seq 2
    frame.sort_for_hash();

    let ctx = MockContext::new(parent, 10);
    assert!(!frame.check_valid(&ctx));
}

#[test]
fn check_valid_rejects_wrong_parent_hash() {
    let mut frame = TxSetFrame::new(Hash256::from_bytes([1; 32]));
    frame.add(create_test_transaction("alice", 1, 10, 0x01));
    let ctx = MockContext::new(Hash256::from_bytes([2; 32]), 10);
    assert!(!frame.check_valid(&ctx));
}

#[test]
fn check_valid_rejects_when_over_ledger_capacity() {
    let parent = Hash256::zero();
    let mut frame = TxSetFrame::new(parent);
    frame.add(create_test_transaction("alice", 1, 10, 0x01));
    frame.add(create_test_transaction("bob", 1, 10, 0x02));
    frame.sort_for_hash();
    let ctx = MockContext::new(parent, 1);
    assert!(!frame.check_valid(&ctx));
}

#[test]
fn trim_invalid_drops_only_the_offending_transaction() {
    let parent = Hash256::zero();
    let mut frame = TxSetFrame::new(parent);
    frame.add(create_test_transaction("alice", 1, 10, 0x01));
    frame.add(create_test_transaction("bob", 5, 10, 0x02)); // bob has never submitted; seq 5 is a gap

    let ctx = MockContext::new(parent, 10);
    let trimmed = frame.trim_invalid(&ctx);

    assert!(trimmed.iter().all(|t| t.source_id().to_string() == "bob"));
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.transactions()[0].source_id().to_string(), "alice");
}

#[test]
fn trim_invalid_drops_whole_account_on_insufficient_balance() {
    let parent = Hash256::zero();
    let mut frame = TxSetFrame::new(parent);
    frame.add(create_test_transaction("alice", 1, 10, 0x01));
    frame.add(create_test_transaction("alice", 2, 10, 0x02));

    let ctx = MockContext::new(parent, 10).with_balance("alice", 5);
    let trimmed = frame.trim_invalid(&ctx);

    assert_eq!(trimmed.len(), 2);
    assert!(frame.is_empty());
}

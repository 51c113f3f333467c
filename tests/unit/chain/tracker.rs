use super::*;
use crate::chain::event::{
    BLOCK_HASH_FACT, BLOCK_HEIGHT_FACT, OWNER_FACT, OWNERSHIP_FACTS, TRANSACTION_HASH_FACT,
};
use crate::chain::source::InMemoryTransferSource;
use crate::store::property::PropertyValue;

fn ev(n: u64, token_id: Option<u64>) -> TransferEvent {
    TransferEvent {
        address: format!("0x{n:040x}"),
        block_hash: format!("0x{:064x}", n * 1_000),
        block_number: 6_000_000 + n,
        transaction_hash: format!("0x{:064x}", n * 7),
        token_id,
    }
}

fn base_store() -> PropertyStore {
    let mut s = PropertyStore::default();
    s.set("Title of", "Secret Artwork");
    s
}

#[test]
fn bootstrap_applies_only_the_last_event() {
    let source = InMemoryTransferSource::new(vec![ev(1, None), ev(2, None), ev(3, None)]);
    let mut tracker = OwnershipTracker::new(1, Box::new(source));
    let mut store = base_store();
    assert_eq!(tracker.token_id(), 1);

    let record = tracker.bootstrap(&mut store).cloned().unwrap();
    assert_eq!(record, OwnershipRecord::from(&ev(3, None)));

    let e3 = ev(3, None);
    assert_eq!(store.get(OWNER_FACT), Some(&PropertyValue::from(e3.address)));
    assert_eq!(
        store.get(BLOCK_HASH_FACT),
        Some(&PropertyValue::from(e3.block_hash))
    );
    assert_eq!(
        store.get(BLOCK_HEIGHT_FACT),
        Some(&PropertyValue::from(6_000_003u64))
    );
    assert_eq!(
        store.get(TRANSACTION_HASH_FACT),
        Some(&PropertyValue::from(e3.transaction_hash))
    );
    assert_eq!(store.len(), 5);
}

#[test]
fn bootstrap_with_empty_history_writes_nothing() {
    let mut tracker = OwnershipTracker::new(1, Box::new(InMemoryTransferSource::default()));
    let mut store = base_store();
    assert!(tracker.bootstrap(&mut store).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn failing_history_query_is_ignored() {
    let source = InMemoryTransferSource::new(vec![ev(1, None)]).with_history_error("rpc down");
    let mut tracker = OwnershipTracker::new(1, Box::new(source));
    let mut store = base_store();
    assert!(tracker.bootstrap(&mut store).is_none());
    assert!(store.get(OWNER_FACT).is_none());
}

#[test]
fn disabled_tracker_never_writes() {
    let mut tracker = OwnershipTracker::disabled(1);
    let mut store = base_store();
    assert_eq!(tracker.token_id(), 1);
    assert!(!tracker.is_enabled());
    assert!(tracker.bootstrap(&mut store).is_none());
    assert!(tracker.poll_live(Timestamp(u64::MAX)).is_empty());
    assert!(OWNERSHIP_FACTS.iter().all(|f| store.get(f).is_none()));
}

#[test]
fn live_transfer_overwrites_all_four_fields() {
    let mut tracker = OwnershipTracker::new(1, Box::new(InMemoryTransferSource::new(vec![ev(1, None)])));
    let mut store = base_store();
    tracker.bootstrap(&mut store);

    assert!(tracker.on_transfer(&ev(9, Some(1)), &mut store));
    let expected = OwnershipRecord::from(&ev(9, Some(1)));
    for (name, value) in expected.facts() {
        assert_eq!(store.get(name), Some(&value), "{name}");
    }
    assert_eq!(tracker.current(), Some(&expected));
}

#[test]
fn transfers_of_other_tokens_are_ignored() {
    let mut tracker = OwnershipTracker::new(1, Box::new(InMemoryTransferSource::default()));
    let mut store = base_store();
    assert!(!tracker.on_transfer(&ev(4, Some(2)), &mut store));
    assert!(store.get(OWNER_FACT).is_none());
}

#[test]
fn live_events_drain_in_order_once_due() {
    let mut source = InMemoryTransferSource::default();
    source.push_live(Timestamp(2_000), ev(5, Some(1)));
    source.push_live(Timestamp(1_000), ev(4, Some(1)));
    source.push_live(Timestamp(1_500), ev(6, Some(2)));
    let mut tracker = OwnershipTracker::new(1, Box::new(source));

    assert!(tracker.poll_live(Timestamp(500)).is_empty());
    assert_eq!(tracker.poll_live(Timestamp(1_500)), vec![ev(4, Some(1))]);
    assert_eq!(tracker.poll_live(Timestamp(3_000)), vec![ev(5, Some(1))]);
    assert!(tracker.poll_live(Timestamp(4_000)).is_empty());
}

#[test]
fn transfer_event_reads_camel_case_json() {
    let e: TransferEvent = serde_json::from_str(
        r#"{
            "address": "0xabc",
            "blockHash": "0xdef",
            "blockNumber": 42,
            "transactionHash": "0x123"
        }"#,
    )
    .unwrap();
    assert_eq!(e.block_number, 42);
    assert_eq!(e.token_id, None);
    assert!(e.concerns(77));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

fn holder(id: &str) -> ResourceIdentity {
    ResourceIdentity::new("user", id)
}

#[test]
fn stored_value_omits_lease() {
    let claim = LockClaim::new(&holder("2")).with_lease(30);
    assert_eq!(
        claim.encode().unwrap(),
        r#"{"locker":{"alias":"user","id":"2"},"identity":null}"#
    );
}

#[test]
fn stored_value_carries_identity() {
    let claim = LockClaim::new(&holder("2")).with_identity("tab-1");
    assert!(claim.encode().unwrap().ends_with(r#""identity":"tab-1"}"#));
}

#[test]
fn decode_attaches_remaining_lease() {
    let claim = LockClaim::new(&holder("2")).with_identity("tab-1");
    let decoded = LockClaim::decode(&claim.encode().unwrap(), Some(8)).unwrap();

    assert!(decoded.is_compatible(&claim));
    assert_eq!(decoded.lease, Some(8));
}

#[test]
fn decode_drops_non_positive_lease() {
    let value = LockClaim::new(&holder("2")).encode().unwrap();
    assert_eq!(LockClaim::decode(&value, Some(0)).unwrap().lease, None);
    assert_eq!(LockClaim::decode(&value, None).unwrap().lease, None);
}

#[test]
fn decode_rejects_garbage() {
    assert!(LockClaim::decode("not json", Some(3)).is_err());
}

#[parameterized(
    same_holder_no_identity = { "2", None, "2", None, true },
    same_holder_same_identity = { "2", Some("a"), "2", Some("a"), true },
    same_holder_one_identity = { "2", None, "2", Some("a"), false },
    same_holder_other_identity = { "2", Some("a"), "2", Some("b"), false },
    other_holder = { "2", None, "3", None, false },
    other_holder_same_identity = { "2", Some("a"), "3", Some("a"), false },
)]
fn compatibility(a: &str, a_identity: Option<&str>, b: &str, b_identity: Option<&str>, expected: bool) {
    let mut left = LockClaim::new(&holder(a));
    left.identity = a_identity.map(String::from);
    let mut right = LockClaim::new(&holder(b));
    right.identity = b_identity.map(String::from);

    assert_eq!(left.is_compatible(&right), expected);
    assert_eq!(right.is_compatible(&left), expected);
}

fn arb_claim() -> impl Strategy<Value = LockClaim> {
    (
        prop::sample::select(vec!["a", "b"]),
        proptest::option::of(prop::sample::select(vec!["x", "y"])),
        proptest::option::of(1..100u64),
    )
        .prop_map(|(id, identity, lease)| LockClaim {
            holder: holder(id),
            identity: identity.map(String::from),
            lease,
        })
}

proptest! {
    #[test]
    fn compatibility_is_reflexive(claim in arb_claim()) {
        prop_assert!(claim.is_compatible(&claim));
    }

    #[test]
    fn compatibility_is_symmetric(a in arb_claim(), b in arb_claim()) {
        prop_assert_eq!(a.is_compatible(&b), b.is_compatible(&a));
    }

    #[test]
    fn compatibility_ignores_lease(a in arb_claim(), lease in 1..100u64) {
        let relet = a.clone().with_lease(lease);
        prop_assert!(a.is_compatible(&relet));
    }

    #[test]
    fn compatible_claims_encode_identically(a in arb_claim(), b in arb_claim()) {
        if a.is_compatible(&b) {
            prop_assert_eq!(a.encode().unwrap(), b.encode().unwrap());
        }
    }
}

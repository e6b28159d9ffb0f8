use crate::Lot;

use uuid::Uuid;

#[test]
fn test_new_lot_defaults() {
    let lot = Lot::new("First Lot".to_string(), 100, 25.0);

    assert_eq!(lot.quantity, 100);
    assert_eq!(lot.value, 25.0);
    assert!(!lot.sold_out);
    assert!(!lot.male_lot);
    assert!(!lot.female_lot);
    assert!(lot.buyers.is_empty());
    assert!(!lot.is_deleted());
}

#[test]
fn test_capacity_tracks_buyers_and_sold_out() {
    let mut lot = Lot::new("First Lot".to_string(), 2, 25.0);
    assert!(lot.has_capacity());

    lot.buyers.push(Uuid::new_v4());
    assert!(lot.has_capacity());

    lot.buyers.push(Uuid::new_v4());
    assert!(!lot.has_capacity());

    // A manual sold-out flag closes the lot regardless of count
    let mut flagged = Lot::new("Second Lot".to_string(), 100, 25.0);
    flagged.sold_out = true;
    assert!(!flagged.has_capacity());
}

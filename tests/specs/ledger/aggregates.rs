//! Aggregation specs over a persisted ledger

use crate::prelude::*;

#[test]
fn totals_match_the_worked_example() {
    let (_dir, store) = temp_store();
    store.append(&row("A", 1000, 2, "cash")).unwrap();
    store.append(&row("B", 500, 1, "card")).unwrap();
    store.append(&row("A", 1000, 3, "card")).unwrap();

    let rows = store.load_all().unwrap();

    let products = by_product(&rows);
    assert_eq!(products.len(), 2);
    assert_eq!(
        (products[0].product.as_str(), products[0].quantity, products[0].price),
        ("A", 5, 1000)
    );
    assert_eq!(
        (products[1].product.as_str(), products[1].quantity, products[1].price),
        ("B", 1, 500)
    );

    let payments = by_payment(&rows);
    assert_eq!(payments.len(), 2);
    assert_eq!(
        (payments[0].payment.as_str(), payments[0].quantity),
        ("cash", 2)
    );
    assert_eq!(
        (payments[1].payment.as_str(), payments[1].quantity),
        ("card", 4)
    );
}

#[test]
fn quoted_product_names_group_after_a_roundtrip() {
    let (_dir, store) = temp_store();
    store.append(&row("latte, iced", 4500, 1, "card")).unwrap();
    store.append(&row("latte, iced", 4500, 2, "cash")).unwrap();

    let rows = store.load_all().unwrap();
    let products = by_product(&rows);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product, "latte, iced");
    assert_eq!(products[0].quantity, 3);
}

#[test]
fn aggregates_reset_with_the_ledger() {
    let (_dir, store) = temp_store();
    store.append(&row("A", 1000, 2, "cash")).unwrap();
    store.reset().unwrap();

    let rows = store.load_all().unwrap();
    assert!(by_product(&rows).is_empty());
    assert!(by_payment(&rows).is_empty());
}

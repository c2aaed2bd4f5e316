use square_models::{Address, CreatePaymentRequest, Money, OrderLineItem, OrderLineItemModifier};
use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn constructor_and_builder_agree() {
    let direct = CreatePaymentRequest::new("cnon:abc", "idem-1", Money::of(100, "USD"))
        .with(|r| r.customer_id = Some("C1".into()));
    let built = CreatePaymentRequest::builder()
        .source_id("cnon:abc")
        .idempotency_key("idem-1")
        .amount_money(Money::of(100, "USD"))
        .customer_id("C1")
        .build();

    assert_eq!(direct, built);
    assert_eq!(hash_of(&direct), hash_of(&built));
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let a = Address { locality: Some("Lviv".into()), ..Default::default() };
    let b = a.clone();
    let c = Address { locality: Some("Kyiv".into()), ..Default::default() };

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_ne!(c, a);
}

#[test]
fn absent_and_present_fields_differ() {
    let empty = OrderLineItemModifier::default();
    let named = empty.with(|m| m.name = Some(String::new()));
    assert_ne!(empty, named);
}

#[test]
fn equal_records_collapse_in_hash_sets() {
    let mut set = HashSet::new();
    set.insert(OrderLineItem::new("1"));
    set.insert(OrderLineItem::builder().quantity("1").build());
    set.insert(OrderLineItem::new("2"));
    assert_eq!(set.len(), 2);
}

#[test]
fn unmodified_copy_is_equal() {
    let item = OrderLineItem::new("3").with(|i| {
        i.name = Some("Latte".into());
        i.base_price_money = Some(Money::of(450, "USD"));
    });
    assert_eq!(item.with(|_| {}), item);
}

#[test]
fn builds_are_independent() {
    let first = OrderLineItem::builder().quantity("1").note("first").build();
    let second = OrderLineItem::builder().quantity("1").note("second").build();
    let third = first.with(|i| i.note = Some("third".into()));

    assert_eq!(first.note.as_deref(), Some("first"));
    assert_eq!(second.note.as_deref(), Some("second"));
    assert_eq!(third.note.as_deref(), Some("third"));
}

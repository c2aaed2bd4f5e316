use proptest::prelude::*;
use square_models::{
    Address, CatalogCategory, CatalogDiscount, CatalogItem, CatalogItemVariation, CatalogModifier,
    CatalogObject, CatalogObjectData, CatalogTax, CreatePaymentRequest, LoyaltyProgram,
    LoyaltyProgramAccrualRule, LoyaltyProgramExpirationPolicy, LoyaltyProgramRewardDefinition,
    LoyaltyProgramRewardTier, LoyaltyProgramTerminology, Money, OrderLineItem,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn money() -> impl Strategy<Value = Money> {
    (proptest::option::of(any::<i64>()), proptest::option::of("[A-Z]{3}"))
        .prop_map(|(amount, currency)| Money { amount, currency })
}

fn address() -> impl Strategy<Value = Address> {
    (
        proptest::option::of(".{0,16}"),
        proptest::option::of(".{0,16}"),
        proptest::option::of("[0-9]{5}"),
        proptest::option::of("[A-Z]{2}"),
    )
        .prop_map(|(address_line_1, locality, postal_code, country)| Address {
            address_line_1,
            locality,
            postal_code,
            country,
            ..Default::default()
        })
}

fn payment_request() -> impl Strategy<Value = CreatePaymentRequest> {
    (
        "[a-z:]{1,12}",
        "[a-z0-9-]{1,12}",
        money(),
        proptest::option::of(money()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(address()),
        proptest::option::of(".{0,24}"),
    )
        .prop_map(|(source_id, key, amount, tip, autocomplete, billing, note)| {
            CreatePaymentRequest::new(source_id, key, amount).with(|r| {
                r.tip_money = tip;
                r.autocomplete = autocomplete;
                r.billing_address = billing;
                r.note = note;
            })
        })
}

fn line_item() -> impl Strategy<Value = OrderLineItem> {
    (
        "[0-9]{1,3}(\\.[0-9]{1,5})?",
        proptest::option::of(".{0,16}"),
        proptest::option::of(proptest::collection::btree_map("[a-z]{1,6}", ".{0,8}", 0..4)),
        proptest::option::of(money()),
    )
        .prop_map(|(quantity, name, metadata, total_money)| {
            OrderLineItem::new(quantity).with(|i| {
                i.name = name;
                i.metadata = metadata;
                i.total_money = total_money;
            })
        })
}

fn item_variation() -> impl Strategy<Value = CatalogItemVariation> {
    (
        proptest::option::of("[a-z ]{1,12}"),
        proptest::option::of(money()),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<i64>()),
    )
        .prop_map(|(name, price_money, ordinal, track_inventory, service_duration)| {
            let pricing = if price_money.is_some() { "FIXED_PRICING" } else { "VARIABLE_PRICING" };
            CatalogItemVariation {
                name,
                pricing_type: Some(pricing.to_owned()),
                price_money,
                ordinal,
                track_inventory,
                service_duration,
                ..Default::default()
            }
        })
}

fn variation_object() -> impl Strategy<Value = CatalogObject> {
    ("#[a-z0-9]{1,8}", item_variation(), proptest::option::of(any::<i64>()))
        .prop_map(|(id, data, version)| CatalogObject::new(id, data).with(|o| o.version = version))
}

fn item() -> impl Strategy<Value = CatalogItem> {
    (
        proptest::option::of(".{0,16}"),
        proptest::option::of(proptest::collection::vec("#[a-z]{1,6}", 0..3)),
        proptest::option::of(proptest::collection::vec(variation_object(), 0..3)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(name, tax_ids, variations, available_online)| CatalogItem {
            name,
            tax_ids,
            variations,
            available_online,
            ..Default::default()
        })
}

fn catalog_data() -> impl Strategy<Value = CatalogObjectData> {
    let name = || proptest::option::of("[A-Za-z ]{1,12}");
    prop_oneof![
        item().prop_map(CatalogObjectData::from),
        item_variation().prop_map(CatalogObjectData::from),
        (name(), proptest::option::of("[0-9]{1,2}\\.[0-9]{1,3}"), proptest::option::of(any::<bool>()))
            .prop_map(|(name, percentage, enabled)| {
                CatalogObjectData::from(CatalogTax { name, percentage, enabled, ..Default::default() })
            }),
        (name(), proptest::option::of(money())).prop_map(|(name, amount_money)| {
            CatalogObjectData::from(CatalogDiscount {
                name,
                amount_money,
                discount_type: Some("FIXED_AMOUNT".to_owned()),
                ..Default::default()
            })
        }),
        (name(), proptest::option::of(money()), proptest::option::of(any::<i32>())).prop_map(
            |(name, price_money, ordinal)| {
                CatalogObjectData::from(CatalogModifier { name, price_money, ordinal, ..Default::default() })
            }
        ),
        name().prop_map(|name| CatalogObjectData::from(CatalogCategory { name, ..Default::default() })),
    ]
}

fn catalog_object() -> impl Strategy<Value = CatalogObject> {
    (
        "#?[A-Za-z0-9]{1,10}",
        catalog_data(),
        proptest::option::of(any::<i64>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of("20[0-9]{2}-0[1-9]-1[0-9]T00:00:00Z"),
        proptest::option::of(proptest::collection::vec("[A-Z0-9]{4,8}", 0..3)),
    )
        .prop_map(|(id, data, version, is_deleted, updated_at, present_at_location_ids)| {
            CatalogObject::new(id, data).with(|o| {
                o.version = version;
                o.is_deleted = is_deleted;
                o.updated_at = updated_at;
                o.present_at_location_ids = present_at_location_ids;
            })
        })
}

fn reward_tier() -> impl Strategy<Value = LoyaltyProgramRewardTier> {
    (
        "[a-z0-9-]{1,10}",
        1..1000_i32,
        ".{1,16}",
        prop_oneof![Just("ORDER"), Just("ITEM_VARIATION")],
        proptest::option::of("[0-9]{1,2}"),
        proptest::option::of(money()),
    )
        .prop_map(|(id, points, name, scope, percentage_discount, max_discount_money)| {
            let definition = LoyaltyProgramRewardDefinition::new(scope, "FIXED_PERCENTAGE")
                .with(|d| {
                    d.percentage_discount = percentage_discount;
                    d.max_discount_money = max_discount_money;
                });
            LoyaltyProgramRewardTier::new(id, points, name, definition, "2020-05-01T00:00:00Z")
        })
}

fn accrual_rule() -> impl Strategy<Value = LoyaltyProgramAccrualRule> {
    (prop_oneof![Just("VISIT"), Just("SPEND")], proptest::option::of(1..100_i32), money()).prop_map(
        |(accrual_type, points, amount)| {
            LoyaltyProgramAccrualRule::new(accrual_type).with(|r| {
                r.points = points;
                if accrual_type == "SPEND" {
                    r.spend_amount_money = Some(amount);
                } else {
                    r.visit_minimum_amount_money = Some(amount);
                }
            })
        },
    )
}

fn loyalty_program() -> impl Strategy<Value = LoyaltyProgram> {
    (
        "[a-z0-9-]{1,12}",
        prop_oneof![Just("ACTIVE"), Just("INACTIVE")],
        proptest::collection::vec(reward_tier(), 0..4),
        proptest::option::of("P[1-9][YM]"),
        ("[A-Za-z]{1,8}", "[A-Za-z]{1,8}"),
        proptest::collection::vec("[A-Z0-9]{4,8}", 0..3),
        proptest::collection::vec(accrual_rule(), 0..3),
    )
        .prop_map(|(id, status, tiers, expiration, (one, other), location_ids, rules)| {
            LoyaltyProgram::new(
                id,
                status,
                tiers,
                LoyaltyProgramTerminology::new(one, other),
                location_ids,
                "2020-05-01T00:00:00Z",
                "2020-06-01T00:00:00Z",
                rules,
            )
            .with(|p| p.expiration_policy = expiration.map(LoyaltyProgramExpirationPolicy::new))
        })
}

proptest! {
    #[test]
    fn payment_requests_round_trip(request in payment_request()) {
        let json = serde_json::to_string(&request).unwrap();
        let decoded: CreatePaymentRequest = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&decoded, &request);
        prop_assert_eq!(hash_of(&decoded), hash_of(&request));
    }

    #[test]
    fn line_items_round_trip(item in line_item()) {
        let json = serde_json::to_string(&item).unwrap();
        let decoded: OrderLineItem = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, item);
    }

    #[test]
    fn absent_fields_never_serialize(request in payment_request()) {
        let value = serde_json::to_value(&request).unwrap();
        prop_assert_eq!(value.get("tip_money").is_some(), request.tip_money.is_some());
        prop_assert_eq!(value.get("note").is_some(), request.note.is_some());
        prop_assert!(value.get("order_id").is_none());
    }

    #[test]
    fn equality_is_symmetric(a in money(), b in money()) {
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn unmodified_copies_are_equal(item in line_item()) {
        let copy = item.with(|_| {});
        prop_assert_eq!(hash_of(&copy), hash_of(&item));
        prop_assert_eq!(copy, item);
    }

    #[test]
    fn catalog_objects_round_trip(object in catalog_object()) {
        let json = serde_json::to_string(&object).unwrap();
        let decoded: CatalogObject = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(hash_of(&decoded), hash_of(&object));
        prop_assert_eq!(decoded.object_type(), object.object_type());
        prop_assert_eq!(&decoded, &object);
        prop_assert_eq!(object.with(|_| {}), object);
    }

    #[test]
    fn catalog_objects_carry_exactly_one_payload(object in catalog_object()) {
        let value = serde_json::to_value(&object).unwrap();
        let payloads = value
            .as_object()
            .unwrap()
            .keys()
            .filter(|key| key.ends_with("_data"))
            .count();
        prop_assert_eq!(payloads, 1);
        let object_type = object.object_type();
        prop_assert_eq!(value["type"].as_str(), Some(object_type.as_ref()));
    }

    #[test]
    fn catalog_objects_ignore_unknown_keys(object in catalog_object()) {
        let mut value = serde_json::to_value(&object).unwrap();
        value.as_object_mut().unwrap().insert("added_later".to_owned(), serde_json::json!({ "x": 5 }));
        let decoded: CatalogObject = serde_json::from_value(value).unwrap();
        prop_assert_eq!(decoded, object);
    }

    #[test]
    fn loyalty_programs_round_trip(program in loyalty_program()) {
        let json = serde_json::to_string(&program).unwrap();
        let decoded: LoyaltyProgram = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(hash_of(&decoded), hash_of(&program));
        prop_assert_eq!(&decoded, &program);
        prop_assert_eq!(program.with(|_| {}), program);
    }
}

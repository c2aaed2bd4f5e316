use square_models::render::Rendered;
use square_models::{CatalogItem, CatalogObject, Money, Order, OrderLineItem, TimeRange};

#[test]
fn absent_fields_render_as_null() {
    assert_eq!(
        TimeRange { start_at: Some("2020-01-01T00:00:00Z".into()), end_at: None }.to_string(),
        "TimeRange : (start_at = 2020-01-01T00:00:00Z, end_at = null)"
    );
}

#[test]
fn nested_records_and_lists_render_recursively() {
    let order = Order::new("L1").with(|o| {
        o.line_items = Some(vec![OrderLineItem::new("1"), OrderLineItem::new("2")]);
        o.total_money = Some(Money::of(700, "USD"));
    });
    let rendered = order.to_string();

    assert!(rendered.starts_with("Order : (id = null, location_id = L1, "));
    assert!(rendered.contains("line_items = [OrderLineItem : (uid = null, name = null, quantity = 1, "));
    assert!(rendered.contains("total_money = Money : (amount = 700, currency = USD)"));
}

#[test]
fn catalog_objects_render_their_payload() {
    let object = CatalogObject::new("#tea", CatalogItem { name: Some("Tea".into()), ..Default::default() });
    let rendered = object.to_string();

    assert!(rendered.starts_with("CatalogObject : (id = #tea, data = ITEM(item_data = CatalogItem : (name = Tea, "));
    assert!(rendered.ends_with("image_id = null)"));
}

#[test]
fn rendered_adapter_formats_plain_values() {
    let values = vec![Some(1_i64), None];
    assert_eq!(Rendered(&values).to_string(), "[1, null]");
}

use square_models::{Money, model};

#[model]
pub struct Tip {
    pub uid: String,
    pub amount: Money,
    pub note: Option<String>,
    pub tags: Option<Vec<String>>,
}

fn main() {
    let tip = Tip::new("t-1", Money::of(5, "USD"));
    let built = Tip::builder().uid("t-1").amount(Money::of(5, "USD")).build();
    assert_eq!(tip, built);

    let noted = tip.with(|t| t.note = Some("thanks".into()));
    assert_ne!(noted, tip);
    assert_eq!(
        noted.to_string(),
        "Tip : (uid = t-1, amount = Money : (amount = 5, currency = USD), note = thanks, tags = null)"
    );
}

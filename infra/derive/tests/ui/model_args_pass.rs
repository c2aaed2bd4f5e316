use square_models::model;

#[model(rename_all = "camelCase", deny_unknown_fields = true)]
pub struct LegacyPage {
    pub batch_token: Option<String>,
    #[model(emit_null)]
    pub next_cursor: Option<String>,
}

#[model]
#[derive(Debug)]
pub struct AlreadyDebug {
    pub r#type: Option<String>,
}

fn main() {
    let page = LegacyPage::default();
    let _ = page.with(|p| p.batch_token = Some("b".into()));
    let plain = AlreadyDebug::default();
    assert_eq!(plain.to_string(), "AlreadyDebug : (type = null)");
}

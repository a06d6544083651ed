use {
    anyhow::{anyhow, Result},
    playstore_sentiment_core::catalog::{self, PopularApp, POPULAR_APPS},
};

/// Resolves the catalogue entry the user asked for, the first entry when no
/// name is given.
pub fn select_popular_app(name: Option<&str>) -> Result<&'static PopularApp> {
    match name.map(str::trim).filter(|name| !name.is_empty()) {
        None => Ok(catalog::default_app()),
        Some(name) => catalog::find_by_name(name).ok_or_else(|| {
            anyhow!("unknown app \"{}\", choose one of: {}", name, app_names().join(", "))
        }),
    }
}

pub fn app_names() -> Vec<&'static str> {
    POPULAR_APPS.iter().map(|app| app.name).collect()
}

pub fn render_catalog(selected: &PopularApp) -> String {
    let mut out = String::from("Popular apps\n");
    for app in POPULAR_APPS.iter() {
        let marker = if app == selected { '>' } else { ' ' };
        out.push_str(&format!(" {} {:<15} {}\n", marker, app.name, app.app_id));
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularApp {
    pub name: &'static str,
    pub app_id: &'static str,
}

pub static POPULAR_APPS: [PopularApp; 8] = [
    PopularApp { name: "Instagram", app_id: "com.instagram.android" },
    PopularApp { name: "Facebook", app_id: "com.facebook.katana" },
    PopularApp { name: "TikTok", app_id: "com.zhiliaoapp.musically" },
    PopularApp { name: "Shopee", app_id: "com.shopee.id" },
    PopularApp { name: "Tokopedia", app_id: "com.tokopedia.tkpd" },
    PopularApp { name: "WhatsApp", app_id: "com.whatsapp" },
    PopularApp { name: "Mobile Legends", app_id: "com.mobile.legends" },
    PopularApp { name: "PUBG Mobile", app_id: "com.tencent.ig" },
];

/// Entry selected when the user has not picked one.
pub fn default_app() -> &'static PopularApp {
    &POPULAR_APPS[0]
}

pub fn find_by_name(name: &str) -> Option<&'static PopularApp> {
    let name = name.trim();
    POPULAR_APPS.iter().find(|app| app.name.eq_ignore_ascii_case(name))
}

//! Shared builders for chat-core tests.

use phoneguide_core::types::{
    CameraSpec, CapabilityScores, CatalogItem, Dimensions, DisplaySpec, FeatureFlags,
};

/// Build a catalog item with sane midrange defaults and no capability scores.
pub(crate) fn phone(id: &str, name: &str, brand: &str, price: u32) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        price_inr: price,
        os: "Android 14".to_string(),
        soc: "Dimensity 7200".to_string(),
        ram_gb: 8,
        storage_gb: 128,
        display: DisplaySpec {
            size_inches: 6.7,
            kind: "AMOLED".to_string(),
            refresh_hz: 120,
            resolution: "1080x2412".to_string(),
        },
        battery_mah: 5000,
        charging_watt: 67,
        cameras: CameraSpec {
            main_mp: 50,
            ultra_mp: Some(8),
            tele_mp: None,
            ois: false,
            eis: true,
            selfie_mp: Some(16),
        },
        features: FeatureFlags {
            five_g: true,
            nfc: false,
            wireless_charging: false,
            ip_rating: String::new(),
        },
        dims: Dimensions {
            height: 161.7,
            width: 75.0,
            thickness: 7.9,
            weight: 187.0,
        },
        release: "2024-07".to_string(),
        tags: vec![],
        scores: CapabilityScores::default(),
        image: None,
        url: None,
    }
}

/// Same as [`phone`] but with explicit camera/battery/performance scores.
pub(crate) fn scored_phone(
    id: &str,
    name: &str,
    brand: &str,
    price: u32,
    camera: Option<f64>,
    battery: Option<f64>,
    performance: Option<f64>,
) -> CatalogItem {
    let mut item = phone(id, name, brand, price);
    item.scores = CapabilityScores {
        camera,
        battery,
        performance,
        display: None,
        value: None,
    };
    item
}

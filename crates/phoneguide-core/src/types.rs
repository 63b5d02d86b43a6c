use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog records
// =============================================================================

/// A single recommendable phone from the catalog.
///
/// Field names on the wire use camelCase (`priceInr`, `batteryMah`, ...) to
/// match the catalog file format and the frontend contract. Records are
/// immutable after load; the catalog store owns the only copies and hands
/// out references or clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price_inr: u32,
    pub os: String,
    pub soc: String,
    #[serde(rename = "ramGB")]
    pub ram_gb: u32,
    #[serde(rename = "storageGB")]
    pub storage_gb: u32,
    pub display: DisplaySpec,
    pub battery_mah: u32,
    pub charging_watt: u32,
    pub cameras: CameraSpec,
    pub features: FeatureFlags,
    pub dims: Dimensions,
    pub release: String,
    pub tags: Vec<String>,
    pub scores: CapabilityScores,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Display panel attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySpec {
    pub size_inches: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub refresh_hz: u32,
    pub resolution: String,
}

/// Camera hardware attributes. Secondary sensors are optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSpec {
    #[serde(rename = "mainMP")]
    pub main_mp: u32,
    #[serde(rename = "ultraMP", default)]
    pub ultra_mp: Option<u32>,
    #[serde(rename = "teleMP", default)]
    pub tele_mp: Option<u32>,
    #[serde(default)]
    pub ois: bool,
    #[serde(default)]
    pub eis: bool,
    #[serde(rename = "selfieMP", default)]
    pub selfie_mp: Option<u32>,
}

/// Boolean connectivity and hardware feature flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(rename = "fiveG")]
    pub five_g: bool,
    #[serde(default)]
    pub nfc: bool,
    #[serde(default)]
    pub wireless_charging: bool,
    #[serde(default)]
    pub ip_rating: String,
}

/// Physical dimensions in millimetres and grams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub thickness: f64,
    pub weight: f64,
}

/// Editorial capability scores on a 0-10 scale.
///
/// A missing score means "no data", which downstream ranking treats as a
/// neutral midpoint rather than zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityScores {
    #[serde(default)]
    pub camera: Option<f64>,
    #[serde(default)]
    pub battery: Option<f64>,
    #[serde(default)]
    pub performance: Option<f64>,
    #[serde(default)]
    pub display: Option<f64>,
    #[serde(default)]
    pub value: Option<f64>,
}

// =============================================================================
// Tests
// =============================================================================

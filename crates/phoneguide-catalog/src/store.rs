//! Immutable in-memory catalog of phone records.
//!
//! Loaded once at process start and shared read-only across all request
//! handlers, so no locking is ever needed.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use phoneguide_core::types::CatalogItem;

use crate::error::CatalogError;

/// The catalog store: every recommendable phone, in file order.
///
/// File order is load-bearing: the ranking engine's stable sort falls back
/// to it for equally scored items, so two runs over the same file always
/// produce the same result order.
pub struct CatalogStore {
    items: Vec<CatalogItem>,
    index: HashMap<String, usize>,
    brands: Vec<String>,
}

impl CatalogStore {
    /// Load and validate the catalog from a JSON file.
    ///
    /// Any malformed or invalid record fails the whole load; the caller is
    /// expected to treat this as a startup abort.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let items: Vec<CatalogItem> = serde_json::from_str(&content)?;
        let store = Self::from_items(items)?;
        info!(
            path = %path.display(),
            items = store.len(),
            brands = store.brands.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    /// Build a store from already-parsed records, running the same
    /// validation pass as [`CatalogStore::load`].
    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index: i,
                    field: "id",
                });
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index: i,
                    field: "name",
                });
            }
            if item.brand.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index: i,
                    field: "brand",
                });
            }
            if item.price_inr == 0 {
                return Err(CatalogError::ZeroPrice(item.id.clone()));
            }
            if index.insert(item.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }

        let mut brands: Vec<String> = items.iter().map(|p| p.brand.clone()).collect();
        brands.sort();
        brands.dedup();

        Ok(Self {
            items,
            index,
            brands,
        })
    }

    /// All items in catalog (file) order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Distinct brand names, sorted. Fed into the classifier prompt.
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use phoneguide_core::types::{
        CameraSpec, CapabilityScores, Dimensions, DisplaySpec, FeatureFlags,
    };

    fn phone(id: &str, name: &str, brand: &str, price: u32) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            price_inr: price,
            os: "Android 14".to_string(),
            soc: "Snapdragon 7 Gen 3".to_string(),
            ram_gb: 8,
            storage_gb: 128,
            display: DisplaySpec {
                size_inches: 6.6,
                kind: "AMOLED".to_string(),
                refresh_hz: 120,
                resolution: "1080x2400".to_string(),
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
                height: 161.1,
                width: 74.8,
                thickness: 7.8,
                weight: 190.0,
            },
            release: "2024-08".to_string(),
            tags: vec!["midrange".to_string()],
            scores: CapabilityScores::default(),
            image: None,
            url: None,
        }
    }

    fn write_catalog(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phones.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    // ---- Construction from items ----

    #[test]
    fn test_from_items_preserves_order() {
        let store = CatalogStore::from_items(vec![
            phone("a", "Phone A", "Alpha", 10_000),
            phone("b", "Phone B", "Beta", 20_000),
            phone("c", "Phone C", "Alpha", 30_000),
        ])
        .unwrap();
        let ids: Vec<&str> = store.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_by_id() {
        let store =
            CatalogStore::from_items(vec![phone("a", "A", "Alpha", 10_000), phone("b", "B", "Beta", 20_000)])
                .unwrap();
        assert_eq!(store.get("b").unwrap().name, "B");
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_brands_sorted_and_deduplicated() {
        let store = CatalogStore::from_items(vec![
            phone("a", "A", "Zeta", 10_000),
            phone("b", "B", "Alpha", 20_000),
            phone("c", "C", "Zeta", 30_000),
        ])
        .unwrap();
        assert_eq!(store.brands(), &["Alpha".to_string(), "Zeta".to_string()]);
    }

    #[test]
    fn test_len() {
        let store = CatalogStore::from_items(vec![phone("a", "A", "Alpha", 10_000)]).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    // ---- Validation ----

    #[test]
    fn test_empty_catalog_rejected() {
        let result = CatalogStore::from_items(vec![]);
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = CatalogStore::from_items(vec![
            phone("a", "A", "Alpha", 10_000),
            phone("a", "A2", "Beta", 20_000),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = CatalogStore::from_items(vec![phone("  ", "A", "Alpha", 10_000)]);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyField { field: "id", .. })
        ));
    }

    #[test]
    fn test_empty_brand_rejected() {
        let result = CatalogStore::from_items(vec![phone("a", "A", "", 10_000)]);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyField { field: "brand", .. })
        ));
    }

    #[test]
    fn test_zero_price_rejected() {
        let result = CatalogStore::from_items(vec![phone("a", "A", "Alpha", 0)]);
        assert!(matches!(result, Err(CatalogError::ZeroPrice(id)) if id == "a"));
    }

    // ---- Loading from disk ----

    #[test]
    fn test_load_valid_file() {
        let json = serde_json::to_string(&vec![
            phone("a", "A", "Alpha", 10_000),
            phone("b", "B", "Beta", 20_000),
        ])
        .unwrap();
        let (_dir, path) = write_catalog(&json);

        let store = CatalogStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.brands().len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = CatalogStore::load(Path::new("/nonexistent/phones.json"));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let (_dir, path) = write_catalog("[{\"id\": \"a\", ");
        let result = CatalogStore::load(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_record_with_missing_field_fails_whole_load() {
        // One well-formed record plus one missing its price: the load must
        // fail rather than drop the bad record.
        let good = serde_json::to_value(phone("a", "A", "Alpha", 10_000)).unwrap();
        let mut bad = serde_json::to_value(phone("b", "B", "Beta", 20_000)).unwrap();
        bad.as_object_mut().unwrap().remove("priceInr");
        let json = serde_json::to_string(&vec![good, bad]).unwrap();
        let (_dir, path) = write_catalog(&json);

        let result = CatalogStore::load(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}

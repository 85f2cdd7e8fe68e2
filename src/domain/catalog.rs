use serde::{Deserialize, Serialize};

/// One product available to the shop, priced in whole rupiah.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price: i64,
}

/// Read-only mapping from product name to unit price. Fixed at startup;
/// the bookkeeping core never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The default kitchenware assortment carried by the shop.
    pub fn kitchenware() -> Self {
        let entries = [
            ("Sendok A", 15_000),
            ("Sendok B", 20_000),
            ("Sendok C", 25_000),
            ("Sendok D", 30_000),
            ("Pisau A", 15_000),
            ("Pisau B", 20_000),
            ("Pisau Bungkus (C)", 30_000),
            ("Saringan", 10_000),
            ("Toples kecil", 12_000),
        ]
        .into_iter()
        .map(|(name, unit_price)| CatalogEntry {
            name: name.to_string(),
            unit_price,
        })
        .collect();
        Self { entries }
    }

    pub fn unit_price(&self, product: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.name == product)
            .map(|entry| entry.unit_price)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn product_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitchenware_catalog_lists_nine_products() {
        let catalog = Catalog::kitchenware();
        assert_eq!(catalog.entries().len(), 9);
        assert_eq!(catalog.unit_price("Sendok A"), Some(15_000));
        assert_eq!(catalog.unit_price("Toples kecil"), Some(12_000));
    }

    #[test]
    fn unknown_product_has_no_price() {
        let catalog = Catalog::kitchenware();
        assert_eq!(catalog.unit_price("Wajan"), None);
    }
}

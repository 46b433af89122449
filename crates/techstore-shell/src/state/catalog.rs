//! # Catalog State
//!
//! Holds the product list supplied by the catalog collaborator.
//!
//! ## Thread Safety
//! The catalog is read-only after initialization, so no mutex is needed.
//! If catalog refresh is added later, we'd wrap in `RwLock`.

use techstore_core::Product;
use tracing::debug;

/// The product catalog the storefront renders.
///
/// The storefront never mutates catalog entries; it only reads them for the
/// products page, the cart snapshots, and the prize wheel.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    /// Creates a catalog from an externally supplied product list.
    pub fn new(products: Vec<Product>) -> Self {
        debug!(count = products.len(), "catalog initialized");
        CatalogState { products }
    }

    /// Creates the built-in TechStore demo catalog.
    ///
    /// Used by the demo frontend and by tests; a real deployment passes its
    /// own list to [`CatalogState::new`].
    pub fn demo() -> Self {
        CatalogState::new(demo_products())
    }

    /// Returns every catalog entry, including inactive ones.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the products currently offered for sale, in catalog order.
    pub fn active(&self) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect()
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Returns the number of catalog entries.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The demo catalog shipped with the storefront.
///
/// Prices are integer cents; images are paths the frontend resolves against
/// its asset bundle.
fn demo_products() -> Vec<Product> {
    fn entry(id: &str, name: &str, price_cents: i64, image: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            price_cents,
            image: image.to_string(),
            is_active: true,
        }
    }

    vec![
        entry("p-01", "Fone de Ouvido Bluetooth", 19990, "/assets/products/fone-bluetooth.jpg"),
        entry("p-02", "Smartwatch Pro", 59990, "/assets/products/smartwatch-pro.jpg"),
        entry("p-03", "Caixa de Som Portátil", 24990, "/assets/products/caixa-de-som.jpg"),
        entry("p-04", "Teclado Mecânico", 34990, "/assets/products/teclado-mecanico.jpg"),
        entry("p-05", "Mouse Gamer", 15990, "/assets/products/mouse-gamer.jpg"),
        entry("p-06", "Carregador Sem Fio", 9990, "/assets/products/carregador-sem-fio.jpg"),
        entry("p-07", "Notebook Ultra", 489990, "/assets/products/notebook-ultra.jpg"),
        entry("p-08", "Monitor 27\"", 129990, "/assets/products/monitor-27.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_populated() {
        let catalog = CatalogState::demo();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), catalog.active().len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = CatalogState::demo();
        let product = catalog.get("p-01").expect("demo product present");
        assert_eq!(product.name, "Fone de Ouvido Bluetooth");
        assert!(catalog.get("ghost").is_none());
    }

    #[test]
    fn test_active_filters_inactive_entries() {
        let mut products = demo_products();
        products[0].is_active = false;
        let catalog = CatalogState::new(products);

        assert_eq!(catalog.active().len(), catalog.len() - 1);
        // Inactive entries are still reachable by id for display purposes.
        assert!(catalog.get("p-01").is_some());
    }
}

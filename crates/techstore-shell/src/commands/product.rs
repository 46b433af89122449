//! # Product Commands
//!
//! Read-only catalog queries for the products page and the prize wheel.

use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use techstore_core::Product;

/// Lists the products offered for sale, in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.active()
}

/// Looks up a single product by id.
///
/// ## Errors
/// Unlike cart mutations, a catalog query on an unknown id is a real
/// lookup miss and surfaces as `NOT_FOUND`.
pub fn get_product_by_id(catalog: &CatalogState, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product_by_id command");

    catalog
        .get(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_products_returns_demo_catalog() {
        let catalog = CatalogState::demo();
        let products = list_products(&catalog);
        assert_eq!(products.len(), catalog.len());
    }

    #[test]
    fn test_get_product_by_id() {
        let catalog = CatalogState::demo();
        let product = get_product_by_id(&catalog, "p-02").unwrap();
        assert_eq!(product.name, "Smartwatch Pro");

        let err = get_product_by_id(&catalog, "ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}

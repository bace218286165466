//! Catalog browsing commands.

use herbal_store_core::ProductId;
use herbal_store_storefront::cart::KeyValueStore;
use herbal_store_storefront::error::AppError;
use herbal_store_storefront::filter::FilterState;
use herbal_store_storefront::state::Storefront;

use crate::render;

/// Print the products matching `filters`.
pub fn list<S: KeyValueStore>(storefront: &Storefront<S>, filters: &FilterState) {
    let products = storefront.apply_filters(filters);
    if products.is_empty() {
        println!("No products found matching your criteria.");
        return;
    }

    for product in &products {
        println!("{}", render::product_row(product));
    }
    println!("\n{} of {} products", products.len(), storefront.catalog().len());
}

/// Print one product's detail page.
pub fn show<S: KeyValueStore>(storefront: &Storefront<S>, id: ProductId) -> Result<(), AppError> {
    let detail = storefront
        .product_detail(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    println!(
        "{}",
        render::product_page(detail.product, detail.quantity.value())
    );
    Ok(())
}

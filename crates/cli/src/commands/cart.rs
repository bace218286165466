//! Cart commands.
//!
//! The storefront treats unknown ids and no-op changes as silent; here they
//! become user-facing errors so the shell sees a failure exit code.

use herbal_store_core::ProductId;
use herbal_store_storefront::cart::KeyValueStore;
use herbal_store_storefront::error::AppError;
use herbal_store_storefront::state::Storefront;

use crate::render;

pub fn show<S: KeyValueStore>(storefront: &Storefront<S>) {
    println!("{}", render::cart(storefront.cart()));
}

pub fn add<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    id: ProductId,
    quantity: u32,
) -> Result<(), AppError> {
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    if !storefront.add_item(id, quantity) {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    if let Some(line) = storefront.cart().line(id) {
        println!("{} added to cart!", line.product.name);
    }
    show(storefront);
    Ok(())
}

pub fn remove<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    id: ProductId,
) -> Result<(), AppError> {
    if !storefront.remove_item(id) {
        return Err(AppError::NotFound(format!("product {id} is not in the cart")));
    }
    show(storefront);
    Ok(())
}

pub fn adjust<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    id: ProductId,
    delta: i64,
) -> Result<(), AppError> {
    if storefront.cart().line(id).is_none() {
        return Err(AppError::NotFound(format!("product {id} is not in the cart")));
    }
    storefront.adjust_quantity(id, delta);
    show(storefront);
    Ok(())
}

pub fn clear<S: KeyValueStore>(storefront: &mut Storefront<S>) {
    storefront.clear_cart();
    show(storefront);
}

//! Plain-text views shared by the commands.

use herbal_store_core::{Product, format_amount};
use herbal_store_storefront::cart::{Cart, CartLine, KeyValueStore};

/// One catalog row: id, name, category, price and stars.
pub fn product_row(product: &Product) -> String {
    format!(
        "{:>4}  {:<32} {:<14} {:>8}  {} ({})",
        product.id.as_u32(),
        product.name,
        product.category.display_name(),
        product.price.display(),
        product.rating.stars(),
        product.rating,
    )
}

/// Full product page.
pub fn product_page(product: &Product, quantity: u32) -> String {
    let mut out = format!(
        "{}\n{}\n{} {}\n{}\n\n{}\n\nIngredients: {}\n",
        product.name,
        product.category.display_name(),
        product.rating.stars(),
        product.rating,
        product.price.display(),
        product.description,
        product.ingredients.join(", "),
    );
    if !product.benefits.is_empty() {
        out.push_str("\nBenefits:\n");
        for benefit in &product.benefits {
            out.push_str("  - ");
            out.push_str(benefit);
            out.push('\n');
        }
    }
    if !product.usage.is_empty() {
        out.push_str("\nUsage: ");
        out.push_str(&product.usage);
        out.push('\n');
    }
    out.push_str(&format!("\nQuantity: {quantity}"));
    out
}

fn cart_row(line: &CartLine) -> String {
    format!(
        "{:>4}  {:<32} {:>8} x {:<3} = {}",
        line.id().as_u32(),
        line.product.name,
        line.unit_price().display(),
        line.quantity(),
        format_amount(line.line_total()),
    )
}

/// Cart contents with the badge count and total.
pub fn cart<S: KeyValueStore>(cart: &Cart<S>) -> String {
    if cart.is_empty() {
        return "Your cart is empty".to_string();
    }
    let mut out = String::new();
    for line in cart.lines() {
        out.push_str(&cart_row(line));
        out.push('\n');
    }
    out.push_str(&format!(
        "\nItems: {}\nTotal: {}",
        cart.item_count(),
        format_amount(cart.display_total()),
    ));
    out
}

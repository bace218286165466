//! Checkout command.

use herbal_store_core::format_amount;
use herbal_store_storefront::cart::KeyValueStore;
use herbal_store_storefront::checkout::CheckoutForm;
use herbal_store_storefront::error::AppError;
use herbal_store_storefront::state::Storefront;

/// Contact and shipping details from the command line.
pub struct CheckoutArgs {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            address: args.address,
            city: args.city,
            postal_code: args.postal_code,
        }
    }
}

/// Place the order and print a confirmation.
pub async fn run<S: KeyValueStore>(
    storefront: &mut Storefront<S>,
    args: CheckoutArgs,
) -> Result<(), AppError> {
    let form = CheckoutForm::from(args);

    println!("Processing...");
    let order = storefront.checkout(&form).await?;

    println!(
        "\nThank you for your order, {}!\n\nOrder reference: {}\nItems: {}\nTotal: {}\n\nA confirmation will be sent to {}.",
        order.customer.name,
        order.reference,
        order.item_count(),
        format_amount(order.total),
        order.customer.email,
    );
    Ok(())
}

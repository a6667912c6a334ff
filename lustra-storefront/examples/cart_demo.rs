//! Browse the first catalog page, add a product to the cart and resolve it.
//!
//! Expects a running commerce API; point `LUSTRA_API_URL` at it.

use lustra_storefront::{AddOutcome, Storefront, StorefrontConfig, ViewState};
use shared::request::ProductQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lustra_storefront::logging::init();

    let config = StorefrontConfig::from_env();
    let mut storefront = Storefront::open(&config)?;

    let page = storefront
        .api()
        .products("Denkirs", &ProductQuery::default())
        .await?;
    println!(
        "{} products on page 1 of {}",
        page.products.len(),
        page.total_pages
    );

    let Some(first) = page.products.first() else {
        println!("Catalog is empty, nothing to add");
        return Ok(());
    };

    match storefront.cart_mut().add(first)? {
        AddOutcome::Added(quantity) => {
            println!("Added {} (x{}) to the cart", first.name, quantity)
        }
        AddOutcome::OutOfStock => println!("{} is out of stock", first.name),
    }

    storefront.refresh_cart().await;
    match storefront.cart().state() {
        ViewState::Ready(lines) => {
            for line in lines {
                println!("  {} x{} = {}", line.name, line.quantity, line.line_total());
            }
            println!("Cart total: {}", storefront.cart().total_amount());
        }
        ViewState::Empty => println!("Cart is empty"),
        ViewState::Error(cause) => println!("Could not resolve the cart: {}", cause),
        _ => {}
    }

    Ok(())
}

use crate::app::AppContext;
use crate::app::commands::CartSummary;
use crate::domain::{AppError, Notice};
use crate::ports::{LocalStorage, Navigator, Notifier, ProductCatalog, StockLookup};

/// Empty the cart, then send the user back to the storefront root.
pub fn execute<A, L, U>(ctx: &mut AppContext<A, L, U>) -> Result<CartSummary, AppError>
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
    U: Notifier + Navigator,
{
    let summary = CartSummary::of(ctx.store_mut().clear());
    ctx.ui().notify(&Notice::success("Cart cleared"));
    ctx.ui().navigate(ctx.root_url())?;
    Ok(summary)
}

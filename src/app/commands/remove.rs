use crate::app::AppContext;
use crate::app::commands::{CartSummary, reject};
use crate::domain::{AppError, Notice, ProductId};
use crate::ports::{LocalStorage, Navigator, Notifier, ProductCatalog, StockLookup};

/// Remove a product from the cart.
pub fn execute<A, L, U>(
    ctx: &mut AppContext<A, L, U>,
    id: ProductId,
) -> Result<CartSummary, AppError>
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
    U: Notifier + Navigator,
{
    let outcome = ctx.store_mut().remove(id).map(CartSummary::of);
    match outcome {
        Ok(summary) => {
            ctx.ui().notify(&Notice::success(format!("Removed product {} from cart", id)));
            Ok(summary)
        }
        Err(err) => Err(reject(ctx.ui(), err)),
    }
}

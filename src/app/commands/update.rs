use crate::app::AppContext;
use crate::app::commands::{CartSummary, reject};
use crate::domain::{AppError, Notice, ProductId};
use crate::ports::{LocalStorage, Navigator, Notifier, ProductCatalog, StockLookup};

/// Set the amount of a product already in the cart.
pub fn execute<A, L, U>(
    ctx: &mut AppContext<A, L, U>,
    id: ProductId,
    amount: i64,
) -> Result<CartSummary, AppError>
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
    U: Notifier + Navigator,
{
    let outcome = ctx.store_mut().set_amount(id, amount).map(CartSummary::of);
    match outcome {
        Ok(summary) => {
            ctx.ui().notify(&Notice::success(format!("Product {} amount set to {}", id, amount)));
            Ok(summary)
        }
        Err(err) => Err(reject(ctx.ui(), err)),
    }
}

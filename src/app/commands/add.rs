use crate::app::AppContext;
use crate::app::commands::{CartSummary, reject};
use crate::domain::{AppError, Notice, ProductId};
use crate::ports::{LocalStorage, Navigator, Notifier, ProductCatalog, StockLookup};

/// Add one unit of a product to the cart.
pub fn execute<A, L, U>(
    ctx: &mut AppContext<A, L, U>,
    id: ProductId,
) -> Result<CartSummary, AppError>
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
    U: Notifier + Navigator,
{
    let outcome = ctx.store_mut().add(id).map(CartSummary::of);
    match outcome {
        Ok(summary) => {
            let amount =
                summary.items.iter().find(|item| item.id() == id).map_or(0, |item| item.amount);
            ctx.ui()
                .notify(&Notice::success(format!("Product {} in cart (amount {})", id, amount)));
            Ok(summary)
        }
        Err(err) => Err(reject(ctx.ui(), err)),
    }
}

use crate::app::AppContext;
use crate::app::commands::CartSummary;
use crate::ports::{LocalStorage, Navigator, Notifier, ProductCatalog, StockLookup};

/// Current cart contents.
pub fn execute<A, L, U>(ctx: &AppContext<A, L, U>) -> CartSummary
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
    U: Notifier + Navigator,
{
    CartSummary::of(ctx.store().cart())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::fixtures::{context, id};
    use crate::testing::FakeStorefront;

    #[test]
    fn summarizes_persisted_cart() {
        let (ctx, ui) = context(FakeStorefront::new(), &[(3, 2), (1, 1)]);

        let summary = execute(&ctx);
        let ids: Vec<_> = summary.items.iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec![id(3), id(1)]);
        assert_eq!(summary.products, 2);
        assert_eq!(summary.units, 3);
        assert!((summary.total - 150.0).abs() < 1e-9);
        assert!(ui.notices().is_empty());
    }
}

use crate::app::api::{self, CartSummary};
use crate::domain::AppError;

pub fn run_show(json: bool) -> Result<(), AppError> {
    let summary = api::show()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print!("{}", render(&summary));
    Ok(())
}

fn render(summary: &CartSummary) -> String {
    if summary.items.is_empty() {
        return "🛒 Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in &summary.items {
        out.push_str(&format!(
            "  #{:<5} {:<40} {:>3} × {:>9.2} = {:>10.2}\n",
            item.id(),
            item.product.title,
            item.amount,
            item.product.price,
            item.subtotal()
        ));
    }
    out.push_str(&format!(
        "🛒 {} product(s), {} unit(s), total {:.2}\n",
        summary.products, summary.units, summary.total
    ));
    out
}

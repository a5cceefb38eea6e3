use crate::inventory::Item;

use super::state::ViewState;

/// Render the derived view as a plain-text table with the total-value
/// footer. The total covers the full collection regardless of filter.
pub fn render(state: &ViewState) -> String {
    let view = state.derived_view();

    let name_width = column_width("Name", view.iter().map(|i| i.name.len()));
    let category_width = column_width("Category", view.iter().map(|i| i.category.as_str().len()));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<36}  {:<name_width$}  {:>8}  {:>10}  {:<category_width$}\n",
        "ID", "Name", "Qty", "Price", "Category"
    ));

    for item in &view {
        out.push_str(&render_row(item, name_width, category_width));
    }

    out.push_str(&format!(
        "\nTotal inventory value: ${:.2}\n",
        state.total_value()
    ));
    out
}

fn render_row(item: &Item, name_width: usize, category_width: usize) -> String {
    format!(
        "{:<36}  {:<name_width$}  {:>8}  {:>10.2}  {:<category_width$}\n",
        item.id,
        item.name,
        item.quantity,
        item.price,
        item.category.as_str()
    )
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.fold(header.len(), usize::max)
}

//! Table of the demo product catalog.

use leptos::prelude::*;

use crate::net::types::ProductCatalog;
use crate::util::format::{count_label, format_price};

#[component]
pub fn ProductTable(catalog: ProductCatalog) -> impl IntoView {
    let heading = count_label("Products", catalog.total);
    let rows = catalog
        .products
        .into_iter()
        .map(|product| {
            view! {
                <tr>
                    <td>{product.id.to_string()}</td>
                    <td>{product.name}</td>
                    <td class="data-panel__price">{format_price(product.price)}</td>
                    <td>{product.category}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="data-panel">
            <h2 class="data-panel__title">{heading}</h2>
            <table class="data-panel__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Category"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <p class="data-panel__meta">"Requested by " {catalog.requested_by}</p>
        </div>
    }
}

//! Category Block Component

use leptos::prelude::*;

use crate::components::ProductItem;

/// A category title followed by its item rows
///
/// `names` fixes the row structure; checked state is read per row.
#[component]
pub fn CategoryBlock(
    category: usize,
    label: String,
    names: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="category-block">
            <h3 class="category-title">{label}</h3>
            {names
                .into_iter()
                .enumerate()
                .map(|(index, name)| view! {
                    <ProductItem category=category index=index name=name />
                })
                .collect_view()}
        </div>
    }
}

//! UI Components
//!
//! Leptos components for the shopping list page.

mod input_area;
mod list_controls;
mod category_block;
mod product_item;
mod shopping_list_view;

pub use input_area::InputArea;
pub use list_controls::ListControls;
pub use category_block::CategoryBlock;
pub use product_item::ProductItem;
pub use shopping_list_view::ShoppingListView;

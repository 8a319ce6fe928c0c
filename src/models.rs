//! Shopping List Models
//!
//! Categories of checkable items. A list serializes as a JSON object
//! mapping each category label to its array of items, in display order.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub checked: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }
}

/// A labelled, ordered group of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(label: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// The whole working state: categories in insertion order, labels unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    categories: Vec<Category>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, or replace the items of an existing label in place
    pub fn insert(&mut self, label: impl Into<String>, items: Vec<Item>) {
        let label = label.into();
        match self.categories.iter_mut().find(|c| c.label == label) {
            Some(existing) => existing.items = items,
            None => self.categories.push(Category::new(label, items)),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories that have at least one item
    pub fn visible_categories(&self) -> impl Iterator<Item = (usize, &Category)> {
        self.categories
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.items.is_empty())
    }

    pub fn has_visible_items(&self) -> bool {
        self.visible_categories().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item(&self, category: usize, index: usize) -> Option<&Item> {
        self.categories.get(category)?.items.get(index)
    }

    /// Flip the checked flag of one item, returning its new value
    pub fn toggle(&mut self, category: usize, index: usize) -> Option<bool> {
        let item = self.categories.get_mut(category)?.items.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    pub fn checked_count(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| i.checked)
            .count()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Serialize for ShoppingList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.label, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShoppingList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = ShoppingList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category labels to item arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut list = ShoppingList::new();
                while let Some((label, items)) = access.next_entry::<String, Vec<Item>>()? {
                    list.insert(label, items);
                }
                Ok(list)
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShoppingList {
        let mut list = ShoppingList::new();
        list.insert("Frutta", vec![Item::new("Mela"), Item::new("Banana")]);
        list.insert("Vuota", vec![]);
        list.insert("Latticini", vec![Item::new("Latte")]);
        list
    }

    #[test]
    fn test_insert_preserves_order() {
        let list = sample();
        let labels: Vec<_> = list.categories().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Frutta", "Vuota", "Latticini"]);
    }

    #[test]
    fn test_insert_existing_label_keeps_position() {
        let mut list = sample();
        list.insert("Frutta", vec![Item::new("Pera")]);

        assert_eq!(list.categories().len(), 3);
        assert_eq!(list.categories()[0].label, "Frutta");
        assert_eq!(list.categories()[0].items, vec![Item::new("Pera")]);
    }

    #[test]
    fn test_visible_categories_skip_empty() {
        let list = sample();
        let visible: Vec<_> = list.visible_categories().map(|(i, c)| (i, c.label.clone())).collect();
        assert_eq!(visible, vec![(0, "Frutta".to_string()), (2, "Latticini".to_string())]);
    }

    #[test]
    fn test_toggle_changes_only_target() {
        let mut list = sample();
        let before = list.clone();

        assert_eq!(list.toggle(0, 1), Some(true));
        assert!(list.item(0, 1).unwrap().checked);
        assert!(!list.item(0, 0).unwrap().checked);
        assert!(!list.item(2, 0).unwrap().checked);
        assert_eq!(list.checked_count(), 1);

        assert_eq!(list.toggle(0, 1), Some(false));
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut list = sample();
        assert_eq!(list.toggle(1, 0), None);
        assert_eq!(list.toggle(9, 0), None);
        assert_eq!(list.toggle(0, 5), None);
        assert_eq!(list, sample());
    }

    #[test]
    fn test_serialize_as_object() {
        let mut list = sample();
        list.toggle(2, 0);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"{"Frutta":[{"name":"Mela","checked":false},{"name":"Banana","checked":false}],"Vuota":[],"Latticini":[{"name":"Latte","checked":true}]}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let list: ShoppingList =
            serde_json::from_str(r#"{"Z":[{"name":"a","checked":true}],"A":[]}"#).unwrap();
        assert_eq!(list.categories()[0].label, "Z");
        assert_eq!(list.categories()[1].label, "A");
        assert!(list.item(0, 0).unwrap().checked);
    }
}

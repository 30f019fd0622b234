//! Observable collection integration tests.

use observable_entities::{
    ChangeEvent, ObservableCollection, ObservableEntity, ObservableMap, ObservableSet,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Product {
    product_id: u32,
    product_name: String,
    unit_price: f64,
}

fn product(id: u32, name: &str, price: f64) -> Product {
    Product {
        product_id: id,
        product_name: name.to_string(),
        unit_price: price,
    }
}

fn grocery_map() -> ObservableMap<String, Product> {
    let mut foods = ObservableMap::new();
    foods.add_range([
        ("Bacon".to_string(), product(1, "Bacon", 1.0)),
        ("Lettuce".to_string(), product(2, "Lettuce", 2.0)),
        ("Tomatoes".to_string(), product(3, "Tomatoes", 3.0)),
    ]);
    foods
}

// --- Keyed Collection ---

#[test]
fn test_map_contains_items() {
    let foods = grocery_map();
    assert_eq!(foods.len(), 3);
    assert_eq!(foods.get(&"Lettuce".to_string()), Some(&product(2, "Lettuce", 2.0)));
}

#[test]
fn test_map_add_notifies() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods = grocery_map();
    foods.on_add().listen(tx);

    let food = product(4, "Carrots", 4.0);
    foods.add(food.product_name.clone(), food.clone());

    let added: Vec<ChangeEvent<String, Product>> = rx.try_iter().collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].key().map(String::as_str), Some("Carrots"));
    assert_eq!(added[0].current(), Some(&food));
}

#[test]
fn test_map_add_range_notifies_each_in_order() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods: ObservableMap<String, Product> = ObservableMap::new();
    foods.on_add().listen(tx);

    foods.add_range([
        ("Bacon".to_string(), product(1, "Bacon", 1.0)),
        ("Lettuce".to_string(), product(2, "Lettuce", 2.0)),
        ("Tomatoes".to_string(), product(3, "Tomatoes", 3.0)),
    ]);

    assert_eq!(foods.len(), 3);
    let added: Vec<ChangeEvent<String, Product>> = rx.try_iter().collect();
    let keys: Vec<_> = added.iter().filter_map(|e| e.key()).cloned().collect();
    assert_eq!(keys, vec!["Bacon", "Lettuce", "Tomatoes"]);
    assert_eq!(added[0].current(), Some(&product(1, "Bacon", 1.0)));
    assert_eq!(added[2].current(), Some(&product(3, "Tomatoes", 3.0)));
}

#[test]
fn test_map_delete_notifies_with_prior_value() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods = grocery_map();
    foods.on_remove().listen(tx);

    assert!(foods.delete(&"Bacon".to_string()));

    let removed: Vec<ChangeEvent<String, Product>> = rx.try_iter().collect();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].key().map(String::as_str), Some("Bacon"));
    assert_eq!(removed[0].current(), Some(&product(1, "Bacon", 1.0)));
    assert_eq!(foods.get(&"Bacon".to_string()), None);
}

#[test]
fn test_map_delete_range_notifies_each_in_order() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods = grocery_map();
    foods.on_remove().listen(tx);

    let result = foods.delete_range(["Bacon".to_string(), "Lettuce".to_string()]);

    assert!(result);
    assert_eq!(foods.len(), 1);
    let removed: Vec<ChangeEvent<String, Product>> = rx.try_iter().collect();
    let keys: Vec<_> = removed.iter().filter_map(|e| e.key()).cloned().collect();
    assert_eq!(keys, vec!["Bacon", "Lettuce"]);
}

#[test]
fn test_map_delete_range_is_true_even_when_nothing_existed() {
    let mut foods: ObservableMap<String, Product> = ObservableMap::new();
    assert!(foods.delete_range(["Ghost".to_string()]));
}

#[test]
fn test_map_add_chains() {
    let mut counts: ObservableMap<&str, u32> = ObservableMap::new();
    counts.add("Bacon", 1).add("Lettuce", 2);
    assert_eq!(counts.len(), 2);
}

// --- Set Collection ---

#[test]
fn test_set_add_notifies() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods: ObservableSet<&str> = ["Bacon", "Lettuce", "Tomato"].into_iter().collect();
    foods.on_add().listen(tx);

    foods.add("Carrots");

    let added: Vec<ChangeEvent<&str, &str>> = rx.try_iter().collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].current(), Some(&"Carrots"));
    assert_eq!(added[0].key(), None);
}

#[test]
fn test_set_delete_notifies() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods: ObservableSet<&str> = ["Bacon", "Lettuce", "Tomato"].into_iter().collect();
    foods.on_remove().listen(tx);

    assert!(foods.delete(&"Lettuce"));

    let removed: Vec<ChangeEvent<&str, &str>> = rx.try_iter().collect();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].current(), Some(&"Lettuce"));
    assert!(!foods.contains(&"Lettuce"));
}

#[test]
fn test_set_duplicate_add_notifies_twice_without_growing() {
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut foods: ObservableSet<String> = ObservableSet::new();
    foods.on_add().listen(tx);

    foods.add("Bacon".to_string());
    foods.add("Bacon".to_string());

    assert_eq!(foods.len(), 1);
    assert_eq!(rx.try_iter().count(), 2);
}

#[test]
fn test_set_add_range_notifies_each_in_order() {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Sku {
        id: u32,
        name: &'static str,
    }

    let (tx, rx) = crossbeam_channel::unbounded();
    let mut skus: ObservableSet<Sku> = ObservableSet::new();
    skus.on_add().listen(tx);

    skus.add_range([Sku { id: 1, name: "Bacon" }, Sku { id: 2, name: "Lettuce" }]);

    let added: Vec<ChangeEvent<Sku, Sku>> = rx.try_iter().collect();
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].current().map(|s| s.name), Some("Bacon"));
    assert_eq!(added[1].current().map(|s| s.name), Some("Lettuce"));
}

// --- Composition ---

#[test]
fn test_entity_in_map_notifications_are_orthogonal() {
    let (map_tx, map_rx) = crossbeam_channel::unbounded();
    let (entity_tx, entity_rx) = crossbeam_channel::unbounded();

    let mut bacon = ObservableEntity::wrap(product(1, "Bacon", 1.0));
    bacon.on_modify().listen(entity_tx);

    let mut foods: ObservableMap<String, ObservableEntity<Product>> = ObservableMap::new();
    foods.on_add().listen(map_tx);

    // Adding the entity fires only the map's add channel.
    foods.add("Bacon".to_string(), bacon.clone());
    assert_eq!(map_rx.try_iter().count(), 1);
    assert!(entity_rx.try_iter().next().is_none());

    // Writing a property fires only the entity's modify channel.
    bacon.set("unit_price", 2.5).unwrap();
    assert_eq!(entity_rx.try_iter().count(), 1);
    assert!(map_rx.try_iter().next().is_none());
}

#[test]
fn test_observable_collection_trait_unifies_both() {
    fn watch<C: ObservableCollection>(collection: &C) -> usize
    where
        C::Event: 'static,
    {
        collection.on_add().listen(|_: &C::Event| {});
        collection.on_add().listener_count()
    }

    let foods = grocery_map();
    let tags: ObservableSet<&str> = ObservableSet::new();

    assert_eq!(watch(&foods), 1);
    assert_eq!(watch(&tags), 1);
    assert!(!foods.is_empty());
    assert!(tags.is_empty());
}

use std::collections::HashSet;

use dass_core::models::response::ITEM_COUNT;
use dass_instruments::{Dass21, Instrument};

#[test]
fn has_twenty_one_numbered_items() {
    let items = Dass21.items();
    assert_eq!(items.len(), ITEM_COUNT);
    assert_eq!(Dass21.item_count(), ITEM_COUNT);
    for (index, item) in items.iter().enumerate() {
        assert_eq!(item.number, index + 1);
        assert!(!item.text.is_empty());
    }
    assert_eq!(items[0].text, "I couldn't seem to experience any positive feeling at all.");
    assert_eq!(items[20].text, "I felt that I was rather touchy.");
}

#[test]
fn subscales_partition_items_into_sevens() {
    let mut seen = HashSet::new();
    for subscale in Dass21.subscales() {
        assert_eq!(subscale.items.len(), 7);
        assert_eq!(Dass21.max_subscale_score(subscale), 42);
        for &index in &subscale.items {
            assert!(seen.insert(index), "item {index} assigned twice");
            assert_eq!(Dass21.items()[index].subscale_id, subscale.id);
        }
    }
    assert_eq!(seen.len(), ITEM_COUNT);
}

#[test]
fn subscale_item_blocks() {
    let blocks: Vec<_> = Dass21
        .subscales()
        .iter()
        .map(|s| (s.name.as_str(), s.items.first().copied(), s.items.last().copied()))
        .collect();
    assert_eq!(
        blocks,
        vec![
            ("Depression", Some(0), Some(6)),
            ("Anxiety", Some(7), Some(13)),
            ("Stress", Some(14), Some(20)),
        ]
    );
}

#[test]
fn every_subscale_has_a_description() {
    for subscale in Dass21.subscales() {
        let description = subscale.description.as_deref().unwrap_or_default();
        assert!(!description.trim().is_empty(), "{} has no description", subscale.id);
    }
}

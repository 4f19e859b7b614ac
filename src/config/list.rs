//! Owned, ordered collection of configuration items
//!
//! The list is only changed through its methods. Each change replaces the
//! touched item wholesale and bumps the version counter; untouched items keep
//! their slot. List order is the export order.

use tracing::debug;

use super::item::{ConfigItem, DetentPositionEntry, FieldUpdate};
use crate::constants::item::FIRST_ID;
use crate::numeric;
use crate::validation;

#[derive(Debug, Clone)]
pub struct ItemList {
    items: Vec<ConfigItem>,
    /// Highest id ever handed out, so deleted ids are not reissued
    last_id: u32,
    version: u64,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    /// List holding a single empty item, the state the editor starts in
    pub fn new() -> Self {
        let mut list = Self::empty();
        list.append();
        list.version = 0;
        list
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            last_id: 0,
            version: 0,
        }
    }

    /// Wrap existing items; ids continue after the highest one present
    #[cfg(test)]
    pub fn from_items(items: Vec<ConfigItem>) -> Self {
        let last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        Self {
            items,
            last_id,
            version: 0,
        }
    }

    pub fn items(&self) -> &[ConfigItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&ConfigItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Incremented on every effective mutation
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_valid(&self) -> bool {
        validation::check_all_items_valid(&self.items)
    }

    /// Id the next appended item will get
    pub fn next_id(&self) -> u32 {
        let max_existing = self.items.iter().map(|item| item.id).max().unwrap_or(0);
        match max_existing.max(self.last_id) {
            0 => FIRST_ID,
            highest => highest + 1,
        }
    }

    /// Append an empty item and return its id
    pub fn append(&mut self) -> u32 {
        let id = self.next_id();
        self.items.push(ConfigItem::new(id));
        self.last_id = id;
        self.touch();
        debug!(id, count = self.items.len(), "Appended config item");
        id
    }

    /// Remove the item with `id`; returns false if there is none
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(id, "Remove ignored, no such item");
            return false;
        };
        self.items.remove(index);
        self.touch();
        debug!(id, count = self.items.len(), "Removed config item");
        true
    }

    /// Replace one field of the item with `id`, applying input normalization
    pub fn update_field(&mut self, id: u32, update: FieldUpdate) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(id, "Update ignored, no such item");
            return false;
        };
        let field = update.field();
        self.items[index] = self.items[index].with_update(update);
        self.touch();
        debug!(id, ?field, "Updated config item field");
        true
    }

    /// Move the item at `from` to `to`, shifting the items in between
    ///
    /// `to` past the end moves the item to the last slot.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() {
            debug!(from, to, "Move ignored, source out of range");
            return false;
        }
        let to = to.min(self.items.len() - 1);
        if from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.touch();
        debug!(from, to, "Moved config item");
        true
    }

    /// Append a detent at the item's lower bound with its custom strength
    pub fn add_detent_position(&mut self, id: u32) -> bool {
        self.edit_detents(id, |item| {
            let position = numeric::parse_int(&item.min).unwrap_or(0).to_string();
            let strength = item.custom_detent_strength.clone();
            let mut positions = item.detent_positions.clone();
            positions.push(DetentPositionEntry::new(position, strength));
            Some(positions)
        })
    }

    /// Set a detent position, clamped into the item's range when it has end stops
    ///
    /// Text without an integer prefix is stored as typed and left for
    /// validation to flag.
    pub fn set_detent_position(&mut self, id: u32, index: usize, text: &str) -> bool {
        self.edit_detents(id, |item| {
            let committed = match numeric::parse_int(text) {
                Some(position) => match item.bounds() {
                    Some((min, max)) => position.max(min).min(max).to_string(),
                    None => position.to_string(),
                },
                None => text.to_string(),
            };
            let mut positions = item.detent_positions.clone();
            positions.get_mut(index)?.position = committed;
            Some(positions)
        })
    }

    /// Set a detent strength, clamped to [0.0, 9.9] with one decimal
    pub fn set_detent_strength(&mut self, id: u32, index: usize, text: &str) -> bool {
        self.edit_detents(id, |item| {
            let mut positions = item.detent_positions.clone();
            positions.get_mut(index)?.strength = numeric::normalize_strength(text);
            Some(positions)
        })
    }

    pub fn remove_detent_position(&mut self, id: u32, index: usize) -> bool {
        self.edit_detents(id, |item| {
            if index >= item.detent_positions.len() {
                return None;
            }
            let mut positions = item.detent_positions.clone();
            positions.remove(index);
            Some(positions)
        })
    }

    fn edit_detents<F>(&mut self, id: u32, edit: F) -> bool
    where
        F: FnOnce(&ConfigItem) -> Option<Vec<DetentPositionEntry>>,
    {
        let Some(positions) = self.get(id).and_then(edit) else {
            debug!(id, "Detent edit ignored, no such item or entry");
            return false;
        };
        self.update_field(id, FieldUpdate::DetentPositions(positions))
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetentOption;

    fn ids(list: &ItemList) -> Vec<u32> {
        list.items().iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_new_list_has_one_default_item() {
        let list = ItemList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0], ConfigItem::new(1));
        assert_eq!(list.version(), 0);
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut list = ItemList::empty();
        assert_eq!(list.append(), 1);
        assert_eq!(list.append(), 2);
        assert_eq!(list.append(), 3);
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn test_append_continues_after_highest_existing_id() {
        let mut list = ItemList::from_items(vec![ConfigItem::new(4), ConfigItem::new(9), ConfigItem::new(2)]);
        assert_eq!(list.append(), 10);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut list = ItemList::empty();
        list.append();
        let last = list.append();
        assert!(list.remove(last));
        assert_eq!(list.append(), last + 1);

        // Even after the list empties out
        list.remove(1);
        list.remove(last + 1);
        assert!(list.is_empty());
        assert_eq!(list.append(), last + 2);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut list = ItemList::new();
        let version = list.version();
        assert!(!list.remove(42));
        assert_eq!(list.len(), 1);
        assert_eq!(list.version(), version);
    }

    #[test]
    fn test_update_field_replaces_only_target() {
        let mut list = ItemList::new();
        list.append();
        let untouched = list.items()[0].clone();

        assert!(list.update_field(2, FieldUpdate::Name("This name is way too long".into())));
        assert_eq!(list.items()[0], untouched);
        assert_eq!(list.get(2).unwrap().name, "This name is way");
        assert!(!list.update_field(99, FieldUpdate::Name("x".into())));
    }

    #[test]
    fn test_update_bumps_version() {
        let mut list = ItemList::new();
        let before = list.version();
        list.update_field(1, FieldUpdate::EntityId("light.desk".into()));
        assert!(list.version() > before);
    }

    #[test]
    fn test_name_never_exceeds_limit() {
        let mut list = ItemList::new();
        let long = "z".repeat(100);
        for name in ["", "a", "exactly sixteen!", "seventeen chars!!", long.as_str()] {
            list.update_field(1, FieldUpdate::Name(name.to_string()));
            assert!(list.get(1).unwrap().name.chars().count() <= 16);
        }
    }

    #[test]
    fn test_move_forward_splices() {
        let mut list = ItemList::empty();
        list.append();
        list.append();
        list.append();
        list.update_field(1, FieldUpdate::Name("A".into()));
        list.update_field(2, FieldUpdate::Name("B".into()));
        list.update_field(3, FieldUpdate::Name("C".into()));

        assert!(list.move_item(0, 2));
        let names: Vec<&str> = list.items().iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(ids(&list), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_backward_splices() {
        let mut list = ItemList::empty();
        for _ in 0..4 {
            list.append();
        }
        assert!(list.move_item(3, 1));
        assert_eq!(ids(&list), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut list = ItemList::empty();
        list.append();
        list.append();
        assert!(!list.move_item(5, 0));
        assert!(!list.move_item(1, 1));
        // Destination past the end lands on the last slot
        assert!(list.move_item(0, 10));
        assert_eq!(ids(&list), vec![2, 1]);
    }

    #[test]
    fn test_add_detent_position_uses_min_and_custom_strength() {
        let mut list = ItemList::new();
        list.update_field(1, FieldUpdate::Min("3".into()));
        list.update_field(1, FieldUpdate::CustomDetentStrength("1.5".into()));
        assert!(list.add_detent_position(1));
        assert_eq!(list.get(1).unwrap().detent_positions, vec![DetentPositionEntry::new("3", "1.5")]);
    }

    #[test]
    fn test_set_detent_position_clamps_when_bounded() {
        let mut list = ItemList::new();
        list.update_field(1, FieldUpdate::DetentOption(Some(DetentOption::Custom)));
        list.update_field(1, FieldUpdate::Max("10".into()));
        list.add_detent_position(1);

        list.set_detent_position(1, 0, "25");
        assert_eq!(list.get(1).unwrap().detent_positions[0].position, "10");

        list.set_detent_position(1, 0, "-4");
        assert_eq!(list.get(1).unwrap().detent_positions[0].position, "0");

        list.set_detent_position(1, 0, "7");
        assert_eq!(list.get(1).unwrap().detent_positions[0].position, "7");
    }

    #[test]
    fn test_set_detent_position_unbounded_and_garbage() {
        let mut list = ItemList::new();
        list.add_detent_position(1);

        list.set_detent_position(1, 0, "500");
        assert_eq!(list.get(1).unwrap().detent_positions[0].position, "500");

        list.set_detent_position(1, 0, "abc");
        assert_eq!(list.get(1).unwrap().detent_positions[0].position, "abc");

        assert!(!list.set_detent_position(1, 3, "1"));
    }

    #[test]
    fn test_set_detent_strength_normalizes() {
        let mut list = ItemList::new();
        list.add_detent_position(1);
        list.set_detent_strength(1, 0, "42");
        assert_eq!(list.get(1).unwrap().detent_positions[0].strength, "9.9");
    }

    #[test]
    fn test_remove_detent_position_keeps_order() {
        let mut list = ItemList::new();
        for position in ["1", "2", "3"] {
            list.add_detent_position(1);
            let last = list.get(1).unwrap().detent_positions.len() - 1;
            list.set_detent_position(1, last, position);
        }
        assert!(list.remove_detent_position(1, 1));
        let positions: Vec<&str> = list.get(1).unwrap().detent_positions.iter().map(|e| e.position.as_str()).collect();
        assert_eq!(positions, vec!["1", "3"]);
        assert!(!list.remove_detent_position(1, 5));
    }

    #[test]
    fn test_is_valid_tracks_items() {
        let mut list = ItemList::new();
        assert!(!list.is_valid());
        list.update_field(1, FieldUpdate::Name("Fan".into()));
        list.update_field(1, FieldUpdate::EntityId("fan.bedroom".into()));
        list.update_field(1, FieldUpdate::DetentOption(Some(DetentOption::WeakDetents)));
        assert!(list.is_valid());
    }
}

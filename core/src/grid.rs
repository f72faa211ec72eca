use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::num::Saturating;
use core::ops::Index;
use serde::Serialize;

use crate::*;

/// Fixed, ordered collection of items laid out row-major on a near-square grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridModel {
    items: Vec<Item>,
    discovered_count: Saturating<CellCount>,
}

impl GridModel {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(GameError::EmptyGrid);
        }

        let mut seen = BTreeSet::new();
        if !items.iter().all(|item| seen.insert(item.id())) {
            return Err(GameError::DuplicateId);
        }

        let discovered_count = items.iter().filter(|item| item.is_discovered()).count();
        Ok(Self {
            items,
            discovered_count: Saturating(discovered_count),
        })
    }

    /// Builds a grid from a JSON array of `{id, category, title, body}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json).map_err(|err| {
            log::warn!("invalid catalog: {}", err);
            GameError::InvalidCatalog
        })?;
        Self::new(items)
    }

    pub fn len(&self) -> CellCount {
        self.items.len()
    }

    /// Always false, a grid holds at least one item.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn side(&self) -> CellCount {
        grid_side(self.len())
    }

    pub fn discovered_count(&self) -> CellCount {
        self.discovered_count.0
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: CellIndex) -> Result<&Item> {
        self.items.get(index).ok_or(GameError::InvalidIndex)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn is_discovered(&self, index: CellIndex) -> bool {
        self.items[index].is_discovered()
    }

    /// Grid index of the item with `id`, used to route badge clicks back to a cell.
    pub fn index_of(&self, id: ItemId) -> Option<CellIndex> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Discovered items in grid order, paired with their index.
    pub fn discovered_items(&self) -> impl Iterator<Item = (CellIndex, &Item)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_discovered())
    }

    /// Marks the item at `index` discovered. Returns `true` only on the first call.
    pub fn discover(&mut self, index: CellIndex) -> Result<bool> {
        let index = self.validate_index(index)?;
        let item = &mut self.items[index];

        if item.is_discovered() {
            return Ok(false);
        }

        item.mark_discovered();
        let id = item.id();
        self.discovered_count += 1;
        log::debug!(
            "discovered item {} ({}/{})",
            id,
            self.discovered_count.0,
            self.items.len()
        );
        Ok(true)
    }
}

impl Index<CellIndex> for GridModel {
    type Output = Item;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn items(n: u32) -> Vec<Item> {
        (0..n)
            .map(|i| Item::new(ItemId(i), Category::Facts, format!("t{i}"), format!("b{i}")))
            .collect()
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(GridModel::new(Vec::new()), Err(GameError::EmptyGrid));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut list = items(3);
        list.push(Item::new(ItemId(1), Category::Skills, "dup", "dup"));

        assert_eq!(GridModel::new(list), Err(GameError::DuplicateId));
    }

    #[test]
    fn discover_counts_each_item_once() {
        let mut grid = GridModel::new(items(4)).unwrap();

        assert_eq!(grid.discover(2), Ok(true));
        assert_eq!(grid.discover(2), Ok(false));
        assert_eq!(grid.discover(0), Ok(true));

        assert_eq!(grid.discovered_count(), 2);
        assert!(grid.is_discovered(2));
        assert!(!grid.is_discovered(1));
    }

    #[test]
    fn discover_out_of_range_leaves_grid_untouched() {
        let mut grid = GridModel::new(items(4)).unwrap();
        let before = grid.clone();

        assert_eq!(grid.discover(4), Err(GameError::InvalidIndex));
        assert_eq!(grid, before);
    }

    #[test]
    fn discovered_items_follow_grid_order() {
        let mut grid = GridModel::new(items(5)).unwrap();
        grid.discover(3).unwrap();
        grid.discover(1).unwrap();

        let found: Vec<_> = grid.discovered_items().map(|(i, item)| (i, item.id())).collect();

        assert_eq!(found, [(1, ItemId(1)), (3, ItemId(3))]);
    }

    #[test]
    fn index_of_finds_cell_by_id() {
        let grid = GridModel::new(items(3)).unwrap();

        assert_eq!(grid.index_of(ItemId(2)), Some(2));
        assert_eq!(grid.index_of(ItemId(9)), None);
    }

    #[test]
    fn from_json_parses_catalog() {
        let json = r#"[
            {"id": 10, "category": "skills", "title": "Rust", "body": "Systems work."},
            {"id": 11, "category": "education", "title": "CS", "body": "Degree."}
        ]"#;

        let grid = GridModel::from_json(json).unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.side(), 2);
        assert_eq!(grid[1].category(), Category::Education);
        assert_eq!(grid.discovered_count(), 0);
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert_eq!(
            GridModel::from_json(r#"[{"id": 1}]"#),
            Err(GameError::InvalidCatalog)
        );
        assert_eq!(GridModel::from_json("[]"), Err(GameError::EmptyGrid));
    }
}

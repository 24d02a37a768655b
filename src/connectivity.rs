use crate::cells::Cell;
use crate::grid::Grid;
use crate::units::CellsCount;
use crate::utils::{self, FnvHashSet};

/// Tracks which cells have been joined into one chamber as walls come down.
///
/// Cells start in an unmerged pool - singleton chambers that are never
/// materialised as sets. Accepting a wall moves its cells out of the pool
/// and into a merged component, or fuses two components into one. The pool
/// plus the components always partition the full cell set.
///
/// Lookups scan the component list, which is linear in the number of live
/// components. A disjoint-set forest would answer the same queries faster,
/// but `connected` is the only observable here and both give it identically;
/// for the 50x50 ceiling the scan is plenty.
#[derive(Debug)]
pub struct ComponentTracker {
    unmerged: FnvHashSet<Cell>,
    components: Vec<FnvHashSet<Cell>>,
}

impl ComponentTracker {
    /// A fresh tracker for one generation run: every cell unmerged, no
    /// components.
    pub fn new(grid: &Grid) -> ComponentTracker {
        let CellsCount(cells_count) = grid.size();
        let mut unmerged = utils::fnv_hashset(cells_count);
        unmerged.extend(grid.cells());

        ComponentTracker {
            unmerged: unmerged,
            components: Vec::new(),
        }
    }

    /// Is there already a passage route between `a` and `b`? A cell is always
    /// connected to itself. Two unmerged cells, or cells of two different
    /// components, are not connected.
    pub fn connected(&self, a: Cell, b: Cell) -> bool {
        a == b ||
        self.components
            .iter()
            .any(|component| component.contains(&a) && component.contains(&b))
    }

    /// Record that the wall between `a` and `b` has been removed.
    ///
    /// Contract: `!self.connected(a, b)`. The maze builder always checks
    /// before unioning, so a violation is a programming error and panics.
    pub fn union(&mut self, a: Cell, b: Cell) {
        assert!(!self.connected(a, b),
                "union precondition broken: {} and {} are already connected",
                a,
                b);

        match (self.unmerged.remove(&a), self.unmerged.remove(&b)) {
            (true, true) => self.create_component(a, b),
            (false, true) => self.absorb_into_component_of(a, b),
            (true, false) => self.absorb_into_component_of(b, a),
            (false, false) => self.merge_components(a, b),
        }
    }

    #[inline]
    pub fn unmerged_count(&self) -> usize {
        self.unmerged.len()
    }

    #[inline]
    pub fn components_count(&self) -> usize {
        self.components.len()
    }

    /// True once a single component holds every cell of the grid.
    pub fn is_fully_connected(&self, cells_count: CellsCount) -> bool {
        self.unmerged.is_empty() && self.components.len() == 1 &&
        self.components[0].len() == cells_count.0
    }

    fn create_component(&mut self, a: Cell, b: Cell) {
        let mut component = utils::fnv_hashset(2);
        component.insert(a);
        component.insert(b);
        self.components.push(component);
    }

    fn absorb_into_component_of(&mut self, merged: Cell, newcomer: Cell) {
        let component_index = self.component_index_of(merged);
        self.components[component_index].insert(newcomer);
    }

    fn merge_components(&mut self, a: Cell, b: Cell) {
        let keep_index = self.component_index_of(a);
        let evict_index = self.component_index_of(b);
        let evicted = self.components.swap_remove(evict_index);

        // swap_remove moves the last component into the vacated slot
        let keep_index = if keep_index == self.components.len() {
            evict_index
        } else {
            keep_index
        };
        self.components[keep_index].extend(evicted);
    }

    fn component_index_of(&self, cell: Cell) -> usize {
        self.components
            .iter()
            .position(|component| component.contains(&cell))
            .expect("merged cell missing from every component")
    }
}

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::UnitDescriptor;

/// Units assigned to a single column, with their summed height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnGroup<'u> {
    units: Vec<&'u UnitDescriptor>,
    total_height: u64,
}

impl<'u> ColumnGroup<'u> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[&'u UnitDescriptor] {
        &self.units
    }

    pub fn total_height(&self) -> u64 {
        self.total_height
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// First unit of the column; the tallest once the result is normalized.
    pub fn first(&self) -> Option<&'u UnitDescriptor> {
        self.units.first().copied()
    }

    pub fn heights(&self) -> Vec<u32> {
        self.units.iter().map(|unit| unit.height).collect()
    }

    pub(crate) fn fits(&self, height: u32, capacity: u32) -> bool {
        self.total_height + u64::from(height) <= u64::from(capacity)
    }

    pub(crate) fn push(&mut self, unit: &'u UnitDescriptor) {
        self.total_height += u64::from(unit.height);
        self.units.push(unit);
    }

    pub(crate) fn sort_tallest_first(&mut self) {
        self.units.sort_by(|a, b| b.height.cmp(&a.height));
    }
}

/// Columns ranked by first unit height, descending; empty columns last.
pub(crate) fn column_order(a: &ColumnGroup<'_>, b: &ColumnGroup<'_>) -> Ordering {
    match (a.first(), b.first()) {
        (Some(a), Some(b)) => b.height.cmp(&a.height),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Outcome of one packing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackingResult<'u> {
    capacity: u32,
    columns: Vec<ColumnGroup<'u>>,
    overflowed: Vec<&'u UnitDescriptor>,
}

impl<'u> PackingResult<'u> {
    pub(crate) fn new(
        capacity: u32,
        columns: Vec<ColumnGroup<'u>>,
        overflowed: Vec<&'u UnitDescriptor>,
    ) -> Self {
        Self {
            capacity,
            columns,
            overflowed,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// All columns, `max_columns` of them, including empty ones.
    pub fn columns(&self) -> &[ColumnGroup<'u>] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&ColumnGroup<'u>> {
        self.columns.get(index)
    }

    /// Units that did not fit in any column, in the order they were tried.
    pub fn overflowed(&self) -> &[&'u UnitDescriptor] {
        &self.overflowed
    }

    pub fn placed_count(&self) -> usize {
        self.columns.iter().map(ColumnGroup::len).sum()
    }

    pub fn overflow_count(&self) -> usize {
        self.overflowed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.overflowed.is_empty()
    }

    pub fn used_columns(&self) -> usize {
        self.columns.iter().filter(|column| !column.is_empty()).count()
    }

    /// Placed units, column by column.
    pub fn placed(&self) -> impl Iterator<Item = &'u UnitDescriptor> + '_ {
        self.columns
            .iter()
            .flat_map(|column| column.units().iter().copied())
    }

    pub fn column_heights(&self) -> Vec<Vec<u32>> {
        self.columns.iter().map(ColumnGroup::heights).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_is_inclusive_of_capacity() {
        let unit = UnitDescriptor::new("a", 60, 10);
        let mut column = ColumnGroup::new();
        assert!(column.fits(100, 100));
        column.push(&unit);
        assert!(column.fits(40, 100));
        assert!(!column.fits(41, 100));
        assert_eq!(column.total_height(), 60);
    }

    #[test]
    fn empty_columns_order_after_non_empty() {
        let unit = UnitDescriptor::new("a", 5, 10);
        let mut filled = ColumnGroup::new();
        filled.push(&unit);
        let empty = ColumnGroup::new();

        assert_eq!(column_order(&filled, &empty), Ordering::Less);
        assert_eq!(column_order(&empty, &filled), Ordering::Greater);
        assert_eq!(column_order(&empty, &empty), Ordering::Equal);
    }
}

use crate::catalog::{UnitCatalog, UnitDescriptor};
use crate::error::{PanelError, Result};

/// Parse one raw selection into a quantity.
///
/// Surrounding whitespace is ignored. Anything else that is not a
/// non-negative integer (signs, decimals, empty input) is rejected.
pub fn parse_quantity(index: usize, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PanelError::InvalidQuantity {
            index,
            value: raw.to_string(),
        });
    }
    trimmed.parse::<u32>().map_err(|_| PanelError::InvalidQuantity {
        index,
        value: raw.to_string(),
    })
}

/// Parse a full selection vector, failing on the first bad entry.
pub fn parse_quantities<S: AsRef<str>>(raw: &[S]) -> Result<Vec<u32>> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| parse_quantity(index, value.as_ref()))
        .collect()
}

/// Expand per-entry quantities into a flat unit sequence.
///
/// Entry `i` appears `quantities[i]` times, consecutively, in catalog
/// order. The returned references borrow the catalog; nothing is copied.
pub fn expand_units<'c>(
    catalog: &'c UnitCatalog,
    quantities: &[u32],
) -> Result<Vec<&'c UnitDescriptor>> {
    if quantities.len() != catalog.len() {
        return Err(PanelError::QuantityCountMismatch {
            expected: catalog.len(),
            actual: quantities.len(),
        });
    }

    let total: usize = quantities.iter().map(|&q| q as usize).sum();
    let mut units = Vec::with_capacity(total);
    for (entry, &quantity) in catalog.iter().zip(quantities) {
        units.extend(std::iter::repeat_n(entry, quantity as usize));
    }
    Ok(units)
}

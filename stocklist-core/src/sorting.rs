//! Column sorting for the catalog table.
//!
//! Three independent toggles (name, price, stock). A click reads the
//! column's current toggle, sorts the visible rows the opposite way of an
//! ascending toggle (ascending otherwise), and stores the direction it
//! actually applied. Clicking one column leaves the other toggles alone.

use std::cmp::Ordering;

use feruca::Collator;
use stocklist_model::Product;

use crate::normalize::normalize;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Name,
    Price,
    Stock,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] =
        [SortColumn::Name, SortColumn::Price, SortColumn::Stock];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Price => "price",
            SortColumn::Stock => "stock",
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "price" => Ok(SortColumn::Price),
            "stock" => Ok(SortColumn::Stock),
            other => Err(format!(
                "unknown sort column '{other}' (expected name, price or stock)"
            )),
        }
    }
}

/// Per-column sort state. `Unset` means the column has never been clicked
/// in this mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Unset,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Direction the next click applies.
    pub fn next(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Unset | SortDirection::Descending => {
                SortDirection::Ascending
            }
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
            SortDirection::Unset => "",
        }
    }
}

/// The three column toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortToggles {
    pub name: SortDirection,
    pub price: SortDirection,
    pub stock: SortDirection,
}

impl SortToggles {
    pub fn get(&self, column: SortColumn) -> SortDirection {
        match column {
            SortColumn::Name => self.name,
            SortColumn::Price => self.price,
            SortColumn::Stock => self.stock,
        }
    }

    fn slot(&mut self, column: SortColumn) -> &mut SortDirection {
        match column {
            SortColumn::Name => &mut self.name,
            SortColumn::Price => &mut self.price,
            SortColumn::Stock => &mut self.stock,
        }
    }

    /// Advance `column`'s toggle and return the direction to apply.
    pub fn click(&mut self, column: SortColumn) -> SortDirection {
        let slot = self.slot(column);
        *slot = slot.next();
        *slot
    }
}

/// Stable in-place sort of the visible rows. `Unset` leaves them untouched.
pub fn sort_products(
    items: &mut Vec<Product>,
    column: SortColumn,
    direction: SortDirection,
) {
    let descending = match direction {
        SortDirection::Unset => return,
        SortDirection::Ascending => false,
        SortDirection::Descending => true,
    };
    let orient = |ord: Ordering| if descending { ord.reverse() } else { ord };

    match column {
        SortColumn::Name => {
            let mut collator = Collator::default();
            let mut keyed: Vec<(String, Product)> = items
                .drain(..)
                .map(|product| (normalize(&product.name), product))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| {
                orient(collator.collate(a.as_str(), b.as_str()))
            });
            items.extend(keyed.into_iter().map(|(_, product)| product));
        }
        SortColumn::Price => {
            items.sort_by(|a, b| orient(compare_price(a.price(), b.price())));
        }
        SortColumn::Stock => {
            items.sort_by(|a, b| orient(a.stock.cmp(&b.stock)));
        }
    }
}

/// Missing prices order below every present price.
fn compare_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

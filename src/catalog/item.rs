use std::fmt;
use std::rc::Rc;

use tabled::Tabled;

/// Shared handle to an item. The catalog sequence is the logical owner;
/// indexes, the undo history, and the urgent queue hold extra handles to the
/// same allocation.
pub type ItemRef = Rc<Item>;

/// A single catalog record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct Item {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Price")]
    pub price: f64,
}

impl Item {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price,
        }
    }

    /// Whether this item belongs on the urgent worklist at insert time.
    pub fn is_urgent(&self) -> bool {
        self.category.eq_ignore_ascii_case("urgent")
    }

    /// Case-insensitive category match, used by category scans.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Description: {}, Category: {}, Price: ${}",
            self.id, self.name, self.description, self.category, self.price
        )
    }
}

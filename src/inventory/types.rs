use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product category for an inventory item.
///
/// Wire form matches the persisted document and the HTTP surface
/// (e.g. `"Office Supplies"` with a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Furniture,
    Other,
}

impl Category {
    /// The wire/display label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::OfficeSupplies => "Office Supplies",
            Category::Furniture => "Furniture",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "electronics" => Ok(Category::Electronics),
            "office supplies" | "office-supplies" => Ok(Category::OfficeSupplies),
            "furniture" => Ok(Category::Furniture),
            "other" => Ok(Category::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// One inventory record.
///
/// `id` is assigned by the service on create and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: Category,
}

/// Create payload: an item minus its server-generated id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: Category,
}

/// Partial update payload. Absent fields leave the stored value untouched;
/// there is no `id` field because identity is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Item {
    /// Shallow-merge a patch over this item, field by field.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Field the derived view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Quantity,
    Price,
    Category,
}

#[derive(Debug, Error)]
#[error("unknown sort field '{0}'")]
pub struct ParseSortFieldError(String);

impl std::str::FromStr for SortField {
    type Err = ParseSortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "quantity" => Ok(SortField::Quantity),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            _ => Err(ParseSortFieldError(s.to_string())),
        }
    }
}

/// Direction of the derived view's sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

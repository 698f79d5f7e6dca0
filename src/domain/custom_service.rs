use serde::{Deserialize, Serialize};

use super::common::coerce;

/// Longest item name kept after normalization, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 40;
/// Item cap per category enforced when appending through the state store.
pub const MAX_ITEMS_PER_CATEGORY: usize = 10;

/// The four fixed buckets of itemized service revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "OT")]
    Ot,
    #[serde(rename = "SLD")]
    Sld,
    #[serde(rename = "PHYSC")]
    Physc,
    #[serde(rename = "APA")]
    Apa,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Ot,
        ServiceCategory::Sld,
        ServiceCategory::Physc,
        ServiceCategory::Apa,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ServiceCategory::Ot => "OT",
            ServiceCategory::Sld => "SLD",
            ServiceCategory::Physc => "PHYSC",
            ServiceCategory::Apa => "APA",
        }
    }
}

/// A single revenue line, e.g. one employee's billed services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomServiceItem {
    pub name: String,
    pub value: f64,
}

impl CustomServiceItem {
    /// Builds a normalized item: the name is cut to 40 characters and
    /// negative or NaN values become 0.
    pub fn new(name: impl AsRef<str>, value: f64) -> Self {
        Self {
            name: truncate_name(name.as_ref()),
            value: if value >= 0.0 { value } else { 0.0 },
        }
    }
}

pub(crate) fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_ITEM_NAME_LEN).collect()
}

/// Always carries exactly the four category keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomServiceCategories {
    #[serde(rename = "OT", default)]
    pub ot: Vec<CustomServiceItem>,
    #[serde(rename = "SLD", default)]
    pub sld: Vec<CustomServiceItem>,
    #[serde(rename = "PHYSC", default)]
    pub physc: Vec<CustomServiceItem>,
    #[serde(rename = "APA", default)]
    pub apa: Vec<CustomServiceItem>,
}

impl CustomServiceCategories {
    pub fn items(&self, category: ServiceCategory) -> &[CustomServiceItem] {
        match category {
            ServiceCategory::Ot => &self.ot,
            ServiceCategory::Sld => &self.sld,
            ServiceCategory::Physc => &self.physc,
            ServiceCategory::Apa => &self.apa,
        }
    }

    pub fn items_mut(&mut self, category: ServiceCategory) -> &mut Vec<CustomServiceItem> {
        match category {
            ServiceCategory::Ot => &mut self.ot,
            ServiceCategory::Sld => &mut self.sld,
            ServiceCategory::Physc => &mut self.physc,
            ServiceCategory::Apa => &mut self.apa,
        }
    }

    pub fn with_item(mut self, category: ServiceCategory, item: CustomServiceItem) -> Self {
        self.items_mut(category).push(item);
        self
    }

    /// Sum of every item value across all four categories.
    pub fn total(&self) -> f64 {
        ServiceCategory::ALL
            .iter()
            .flat_map(|category| self.items(*category))
            .map(|item| coerce(item.value))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        ServiceCategory::ALL
            .iter()
            .all(|category| self.items(*category).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_constructor_normalizes_name_and_value() {
        let item = CustomServiceItem::new("y".repeat(55), -3.0);
        assert_eq!(item.name.chars().count(), MAX_ITEM_NAME_LEN);
        assert_eq!(item.value, 0.0);

        let nan = CustomServiceItem::new("nan", f64::NAN);
        assert_eq!(nan.value, 0.0);
    }

    #[test]
    fn total_spans_all_categories() {
        let services = CustomServiceCategories::default()
            .with_item(ServiceCategory::Ot, CustomServiceItem::new("Alice", 100.0))
            .with_item(ServiceCategory::Sld, CustomServiceItem::new("Bob", 50.0))
            .with_item(ServiceCategory::Apa, CustomServiceItem::new("Cara", 25.5));
        assert_eq!(services.total(), 175.5);
        assert!(!services.is_empty());
    }

    #[test]
    fn serializes_with_fixed_category_keys() {
        let json = serde_json::to_value(CustomServiceCategories::default()).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 4);
        for key in ["OT", "SLD", "PHYSC", "APA"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}

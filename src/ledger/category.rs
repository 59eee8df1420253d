use std::{
    collections::HashMap,
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ForecastError;

/// Closed set of tags classifying what a transaction is for.
///
/// Declaration order is the canonical iteration order used everywhere a stable
/// category ordering matters (totals maps, ranking ties).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Investments,
    Gifts,
    Food,
    Transport,
    Leisure,
    Health,
    Education,
    Housing,
    Utilities,
    Clothing,
    Other,
}

/// Direction a category usually carries money in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Income,
    Expense,
}

impl Category {
    pub const COUNT: usize = 12;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Salary,
        Category::Investments,
        Category::Gifts,
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Health,
        Category::Education,
        Category::Housing,
        Category::Utilities,
        Category::Clothing,
        Category::Other,
    ];

    /// Lowercase tag used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Investments => "investments",
            Category::Gifts => "gifts",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Leisure => "leisure",
            Category::Health => "health",
            Category::Education => "education",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Clothing => "clothing",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Investments => "Investments",
            Category::Gifts => "Gifts",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Leisure => "Leisure",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Housing => "Housing",
            Category::Utilities => "Bills & utilities",
            Category::Clothing => "Clothing",
            Category::Other => "Other",
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Salary | Category::Investments | Category::Gifts => CategoryKind::Income,
            _ => CategoryKind::Expense,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ForecastError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| ForecastError::UnknownCategory(value.to_string()))
    }
}

/// Tags decode through [`FromStr`], so `"Food"` on the wire reads the same as
/// `"food"` on the command line.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-category amounts with one slot for every [`Category`].
///
/// Every category is present from construction, so lookups never miss.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryTotals([f64; Category::COUNT]);

impl CategoryTotals {
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    pub fn add(&mut self, category: Category, amount: f64) {
        self.0[category.index()] += amount;
    }

    /// Iterates `(category, amount)` pairs in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }
}

impl Index<Category> for CategoryTotals {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.0[category.index()]
    }
}

impl IndexMut<Category> for CategoryTotals {
    fn index_mut(&mut self, category: Category) -> &mut f64 {
        &mut self.0[category.index()]
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, amount) in self.iter() {
            map.serialize_entry(category.as_str(), &amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryTotals {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<Category, f64>::deserialize(deserializer)?;
        let mut totals = CategoryTotals::zeroed();
        for (category, amount) in raw {
            totals[category] = amount;
        }
        Ok(totals)
    }
}

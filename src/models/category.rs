use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Accommodation,
    Transportation,
    Food,
    Miscellaneous,
}

impl Category {
    pub const COUNT: usize = 4;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Transportation => "Transportation",
            Self::Food => "Food",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Parse a category name or short alias, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "accommodation" | "lodging" | "hotel" => Some(Self::Accommodation),
            "transportation" | "transport" | "travel" => Some(Self::Transportation),
            "food" | "meals" => Some(Self::Food),
            "miscellaneous" | "misc" | "other" => Some(Self::Miscellaneous),
            _ => None,
        }
    }

    /// All categories in prompt and report order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Accommodation,
            Self::Transportation,
            Self::Food,
            Self::Miscellaneous,
        ]
    }

    fn index(self) -> usize {
        match self {
            Self::Accommodation => 0,
            Self::Transportation => 1,
            Self::Food => 2,
            Self::Miscellaneous => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One value per category. The key set is fixed, so lookups never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMap<T> {
    values: [T; Category::COUNT],
}

impl<T: Copy> CategoryMap<T> {
    pub fn filled(value: T) -> Self {
        Self {
            values: [value; Category::COUNT],
        }
    }
}

impl<T> CategoryMap<T> {
    /// Iterate `(category, &value)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::all().iter().copied().zip(self.values.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.values[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.values[category.index()]
    }
}

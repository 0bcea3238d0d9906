use std::str::FromStr;

use super::NormalizeError;

/// Category codes used by the exported database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Alcohol,
    Exceptional,
    Grocery,
    Health,
    Leisure,
    Regular,
    Restaurant,
    Trip,
}

impl Category {
    /// French display label written to the `Type` column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Alcohol => "Alcool",
            Category::Exceptional => "Exceptionnelle",
            Category::Grocery => "Course",
            Category::Health => "Santé",
            Category::Leisure => "Plaisir",
            Category::Regular => "Régulier",
            Category::Restaurant => "Restaurant",
            Category::Trip => "Voyage",
        }
    }
}

impl FromStr for Category {
    type Err = NormalizeError;

    fn from_str(code: &str) -> Result<Category, Self::Err> {
        match code {
            "alcohol" => Ok(Category::Alcohol),
            "exceptional" => Ok(Category::Exceptional),
            "grocery" => Ok(Category::Grocery),
            "health" => Ok(Category::Health),
            "leisure" => Ok(Category::Leisure),
            "regular" => Ok(Category::Regular),
            "restaurant" => Ok(Category::Restaurant),
            "trip" => Ok(Category::Trip),
            _ => Err(NormalizeError::UnknownCategory(code.to_string())),
        }
    }
}

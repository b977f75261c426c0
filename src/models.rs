use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CocoError;

/// Bookkeeping categories for the shop's ledger. Every record starts out
/// `Uncategorized`; the user assigns one of the others before export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Ingredients,
    Packaging,
    Utilities,
    Advertising,
    Artwork,
    Uncategorized,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Ingredients,
        Category::Packaging,
        Category::Utilities,
        Category::Advertising,
        Category::Artwork,
        Category::Uncategorized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ingredients => "Ingredients",
            Category::Packaging => "Packaging",
            Category::Utilities => "Utilities",
            Category::Advertising => "Advertising",
            Category::Artwork => "Artwork",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl FromStr for Category {
    type Err = CocoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" => Ok(Category::Ingredients),
            "packaging" => Ok(Category::Packaging),
            "utilities" => Ok(Category::Utilities),
            "advertising" => Ok(Category::Advertising),
            "artwork" => Ok(Category::Artwork),
            "uncategorized" => Ok(Category::Uncategorized),
            _ => Err(CocoError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single transaction reconstructed from one statement block.
///
/// Ids are assigned sequentially in parse order and are the stable key
/// used to correlate selections and category assignments with records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("ingredients".parse::<Category>().unwrap(), Category::Ingredients);
        assert_eq!("PACKAGING".parse::<Category>().unwrap(), Category::Packaging);
        assert_eq!("  Artwork ".parse::<Category>().unwrap(), Category::Artwork);
    }

    #[test]
    fn test_category_from_str_unknown() {
        let err = "snacks".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("snacks"));
    }

    #[test]
    fn test_category_round_trips_through_as_str() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), *cat);
        }
    }
}

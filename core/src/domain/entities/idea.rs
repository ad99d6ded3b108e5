//! Idea entity submitted by members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Category an idea belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Food,
    Education,
    Environment,
    Social,
    Health,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Food,
        Category::Education,
        Category::Environment,
        Category::Social,
        Category::Health,
    ];

    /// Canonical name as stored and returned by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Food => "Food",
            Category::Education => "Education",
            Category::Environment => "Environment",
            Category::Social => "Social",
            Category::Health => "Health",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses the exact canonical name; category names are case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownCategory { value: s.to_string() })
    }
}

/// Idea entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    /// Unique identifier for the idea
    pub id: Uuid,

    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Category
    pub category: Category,

    /// Email of the submitting member
    pub email: String,

    /// Timestamp when the idea was submitted
    pub created_at: DateTime<Utc>,
}

impl Idea {
    /// Creates a new Idea, trimming title, description and email
    pub fn new(title: &str, description: &str, category: Category, email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            category,
            email: email.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Technology".parse::<Category>().unwrap(), Category::Technology);
        assert_eq!(
            "food".parse::<Category>().unwrap_err(),
            ValidationError::UnknownCategory { value: "food".to_string() }
        );
        assert!("Sports".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_display_matches_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_new_idea_trims_fields() {
        let idea = Idea::new("  Solar carts ", " Vending carts with panels ", Category::Environment, " asha@example.com");
        assert_eq!(idea.title, "Solar carts");
        assert_eq!(idea.description, "Vending carts with panels");
        assert_eq!(idea.email, "asha@example.com");
    }
}

//! Idea submission and listing

use std::str::FromStr;
use std::sync::Arc;

use im_shared::utils::is_valid_email;

use crate::domain::entities::idea::{Category, Idea};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::content::IdeaRepository;

/// Which ideas to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaFilter {
    All,
    Category(Category),
}

impl FromStr for IdeaFilter {
    type Err = ValidationError;

    /// `"all"` in any case selects every idea; anything else must name a category
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(IdeaFilter::All)
        } else {
            Category::from_str(s).map(IdeaFilter::Category)
        }
    }
}

impl IdeaFilter {
    fn category(self) -> Option<Category> {
        match self {
            IdeaFilter::All => None,
            IdeaFilter::Category(category) => Some(category),
        }
    }
}

pub struct IdeaService<R: IdeaRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: IdeaRepository + ?Sized> IdeaService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a new idea
    pub async fn create(
        &self,
        title: &str,
        description: &str,
        category: &str,
        email: &str,
    ) -> DomainResult<Idea> {
        require("title", title)?;
        require("description", description)?;
        require("category", category)?;
        let category = Category::from_str(category.trim())?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let idea = self
            .repository
            .create(Idea::new(title, description, category, email))
            .await?;

        tracing::info!(idea_id = %idea.id, category = %idea.category, event = "idea_created", "Idea created");
        Ok(idea)
    }

    /// List ideas newest first
    pub async fn list(&self, filter: IdeaFilter) -> DomainResult<Vec<Idea>> {
        self.repository.list(filter.category()).await
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::RequiredField { field: field.to_string() })
    } else {
        Ok(())
    }
}

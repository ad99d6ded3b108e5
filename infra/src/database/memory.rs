//! In-memory repository implementations
//!
//! Used when no `DATABASE_URL` is configured and by the API integration
//! tests. Contents are lost when the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use im_core::domain::entities::{Account, Category, Feedback, Idea};
use im_core::errors::{AuthError, DomainError};
use im_core::repositories::{AccountRepository, FeedbackRepository, IdeaRepository};

/// Accounts keyed by email
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }
}

/// Ideas in insertion order
#[derive(Default)]
pub struct InMemoryIdeaRepository {
    ideas: RwLock<Vec<Idea>>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdeaRepository for InMemoryIdeaRepository {
    async fn create(&self, idea: Idea) -> Result<Idea, DomainError> {
        self.ideas.write().await.push(idea.clone());
        Ok(idea)
    }

    async fn list(&self, category: Option<Category>) -> Result<Vec<Idea>, DomainError> {
        let ideas = self.ideas.read().await;
        let mut selected: Vec<Idea> = ideas
            .iter()
            .filter(|idea| category.map_or(true, |c| idea.category == c))
            .cloned()
            .collect();
        // Stable sort keeps later insertions first among equal timestamps
        selected.reverse();
        selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(selected)
    }
}

#[derive(Default)]
pub struct InMemoryFeedbackRepository {
    entries: RwLock<Vec<Feedback>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        self.entries.write().await.push(feedback.clone());
        Ok(feedback)
    }
}

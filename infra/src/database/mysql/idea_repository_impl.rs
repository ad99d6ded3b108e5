//! MySQL implementation of the IdeaRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use std::str::FromStr;
use uuid::Uuid;

use im_core::domain::entities::idea::{Category, Idea};
use im_core::errors::DomainError;
use im_core::repositories::IdeaRepository;

use super::{column_error, query_failed};

pub struct MySqlIdeaRepository {
    pool: MySqlPool,
}

impl MySqlIdeaRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_idea(row: &sqlx::mysql::MySqlRow) -> Result<Idea, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let category: String = row.try_get("category").map_err(|e| column_error("category", e))?;

        Ok(Idea {
            id: Uuid::parse_str(&id).map_err(|e| column_error("id", e))?,
            title: row.try_get("title").map_err(|e| column_error("title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| column_error("description", e))?,
            category: Category::from_str(&category).map_err(|e| column_error("category", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl IdeaRepository for MySqlIdeaRepository {
    async fn create(&self, idea: Idea) -> Result<Idea, DomainError> {
        let query = r#"
            INSERT INTO ideas (id, title, description, category, email, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(idea.id.to_string())
            .bind(&idea.title)
            .bind(&idea.description)
            .bind(idea.category.as_str())
            .bind(&idea.email)
            .bind(idea.created_at)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(idea)
    }

    async fn list(&self, category: Option<Category>) -> Result<Vec<Idea>, DomainError> {
        let rows = match category {
            Some(category) => {
                sqlx::query(
                    r#"
                    SELECT id, title, description, category, email, created_at
                    FROM ideas
                    WHERE category = ?
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(category.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, title, description, category, email, created_at
                    FROM ideas
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(query_failed)?;

        rows.iter().map(Self::row_to_idea).collect()
    }
}

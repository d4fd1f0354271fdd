use log::debug;
use std::sync::Arc;

use super::categories_model::{Category, CategoryUpdate, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::Result;

/// Service for managing the global category catalog
pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    /// Creates a new CategoryService instance
    pub fn new(category_repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait::async_trait]
impl CategoryServiceTrait for CategoryService {
    fn list_categories(&self, category_type_filter: Option<&str>) -> Result<Vec<Category>> {
        self.category_repository.list(category_type_filter)
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        self.category_repository.get_by_id(category_id)
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        debug!(
            "Creating category {} ({})",
            new_category.name, new_category.category_type
        );
        self.category_repository.create(new_category)
    }

    async fn update_category(&self, category_update: CategoryUpdate) -> Result<Category> {
        self.category_repository.update(category_update)
    }

    async fn delete_category(&self, category_id: &str) -> Result<()> {
        debug!("Deleting category {}", category_id);
        self.category_repository.delete(category_id)?;
        Ok(())
    }
}

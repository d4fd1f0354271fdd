use async_trait::async_trait;

use super::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::Result;

/// Trait defining the contract for Category repository operations.
pub trait CategoryRepositoryTrait: Send + Sync {
    fn list(&self, category_type_filter: Option<&str>) -> Result<Vec<Category>>;
    fn get_by_id(&self, category_id: &str) -> Result<Category>;
    fn create(&self, new_category: NewCategory) -> Result<Category>;
    fn update(&self, category_update: CategoryUpdate) -> Result<Category>;
    fn delete(&self, category_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn list_categories(&self, category_type_filter: Option<&str>) -> Result<Vec<Category>>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
    async fn update_category(&self, category_update: CategoryUpdate) -> Result<Category>;
    async fn delete_category(&self, category_id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use crate::categories::categories_constants::{CATEGORY_TYPE_EXPENSE, CATEGORY_TYPE_INCOME};
    use crate::categories::{
        Category, CategoryError, CategoryRepositoryTrait, CategoryService, CategoryServiceTrait,
        CategoryUpdate, NewCategory,
    };
    use crate::errors::{Error, Result as AppResult};

    #[derive(Default)]
    struct MockCategoryRepository {
        categories: RwLock<Vec<Category>>,
    }

    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn list(&self, category_type_filter: Option<&str>) -> AppResult<Vec<Category>> {
            let categories = self.categories.read().unwrap();
            Ok(categories
                .iter()
                .filter(|c| {
                    category_type_filter
                        .map(|t| c.category_type == t)
                        .unwrap_or(true)
                })
                .cloned()
                .collect())
        }

        fn get_by_id(&self, category_id: &str) -> AppResult<Category> {
            self.categories
                .read()
                .unwrap()
                .iter()
                .find(|c| c.id == category_id)
                .cloned()
                .ok_or_else(|| {
                    CategoryError::NotFound(format!("Category with id {} not found", category_id))
                        .into()
                })
        }

        fn create(&self, new_category: NewCategory) -> AppResult<Category> {
            new_category.validate()?;
            let mut categories = self.categories.write().unwrap();
            if categories.iter().any(|c| {
                c.name == new_category.name && c.category_type == new_category.category_type
            }) {
                return Err(CategoryError::AlreadyExists(
                    "Category with this name and type already exists".to_string(),
                )
                .into());
            }
            let category = Category {
                id: format!("cat-{}", categories.len()),
                name: new_category.name,
                category_type: new_category.category_type,
                icon: new_category.icon,
                ..Default::default()
            };
            categories.push(category.clone());
            Ok(category)
        }

        fn update(&self, category_update: CategoryUpdate) -> AppResult<Category> {
            category_update.validate()?;
            let mut categories = self.categories.write().unwrap();
            let id = category_update.id.clone().unwrap();
            let existing = categories
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| CategoryError::NotFound(format!("Category {} not found", id)))?;
            existing.name = category_update.name;
            existing.category_type = category_update.category_type;
            existing.icon = category_update.icon;
            Ok(existing.clone())
        }

        fn delete(&self, category_id: &str) -> AppResult<usize> {
            let mut categories = self.categories.write().unwrap();
            let before = categories.len();
            categories.retain(|c| c.id != category_id);
            if categories.len() == before {
                return Err(
                    CategoryError::NotFound(format!("Category {} not found", category_id)).into(),
                );
            }
            Ok(1)
        }
    }

    fn service_with_mock() -> (CategoryService, Arc<MockCategoryRepository>) {
        let repository = Arc::new(MockCategoryRepository::default());
        let service = CategoryService::new(repository.clone());
        (service, repository)
    }

    #[tokio::test]
    async fn test_create_category_and_list_by_type() {
        let (service, _) = service_with_mock();

        service
            .create_category(NewCategory {
                id: None,
                name: "Salary".to_string(),
                category_type: CATEGORY_TYPE_INCOME.to_string(),
                icon: Some("briefcase".to_string()),
            })
            .await
            .unwrap();
        service
            .create_category(NewCategory {
                id: None,
                name: "Food".to_string(),
                category_type: CATEGORY_TYPE_EXPENSE.to_string(),
                icon: None,
            })
            .await
            .unwrap();

        let incomes = service
            .list_categories(Some(CATEGORY_TYPE_INCOME))
            .unwrap();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].name, "Salary");

        let all = service.list_categories(None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_create_category_rejects_unknown_type() {
        let (service, _) = service_with_mock();

        let result = service
            .create_category(NewCategory {
                id: None,
                name: "Weird".to_string(),
                category_type: "investment".to_string(),
                icon: None,
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_duplicate_category_fails() {
        let (service, _) = service_with_mock();

        let new_category = NewCategory {
            id: None,
            name: "Food".to_string(),
            category_type: CATEGORY_TYPE_EXPENSE.to_string(),
            icon: None,
        };

        service.create_category(new_category.clone()).await.unwrap();
        let result = service.create_category(new_category).await;

        assert!(matches!(
            result,
            Err(Error::Category(CategoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_category_requires_id() {
        let (service, _) = service_with_mock();

        let result = service
            .update_category(CategoryUpdate {
                id: None,
                name: "Food".to_string(),
                category_type: CATEGORY_TYPE_EXPENSE.to_string(),
                icon: None,
            })
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_category_returns_not_found() {
        let (service, _) = service_with_mock();

        let result = service.delete_category("missing").await;

        assert!(matches!(
            result,
            Err(Error::Category(CategoryError::NotFound(_)))
        ));
    }
}

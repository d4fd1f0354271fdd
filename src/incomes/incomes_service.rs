use chrono::{Months, NaiveDateTime};
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::incomes_errors::IncomeError;
use super::incomes_model::{Income, IncomeUpdate, NewIncome};
use super::incomes_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
use crate::constants::RECURRING_INCOME_MONTHS;
use crate::Result;

/// Service for managing a user's income records
pub struct IncomeService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    /// Creates a new IncomeService instance
    pub fn new(income_repository: Arc<dyn IncomeRepositoryTrait>) -> Self {
        Self { income_repository }
    }

    /// Fetches an income record and checks it belongs to the requesting user
    fn ensure_owned(&self, user_id: &str, income_id: &str) -> Result<Income> {
        let income = self.income_repository.get_by_id(income_id)?;
        if income.user_id != user_id {
            return Err(IncomeError::Forbidden(format!(
                "Income {} does not belong to the requesting user",
                income_id
            ))
            .into());
        }
        Ok(income)
    }
}

#[async_trait::async_trait]
impl IncomeServiceTrait for IncomeService {
    fn get_incomes(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Income>> {
        self.income_repository
            .list_by_user(user_id, start_date, end_date)
    }

    fn get_income(&self, user_id: &str, income_id: &str) -> Result<Income> {
        self.ensure_owned(user_id, income_id)
    }

    async fn create_income(&self, user_id: &str, new_income: NewIncome) -> Result<Vec<Income>> {
        new_income.validate()?;

        if !new_income.is_recurring {
            return self.income_repository.create_many(user_id, vec![new_income]);
        }

        // A recurring income becomes twelve monthly siblings tied by group_id.
        let group_id = Uuid::new_v4().to_string();
        let mut siblings = Vec::with_capacity(RECURRING_INCOME_MONTHS as usize);
        for offset in 0..RECURRING_INCOME_MONTHS {
            let income_date = new_income
                .income_date
                .checked_add_months(Months::new(offset))
                .ok_or_else(|| {
                    IncomeError::InvalidData(format!(
                        "Income date {} cannot be shifted by {} months",
                        new_income.income_date, offset
                    ))
                })?;
            siblings.push(NewIncome {
                id: None,
                income_date,
                group_id: Some(group_id.clone()),
                ..new_income.clone()
            });
        }

        debug!(
            "Fanning out recurring income '{}' into {} monthly rows for user {}",
            new_income.name, RECURRING_INCOME_MONTHS, user_id
        );
        self.income_repository.create_many(user_id, siblings)
    }

    async fn update_income(&self, user_id: &str, income_update: IncomeUpdate) -> Result<Income> {
        if let Some(income_id) = income_update.id.as_deref() {
            self.ensure_owned(user_id, income_id)?;
        }
        self.income_repository.update(income_update)
    }

    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<Income> {
        self.ensure_owned(user_id, income_id)?;
        self.income_repository.delete(income_id)
    }

    async fn delete_income_group(&self, user_id: &str, group_id: &str) -> Result<usize> {
        debug!("Deleting income group {} for user {}", group_id, user_id);
        self.income_repository.delete_group(user_id, group_id)
    }
}

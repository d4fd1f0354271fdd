use chrono::{Months, NaiveDateTime};
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::expenses_errors::ExpenseError;
use super::expenses_model::{Expense, ExpenseUpdate, NewExpense};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::cards::CardRepositoryTrait;
use crate::Result;

/// Service for managing a user's expense records
pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    card_repository: Arc<dyn CardRepositoryTrait>,
}

impl ExpenseService {
    /// Creates a new ExpenseService instance with injected dependencies
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        card_repository: Arc<dyn CardRepositoryTrait>,
    ) -> Self {
        Self {
            expense_repository,
            card_repository,
        }
    }

    /// Fetches an expense record and checks it belongs to the requesting user
    fn ensure_owned(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        let expense = self.expense_repository.get_by_id(expense_id)?;
        if expense.user_id != user_id {
            return Err(ExpenseError::Forbidden(format!(
                "Expense {} does not belong to the requesting user",
                expense_id
            ))
            .into());
        }
        Ok(expense)
    }

    /// Checks that a linked card exists and belongs to the requesting user
    fn ensure_card_owned(&self, user_id: &str, card_id: &str) -> Result<()> {
        let card = self.card_repository.get_by_id(card_id)?;
        if card.user_id != user_id {
            return Err(ExpenseError::Forbidden(format!(
                "Card {} does not belong to the requesting user",
                card_id
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn get_expenses(
        &self,
        user_id: &str,
        start_date: Option<NaiveDateTime>,
        end_date: Option<NaiveDateTime>,
    ) -> Result<Vec<Expense>> {
        self.expense_repository
            .list_by_user(user_id, start_date, end_date)
    }

    fn get_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.ensure_owned(user_id, expense_id)
    }

    async fn create_expense(&self, user_id: &str, new_expense: NewExpense) -> Result<Vec<Expense>> {
        new_expense.validate()?;

        if let Some(card_id) = new_expense.card_id.as_deref() {
            self.ensure_card_owned(user_id, card_id)?;
        }

        let installment_total = new_expense.installment_total.unwrap_or(1);
        if installment_total <= 1 {
            let single = NewExpense {
                installment_number: None,
                installment_total: None,
                group_id: None,
                ..new_expense
            };
            return self.expense_repository.create_many(user_id, vec![single]);
        }

        // An installment purchase becomes one sibling row per month, numbered
        // 1..=N and tied by group_id. The amount is per installment.
        let group_id = Uuid::new_v4().to_string();
        let mut siblings = Vec::with_capacity(installment_total as usize);
        for number in 1..=installment_total {
            let offset = (number - 1) as u32;
            let expense_date = new_expense
                .expense_date
                .checked_add_months(Months::new(offset))
                .ok_or_else(|| {
                    ExpenseError::InvalidData(format!(
                        "Expense date {} cannot be shifted by {} months",
                        new_expense.expense_date, offset
                    ))
                })?;
            siblings.push(NewExpense {
                id: None,
                expense_date,
                installment_number: Some(number),
                installment_total: Some(installment_total),
                group_id: Some(group_id.clone()),
                ..new_expense.clone()
            });
        }

        debug!(
            "Fanning out expense '{}' into {} installments for user {}",
            new_expense.name, installment_total, user_id
        );
        self.expense_repository.create_many(user_id, siblings)
    }

    async fn update_expense(
        &self,
        user_id: &str,
        expense_update: ExpenseUpdate,
    ) -> Result<Expense> {
        if let Some(expense_id) = expense_update.id.as_deref() {
            self.ensure_owned(user_id, expense_id)?;
        }
        if let Some(card_id) = expense_update.card_id.as_deref() {
            self.ensure_card_owned(user_id, card_id)?;
        }
        self.expense_repository.update(expense_update)
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<Expense> {
        self.ensure_owned(user_id, expense_id)?;
        self.expense_repository.delete(expense_id)
    }

    async fn delete_expense_group(&self, user_id: &str, group_id: &str) -> Result<usize> {
        debug!("Deleting expense group {} for user {}", group_id, user_id);
        self.expense_repository.delete_group(user_id, group_id)
    }
}

use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::portfolio_model::{InvestmentEvolution, Position};
use super::portfolio_traits::PortfolioServiceTrait;
use super::positions_calculator::{calculate_investment_evolution, calculate_positions};
use crate::operations::OperationRepositoryTrait;
use crate::utils::time_utils::{end_of_day, start_of_day};
use crate::Result;

/// Service deriving portfolio analytics from the operation ledger
pub struct PortfolioService {
    operation_repository: Arc<dyn OperationRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance
    pub fn new(operation_repository: Arc<dyn OperationRepositoryTrait>) -> Self {
        Self {
            operation_repository,
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_positions(&self, user_id: &str) -> Result<Vec<Position>> {
        debug!("Calculating positions for user {}", user_id);
        let operations = self.operation_repository.list_by_user(user_id, None, None)?;
        Ok(calculate_positions(&operations))
    }

    fn get_investment_evolution(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<InvestmentEvolution>> {
        let operations = self.operation_repository.list_by_user(
            user_id,
            Some(start_of_day(start_date)),
            Some(end_of_day(end_date)),
        )?;
        Ok(calculate_investment_evolution(
            &operations,
            start_date,
            end_date,
        ))
    }
}

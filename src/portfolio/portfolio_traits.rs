use chrono::NaiveDate;

use super::portfolio_model::{InvestmentEvolution, Position};
use crate::Result;

/// Trait defining the portfolio service interface
pub trait PortfolioServiceTrait: Send + Sync {
    /// Current holdings derived from the user's full operation history
    fn get_positions(&self, user_id: &str) -> Result<Vec<Position>>;
    /// Month-by-month investment flows over an inclusive date window
    fn get_investment_evolution(
        &self,
        user_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<InvestmentEvolution>>;
}

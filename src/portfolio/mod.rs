pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;
pub(crate) mod portfolio_traits;
pub(crate) mod positions_calculator;

#[cfg(test)]
mod portfolio_tests;

pub use portfolio_model::{InvestmentEvolution, Position};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
pub use positions_calculator::{calculate_investment_evolution, calculate_positions};

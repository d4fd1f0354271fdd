#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, RwLock};

    use crate::errors::Result as AppResult;
    use crate::operations::{
        NewOperation, Operation, OperationError, OperationRepositoryTrait, OperationUpdate,
        OPERATION_KIND_BUY, OPERATION_KIND_DIVIDEND, OPERATION_KIND_INTEREST,
        OPERATION_KIND_SELL,
    };
    use crate::portfolio::positions_calculator::{
        calculate_investment_evolution, calculate_positions,
    };
    use crate::portfolio::{PortfolioService, PortfolioServiceTrait};

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn operation(
        symbol: &str,
        kind: &str,
        quantity: Decimal,
        unit_price: Decimal,
        on: NaiveDateTime,
    ) -> Operation {
        Operation {
            id: format!("{}-{}-{}", symbol, kind, on),
            user_id: "user-1".to_string(),
            symbol: symbol.to_string(),
            asset_class: "stock".to_string(),
            kind: kind.to_string(),
            operation_date: on,
            quantity,
            unit_price,
            total_amount: (quantity * unit_price).round_dp(2),
            currency: "BRL".to_string(),
            broker: None,
            notes: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_buy_then_partial_sell_keeps_average_cost() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)),
            operation("PETR4", OPERATION_KIND_SELL, dec!(4), dec!(15.00), date(2024, 2, 10)),
        ];

        let positions = calculate_positions(&operations);

        assert_eq!(positions.len(), 1);
        let position = &positions[0];
        assert_eq!(position.quantity, dec!(6));
        assert_eq!(position.invested, dec!(60.00));
        assert_eq!(position.average_price, dec!(10));
        assert_eq!(position.current_value, dec!(60.00));
        assert_eq!(position.portfolio_share, dec!(100.00));
    }

    #[test]
    fn test_profit_stays_zero_without_live_pricing() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)),
            operation("PETR4", OPERATION_KIND_SELL, dec!(3), dec!(22.50), date(2024, 3, 1)),
            operation("VALE3", OPERATION_KIND_BUY, dec!(5), dec!(60.00), date(2024, 2, 1)),
        ];

        for position in calculate_positions(&operations) {
            assert_eq!(position.profit, Decimal::ZERO);
            assert_eq!(position.profit_percentage, Decimal::ZERO);
            assert_eq!(position.current_value, position.invested);
        }
    }

    #[test]
    fn test_oversell_clamps_position_at_zero_and_drops_it() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)),
            operation("PETR4", OPERATION_KIND_SELL, dec!(15), dec!(10.00), date(2024, 2, 10)),
            operation("VALE3", OPERATION_KIND_BUY, dec!(5), dec!(60.00), date(2024, 2, 1)),
        ];

        let positions = calculate_positions(&operations);

        // The oversold asset is gone, the other takes the whole portfolio.
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].symbol, "VALE3");
        assert_eq!(positions[0].portfolio_share, dec!(100.00));
    }

    #[test]
    fn test_sell_without_prior_buy_does_not_underflow() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_SELL, dec!(5), dec!(10.00), date(2024, 1, 10)),
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 2, 10)),
        ];

        let positions = calculate_positions(&operations);

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].quantity, dec!(10));
        assert_eq!(positions[0].invested, dec!(100.00));
    }

    #[test]
    fn test_dividends_and_interest_do_not_move_the_position() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)),
            operation("PETR4", OPERATION_KIND_DIVIDEND, dec!(10), dec!(0.75), date(2024, 2, 5)),
            operation("PETR4", OPERATION_KIND_INTEREST, dec!(10), dec!(0.15), date(2024, 3, 5)),
        ];

        let positions = calculate_positions(&operations);

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].quantity, dec!(10));
        assert_eq!(positions[0].invested, dec!(100.00));
        // Last operation date still advances with cash events.
        assert_eq!(positions[0].last_operation_date, Some(date(2024, 3, 5)));
    }

    #[test]
    fn test_portfolio_shares_sum_to_one_hundred() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)),
            operation("VALE3", OPERATION_KIND_BUY, dec!(5), dec!(60.00), date(2024, 1, 15)),
        ];

        let positions = calculate_positions(&operations);

        assert_eq!(positions.len(), 2);
        let share_sum: Decimal = positions.iter().map(|p| p.portfolio_share).sum();
        assert!((share_sum - dec!(100)).abs() <= dec!(0.01));
        // 100 invested vs 300 invested.
        assert_eq!(positions[0].portfolio_share, dec!(25.00));
        assert_eq!(positions[1].portfolio_share, dec!(75.00));
    }

    #[test]
    fn test_same_symbol_in_two_currencies_yields_two_positions() {
        let mut foreign = operation(
            "AAPL",
            OPERATION_KIND_BUY,
            dec!(2),
            dec!(150.00),
            date(2024, 1, 10),
        );
        foreign.currency = "USD".to_string();
        let operations = vec![
            operation("AAPL", OPERATION_KIND_BUY, dec!(3), dec!(700.00), date(2024, 1, 10)),
            foreign,
        ];

        let positions = calculate_positions(&operations);

        assert_eq!(positions.len(), 2);
        assert_eq!(positions[0].currency, "BRL");
        assert_eq!(positions[1].currency, "USD");
    }

    #[test]
    fn test_holding_days_span_first_buy_to_last_operation() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 1)),
            operation("PETR4", OPERATION_KIND_DIVIDEND, dec!(10), dec!(0.50), date(2024, 1, 31)),
        ];

        let positions = calculate_positions(&operations);

        assert_eq!(positions[0].first_buy_date, Some(date(2024, 1, 1)));
        assert_eq!(positions[0].last_operation_date, Some(date(2024, 1, 31)));
        assert_eq!(positions[0].holding_days, 30);
    }

    #[test]
    fn test_brokers_concatenate_unique_first_seen() {
        let mut first = operation("PETR4", OPERATION_KIND_BUY, dec!(1), dec!(10.00), date(2024, 1, 1));
        first.broker = Some("Clear".to_string());
        let mut second = operation("PETR4", OPERATION_KIND_BUY, dec!(1), dec!(10.00), date(2024, 2, 1));
        second.broker = Some("XP".to_string());
        let mut third = operation("PETR4", OPERATION_KIND_BUY, dec!(1), dec!(10.00), date(2024, 3, 1));
        third.broker = Some("Clear".to_string());

        let positions = calculate_positions(&[first, second, third]);

        assert_eq!(positions[0].brokers, "Clear, XP");
    }

    #[test]
    fn test_investment_evolution_zero_fills_every_month() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)),
            operation("PETR4", OPERATION_KIND_SELL, dec!(4), dec!(15.00), date(2024, 2, 10)),
            operation("PETR4", OPERATION_KIND_DIVIDEND, dec!(6), dec!(0.80), date(2024, 3, 5)),
        ];

        let evolution = calculate_investment_evolution(
            &operations,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
        );

        assert_eq!(evolution.len(), 4);
        assert_eq!(evolution[0].month, "2024-01");
        assert_eq!(evolution[0].invested, dec!(100.00));
        assert_eq!(evolution[1].divested, dec!(60.00));
        assert_eq!(evolution[2].earnings, dec!(4.80));
        // April saw no operations but still gets a zeroed bucket.
        assert_eq!(evolution[3].month, "2024-04");
        assert_eq!(evolution[3].invested, Decimal::ZERO);
        assert_eq!(evolution[3].divested, Decimal::ZERO);
        assert_eq!(evolution[3].earnings, Decimal::ZERO);
    }

    #[test]
    fn test_investment_evolution_ignores_operations_outside_window() {
        let operations = vec![
            operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2023, 12, 20)),
            operation("PETR4", OPERATION_KIND_BUY, dec!(1), dec!(10.00), date(2024, 1, 10)),
        ];

        let evolution = calculate_investment_evolution(
            &operations,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );

        assert_eq!(evolution.len(), 1);
        assert_eq!(evolution[0].invested, dec!(10.00));
    }

    #[derive(Default)]
    struct MockOperationRepository {
        operations: RwLock<Vec<Operation>>,
    }

    impl OperationRepositoryTrait for MockOperationRepository {
        fn list_by_user(
            &self,
            user_id: &str,
            start_date: Option<NaiveDateTime>,
            end_date: Option<NaiveDateTime>,
        ) -> AppResult<Vec<Operation>> {
            let mut results: Vec<Operation> = self
                .operations
                .read()
                .unwrap()
                .iter()
                .filter(|o| o.user_id == user_id)
                .filter(|o| start_date.map(|s| o.operation_date >= s).unwrap_or(true))
                .filter(|o| end_date.map(|e| o.operation_date <= e).unwrap_or(true))
                .cloned()
                .collect();
            results.sort_by_key(|o| o.operation_date);
            Ok(results)
        }

        fn get_by_id(&self, operation_id: &str) -> AppResult<Operation> {
            Err(OperationError::NotFound(operation_id.to_string()).into())
        }

        fn create(&self, _user_id: &str, _new_operation: NewOperation) -> AppResult<Operation> {
            unimplemented!("not used in portfolio tests")
        }

        fn update(&self, _operation_update: OperationUpdate) -> AppResult<Operation> {
            unimplemented!("not used in portfolio tests")
        }

        fn delete(&self, _operation_id: &str) -> AppResult<Operation> {
            unimplemented!("not used in portfolio tests")
        }
    }

    #[test]
    fn test_service_folds_only_the_requesting_users_ledger() {
        let repository = Arc::new(MockOperationRepository::default());
        {
            let mut operations = repository.operations.write().unwrap();
            operations.push(operation("PETR4", OPERATION_KIND_BUY, dec!(10), dec!(10.00), date(2024, 1, 10)));
            let mut foreign = operation("VALE3", OPERATION_KIND_BUY, dec!(5), dec!(60.00), date(2024, 1, 10));
            foreign.user_id = "user-2".to_string();
            operations.push(foreign);
        }
        let service = PortfolioService::new(repository);

        let positions = service.get_positions("user-1").unwrap();

        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].symbol, "PETR4");
    }

    #[test]
    fn test_service_evolution_uses_inclusive_window() {
        let repository = Arc::new(MockOperationRepository::default());
        {
            let mut operations = repository.operations.write().unwrap();
            // Late on the last day of the window, still inside the bound.
            let mut edge = operation("PETR4", OPERATION_KIND_BUY, dec!(1), dec!(10.00), date(2024, 2, 29));
            edge.operation_date = NaiveDate::from_ymd_opt(2024, 2, 29)
                .unwrap()
                .and_hms_milli_opt(23, 59, 59, 998)
                .unwrap();
            operations.push(edge);
        }
        let service = PortfolioService::new(repository);

        let evolution = service
            .get_investment_evolution(
                "user-1",
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            )
            .unwrap();

        assert_eq!(evolution.len(), 2);
        assert_eq!(evolution[1].invested, dec!(10.00));
    }
}

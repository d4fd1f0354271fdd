#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal_macros::dec;
    use std::sync::{Arc, RwLock};

    use crate::constants::{MONEY_SCALE, QUANTITY_SCALE};
    use crate::errors::{Error, Result as AppResult};
    use crate::operations::operations_model::{from_scaled, to_scaled};
    use crate::operations::{
        NewOperation, Operation, OperationError, OperationRepositoryTrait, OperationService,
        OperationServiceTrait, OperationUpdate, OPERATION_KIND_BUY, OPERATION_KIND_SELL,
    };

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
            self.operations
                .read()
                .unwrap()
                .iter()
                .find(|o| o.id == operation_id)
                .cloned()
                .ok_or_else(|| {
                    OperationError::NotFound(format!(
                        "Operation with id {} not found",
                        operation_id
                    ))
                    .into()
                })
        }

        fn create(&self, user_id: &str, new_operation: NewOperation) -> AppResult<Operation> {
            new_operation.validate()?;
            let mut operations = self.operations.write().unwrap();
            let operation = Operation {
                id: format!("op-{}", operations.len()),
                user_id: user_id.to_string(),
                symbol: new_operation.symbol,
                asset_class: new_operation.asset_class,
                kind: new_operation.kind.clone(),
                operation_date: new_operation.operation_date,
                quantity: new_operation.quantity,
                unit_price: new_operation.unit_price,
                total_amount: (new_operation.quantity * new_operation.unit_price).round_dp(2),
                currency: new_operation.currency,
                broker: new_operation.broker,
                notes: new_operation.notes,
                ..Default::default()
            };
            operations.push(operation.clone());
            Ok(operation)
        }

        fn update(&self, operation_update: OperationUpdate) -> AppResult<Operation> {
            operation_update.validate()?;
            let mut operations = self.operations.write().unwrap();
            let id = operation_update.id.clone().unwrap();
            let existing = operations
                .iter_mut()
                .find(|o| o.id == id)
                .ok_or_else(|| OperationError::NotFound(format!("Operation {} not found", id)))?;
            existing.quantity = operation_update.quantity;
            existing.unit_price = operation_update.unit_price;
            existing.total_amount =
                (operation_update.quantity * operation_update.unit_price).round_dp(2);
            existing.kind = operation_update.kind;
            existing.symbol = operation_update.symbol;
            existing.operation_date = operation_update.operation_date;
            Ok(existing.clone())
        }

        fn delete(&self, operation_id: &str) -> AppResult<Operation> {
            let mut operations = self.operations.write().unwrap();
            let position = operations
                .iter()
                .position(|o| o.id == operation_id)
                .ok_or_else(|| {
                    OperationError::NotFound(format!("Operation {} not found", operation_id))
                })?;
            Ok(operations.remove(position))
        }
    }

    fn service_with_mock() -> (OperationService, Arc<MockOperationRepository>) {
        let repository = Arc::new(MockOperationRepository::default());
        let service = OperationService::new(repository.clone());
        (service, repository)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn buy(symbol: &str, quantity: &str, unit_price: &str, on: NaiveDateTime) -> NewOperation {
        NewOperation {
            id: None,
            symbol: symbol.to_string(),
            asset_class: "stock".to_string(),
            kind: OPERATION_KIND_BUY.to_string(),
            operation_date: on,
            quantity: quantity.parse().unwrap(),
            unit_price: unit_price.parse().unwrap(),
            currency: "BRL".to_string(),
            broker: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_operation_derives_total_amount() {
        let (service, _) = service_with_mock();

        let operation = service
            .create_operation("user-1", buy("PETR4", "2.5", "30.10", date(2024, 3, 5)))
            .await
            .unwrap();

        assert_eq!(operation.total_amount, dec!(75.25));
    }

    #[tokio::test]
    async fn test_update_operation_recomputes_total_amount() {
        let (service, _) = service_with_mock();

        let created = service
            .create_operation("user-1", buy("PETR4", "10", "10.00", date(2024, 3, 5)))
            .await
            .unwrap();
        assert_eq!(created.total_amount, dec!(100.00));

        let updated = service
            .update_operation(
                "user-1",
                OperationUpdate {
                    id: Some(created.id.clone()),
                    symbol: "PETR4".to_string(),
                    asset_class: "stock".to_string(),
                    kind: OPERATION_KIND_SELL.to_string(),
                    operation_date: date(2024, 4, 5),
                    quantity: dec!(4),
                    unit_price: dec!(15.00),
                    currency: "BRL".to_string(),
                    broker: None,
                    notes: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.total_amount, dec!(60.00));
        assert_eq!(updated.kind, OPERATION_KIND_SELL);
    }

    #[tokio::test]
    async fn test_create_operation_rejects_unknown_kind() {
        let (service, _) = service_with_mock();

        let mut input = buy("PETR4", "1", "10.00", date(2024, 3, 5));
        input.kind = "SHORT".to_string();

        let result = service.create_operation("user-1", input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_operation_rejects_non_positive_quantity() {
        let (service, _) = service_with_mock();

        let mut input = buy("PETR4", "1", "10.00", date(2024, 3, 5));
        input.quantity = dec!(0);

        let result = service.create_operation("user-1", input).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_operation_of_another_user_is_forbidden() {
        let (service, repository) = service_with_mock();

        let created = service
            .create_operation("user-1", buy("PETR4", "1", "10.00", date(2024, 3, 5)))
            .await
            .unwrap();

        let result = service.delete_operation("user-2", &created.id).await;

        assert!(matches!(
            result,
            Err(Error::Operation(OperationError::Forbidden(_)))
        ));
        assert_eq!(repository.operations.read().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_operations_respects_date_bounds() {
        let (service, _) = service_with_mock();

        for (month, day) in [(1, 10), (2, 20), (3, 30)] {
            service
                .create_operation("user-1", buy("PETR4", "1", "10.00", date(2024, month, day)))
                .await
                .unwrap();
        }

        let bounded = service
            .get_operations("user-1", Some(date(2024, 2, 1)), Some(date(2024, 2, 28)))
            .unwrap();

        assert_eq!(bounded.len(), 1);
        assert_eq!(bounded[0].operation_date, date(2024, 2, 20));
    }

    #[test]
    fn test_fixed_point_scaling_round_trips() {
        let raw = to_scaled(dec!(1.5), QUANTITY_SCALE).unwrap();
        assert_eq!(raw, 15_000);
        assert_eq!(from_scaled(raw, QUANTITY_SCALE), dec!(1.5000));

        let raw = to_scaled(dec!(1234.56), MONEY_SCALE).unwrap();
        assert_eq!(raw, 123_456);
        assert_eq!(from_scaled(raw, MONEY_SCALE), dec!(1234.56));
    }
}

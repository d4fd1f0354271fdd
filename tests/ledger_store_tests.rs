mod common;

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use fintrack_core::cards::{CardRepository, CardService, CardServiceTrait, NewCard};
use fintrack_core::categories::{
    CategoryError, CategoryRepository, CategoryService, CategoryServiceTrait, NewCategory,
};
use fintrack_core::expenses::{ExpenseRepository, ExpenseService, ExpenseServiceTrait, NewExpense};
use fintrack_core::incomes::{IncomeRepository, IncomeService, IncomeServiceTrait, NewIncome};
use fintrack_core::operations::{
    NewOperation, OperationRepository, OperationService, OperationServiceTrait, OPERATION_KIND_BUY,
};
use fintrack_core::Error;

fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn new_card(name: &str, is_default: bool) -> NewCard {
    NewCard {
        id: None,
        name: name.to_string(),
        total_limit: 500_000,
        closing_day: 5,
        due_day: 12,
        is_default,
    }
}

#[tokio::test]
async fn test_default_card_stays_unique_across_writes() {
    let (_dir, pool) = common::setup_test_db();
    let card_repository = Arc::new(CardRepository::new(pool.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone()));
    let service = CardService::new(card_repository, expense_repository);

    service
        .create_card("user-1", new_card("Platinum", true))
        .await
        .unwrap();
    let second = service
        .create_card("user-1", new_card("Gold", false))
        .await
        .unwrap();

    service.set_default_card("user-1", &second.id).await.unwrap();
    let cards = service.get_cards("user-1").unwrap();
    let defaults: Vec<_> = cards.iter().filter(|card| card.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.id);

    // Creating another card directly as default clears the previous one too.
    let third = service
        .create_card("user-1", new_card("Black", true))
        .await
        .unwrap();
    let cards = service.get_cards("user-1").unwrap();
    let defaults: Vec<_> = cards.iter().filter(|card| card.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, third.id);
}

#[tokio::test]
async fn test_default_card_is_scoped_per_user() {
    let (_dir, pool) = common::setup_test_db();
    let card_repository = Arc::new(CardRepository::new(pool.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone()));
    let service = CardService::new(card_repository, expense_repository);

    let mine = service
        .create_card("user-1", new_card("Mine", true))
        .await
        .unwrap();
    let theirs = service
        .create_card("user-2", new_card("Theirs", true))
        .await
        .unwrap();

    // Each user keeps an independent default.
    assert!(service.get_card("user-1", &mine.id).unwrap().is_default);
    assert!(service.get_card("user-2", &theirs.id).unwrap().is_default);
}

#[tokio::test]
async fn test_category_names_are_unique_per_type() {
    let (_dir, pool) = common::setup_test_db();
    let service = CategoryService::new(Arc::new(CategoryRepository::new(pool.clone())));

    let food = NewCategory {
        id: None,
        name: "Food".to_string(),
        category_type: "expense".to_string(),
        icon: None,
    };
    service.create_category(food.clone()).await.unwrap();

    let duplicate = service.create_category(food.clone()).await;
    assert!(matches!(
        duplicate,
        Err(Error::Category(CategoryError::AlreadyExists(_)))
    ));

    // The same name under the other type is a different category.
    let income_food = NewCategory {
        category_type: "income".to_string(),
        ..food
    };
    service.create_category(income_food).await.unwrap();
}

#[tokio::test]
async fn test_installment_purchase_persists_all_siblings() {
    let (_dir, pool) = common::setup_test_db();
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone()));
    let card_repository = Arc::new(CardRepository::new(pool.clone()));
    let service = ExpenseService::new(expense_repository, card_repository);

    let purchase = NewExpense {
        id: None,
        name: "Notebook".to_string(),
        category: "electronics".to_string(),
        amount: 450_00,
        expense_date: noon(2024, 11, 20),
        card_id: None,
        is_paid: false,
        installment_total: Some(3),
        installment_number: None,
        group_id: None,
    };

    let created = service.create_expense("user-1", purchase).await.unwrap();
    assert_eq!(created.len(), 3);

    let group_id = created[0].group_id.clone().unwrap();
    assert!(created
        .iter()
        .all(|row| row.group_id.as_deref() == Some(group_id.as_str())));
    let numbers: Vec<Option<i32>> = created.iter().map(|row| row.installment_number).collect();
    assert_eq!(numbers, vec![Some(1), Some(2), Some(3)]);

    let listed = service.get_expenses("user-1", None, None).unwrap();
    assert_eq!(listed.len(), 3);

    let removed = service
        .delete_expense_group("user-1", &group_id)
        .await
        .unwrap();
    assert_eq!(removed, 3);
    assert!(service.get_expenses("user-1", None, None).unwrap().is_empty());
}

#[tokio::test]
async fn test_recurring_income_persists_a_row_per_month() {
    let (_dir, pool) = common::setup_test_db();
    let service = IncomeService::new(Arc::new(IncomeRepository::new(pool.clone())));

    let retainer = NewIncome {
        id: None,
        name: "Retainer".to_string(),
        category: "salary".to_string(),
        amount: 4_000_00,
        income_date: noon(2024, 1, 15),
        is_recurring: true,
        group_id: None,
    };

    let created = service.create_income("user-1", retainer).await.unwrap();
    assert_eq!(created.len(), 12);

    let listed = service.get_incomes("user-1", None, None).unwrap();
    assert_eq!(listed.len(), 12);
    for month in 1..=12 {
        assert!(listed
            .iter()
            .any(|income| income.income_date.date().month() == month));
    }

    let group_id = created[0].group_id.clone().unwrap();
    let removed = service
        .delete_income_group("user-1", &group_id)
        .await
        .unwrap();
    assert_eq!(removed, 12);
}

#[tokio::test]
async fn test_operation_total_survives_persistence() {
    let (_dir, pool) = common::setup_test_db();
    let service = OperationService::new(Arc::new(OperationRepository::new(pool.clone())));

    let buy = NewOperation {
        id: None,
        symbol: "PETR4".to_string(),
        asset_class: "stock".to_string(),
        kind: OPERATION_KIND_BUY.to_string(),
        operation_date: noon(2024, 2, 9),
        quantity: dec!(2.5),
        unit_price: dec!(30.10),
        currency: "BRL".to_string(),
        broker: Some("Clear".to_string()),
        notes: None,
    };

    let created = service.create_operation("user-1", buy).await.unwrap();
    assert_eq!(created.total_amount, dec!(75.25));

    let fetched = service.get_operation("user-1", &created.id).unwrap();
    assert_eq!(fetched.quantity, dec!(2.5));
    assert_eq!(fetched.unit_price, dec!(30.10));
    assert_eq!(fetched.total_amount, dec!(75.25));
}

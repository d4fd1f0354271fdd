use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::cards_errors::CardError;
use super::cards_model::{Card, CardSummary, CardUpdate, NewCard};
use super::cards_traits::{CardRepositoryTrait, CardServiceTrait};
use crate::expenses::ExpenseRepositoryTrait;
use crate::Result;

/// Service for managing a user's credit cards
pub struct CardService {
    card_repository: Arc<dyn CardRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl CardService {
    /// Creates a new CardService instance with injected dependencies
    pub fn new(
        card_repository: Arc<dyn CardRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            card_repository,
            expense_repository,
        }
    }

    /// Fetches a card and checks it belongs to the requesting user
    fn ensure_owned(&self, user_id: &str, card_id: &str) -> Result<Card> {
        let card = self.card_repository.get_by_id(card_id)?;
        if card.user_id != user_id {
            return Err(CardError::Forbidden(format!(
                "Card {} does not belong to the requesting user",
                card_id
            ))
            .into());
        }
        Ok(card)
    }
}

#[async_trait::async_trait]
impl CardServiceTrait for CardService {
    /// Lists the user's cards with the used limit derived from linked expenses
    fn get_cards(&self, user_id: &str) -> Result<Vec<CardSummary>> {
        let cards = self.card_repository.list_by_user(user_id)?;
        let usage: HashMap<String, i64> = self
            .expense_repository
            .sum_by_card(user_id)?
            .into_iter()
            .collect();

        Ok(cards
            .into_iter()
            .map(|card| {
                let used = usage.get(&card.id).copied().unwrap_or(0);
                CardSummary::from_card(card, used)
            })
            .collect())
    }

    fn get_card(&self, user_id: &str, card_id: &str) -> Result<Card> {
        self.ensure_owned(user_id, card_id)
    }

    async fn create_card(&self, user_id: &str, new_card: NewCard) -> Result<Card> {
        debug!("Creating card {} for user {}", new_card.name, user_id);
        self.card_repository.create(user_id, new_card)
    }

    async fn update_card(&self, user_id: &str, card_update: CardUpdate) -> Result<Card> {
        if let Some(card_id) = card_update.id.as_deref() {
            self.ensure_owned(user_id, card_id)?;
        }
        self.card_repository.update(card_update)
    }

    async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<()> {
        self.ensure_owned(user_id, card_id)?;
        self.card_repository.delete(card_id)?;
        Ok(())
    }

    async fn set_default_card(&self, user_id: &str, card_id: &str) -> Result<Card> {
        debug!("Setting card {} as default for user {}", card_id, user_id);
        self.ensure_owned(user_id, card_id)?;
        self.card_repository.set_default(user_id, card_id)
    }
}

use async_trait::async_trait;

use super::cards_model::{Card, CardSummary, CardUpdate, NewCard};
use crate::Result;

/// Trait defining the contract for Card repository operations.
pub trait CardRepositoryTrait: Send + Sync {
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Card>>;
    fn get_by_id(&self, card_id: &str) -> Result<Card>;
    fn create(&self, user_id: &str, new_card: NewCard) -> Result<Card>;
    fn update(&self, card_update: CardUpdate) -> Result<Card>;
    fn delete(&self, card_id: &str) -> Result<usize>;
    /// Marks one card as the user's default, clearing the flag on every
    /// other card of that user inside a single transaction.
    fn set_default(&self, user_id: &str, card_id: &str) -> Result<Card>;
}

/// Trait defining the contract for Card service operations.
#[async_trait]
pub trait CardServiceTrait: Send + Sync {
    fn get_cards(&self, user_id: &str) -> Result<Vec<CardSummary>>;
    fn get_card(&self, user_id: &str, card_id: &str) -> Result<Card>;
    async fn create_card(&self, user_id: &str, new_card: NewCard) -> Result<Card>;
    async fn update_card(&self, user_id: &str, card_update: CardUpdate) -> Result<Card>;
    async fn delete_card(&self, user_id: &str, card_id: &str) -> Result<()>;
    async fn set_default_card(&self, user_id: &str, card_id: &str) -> Result<Card>;
}

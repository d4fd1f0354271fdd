use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::cards_errors::CardError;
use super::cards_model::{Card, CardDB, CardUpdate, NewCard};
use super::cards_traits::CardRepositoryTrait;
use crate::db::{get_connection, DbTransactionExecutor};
use crate::schema::cards;
use crate::Result;

/// Repository for managing card data in the database
pub struct CardRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl CardRepository {
    /// Creates a new CardRepository instance
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl CardRepositoryTrait for CardRepository {
    /// Lists all cards owned by a user
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Card>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| CardError::DatabaseError(e.to_string()))?;

        let results = cards::table
            .filter(cards::user_id.eq(user_id))
            .order((cards::is_default.desc(), cards::name.asc()))
            .load::<CardDB>(&mut conn)
            .map_err(CardError::from)?;

        Ok(results.into_iter().map(Card::from).collect())
    }

    /// Retrieves a card by its ID
    fn get_by_id(&self, card_id: &str) -> Result<Card> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| CardError::DatabaseError(e.to_string()))?;

        let card = cards::table
            .find(card_id)
            .first::<CardDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    CardError::NotFound(format!("Card with id {} not found", card_id))
                }
                _ => CardError::DatabaseError(e.to_string()),
            })?;

        Ok(card.into())
    }

    /// Creates a new card; a card created as default clears the flag on the
    /// user's other cards within the same transaction
    fn create(&self, user_id: &str, new_card: NewCard) -> Result<Card> {
        new_card.validate()?;

        let mut card_db = CardDB::from_new(user_id, new_card);
        card_db.id = Uuid::new_v4().to_string();

        self.pool
            .execute(move |conn| -> std::result::Result<Card, CardError> {
                if card_db.is_default {
                    diesel::update(cards::table.filter(cards::user_id.eq(&card_db.user_id)))
                        .set(cards::is_default.eq(false))
                        .execute(conn)?;
                }

                diesel::insert_into(cards::table)
                    .values(&card_db)
                    .execute(conn)?;

                Ok(card_db.into())
            })
    }

    /// Updates an existing card, keeping the default-flag invariant
    fn update(&self, card_update: CardUpdate) -> Result<Card> {
        card_update.validate()?;

        let mut card_db: CardDB = card_update.into();

        self.pool
            .execute(move |conn| -> std::result::Result<Card, CardError> {
                let existing = cards::table.find(&card_db.id).first::<CardDB>(conn)?;

                card_db.user_id = existing.user_id;
                card_db.created_at = existing.created_at;
                card_db.updated_at = chrono::Utc::now().naive_utc();

                if card_db.is_default && !existing.is_default {
                    diesel::update(
                        cards::table
                            .filter(cards::user_id.eq(&card_db.user_id))
                            .filter(cards::id.ne(&card_db.id)),
                    )
                    .set(cards::is_default.eq(false))
                    .execute(conn)?;
                }

                diesel::update(cards::table.find(&card_db.id))
                    .set(&card_db)
                    .execute(conn)?;

                Ok(card_db.into())
            })
    }

    /// Deletes a card by its ID and returns the number of deleted records
    fn delete(&self, card_id: &str) -> Result<usize> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| CardError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(cards::table.find(card_id))
            .execute(&mut conn)
            .map_err(CardError::from)?;

        if affected == 0 {
            return Err(CardError::NotFound(format!("Card with id {} not found", card_id)).into());
        }

        Ok(affected)
    }

    /// Clear-then-set of the default flag in one transaction, so the user
    /// never ends up with two default cards
    fn set_default(&self, user_id: &str, card_id: &str) -> Result<Card> {
        let user_id = user_id.to_string();
        let card_id = card_id.to_string();

        self.pool
            .execute(move |conn| -> std::result::Result<Card, CardError> {
                diesel::update(
                    cards::table
                        .filter(cards::user_id.eq(&user_id))
                        .filter(cards::id.ne(&card_id)),
                )
                .set(cards::is_default.eq(false))
                .execute(conn)?;

                diesel::update(cards::table.find(&card_id))
                    .set((
                        cards::is_default.eq(true),
                        cards::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)?;

                let card = cards::table.find(&card_id).first::<CardDB>(conn)?;
                Ok(card.into())
            })
    }
}

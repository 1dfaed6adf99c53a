//! Progression use cases.
//!
//! Loads a character sheet, runs one ledger or linked stat operation against
//! it, and saves the sheet only when the operation succeeded. Subscribers are
//! notified after the save.

mod error;

pub use error::ProgressionError;

use std::sync::Arc;

use serde::Serialize;
use wodsheet_domain::{
    CharacterId, CharacterName, CharacterSheet, CharacterType, Currency, GameLine,
    GameLineRegistry, Ledger, LinkedStat, Quote, RefundReceipt, SpendReceipt, SpendRecordId,
    TraitEdit,
};

use crate::config::EngineConfig;
use crate::events::{ProgressionEvent, ProgressionSubscriber};
use crate::infrastructure::ports::{CharacterRepo, ClockPort};

// =============================================================================
// Result Types
// =============================================================================

/// A linked pair after a gameplay operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolState {
    pub pool: String,
    pub permanent: i32,
    pub temporary: i32,
    /// Points actually spent or restored by the operation.
    pub amount: i32,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for progression use cases.
pub struct ProgressionUseCases {
    character_repo: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
    registry: Arc<GameLineRegistry>,
    config: EngineConfig,
    subscribers: Vec<Arc<dyn ProgressionSubscriber>>,
}

impl ProgressionUseCases {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        clock: Arc<dyn ClockPort>,
        registry: Arc<GameLineRegistry>,
        config: EngineConfig,
        subscribers: Vec<Arc<dyn ProgressionSubscriber>>,
    ) -> Self {
        Self {
            character_repo,
            clock,
            registry,
            config,
            subscribers,
        }
    }

    /// Create and store a new sheet in character creation.
    pub async fn create_character(
        &self,
        name: &str,
        game_line: GameLine,
    ) -> Result<CharacterSheet, ProgressionError> {
        let character_type = self.character_type(game_line)?;
        let name = CharacterName::new(name)?;
        let starting_freebies = self.config.starting_freebies(character_type.as_ref());

        let sheet = CharacterSheet::new(name, game_line, starting_freebies);
        self.character_repo.save(&sheet).await?;

        tracing::info!(
            character_id = %sheet.id(),
            game_line = %game_line,
            starting_freebies,
            "Created character"
        );
        self.publish(ProgressionEvent::CharacterCreated {
            character_id: sheet.id(),
            game_line,
            starting_freebies,
        });

        Ok(sheet)
    }

    /// Remove a stored sheet and its spend history.
    pub async fn delete_character(
        &self,
        character_id: CharacterId,
    ) -> Result<(), ProgressionError> {
        self.character_repo.delete(character_id).await.map_err(|e| {
            if e.is_not_found() {
                ProgressionError::CharacterNotFound(character_id)
            } else {
                e.into()
            }
        })?;

        tracing::info!(character_id = %character_id, "Deleted character");
        self.publish(ProgressionEvent::CharacterDeleted { character_id });
        Ok(())
    }

    pub async fn get_sheet(
        &self,
        character_id: CharacterId,
    ) -> Result<CharacterSheet, ProgressionError> {
        self.load(character_id).await
    }

    /// Price one dot without buying it.
    pub async fn quote(
        &self,
        character_id: CharacterId,
        trait_name: &str,
        currency: Currency,
    ) -> Result<Quote, ProgressionError> {
        let sheet = self.load(character_id).await?;
        let character_type = self.character_type(sheet.game_line())?;
        Ok(Ledger::new(character_type.as_ref()).quote(&sheet, trait_name, currency)?)
    }

    /// Buy one dot of a trait.
    pub async fn spend(
        &self,
        character_id: CharacterId,
        trait_name: &str,
        currency: Currency,
    ) -> Result<SpendReceipt, ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        let character_type = self.character_type(sheet.game_line())?;

        let receipt = match Ledger::new(character_type.as_ref()).spend(
            &mut sheet,
            trait_name,
            currency,
            self.clock.now(),
        ) {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::debug!(
                    character_id = %character_id,
                    trait_name = %trait_name,
                    currency = %currency,
                    reason = e.code(),
                    "Spend rejected"
                );
                return Err(e.into());
            }
        };
        self.character_repo.save(&sheet).await?;

        tracing::info!(
            character_id = %character_id,
            trait_name = %receipt.trait_name,
            currency = %currency,
            cost = receipt.cost,
            new_value = receipt.new_value,
            "Trait purchased"
        );
        self.publish(ProgressionEvent::TraitPurchased {
            character_id,
            record_id: receipt.record_id,
            trait_name: receipt.trait_name.clone(),
            currency,
            cost: receipt.cost,
            new_value: receipt.new_value,
        });

        Ok(receipt)
    }

    /// Undo a pending purchase.
    pub async fn refund(
        &self,
        character_id: CharacterId,
        record_id: SpendRecordId,
    ) -> Result<RefundReceipt, ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        let character_type = self.character_type(sheet.game_line())?;

        let receipt = match Ledger::new(character_type.as_ref()).refund(&mut sheet, record_id) {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::debug!(
                    character_id = %character_id,
                    record_id = %record_id,
                    error = %e,
                    "Refund rejected"
                );
                return Err(e.into());
            }
        };
        self.character_repo.save(&sheet).await?;

        tracing::info!(
            character_id = %character_id,
            trait_name = %receipt.trait_name,
            currency = %receipt.currency,
            cost = receipt.refunded,
            "Purchase refunded"
        );
        self.publish(ProgressionEvent::PurchaseRefunded {
            character_id,
            record_id,
            trait_name: receipt.trait_name.clone(),
            currency: receipt.currency,
            refunded: receipt.refunded,
        });

        Ok(receipt)
    }

    /// Keep a pending purchase; it can no longer be refunded.
    pub async fn approve(
        &self,
        character_id: CharacterId,
        record_id: SpendRecordId,
    ) -> Result<(), ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        let character_type = self.character_type(sheet.game_line())?;

        Ledger::new(character_type.as_ref()).approve(&mut sheet, record_id)?;
        self.character_repo.save(&sheet).await?;

        tracing::info!(character_id = %character_id, record_id = %record_id, "Purchase approved");
        self.publish(ProgressionEvent::PurchaseApproved {
            character_id,
            record_id,
        });
        Ok(())
    }

    /// Returns the new experience balance.
    pub async fn award_experience(
        &self,
        character_id: CharacterId,
        amount: u32,
    ) -> Result<u32, ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        let balance = sheet.award_experience(amount);
        self.character_repo.save(&sheet).await?;

        tracing::info!(character_id = %character_id, amount, balance, "Experience awarded");
        self.publish(ProgressionEvent::ExperienceAwarded {
            character_id,
            amount,
            balance,
        });
        Ok(balance)
    }

    /// Move the character into active play. Unspent freebies are dropped
    /// unless the configuration keeps them.
    pub async fn finish_creation(
        &self,
        character_id: CharacterId,
    ) -> Result<CharacterSheet, ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        let finished = sheet.finish_creation(self.config.forfeit_freebies())?;
        self.character_repo.save(&sheet).await?;

        tracing::info!(
            character_id = %character_id,
            forfeited_freebies = finished.forfeited_freebies,
            "Character creation finished"
        );
        self.publish(ProgressionEvent::CreationFinished {
            character_id,
            forfeited_freebies: finished.forfeited_freebies,
        });
        Ok(sheet)
    }

    /// Set a trait directly, skipping cost, currency, stage and prerequisites.
    pub async fn storyteller_set(
        &self,
        character_id: CharacterId,
        trait_name: &str,
        value: i32,
    ) -> Result<TraitEdit, ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        let edit = sheet.storyteller_set(trait_name, value)?;
        self.character_repo.save(&sheet).await?;

        tracing::info!(
            character_id = %character_id,
            trait_name = %trait_name,
            previous = edit.previous,
            value = edit.value,
            "Storyteller edited trait"
        );
        self.publish(ProgressionEvent::TraitEdited {
            character_id,
            trait_name: trait_name.to_string(),
            previous: edit.previous,
            value: edit.value,
        });
        Ok(edit)
    }

    pub async fn set_favored(
        &self,
        character_id: CharacterId,
        trait_name: &str,
        favored: bool,
    ) -> Result<(), ProgressionError> {
        let mut sheet = self.load(character_id).await?;
        sheet.set_favored(trait_name, favored)?;
        self.character_repo.save(&sheet).await?;

        tracing::debug!(
            character_id = %character_id,
            trait_name = %trait_name,
            favored,
            "Favored trait updated"
        );
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Linked pools
    // -------------------------------------------------------------------------

    /// Spend points from a pool's temporary half.
    pub async fn spend_pool(
        &self,
        character_id: CharacterId,
        pool: &str,
        amount: i32,
    ) -> Result<PoolState, ProgressionError> {
        self.change_pool(character_id, pool, |stat| {
            if stat.spend(amount)? {
                Ok(amount)
            } else {
                Err(ProgressionError::InsufficientPool {
                    pool: stat.name().to_string(),
                    requested: amount,
                    available: stat.temporary(),
                })
            }
        })
        .await
    }

    /// Restore points to a pool; the reported amount is what was actually added.
    pub async fn restore_pool(
        &self,
        character_id: CharacterId,
        pool: &str,
        amount: i32,
    ) -> Result<PoolState, ProgressionError> {
        self.change_pool(character_id, pool, |stat| Ok(stat.restore(amount)?))
            .await
    }

    /// Refill a pool to its permanent rating.
    pub async fn rest(
        &self,
        character_id: CharacterId,
        pool: &str,
    ) -> Result<PoolState, ProgressionError> {
        self.change_pool(character_id, pool, |stat| Ok(stat.restore_full()))
            .await
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    async fn change_pool<F>(
        &self,
        character_id: CharacterId,
        pool: &str,
        operation: F,
    ) -> Result<PoolState, ProgressionError>
    where
        F: FnOnce(&mut LinkedStat<'_>) -> Result<i32, ProgressionError>,
    {
        let mut sheet = self.load(character_id).await?;
        let state = {
            let mut stat =
                sheet
                    .linked_stat(pool)
                    .ok_or_else(|| ProgressionError::UnknownPool {
                        pool: pool.to_string(),
                    })?;
            let amount = operation(&mut stat)?;
            PoolState {
                pool: stat.name().to_string(),
                permanent: stat.permanent(),
                temporary: stat.temporary(),
                amount,
            }
        };
        self.character_repo.save(&sheet).await?;

        tracing::debug!(
            character_id = %character_id,
            pool = %state.pool,
            temporary = state.temporary,
            "Pool changed"
        );
        self.publish(ProgressionEvent::PoolChanged {
            character_id,
            pool: state.pool.clone(),
            permanent: state.permanent,
            temporary: state.temporary,
        });
        Ok(state)
    }

    async fn load(&self, character_id: CharacterId) -> Result<CharacterSheet, ProgressionError> {
        self.character_repo
            .get(character_id)
            .await?
            .ok_or(ProgressionError::CharacterNotFound(character_id))
    }

    fn character_type(
        &self,
        game_line: GameLine,
    ) -> Result<Arc<dyn CharacterType>, ProgressionError> {
        self.registry
            .get(game_line)
            .ok_or(ProgressionError::UnknownGameLine(game_line))
    }

    fn publish(&self, event: ProgressionEvent) {
        for subscriber in &self.subscribers {
            subscriber.on_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MockProgressionSubscriber;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory::InMemoryCharacterRepo;
    use crate::infrastructure::ports::{MockCharacterRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use mockall::predicate::*;
    use wodsheet_domain::{CharacterStage, SpendError, SpendStatus, StatError};

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap(),
        ))
    }

    fn use_cases_with(
        repo: Arc<dyn CharacterRepo>,
        config: EngineConfig,
        subscribers: Vec<Arc<dyn ProgressionSubscriber>>,
    ) -> ProgressionUseCases {
        ProgressionUseCases::new(
            repo,
            clock(),
            Arc::new(GameLineRegistry::new()),
            config,
            subscribers,
        )
    }

    fn in_memory() -> (Arc<InMemoryCharacterRepo>, ProgressionUseCases) {
        let repo = Arc::new(InMemoryCharacterRepo::new());
        let use_cases = use_cases_with(repo.clone(), EngineConfig::default(), Vec::new());
        (repo, use_cases)
    }

    fn human_sheet() -> CharacterSheet {
        CharacterSheet::new(CharacterName::new("Eleanor").unwrap(), GameLine::Human, 21)
    }

    #[tokio::test]
    async fn create_character_uses_configured_freebies() {
        let repo = Arc::new(InMemoryCharacterRepo::new());
        let config = EngineConfig::default().with_starting_freebies(GameLine::Vampire, 20);
        let use_cases = use_cases_with(repo.clone(), config, Vec::new());

        let sheet = use_cases
            .create_character("Lucita", GameLine::Vampire)
            .await
            .unwrap();

        assert_eq!(sheet.freebies().amount(), 20);
        assert_eq!(sheet.stage(), CharacterStage::Creation);
        assert_eq!(use_cases.get_sheet(sheet.id()).await.unwrap(), sheet);
    }

    #[tokio::test]
    async fn create_character_rejects_blank_name() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().never();
        let use_cases = use_cases_with(Arc::new(repo), EngineConfig::default(), Vec::new());

        let err = use_cases
            .create_character("   ", GameLine::Human)
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressionError::Domain(_)));
    }

    #[tokio::test]
    async fn create_character_fails_for_unregistered_line() {
        let use_cases = ProgressionUseCases::new(
            Arc::new(InMemoryCharacterRepo::new()),
            clock(),
            Arc::new(GameLineRegistry::empty()),
            EngineConfig::default(),
            Vec::new(),
        );

        let err = use_cases
            .create_character("Anna", GameLine::Hunter)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::UnknownGameLine(GameLine::Hunter)
        ));
    }

    #[tokio::test]
    async fn delete_character_removes_the_sheet() {
        let (_, use_cases) = in_memory();
        let sheet = use_cases
            .create_character("Samuel", GameLine::Mage)
            .await
            .unwrap();

        use_cases.delete_character(sheet.id()).await.unwrap();
        assert!(matches!(
            use_cases.get_sheet(sheet.id()).await,
            Err(ProgressionError::CharacterNotFound(_))
        ));
        assert!(matches!(
            use_cases.delete_character(sheet.id()).await,
            Err(ProgressionError::CharacterNotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_character_notifies_subscribers() {
        let id = CharacterId::new();
        let mut repo = MockCharacterRepo::new();
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(()));

        let mut subscriber = MockProgressionSubscriber::new();
        subscriber
            .expect_on_event()
            .withf(move |event| {
                *event == ProgressionEvent::CharacterDeleted { character_id: id }
            })
            .times(1)
            .returning(|_| ());

        let use_cases = use_cases_with(
            Arc::new(repo),
            EngineConfig::default(),
            vec![Arc::new(subscriber)],
        );
        use_cases.delete_character(id).await.unwrap();
    }

    #[tokio::test]
    async fn spend_saves_and_stamps_record() {
        let (repo, use_cases) = in_memory();
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();

        let receipt = use_cases
            .spend(sheet.id(), "dexterity", Currency::Freebies)
            .await
            .unwrap();
        assert_eq!(receipt.new_value, 2);
        assert_eq!(receipt.cost, 5);
        assert_eq!(receipt.balance_after, 16);

        let stored = repo.get(sheet.id()).await.unwrap().unwrap();
        assert_eq!(stored.trait_value("dexterity"), Some(2));
        let record = stored.record(receipt.record_id).unwrap();
        assert_eq!(record.spent_at, clock().0);
        assert_eq!(record.status, SpendStatus::Pending);
    }

    #[tokio::test]
    async fn rejected_spend_is_not_saved() {
        let sheet = CharacterSheet::new(CharacterName::new("Poor").unwrap(), GameLine::Human, 1);
        let id = sheet.id();

        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(sheet.clone())));
        repo.expect_save().never();

        let mut subscriber = MockProgressionSubscriber::new();
        subscriber.expect_on_event().never();

        let use_cases = use_cases_with(
            Arc::new(repo),
            EngineConfig::default(),
            vec![Arc::new(subscriber)],
        );

        let err = use_cases
            .spend(id, "charisma", Currency::Freebies)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::Spend(SpendError::InsufficientFunds { cost: 5, .. })
        ));
    }

    #[tokio::test]
    async fn unknown_trait_is_typed() {
        let (repo, use_cases) = in_memory();
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();

        let err = use_cases
            .quote(sheet.id(), "unknown_trait", Currency::Freebies)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::Spend(SpendError::UnknownTrait { .. })
        ));
    }

    #[tokio::test]
    async fn missing_character_is_not_found() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        let use_cases = use_cases_with(Arc::new(repo), EngineConfig::default(), Vec::new());

        let id = CharacterId::new();
        let err = use_cases.award_experience(id, 5).await.unwrap_err();
        assert!(matches!(err, ProgressionError::CharacterNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn repository_failure_surfaces() {
        let sheet = human_sheet();
        let id = sheet.id();
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(sheet.clone())));
        repo.expect_save()
            .returning(|_| Err(RepoError::storage("save", "disk full")));
        let use_cases = use_cases_with(Arc::new(repo), EngineConfig::default(), Vec::new());

        let err = use_cases
            .spend(id, "wits", Currency::Freebies)
            .await
            .unwrap_err();
        assert!(matches!(err, ProgressionError::Repo(_)));
    }

    #[tokio::test]
    async fn successful_spend_notifies_subscribers() {
        let repo = Arc::new(InMemoryCharacterRepo::new());
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        let mut subscriber = MockProgressionSubscriber::new();
        subscriber
            .expect_on_event()
            .withf(move |event| {
                matches!(
                    event,
                    ProgressionEvent::TraitPurchased { trait_name, cost: 2, .. }
                        if trait_name == "occult"
                ) && event.character_id() == id
            })
            .times(1)
            .returning(|_| ());

        let use_cases = use_cases_with(repo, EngineConfig::default(), vec![Arc::new(subscriber)]);
        use_cases
            .spend(id, "occult", Currency::Freebies)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn refund_then_approve_flow() {
        let (repo, use_cases) = in_memory();
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        let first = use_cases
            .spend(id, "stamina", Currency::Freebies)
            .await
            .unwrap();
        let refund = use_cases.refund(id, first.record_id).await.unwrap();
        assert_eq!(refund.refunded, 5);
        assert_eq!(refund.restored_value, 1);
        assert_eq!(refund.balance_after, 21);

        let second = use_cases
            .spend(id, "stamina", Currency::Freebies)
            .await
            .unwrap();
        use_cases.approve(id, second.record_id).await.unwrap();
        let err = use_cases.refund(id, second.record_id).await.unwrap_err();
        assert!(matches!(err, ProgressionError::Refund(_)));

        let stored = use_cases.get_sheet(id).await.unwrap();
        assert_eq!(stored.trait_value("stamina"), Some(2));
        assert_eq!(stored.freebies().amount(), 16);
    }

    #[tokio::test]
    async fn experience_requires_finished_creation() {
        let (repo, use_cases) = in_memory();
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        assert_eq!(use_cases.award_experience(id, 10).await.unwrap(), 10);
        let err = use_cases
            .spend(id, "wits", Currency::Experience)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::Spend(SpendError::CurrencyUnavailable { .. })
        ));

        let active = use_cases.finish_creation(id).await.unwrap();
        assert_eq!(active.stage(), CharacterStage::Active);
        assert_eq!(active.freebies().amount(), 0);

        let receipt = use_cases
            .spend(id, "wits", Currency::Experience)
            .await
            .unwrap();
        assert_eq!(receipt.cost, 8);
        assert_eq!(receipt.balance_after, 2);
    }

    #[tokio::test]
    async fn finish_creation_can_keep_freebies() {
        let repo = Arc::new(InMemoryCharacterRepo::new());
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();
        let use_cases = use_cases_with(
            repo,
            EngineConfig::default().with_forfeit_freebies(false),
            Vec::new(),
        );

        let active = use_cases.finish_creation(sheet.id()).await.unwrap();
        assert_eq!(active.freebies().amount(), 21);
        assert!(use_cases.finish_creation(sheet.id()).await.is_err());
    }

    #[tokio::test]
    async fn storyteller_edit_is_range_checked() {
        let (repo, use_cases) = in_memory();
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        let edit = use_cases.storyteller_set(id, "willpower", 8).await.unwrap();
        assert_eq!(edit.previous, 3);
        assert!(matches!(
            use_cases.storyteller_set(id, "willpower", 11).await,
            Err(ProgressionError::Edit(_))
        ));
        assert_eq!(
            use_cases.get_sheet(id).await.unwrap().trait_value("willpower"),
            Some(8)
        );
    }

    #[tokio::test]
    async fn favored_discipline_is_bought_in_clan() {
        let (repo, use_cases) = in_memory();
        let sheet = CharacterSheet::new(
            CharacterName::new("Theo").unwrap(),
            GameLine::Vampire,
            15,
        );
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        let out_of_clan = use_cases
            .quote(id, "presence", Currency::Freebies)
            .await
            .unwrap();
        use_cases.set_favored(id, "presence", true).await.unwrap();
        let in_clan = use_cases
            .quote(id, "presence", Currency::Freebies)
            .await
            .unwrap();

        assert_eq!(out_of_clan.cost, 10);
        assert_eq!(in_clan.cost, 7);
        assert!(matches!(
            use_cases.set_favored(id, "kung_fu", true).await,
            Err(ProgressionError::Domain(_))
        ));
    }

    #[tokio::test]
    async fn pool_spend_restore_and_rest() {
        let (repo, use_cases) = in_memory();
        let mut sheet = human_sheet();
        sheet.storyteller_set("willpower", 6).unwrap();
        sheet.storyteller_set("temporary_willpower", 6).unwrap();
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        let spent = use_cases.spend_pool(id, "willpower", 4).await.unwrap();
        assert_eq!(spent.temporary, 2);
        assert_eq!(spent.amount, 4);

        let err = use_cases.spend_pool(id, "willpower", 3).await.unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InsufficientPool {
                requested: 3,
                available: 2,
                ..
            }
        ));

        let restored = use_cases.restore_pool(id, "willpower", 1).await.unwrap();
        assert_eq!(restored.temporary, 3);

        let rested = use_cases.rest(id, "willpower").await.unwrap();
        assert_eq!(rested.amount, 3);
        assert_eq!(rested.temporary, 6);
        assert_eq!(rested.permanent, 6);
    }

    #[tokio::test]
    async fn pool_errors_are_typed() {
        let (repo, use_cases) = in_memory();
        let sheet = human_sheet();
        repo.save(&sheet).await.unwrap();
        let id = sheet.id();

        assert!(matches!(
            use_cases.spend_pool(id, "glamour", 1).await,
            Err(ProgressionError::UnknownPool { .. })
        ));
        assert!(matches!(
            use_cases.restore_pool(id, "willpower", -2).await,
            Err(ProgressionError::Stat(StatError::InvalidAmount(-2)))
        ));
    }
}

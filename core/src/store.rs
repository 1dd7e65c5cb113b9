//! Read cache of the four backend collections.
//!
//! The store is not authoritative: every reload replaces a collection
//! wholesale. Readers take an `Arc<Snapshot>` and compute from it, so a
//! reload landing mid-computation never mixes old and new data.

use std::cell::RefCell;
use std::sync::Arc;

use shared::{Account, Goal, Investment, Transaction};
use tracing::debug;

use crate::api::{Collection, FinanceApi};
use crate::error::DashboardError;

/// One consistent view of every collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub investments: Vec<Investment>,
    pub goals: Vec<Goal>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
            && self.transactions.is_empty()
            && self.investments.is_empty()
            && self.goals.is_empty()
    }

    /// Display name of an account, if it is loaded
    pub fn account_name(&self, id: &shared::EntityId) -> Option<&str> {
        self.accounts
            .iter()
            .find(|account| &account.id == id)
            .map(|account| account.name.as_str())
    }
}

/// Freshly fetched contents of a single collection
enum Fetched {
    Accounts(Vec<Account>),
    Transactions(Vec<Transaction>),
    Investments(Vec<Investment>),
    Goals(Vec<Goal>),
}

pub struct DataStore<A> {
    api: A,
    transaction_limit: Option<u32>,
    current: RefCell<Arc<Snapshot>>,
}

impl<A: FinanceApi> DataStore<A> {
    pub fn new(api: A, transaction_limit: Option<u32>) -> Self {
        Self {
            api,
            transaction_limit,
            current: RefCell::new(Arc::new(Snapshot::default())),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// The current snapshot. Cheap to clone, never changes after it is handed out.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.borrow())
    }

    /// Replaces one collection. On error the snapshot is left as it was.
    pub async fn reload(&self, collection: Collection) -> Result<Arc<Snapshot>, DashboardError> {
        let fetched = self.fetch(collection).await?;

        let mut next = Snapshot::clone(&self.snapshot());
        let count = match fetched {
            Fetched::Accounts(items) => {
                next.accounts = items;
                next.accounts.len()
            }
            Fetched::Transactions(items) => {
                next.transactions = items;
                next.transactions.len()
            }
            Fetched::Investments(items) => {
                next.investments = items;
                next.investments.len()
            }
            Fetched::Goals(items) => {
                next.goals = items;
                next.goals.len()
            }
        };
        debug!(collection = collection.path(), count, "Reloaded collection");

        Ok(self.publish(next))
    }

    /// Fetches all four collections concurrently and swaps them in together.
    /// If any fetch fails the whole reload fails and nothing is replaced.
    pub async fn reload_all(&self) -> Result<Arc<Snapshot>, DashboardError> {
        let (accounts, transactions, investments, goals) = tokio::try_join!(
            self.api.list_accounts(),
            self.api.list_transactions(self.transaction_limit),
            self.api.list_investments(),
            self.api.list_goals(),
        )?;

        debug!(
            accounts = accounts.len(),
            transactions = transactions.len(),
            investments = investments.len(),
            goals = goals.len(),
            "Reloaded all collections"
        );

        Ok(self.publish(Snapshot {
            accounts,
            transactions,
            investments,
            goals,
        }))
    }

    async fn fetch(&self, collection: Collection) -> Result<Fetched, DashboardError> {
        Ok(match collection {
            Collection::Accounts => Fetched::Accounts(self.api.list_accounts().await?),
            Collection::Transactions => {
                Fetched::Transactions(self.api.list_transactions(self.transaction_limit).await?)
            }
            Collection::Investments => Fetched::Investments(self.api.list_investments().await?),
            Collection::Goals => Fetched::Goals(self.api.list_goals().await?),
        })
    }

    fn publish(&self, next: Snapshot) -> Arc<Snapshot> {
        let next = Arc::new(next);
        *self.current.borrow_mut() = Arc::clone(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, MockApi};

    #[tokio::test]
    async fn test_reload_replaces_single_collection() {
        let api = MockApi::new();
        api.set_accounts(vec![testing::account(1, "Conto corrente", "100")]);
        let store = DataStore::new(api, None);

        let first = store.reload(Collection::Accounts).await.unwrap();
        assert_eq!(first.accounts.len(), 1);
        assert!(first.transactions.is_empty());

        store
            .api()
            .set_accounts(vec![testing::account(2, "Risparmio", "50")]);
        let second = store.reload(Collection::Accounts).await.unwrap();

        assert_eq!(second.accounts.len(), 1);
        assert_eq!(second.accounts[0].name, "Risparmio");
        // Earlier snapshot is unaffected by the reload
        assert_eq!(first.accounts[0].name, "Conto corrente");
    }

    #[tokio::test]
    async fn test_reload_all_fetches_every_collection() {
        let api = MockApi::with_fixture();
        let store = DataStore::new(api, Some(100));

        let snapshot = store.reload_all().await.unwrap();

        assert!(!snapshot.accounts.is_empty());
        assert!(!snapshot.transactions.is_empty());
        assert!(!snapshot.investments.is_empty());
        assert!(!snapshot.goals.is_empty());
        assert_eq!(store.api().calls("list_transactions"), 1);
        assert_eq!(store.api().last_transaction_limit(), Some(100));
    }

    #[tokio::test]
    async fn test_reload_all_is_atomic_on_failure() {
        let api = MockApi::with_fixture();
        let store = DataStore::new(api, None);
        let before = store.reload_all().await.unwrap();

        store.api().set_accounts(Vec::new());
        store.api().fail_collection(Collection::Goals);

        let result = store.reload_all().await;
        assert!(matches!(result, Err(DashboardError::Network(_))));

        let after = store.snapshot();
        assert_eq!(*after, *before);
        assert!(!after.accounts.is_empty());
    }

    #[tokio::test]
    async fn test_failed_single_reload_keeps_stale_data() {
        let api = MockApi::with_fixture();
        let store = DataStore::new(api, None);
        store.reload_all().await.unwrap();

        store.api().fail_collection(Collection::Transactions);
        assert!(store.reload(Collection::Transactions).await.is_err());
        assert!(!store.snapshot().transactions.is_empty());
    }

    #[test]
    fn test_account_name_lookup() {
        let snapshot = Snapshot {
            accounts: vec![testing::account(7, "Carta", "0")],
            ..Snapshot::default()
        };
        assert_eq!(snapshot.account_name(&shared::EntityId::Number(7)), Some("Carta"));
        assert_eq!(snapshot.account_name(&shared::EntityId::Number(8)), None);
    }
}

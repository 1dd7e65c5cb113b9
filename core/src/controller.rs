//! Page loads and CRUD for the dashboard views.
//!
//! The controller owns the data store and is the only place that talks to
//! the backend on behalf of the UI. Every mutation resolves to a
//! [`Notification`]; nothing here panics or retries.

use std::cell::Cell;

use rust_decimal::Decimal;
use shared::{Account, EntityId, Goal, GoalUpdate, Investment, Page, Transaction};
use tracing::{info, warn};

use crate::aggregation::{self, DashboardSummary, InvestmentTotals};
use crate::api::{Collection, FinanceApi};
use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::format::{format_currency, Locale};
use crate::messages::Text;
use crate::storage::{PageStorage, CURRENT_PAGE_KEY};
use crate::store::DataStore;
use crate::validation::{parse_positive_amount, AccountForm, GoalForm, InvestmentForm, TransactionForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient message shown after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Data a page needs to render, all taken from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Dashboard(DashboardSummary),
    Accounts(Vec<Account>),
    Transactions {
        /// Newest first
        transactions: Vec<Transaction>,
        accounts: Vec<Account>,
    },
    Investments {
        investments: Vec<Investment>,
        totals: InvestmentTotals,
        /// For the funding-account picker
        accounts: Vec<Account>,
    },
    /// Goals not yet completed
    Goals(Vec<Goal>),
}

pub struct DashboardController<A, C, P> {
    store: DataStore<A>,
    clock: C,
    storage: P,
    locale: Locale,
    current: Cell<Page>,
}

impl<A: FinanceApi, C: Clock, P: PageStorage> DashboardController<A, C, P> {
    pub fn new(api: A, clock: C, storage: P, config: &DashboardConfig) -> Self {
        Self {
            store: DataStore::new(api, config.transaction_fetch_limit),
            clock,
            storage,
            locale: config.locale,
            current: Cell::new(Page::default()),
        }
    }

    pub fn store(&self) -> &DataStore<A> {
        &self.store
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn current_page(&self) -> Page {
        self.current.get()
    }

    /// Last page the user was on, or the dashboard when nothing usable is saved
    pub fn restore_page(&self) -> Page {
        self.storage
            .get(CURRENT_PAGE_KEY)
            .and_then(|saved| saved.parse::<Page>().ok())
            .unwrap_or_default()
    }

    /// Switches to `page`, remembers it and reloads what it shows
    pub async fn navigate(&self, page: Page) -> Result<PageView, DashboardError> {
        info!(page = page.as_str(), "Navigating");
        self.current.set(page);
        self.storage.set(CURRENT_PAGE_KEY, page.as_str());

        self.load(page).await.map_err(|err| {
            warn!(page = page.as_str(), error = %err, "Failed to load page");
            err
        })
    }

    /// Reloads the current page, as done after every successful mutation
    pub async fn refresh(&self) -> Result<PageView, DashboardError> {
        self.navigate(self.current_page()).await
    }

    async fn load(&self, page: Page) -> Result<PageView, DashboardError> {
        Ok(match page {
            Page::Dashboard => {
                let snapshot = self.store.reload_all().await?;
                PageView::Dashboard(aggregation::summarize(&snapshot, self.clock.today()))
            }
            Page::Accounts => {
                let snapshot = self.store.reload(Collection::Accounts).await?;
                PageView::Accounts(snapshot.accounts.clone())
            }
            Page::Transactions => {
                self.store.reload(Collection::Accounts).await?;
                let snapshot = self.store.reload(Collection::Transactions).await?;
                PageView::Transactions {
                    transactions: aggregation::transactions_by_date(&snapshot),
                    accounts: snapshot.accounts.clone(),
                }
            }
            Page::Investments => {
                self.store.reload(Collection::Accounts).await?;
                let snapshot = self.store.reload(Collection::Investments).await?;
                PageView::Investments {
                    investments: snapshot.investments.clone(),
                    totals: aggregation::investment_totals(&snapshot),
                    accounts: snapshot.accounts.clone(),
                }
            }
            Page::Goals => {
                let snapshot = self.store.reload(Collection::Goals).await?;
                PageView::Goals(aggregation::active_goals(&snapshot))
            }
        })
    }

    pub async fn create_account(&self, form: &AccountForm) -> Notification {
        let result = match form.validate() {
            Ok(request) => self.store.api().create_account(&request).await.map(|_| ()),
            Err(err) => Err(err.into()),
        };
        self.notify(
            "create_account",
            result,
            Text::AccountCreated,
            Text::CreateAccountFailed,
        )
    }

    pub async fn create_transaction(&self, form: &TransactionForm) -> Notification {
        let result = match form.validate(self.clock.today()) {
            Ok(request) => self.store.api().create_transaction(&request).await.map(|_| ()),
            Err(err) => Err(err.into()),
        };
        self.notify(
            "create_transaction",
            result,
            Text::TransactionAdded,
            Text::AddTransactionFailed,
        )
    }

    /// The backend debits the linked account and may refuse for lack of funds
    pub async fn create_investment(&self, form: &InvestmentForm) -> Notification {
        let result = match form.validate() {
            Ok(request) => self.store.api().create_investment(&request).await.map(|_| ()),
            Err(err) => Err(err.into()),
        };
        self.notify(
            "create_investment",
            result,
            Text::InvestmentCreated,
            Text::CreateInvestmentFailed,
        )
    }

    pub async fn create_goal(&self, form: &GoalForm) -> Notification {
        let result = match form.validate() {
            Ok(request) => self.store.api().create_goal(&request).await.map(|_| ()),
            Err(err) => Err(err.into()),
        };
        self.notify("create_goal", result, Text::GoalCreated, Text::CreateGoalFailed)
    }

    pub async fn delete_account(&self, id: &EntityId) -> Notification {
        self.delete(
            Collection::Accounts,
            id,
            Text::AccountDeleted,
            Text::DeleteAccountFailed,
        )
        .await
    }

    pub async fn delete_transaction(&self, id: &EntityId) -> Notification {
        self.delete(
            Collection::Transactions,
            id,
            Text::TransactionDeleted,
            Text::DeleteTransactionFailed,
        )
        .await
    }

    pub async fn delete_investment(&self, id: &EntityId) -> Notification {
        self.delete(
            Collection::Investments,
            id,
            Text::InvestmentDeleted,
            Text::DeleteInvestmentFailed,
        )
        .await
    }

    pub async fn delete_goal(&self, id: &EntityId) -> Notification {
        self.delete(Collection::Goals, id, Text::GoalDeleted, Text::DeleteGoalFailed)
            .await
    }

    /// Adds a typed contribution to a goal's current amount
    pub async fn add_goal_funds(&self, id: &EntityId, current: Decimal, input: &str) -> Notification {
        let contribution = match parse_positive_amount(input) {
            Ok(amount) => amount,
            Err(err) => {
                return self.report("add_goal_funds", Err(err.into()), String::new(), "")
            }
        };

        let update = GoalUpdate {
            current_amount: current.saturating_add(contribution),
        };
        let result = self.store.api().update_goal(id, &update).await;
        let success = self
            .locale
            .funds_added(&format_currency(contribution, self.locale));
        self.report(
            "add_goal_funds",
            result,
            success,
            self.locale.text(Text::UpdateGoalFailed),
        )
    }

    async fn delete(
        &self,
        collection: Collection,
        id: &EntityId,
        success: Text,
        fallback: Text,
    ) -> Notification {
        let result = self.store.api().delete(collection, id).await;
        self.notify("delete", result, success, fallback)
    }

    fn notify(
        &self,
        operation: &str,
        result: Result<(), DashboardError>,
        success: Text,
        fallback: Text,
    ) -> Notification {
        self.report(
            operation,
            result,
            self.locale.text(success).to_string(),
            self.locale.text(fallback),
        )
    }

    fn report(
        &self,
        operation: &str,
        result: Result<(), DashboardError>,
        success: String,
        fallback: &str,
    ) -> Notification {
        match result {
            Ok(()) => {
                info!(operation, "Operation succeeded");
                Notification::success(success)
            }
            Err(err) => {
                warn!(operation, error = %err, "Operation failed");
                Notification::error(err.user_message(fallback, self.locale))
            }
        }
    }
}

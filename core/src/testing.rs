//! In-memory backend double and fixture builders for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{
    Account, Created, EntityId, Goal, GoalUpdate, Investment, NewAccount, NewGoal, NewInvestment,
    NewTransaction, Transaction, TransactionKind,
};

use crate::api::{Collection, FinanceApi};
use crate::error::DashboardError;

/// Date the fixture data is built around
pub const TODAY: (i32, u32, u32) = (2024, 2, 15);

pub fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

pub fn account(id: i64, name: &str, balance: &str) -> Account {
    Account {
        id: EntityId::Number(id),
        name: name.to_string(),
        account_type: "Corrente".to_string(),
        balance: dec(balance),
        created_at: None,
    }
}

pub fn transaction(
    id: i64,
    kind: TransactionKind,
    category: &str,
    amount: &str,
    on: NaiveDate,
) -> Transaction {
    Transaction {
        id: EntityId::Number(id),
        account_id: EntityId::Number(1),
        kind,
        category: category.to_string(),
        amount: dec(amount),
        description: None,
        date: on,
    }
}

pub fn investment(id: i64, name: &str, initial: &str, current: &str) -> Investment {
    Investment {
        id: EntityId::Number(id),
        account_id: EntityId::Number(1),
        name: name.to_string(),
        investment_type: "ETF".to_string(),
        initial_amount: dec(initial),
        current_value: dec(current),
    }
}

pub fn goal(id: i64, title: &str, target: &str, current: &str, completed: bool) -> Goal {
    Goal {
        id: EntityId::Number(id),
        title: title.to_string(),
        description: None,
        target_amount: dec(target),
        current_amount: dec(current),
        completed,
        progress: None,
    }
}

#[derive(Default)]
struct MockState {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    investments: Vec<Investment>,
    goals: Vec<Goal>,
    failing: HashSet<Collection>,
    rejection: Option<DashboardError>,
    calls: HashMap<&'static str, usize>,
    last_transaction_limit: Option<u32>,
    created_transactions: Vec<NewTransaction>,
    created_investments: Vec<NewInvestment>,
    goal_updates: Vec<(EntityId, GoalUpdate)>,
    deleted: Vec<(Collection, EntityId)>,
    next_id: i64,
}

/// Backend double. Counts every call, can fail chosen collections on read
/// and can reject every mutation with a fixed error.
#[derive(Default)]
pub struct MockApi {
    state: RefCell<MockState>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two accounts, four February transactions, one investment and two goals
    pub fn with_fixture() -> Self {
        let api = Self::new();
        api.set_accounts(vec![
            account(1, "Conto corrente", "1500.50"),
            account(2, "Risparmio", "3000"),
        ]);
        api.set_transactions(vec![
            transaction(1, TransactionKind::Income, "Stipendio", "2000", date(2024, 2, 1)),
            transaction(2, TransactionKind::Expense, "Affitto", "-800", date(2024, 2, 3)),
            transaction(3, TransactionKind::Expense, "Cibo", "-120.40", date(2024, 2, 10)),
            transaction(4, TransactionKind::Expense, "Cibo", "-60", date(2024, 1, 28)),
        ]);
        api.set_investments(vec![investment(1, "ETF World", "1000", "1100")]);
        api.set_goals(vec![
            goal(1, "Vacanza", "2000", "500", false),
            goal(2, "Fondo emergenza", "1000", "1000", true),
        ]);
        api
    }

    pub fn set_accounts(&self, accounts: Vec<Account>) {
        self.state.borrow_mut().accounts = accounts;
    }

    pub fn set_transactions(&self, transactions: Vec<Transaction>) {
        self.state.borrow_mut().transactions = transactions;
    }

    pub fn set_investments(&self, investments: Vec<Investment>) {
        self.state.borrow_mut().investments = investments;
    }

    pub fn set_goals(&self, goals: Vec<Goal>) {
        self.state.borrow_mut().goals = goals;
    }

    /// Reads of `collection` fail with a network error from now on
    pub fn fail_collection(&self, collection: Collection) {
        self.state.borrow_mut().failing.insert(collection);
    }

    /// Every create, update and delete fails with `error` from now on
    pub fn reject_mutations(&self, error: DashboardError) {
        self.state.borrow_mut().rejection = Some(error);
    }

    pub fn calls(&self, method: &str) -> usize {
        self.state.borrow().calls.get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.state.borrow().calls.values().sum()
    }

    pub fn last_transaction_limit(&self) -> Option<u32> {
        self.state.borrow().last_transaction_limit
    }

    pub fn created_transactions(&self) -> Vec<NewTransaction> {
        self.state.borrow().created_transactions.clone()
    }

    pub fn created_investments(&self) -> Vec<NewInvestment> {
        self.state.borrow().created_investments.clone()
    }

    pub fn goal_updates(&self) -> Vec<(EntityId, GoalUpdate)> {
        self.state.borrow().goal_updates.clone()
    }

    pub fn deleted(&self) -> Vec<(Collection, EntityId)> {
        self.state.borrow().deleted.clone()
    }

    fn record(&self, method: &'static str) {
        *self.state.borrow_mut().calls.entry(method).or_insert(0) += 1;
    }

    fn read<T: Clone>(
        &self,
        method: &'static str,
        collection: Collection,
        select: impl FnOnce(&MockState) -> &Vec<T>,
    ) -> Result<Vec<T>, DashboardError> {
        self.record(method);
        let state = self.state.borrow();
        if state.failing.contains(&collection) {
            return Err(DashboardError::Network(format!(
                "{} unreachable",
                collection.path()
            )));
        }
        Ok(select(&state).clone())
    }

    fn mutate(&self, method: &'static str) -> Result<Created, DashboardError> {
        self.record(method);
        let mut state = self.state.borrow_mut();
        if let Some(error) = state.rejection.clone() {
            return Err(error);
        }
        state.next_id += 1;
        Ok(Created {
            id: EntityId::Number(100 + state.next_id),
            message: None,
        })
    }
}

#[async_trait(?Send)]
impl FinanceApi for MockApi {
    async fn list_accounts(&self) -> Result<Vec<Account>, DashboardError> {
        self.read("list_accounts", Collection::Accounts, |s| &s.accounts)
    }

    async fn list_transactions(&self, limit: Option<u32>) -> Result<Vec<Transaction>, DashboardError> {
        self.state.borrow_mut().last_transaction_limit = limit;
        self.read("list_transactions", Collection::Transactions, |s| &s.transactions)
    }

    async fn list_investments(&self) -> Result<Vec<Investment>, DashboardError> {
        self.read("list_investments", Collection::Investments, |s| &s.investments)
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, DashboardError> {
        self.read("list_goals", Collection::Goals, |s| &s.goals)
    }

    async fn create_account(&self, _request: &NewAccount) -> Result<Created, DashboardError> {
        self.mutate("create_account")
    }

    async fn create_transaction(&self, request: &NewTransaction) -> Result<Created, DashboardError> {
        let created = self.mutate("create_transaction")?;
        self.state
            .borrow_mut()
            .created_transactions
            .push(request.clone());
        Ok(created)
    }

    async fn create_investment(&self, request: &NewInvestment) -> Result<Created, DashboardError> {
        let created = self.mutate("create_investment")?;
        self.state
            .borrow_mut()
            .created_investments
            .push(request.clone());
        Ok(created)
    }

    async fn create_goal(&self, _request: &NewGoal) -> Result<Created, DashboardError> {
        self.mutate("create_goal")
    }

    async fn update_goal(&self, id: &EntityId, update: &GoalUpdate) -> Result<(), DashboardError> {
        self.mutate("update_goal")?;
        self.state
            .borrow_mut()
            .goal_updates
            .push((id.clone(), update.clone()));
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &EntityId) -> Result<(), DashboardError> {
        self.mutate("delete")?;
        self.state
            .borrow_mut()
            .deleted
            .push((collection, id.clone()));
        Ok(())
    }
}

/// Routes `tracing` output through the test harness. Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

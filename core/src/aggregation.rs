//! Dashboard statistics computed from a [`Snapshot`].
//!
//! Every function is total: empty collections give zero aggregates and no
//! input can make them fail. Month filters compare against a caller-supplied
//! `today` rather than the wall clock.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shared::{percent_of, Account, Goal, Transaction, TransactionKind};

use crate::clock::YearMonth;
use crate::store::Snapshot;

/// Number of months shown in the income/expense chart
pub const SERIES_MONTHS: u32 = 6;
/// Rows in the dashboard's recent-transactions list
pub const RECENT_LIMIT: usize = 5;
/// Accounts shown on the dashboard before "see all"
pub const ACCOUNTS_PREVIEW_LIMIT: usize = 3;

/// Income and expense totals for one calendar month. Expense is a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFlow {
    pub month: YearMonth,
    pub income: Decimal,
    pub expense: Decimal,
}

impl MonthFlow {
    pub fn delta(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }

    /// Largest of the two values as chart input
    pub fn peak(&self) -> f64 {
        self.income.max(self.expense).to_f64().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentTotals {
    pub current: Decimal,
    pub initial: Decimal,
    pub gain: Decimal,
    /// `None` when nothing was invested
    pub gain_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    /// Percentage of the month's expenses, 0..=100
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryBreakdown {
    /// No expenses this month
    Empty,
    Categories {
        total: Decimal,
        categories: Vec<CategoryShare>,
    },
}

impl CategoryBreakdown {
    pub fn categories(&self) -> &[CategoryShare] {
        match self {
            CategoryBreakdown::Empty => &[],
            CategoryBreakdown::Categories { categories, .. } => categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CategoryBreakdown::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalCounts {
    pub active: usize,
    pub completed: usize,
}

/// Everything the dashboard page shows, derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_balance: Decimal,
    pub account_count: usize,
    pub this_month: MonthFlow,
    pub investments: InvestmentTotals,
    pub goals: GoalCounts,
    pub categories: CategoryBreakdown,
    pub series: Vec<MonthFlow>,
    pub recent: Vec<Transaction>,
    pub accounts_preview: Vec<Account>,
}

/// Sum that clamps at `Decimal::MIN`/`MAX` instead of overflowing
fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

pub fn total_balance(snapshot: &Snapshot) -> Decimal {
    saturating_sum(snapshot.accounts.iter().map(|account| account.balance))
}

/// Income and expense within one month; other months are ignored
pub fn month_flow(transactions: &[Transaction], month: YearMonth) -> MonthFlow {
    let mut flow = MonthFlow {
        month,
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
    };
    for transaction in transactions.iter().filter(|t| month.contains(t.date)) {
        match transaction.kind {
            TransactionKind::Income => {
                flow.income = flow.income.saturating_add(transaction.magnitude())
            }
            TransactionKind::Expense => {
                flow.expense = flow.expense.saturating_add(transaction.magnitude())
            }
        }
    }
    flow
}

/// Flow for the calendar month containing `today`
pub fn monthly_flow(snapshot: &Snapshot, today: NaiveDate) -> MonthFlow {
    month_flow(&snapshot.transactions, YearMonth::of(today))
}

pub fn investment_totals(snapshot: &Snapshot) -> InvestmentTotals {
    let current = saturating_sum(snapshot.investments.iter().map(|i| i.current_value));
    let initial = saturating_sum(snapshot.investments.iter().map(|i| i.initial_amount));
    let gain = current.saturating_sub(initial);
    InvestmentTotals {
        current,
        initial,
        gain,
        gain_percent: percent_of(gain, initial),
    }
}

/// This month's expenses grouped by category, largest first. Categories with
/// equal totals keep the order in which they were first seen.
pub fn category_breakdown(snapshot: &Snapshot, today: NaiveDate) -> CategoryBreakdown {
    let month = YearMonth::of(today);
    let mut totals: Vec<(String, Decimal)> = Vec::new();

    for transaction in snapshot
        .transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense && month.contains(t.date))
    {
        match totals.iter_mut().find(|(name, _)| *name == transaction.category) {
            Some((_, amount)) => *amount = amount.saturating_add(transaction.magnitude()),
            None => totals.push((transaction.category.clone(), transaction.magnitude())),
        }
    }

    let total = saturating_sum(totals.iter().map(|(_, amount)| *amount));
    if total.is_zero() {
        return CategoryBreakdown::Empty;
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    let categories = totals
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            share: percent_of(amount, total).unwrap_or(0.0),
            category,
            amount,
        })
        .collect();

    CategoryBreakdown::Categories { total, categories }
}

/// One entry per month for the trailing six months including the current
/// one, oldest first
pub fn six_month_series(snapshot: &Snapshot, today: NaiveDate) -> Vec<MonthFlow> {
    let current = YearMonth::of(today);
    (0..SERIES_MONTHS)
        .rev()
        .map(|back| month_flow(&snapshot.transactions, current.months_back(back)))
        .collect()
}

/// Newest transactions first; equal dates keep their input order
pub fn transactions_by_date(snapshot: &Snapshot) -> Vec<Transaction> {
    let mut sorted = snapshot.transactions.clone();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

pub fn recent_transactions(snapshot: &Snapshot) -> Vec<Transaction> {
    let mut recent = transactions_by_date(snapshot);
    recent.truncate(RECENT_LIMIT);
    recent
}

pub fn goal_counts(snapshot: &Snapshot) -> GoalCounts {
    let completed = snapshot.goals.iter().filter(|g| g.completed).count();
    GoalCounts {
        active: snapshot.goals.len() - completed,
        completed,
    }
}

pub fn active_goals(snapshot: &Snapshot) -> Vec<Goal> {
    snapshot
        .goals
        .iter()
        .filter(|goal| !goal.completed)
        .cloned()
        .collect()
}

pub fn accounts_preview(snapshot: &Snapshot) -> Vec<Account> {
    snapshot
        .accounts
        .iter()
        .take(ACCOUNTS_PREVIEW_LIMIT)
        .cloned()
        .collect()
}

pub fn summarize(snapshot: &Snapshot, today: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        total_balance: total_balance(snapshot),
        account_count: snapshot.accounts.len(),
        this_month: monthly_flow(snapshot, today),
        investments: investment_totals(snapshot),
        goals: goal_counts(snapshot),
        categories: category_breakdown(snapshot, today),
        series: six_month_series(snapshot, today),
        recent: recent_transactions(snapshot),
        accounts_preview: accounts_preview(snapshot),
    }
}

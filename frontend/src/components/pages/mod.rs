//! One component per view. Pages only render and collect input; every
//! backend call goes back up to the app as a [`Mutation`].

pub mod accounts;
pub mod dashboard;
pub mod goals;
pub mod investments;
pub mod transactions;

use finance_hub_core::validation::{AccountForm, GoalForm, InvestmentForm, TransactionForm};
use finance_hub_core::format::format_currency;
use finance_hub_core::{Collection, Locale};
use rust_decimal::Decimal;
use shared::{Account, EntityId};

pub use accounts::AccountsPage;
pub use dashboard::DashboardPage;
pub use goals::GoalsPage;
pub use investments::InvestmentsPage;
pub use transactions::TransactionsPage;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateAccount(AccountForm),
    CreateTransaction(TransactionForm),
    CreateInvestment(InvestmentForm),
    CreateGoal(GoalForm),
    /// Asks for confirmation before anything is sent
    Delete(Collection, EntityId),
    /// Prompts for the amount to add
    AddGoalFunds { id: EntityId, current: Decimal },
}

/// `(value, label)` pairs for an account picker, labelled with the balance
pub fn account_options(accounts: &[Account], locale: Locale) -> Vec<(String, String)> {
    accounts
        .iter()
        .map(|account| {
            let label = format!("{} ({})", account.name, format_currency(account.balance, locale));
            (account.id.to_string(), label)
        })
        .collect()
}

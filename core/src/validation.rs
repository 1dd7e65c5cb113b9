//! Raw form input to backend requests. Everything here runs before a
//! request is built, so a rejected form never reaches the network.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{
    date_only, EntityId, NewAccount, NewGoal, NewInvestment, NewTransaction, TransactionKind,
};

use crate::error::{Field, ValidationError};

/// Parses a user-typed amount. Accepts `,` as decimal separator.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NotANumber(String::new()));
    }
    trimmed
        .replace(',', ".")
        .parse::<Decimal>()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))
}

/// An amount strictly greater than zero
pub fn parse_positive_amount(input: &str) -> Result<Decimal, ValidationError> {
    let amount = parse_amount(input)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive);
    }
    Ok(amount)
}

fn parse_non_negative(field: Field, input: &str) -> Result<Decimal, ValidationError> {
    let amount = parse_amount(input)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::Negative(field));
    }
    Ok(amount)
}

/// Empty input means "start from zero"
fn parse_optional_non_negative(field: Field, input: &str) -> Result<Decimal, ValidationError> {
    if input.trim().is_empty() {
        Ok(Decimal::ZERO)
    } else {
        parse_non_negative(field, input)
    }
}

fn required(field: Field, input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn account_ref(input: &str) -> Result<EntityId, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::NoAccount)
    } else {
        Ok(EntityId::from(trimmed))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub account_type: String,
    pub balance: String,
}

impl AccountForm {
    pub fn validate(&self) -> Result<NewAccount, ValidationError> {
        Ok(NewAccount {
            name: required(Field::Name, &self.name)?,
            account_type: required(Field::Type, &self.account_type)?,
            balance: parse_amount(&self.balance)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub account_id: String,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: String,
    pub description: String,
    /// `YYYY-MM-DD`; empty means today
    pub date: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            kind: TransactionKind::Expense,
            category: String::new(),
            amount: String::new(),
            description: String::new(),
            date: String::new(),
        }
    }
}

impl TransactionForm {
    /// Expenses are sent negative whatever sign was typed
    pub fn validate(&self, today: NaiveDate) -> Result<NewTransaction, ValidationError> {
        let account_id = account_ref(&self.account_id)?;
        let category = required(Field::Category, &self.category)?;
        let magnitude = parse_positive_amount(&self.amount)?;
        let amount = match self.kind {
            TransactionKind::Income => magnitude,
            TransactionKind::Expense => -magnitude,
        };
        let date = if self.date.trim().is_empty() {
            today
        } else {
            date_only::parse(&self.date)
                .map_err(|_| ValidationError::InvalidDate(self.date.trim().to_string()))?
        };

        Ok(NewTransaction {
            account_id,
            kind: self.kind,
            category,
            amount,
            description: self.description.trim().to_string(),
            date: Some(date),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentForm {
    pub account_id: String,
    pub name: String,
    pub investment_type: String,
    pub initial_amount: String,
    /// Empty means the position is worth what was paid
    pub current_value: String,
}

impl InvestmentForm {
    pub fn validate(&self) -> Result<NewInvestment, ValidationError> {
        let account_id = account_ref(&self.account_id)?;
        let name = required(Field::Name, &self.name)?;
        let investment_type = required(Field::Type, &self.investment_type)?;
        let initial_amount = parse_positive_amount(&self.initial_amount)?;
        let current_value = if self.current_value.trim().is_empty() {
            initial_amount
        } else {
            parse_non_negative(Field::CurrentValue, &self.current_value)?
        };

        Ok(NewInvestment {
            account_id,
            name,
            investment_type,
            initial_amount,
            current_value,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub target_amount: String,
    pub current_amount: String,
}

impl GoalForm {
    pub fn validate(&self) -> Result<NewGoal, ValidationError> {
        Ok(NewGoal {
            title: required(Field::Title, &self.title)?,
            description: self.description.trim().to_string(),
            target_amount: parse_positive_amount(&self.target_amount)?,
            current_amount: parse_optional_non_negative(Field::CurrentAmount, &self.current_amount)?,
        })
    }
}

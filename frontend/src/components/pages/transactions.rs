use finance_hub_core::format::{format_date, format_signed_currency};
use finance_hub_core::validation::TransactionForm;
use finance_hub_core::{Collection, Locale, Text};
use shared::{Account, Transaction, TransactionKind};
use yew::prelude::*;

use super::{account_options, Mutation};
use crate::components::fields::{bind, SelectField, TextField};

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    /// Newest first
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub locale: Locale,
    pub on_mutate: Callback<Mutation>,
}

#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let locale = props.locale;
    let show_form = use_state(|| false);
    let form = use_state(TransactionForm::default);

    let toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| show_form.set(!*show_form))
    };

    let onsubmit = {
        let form = form.clone();
        let show_form = show_form.clone();
        let on_mutate = props.on_mutate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_mutate.emit(Mutation::CreateTransaction((*form).clone()));
            form.set(TransactionForm::default());
            show_form.set(false);
        })
    };

    let kind_options = vec![
        (TransactionKind::Expense.as_str().to_string(), locale.expense_label().to_string()),
        (TransactionKind::Income.as_str().to_string(), locale.income_label().to_string()),
    ];

    html! {
        <section class="page transactions-page">
            <header class="page-header">
                <button class="btn btn-primary" onclick={toggle_form}>
                    {locale.text(if *show_form { Text::Cancel } else { Text::NewTransaction })}
                </button>
            </header>

            {if *show_form {
                html! {
                    <form class="entity-form" {onsubmit}>
                        <SelectField
                            id="transaction-account"
                            label={locale.text(Text::Account)}
                            placeholder={locale.text(Text::SelectAccount)}
                            value={form.account_id.clone()}
                            options={account_options(&props.accounts, locale)}
                            on_change={bind(&form, |f: &mut TransactionForm, v| f.account_id = v)}
                        />
                        <SelectField
                            id="transaction-kind"
                            label={locale.text(Text::Type)}
                            value={form.kind.as_str().to_string()}
                            options={kind_options}
                            on_change={bind(&form, |f: &mut TransactionForm, v| {
                                f.kind = parse_kind(&v);
                            })}
                        />
                        <TextField
                            id="transaction-category"
                            label={locale.text(Text::Category)}
                            value={form.category.clone()}
                            on_change={bind(&form, |f: &mut TransactionForm, v| f.category = v)}
                        />
                        <TextField
                            id="transaction-amount"
                            label={locale.text(Text::Amount)}
                            input_type="number"
                            step="0.01"
                            value={form.amount.clone()}
                            on_change={bind(&form, |f: &mut TransactionForm, v| f.amount = v)}
                        />
                        <TextField
                            id="transaction-description"
                            label={locale.text(Text::Description)}
                            value={form.description.clone()}
                            on_change={bind(&form, |f: &mut TransactionForm, v| f.description = v)}
                        />
                        <TextField
                            id="transaction-date"
                            label={locale.text(Text::Date)}
                            input_type="date"
                            value={form.date.clone()}
                            on_change={bind(&form, |f: &mut TransactionForm, v| f.date = v)}
                        />
                        <button type="submit" class="btn btn-primary">{locale.text(Text::AddTransaction)}</button>
                    </form>
                }
            } else { html! {} }}

            {if props.transactions.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{locale.text(Text::NoTransactionsRecorded)}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="list">
                        {for props.transactions.iter().map(|transaction| {
                            transaction_row(transaction, &props.accounts, locale, &props.on_mutate)
                        })}
                    </div>
                }
            }}
        </section>
    }
}

fn transaction_row(
    transaction: &Transaction,
    accounts: &[Account],
    locale: Locale,
    on_mutate: &Callback<Mutation>,
) -> Html {
    let income = transaction.kind == TransactionKind::Income;
    let account_name = accounts
        .iter()
        .find(|account| account.id == transaction.account_id)
        .map(|account| account.name.as_str())
        .unwrap_or(locale.text(Text::UnknownAccount));

    let on_delete = {
        let on_mutate = on_mutate.clone();
        let id = transaction.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_mutate.emit(Mutation::Delete(Collection::Transactions, id.clone()))
        })
    };

    html! {
        <div class="list-item" key={transaction.id.to_string()}>
            <div class={classes!("list-item-icon", if income { "green" } else { "red" })}>
                {if income { "💰" } else { "💸" }}
            </div>
            <div class="list-item-content">
                <div class="list-item-title">{transaction.title()}</div>
                <div class="list-item-subtitle">
                    {format!(
                        "{} • {} • {}",
                        format_date(transaction.date, locale),
                        account_name,
                        transaction.category
                    )}
                </div>
            </div>
            <div class={classes!("list-item-amount", if income { "positive" } else { "negative" })}>
                {format_signed_currency(transaction.signed_amount(), locale)}
            </div>
            <button class="btn-delete" title={locale.text(Text::Delete)} onclick={on_delete}>{"🗑️"}</button>
        </div>
    }
}

fn parse_kind(value: &str) -> TransactionKind {
    if value == TransactionKind::Income.as_str() {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind_defaults_to_expense() {
        assert_eq!(parse_kind("entrata"), TransactionKind::Income);
        assert_eq!(parse_kind("uscita"), TransactionKind::Expense);
        assert_eq!(parse_kind(""), TransactionKind::Expense);
    }
}

use finance_hub_core::format::format_currency;
use finance_hub_core::validation::AccountForm;
use finance_hub_core::{Collection, Locale, Text};
use shared::Account;
use yew::prelude::*;

use super::Mutation;
use crate::components::fields::{bind, TextField};

#[derive(Properties, PartialEq)]
pub struct AccountsPageProps {
    pub accounts: Vec<Account>,
    pub locale: Locale,
    pub on_mutate: Callback<Mutation>,
}

#[function_component(AccountsPage)]
pub fn accounts_page(props: &AccountsPageProps) -> Html {
    let locale = props.locale;
    let show_form = use_state(|| false);
    let form = use_state(AccountForm::default);

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
            on_mutate.emit(Mutation::CreateAccount((*form).clone()));
            form.set(AccountForm::default());
            show_form.set(false);
        })
    };

    html! {
        <section class="page accounts-page">
            <header class="page-header">
                <button class="btn btn-primary" onclick={toggle_form}>
                    {locale.text(if *show_form { Text::Cancel } else { Text::NewAccount })}
                </button>
            </header>

            {if *show_form {
                html! {
                    <form class="entity-form" {onsubmit}>
                        <TextField
                            id="account-name"
                            label={locale.text(Text::Name)}
                            value={form.name.clone()}
                            on_change={bind(&form, |f: &mut AccountForm, v| f.name = v)}
                        />
                        <TextField
                            id="account-type"
                            label={locale.text(Text::Type)}
                            placeholder={locale.text(Text::AccountTypeHint)}
                            value={form.account_type.clone()}
                            on_change={bind(&form, |f: &mut AccountForm, v| f.account_type = v)}
                        />
                        <TextField
                            id="account-balance"
                            label={locale.text(Text::OpeningBalance)}
                            input_type="number"
                            step="0.01"
                            value={form.balance.clone()}
                            on_change={bind(&form, |f: &mut AccountForm, v| f.balance = v)}
                        />
                        <button type="submit" class="btn btn-primary">{locale.text(Text::CreateAccount)}</button>
                    </form>
                }
            } else { html! {} }}

            {if props.accounts.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{locale.text(Text::NoAccountsYet)}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="list">
                        {for props.accounts.iter().map(|account| {
                            let on_delete = {
                                let on_mutate = props.on_mutate.clone();
                                let id = account.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    on_mutate.emit(Mutation::Delete(Collection::Accounts, id.clone()))
                                })
                            };
                            html! {
                                <div class="list-item" key={account.id.to_string()}>
                                    <div class="list-item-icon blue">{"💳"}</div>
                                    <div class="list-item-content">
                                        <div class="list-item-title">{&account.name}</div>
                                        <div class="list-item-subtitle">{&account.account_type}</div>
                                    </div>
                                    <div class="list-item-amount">
                                        {format_currency(account.balance, locale)}
                                    </div>
                                    <button class="btn-delete" title={locale.text(Text::Delete)} onclick={on_delete}>{"🗑️"}</button>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}

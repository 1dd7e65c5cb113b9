use finance_hub_core::aggregation::InvestmentTotals;
use finance_hub_core::format::{format_currency, format_percent, format_signed_currency};
use finance_hub_core::validation::InvestmentForm;
use finance_hub_core::{Collection, Locale, Text};
use rust_decimal::Decimal;
use shared::{Account, Investment};
use yew::prelude::*;

use super::{account_options, Mutation};
use crate::components::fields::{bind, SelectField, TextField};
use crate::components::stat_card::{tone_for, StatCard};

#[derive(Properties, PartialEq)]
pub struct InvestmentsPageProps {
    pub investments: Vec<Investment>,
    pub totals: InvestmentTotals,
    pub accounts: Vec<Account>,
    pub locale: Locale,
    pub on_mutate: Callback<Mutation>,
}

#[function_component(InvestmentsPage)]
pub fn investments_page(props: &InvestmentsPageProps) -> Html {
    let show_form = use_state(|| false);
    let form = use_state(InvestmentForm::default);
    let locale = props.locale;

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
            on_mutate.emit(Mutation::CreateInvestment((*form).clone()));
            form.set(InvestmentForm::default());
            show_form.set(false);
        })
    };

    let totals = &props.totals;

    html! {
        <section class="page investments-page">
            <header class="page-header">
                <button class="btn btn-primary" onclick={toggle_form}>
                    {locale.text(if *show_form { Text::Cancel } else { Text::NewInvestment })}
                </button>
            </header>

            <div class="stats-grid">
                <StatCard label={locale.text(Text::CurrentValue)} value={format_currency(totals.current, locale)} />
                <StatCard label={locale.text(Text::Invested)} value={format_currency(totals.initial, locale)} />
                <StatCard
                    label={locale.text(Text::Return)}
                    value={format_signed_currency(totals.gain, locale)}
                    detail={format_percent(totals.gain_percent)}
                    tone={tone_for(totals.gain >= Decimal::ZERO)}
                />
            </div>

            {if *show_form {
                html! {
                    <form class="entity-form" {onsubmit}>
                        <SelectField
                            id="investment-account"
                            label={locale.text(Text::FundingAccount)}
                            placeholder={locale.text(Text::SelectAccount)}
                            value={form.account_id.clone()}
                            options={account_options(&props.accounts, locale)}
                            on_change={bind(&form, |f: &mut InvestmentForm, v| f.account_id = v)}
                        />
                        <TextField
                            id="investment-name"
                            label={locale.text(Text::Name)}
                            value={form.name.clone()}
                            on_change={bind(&form, |f: &mut InvestmentForm, v| f.name = v)}
                        />
                        <TextField
                            id="investment-type"
                            label={locale.text(Text::Type)}
                            placeholder={locale.text(Text::InvestmentTypeHint)}
                            value={form.investment_type.clone()}
                            on_change={bind(&form, |f: &mut InvestmentForm, v| f.investment_type = v)}
                        />
                        <TextField
                            id="investment-initial"
                            label={locale.text(Text::AmountInvested)}
                            input_type="number"
                            step="0.01"
                            value={form.initial_amount.clone()}
                            on_change={bind(&form, |f: &mut InvestmentForm, v| f.initial_amount = v)}
                        />
                        <TextField
                            id="investment-current"
                            label={locale.text(Text::CurrentValueOptional)}
                            input_type="number"
                            step="0.01"
                            value={form.current_value.clone()}
                            on_change={bind(&form, |f: &mut InvestmentForm, v| f.current_value = v)}
                        />
                        <button type="submit" class="btn btn-primary">{locale.text(Text::CreateInvestment)}</button>
                    </form>
                }
            } else { html! {} }}

            {if props.investments.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{locale.text(Text::NoInvestmentsYet)}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="card-grid">
                        {for props.investments.iter().map(|investment| {
                            investment_card(investment, locale, &props.on_mutate)
                        })}
                    </div>
                }
            }}
        </section>
    }
}

fn investment_card(investment: &Investment, locale: Locale, on_mutate: &Callback<Mutation>) -> Html {
    let gain = investment.gain();
    let up = gain >= Decimal::ZERO;

    let on_delete = {
        let on_mutate = on_mutate.clone();
        let id = investment.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_mutate.emit(Mutation::Delete(Collection::Investments, id.clone()))
        })
    };

    html! {
        <div class="card investment-card" key={investment.id.to_string()}>
            <div class="card-header">
                <span>{&investment.investment_type}</span>
                <span class="card-icon">{"📊"}</span>
            </div>
            <div class="card-title">{&investment.name}</div>
            <div class="card-label">{locale.text(Text::CurrentValue)}</div>
            <div class="card-amount">{format_currency(investment.current_value, locale)}</div>
            <div class={classes!("card-change", tone_for(up))}>
                <span class="arrow">{if up { "↑" } else { "↓" }}</span>
                {format!(
                    " {} ({})",
                    format_signed_currency(gain, locale),
                    format_percent(investment.gain_percent())
                )}
            </div>
            <button class="btn-delete-card" title={locale.text(Text::Delete)} onclick={on_delete}>{"🗑️"}</button>
        </div>
    }
}

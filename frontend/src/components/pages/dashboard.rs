use finance_hub_core::aggregation::{CategoryBreakdown, DashboardSummary, InvestmentTotals};
use finance_hub_core::animation::AnimationFrame;
use finance_hub_core::chart::{BarGroup, ChartStyle};
use finance_hub_core::config::AnimationConfig;
use finance_hub_core::format::{
    format_currency, format_date, format_percent, format_signed_currency, format_year_month,
};
use finance_hub_core::{Locale, Text};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use shared::{percent_of, Page, TransactionKind};
use yew::prelude::*;

use crate::components::chart_canvas::{ChartCanvas, ChartData};
use crate::components::stat_card::{tone_for, StatCard};
use crate::hooks::use_investment_animation;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub summary: DashboardSummary,
    /// Load counter from the app; every new value restarts the ticker
    pub generation: u64,
    pub locale: Locale,
    pub chart_style: ChartStyle,
    pub chart_height: f64,
    pub animation: AnimationConfig,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let animation = use_investment_animation(props.animation.clone());
    let summary = &props.summary;
    let locale = props.locale;

    // Restart the ticker on every fresh load, even when the figures are unchanged
    {
        let start = animation.actions.start.clone();
        let seed = animation_seed(summary);
        use_effect_with((props.generation, seed), move |&(_, (total, investment_return))| {
            start.emit((total, investment_return));
        });
    }

    let ticker = InvestmentTicker::new(&summary.investments, animation.frame);
    let month_delta = summary.this_month.delta();

    html! {
        <section class="page dashboard-page">
            <div class="stats-grid">
                <StatCard
                    label={locale.text(Text::TotalBalance)}
                    value={format_currency(summary.total_balance, locale)}
                    detail={locale.account_count(summary.account_count)}
                />
                <StatCard
                    label={format!(
                        "{} ({})",
                        locale.text(Text::ThisMonth),
                        format_year_month(summary.this_month.month, locale)
                    )}
                    value={format_signed_currency(month_delta, locale)}
                    detail={format!(
                        "{} {} / {} {}",
                        locale.income_label(),
                        format_currency(summary.this_month.income, locale),
                        locale.expense_label(),
                        format_currency(summary.this_month.expense, locale)
                    )}
                    tone={tone_for(month_delta >= Decimal::ZERO)}
                />
                <StatCard
                    label={locale.page_title(Page::Investments)}
                    value={format_currency(from_f64(ticker.total), locale)}
                    detail={ticker.detail(locale)}
                    tone={tone_for(ticker.up())}
                />
                <StatCard
                    label={locale.text(Text::MonthlyExpenses)}
                    value={format_currency(summary.this_month.expense, locale)}
                />
                <StatCard
                    label={locale.text(Text::ActiveGoals)}
                    value={summary.goals.active.to_string()}
                    detail={locale.completed_count(summary.goals.completed)}
                />
            </div>

            <div class="charts-grid">
                <div class="card chart-card">
                    <h3>{locale.text(Text::InvestmentTrend)}</h3>
                    <ChartCanvas
                        data={ChartData::Line(animation.history.clone())}
                        style={props.chart_style}
                        height={props.chart_height}
                    />
                </div>
                <div class="card chart-card">
                    <h3>{locale.text(Text::IncomeVsExpenses)}</h3>
                    <ChartCanvas
                        data={ChartData::Bars(BarGroup::from_flows(&summary.series, locale))}
                        style={props.chart_style}
                        height={props.chart_height}
                    />
                </div>
            </div>

            <div class="panels-grid">
                {category_panel(&summary.categories, locale)}
                {recent_panel(summary, locale)}
                {accounts_panel(summary, locale)}
            </div>
        </section>
    }
}

/// `(total, return)` to seed the ticker with
fn animation_seed(summary: &DashboardSummary) -> (f64, f64) {
    (
        summary.investments.current.to_f64().unwrap_or(0.0),
        summary.investments.gain.to_f64().unwrap_or(0.0),
    )
}

fn from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Figures on the investments card. Before the first tick it shows the
/// stored gain; afterwards the latest tick's change.
#[derive(Debug, Clone, PartialEq)]
struct InvestmentTicker {
    total: f64,
    change: f64,
    percent: Option<f64>,
}

impl InvestmentTicker {
    fn new(totals: &InvestmentTotals, frame: Option<AnimationFrame>) -> Self {
        match frame {
            Some(frame) => Self {
                total: frame.total,
                change: frame.delta,
                percent: percent_of(from_f64(frame.investment_return), totals.initial),
            },
            None => Self {
                total: totals.current.to_f64().unwrap_or(0.0),
                change: totals.gain.to_f64().unwrap_or(0.0),
                percent: totals.gain_percent,
            },
        }
    }

    fn up(&self) -> bool {
        self.change >= 0.0
    }

    fn detail(&self, locale: Locale) -> String {
        format!(
            "{} {} ({})",
            if self.up() { "↑" } else { "↓" },
            format_signed_currency(from_f64(self.change), locale),
            format_percent(self.percent)
        )
    }
}

fn category_panel(breakdown: &CategoryBreakdown, locale: Locale) -> Html {
    let body = match breakdown {
        CategoryBreakdown::Empty => html! {
            <p class="empty-state">{locale.text(Text::NoExpensesThisMonth)}</p>
        },
        CategoryBreakdown::Categories { categories, .. } => html! {
            <ul class="category-list">
                {for categories.iter().map(|share| html! {
                    <li key={share.category.clone()} class="category-item">
                        <div class="category-row">
                            <span>{&share.category}</span>
                            <span>{format_currency(share.amount, locale)}</span>
                        </div>
                        <div class="progress-bar">
                            <div class="progress-fill" style={format!("width: {:.1}%", share.share)}></div>
                        </div>
                    </li>
                })}
            </ul>
        },
    };

    html! {
        <div class="card panel">
            <h3>{locale.text(Text::ExpensesByCategory)}</h3>
            {body}
        </div>
    }
}

fn recent_panel(summary: &DashboardSummary, locale: Locale) -> Html {
    html! {
        <div class="card panel">
            <h3>{locale.text(Text::RecentTransactions)}</h3>
            {if summary.recent.is_empty() {
                html! { <p class="empty-state">{locale.text(Text::NoTransactions)}</p> }
            } else {
                html! {
                    <div class="list">
                        {for summary.recent.iter().map(|transaction| {
                            let income = transaction.kind == TransactionKind::Income;
                            html! {
                                <div class="list-item" key={transaction.id.to_string()}>
                                    <div class="list-item-content">
                                        <div class="list-item-title">{transaction.title()}</div>
                                        <div class="list-item-subtitle">
                                            {format_date(transaction.date, locale)}
                                        </div>
                                    </div>
                                    <div class={classes!("list-item-amount", tone_for(income))}>
                                        {format_signed_currency(transaction.signed_amount(), locale)}
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}

fn accounts_panel(summary: &DashboardSummary, locale: Locale) -> Html {
    html! {
        <div class="card panel">
            <h3>{locale.page_title(Page::Accounts)}</h3>
            {if summary.accounts_preview.is_empty() {
                html! { <p class="empty-state">{locale.text(Text::NoAccountsAvailable)}</p> }
            } else {
                html! {
                    <div class="list">
                        {for summary.accounts_preview.iter().map(|account| html! {
                            <div class="list-item" key={account.id.to_string()}>
                                <div class="list-item-content">
                                    <div class="list-item-title">{&account.name}</div>
                                    <div class="list-item-subtitle">{&account.account_type}</div>
                                </div>
                                <div class="list-item-amount">
                                    {format_currency(account.balance, locale)}
                                </div>
                            </div>
                        })}
                    </div>
                }
            }}
        </div>
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use finance_hub_core::chart::ChartStyle;
use finance_hub_core::{
    Collection, DashboardController, Notification, PageView, SystemClock, Text,
};
use shared::Page;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::pages::{
    AccountsPage, DashboardPage, GoalsPage, InvestmentsPage, Mutation, TransactionsPage,
};
use components::{NotificationBanner, Sidebar};
use services::config::load_config;
use services::{GlooApi, LocalPageStorage, Logger};

type Controller = DashboardController<GlooApi, SystemClock, LocalPageStorage>;

/// How long a notification stays on screen
const NOTIFICATION_MS: u32 = 3000;

async fn apply(controller: &Controller, mutation: Mutation) -> Option<Notification> {
    let locale = controller.locale();
    let notification = match mutation {
        Mutation::CreateAccount(form) => controller.create_account(&form).await,
        Mutation::CreateTransaction(form) => controller.create_transaction(&form).await,
        Mutation::CreateInvestment(form) => controller.create_investment(&form).await,
        Mutation::CreateGoal(form) => controller.create_goal(&form).await,
        Mutation::Delete(collection, id) => {
            if !gloo::dialogs::confirm(locale.confirm_delete(collection)) {
                return None;
            }
            match collection {
                Collection::Accounts => controller.delete_account(&id).await,
                Collection::Transactions => controller.delete_transaction(&id).await,
                Collection::Investments => controller.delete_investment(&id).await,
                Collection::Goals => controller.delete_goal(&id).await,
            }
        }
        Mutation::AddGoalFunds { id, current } => {
            let input = gloo::dialogs::prompt(locale.text(Text::AddFundsPrompt), Some("0"))?;
            controller.add_goal_funds(&id, current, &input).await
        }
    };
    Some(notification)
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let controller = {
        let config = Rc::clone(&config);
        use_memo((), move |_| {
            Controller::new(
                GlooApi::with_base_url(config.base_url()),
                SystemClock,
                LocalPageStorage,
                &config,
            )
        })
    };

    let page = use_state(|| controller.restore_page());
    let view = use_state(|| None::<PageView>);
    let loading = use_state(|| true);
    // Bumped on every successful load so the dashboard reseeds its ticker
    let load_count = use_mut_ref(|| 0u64);
    let generation = use_state(|| 0u64);
    let notification = use_state(|| None::<Notification>);

    let show_notification = {
        let notification = notification.clone();
        Callback::from(move |next: Notification| {
            notification.set(Some(next));
            let notification = notification.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(NOTIFICATION_MS).await;
                notification.set(None);
            });
        })
    };

    let navigate = {
        let controller = Rc::clone(&controller);
        let page = page.clone();
        let view = view.clone();
        let loading = loading.clone();
        let generation = generation.clone();
        let load_count = Rc::clone(&load_count);
        let show_notification = show_notification.clone();
        Callback::from(move |target: Page| {
            page.set(target);
            loading.set(true);
            let controller = Rc::clone(&controller);
            let view = view.clone();
            let loading = loading.clone();
            let generation = generation.clone();
            let load_count = Rc::clone(&load_count);
            let show_notification = show_notification.clone();
            spawn_local(async move {
                let locale = controller.locale();
                match controller.navigate(target).await {
                    Ok(next) => {
                        generation.set(next_generation(&load_count));
                        view.set(Some(next));
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "app",
                            &format!("Failed to load {}: {}", target.as_str(), e),
                        );
                        view.set(None);
                        show_notification.emit(Notification::error(
                            e.user_message(locale.text(Text::LoadFailed), locale),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial load of the page saved from the last visit
    {
        let navigate = navigate.clone();
        let start = *page;
        use_effect_with((), move |_| {
            Logger::info_with_component("app", &format!("Starting on {}", start.as_str()));
            navigate.emit(start);
        });
    }

    let on_mutate = {
        let controller = Rc::clone(&controller);
        let view = view.clone();
        let generation = generation.clone();
        let load_count = Rc::clone(&load_count);
        let show_notification = show_notification.clone();
        Callback::from(move |mutation: Mutation| {
            let controller = Rc::clone(&controller);
            let view = view.clone();
            let generation = generation.clone();
            let load_count = Rc::clone(&load_count);
            let show_notification = show_notification.clone();
            spawn_local(async move {
                let Some(result) = apply(&controller, mutation).await else {
                    return;
                };
                let failed = result.is_error();
                show_notification.emit(result);
                if failed {
                    return;
                }
                match controller.refresh().await {
                    Ok(next) => {
                        generation.set(next_generation(&load_count));
                        view.set(Some(next));
                    }
                    Err(e) => Logger::warn_with_component(
                        "app",
                        &format!("Refresh after update failed: {}", e),
                    ),
                }
            });
        })
    };

    let locale = controller.locale();
    let chart_style = ChartStyle::new(&config.chart, locale);

    let content = match (*view).clone() {
        // A stale view from the previous page is not shown while loading
        Some(view) if !*loading || page_of(&view) == *page => match view {
            PageView::Dashboard(summary) => html! {
                <DashboardPage
                    {summary}
                    generation={*generation}
                    {locale}
                    {chart_style}
                    chart_height={config.chart.height}
                    animation={config.animation.clone()}
                />
            },
            PageView::Accounts(accounts) => html! {
                <AccountsPage {accounts} {locale} on_mutate={on_mutate.clone()} />
            },
            PageView::Transactions { transactions, accounts } => html! {
                <TransactionsPage {transactions} {accounts} {locale} on_mutate={on_mutate.clone()} />
            },
            PageView::Investments { investments, totals, accounts } => html! {
                <InvestmentsPage {investments} {totals} {accounts} {locale} on_mutate={on_mutate.clone()} />
            },
            PageView::Goals(goals) => html! {
                <GoalsPage {goals} {locale} on_mutate={on_mutate.clone()} />
            },
        },
        _ if *loading => html! { <div class="loading">{locale.text(Text::Loading)}</div> },
        _ => html! {
            <div class="empty-state">
                <p>{locale.text(Text::ServerUnreachable)}</p>
            </div>
        },
    };

    html! {
        <div class="app-shell">
            <Sidebar current={*page} {locale} on_navigate={navigate} />
            <main class="content">
                <h1 class="page-title">{locale.page_title(*page)}</h1>
                {content}
            </main>
            <NotificationBanner notification={(*notification).clone()} />
        </div>
    }
}

fn next_generation(load_count: &RefCell<u64>) -> u64 {
    let mut count = load_count.borrow_mut();
    *count += 1;
    *count
}

fn page_of(view: &PageView) -> Page {
    match view {
        PageView::Dashboard(_) => Page::Dashboard,
        PageView::Accounts(_) => Page::Accounts,
        PageView::Transactions { .. } => Page::Transactions,
        PageView::Investments { .. } => Page::Investments,
        PageView::Goals(_) => Page::Goals,
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_generation_changes_on_every_load() {
        let load_count = RefCell::new(0u64);
        assert_eq!(next_generation(&load_count), 1);
        assert_eq!(next_generation(&load_count), 2);
        assert_eq!(*load_count.borrow(), 2);
    }
}

use finance_hub_core::format::format_currency;
use finance_hub_core::validation::GoalForm;
use finance_hub_core::{Collection, Locale, Text};
use shared::Goal;
use yew::prelude::*;

use super::Mutation;
use crate::components::fields::{bind, TextField};

#[derive(Properties, PartialEq)]
pub struct GoalsPageProps {
    /// Goals not yet completed
    pub goals: Vec<Goal>,
    pub locale: Locale,
    pub on_mutate: Callback<Mutation>,
}

#[function_component(GoalsPage)]
pub fn goals_page(props: &GoalsPageProps) -> Html {
    let locale = props.locale;
    let show_form = use_state(|| false);
    let form = use_state(GoalForm::default);

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
            on_mutate.emit(Mutation::CreateGoal((*form).clone()));
            form.set(GoalForm::default());
            show_form.set(false);
        })
    };

    html! {
        <section class="page goals-page">
            <header class="page-header">
                <button class="btn btn-primary" onclick={toggle_form}>
                    {locale.text(if *show_form { Text::Cancel } else { Text::NewGoal })}
                </button>
            </header>

            {if *show_form {
                html! {
                    <form class="entity-form" {onsubmit}>
                        <TextField
                            id="goal-title"
                            label={locale.text(Text::Title)}
                            value={form.title.clone()}
                            on_change={bind(&form, |f: &mut GoalForm, v| f.title = v)}
                        />
                        <TextField
                            id="goal-description"
                            label={locale.text(Text::Description)}
                            value={form.description.clone()}
                            on_change={bind(&form, |f: &mut GoalForm, v| f.description = v)}
                        />
                        <TextField
                            id="goal-target"
                            label={locale.text(Text::TargetAmount)}
                            input_type="number"
                            step="0.01"
                            value={form.target_amount.clone()}
                            on_change={bind(&form, |f: &mut GoalForm, v| f.target_amount = v)}
                        />
                        <TextField
                            id="goal-current"
                            label={locale.text(Text::AlreadySaved)}
                            input_type="number"
                            step="0.01"
                            value={form.current_amount.clone()}
                            on_change={bind(&form, |f: &mut GoalForm, v| f.current_amount = v)}
                        />
                        <button type="submit" class="btn btn-primary">{locale.text(Text::CreateGoal)}</button>
                    </form>
                }
            } else { html! {} }}

            {if props.goals.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{locale.text(Text::NoActiveGoals)}</p>
                    </div>
                }
            } else {
                html! {
                    <div class="list">
                        {for props.goals.iter().map(|goal| goal_row(goal, locale, &props.on_mutate))}
                    </div>
                }
            }}
        </section>
    }
}

fn goal_row(goal: &Goal, locale: Locale, on_mutate: &Callback<Mutation>) -> Html {
    let progress = goal.progress_percent();

    let on_add_funds = {
        let on_mutate = on_mutate.clone();
        let id = goal.id.clone();
        let current = goal.current_amount;
        Callback::from(move |_: MouseEvent| {
            on_mutate.emit(Mutation::AddGoalFunds {
                id: id.clone(),
                current,
            })
        })
    };
    let on_delete = {
        let on_mutate = on_mutate.clone();
        let id = goal.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_mutate.emit(Mutation::Delete(Collection::Goals, id.clone()))
        })
    };

    html! {
        <div class="list-item goal-item" key={goal.id.to_string()}>
            <div class="list-item-icon purple">{"🎯"}</div>
            <div class="list-item-content">
                <div class="list-item-title">{&goal.title}</div>
                <div class="list-item-subtitle">
                    {goal.description.as_deref().filter(|d| !d.trim().is_empty()).unwrap_or(locale.text(Text::NoDescription))}
                </div>
                <div class="goal-progress">
                    <span>
                        {locale.amount_of(
                            &format_currency(goal.current_amount, locale),
                            &format_currency(goal.target_amount, locale)
                        )}
                    </span>
                    <span class="goal-percent">{format!("{:.0}%", progress)}</span>
                </div>
                <div class="progress-bar">
                    <div
                        class={classes!("progress-fill", goal.completed.then_some("completed"))}
                        style={format!("width: {:.1}%", progress)}
                    ></div>
                </div>
            </div>
            <div class="list-item-actions">
                <button class="btn-add-funds" title={locale.text(Text::AddFunds)} onclick={on_add_funds}>{"💰"}</button>
                <button class="btn-delete" title={locale.text(Text::Delete)} onclick={on_delete}>{"🗑️"}</button>
            </div>
        </div>
    }
}

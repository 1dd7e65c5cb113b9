use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    /// Extra class for the value, e.g. "positive" or "negative"
    #[prop_or_default]
    pub tone: Option<&'static str>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = classes!("stat-value", props.tone);

    html! {
        <div class="stat-card">
            <span class="stat-label">{&props.label}</span>
            <span class={value_class}>{&props.value}</span>
            {if let Some(detail) = props.detail.as_ref() {
                html! { <span class="stat-detail">{detail}</span> }
            } else { html! {} }}
        </div>
    }
}

/// Class for a money figure that can go either way
pub fn tone_for(positive: bool) -> &'static str {
    if positive {
        "positive"
    } else {
        "negative"
    }
}

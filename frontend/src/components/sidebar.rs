use finance_hub_core::Locale;
use shared::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current: Page,
    pub locale: Locale,
    pub on_navigate: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <nav class="sidebar">
            <h1 class="brand">{"Finance Hub"}</h1>
            <ul class="nav-links">
                {for Page::ALL.iter().map(|&page| {
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(page);
                        })
                    };
                    let class = classes!("nav-link", (page == props.current).then_some("active"));
                    html! {
                        <li key={page.as_str()}>
                            <a href={format!("#{}", page.as_str())} {class} {onclick}>
                                {props.locale.page_title(page)}
                            </a>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}

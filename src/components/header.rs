use yew::prelude::*;

use crate::config;
use crate::content;
use crate::state::nav::Section;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let nav_link = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        });
        html! {
            <li>
                <a href={section.anchor()} onclick={onclick}>{section.label()}</a>
            </li>
        }
    };

    html! {
        <header class="site-header">
            <div class="container header-inner">
                <a class="logo" href="#home" aria-label="Pure Vision Painting home">
                    <img src={config::LOGO_PATH} alt="Pure Vision Painting Logo" class="brand-logo" />
                    <span class="brand-text">
                        <strong>{"Pure Vision"}</strong>
                        <small>{"Painting"}</small>
                    </span>
                </a>

                <nav class={classes!("main-nav", props.open.then(|| "open"))}>
                    <ul>
                        { for Section::ALL.into_iter().map(nav_link) }
                    </ul>
                </nav>

                <div class="header-ctas">
                    <a class="btn btn-primary" href={Section::Contact.anchor()}>
                        {"Get a Free Quote"}
                    </a>
                    <button aria-label="Toggle navigation" class="nav-toggle" onclick={toggle}>
                        { if props.open { "✖" } else { "☰" } }
                    </button>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let links = [Section::Home, Section::Services, Section::Portfolio, Section::Contact];
    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-left">
                    <p>{format!("© {} {}", props.year, content::BUSINESS_NAME)}</p>
                    <p>
                        <small>{"Licensed & Insured • Quality workmanship • Free quotes"}</small>
                    </p>
                </div>
                <nav class="footer-nav" aria-label="Footer">
                    {
                        for links.into_iter().map(|section| {
                            let label = match section {
                                Section::Contact => "Contact",
                                other => other.label(),
                            };
                            html! { <a href={section.anchor()}>{label}</a> }
                        })
                    }
                </nav>
            </div>
        </footer>
    }
}

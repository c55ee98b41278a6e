use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod error;
mod state {
    pub mod controller;
    pub mod form;
    pub mod nav;
    pub mod rotator;
    pub mod submission;
}
mod head {
    pub mod inject;
    pub mod tags;
}
mod net {
    pub mod transport;
}
mod components {
    pub mod contact;
    pub mod header;
    pub mod sections;
}
mod pages {
    pub mod home;
    pub mod not_found;
}
#[cfg(test)]
mod test_support;

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::{Interval, Timeout};
use log::{info, warn};
use yew::prelude::*;

use crate::components::contact::{Contact, Popup};
use crate::components::header::{Footer, Header};
use crate::components::sections::{CtaBanner, Hero, Portfolio, Reviews, Services};
use crate::config;
use crate::content;
use crate::dom::{self, ScrollListener};
use crate::error::PageError;
use crate::head::inject::{DomHead, HeadTags};
use crate::head::tags::page_head;
use crate::net::transport::{deliver, FormspreeTransport};
use crate::state::controller::{Effect, Msg, PageController, TimerSlot};
use crate::state::form::Field;

/// The one-page site. Owns every timer, listener and head tag it creates, so
/// tearing the component down stops all of them.
pub struct Home {
    page: PageController,
    transport: Rc<FormspreeTransport>,
    rotation: Option<Interval>,
    nav_close: Option<Timeout>,
    popup_hide: Option<Timeout>,
    scroll: Option<ScrollListener>,
    head: Option<HeadTags<DomHead>>,
}

fn inject_head() -> Result<HeadTags<DomHead>, PageError> {
    let location = dom::current_location()?;
    let (title, tags) = page_head(&location, config::LOGO_PATH)?;
    HeadTags::inject(DomHead::current()?, title, &tags)
}

impl Home {
    fn run(&mut self, ctx: &Context<Self>, effect: Effect) {
        match effect {
            Effect::ScrollTo(section) => dom::scroll_to_section(section),
            Effect::Every { period_ms, msg } => {
                let link = ctx.link().clone();
                self.rotation = Some(Interval::new(period_ms, move || {
                    link.send_message(msg.clone())
                }));
            }
            Effect::After { slot, delay_ms, msg } => {
                let link = ctx.link().clone();
                // Replacing a pending timeout drops, and so cancels, the old one.
                let timeout = Some(Timeout::new(delay_ms, move || link.send_message(msg)));
                match slot {
                    TimerSlot::NavClose => self.nav_close = timeout,
                    TimerSlot::PopupHide => self.popup_hide = timeout,
                }
            }
            Effect::Send(form) => {
                let transport = self.transport.clone();
                ctx.link().send_future(async move {
                    Msg::Delivered(deliver(transport.as_ref(), &form).await)
                });
            }
        }
    }
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let head = match inject_head() {
            Ok(head) => Some(head),
            Err(e) => {
                warn!("Page metadata not injected: {}", e);
                None
            }
        };

        let scroll = {
            let link = ctx.link().clone();
            match ScrollListener::attach(move || link.send_message(Msg::Scrolled)) {
                Ok(listener) => Some(listener),
                Err(e) => {
                    warn!("Scroll listener not attached: {}", e);
                    None
                }
            }
        };

        let mut home = Self {
            page: PageController::new(content::TESTIMONIALS.len()),
            transport: Rc::new(FormspreeTransport::new(config::get_form_endpoint())),
            rotation: None,
            nav_close: None,
            popup_hide: None,
            scroll,
            head,
        };
        for effect in home.page.activate() {
            home.run(ctx, effect);
        }
        info!(
            "Page activated with {} head tags",
            home.head.as_ref().map_or(0, |h| h.len())
        );
        home
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let step = self.page.handle(msg);
        for effect in step.effects {
            self.run(ctx, effect);
        }
        step.changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = &self.page;

        html! {
            <>
                <Header
                    open={page.nav_open()}
                    on_toggle={link.callback(|_: ()| Msg::ToggleNav)}
                    on_navigate={link.callback(Msg::Navigate)}
                />
                <main>
                    <Hero />
                    <Services />
                    <Portfolio />
                    <Reviews testimonials={&content::TESTIMONIALS[..]} active={page.active_testimonial()} />
                    <CtaBanner />
                    <Contact
                        form={page.form().clone()}
                        status={page.status()}
                        on_edit={link.callback(|(field, value): (Field, String)| Msg::Edit(field, value))}
                        on_submit={link.callback(|_: ()| Msg::Submit)}
                    />
                </main>
                <Footer year={chrono::Local::now().year()} />
                <Popup status={page.status()} visible={page.popup_visible()} />
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.rotation.take();
        self.nav_close.take();
        self.popup_hide.take();
        self.scroll.take();
        self.head.take();
        info!("Page deactivated");
    }
}

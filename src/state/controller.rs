use log::{debug, info, warn};

use crate::config;
use crate::state::form::{ContactForm, Field};
use crate::state::nav::{NavState, Section};
use crate::state::rotator::Rotator;
use crate::state::submission::{Delivery, Submission, SubmissionStatus};

/// Everything that can happen to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Tick,
    ToggleNav,
    Navigate(Section),
    CloseNav,
    Scrolled,
    Edit(Field, String),
    Submit,
    Delivered(Delivery),
    HidePopup,
}

/// One-shot timers. Scheduling into a slot replaces whatever was pending there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    NavClose,
    PopupHide,
}

/// Work the controller asks its host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollTo(Section),
    Every { period_ms: u32, msg: Msg },
    After { slot: TimerSlot, delay_ms: u32, msg: Msg },
    Send(ContactForm),
}

#[derive(Debug, Default, PartialEq)]
pub struct Step {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl Step {
    fn changed(changed: bool) -> Self {
        Self {
            changed,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// All view state for one visit of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageController {
    rotator: Rotator,
    nav: NavState,
    submission: Submission,
    form: ContactForm,
}

impl PageController {
    pub fn new(testimonials: usize) -> Self {
        Self {
            rotator: Rotator::new(testimonials),
            nav: NavState::default(),
            submission: Submission::default(),
            form: ContactForm::default(),
        }
    }

    /// Timers that run for as long as the page is active.
    pub fn activate(&self) -> Vec<Effect> {
        vec![Effect::Every {
            period_ms: config::ROTATION_INTERVAL_MS,
            msg: Msg::Tick,
        }]
    }

    pub fn active_testimonial(&self) -> usize {
        self.rotator.active()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    pub fn popup_visible(&self) -> bool {
        self.submission.popup_visible()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn handle(&mut self, msg: Msg) -> Step {
        match msg {
            Msg::Tick => {
                let index = self.rotator.advance();
                debug!("Showing testimonial {}", index);
                Step::changed(true)
            }
            Msg::ToggleNav => {
                self.nav.toggle();
                Step::changed(true)
            }
            Msg::Navigate(section) => Step::changed(false)
                .with(Effect::ScrollTo(section))
                .with(Effect::After {
                    slot: TimerSlot::NavClose,
                    delay_ms: config::NAV_CLOSE_DELAY_MS,
                    msg: Msg::CloseNav,
                }),
            Msg::CloseNav | Msg::Scrolled => Step::changed(self.nav.close()),
            Msg::Edit(field, value) => {
                self.form.set(field, value);
                Step::changed(true)
            }
            Msg::Submit => self.submit(),
            Msg::Delivered(delivery) => self.delivered(delivery),
            Msg::HidePopup => Step::changed(self.submission.hide_popup()),
        }
    }

    fn submit(&mut self) -> Step {
        if let Err(e) = self.form.validate() {
            warn!("Not sending contact form: {}", e);
            return Step::changed(false);
        }
        if self.submission.begin().is_err() {
            debug!("Submission already in flight, ignoring submit");
            return Step::changed(false);
        }
        info!("Sending contact form");
        Step::changed(true).with(Effect::Send(self.form.clone()))
    }

    fn delivered(&mut self, delivery: Delivery) -> Step {
        let status = match self.submission.finish(&delivery) {
            Ok(status) => status,
            Err(_) => {
                debug!("Ignoring delivery with no submission in flight: {:?}", delivery);
                return Step::changed(false);
            }
        };
        info!("Contact form submission finished: {}", status);
        if status == SubmissionStatus::Success {
            self.form = ContactForm::default();
        }
        Step::changed(true).with(Effect::After {
            slot: TimerSlot::PopupHide,
            delay_ms: config::POPUP_DURATION_MS,
            msg: Msg::HidePopup,
        })
    }
}

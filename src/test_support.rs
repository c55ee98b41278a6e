//! Host-side stand-ins for the browser event loop and console.

use futures::executor::block_on;

use crate::net::transport::{deliver, FormTransport};
use crate::state::controller::{Effect, Msg, PageController, TimerSlot};
use crate::state::form::ContactForm;
use crate::state::nav::Section;
use crate::state::submission::SubmissionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Slot(TimerSlot),
    Repeat(u32),
}

struct Pending {
    due: u64,
    timer: Timer,
    msg: Msg,
}

/// Drives a `PageController` on virtual time, executing its effects the way the
/// component does.
pub struct Clock<T: FormTransport> {
    pub page: PageController,
    pub transport: T,
    pub scrolled_to: Vec<Section>,
    pub statuses: Vec<SubmissionStatus>,
    now: u64,
    pending: Vec<Pending>,
    outbox: Vec<ContactForm>,
}

impl<T: FormTransport> Clock<T> {
    pub fn new(page: PageController, transport: T) -> Self {
        Self {
            page,
            transport,
            scrolled_to: Vec::new(),
            statuses: Vec::new(),
            now: 0,
            pending: Vec::new(),
            outbox: Vec::new(),
        }
    }

    pub fn activated(page: PageController, transport: T) -> Self {
        let mut clock = Self::new(page, transport);
        let effects = clock.page.activate();
        clock.run(effects);
        clock
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let before = self.page.status();
        let step = self.page.handle(msg);
        let after = self.page.status();
        if after != before {
            self.statuses.push(after);
        }
        self.run(step.effects);
    }

    /// Answers every request sent so far.
    pub fn flush_network(&mut self) {
        for form in std::mem::take(&mut self.outbox) {
            let delivery = block_on(deliver(&self.transport, &form));
            self.dispatch(Msg::Delivered(delivery));
        }
    }

    /// Moves time forward, firing due timers in deadline order.
    pub fn advance(&mut self, ms: u64) {
        let until = self.now + ms;
        while let Some(next) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| p.due)
            .map(|(i, _)| i)
        {
            let fired = self.pending.remove(next);
            self.now = fired.due;
            if let Timer::Repeat(period) = fired.timer {
                self.pending.push(Pending {
                    due: fired.due + u64::from(period),
                    timer: fired.timer,
                    msg: fired.msg.clone(),
                });
            }
            self.dispatch(fired.msg);
        }
        self.now = until;
    }

    fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScrollTo(section) => self.scrolled_to.push(section),
                Effect::Every { period_ms, msg } => self.pending.push(Pending {
                    due: self.now + u64::from(period_ms),
                    timer: Timer::Repeat(period_ms),
                    msg,
                }),
                Effect::After { slot, delay_ms, msg } => {
                    self.pending.retain(|p| p.timer != Timer::Slot(slot));
                    self.pending.push(Pending {
                        due: self.now + u64::from(delay_ms),
                        timer: Timer::Slot(slot),
                        msg,
                    });
                }
                Effect::Send(form) => self.outbox.push(form),
            }
        }
    }
}

pub mod logs {
    use std::sync::{Mutex, Once};

    use log::{Level, LevelFilter, Log, Metadata, Record};

    struct Capture {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        records: Mutex::new(Vec::new()),
    };
    static INSTALL: Once = Once::new();

    pub fn install() {
        INSTALL.call_once(|| {
            log::set_logger(&CAPTURE).expect("logger already set");
            log::set_max_level(LevelFilter::Trace);
        });
    }

    /// Number of records at `level` whose message contains `needle`.
    /// Tests run in parallel, so pick a needle unique to the test.
    pub fn count(level: Level, needle: &str) -> usize {
        install();
        CAPTURE
            .records
            .lock()
            .map(|records| {
                records
                    .iter()
                    .filter(|(l, message)| *l == level && message.contains(needle))
                    .count()
            })
            .unwrap_or(0)
    }
}

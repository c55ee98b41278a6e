use std::fmt;

/// Result of handing the form to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Accepted(u16),
    Rejected(u16),
    Failed(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_sending(self) -> bool {
        self == SubmissionStatus::Sending
    }

    pub fn class(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Sending => "sending",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }

    pub fn popup_message(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("✅ Thank you! Your message has been sent."),
            SubmissionStatus::Error => Some("❌ Oops! Something went wrong. Please try again."),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionStatus::Idle => "idle",
            other => other.class(),
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refused {
    InFlight,
    NotSending,
}

/// Contact form lifecycle: idle -> sending -> success/error, plus the popup flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission {
    status: SubmissionStatus,
    popup_visible: bool,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_visible
    }

    pub fn begin(&mut self) -> Result<(), Refused> {
        if self.status.is_sending() {
            return Err(Refused::InFlight);
        }
        self.status = SubmissionStatus::Sending;
        Ok(())
    }

    pub fn finish(&mut self, delivery: &Delivery) -> Result<SubmissionStatus, Refused> {
        if !self.status.is_sending() {
            return Err(Refused::NotSending);
        }
        self.status = match delivery {
            Delivery::Accepted(_) => SubmissionStatus::Success,
            Delivery::Rejected(_) | Delivery::Failed(_) => SubmissionStatus::Error,
        };
        self.popup_visible = true;
        Ok(self.status)
    }

    /// Hides the popup; the status is left alone.
    pub fn hide_popup(&mut self) -> bool {
        std::mem::replace(&mut self.popup_visible, false)
    }
}

//! Order progress timeline.
//!
//! A [`Lifecycle`] is the ordered list of steps an order moves through plus
//! the statuses that end it early. [`render`] turns the current status into
//! either a list of steps with their completion state or, for a terminal
//! status, a single indicator.

use crate::domain::OrderStatus;
use crate::status::{order_status_badge, Icon, Tone};

#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle {
    steps: Vec<OrderStatus>,
    terminal: Vec<OrderStatus>,
}

impl Lifecycle {
    pub fn new(steps: Vec<OrderStatus>, terminal: Vec<OrderStatus>) -> Self {
        Self { steps, terminal }
    }

    /// pending → processing → shipped → delivered, ended early by cancellation.
    pub fn standard() -> Self {
        Self::new(
            vec![
                OrderStatus::Pending,
                OrderStatus::Processing,
                OrderStatus::Shipped,
                OrderStatus::Delivered,
            ],
            vec![OrderStatus::Cancelled],
        )
    }

    pub fn steps(&self) -> &[OrderStatus] {
        &self.steps
    }

    pub fn is_terminal(&self, status: &OrderStatus) -> bool {
        self.terminal.contains(status)
    }

    /// Position of `status` in the step list, or `-1` when it is not a step.
    pub fn index_of(&self, status: &OrderStatus) -> isize {
        self.steps
            .iter()
            .position(|step| step == status)
            .map_or(-1, |index| index as isize)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub label: &'static str,
    pub icon: Icon,
    pub completed: bool,
    /// The step the order currently sits on, while it still has steps ahead.
    pub active: bool,
    /// State of the connector drawn below this step; `None` for the last step.
    pub connector_completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalIndicator {
    pub status: OrderStatus,
    pub label: String,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Timeline {
    Steps(Vec<TimelineStep>),
    Terminal(TerminalIndicator),
}

impl Timeline {
    pub fn steps(&self) -> &[TimelineStep] {
        match self {
            Timeline::Steps(steps) => steps,
            Timeline::Terminal(_) => &[],
        }
    }

    pub fn completed_count(&self) -> usize {
        self.steps().iter().filter(|step| step.completed).count()
    }

    pub fn active_step(&self) -> Option<&TimelineStep> {
        self.steps().iter().find(|step| step.active)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Timeline::Terminal(_))
    }
}

/// Statuses the badge table does not know are labelled from their raw text.
fn terminal_indicator(status: &OrderStatus) -> TerminalIndicator {
    match status {
        OrderStatus::Unknown(raw) => TerminalIndicator {
            status: status.clone(),
            label: humanize(raw),
            icon: Icon::XCircle,
            tone: Tone::Neutral,
        },
        known => {
            let badge = order_status_badge(known);
            TerminalIndicator {
                status: known.clone(),
                label: badge.label.to_string(),
                icon: badge.icon,
                tone: badge.tone,
            }
        }
    }
}

/// `partially_refunded` → `Partially refunded`
fn humanize(raw: &str) -> String {
    let text = raw.trim().replace(['_', '-'], " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}

pub fn render(lifecycle: &Lifecycle, status: &OrderStatus) -> Timeline {
    if lifecycle.is_terminal(status) {
        return Timeline::Terminal(terminal_indicator(status));
    }

    let current = lifecycle.index_of(status);
    let last = lifecycle.steps.len() as isize - 1;

    let steps = lifecycle
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let index = index as isize;
            let badge = order_status_badge(step);
            TimelineStep {
                status: step.clone(),
                label: badge.label,
                icon: badge.icon,
                completed: index <= current,
                active: index == current && current < last,
                connector_completed: (index < last).then_some(index < current),
            }
        })
        .collect();

    Timeline::Steps(steps)
}

use std::cell::RefCell;
use std::rc::Rc;

use swipekit_actions::{
    wrap_with_swipe_container, RowRenderState, SwipeAction, SwipeContainer, SwipeError, SwipeRow,
};
use swipekit_foundation::{
    HapticFeedback, HapticPulse, MeasurementSink, PointerEvent, PointerEventKind,
};
use swipekit_ui_graphics::{Color, Point, Size};

use crate::host::{Host, Pacing};

const ROW_WIDTH: f32 = 390.0;
const ROW_HEIGHT: f32 = 72.0;
const ACTION_WIDTH: f32 = 84.0;
const DRAG_STEPS: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    pub sender: String,
    pub subject: String,
}

impl Mail {
    pub fn new(sender: &str, subject: &str) -> Self {
        Self {
            sender: sender.to_string(),
            subject: subject.to_string(),
        }
    }
}

pub fn sample_mails() -> Vec<Mail> {
    vec![
        Mail::new("Ada", "Quarterly numbers"),
        Mail::new("Grace", "Compiler meetup"),
        Mail::new("Linus", "Patch review"),
        Mail::new("Margaret", "Launch checklist"),
    ]
}

struct LoggingHaptics;

impl HapticFeedback for LoggingHaptics {
    fn prepare(&self) {
        log::trace!("haptics prepared");
    }

    fn pulse(&self, pulse: HapticPulse) {
        log::info!("haptic pulse: {pulse:?}");
    }
}

type Journal = Rc<RefCell<Vec<String>>>;

/// What a scripted session left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub remaining: Vec<String>,
    pub activated: Vec<String>,
}

/// A list of mails, each row swipeable.
pub struct Inbox {
    host: Host,
    list: SwipeContainer<Vec<SwipeRow<Mail>>>,
    activated: Journal,
    /// Subjects whose delete callback ran; removed on the next settle.
    deleted: Journal,
    pointer: Option<(usize, Point)>,
}

impl Inbox {
    pub fn new(host: Host, mails: Vec<Mail>) -> Self {
        let list = wrap_with_swipe_container(Vec::new(), host.runtime())
            .with_haptics(Rc::new(LoggingHaptics));
        let mut inbox = Self {
            host,
            list,
            activated: Rc::default(),
            deleted: Rc::default(),
            pointer: None,
        };
        for mail in mails {
            inbox.push(mail);
        }
        inbox
    }

    fn push(&mut self, mail: Mail) {
        let subject = mail.subject.clone();
        let journal_entry = |verb: &'static str| {
            let journal = Rc::clone(&self.activated);
            let subject = subject.clone();
            move || journal.borrow_mut().push(format!("{verb} {subject}"))
        };
        let on_delete = {
            let deleted = Rc::clone(&self.deleted);
            let subject = subject.clone();
            move || deleted.borrow_mut().push(subject.clone())
        };
        let actions = vec![
            SwipeAction::new("Flag".to_string(), journal_entry("flagged"))
                .with_tint(Color::SYSTEM_ORANGE),
            SwipeAction::new("Archive".to_string(), journal_entry("archived"))
                .with_tint(Color::SYSTEM_BLUE),
            SwipeAction::destructive("Delete".to_string(), on_delete),
        ];

        let row = self.list.attach_swipe_actions(mail, actions);
        // Stand-in for the layout pass of a real renderer.
        let controller = row.controller();
        controller.report_content_size(Size::new(ROW_WIDTH, ROW_HEIGHT));
        for index in 0..controller.action_count() {
            controller.report_action_size(index, Size::new(ACTION_WIDTH, ROW_HEIGHT));
        }
        self.list.content_mut().push(row);
    }

    pub fn len(&self) -> usize {
        self.list.content().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.content().is_empty()
    }

    /// Presses on `row` and drags by `dx`, releasing if asked.
    pub fn drag(&mut self, row: usize, dx: f32, release: bool) {
        let start = Point::new(ROW_WIDTH * 0.5, ROW_HEIGHT * 0.5);
        self.send(row, PointerEventKind::Down, start);
        let mut at = start;
        for step in 1..=DRAG_STEPS {
            self.host.frame();
            at = Point::new(start.x + dx * step as f32 / DRAG_STEPS as f32, start.y);
            self.send(row, PointerEventKind::Move, at);
        }
        self.pointer = Some((row, at));
        if release {
            self.release();
        }
    }

    /// Lifts the pointer left down by [`Inbox::drag`].
    pub fn release(&mut self) {
        if let Some((row, at)) = self.pointer.take() {
            self.send(row, PointerEventKind::Up, at);
        }
    }

    pub fn tap_list(&self) {
        self.list.on_tap();
    }

    pub fn scroll_to(&self, offset: f32) {
        self.list.on_scroll_offset_changed(offset);
    }

    pub fn tap_action(&self, row: usize, index: usize) -> Result<(), SwipeError> {
        match self.list.content().get(row) {
            Some(row) => row.controller().tap_action(index),
            None => Ok(()),
        }
    }

    /// Lets every animation finish, then drops deleted rows.
    pub fn settle(&mut self) {
        self.host.run_until_idle();
        let deleted: Vec<String> = self.deleted.borrow_mut().drain(..).collect();
        if !deleted.is_empty() {
            self.list
                .content_mut()
                .retain(|row| !deleted.contains(&row.content().subject));
            log::info!("removed {}", deleted.join(", "));
        }
    }

    pub fn render_states(&self) -> Vec<RowRenderState> {
        self.list
            .content()
            .iter()
            .map(SwipeRow::render_state)
            .collect()
    }

    pub fn log_rows(&self, step: &str) {
        log::info!("-- {step}");
        for row in self.list.content() {
            let state = row.render_state();
            log::info!(
                "{:<20} offset {:>7.1} widths {:?} height {:.2}{}{}",
                row.content().subject,
                state.content_offset,
                state.action_widths.as_slice(),
                state.height_fraction,
                if state.is_full_swipe_armed { " armed" } else { "" },
                if state.is_deleted { " deleted" } else { "" },
            );
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            remaining: self
                .list
                .content()
                .iter()
                .map(|row| row.content().subject.clone())
                .collect(),
            activated: self.activated.borrow().clone(),
        }
    }

    fn send(&mut self, row: usize, kind: PointerEventKind, at: Point) {
        let event = PointerEvent::new(kind, at, self.host.now_millis());
        if let Some(row) = self.list.content_mut().get_mut(row) {
            row.on_pointer_event(&event);
        }
    }
}

/// Reveal, sibling close, container tap, action tap and a destructive
/// full swipe, in that order.
pub fn run_scripted_session(pacing: Pacing) -> Result<SessionSummary, SwipeError> {
    let mut inbox = Inbox::new(Host::new(pacing), sample_mails());
    inbox.log_rows("inbox");

    inbox.drag(0, -200.0, true);
    inbox.settle();
    inbox.log_rows("first message revealed");

    inbox.drag(1, -60.0, false);
    inbox.log_rows("second message dragging");
    inbox.release();
    inbox.settle();

    inbox.drag(2, -200.0, true);
    inbox.settle();
    inbox.tap_list();
    inbox.settle();
    inbox.log_rows("list tapped");

    inbox.drag(0, -200.0, true);
    inbox.settle();
    inbox.tap_action(0, 0)?;
    inbox.settle();
    inbox.log_rows("first message flagged");

    inbox.drag(2, -330.0, false);
    inbox.log_rows("third message armed");
    inbox.release();
    inbox.host.run_for(0.1);
    inbox.log_rows("third message collapsing");
    inbox.settle();
    inbox.log_rows("third message deleted");

    Ok(inbox.summary())
}

#[cfg(test)]
#[path = "tests/inbox_tests.rs"]
mod tests;

//! Runtime - drives a [`View`] in the terminal.
//!
//! The loop is single-threaded: build the element tree, render it, then wait
//! for either a terminal event or, while a fade is running, the next frame.

mod config;

pub use config::RuntimeConfig;

use std::time::Instant;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, trace};
use pagedom::{AnimationState, Element, Event, FocusState, Key, MouseButton, Terminal};
use thiserror::Error;
use tokio::time::MissedTickBehavior;

use crate::presenter::{FadePresenter, InstantPresenter, TransitionPresenter};

/// Something the runtime can display and route activations to.
pub trait View {
    /// Build the element tree for the current state.
    fn element(&self, presenter: &dyn TransitionPresenter) -> Element;

    /// Handle activation of the element with id `target`.
    /// Returns whether anything changed.
    fn activate(&mut self, target: &str) -> bool;
}

/// Runtime error
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What an input event asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Quit,
    Activate(String),
    ScrollBy(i32),
    ScrollToTop,
    ScrollToBottom,
    Reveal(String),
}

fn action_for(event: &Event, viewport: u16) -> Option<Action> {
    let page = i32::from(viewport.saturating_sub(1).max(1));
    match event {
        Event::Key {
            key: Key::Char('c'),
            modifiers,
            ..
        } if modifiers.ctrl => Some(Action::Quit),
        Event::Key { key, target, .. } => match key {
            Key::Char('q') | Key::Escape => Some(Action::Quit),
            Key::Enter | Key::Char(' ') => target.clone().map(Action::Activate),
            Key::Up | Key::Char('k') => Some(Action::ScrollBy(-1)),
            Key::Down | Key::Char('j') => Some(Action::ScrollBy(1)),
            Key::PageUp => Some(Action::ScrollBy(-page)),
            Key::PageDown => Some(Action::ScrollBy(page)),
            Key::Home | Key::Char('g') => Some(Action::ScrollToTop),
            Key::End | Key::Char('G') => Some(Action::ScrollToBottom),
            _ => None,
        },
        Event::Click {
            target: Some(target),
            button: MouseButton::Left,
            ..
        } => Some(Action::Activate(target.clone())),
        Event::Scroll { delta_y } => Some(Action::ScrollBy(i32::from(*delta_y))),
        Event::Focus { target } => Some(Action::Reveal(target.clone())),
        _ => None,
    }
}

/// Runs views in a raw-mode terminal.
pub struct Runtime {
    config: RuntimeConfig,
    terminal: Terminal,
}

impl Runtime {
    /// Take over the terminal. It is restored when the runtime is dropped.
    pub fn new(config: RuntimeConfig) -> Result<Self, RuntimeError> {
        let mut terminal = Terminal::new()?;
        terminal.set_reduced_motion(config.reduced_motion);
        Ok(Self { config, terminal })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    fn presenter(&self) -> Box<dyn TransitionPresenter> {
        if self.config.reduced_motion {
            Box::new(InstantPresenter)
        } else {
            Box::new(FadePresenter::new().duration(self.config.fade_duration))
        }
    }

    /// Run `view` until the user quits.
    pub async fn run(&mut self, view: &mut dyn View) -> Result<(), RuntimeError> {
        info!("Runtime started (reduced motion: {})", self.config.reduced_motion);

        let presenter = self.presenter();
        let mut events = EventStream::new();
        let mut frames = tokio::time::interval(self.config.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut focus = FocusState::new();
        let mut scroll: u16 = 0;

        loop {
            let mut root = view.element(presenter.as_ref());
            let moved = focus.revalidate(&root);
            focus.apply(&mut root);

            let start = Instant::now();
            self.terminal.render(&root, scroll)?;
            // The page may have shrunk under the old offset
            scroll = self.terminal.scroll();
            if let Some(rect) = moved.and_then(|id| self.terminal.layout().get(&id).copied()) {
                let revealed =
                    scroll_into_view(scroll, self.terminal.size().1, rect.y, rect.height);
                if revealed != scroll {
                    scroll = revealed;
                    self.terminal.render(&root, scroll)?;
                }
            }
            trace!("frame rendered in {:?}", start.elapsed());

            let animating = self.terminal.has_active_transitions();

            let raw = tokio::select! {
                next = events.next() => match next {
                    Some(Ok(event)) => event,
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        info!("Event stream closed");
                        break;
                    }
                },
                _ = frames.tick(), if animating => continue,
            };

            let viewport = self.terminal.size().1;
            let max_scroll = self.terminal.max_scroll();
            let events_out =
                focus.process_events(&[raw], &root, self.terminal.layout(), scroll);

            for event in events_out {
                let Some(action) = action_for(&event, viewport) else {
                    continue;
                };
                match action {
                    Action::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                    Action::Activate(target) => {
                        if view.activate(&target) {
                            debug!("activated {target}");
                        }
                    }
                    Action::ScrollBy(delta) => {
                        scroll = scroll
                            .saturating_add_signed(delta.clamp(i16::MIN.into(), i16::MAX.into()) as i16)
                            .min(max_scroll);
                    }
                    Action::ScrollToTop => scroll = 0,
                    Action::ScrollToBottom => scroll = max_scroll,
                    Action::Reveal(target) => {
                        if let Some(rect) = self.terminal.layout().get(&target) {
                            scroll = scroll_into_view(scroll, viewport, rect.y, rect.height);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Smallest change to `scroll` that brings rows `y..y+height` on screen.
fn scroll_into_view(scroll: u16, viewport: u16, y: u16, height: u16) -> u16 {
    if y < scroll {
        y
    } else if y.saturating_add(height) > scroll.saturating_add(viewport) {
        y.saturating_add(height).saturating_sub(viewport)
    } else {
        scroll
    }
}

/// Render `view` off-screen, `width` columns wide, and return its text lines.
///
/// Fades are shown at their final opacity.
pub fn render_snapshot(
    view: &dyn View,
    width: u16,
    presenter: &dyn TransitionPresenter,
) -> Vec<String> {
    let root = view.element(presenter);
    let (page, _) = pagedom::render::render_page(&root, width, &AnimationState::new(), Instant::now());
    page.lines()
}

use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Element data key naming a group of interchangeable focus targets.
///
/// When the focused element leaves the tree, focus moves to another
/// focusable element of the same group (e.g. a toggle replaced by its
/// counterpart) instead of being lost.
pub const FOCUS_GROUP: &str = "focus-group";

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
    group: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, root: &Element, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.group = find_element(root, id).and_then(|el| el.get_data(FOCUS_GROUP).cloned());
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.group = None;
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.focus(root, &new_focus).then_some(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let last = focusable.len() - 1;
        let new_focus = match &self.focused {
            None => focusable[last].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[last].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.focus(root, &new_focus).then_some(new_focus)
    }

    /// Re-anchor focus after the tree was rebuilt.
    ///
    /// If the focused element is gone, focus moves to a member of its focus
    /// group when one exists, otherwise focus is cleared. Returns the id focus
    /// moved to, if it moved.
    pub fn revalidate(&mut self, root: &Element) -> Option<String> {
        let current = self.focused.clone()?;
        if find_element(root, &current).is_some() {
            return None;
        }

        let replacement = self.group.as_deref().and_then(|group| {
            collect_focusable_elements(root)
                .into_iter()
                .find(|el| el.get_data(FOCUS_GROUP).map(String::as_str) == Some(group))
                .map(|el| el.id.clone())
        });

        match replacement {
            Some(id) => {
                log::debug!("focus moved {current} -> {id} (group)");
                self.focused = Some(id.clone());
                Some(id)
            }
            None => {
                log::debug!("focus lost: {current} left the tree");
                self.blur();
                None
            }
        }
    }

    /// Mark the focused element in the tree so it renders its focus style.
    pub fn apply(&self, root: &mut Element) {
        if let Some(id) = &self.focused {
            if let Some(el) = find_element_mut(root, id) {
                el.focused = true;
            }
        }
    }

    /// Process raw crossterm events and produce high-level events.
    ///
    /// `scroll_y` is the number of content rows scrolled off the top of the
    /// screen; mouse coordinates are translated into layout space with it.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
        scroll_y: u16,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    if key == Key::Tab || key == Key::BackTab {
                        let old = self.focused.clone();
                        let new = if key == Key::Tab {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }
                CrosstermEvent::Mouse(mouse) => {
                    let x = mouse.column;
                    let y = mouse.row.saturating_add(scroll_y);
                    match mouse.kind {
                        MouseEventKind::Down(button) => {
                            // Clicking a focusable element focuses it
                            if let Some(id) = hit_test_focusable(layout, root, x, y) {
                                let old = self.focused.clone();
                                if self.focus(root, &id) {
                                    if let Some(old) = old {
                                        events.push(Event::Blur { target: old });
                                    }
                                    events.push(Event::Focus { target: id });
                                }
                            }
                            events.push(Event::Click {
                                target: hit_test(layout, root, x, y),
                                x,
                                y,
                                button: button.into(),
                            });
                        }
                        MouseEventKind::ScrollUp => events.push(Event::Scroll { delta_y: -3 }),
                        MouseEventKind::ScrollDown => events.push(Event::Scroll { delta_y: 3 }),
                        _ => {}
                    }
                }
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }

        events
    }
}

/// Collect IDs of all focusable elements in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    collect_focusable_elements(root)
        .into_iter()
        .map(|el| el.id.clone())
        .collect()
}

fn collect_focusable_elements(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    collect_recursive(root, &mut out);
    out
}

fn collect_recursive<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    if element.focusable {
        out.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_recursive(child, out);
        }
    }
}

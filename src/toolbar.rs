//! Toolbar accessory of the picker overlay.
//!
//! The toolbar is an ordered row of actions. `Done` and `Cancel` terminate
//! the picker; `Custom` actions carry caller-supplied behavior the picker
//! does not interpret; `Spacer` is layout-only and can never take focus.

/// One toolbar control.
pub enum ToolbarAction {
    /// Dismiss without a result, rendered with the given label
    Cancel(String),

    /// Commit the current selection
    Done,

    /// Flexible gap separating action groups
    Spacer,

    /// Opaque caller-supplied control; activating it runs `on_press` and
    /// leaves the picker attached
    Custom {
        label: String,
        on_press: Box<dyn FnMut()>,
    },
}

impl ToolbarAction {
    /// Display label, `None` for spacers.
    pub fn label(&self) -> Option<&str> {
        match self {
            ToolbarAction::Cancel(label) => Some(label),
            ToolbarAction::Done => Some("Done"),
            ToolbarAction::Spacer => None,
            ToolbarAction::Custom { label, .. } => Some(label),
        }
    }

    fn is_actionable(&self) -> bool {
        !matches!(self, ToolbarAction::Spacer)
    }
}

/// What activating the focused action means for the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToolbarEvent {
    Commit,
    Cancel,
    /// A custom action ran, or nothing was focusable
    Stay,
}

/// The toolbar with its focus state.
pub struct Toolbar {
    actions: Vec<ToolbarAction>,
    focused: Option<usize>,
}

impl Toolbar {
    /// Build a toolbar. Focus starts on the first `Done` action when present,
    /// otherwise on the first actionable item.
    pub fn new(actions: Vec<ToolbarAction>) -> Self {
        let focused = actions
            .iter()
            .position(|a| matches!(a, ToolbarAction::Done))
            .or_else(|| actions.iter().position(|a| a.is_actionable()));
        Self { actions, focused }
    }

    pub fn actions(&self) -> &[ToolbarAction] {
        &self.actions
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus to the next actionable item, wrapping around.
    pub fn focus_next(&mut self) {
        self.shift_focus(1);
    }

    /// Move focus to the previous actionable item, wrapping around.
    pub fn focus_prev(&mut self) {
        self.shift_focus(-1);
    }

    fn shift_focus(&mut self, direction: isize) {
        let Some(current) = self.focused else {
            return;
        };
        let len = self.actions.len() as isize;
        let mut idx = current as isize;
        for _ in 0..len {
            idx = (idx + direction).rem_euclid(len);
            if self.actions[idx as usize].is_actionable() {
                self.focused = Some(idx as usize);
                return;
            }
        }
    }

    /// Activate the focused action. Custom actions run their closure here.
    pub(crate) fn activate(&mut self) -> ToolbarEvent {
        let Some(idx) = self.focused else {
            return ToolbarEvent::Stay;
        };
        match &mut self.actions[idx] {
            ToolbarAction::Done => ToolbarEvent::Commit,
            ToolbarAction::Cancel(_) => ToolbarEvent::Cancel,
            ToolbarAction::Custom { on_press, .. } => {
                on_press();
                ToolbarEvent::Stay
            }
            ToolbarAction::Spacer => ToolbarEvent::Stay,
        }
    }
}

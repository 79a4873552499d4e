//! The modal picker itself.
//!
//! A `ModalPicker` owns one input surface (built once from a `PickerMode`),
//! a toolbar, and optional completion callbacks. It reports exactly one
//! terminal outcome per lifetime: either a commit through the mode's value
//! callback, or a cancellation. After that it is detached and fires nothing
//! further; build a new instance to show again.
//!
//! Index handling is deliberately permissive: out-of-range highlighted rows
//! are skipped without error on commit, and in the multi-column case the
//! result sequences can be shorter than the column count. This "ignore and
//! proceed" contract is deliberate, not an omission.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent};

use crate::date::DateWheel;
use crate::mode::PickerMode;
use crate::style::PickerStyle;
use crate::toolbar::{Toolbar, ToolbarAction, ToolbarEvent};
use crate::wheel::{ListWheel, Wheel};

/// Outcome of feeding a key event to an attached picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerResponse {
    /// The key is not for the picker
    Ignored,
    /// Consumed; the picker is still attached
    Handled,
    /// The selection was committed and the picker detached
    Committed,
    /// The picker was dismissed without a result
    Cancelled,
}

/// The input surface, fixed at construction.
pub(crate) enum Surface {
    Date(DateWheel),
    Single(ListWheel),
    Multi { wheels: Vec<ListWheel>, focused: usize },
}

type DateCallback = Box<dyn FnMut(NaiveDateTime)>;
type ValueCallback = Box<dyn FnMut(String, usize)>;
type MultiValueCallback = Box<dyn FnMut(Vec<String>, Vec<usize>)>;
type CancelCallback = Box<dyn FnMut()>;

/// A modal input-picker overlay.
pub struct ModalPicker {
    surface: Surface,
    toolbar: Toolbar,
    style: PickerStyle,
    attached: bool,

    on_date_done: Option<DateCallback>,
    on_value_done: Option<ValueCallback>,
    on_multi_value_done: Option<MultiValueCallback>,
    on_cancelled: Option<CancelCallback>,
}

impl ModalPicker {
    /// Build a picker from its mode and toolbar actions. No validation is
    /// performed; out-of-range pre-selection indices are silently ignored.
    /// The picker is not yet visible.
    pub fn new(mode: PickerMode, actions: Vec<ToolbarAction>) -> Self {
        let surface = match mode {
            PickerMode::Calendar(params) => Surface::Date(DateWheel::new(params)),
            PickerMode::SingleList {
                items,
                selected_index,
            } => Surface::Single(ListWheel::new(items, selected_index)),
            PickerMode::MultiColumnList {
                columns,
                selected_indexes,
            } => {
                // Pre-selection applies only when there is exactly one entry
                // per column; otherwise the whole step is skipped.
                let apply = selected_indexes.len() == columns.len();
                let wheels = columns
                    .into_iter()
                    .enumerate()
                    .map(|(i, items)| {
                        let preselect = if apply { selected_indexes[i] } else { None };
                        ListWheel::new(items, preselect)
                    })
                    .collect();
                Surface::Multi { wheels, focused: 0 }
            }
        };

        Self {
            surface,
            toolbar: Toolbar::new(actions),
            style: PickerStyle::default(),
            attached: false,
            on_date_done: None,
            on_value_done: None,
            on_multi_value_done: None,
            on_cancelled: None,
        }
    }

    // Completion callbacks. Each is optional and should be set before the
    // picker is shown.

    pub fn on_date_done(&mut self, f: impl FnMut(NaiveDateTime) + 'static) {
        self.on_date_done = Some(Box::new(f));
    }

    pub fn on_value_done(&mut self, f: impl FnMut(String, usize) + 'static) {
        self.on_value_done = Some(Box::new(f));
    }

    pub fn on_multi_value_done(&mut self, f: impl FnMut(Vec<String>, Vec<usize>) + 'static) {
        self.on_multi_value_done = Some(Box::new(f));
    }

    pub fn on_cancelled(&mut self, f: impl FnMut() + 'static) {
        self.on_cancelled = Some(Box::new(f));
    }

    // Styling passthroughs, no behavioral contract.

    pub fn set_tint_color(&mut self, color: ratatui::style::Color) {
        self.style.tint = color;
    }

    pub fn set_picker_background_color(&mut self, color: ratatui::style::Color) {
        self.style.picker_bg = color;
    }

    pub fn set_picker_color(&mut self, color: ratatui::style::Color) {
        self.style.picker_fg = color;
    }

    pub fn set_toolbar_background_color(&mut self, color: ratatui::style::Color) {
        self.style.toolbar_bg = color;
    }

    pub fn set_style(&mut self, style: PickerStyle) {
        self.style = style;
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub(crate) fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn attach(&mut self) {
        self.attached = true;
    }

    /// Detach without firing any callback. Harmless when already detached.
    pub fn close(&mut self) {
        self.attached = false;
    }

    /// Commit the current selection: fire the mode's completion callback and
    /// detach. Rows out of bounds are skipped silently; in the multi-column
    /// case the callback still fires once with the in-bounds subset. Does
    /// nothing when detached.
    pub fn done(&mut self) {
        if !self.attached {
            return;
        }
        match &self.surface {
            Surface::Date(wheel) => {
                let value = wheel.value();
                if let Some(cb) = &mut self.on_date_done {
                    cb(value);
                }
            }
            Surface::Single(wheel) => {
                let index = wheel.selected_index();
                if let Some(item) = wheel.items().get(index) {
                    let value = item.clone();
                    if let Some(cb) = &mut self.on_value_done {
                        cb(value, index);
                    }
                }
            }
            Surface::Multi { wheels, .. } => {
                let mut values = Vec::new();
                let mut indexes = Vec::new();
                for wheel in wheels {
                    let index = wheel.selected_index();
                    if let Some(item) = wheel.items().get(index) {
                        values.push(item.clone());
                        indexes.push(index);
                    }
                }
                if let Some(cb) = &mut self.on_multi_value_done {
                    cb(values, indexes);
                }
            }
        }
        self.attached = false;
    }

    /// Dismiss without a result: fire the cancelled callback and detach.
    /// Never reads selection state. Does nothing when detached.
    pub fn cancel(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(cb) = &mut self.on_cancelled {
            cb();
        }
        self.attached = false;
    }

    /// The string at `(column, row)` in a list mode, `None` elsewhere.
    pub fn row_title(&self, column: usize, row: usize) -> Option<&str> {
        match &self.surface {
            Surface::Date(_) => None,
            Surface::Single(wheel) => {
                if column == 0 {
                    wheel.items().get(row).map(String::as_str)
                } else {
                    None
                }
            }
            Surface::Multi { wheels, .. } => {
                wheels.get(column)?.items().get(row).map(String::as_str)
            }
        }
    }

    /// Handle a key event while attached.
    ///
    /// Up/Down (k/j) move the highlighted row or step the focused date
    /// field; Left/Right (h/l) move column or field focus; Tab/BackTab cycle
    /// toolbar focus; Enter activates the focused toolbar action; Esc
    /// cancels.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerResponse {
        if !self.attached {
            return PickerResponse::Ignored;
        }

        match key.code {
            KeyCode::Esc => {
                self.cancel();
                PickerResponse::Cancelled
            }
            KeyCode::Tab => {
                self.toolbar.focus_next();
                PickerResponse::Handled
            }
            KeyCode::BackTab => {
                self.toolbar.focus_prev();
                PickerResponse::Handled
            }
            KeyCode::Enter => match self.toolbar.activate() {
                ToolbarEvent::Commit => {
                    self.done();
                    PickerResponse::Committed
                }
                ToolbarEvent::Cancel => {
                    self.cancel();
                    PickerResponse::Cancelled
                }
                ToolbarEvent::Stay => PickerResponse::Handled,
            },
            KeyCode::Up | KeyCode::Char('k') => {
                match &mut self.surface {
                    Surface::Date(wheel) => wheel.step(1),
                    Surface::Single(wheel) => wheel.select_prev(),
                    Surface::Multi { wheels, focused } => {
                        if let Some(wheel) = wheels.get_mut(*focused) {
                            wheel.select_prev();
                        }
                    }
                }
                PickerResponse::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                match &mut self.surface {
                    Surface::Date(wheel) => wheel.step(-1),
                    Surface::Single(wheel) => wheel.select_next(),
                    Surface::Multi { wheels, focused } => {
                        if let Some(wheel) = wheels.get_mut(*focused) {
                            wheel.select_next();
                        }
                    }
                }
                PickerResponse::Handled
            }
            KeyCode::Left | KeyCode::Char('h') => match &mut self.surface {
                Surface::Date(wheel) => {
                    wheel.focus_prev();
                    PickerResponse::Handled
                }
                Surface::Single(_) => PickerResponse::Ignored,
                Surface::Multi { wheels, focused } => {
                    *focused = focused.checked_sub(1).unwrap_or(wheels.len().saturating_sub(1));
                    PickerResponse::Handled
                }
            },
            KeyCode::Right | KeyCode::Char('l') => match &mut self.surface {
                Surface::Date(wheel) => {
                    wheel.focus_next();
                    PickerResponse::Handled
                }
                Surface::Single(_) => PickerResponse::Ignored,
                Surface::Multi { wheels, focused } => {
                    if !wheels.is_empty() {
                        *focused = (*focused + 1) % wheels.len();
                    }
                    PickerResponse::Handled
                }
            },
            _ => PickerResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::CalendarParams;
    use crossterm::event::KeyEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn standard_toolbar() -> Vec<ToolbarAction> {
        vec![
            ToolbarAction::Cancel("Cancel".into()),
            ToolbarAction::Spacer,
            ToolbarAction::Done,
        ]
    }

    fn fruits() -> PickerMode {
        PickerMode::SingleList {
            items: vec![
                "Apple".into(),
                "Avocado".into(),
                "Banana".into(),
                "Blackberries".into(),
            ],
            selected_index: Some(2),
        }
    }

    fn devices() -> PickerMode {
        PickerMode::MultiColumnList {
            columns: vec![
                vec![
                    "iPhone".into(),
                    "iPad".into(),
                    "MacBook".into(),
                    "Mac mini".into(),
                ],
                vec![
                    "AirPods".into(),
                    "AirPods Pro".into(),
                    "AirPods Max".into(),
                ],
            ],
            selected_indexes: vec![Some(2), Some(1)],
        }
    }

    #[test]
    fn test_commit_single_list_unchanged_selection() {
        let result = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&result);

        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.on_value_done(move |value, index| sink.borrow_mut().push((value, index)));
        picker.attach();
        picker.done();

        assert_eq!(*result.borrow(), vec![("Banana".to_string(), 2)]);
        assert!(!picker.is_attached());
    }

    #[test]
    fn test_commit_multi_column_unchanged_selection() {
        let result = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&result);

        let mut picker = ModalPicker::new(devices(), standard_toolbar());
        picker.on_multi_value_done(move |values, indexes| {
            *sink.borrow_mut() = Some((values, indexes));
        });
        picker.attach();
        picker.done();

        let expected = (
            vec!["MacBook".to_string(), "AirPods Pro".to_string()],
            vec![2, 1],
        );
        assert_eq!(result.borrow().clone(), Some(expected));
    }

    #[test]
    fn test_multi_column_empty_column_yields_partial_result() {
        let result = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&result);

        let mode = PickerMode::MultiColumnList {
            columns: vec![vec!["a".into(), "b".into()], vec![]],
            selected_indexes: vec![Some(1), None],
        };
        let mut picker = ModalPicker::new(mode, standard_toolbar());
        picker.on_multi_value_done(move |values, indexes| {
            *sink.borrow_mut() = Some((values, indexes));
        });
        picker.attach();
        picker.done();

        // The empty column is skipped; sequences are shorter than the
        // column count.
        assert_eq!(
            result.borrow().clone(),
            Some((vec!["b".to_string()], vec![1]))
        );
    }

    #[test]
    fn test_commit_empty_single_list_fires_nothing_but_detaches() {
        let fired = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&fired);

        let mode = PickerMode::SingleList {
            items: vec![],
            selected_index: None,
        };
        let mut picker = ModalPicker::new(mode, standard_toolbar());
        picker.on_value_done(move |_, _| *sink.borrow_mut() = true);
        picker.attach();
        picker.done();

        assert!(!*fired.borrow());
        assert!(!picker.is_attached());
    }

    #[test]
    fn test_cancel_fires_only_cancelled_callback() {
        let committed = Rc::new(RefCell::new(false));
        let cancelled = Rc::new(RefCell::new(0));
        let c1 = Rc::clone(&committed);
        let c2 = Rc::clone(&cancelled);

        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.on_value_done(move |_, _| *c1.borrow_mut() = true);
        picker.on_cancelled(move || *c2.borrow_mut() += 1);
        picker.attach();
        picker.cancel();

        assert!(!*committed.borrow());
        assert_eq!(*cancelled.borrow(), 1);
        assert!(!picker.is_attached());
    }

    #[test]
    fn test_no_callbacks_after_detach() {
        let cancelled = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&cancelled);

        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.on_cancelled(move || *sink.borrow_mut() += 1);
        picker.attach();
        picker.cancel();
        picker.cancel();
        picker.done();

        assert_eq!(*cancelled.borrow(), 1);
    }

    #[test]
    fn test_double_close_is_noop() {
        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.attach();
        picker.close();
        picker.close();
        assert!(!picker.is_attached());
    }

    #[test]
    fn test_out_of_bounds_preselect_leaves_row_zero() {
        let mode = PickerMode::SingleList {
            items: vec!["a".into(), "b".into()],
            selected_index: Some(17),
        };
        let picker = ModalPicker::new(mode, vec![]);
        match picker.surface() {
            Surface::Single(wheel) => assert_eq!(wheel.selected_index(), 0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_mismatched_preselect_length_skips_preselection() {
        let mode = PickerMode::MultiColumnList {
            columns: vec![vec!["a".into(), "b".into()], vec!["c".into(), "d".into()]],
            selected_indexes: vec![Some(1)],
        };
        let picker = ModalPicker::new(mode, vec![]);
        match picker.surface() {
            Surface::Multi { wheels, .. } => {
                assert_eq!(wheels[0].selected_index(), 0);
                assert_eq!(wheels[1].selected_index(), 0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_row_title_lookup() {
        let picker = ModalPicker::new(devices(), vec![]);
        assert_eq!(picker.row_title(0, 2), Some("MacBook"));
        assert_eq!(picker.row_title(1, 0), Some("AirPods"));
        assert_eq!(picker.row_title(2, 0), None);
        assert_eq!(picker.row_title(0, 99), None);
    }

    #[test]
    fn test_keys_navigate_and_commit() {
        let result = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&result);

        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.on_value_done(move |value, index| *sink.borrow_mut() = Some((value, index)));
        picker.attach();

        assert_eq!(picker.handle_key(key(KeyCode::Down)), PickerResponse::Handled);
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), PickerResponse::Committed);
        assert_eq!(
            result.borrow().clone(),
            Some(("Blackberries".to_string(), 3))
        );
    }

    #[test]
    fn test_esc_cancels() {
        let cancelled = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&cancelled);

        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.on_cancelled(move || *sink.borrow_mut() = true);
        picker.attach();

        assert_eq!(picker.handle_key(key(KeyCode::Esc)), PickerResponse::Cancelled);
        assert!(*cancelled.borrow());
    }

    #[test]
    fn test_tab_moves_toolbar_focus_to_cancel() {
        let cancelled = Rc::new(RefCell::new(false));
        let sink = Rc::clone(&cancelled);

        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        picker.on_cancelled(move || *sink.borrow_mut() = true);
        picker.attach();

        picker.handle_key(key(KeyCode::Tab));
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), PickerResponse::Cancelled);
        assert!(*cancelled.borrow());
    }

    #[test]
    fn test_custom_action_keeps_picker_attached() {
        let pressed = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&pressed);

        let actions = vec![ToolbarAction::Custom {
            label: "Refresh".into(),
            on_press: Box::new(move || *sink.borrow_mut() += 1),
        }];
        let mut picker = ModalPicker::new(fruits(), actions);
        picker.attach();

        assert_eq!(picker.handle_key(key(KeyCode::Enter)), PickerResponse::Handled);
        assert_eq!(*pressed.borrow(), 1);
        assert!(picker.is_attached());
    }

    #[test]
    fn test_multi_column_focus_switching() {
        let result = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&result);

        let mut picker = ModalPicker::new(devices(), standard_toolbar());
        picker.on_multi_value_done(move |values, indexes| {
            *sink.borrow_mut() = Some((values, indexes));
        });
        picker.attach();

        // Move to the accessory column and pick "AirPods Max".
        picker.handle_key(key(KeyCode::Right));
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::Enter));

        let expected = (
            vec!["MacBook".to_string(), "AirPods Max".to_string()],
            vec![2, 2],
        );
        assert_eq!(result.borrow().clone(), Some(expected));
    }

    #[test]
    fn test_date_commit_fires_date_callback() {
        use chrono::NaiveDate;

        let result = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&result);

        let start = NaiveDate::from_ymd_opt(2026, 8, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let params = CalendarParams::new().with_selected(start);
        let mut picker = ModalPicker::new(PickerMode::Calendar(params), standard_toolbar());
        picker.on_date_done(move |date| *sink.borrow_mut() = Some(date));
        picker.attach();

        // Step the year up once, then commit.
        picker.handle_key(key(KeyCode::Up));
        picker.handle_key(key(KeyCode::Enter));

        let expected = NaiveDate::from_ymd_opt(2027, 8, 23)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(*result.borrow(), Some(expected));
        assert!(!picker.is_attached());
    }

    #[test]
    fn test_keys_ignored_when_detached() {
        let mut picker = ModalPicker::new(fruits(), standard_toolbar());
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), PickerResponse::Ignored);
    }
}

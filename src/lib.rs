//! modalpick — a modal input-picker overlay for ratatui applications.
//!
//! A [`ModalPicker`] attaches to a host surface, presents one of three input
//! surfaces (date/time wheel, single list, multi-column list) together with a
//! toolbar, and reports a single terminal outcome through caller-supplied
//! callbacks: a committed value or a cancellation.
//!
//! The relation between hosts and attached pickers is an explicit
//! [`PickerRegistry`] rather than a scan of the widget tree, so "the active
//! picker for this host" is a map lookup.
//!
//! ```no_run
//! use modalpick::{HostId, ModalPicker, PickerMode, PickerRegistry, ToolbarAction};
//!
//! let mut picker = ModalPicker::new(
//!     PickerMode::SingleList {
//!         items: vec!["Apple".into(), "Banana".into()],
//!         selected_index: Some(1),
//!     },
//!     vec![
//!         ToolbarAction::Cancel("Cancel".into()),
//!         ToolbarAction::Spacer,
//!         ToolbarAction::Done,
//!     ],
//! );
//! picker.on_value_done(|value, index| println!("{value} ({index})"));
//!
//! let mut registry = PickerRegistry::new();
//! let host = HostId::next();
//! registry.show(host, picker);
//! // route key events with registry.handle_key(host, key),
//! // draw with modalpick::render_modal_picker(...)
//! ```

pub mod config;
pub mod date;
pub mod host;
pub mod log;
pub mod mode;
pub mod picker;
pub mod render;
pub mod style;
pub mod toolbar;
pub mod wheel;

pub use config::Config;
pub use date::{DateField, DateWheel};
pub use host::{HostId, PickerRegistry};
pub use mode::{CalendarParams, DateMode, PickerMode};
pub use picker::{ModalPicker, PickerResponse};
pub use render::render_modal_picker;
pub use style::PickerStyle;
pub use toolbar::{Toolbar, ToolbarAction};
pub use wheel::{ListWheel, Wheel};

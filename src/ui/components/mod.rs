//! UI Components
//!
//! Reusable GTK4 widgets for the file selector.
//!
//! # Components
//!
//! - `file_list.rs` - Scrollable directory listing
//! - `history_list.rs` - Recently started games
//! - `menu_panel.rs` - Slide-in menu mask and entries
//! - `preference_list.rs` - Bound preference controls

mod file_list;
mod history_list;
mod menu_panel;
mod preference_list;

pub use file_list::FileList;
pub use history_list::HistoryList;
pub use menu_panel::MenuPanel;
pub use preference_list::{show_preference_window, PreferenceList};

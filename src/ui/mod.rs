// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! File selector user interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: HistoryStore, ConfigStore, PreferenceRegistry (in `history`, `config`, `prefs`)
//! - **Controller**: FileSelectorController and the SlideMenu state machine
//! - **View**: GTK4 components (in `components/`, behind the `gui` feature)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── controller.rs   // MVC Controller for the file selector
//! ├── launcher.rs     // Launcher trait and implementations
//! ├── menu.rs         // Slide-in menu state machine
//! ├── app.rs          // GTK4 Application setup (gui)
//! └── components/     // GTK4 widgets (gui)
//! ```
//!
//! Everything except `app` and `components` is toolkit-free and runs
//! headless.

pub mod controller;
pub mod launcher;
pub mod menu;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;

pub use controller::{ClickOutcome, FileSelectorController, HistoryCell, MenuAction, StartupOutcome};
pub use launcher::{DryRunLauncher, Launcher, ProcessLauncher};
pub use menu::{MenuEntry, MenuKey, MenuState, SlideMenu};

#[cfg(feature = "gui")]
pub use app::App;

#[cfg(test)]
mod tests;

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

//! Declarative preference screens
//!
//! # Module Structure
//!
//! ```text
//! prefs/
//! ├── descriptor.rs   // PreferenceInfo: what a setting is and how it binds
//! ├── item.rs         // PreferenceItem / Control: bound controls for the view
//! └── screen.rs       // PreferenceScreen and the PreferenceRegistry
//! ```
//!
//! Descriptors are static. Items are created per display and bind through
//! getter/setter closures to a [`ConfigStore`](crate::config::ConfigStore),
//! so every change is persisted as it happens.

pub mod descriptor;
pub mod item;
pub mod screen;

pub use descriptor::{PreferenceInfo, SelectOption};
pub use item::{
    convert_cursor_scale, convert_percent_scale, Binding, Control, PreferenceError, PreferenceItem,
    SelectChoice, SliderCaption, SliderStyle, SubScreenLink,
};
pub use screen::{PreferenceEnv, PreferenceRegistry, PreferenceScreen, RegistryOptions, RendererScreens};

#[cfg(test)]
mod tests;

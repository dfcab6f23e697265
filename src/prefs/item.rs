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

//! Bound preference items
//!
//! A [`PreferenceItem`] is what a descriptor produces for the view: a
//! localized caption, the size it was laid out for, and a [`Control`]
//! whose value always flows through a getter/setter pair into the
//! configuration store. Items hold no value of their own.

use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use crate::config::ConfigStore;
use crate::core::Size;
use crate::prefs::screen::{PreferenceScreen, RendererScreens};

/// Errors from driving a control with user-supplied text.
#[derive(Debug, Error, PartialEq)]
pub enum PreferenceError {
    /// No descriptor with this persistence key.
    #[error("Unknown preference key: {0}")]
    UnknownKey(String),
    /// Text could not be converted to the control's value type.
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
    /// Value is not one of the select list's stored values.
    #[error("'{value}' is not an option of {key} (expected one of: {allowed})")]
    UnknownOption {
        key: String,
        value: String,
        allowed: String,
    },
    /// Sub-screen launchers have no value.
    #[error("{0} opens a sub-screen and has no value")]
    NotAValue(String),
}

/// Getter/setter pair closed over a store, a key and a default.
pub struct Binding<T> {
    getter: Box<dyn Fn() -> T>,
    setter: Box<dyn Fn(T)>,
}

impl<T> Binding<T> {
    pub fn new(getter: impl Fn() -> T + 'static, setter: impl Fn(T) + 'static) -> Self {
        Self {
            getter: Box::new(getter),
            setter: Box::new(setter),
        }
    }

    pub fn get(&self) -> T {
        (self.getter)()
    }

    /// Writes through to the store immediately.
    pub fn set(&self, value: T) {
        (self.setter)(value)
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Binding")
    }
}

/// One entry of a select list, with its label already localized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectChoice {
    pub label: String,
    pub value: String,
}

/// How a slider renders the caption next to its knob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderStyle {
    /// Cursor icon drawn at a scale derived from the value
    Icon,
    /// Percentage text
    Text,
}

/// Rendered slider caption.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderCaption {
    IconScale(f32),
    Text(String),
}

impl fmt::Display for SliderCaption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderCaption::IconScale(scale) => write!(f, "x{:.2}", scale),
            SliderCaption::Text(text) => f.write_str(text),
        }
    }
}

/// Maps a slider position in `[0, 1]` to a virtual cursor scale.
///
/// The lower half covers 0.25..1.0, the upper half 1.0..2.0, so the
/// default position 0.5 is the icon's natural size.
pub fn convert_cursor_scale(value: f32) -> f32 {
    if value <= 0.5 {
        0.25 + value * 1.5
    } else {
        1.0 + (value - 0.5) * 2.0
    }
}

/// Renders a `[0, 1]` value as a truncated percentage, e.g. `0.15` → `"15%"`.
pub fn convert_percent_scale(value: f32) -> String {
    format!("{}%", (value * 100.0) as i32)
}

/// Sub-screen launcher for renderer-specific options.
///
/// Which screen opens is decided at click time from the store's current
/// `renderer` value.
pub struct SubScreenLink {
    store: Rc<dyn ConfigStore>,
    screens: Rc<RendererScreens>,
}

impl SubScreenLink {
    pub fn new(store: Rc<dyn ConfigStore>, screens: Rc<RendererScreens>) -> Self {
        Self { store, screens }
    }

    /// Screen to open for the configured renderer, `None` for an
    /// unrecognised value.
    pub fn open(&self) -> Option<Rc<PreferenceScreen>> {
        let renderer = self
            .store
            .get_string(RendererScreens::RENDERER_KEY, RendererScreens::DEFAULT_RENDERER);
        self.screens.for_renderer(&renderer)
    }
}

impl fmt::Debug for SubScreenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubScreenLink").finish_non_exhaustive()
    }
}

/// The bound control of one item.
#[derive(Debug)]
pub enum Control {
    CheckBox(Binding<bool>),
    SelectList {
        choices: Vec<SelectChoice>,
        binding: Binding<String>,
    },
    /// Free text chosen through a file picker
    FileSelect(Binding<String>),
    Slider {
        binding: Binding<f32>,
        default: f32,
        style: SliderStyle,
    },
    SubScreen(SubScreenLink),
}

/// A renderable, bound preference control.
#[derive(Debug)]
pub struct PreferenceItem {
    /// Localized caption
    pub caption: String,
    /// Persistence key, `None` for sub-screen launchers
    pub key: Option<String>,
    /// Target size the item was created for
    pub size: Size,
    pub control: Control,
}

impl PreferenceItem {
    /// For select lists: index of the choice matching the stored value.
    pub fn selected_index(&self) -> Option<usize> {
        match &self.control {
            Control::SelectList { choices, binding } => {
                let current = binding.get();
                choices.iter().position(|choice| choice.value == current)
            }
            _ => None,
        }
    }

    /// For select lists: picks choice `index` and persists its value.
    /// Out-of-range indices are ignored.
    pub fn select(&self, index: usize) {
        if let Control::SelectList { choices, binding } = &self.control {
            if let Some(choice) = choices.get(index) {
                binding.set(choice.value.clone());
            }
        }
    }

    /// For sliders: caption for `value`.
    pub fn slider_caption(&self, value: f32) -> Option<SliderCaption> {
        match &self.control {
            Control::Slider { style: SliderStyle::Icon, .. } => {
                Some(SliderCaption::IconScale(convert_cursor_scale(value)))
            }
            Control::Slider { style: SliderStyle::Text, .. } => {
                Some(SliderCaption::Text(convert_percent_scale(value)))
            }
            _ => None,
        }
    }

    /// Current value as display text.
    ///
    /// Select lists show the matching label, or the raw stored value when
    /// it matches no choice.
    pub fn value_text(&self) -> String {
        match &self.control {
            Control::CheckBox(binding) => String::from(if binding.get() { "on" } else { "off" }),
            Control::SelectList { choices, binding } => {
                let current = binding.get();
                choices
                    .iter()
                    .find(|choice| choice.value == current)
                    .map(|choice| choice.label.clone())
                    .unwrap_or(current)
            }
            Control::FileSelect(binding) => binding.get(),
            Control::Slider { binding, .. } => self
                .slider_caption(binding.get())
                .map(|caption| caption.to_string())
                .unwrap_or_default(),
            Control::SubScreen(_) => String::from(">"),
        }
    }

    /// Parses `text` for this control and persists it.
    ///
    /// Check boxes accept `on/off`, `true/false`, `1/0`; select lists accept
    /// a stored value; sliders accept a float in `[0, 1]`.
    pub fn set_from_str(&self, text: &str) -> Result<(), PreferenceError> {
        let key = self.key.clone().unwrap_or_else(|| self.caption.clone());
        let invalid = || PreferenceError::InvalidValue {
            key: key.clone(),
            value: text.to_string(),
        };

        match &self.control {
            Control::CheckBox(binding) => {
                let value = match text.trim().to_lowercase().as_str() {
                    "on" | "true" | "1" | "yes" => true,
                    "off" | "false" | "0" | "no" => false,
                    _ => return Err(invalid()),
                };
                binding.set(value);
            }
            Control::SelectList { choices, binding } => {
                if !choices.iter().any(|choice| choice.value == text) {
                    return Err(PreferenceError::UnknownOption {
                        key: key.clone(),
                        value: text.to_string(),
                        allowed: choices
                            .iter()
                            .map(|choice| choice.value.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
                binding.set(text.to_string());
            }
            Control::FileSelect(binding) => binding.set(text.to_string()),
            Control::Slider { binding, .. } => {
                let value: f32 = text.trim().parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(invalid());
                }
                binding.set(value);
            }
            Control::SubScreen(_) => return Err(PreferenceError::NotAValue(key.clone())),
        }

        Ok(())
    }
}

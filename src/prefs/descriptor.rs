//! Preference descriptors
//!
//! A descriptor states how one setting is captioned, which key it is
//! persisted under, its default, and which kind of control edits it. It
//! never holds the current value. `create_item` is the single dispatch
//! point that turns a descriptor into a bound [`PreferenceItem`].

use std::rc::Rc;

use crate::config::ConfigStore;
use crate::core::Size;
use crate::prefs::item::{
    Binding, Control, PreferenceItem, SelectChoice, SliderStyle, SubScreenLink,
};
use crate::prefs::screen::PreferenceEnv;

/// A `(label key, stored value)` pair of a select list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Static definition of one configurable setting.
#[derive(Clone, Debug, PartialEq)]
pub enum PreferenceInfo {
    CheckBox {
        caption: String,
        key: String,
        default: bool,
    },
    SelectList {
        caption: String,
        key: String,
        default: String,
        options: Vec<SelectOption>,
    },
    SelectFile {
        caption: String,
        key: String,
        default: String,
    },
    SliderIcon {
        caption: String,
        key: String,
        default: f32,
    },
    SliderText {
        caption: String,
        key: String,
        default: f32,
    },
    /// Opens the options screen of the configured renderer
    SubPref { caption: String },
}

impl PreferenceInfo {
    pub fn check_box(caption: &str, key: &str, default: bool) -> Self {
        Self::CheckBox {
            caption: caption.to_string(),
            key: key.to_string(),
            default,
        }
    }

    pub fn select_list(caption: &str, key: &str, default: &str, options: &[(&str, &str)]) -> Self {
        Self::SelectList {
            caption: caption.to_string(),
            key: key.to_string(),
            default: default.to_string(),
            options: options
                .iter()
                .map(|(label, value)| SelectOption::new(label, value))
                .collect(),
        }
    }

    pub fn select_file(caption: &str, key: &str, default: &str) -> Self {
        Self::SelectFile {
            caption: caption.to_string(),
            key: key.to_string(),
            default: default.to_string(),
        }
    }

    pub fn slider_icon(caption: &str, key: &str, default: f32) -> Self {
        Self::SliderIcon {
            caption: caption.to_string(),
            key: key.to_string(),
            default,
        }
    }

    pub fn slider_text(caption: &str, key: &str, default: f32) -> Self {
        Self::SliderText {
            caption: caption.to_string(),
            key: key.to_string(),
            default,
        }
    }

    pub fn sub_pref(caption: &str) -> Self {
        Self::SubPref {
            caption: caption.to_string(),
        }
    }

    /// Caption key (not yet localized).
    pub fn caption(&self) -> &str {
        match self {
            Self::CheckBox { caption, .. }
            | Self::SelectList { caption, .. }
            | Self::SelectFile { caption, .. }
            | Self::SliderIcon { caption, .. }
            | Self::SliderText { caption, .. }
            | Self::SubPref { caption } => caption,
        }
    }

    /// Persistence key; sub-screen launchers have none.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::CheckBox { key, .. }
            | Self::SelectList { key, .. }
            | Self::SelectFile { key, .. }
            | Self::SliderIcon { key, .. }
            | Self::SliderText { key, .. } => Some(key),
            Self::SubPref { .. } => None,
        }
    }

    /// Short kind name, used by listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CheckBox { .. } => "checkbox",
            Self::SelectList { .. } => "select",
            Self::SelectFile { .. } => "file",
            Self::SliderIcon { .. } => "slider-icon",
            Self::SliderText { .. } => "slider-text",
            Self::SubPref { .. } => "screen",
        }
    }

    /// Produces a bound control laid out for `size`.
    pub fn create_item(&self, env: &PreferenceEnv, size: Size) -> PreferenceItem {
        let control = match self {
            Self::CheckBox { key, default, .. } => Control::CheckBox(bool_binding(&env.store, key, *default)),
            Self::SelectList {
                key,
                default,
                options,
                ..
            } => Control::SelectList {
                choices: options
                    .iter()
                    .map(|option| SelectChoice {
                        label: env.locale.text(&option.label),
                        value: option.value.clone(),
                    })
                    .collect(),
                binding: string_binding(&env.store, key, default),
            },
            Self::SelectFile { key, default, .. } => {
                Control::FileSelect(string_binding(&env.store, key, default))
            }
            Self::SliderIcon { key, default, .. } => Control::Slider {
                binding: float_binding(&env.store, key, *default),
                default: *default,
                style: SliderStyle::Icon,
            },
            Self::SliderText { key, default, .. } => Control::Slider {
                binding: float_binding(&env.store, key, *default),
                default: *default,
                style: SliderStyle::Text,
            },
            Self::SubPref { .. } => Control::SubScreen(SubScreenLink::new(
                Rc::clone(&env.store),
                Rc::clone(&env.renderer_screens),
            )),
        };

        PreferenceItem {
            caption: env.locale.text(self.caption()),
            key: self.key().map(str::to_string),
            size,
            control,
        }
    }
}

fn bool_binding(store: &Rc<dyn ConfigStore>, key: &str, default: bool) -> Binding<bool> {
    let (read, write) = (Rc::clone(store), Rc::clone(store));
    let (read_key, write_key) = (key.to_string(), key.to_string());
    Binding::new(
        move || read.get_bool(&read_key, default),
        move |value| write.set_bool(&write_key, value),
    )
}

fn string_binding(store: &Rc<dyn ConfigStore>, key: &str, default: &str) -> Binding<String> {
    let (read, write) = (Rc::clone(store), Rc::clone(store));
    let (read_key, write_key) = (key.to_string(), key.to_string());
    let default = default.to_string();
    Binding::new(
        move || read.get_string(&read_key, &default),
        move |value: String| write.set_string(&write_key, &value),
    )
}

fn float_binding(store: &Rc<dyn ConfigStore>, key: &str, default: f32) -> Binding<f32> {
    let (read, write) = (Rc::clone(store), Rc::clone(store));
    let (read_key, write_key) = (key.to_string(), key.to_string());
    Binding::new(
        move || read.get_float(&read_key, default),
        move |value| write.set_float(&write_key, value),
    )
}

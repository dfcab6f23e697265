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

//! Bound control tests
//!
//! Tests that every control reads through its getter and writes through
//! its setter straight into the store:
//! - Check boxes persist as integers
//! - Select lists show the stored value's label
//! - Sliders use the right caption function
//! - Text input is validated per control kind

use std::rc::Rc;

use crate::config::{ConfigStore, MemoryConfigStore};
use crate::core::Size;
use crate::locale::LocaleTable;
use crate::prefs::{
    convert_cursor_scale, convert_percent_scale, Control, PreferenceEnv, PreferenceError,
    PreferenceInfo, PreferenceRegistry, RegistryOptions, SliderCaption,
};

/// Helper: Builds an env over a fresh in-memory store
fn create_env() -> (Rc<MemoryConfigStore>, PreferenceEnv) {
    let store = Rc::new(MemoryConfigStore::new());
    let registry = PreferenceRegistry::new(RegistryOptions::global());
    let env = registry.env(store.clone(), Rc::new(LocaleTable::english()));
    (store, env)
}

const ITEM_SIZE: Size = Size {
    width: 480.0,
    height: 64.0,
};

#[test]
fn test_check_box_reads_default_then_persists() {
    let (store, env) = create_env();
    let item = PreferenceInfo::check_box("preference_show_fps", "showfps", false).create_item(&env, ITEM_SIZE);

    assert_eq!(item.caption, "Show FPS");
    assert_eq!(item.key.as_deref(), Some("showfps"));
    assert_eq!(item.size, ITEM_SIZE);

    let Control::CheckBox(binding) = &item.control else {
        panic!("Expected a check box, got {:?}", item.control);
    };
    assert!(!binding.get());

    binding.set(true);
    assert_eq!(store.raw("showfps").as_deref(), Some("1"));
    assert!(binding.get());
}

#[test]
fn test_getter_sees_external_changes() {
    let (store, env) = create_env();
    let item = PreferenceInfo::check_box("preference_output_log", "outputlog", true).create_item(&env, ITEM_SIZE);

    assert_eq!(item.value_text(), "on");
    store.set_bool("outputlog", false);
    assert_eq!(item.value_text(), "off");
}

#[test]
fn test_select_list_shows_stored_label() {
    let (store, env) = create_env();
    let info = PreferenceInfo::select_list(
        "preference_mem_limit",
        "memusage",
        "unlimited",
        &[
            ("preference_mem_unlimited", "unlimited"),
            ("preference_mem_high", "high"),
            ("preference_mem_low", "low"),
        ],
    );
    let item = info.create_item(&env, ITEM_SIZE);

    assert_eq!(item.value_text(), "Unlimited");
    assert_eq!(item.selected_index(), Some(0));

    store.set_string("memusage", "low");
    assert_eq!(item.value_text(), "Low");
    assert_eq!(item.selected_index(), Some(2));

    item.select(1);
    assert_eq!(store.get_string("memusage", ""), "high");

    item.select(99);
    assert_eq!(store.get_string("memusage", ""), "high", "Out of range select is ignored");
}

#[test]
fn test_select_list_unknown_stored_value() {
    let (store, env) = create_env();
    store.set_string("renderer", "vulkan");
    let registry = PreferenceRegistry::new(RegistryOptions::global());
    let item = registry.find("renderer").unwrap().create_item(&env, ITEM_SIZE);

    assert_eq!(item.selected_index(), None);
    assert_eq!(item.value_text(), "vulkan");
}

#[test]
fn test_select_list_offers_all_choices_localized() {
    let (_store, env) = create_env();
    let registry = PreferenceRegistry::new(RegistryOptions::global());
    let item = registry.find("renderer").unwrap().create_item(&env, ITEM_SIZE);

    let Control::SelectList { choices, .. } = &item.control else {
        panic!("Expected a select list");
    };
    let pairs: Vec<(&str, &str)> = choices
        .iter()
        .map(|choice| (choice.label.as_str(), choice.value.as_str()))
        .collect();
    assert_eq!(pairs, vec![("OpenGL", "opengl"), ("Software", "software")]);
}

#[test]
fn test_file_select_binds_string() {
    let (store, env) = create_env();
    let item = PreferenceInfo::select_file("preference_default_font", "default_font", "").create_item(&env, ITEM_SIZE);

    assert_eq!(item.value_text(), "");
    item.set_from_str("/fonts/NotoSans.ttf").unwrap();
    assert_eq!(store.get_string("default_font", ""), "/fonts/NotoSans.ttf");
}

#[test]
fn test_slider_icon_caption() {
    let (_store, env) = create_env();
    let item = PreferenceInfo::slider_icon("preference_virtual_cursor_scale", "vcursor_scale", 0.5)
        .create_item(&env, ITEM_SIZE);

    assert_eq!(item.slider_caption(0.5), Some(SliderCaption::IconScale(1.0)));
    assert_eq!(item.slider_caption(0.0), Some(SliderCaption::IconScale(0.25)));
    assert_eq!(item.slider_caption(1.0), Some(SliderCaption::IconScale(2.0)));
}

#[test]
fn test_slider_text_caption_and_persist() {
    let (store, env) = create_env();
    let item = PreferenceInfo::slider_text("preference_menu_handler_opacity", "menu_handler_opa", 0.15)
        .create_item(&env, ITEM_SIZE);

    assert_eq!(item.value_text(), "15%");

    let Control::Slider { binding, default, .. } = &item.control else {
        panic!("Expected a slider");
    };
    assert_eq!(*default, 0.15);
    binding.set(0.5);
    assert_eq!(store.get_float("menu_handler_opa", 0.0), 0.5);
    assert_eq!(item.value_text(), "50%");
}

#[test]
fn test_caption_functions() {
    assert_eq!(convert_percent_scale(0.0), "0%");
    assert_eq!(convert_percent_scale(1.0), "100%");
    assert_eq!(convert_percent_scale(0.257), "25%");
    assert_eq!(convert_cursor_scale(0.25), 0.625);
    assert_eq!(convert_cursor_scale(0.75), 1.5);
}

#[test]
fn test_set_from_str_check_box() {
    let (store, env) = create_env();
    let item = PreferenceInfo::check_box("preference_show_fps", "showfps", false).create_item(&env, ITEM_SIZE);

    item.set_from_str("on").unwrap();
    assert!(store.get_bool("showfps", false));
    item.set_from_str("0").unwrap();
    assert!(!store.get_bool("showfps", true));

    assert_eq!(
        item.set_from_str("maybe"),
        Err(PreferenceError::InvalidValue {
            key: "showfps".to_string(),
            value: "maybe".to_string(),
        })
    );
}

#[test]
fn test_set_from_str_rejects_unknown_option() {
    let (store, env) = create_env();
    let registry = PreferenceRegistry::new(RegistryOptions::global());
    let item = registry.find("renderer").unwrap().create_item(&env, ITEM_SIZE);

    let result = item.set_from_str("vulkan");
    assert!(matches!(result, Err(PreferenceError::UnknownOption { .. })));
    assert_eq!(store.raw("renderer"), None, "Rejected value must not be stored");

    item.set_from_str("opengl").unwrap();
    assert_eq!(store.get_string("renderer", ""), "opengl");
}

#[test]
fn test_set_from_str_slider_range() {
    let (_store, env) = create_env();
    let item = PreferenceInfo::slider_text("preference_menu_handler_opacity", "menu_handler_opa", 0.15)
        .create_item(&env, ITEM_SIZE);

    assert!(item.set_from_str("1.5").is_err());
    assert!(item.set_from_str("abc").is_err());
    assert!(item.set_from_str("0.3").is_ok());
}

#[test]
fn test_sub_pref_has_no_value() {
    let (_store, env) = create_env();
    let item = PreferenceInfo::sub_pref("preference_renderer_opt").create_item(&env, ITEM_SIZE);

    assert_eq!(item.key, None);
    assert_eq!(item.caption, "Renderer options");
    assert!(matches!(item.set_from_str("x"), Err(PreferenceError::NotAValue(_))));
}

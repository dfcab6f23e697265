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

//! Slide-in menu tests
//!
//! Tests for the menu state machine:
//! - Geometry in landscape and portrait
//! - Show/hide transitions and their tweens
//! - Toggling while a transition is running
//! - Local preference entry visibility

use crate::core::Size;
use crate::ui::menu::{
    Easing, MenuEntry, MenuGeometry, MenuState, SlideMenu, Tween, MASK_SHOWN_OPACITY,
    UI_ACTION_DURATION,
};

const LANDSCAPE: Size = Size {
    width: 1200.0,
    height: 600.0,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

#[test]
fn test_geometry_landscape_and_portrait() {
    let landscape = MenuGeometry::for_ui(LANDSCAPE);
    assert!(approx(landscape.menu_width, 400.0));
    assert!(approx(landscape.hidden_x(), 1200.0));
    assert!(approx(landscape.shown_x(), 800.0));

    let portrait = MenuGeometry::for_ui(Size::new(600.0, 1200.0));
    assert!(approx(portrait.menu_width, 360.0));
    assert!(approx(portrait.shown_x(), 240.0));
}

#[test]
fn test_quadratic_out_tween() {
    let mut tween = Tween::new(0.0, 100.0, 1.0, Easing::QuadraticOut);
    assert!(approx(tween.value(), 0.0));

    // Ease-out covers 75% of the distance in the first half
    assert!(approx(tween.advance(0.5), 75.0));
    assert!(!tween.is_finished());

    assert!(approx(tween.advance(10.0), 100.0));
    assert!(tween.is_finished());
}

#[test]
fn test_new_menu_is_hidden_and_unbuilt() {
    let mut menu = SlideMenu::new();
    assert_eq!(menu.state(), MenuState::Hidden);
    assert!(!menu.is_built());

    menu.hide();
    assert!(!menu.is_built(), "hide before first show should do nothing");
    assert!(!menu.is_animating());
}

#[test]
fn test_show_slides_in_and_fades_mask() {
    let mut menu = SlideMenu::new();

    assert!(menu.show(LANDSCAPE, false));
    assert!(menu.is_shown());
    assert!(menu.capture_enabled());
    assert!(approx(menu.menu_x(), 1200.0), "animation starts off screen");

    menu.tick(UI_ACTION_DURATION / 2.0);
    assert!(menu.menu_x() < 1200.0 && menu.menu_x() > 800.0);
    assert!(menu.mask_opacity() > 0 && menu.mask_opacity() < 128);

    menu.tick(UI_ACTION_DURATION);
    assert!(approx(menu.menu_x(), 800.0));
    assert_eq!(menu.mask_opacity(), MASK_SHOWN_OPACITY as u8);
    assert!(!menu.is_animating());
}

#[test]
fn test_show_twice_is_noop() {
    let mut menu = SlideMenu::new();
    menu.show(LANDSCAPE, false);
    menu.tick(1.0);

    assert!(!menu.show(LANDSCAPE, true), "second show should be ignored");
    assert!(!menu.is_animating());
    assert!(
        menu.is_entry_visible(MenuEntry::NewLocalPref),
        "ignored show must not change the entries"
    );
}

#[test]
fn test_hide_returns_to_rest() {
    let mut menu = SlideMenu::new();
    menu.show(LANDSCAPE, false);
    menu.tick(1.0);

    menu.hide();
    assert!(menu.is_hidden());
    assert!(!menu.capture_enabled());

    menu.tick(1.0);
    assert!(approx(menu.menu_x(), 1200.0));
    assert_eq!(menu.mask_opacity(), 0);
}

#[test]
fn test_hide_during_show_reverses_from_current_position() {
    let mut menu = SlideMenu::new();
    menu.show(LANDSCAPE, false);
    menu.tick(UI_ACTION_DURATION / 2.0);
    let midway = menu.menu_x();

    menu.hide();
    assert!(menu.is_hidden(), "state flips immediately, not after the animation");
    assert!(approx(menu.menu_x(), midway));

    menu.tick(0.01);
    assert!(menu.menu_x() > midway, "panel should head back out");

    menu.tick(1.0);
    assert!(approx(menu.menu_x(), 1200.0));
}

#[test]
fn test_show_during_hide() {
    let mut menu = SlideMenu::new();
    menu.show(LANDSCAPE, false);
    menu.tick(1.0);
    menu.hide();
    menu.tick(UI_ACTION_DURATION / 2.0);

    assert!(menu.show(LANDSCAPE, false));
    menu.tick(1.0);
    assert!(approx(menu.menu_x(), 800.0));
    assert_eq!(menu.mask_opacity(), 128);
}

#[test]
fn test_capture_tap_hides_only_when_shown() {
    let mut menu = SlideMenu::new();
    assert!(!menu.on_capture_tap());

    menu.show(LANDSCAPE, false);
    assert!(menu.on_capture_tap());
    assert!(menu.is_hidden());
    assert!(!menu.on_capture_tap());
}

#[test]
fn test_exactly_one_local_preference_entry() {
    let mut menu = SlideMenu::new();

    menu.show(LANDSCAPE, false);
    let entries = menu.visible_entries();
    assert!(entries.contains(&MenuEntry::NewLocalPref));
    assert!(!entries.contains(&MenuEntry::LocalPref));
    assert_eq!(entries.len(), 6);

    menu.hide();
    menu.show(LANDSCAPE, true);
    let entries = menu.visible_entries();
    assert!(entries.contains(&MenuEntry::LocalPref));
    assert!(!entries.contains(&MenuEntry::NewLocalPref));
    assert_eq!(entries.first(), Some(&MenuEntry::Rotate));
    assert_eq!(entries.last(), Some(&MenuEntry::Exit));
}

#[test]
fn test_resize_keeps_resting_position() {
    let mut menu = SlideMenu::new();
    menu.show(LANDSCAPE, false);
    menu.tick(1.0);

    menu.resize(Size::new(600.0, 1200.0));
    assert!(approx(menu.menu_x(), 240.0));
    assert!(menu.is_shown());
}

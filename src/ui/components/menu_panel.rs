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

//! Slide-in menu view
//!
//! Two overlay children: a full-size mask that dims the browser and
//! captures taps, and the panel of menu entries. Both are positioned from
//! the [`SlideMenu`](crate::ui::menu::SlideMenu) model on every frame.

use gtk4::{prelude::*, Align, Box as GtkBox, Button, GestureClick, Orientation};
use std::rc::Rc;

use crate::locale::Locale;
use crate::ui::menu::{MenuEntry, SlideMenu};

/// Mask and entry panel of the slide-in menu
pub struct MenuPanel {
    mask: GtkBox,
    panel: GtkBox,
    locale: Rc<dyn Locale>,
}

impl MenuPanel {
    pub fn new(locale: Rc<dyn Locale>) -> Self {
        let mask = GtkBox::builder()
            .hexpand(true)
            .vexpand(true)
            .css_classes(["menu-mask"])
            .visible(false)
            .build();

        let panel = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(2)
            .halign(Align::Start)
            .vexpand(true)
            .css_classes(["menu-panel"])
            .visible(false)
            .build();

        Self { mask, panel, locale }
    }

    /// Calls `on_tap` when the dimmed area is clicked.
    pub fn connect_mask_tap(&self, on_tap: impl Fn() + 'static) {
        let gesture = GestureClick::new();
        gesture.connect_released(move |_, _, _, _| on_tap());
        self.mask.add_controller(gesture);
    }

    /// Rebuilds the entry buttons.
    pub fn set_entries(&self, entries: &[MenuEntry], on_activate: Rc<dyn Fn(MenuEntry)>) {
        while let Some(child) = self.panel.first_child() {
            self.panel.remove(&child);
        }

        for &entry in entries {
            let button = Button::builder()
                .label(self.locale.text(entry.caption()))
                .css_classes(["flat", "menu-entry"])
                .build();
            let on_activate = Rc::clone(&on_activate);
            button.connect_clicked(move |_| on_activate(entry));
            self.panel.append(&button);
        }
    }

    /// Applies the model's animated position and opacity.
    pub fn sync(&self, menu: &SlideMenu) {
        let Some(geometry) = menu.geometry() else {
            return;
        };

        let on_screen = menu.is_shown() || menu.is_animating();
        self.mask.set_visible(on_screen);
        self.panel.set_visible(on_screen);
        if !on_screen {
            return;
        }

        self.mask.set_opacity(f64::from(menu.mask_opacity()) / 255.0);
        self.mask.set_can_target(menu.capture_enabled());
        self.panel.set_width_request(geometry.menu_width as i32);
        self.panel.set_margin_start(menu.menu_x().max(0.0) as i32);
    }

    pub fn mask(&self) -> &GtkBox {
        &self.mask
    }

    pub fn panel(&self) -> &GtkBox {
        &self.panel
    }
}

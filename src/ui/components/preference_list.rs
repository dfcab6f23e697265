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

//! Preference screen component
//!
//! Renders the bound items of a [`PreferenceScreen`] as GTK rows:
//!
//! | Control      | Widget                                 |
//! |--------------|----------------------------------------|
//! | CheckBox     | `CheckButton`                          |
//! | SelectList   | `DropDown`                             |
//! | FileSelect   | `Button` opening a `FileDialog`        |
//! | Slider       | `Scale` with a caption label           |
//! | SubScreen    | `Button` opening a nested window       |
//!
//! Widgets write through the item bindings as they change; nothing is
//! buffered in the view.

use gtk4::{
    gio, prelude::*, Align, Box as GtkBox, Button, CheckButton, DropDown, FileDialog, Label,
    ListBox, Orientation, Scale, ScrolledWindow, Window,
};
use std::rc::Rc;
use tracing::debug;

use crate::core::Size;
use crate::prefs::{Control, PreferenceEnv, PreferenceItem, PreferenceScreen};

/// Height of one preference row.
const ROW_HEIGHT: f32 = 48.0;

/// Scrollable list of bound preference controls
pub struct PreferenceList {
    widget: ScrolledWindow,
    /// Items stay alive as long as the widgets bound to them
    items: Rc<Vec<PreferenceItem>>,
}

impl PreferenceList {
    /// Creates the items of `screen` and one row per item.
    pub fn new(screen: &PreferenceScreen, env: &PreferenceEnv, width: f32) -> Self {
        let items = Rc::new(screen.create_items(env, Size::new(width, ROW_HEIGHT)));

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .build();

        for index in 0..items.len() {
            list_box.append(&Self::create_row(&items, index, env));
        }

        let widget = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .child(&list_box)
            .build();

        Self { widget, items }
    }

    fn create_row(items: &Rc<Vec<PreferenceItem>>, index: usize, env: &PreferenceEnv) -> GtkBox {
        let item = &items[index];
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .margin_start(12)
            .margin_end(12)
            .margin_top(6)
            .margin_bottom(6)
            .height_request(item.size.height as i32)
            .build();

        let caption = Label::builder()
            .label(item.caption.as_str())
            .xalign(0.0)
            .hexpand(true)
            .build();
        row.append(&caption);

        match &item.control {
            Control::CheckBox(binding) => {
                let check = CheckButton::builder().active(binding.get()).valign(Align::Center).build();
                let items = Rc::clone(items);
                check.connect_toggled(move |check| {
                    if let Control::CheckBox(binding) = &items[index].control {
                        binding.set(check.is_active());
                    }
                });
                row.append(&check);
            }
            Control::SelectList { choices, .. } => {
                let labels: Vec<&str> = choices.iter().map(|choice| choice.label.as_str()).collect();
                let dropdown = DropDown::from_strings(&labels);
                dropdown.set_valign(Align::Center);
                if let Some(selected) = item.selected_index() {
                    dropdown.set_selected(selected as u32);
                }
                let items = Rc::clone(items);
                dropdown.connect_selected_notify(move |dropdown| {
                    items[index].select(dropdown.selected() as usize);
                });
                row.append(&dropdown);
            }
            Control::FileSelect(_) => {
                let button = Button::builder()
                    .label(Self::file_label(&item.value_text()))
                    .valign(Align::Center)
                    .build();
                let items = Rc::clone(items);
                button.connect_clicked(move |button| Self::pick_file(button, Rc::clone(&items), index));
                row.append(&button);
            }
            Control::Slider { binding, .. } => {
                let value = binding.get();
                let scale = Scale::with_range(Orientation::Horizontal, 0.0, 1.0, 0.01);
                scale.set_value(f64::from(value));
                scale.set_width_request((item.size.width / 3.0) as i32);
                let value_label = Label::builder()
                    .label(item.value_text())
                    .width_chars(6)
                    .build();
                let items = Rc::clone(items);
                let label = value_label.clone();
                scale.connect_value_changed(move |scale| {
                    let item = &items[index];
                    let value = scale.value() as f32;
                    if let Control::Slider { binding, .. } = &item.control {
                        binding.set(value);
                    }
                    if let Some(caption) = item.slider_caption(value) {
                        label.set_text(&caption.to_string());
                    }
                });
                row.append(&scale);
                row.append(&value_label);
            }
            Control::SubScreen(_) => {
                let button = Button::builder().label(item.value_text()).valign(Align::Center).build();
                let items = Rc::clone(items);
                let env = env.clone();
                button.connect_clicked(move |button| {
                    let Control::SubScreen(link) = &items[index].control else {
                        return;
                    };
                    match link.open() {
                        Some(screen) => {
                            let parent = button.root().and_downcast::<Window>();
                            show_preference_window(parent.as_ref(), &screen, &env);
                        }
                        None => debug!("no options screen for the configured renderer"),
                    }
                });
                row.append(&button);
            }
        }

        row
    }

    fn file_label(path: &str) -> String {
        if path.is_empty() {
            String::from("…")
        } else {
            path.to_string()
        }
    }

    fn pick_file(button: &Button, items: Rc<Vec<PreferenceItem>>, index: usize) {
        let dialog = FileDialog::builder().modal(true).build();
        let parent = button.root().and_downcast::<Window>();
        let button = button.clone();
        dialog.open(parent.as_ref(), None::<&gio::Cancellable>, move |result| {
            let Ok(file) = result else {
                return;
            };
            let Some(path) = file.path() else {
                return;
            };
            if let Control::FileSelect(binding) = &items[index].control {
                binding.set(path.to_string_lossy().into_owned());
                button.set_label(&Self::file_label(&binding.get()));
            }
        });
    }

    pub fn items(&self) -> &[PreferenceItem] {
        &self.items
    }

    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}

/// Opens `screen` in its own transient window.
pub fn show_preference_window(parent: Option<&Window>, screen: &PreferenceScreen, env: &PreferenceEnv) {
    let width = 520;
    let list = PreferenceList::new(screen, env, width as f32);

    let window = Window::builder()
        .title(env.locale.text(&screen.title))
        .default_width(width)
        .default_height(640)
        .modal(true)
        .child(list.widget())
        .build();
    window.set_transient_for(parent);
    window.present();
}

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

//! Directory listing component
//!
//! Displays the controller's current listing in a scrollable list view.
//! Row indices match the controller's listing so activation can be
//! forwarded as-is.

use gtk4::{prelude::*, Box as GtkBox, Label, ListBox, Orientation, ScrolledWindow};
use std::rc::Rc;

use crate::core::FileInfo;
use crate::ui::FileSelectorController;

/// Scrollable list of the current directory's entries
pub struct FileList {
    /// Root widget (scrollable container)
    widget: ScrolledWindow,
    /// List box containing rows
    list_box: ListBox,
    /// Controller reference for data access
    controller: Rc<FileSelectorController>,
}

impl FileList {
    pub fn new(controller: Rc<FileSelectorController>) -> Self {
        let scrolled_window = ScrolledWindow::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let list_box = ListBox::builder()
            .selection_mode(gtk4::SelectionMode::None)
            .activate_on_single_click(true)
            .build();

        scrolled_window.set_child(Some(&list_box));

        Self {
            widget: scrolled_window,
            list_box,
            controller,
        }
    }

    /// Rebuilds the rows from the controller's current listing
    pub fn refresh(&self) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        for (index, info) in self.controller.current_list().iter().enumerate() {
            self.list_box.append(&Self::create_row(info, index));
        }
    }

    fn create_row(info: &FileInfo, index: usize) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        row.add_css_class(if index % 2 == 0 { "even-row" } else { "odd-row" });

        let icon = Label::builder()
            .label(if info.is_dir { "📁" } else { "📄" })
            .build();
        let name = Label::builder()
            .label(info.name.as_str())
            .xalign(0.0)
            .hexpand(true)
            .build();

        row.append(&icon);
        row.append(&name);
        row
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    /// Used for connecting the row-activated signal
    pub fn list_box(&self) -> &ListBox {
        &self.list_box
    }
}

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

//! Recent-path list component
//!
//! Each row shows the path split as `prefix` + **dir** + `/file`, with
//! jump and remove buttons and, when the game has a local preference
//! file, a button opening it.

use gtk4::{prelude::*, Box as GtkBox, Button, Label, ListBox, Orientation, ScrolledWindow};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::controller::HistoryCell;
use crate::ui::FileSelectorController;

type PathCallback = Rc<dyn Fn(PathBuf)>;

/// Scrollable list of recently started games
pub struct HistoryList {
    widget: ScrolledWindow,
    list_box: ListBox,
    controller: Rc<FileSelectorController>,
    /// Cells currently displayed, indexed like the rows
    cells: Rc<RefCell<Vec<HistoryCell>>>,
    on_open_config: RefCell<Option<PathCallback>>,
    on_jump: RefCell<Option<Rc<dyn Fn()>>>,
}

impl HistoryList {
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
            cells: Rc::new(RefCell::new(Vec::new())),
            on_open_config: RefCell::new(None),
            on_jump: RefCell::new(None),
        }
    }

    /// Sets what the per-row preference button does.
    pub fn connect_open_config(&self, callback: impl Fn(PathBuf) + 'static) {
        *self.on_open_config.borrow_mut() = Some(Rc::new(callback));
    }

    /// Sets what runs after the jump button moved the listing.
    pub fn connect_jump(&self, callback: impl Fn() + 'static) {
        *self.on_jump.borrow_mut() = Some(Rc::new(callback));
    }

    /// Rebuilds the rows from the (pruned) history
    pub fn refresh(&self) {
        while let Some(child) = self.list_box.first_child() {
            self.list_box.remove(&child);
        }

        let cells = self.controller.history_cells();
        for cell in &cells {
            let row = self.create_row(cell);
            self.list_box.append(&row);
        }
        *self.cells.borrow_mut() = cells;
    }

    fn create_row(&self, cell: &HistoryCell) -> GtkBox {
        let row = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(6)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();

        let prefix = Label::builder()
            .label(cell.prefix.as_str())
            .css_classes(["dim-label"])
            .ellipsize(gtk4::pango::EllipsizeMode::Start)
            .build();
        let dir_name = Label::builder().label(cell.dir_name.as_str()).css_classes(["heading"]).build();
        let file_name = Label::builder()
            .label(cell.file_name.as_str())
            .xalign(0.0)
            .hexpand(true)
            .build();

        row.append(&prefix);
        row.append(&dir_name);
        row.append(&file_name);

        let jump_button = Button::builder()
            .icon_name("folder-open-symbolic")
            .tooltip_text("Show in file list")
            .build();
        let controller = Rc::clone(&self.controller);
        let callback = self.on_jump.borrow().clone();
        let full_path = cell.full_path.clone();
        jump_button.connect_clicked(move |_| {
            if controller.jump_to_history_dir(&full_path) {
                if let Some(callback) = &callback {
                    callback();
                }
            }
        });
        row.append(&jump_button);

        if let Some(config_dir) = &cell.config_dir {
            let config_button = Button::builder()
                .icon_name("preferences-system-symbolic")
                .tooltip_text("Local preferences")
                .build();
            let callback = self.on_open_config.borrow().clone();
            let config_dir = config_dir.clone();
            config_button.connect_clicked(move |_| {
                if let Some(callback) = &callback {
                    callback(config_dir.clone());
                }
            });
            row.append(&config_button);
        }

        let remove_button = Button::builder()
            .icon_name("edit-delete-symbolic")
            .tooltip_text("Remove from history")
            .build();
        let controller = Rc::clone(&self.controller);
        let cells = Rc::clone(&self.cells);
        let list_box = self.list_box.clone();
        let full_path = cell.full_path.clone();
        remove_button.connect_clicked(move |button| {
            controller.remove_history(&full_path);
            cells.borrow_mut().retain(|cell| cell.full_path != full_path);
            if let Some(row) = button.ancestor(gtk4::ListBoxRow::static_type()) {
                list_box.remove(&row);
            }
        });
        row.append(&remove_button);

        row
    }

    /// Full path shown at row `index`
    pub fn path_at_index(&self, index: usize) -> Option<PathBuf> {
        self.cells
            .borrow()
            .get(index)
            .map(|cell| PathBuf::from(&cell.full_path))
    }

    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }

    pub fn list_box(&self) -> &ListBox {
        &self.list_box
    }
}

//! Editor window implemented with egui/eframe

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{debug, info};

use super::components::export_buttons::{self, ButtonAction};
use super::components::item_list;
use super::constants::*;
use crate::config::ItemList;
use crate::export::{self, ClipboardSink, FileSink};
use crate::notification::Notification;

struct ConfigApp {
    items: ItemList,
    file_sink: FileSink,
    clipboard_sink: ClipboardSink,
    notification: Option<Notification>,
    seen_version: u64,
}

impl ConfigApp {
    fn new(_cc: &CreationContext<'_>, file_sink: FileSink) -> Self {
        info!(output_dir = ?file_sink.dir(), "Initializing config editor");
        Self {
            items: ItemList::new(),
            file_sink,
            clipboard_sink: ClipboardSink::new(),
            notification: None,
            seen_version: 0,
        }
    }

    fn handle_button(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::None => {}
            ButtonAction::AddItem => {
                self.items.append();
            }
            ButtonAction::GenerateFile => {
                self.notification = Some(export::export(self.items.items(), &mut self.file_sink));
            }
            ButtonAction::CopyToClipboard => {
                self.notification = Some(export::export(self.items.items(), &mut self.clipboard_sink));
            }
        }
    }

    fn log_list_changes(&mut self) {
        let version = self.items.version();
        if version != self.seen_version {
            debug!(version, items = self.items.len(), valid = self.items.is_valid(), "Item list changed");
            self.seen_version = version;
        }
    }

    fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }
}

impl eframe::App for ConfigApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.expire_notification();

        egui::TopBottomPanel::bottom("notification_panel").show(ctx, |ui| {
            ui.add_space(PADDING);
            let is_valid = self.items.is_valid();
            let action = export_buttons::ui(ui, is_valid);
            self.handle_button(action);

            if let Some(notification) = &self.notification {
                ui.add_space(ITEM_SPACING);
                let color = if notification.is_failure() { NOTIFY_FAILURE } else { NOTIFY_SUCCESS };
                ui.colored_label(color, &notification.message);
            }
            ui.add_space(PADDING);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(PADDING);
            ui.heading(APP_TITLE);
            ui.add_space(SECTION_SPACING);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let actions = item_list::ui(ui, self.items.items());
                    for action in actions {
                        action.apply(&mut self.items);
                    }

                    if self.items.is_empty() {
                        ui.label(
                            egui::RichText::new("(No items. Use \"Add New Item\" to create one.)")
                                .italics()
                                .weak(),
                        );
                    }
                });
        });

        self.log_list_changes();

        if let Some(notification) = &self.notification {
            ctx.request_repaint_after(notification.remaining_at(std::time::Instant::now()));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(items = self.items.len(), "Config editor exiting");
    }
}

pub fn run_gui(file_sink: FileSink) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ConfigApp::new(cc, file_sink)))),
    )
    .map_err(|err| anyhow!("Failed to launch config editor: {err}"))
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the window.
//!
//! The `App` owns the [`GalleryController`] and the [`Surface`] it renders
//! into. Every message that reaches the gallery goes through
//! [`App::run_command`], which applies the returned effects to the surface and
//! then brings the OS window mode in line with the gallery state.

mod message;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::directory_scanner::ImageList;
use crate::gallery::{map_key, map_pointer, Command, GalleryController, KeyBindings};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::empty_state;
use crate::ui::gallery_view::{self, ViewContext};
use crate::ui::surface::Surface;
use iced::widget::{Column, Container, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: Option<GalleryController<ImageList>>,
    surface: Surface,
    key_bindings: KeyBindings,
    thumbnail_size: u32,
    window_id: Option<window::Id>,
    /// Mode last requested from the OS window.
    window_full_screen: bool,
    /// Localized warning shown above the gallery until the next folder opens.
    notification: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("item_count", &self.surface.len())
            .field("state", &self.gallery.as_ref().map(|g| g.state()))
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_config(config, i18n);

        if let Some(key) = config_warning {
            app.notification = Some(app.i18n.tr(&key));
        }

        let directory = flags
            .directory
            .or_else(|| app.config.gallery.last_directory.clone())
            .or_else(|| std::env::current_dir().ok());

        if let Some(directory) = directory {
            app.open_directory(&directory);
        }

        let start_full_screen =
            flags.full_screen || app.config.gallery.start_full_screen.unwrap_or(false);
        let task = if start_full_screen {
            app.run_command(Command::ToggleFullScreen)
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Builds an application with no gallery opened yet.
    pub fn with_config(config: Config, i18n: I18n) -> Self {
        Self {
            i18n,
            key_bindings: config.key_bindings(),
            thumbnail_size: config.thumbnail_size(),
            config,
            gallery: None,
            surface: Surface::new(0),
            window_id: None,
            window_full_screen: false,
            notification: None,
        }
    }

    /// Scans `directory` and, if it holds images, starts a new gallery on it.
    /// An unreadable or image-less directory leaves the open gallery as is.
    ///
    /// Returns whether a new gallery was opened.
    pub fn open_directory(&mut self, directory: &Path) -> bool {
        let sort_order = self.config.gallery.sort_order.unwrap_or_default();
        let images = match ImageList::scan(directory, sort_order) {
            Ok(images) => images,
            Err(err) => {
                tracing::warn!(directory = %directory.display(), %err, "cannot scan directory");
                self.notification = Some(self.i18n.tr("notification-scan-dir-error"));
                return false;
            }
        };

        match GalleryController::new(images) {
            Ok(gallery) => {
                let mut surface = Surface::new(gallery.item_count());
                surface.apply(&gallery.initial_effects());
                self.surface = surface;
                self.gallery = Some(gallery);
                self.notification = None;
                true
            }
            Err(err) => {
                tracing::info!(directory = %directory.display(), %err, "no gallery to show");
                if self.gallery.is_some() {
                    self.notification = Some(self.i18n.tr("notification-no-images"));
                }
                false
            }
        }
    }

    /// Executes `command`, applies its effects and syncs the window mode.
    pub fn run_command(&mut self, command: Command) -> Task<Message> {
        let Some(gallery) = self.gallery.as_mut() else {
            return Task::none();
        };

        match gallery.execute(command) {
            Ok(effects) => {
                self.surface.apply(&effects);
                self.sync_window_mode()
            }
            Err(err) => {
                tracing::error!(?command, %err, "gallery command rejected");
                Task::none()
            }
        }
    }

    fn sync_window_mode(&mut self) -> Task<Message> {
        let desired = self
            .gallery
            .as_ref()
            .is_some_and(|gallery| gallery.is_full_screen());
        update::update_window_mode(
            &mut self.window_full_screen,
            self.window_id.as_ref(),
            desired,
        )
    }

    /// Opens a picked or dropped folder and remembers it for the next start.
    fn open_and_remember(&mut self, directory: PathBuf) -> Task<Message> {
        if self.open_directory(&directory) {
            self.config.gallery.last_directory = Some(directory);
            if let Err(err) = config::save(&self.config) {
                tracing::warn!(%err, "cannot save settings");
            }
        }
        self.sync_window_mode()
    }

    /// Handles a dropped path: a folder opens as is, an image opens its folder
    /// with that image selected.
    fn open_dropped(&mut self, path: PathBuf) -> Task<Message> {
        if path.is_dir() {
            return self.open_and_remember(path);
        }

        let Some(parent) = path.parent().map(Path::to_path_buf) else {
            return Task::none();
        };

        let open_task = self.open_and_remember(parent);
        let index = self
            .gallery
            .as_ref()
            .and_then(|gallery| gallery.titles().position_of(&path));

        match index {
            Some(index) => Task::batch([open_task, self.run_command(Command::Select(index))]),
            None => open_task,
        }
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.gallery {
            Some(_) if !self.surface.title().is_empty() => {
                format!("{} - {app_name}", self.surface.title())
            }
            _ => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(target) => self.run_command(map_pointer(target)),
            Message::KeyPressed { key, window } => {
                self.window_id.get_or_insert(window);
                let Some(gallery) = &self.gallery else {
                    return Task::none();
                };
                match map_key(key, gallery.is_full_screen(), &self.key_bindings) {
                    Some(command) => self.run_command(command),
                    None => Task::none(),
                }
            }
            Message::WindowOpened(id) => {
                self.window_id.get_or_insert(id);
                self.sync_window_mode()
            }
            Message::EmptyState(empty_state::Message::OpenFolderRequested) => {
                update::handle_open_folder_dialog(self.config.gallery.last_directory.clone())
            }
            Message::FolderPicked(Some(directory)) => self.open_and_remember(directory),
            // User cancelled the dialog
            Message::FolderPicked(None) => Task::none(),
            Message::FileDropped(path) => self.open_dropped(path),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.gallery {
            Some(gallery) => gallery_view::view(ViewContext {
                surface: &self.surface,
                images: gallery.titles(),
                i18n: &self.i18n,
                current_index: gallery.current_index(),
                thumbnail_size: self.thumbnail_size,
                toggle_key: self.key_bindings.toggle_full_screen,
            })
            .map(Message::Pointer),
            None => empty_state::view(&self.i18n).map(Message::EmptyState),
        };

        let mut column = Column::new().width(Length::Fill).height(Length::Fill);

        if let Some(notification) = &self.notification {
            column = column.push(
                Container::new(
                    Text::new(notification.as_str())
                        .size(typography::BODY)
                        .color(palette::GRAY_200),
                )
                .width(Length::Fill)
                .padding(spacing::XS),
            );
        }

        column.push(content).into()
    }

    pub fn gallery(&self) -> Option<&GalleryController<ImageList>> {
        self.gallery.as_ref()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The viewer moves through three levels: the category grid, an open
//! category, and a single media item. A category holding exactly one media
//! entry is shown as that item right away while staying at the folder level,
//! so a single step back lands on the grid again.

use crate::application::port::ScrollSurface;
use crate::error::Result;
use crate::gallery::Category;
use crate::media::{self, MediaKind};
use crate::remote::GalleryFeed;
use crate::ui::geometry::{Point, Size};
use crate::ui::state::{
    DragState, FullscreenRequest, FullscreenState, ScrollLock, ViewportState, ZoomState,
};
use crate::ui::viewer::navigation::{self, NavigationInfo};
use std::rc::Rc;

/// Messages driving the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Outcome of the category list fetch.
    GalleryLoaded(Result<Vec<Category>>),
    /// Open the category at this position in the gallery.
    OpenCategory(usize),
    /// Open the entry at this position in the open category.
    OpenEntry(usize),
    Next,
    Previous,
    /// Collapse one level (exits fullscreen first if engaged).
    Escape,
    /// Close button of the current view.
    Close,
    Key(Key),
    Wheel {
        delta_y: f32,
    },
    PointerPressed(Point),
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
    ContainerResized(Size),
    ToggleFullscreen,
    /// The platform reported its actual fullscreen state.
    FullscreenChanged(bool),
}

/// Side effects the host should perform after handling a viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    RequestFullscreen,
    ExitFullscreen,
}

impl From<FullscreenRequest> for Effect {
    fn from(request: FullscreenRequest) -> Self {
        match request {
            FullscreenRequest::Enter => Effect::RequestFullscreen,
            FullscreenRequest::Exit => Effect::ExitFullscreen,
        }
    }
}

impl From<Option<FullscreenRequest>> for Effect {
    fn from(request: Option<FullscreenRequest>) -> Self {
        request.map_or(Effect::None, Effect::from)
    }
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Maps a key name (`Escape`, `ArrowLeft`, `ArrowRight`, or the short
    /// forms `esc`, `left`, `right`) to a [`Key`], case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "escape" | "esc" => Key::Escape,
            "arrowleft" | "left" => Key::ArrowLeft,
            "arrowright" | "right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Where the viewer currently is. Indices point into the gallery list and
/// into the open category's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewLevel {
    #[default]
    Grid,
    Folder {
        category: usize,
    },
    Item {
        category: usize,
        entry: usize,
        /// Position inside the navigable sequence of `entry`.
        index: usize,
    },
}

/// Cursor to show over the media surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Grab,
    Grabbing,
}

/// Complete viewer component state.
pub struct State {
    feed: GalleryFeed,
    level: ViewLevel,
    pub zoom: ZoomState,
    pub drag: DragState,
    pub viewport: ViewportState,
    fullscreen: FullscreenState,
    surface: Rc<dyn ScrollSurface>,
    scroll_lock: Option<ScrollLock>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("feed", &self.feed)
            .field("level", &self.level)
            .field("zoom", &self.zoom)
            .field("drag", &self.drag)
            .field("viewport", &self.viewport)
            .field("fullscreen", &self.fullscreen)
            .field("scroll_locked", &self.scroll_lock.is_some())
            .finish()
    }
}

impl State {
    /// Viewer waiting for the category list (see [`Message::GalleryLoaded`]).
    #[must_use]
    pub fn new(surface: Rc<dyn ScrollSurface>) -> Self {
        Self::with_feed(GalleryFeed::Loading, surface)
    }

    /// Viewer over a pre-built category list.
    #[must_use]
    pub fn with_gallery(categories: Vec<Category>, surface: Rc<dyn ScrollSurface>) -> Self {
        Self::with_feed(GalleryFeed::Ready(categories), surface)
    }

    fn with_feed(feed: GalleryFeed, surface: Rc<dyn ScrollSurface>) -> Self {
        Self {
            feed,
            level: ViewLevel::Grid,
            zoom: ZoomState::default(),
            drag: DragState::default(),
            viewport: ViewportState::default(),
            fullscreen: FullscreenState::default(),
            surface,
            scroll_lock: None,
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        let effect: Effect = match message {
            Message::GalleryLoaded(result) => {
                let effect: Effect = self.fullscreen.exit().into();
                self.feed = GalleryFeed::resolve(result);
                self.set_level(ViewLevel::Grid);
                effect
            }
            Message::OpenCategory(index) => {
                self.open_category(index);
                Effect::None
            }
            Message::OpenEntry(index) => {
                self.open_entry(index);
                Effect::None
            }
            Message::Next => {
                self.step(navigation::wrap_next);
                Effect::None
            }
            Message::Previous => {
                self.step(navigation::wrap_prev);
                Effect::None
            }
            Message::Escape => self.escape(),
            Message::Close => self.close(),
            Message::Key(key) => self.handle_key(key),
            Message::Wheel { delta_y } => {
                if self.is_zoomable() {
                    self.zoom.on_wheel(delta_y, self.viewport.container);
                    if !self.zoom.factor.is_magnified() {
                        self.drag.stop();
                    }
                }
                Effect::None
            }
            Message::PointerPressed(pointer) => {
                if self.is_zoomable() && self.zoom.factor.is_magnified() {
                    self.drag.start(pointer, self.zoom.pan);
                }
                Effect::None
            }
            Message::PointerMoved(pointer) => {
                if let (Some(pan), Some(container)) =
                    (self.drag.pan_for(pointer), self.viewport.container)
                {
                    self.zoom.set_pan(pan, container);
                }
                Effect::None
            }
            Message::PointerReleased | Message::PointerLeft => {
                self.drag.stop();
                Effect::None
            }
            Message::ContainerResized(size) => {
                if self.viewport.update(size) {
                    self.zoom.reclamp(size);
                }
                Effect::None
            }
            Message::ToggleFullscreen => {
                if self.can_toggle_fullscreen() {
                    self.fullscreen.toggle().into()
                } else {
                    Effect::None
                }
            }
            Message::FullscreenChanged(active) => {
                self.fullscreen.sync(active);
                Effect::None
            }
        };
        self.sync_scroll_lock();
        effect
    }

    fn handle_key(&mut self, key: Key) -> Effect {
        if self.level == ViewLevel::Grid {
            return Effect::None;
        }
        match key {
            Key::Escape => self.escape(),
            Key::ArrowLeft if matches!(self.level, ViewLevel::Item { .. }) => {
                self.step(navigation::wrap_prev);
                Effect::None
            }
            Key::ArrowRight if matches!(self.level, ViewLevel::Item { .. }) => {
                self.step(navigation::wrap_next);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn open_category(&mut self, index: usize) {
        if self.level != ViewLevel::Grid || index >= self.categories().len() {
            return;
        }
        self.set_level(ViewLevel::Folder { category: index });
    }

    fn open_entry(&mut self, entry_index: usize) {
        let ViewLevel::Folder { category } = self.level else {
            return;
        };
        if self.is_auto_expanded() {
            return;
        }
        let Some(cat) = self.categories().get(category) else {
            return;
        };
        let Some(entry) = cat.entries.get(entry_index) else {
            return;
        };
        if entry.is_folder() && entry.images().is_empty() {
            return;
        }
        if let Some(index) = navigation::start_index(cat, entry) {
            self.set_level(ViewLevel::Item {
                category,
                entry: entry_index,
                index,
            });
        }
    }

    fn step(&mut self, advance: fn(usize, usize) -> usize) {
        let ViewLevel::Item {
            category,
            entry,
            index,
        } = self.level
        else {
            return;
        };
        let len = self.sequence().len();
        let next = advance(index, len);
        if next != index {
            self.set_level(ViewLevel::Item {
                category,
                entry,
                index: next,
            });
        }
    }

    fn escape(&mut self) -> Effect {
        if self.level == ViewLevel::Grid {
            return Effect::None;
        }
        if let Some(request) = self.fullscreen.exit() {
            return request.into();
        }
        self.pop_level();
        Effect::None
    }

    fn close(&mut self) -> Effect {
        if self.level == ViewLevel::Grid {
            return Effect::None;
        }
        let effect: Effect = self.fullscreen.exit().into();
        self.pop_level();
        effect
    }

    fn pop_level(&mut self) {
        let parent = match self.level {
            ViewLevel::Grid | ViewLevel::Folder { .. } => ViewLevel::Grid,
            ViewLevel::Item { category, .. } => ViewLevel::Folder { category },
        };
        self.set_level(parent);
    }

    fn set_level(&mut self, level: ViewLevel) {
        if self.level != level {
            self.zoom.reset();
            self.drag.stop();
        }
        self.level = level;
    }

    /// Holds the background scroll lock exactly while a single item is shown.
    fn sync_scroll_lock(&mut self) {
        let wants_lock = self.shows_single_item();
        match (wants_lock, self.scroll_lock.is_some()) {
            (true, false) => self.scroll_lock = Some(ScrollLock::acquire(self.surface.clone())),
            (false, true) => self.scroll_lock = None,
            _ => {}
        }
    }

    fn shows_single_item(&self) -> bool {
        match self.level {
            ViewLevel::Grid => false,
            ViewLevel::Folder { .. } => self.is_auto_expanded(),
            ViewLevel::Item { .. } => true,
        }
    }

    fn is_zoomable(&self) -> bool {
        self.current_kind().is_some_and(MediaKind::is_zoomable)
    }

    #[must_use]
    pub fn feed(&self) -> &GalleryFeed {
        &self.feed
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.feed.is_loading()
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.feed.categories()
    }

    #[must_use]
    pub fn level(&self) -> ViewLevel {
        self.level
    }

    #[must_use]
    pub fn current_category(&self) -> Option<&Category> {
        match self.level {
            ViewLevel::Grid => None,
            ViewLevel::Folder { category } | ViewLevel::Item { category, .. } => {
                self.categories().get(category)
            }
        }
    }

    /// Whether the open category is displayed as its single media entry.
    #[must_use]
    pub fn is_auto_expanded(&self) -> bool {
        matches!(self.level, ViewLevel::Folder { .. })
            && self
                .current_category()
                .is_some_and(|cat| cat.sole_media().is_some())
    }

    /// The navigable sequence at the current level; empty at grid and folder level
    /// unless the folder is auto-expanded.
    #[must_use]
    pub fn sequence(&self) -> Vec<String> {
        match self.level {
            ViewLevel::Grid => Vec::new(),
            ViewLevel::Folder { .. } => self
                .current_category()
                .and_then(Category::sole_media)
                .map(|entry| vec![entry.path.clone()])
                .unwrap_or_default(),
            ViewLevel::Item { entry, .. } => self
                .current_category()
                .and_then(|cat| Some(navigation::sequence(cat, cat.entries.get(entry)?)))
                .unwrap_or_default(),
        }
    }

    /// Path of the media item on screen, if a single item is shown.
    #[must_use]
    pub fn current_media(&self) -> Option<String> {
        let index = match self.level {
            ViewLevel::Grid => return None,
            ViewLevel::Folder { .. } => 0,
            ViewLevel::Item { index, .. } => index,
        };
        self.sequence().into_iter().nth(index)
    }

    #[must_use]
    pub fn current_kind(&self) -> Option<MediaKind> {
        self.current_media().map(|path| media::classify(&path))
    }

    /// Position inside the navigable sequence, if a single item is shown.
    #[must_use]
    pub fn navigation(&self) -> Option<NavigationInfo> {
        let index = match self.level {
            ViewLevel::Grid => return None,
            ViewLevel::Folder { .. } if !self.is_auto_expanded() => return None,
            ViewLevel::Folder { .. } => 0,
            ViewLevel::Item { index, .. } => index,
        };
        Some(NavigationInfo::new(index, self.sequence().len()))
    }

    /// Fullscreen is only offered for images and GIFs.
    #[must_use]
    pub fn can_toggle_fullscreen(&self) -> bool {
        self.is_zoomable()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_some()
    }

    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        if !self.is_zoomable() || !self.zoom.factor.is_magnified() {
            CursorHint::Default
        } else if self.drag.is_dragging {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::scroll::RecordingSurface;
    use crate::error::Error;
    use crate::gallery::Entry;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn gallery() -> Vec<Category> {
        vec![
            Category {
                name: "Set".into(),
                path: "/pics/models/Set".into(),
                entries: vec![
                    Entry::folder(
                        "sub",
                        "/pics/models/Set/sub",
                        vec!["x.png".into(), "y.png".into()],
                    ),
                    Entry::media("A.png", "/pics/models/Set/A.png"),
                    Entry::media("B.gif", "/pics/models/Set/B.gif"),
                    Entry::media("C.mp4", "/pics/models/Set/C.mp4"),
                    Entry::folder("empty", "/pics/models/Set/empty", vec![]),
                ],
            },
            Category {
                name: "clip".into(),
                path: "/pics/renders".into(),
                entries: vec![Entry::media("clip.mp4", "/pics/renders/clip.mp4")],
            },
            Category {
                name: "still".into(),
                path: "/pics/renders".into(),
                entries: vec![Entry::media("still.png", "/pics/renders/still.png")],
            },
        ]
    }

    fn viewer() -> (State, Rc<RecordingSurface>) {
        let surface = Rc::new(RecordingSurface::default());
        (State::with_gallery(gallery(), surface.clone()), surface)
    }

    fn open_item(state: &mut State, category: usize, entry: usize) {
        state.handle_message(Message::OpenCategory(category));
        state.handle_message(Message::OpenEntry(entry));
    }

    #[test]
    fn new_viewer_starts_loading_at_grid() {
        let state = State::new(Rc::new(RecordingSurface::default()));
        assert!(state.is_loading());
        assert_eq!(state.level(), ViewLevel::Grid);
        assert!(state.categories().is_empty());
    }

    #[test]
    fn failed_load_leaves_empty_not_loading_grid() {
        let mut state = State::new(Rc::new(RecordingSurface::default()));
        state.handle_message(Message::GalleryLoaded(Err(Error::Fetch("503".into()))));
        assert!(!state.is_loading());
        assert!(state.categories().is_empty());
        state.handle_message(Message::OpenCategory(0));
        assert_eq!(state.level(), ViewLevel::Grid);
    }

    #[test]
    fn opening_media_entry_indexes_into_media_subsequence() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 2);
        assert_eq!(
            state.level(),
            ViewLevel::Item {
                category: 0,
                entry: 2,
                index: 1
            }
        );
        assert_eq!(state.current_media().as_deref(), Some("/pics/models/Set/B.gif"));
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 2);
        for _ in 0..3 {
            state.handle_message(Message::Next);
        }
        assert_eq!(state.navigation().map(|nav| nav.position), Some(2));

        state.handle_message(Message::Previous);
        state.handle_message(Message::Previous);
        assert_eq!(state.current_media().as_deref(), Some("/pics/models/Set/C.mp4"));
    }

    #[test]
    fn folder_entry_navigates_its_images() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 0);
        assert_eq!(state.current_media().as_deref(), Some("/pics/models/Set/sub/x.png"));
        state.handle_message(Message::Key(Key::ArrowRight));
        assert_eq!(state.current_media().as_deref(), Some("/pics/models/Set/sub/y.png"));
        state.handle_message(Message::Key(Key::ArrowRight));
        assert_eq!(state.current_media().as_deref(), Some("/pics/models/Set/sub/x.png"));
    }

    #[test]
    fn empty_folder_entry_is_not_opened() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 4);
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let (mut state, _) = viewer();
        state.handle_message(Message::OpenCategory(99));
        assert_eq!(state.level(), ViewLevel::Grid);
        state.handle_message(Message::OpenCategory(0));
        state.handle_message(Message::OpenEntry(99));
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
    }

    #[test]
    fn escape_pops_one_level_at_a_time() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 1);
        state.handle_message(Message::Escape);
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
        state.handle_message(Message::Escape);
        assert_eq!(state.level(), ViewLevel::Grid);
        state.handle_message(Message::Escape);
        assert_eq!(state.level(), ViewLevel::Grid);
    }

    #[test]
    fn escape_exits_fullscreen_before_collapsing() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 1);
        assert_eq!(
            state.handle_message(Message::ToggleFullscreen),
            Effect::RequestFullscreen
        );
        assert_eq!(state.handle_message(Message::Escape), Effect::ExitFullscreen);
        assert!(matches!(state.level(), ViewLevel::Item { .. }));
        assert_eq!(state.handle_message(Message::Escape), Effect::None);
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
    }

    #[test]
    fn close_exits_fullscreen_and_pops() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 1);
        state.handle_message(Message::ToggleFullscreen);
        assert_eq!(state.handle_message(Message::Close), Effect::ExitFullscreen);
        assert!(!state.is_fullscreen());
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
        assert_eq!(state.handle_message(Message::Close), Effect::None);
        assert_eq!(state.level(), ViewLevel::Grid);
    }

    #[test]
    fn single_media_category_auto_expands() {
        let (mut state, surface) = viewer();
        state.handle_message(Message::OpenCategory(2));
        assert_eq!(state.level(), ViewLevel::Folder { category: 2 });
        assert!(state.is_auto_expanded());
        assert_eq!(state.current_media().as_deref(), Some("/pics/renders/still.png"));
        assert!(surface.is_locked());

        let nav = state.navigation().expect("auto-expanded item has navigation");
        assert!(!nav.show_controls);

        state.handle_message(Message::OpenEntry(0));
        assert_eq!(state.level(), ViewLevel::Folder { category: 2 });

        state.handle_message(Message::Escape);
        assert_eq!(state.level(), ViewLevel::Grid);
        assert!(!surface.is_locked());
    }

    #[test]
    fn arrows_only_act_on_an_open_item() {
        let (mut state, _) = viewer();
        state.handle_message(Message::Key(Key::ArrowRight));
        state.handle_message(Message::OpenCategory(0));
        state.handle_message(Message::Key(Key::ArrowRight));
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
        state.handle_message(Message::Key(Key::Other));
        state.handle_message(Message::Key(Key::Escape));
        assert_eq!(state.level(), ViewLevel::Grid);
    }

    #[test]
    fn wheel_zoom_only_applies_to_images_and_gifs() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 3);
        assert_eq!(state.current_kind(), Some(MediaKind::Video));
        state.handle_message(Message::Wheel { delta_y: -1.0 });
        assert_abs_diff_eq!(state.zoom.factor.value(), 1.0);
        assert!(!state.can_toggle_fullscreen());
        assert_eq!(state.handle_message(Message::ToggleFullscreen), Effect::None);

        state.handle_message(Message::Next);
        state.handle_message(Message::Wheel { delta_y: -1.0 });
        assert_abs_diff_eq!(state.zoom.factor.value(), 1.1);
    }

    #[test]
    fn navigation_resets_zoom_and_pan() {
        let (mut state, _) = viewer();
        state.handle_message(Message::ContainerResized(Size::new(800.0, 600.0)));
        open_item(&mut state, 0, 1);
        for _ in 0..5 {
            state.handle_message(Message::Wheel { delta_y: -1.0 });
        }
        state.handle_message(Message::PointerPressed(Point::new(100.0, 100.0)));
        state.handle_message(Message::PointerMoved(Point::new(150.0, 120.0)));
        assert_ne!(state.zoom.pan, Point::ORIGIN);

        state.handle_message(Message::Next);
        assert_abs_diff_eq!(state.zoom.factor.value(), 1.0);
        assert_eq!(state.zoom.pan, Point::ORIGIN);
        assert!(!state.drag.is_dragging);
    }

    #[test]
    fn drag_pans_within_bounds_only_when_magnified() {
        let (mut state, _) = viewer();
        state.handle_message(Message::ContainerResized(Size::new(400.0, 200.0)));
        open_item(&mut state, 0, 1);

        state.handle_message(Message::PointerPressed(Point::new(10.0, 10.0)));
        assert!(!state.drag.is_dragging);
        assert_eq!(state.cursor_hint(), CursorHint::Default);

        for _ in 0..10 {
            state.handle_message(Message::Wheel { delta_y: -1.0 });
        }
        assert_eq!(state.cursor_hint(), CursorHint::Grab);
        state.handle_message(Message::PointerPressed(Point::new(10.0, 10.0)));
        assert_eq!(state.cursor_hint(), CursorHint::Grabbing);

        // 2x on 400x200: pan bounds are ±200 and ±100
        state.handle_message(Message::PointerMoved(Point::new(1000.0, -1000.0)));
        assert_abs_diff_eq!(state.zoom.pan.x, 200.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.zoom.pan.y, -100.0, epsilon = F32_EPSILON);

        state.handle_message(Message::PointerLeft);
        assert!(!state.drag.is_dragging);
        state.handle_message(Message::PointerMoved(Point::new(0.0, 0.0)));
        assert_abs_diff_eq!(state.zoom.pan.x, 200.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn resize_reclamps_pan_to_new_container() {
        let (mut state, _) = viewer();
        state.handle_message(Message::ContainerResized(Size::new(400.0, 200.0)));
        open_item(&mut state, 0, 1);
        for _ in 0..10 {
            state.handle_message(Message::Wheel { delta_y: -1.0 });
        }
        state.handle_message(Message::PointerPressed(Point::ORIGIN));
        state.handle_message(Message::PointerMoved(Point::new(200.0, 100.0)));
        state.handle_message(Message::PointerReleased);

        state.handle_message(Message::ContainerResized(Size::new(100.0, 50.0)));
        assert_abs_diff_eq!(state.zoom.pan.x, 50.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(state.zoom.pan.y, 25.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn platform_fullscreen_change_is_mirrored() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 1);
        state.handle_message(Message::ToggleFullscreen);
        assert!(state.is_fullscreen());

        state.handle_message(Message::FullscreenChanged(false));
        assert!(!state.is_fullscreen());

        // Escape no longer needs to leave fullscreen first
        state.handle_message(Message::Escape);
        assert_eq!(state.level(), ViewLevel::Folder { category: 0 });
    }

    #[test]
    fn scroll_lock_follows_single_item_views() {
        let (mut state, surface) = viewer();
        state.handle_message(Message::OpenCategory(0));
        assert!(!surface.is_locked());

        state.handle_message(Message::OpenEntry(1));
        assert!(surface.is_locked());
        state.handle_message(Message::Next);
        assert_eq!(surface.transitions(), 1);

        state.handle_message(Message::Escape);
        assert!(!surface.is_locked());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn dropping_the_viewer_releases_scroll_lock() {
        let (mut state, surface) = viewer();
        open_item(&mut state, 0, 1);
        assert!(surface.is_locked());
        drop(state);
        assert!(!surface.is_locked());
    }

    #[test]
    fn reload_returns_to_grid() {
        let (mut state, surface) = viewer();
        open_item(&mut state, 0, 1);
        state.handle_message(Message::GalleryLoaded(Ok(gallery())));
        assert_eq!(state.level(), ViewLevel::Grid);
        assert!(!surface.is_locked());
    }

    #[test]
    fn reload_releases_fullscreen() {
        let (mut state, surface) = viewer();
        open_item(&mut state, 0, 1);
        assert_eq!(
            state.handle_message(Message::ToggleFullscreen),
            Effect::RequestFullscreen
        );
        state.handle_message(Message::FullscreenChanged(true));
        assert!(state.is_fullscreen());

        let effect = state.handle_message(Message::GalleryLoaded(Ok(gallery())));
        assert_eq!(effect, Effect::ExitFullscreen);
        assert!(!state.is_fullscreen());
        assert_eq!(state.level(), ViewLevel::Grid);
        assert!(!surface.is_locked());
    }

    #[test]
    fn reload_outside_fullscreen_has_no_effect() {
        let (mut state, _) = viewer();
        open_item(&mut state, 0, 1);
        let effect = state.handle_message(Message::GalleryLoaded(Ok(gallery())));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn key_names_map_case_insensitively() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("esc"), Key::Escape);
        assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_name("RIGHT"), Key::ArrowRight);
        assert_eq!(Key::from_name("space"), Key::Other);
    }
}

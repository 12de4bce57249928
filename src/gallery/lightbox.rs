use log::debug;

use super::input::NavCommand;
use super::media::{MediaItem, MediaKind};

/// Everything the lightbox needs from its rendering environment.
pub trait ViewerPort {
    fn show_overlay(&mut self, visible: bool);
    fn lock_scroll(&mut self, locked: bool);
    fn pause_video(&mut self);
    /// Pauses the video, drops its source and hides it.
    fn unload_video(&mut self);
    fn present_video(&mut self, src: &str, poster: Option<&str>);
    fn begin_image_fade(&mut self);
    fn present_image(&mut self, src: &str, alt: &str);
    fn mark_indicator(&mut self, active: usize);
    /// Calls back into [`Lightbox::finish_swap`] with `generation` after `delay_ms`.
    fn schedule_swap(&mut self, delay_ms: u32, generation: u64);
    fn cancel_swap(&mut self);
}

pub struct Lightbox<P: ViewerPort> {
    items: Vec<MediaItem>,
    port: P,
    is_open: bool,
    current: usize,
    // Bumped on every render so a late fade continuation can tell it is stale.
    generation: u64,
    fade_delay_ms: u32,
}

impl<P: ViewerPort> Lightbox<P> {
    pub fn new(items: Vec<MediaItem>, port: P, fade_delay_ms: u32) -> Self {
        Self {
            items,
            port,
            is_open: false,
            current: 0,
            generation: 0,
            fade_delay_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Index of the item on screen; `None` while closed.
    pub fn current_index(&self) -> Option<usize> {
        self.is_open.then_some(self.current)
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.current_index().and_then(|i| self.items.get(i))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    #[cfg(test)]
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Opens the viewer on `index` and shows it without a fade.
    pub fn open(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            debug!("Ignoring open({}) with {} gallery items", index, self.items.len());
            return false;
        };

        self.generation += 1;
        self.port.cancel_swap();
        self.current = index;
        self.is_open = true;

        match item.kind {
            MediaKind::Video => {
                self.port.pause_video();
                self.port.present_video(&item.src, item.poster.as_deref());
            }
            MediaKind::Image => {
                self.port.unload_video();
                self.port.present_image(&item.src, &item.alt);
            }
        }
        self.port.show_overlay(true);
        self.port.lock_scroll(true);
        self.port.mark_indicator(index);
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        self.generation += 1;
        self.port.cancel_swap();
        self.port.show_overlay(false);
        self.port.lock_scroll(false);
        self.port.pause_video();
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.is_open || self.is_empty() {
            return false;
        }
        let index = (self.current + 1) % self.items.len();
        self.render(index)
    }

    pub fn previous(&mut self) -> bool {
        if !self.is_open || self.is_empty() {
            return false;
        }
        let len = self.items.len();
        let index = (self.current + len - 1) % len;
        self.render(index)
    }

    /// Indicator click. Only meaningful while open; there is one indicator per item.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.is_open || index >= self.items.len() {
            return false;
        }
        self.open(index)
    }

    /// Moves to `index`, fading when the target is an image.
    pub fn render(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };

        self.generation += 1;
        self.port.cancel_swap();
        self.current = index;

        match item.kind {
            MediaKind::Video => {
                self.port.pause_video();
                self.port.present_video(&item.src, item.poster.as_deref());
                self.port.mark_indicator(index);
            }
            MediaKind::Image => {
                self.port.unload_video();
                self.port.begin_image_fade();
                self.port.schedule_swap(self.fade_delay_ms, self.generation);
            }
        }
        true
    }

    /// Second half of an image fade. Stale generations are dropped.
    pub fn finish_swap(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_open {
            debug!(
                "Dropping stale image swap {} (current {})",
                generation, self.generation
            );
            return false;
        }
        let Some(item) = self.items.get(self.current) else {
            return false;
        };
        if item.is_video() {
            return false;
        }
        self.port.present_image(&item.src, &item.alt);
        self.port.mark_indicator(self.current);
        true
    }

    /// Applies a key or swipe command. Ignored while closed.
    pub fn apply(&mut self, command: NavCommand) -> bool {
        if !self.is_open {
            return false;
        }
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::Close => self.close(),
        }
    }
}

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlImageElement, HtmlVideoElement};
use yew::prelude::*;

use crate::gallery::lightbox::ViewerPort;

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Drives the overlay's `<img>` and `<video>` directly through web-sys.
///
/// The component renders the overlay structure; everything that changes per
/// item (sources, visibility, opacity) is set here so Yew's diffing never
/// fights with it.
pub struct DomViewer {
    image: NodeRef,
    video: NodeRef,
    body: Option<HtmlElement>,
    on_swap: Callback<u64>,
    pending: Option<Timeout>,
    overlay_visible: bool,
    active_indicator: Option<usize>,
}

impl DomViewer {
    pub fn new(body: Option<HtmlElement>, on_swap: Callback<u64>) -> Self {
        Self {
            image: NodeRef::default(),
            video: NodeRef::default(),
            body,
            on_swap,
            pending: None,
            overlay_visible: false,
            active_indicator: None,
        }
    }

    pub fn image_ref(&self) -> NodeRef {
        self.image.clone()
    }

    pub fn video_ref(&self) -> NodeRef {
        self.video.clone()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.active_indicator
    }

    fn image(&self) -> Option<HtmlImageElement> {
        self.image.cast::<HtmlImageElement>()
    }

    fn video(&self) -> Option<HtmlVideoElement> {
        self.video.cast::<HtmlVideoElement>()
    }
}

impl ViewerPort for DomViewer {
    fn show_overlay(&mut self, visible: bool) {
        self.overlay_visible = visible;
    }

    fn lock_scroll(&mut self, locked: bool) {
        if let Some(body) = &self.body {
            if locked {
                set_style(body, "overflow", "hidden");
            } else {
                let _ = body.style().remove_property("overflow");
            }
        }
    }

    fn pause_video(&mut self) {
        if let Some(video) = self.video() {
            let _ = video.pause();
        }
    }

    fn unload_video(&mut self) {
        if let Some(video) = self.video() {
            let _ = video.pause();
            let _ = video.remove_attribute("src");
            set_style(&video, "display", "none");
        }
    }

    fn present_video(&mut self, src: &str, poster: Option<&str>) {
        if let Some(image) = self.image() {
            set_style(&image, "display", "none");
        }
        if let Some(video) = self.video() {
            set_style(&video, "display", "block");
            video.set_src(src);
            video.set_poster(poster.unwrap_or_default());
            video.load();
        }
    }

    fn begin_image_fade(&mut self) {
        if let Some(image) = self.image() {
            set_style(&image, "display", "block");
            set_style(&image, "opacity", "0");
        }
    }

    fn present_image(&mut self, src: &str, alt: &str) {
        if let Some(image) = self.image() {
            set_style(&image, "display", "block");
            image.set_src(src);
            image.set_alt(alt);
            set_style(&image, "opacity", "1");
        }
    }

    fn mark_indicator(&mut self, active: usize) {
        self.active_indicator = Some(active);
    }

    fn schedule_swap(&mut self, delay_ms: u32, generation: u64) {
        let on_swap = self.on_swap.clone();
        // Replacing the handle drops the previous timeout, which cancels it.
        self.pending = Some(Timeout::new(delay_ms, move || on_swap.emit(generation)));
    }

    fn cancel_swap(&mut self) {
        self.pending = None;
    }
}

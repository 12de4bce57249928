use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::LightboxConfig;
use crate::dom::listener::Listener;
use crate::dom::viewer::DomViewer;
use crate::error::MountError;
use crate::gallery::input::{command_for_key, SwipeDirection, SwipeTracker};
use crate::gallery::lightbox::Lightbox;
use crate::gallery::media::MediaItem;

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub items: Vec<MediaItem>,
    /// Page elements that open the viewer, with the item index each one shows.
    pub targets: Rc<Vec<(Element, usize)>>,
    pub config: LightboxConfig,
}

pub enum Msg {
    Open(usize),
    Close,
    Next,
    Previous,
    JumpTo(usize),
    Key(String),
    Swipe(SwipeDirection),
    FinishSwap(u64),
}

pub struct GalleryModal {
    lightbox: Lightbox<DomViewer>,
    content: NodeRef,
    // Shared with the touch listeners, which must answer touchmove synchronously.
    swipe: Rc<RefCell<SwipeTracker>>,
    listeners: Vec<Listener>,
}

fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}

impl GalleryModal {
    fn attach_listeners(&self, ctx: &Context<Self>) -> Result<Vec<Listener>, MountError> {
        let document = web_sys::window()
            .ok_or(MountError::NoWindow)?
            .document()
            .ok_or(MountError::NoDocument)?;
        let mut listeners = Vec::new();

        let link = ctx.link().clone();
        listeners.push(Listener::new(&document, "keydown", move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                link.send_message(Msg::Key(event.key()));
            }
        })?);

        for (element, index) in ctx.props().targets.iter() {
            let index = *index;
            let link = ctx.link().clone();
            listeners.push(Listener::new(element, "click", move |_| {
                link.send_message(Msg::Open(index));
            })?);
        }

        let Some(content) = self.content.cast::<Element>() else {
            warn!("Lightbox content not rendered, swipe navigation disabled");
            return Ok(listeners);
        };

        let swipe = self.swipe.clone();
        listeners.push(Listener::non_passive(&content, "touchstart", move |event| {
            if let Some(x) = touch_x(&event) {
                swipe.borrow_mut().begin(x);
            }
        })?);

        let swipe = self.swipe.clone();
        listeners.push(Listener::non_passive(&content, "touchmove", move |event| {
            if swipe.borrow().is_swiping() {
                event.prevent_default();
            }
        })?);

        let swipe = self.swipe.clone();
        let link = ctx.link().clone();
        listeners.push(Listener::new(&content, "touchend", move |event| {
            let direction = match touch_x(&event) {
                Some(x) => swipe.borrow_mut().finish(x),
                None => {
                    swipe.borrow_mut().cancel();
                    None
                }
            };
            if let Some(direction) = direction {
                link.send_message(Msg::Swipe(direction));
            }
        })?);

        let swipe = self.swipe.clone();
        listeners.push(Listener::new(&content, "touchcancel", move |_| {
            swipe.borrow_mut().cancel();
        })?);

        debug!("Attached {} gallery listeners", listeners.len());
        Ok(listeners)
    }
}

impl Component for GalleryModal {
    type Message = Msg;
    type Properties = GalleryModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());
        let viewer = DomViewer::new(body, ctx.link().callback(Msg::FinishSwap));

        Self {
            lightbox: Lightbox::new(props.items.clone(), viewer, props.config.fade_delay_ms),
            content: NodeRef::default(),
            swipe: Rc::new(RefCell::new(SwipeTracker::new(props.config.swipe_threshold))),
            listeners: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open(index) => {
                let opened = self.lightbox.open(index);
                if opened {
                    debug!(
                        "Lightbox open at {} ({:?}), render {}",
                        index,
                        self.lightbox.current_item().map(|item| &item.src),
                        self.lightbox.generation()
                    );
                }
                opened
            }
            Msg::Close => self.lightbox.close(),
            Msg::Next => self.lightbox.next(),
            Msg::Previous => self.lightbox.previous(),
            Msg::JumpTo(index) => self.lightbox.jump_to(index),
            Msg::Key(key) => match command_for_key(&key) {
                Some(command) => self.lightbox.apply(command),
                None => false,
            },
            Msg::Swipe(direction) => self.lightbox.apply(direction.command()),
            Msg::FinishSwap(generation) => self.lightbox.finish_swap(generation),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let viewer = self.lightbox.port();
        let active = viewer.active_indicator();

        let indicators = (0..self.lightbox.len()).map(|index| {
            html! {
                <div
                    class={classes!("modal-indicator", (active == Some(index)).then(|| "active"))}
                    onclick={link.callback(move |_| Msg::JumpTo(index))}
                ></div>
            }
        });

        html! {
            <div class={classes!("gallery-modal", viewer.overlay_visible().then(|| "active"))}>
                <div class="modal-overlay" onclick={link.callback(|_| Msg::Close)}></div>
                <div class="modal-content" ref={self.content.clone()}>
                    <button class="modal-close" onclick={link.callback(|_| Msg::Close)}>{"×"}</button>
                    <button
                        class="modal-prev"
                        onclick={link.callback(|e: MouseEvent| {
                            e.stop_propagation();
                            Msg::Previous
                        })}
                    >{"‹"}</button>
                    <button
                        class="modal-next"
                        onclick={link.callback(|e: MouseEvent| {
                            e.stop_propagation();
                            Msg::Next
                        })}
                    >{"›"}</button>
                    <img class="modal-image" ref={viewer.image_ref()} />
                    <video
                        class="modal-video"
                        ref={viewer.video_ref()}
                        controls=true
                        playsinline=true
                    ></video>
                    <div class="modal-indicators">
                        { for indicators }
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            match self.attach_listeners(ctx) {
                Ok(listeners) => self.listeners = listeners,
                Err(e) => warn!("Gallery input not attached: {}", e),
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.lightbox.close();
        self.listeners.clear();
    }
}

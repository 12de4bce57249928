use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;

mod config;
mod error;
mod gallery {
    pub mod input;
    pub mod lightbox;
    pub mod media;
}
mod dom {
    pub mod listener;
    pub mod scan;
    pub mod viewer;
}
mod components {
    pub mod gallery_modal;
}

use components::gallery_modal::{GalleryModal, GalleryModalProps};
use error::MountError;

fn mount(document: &Document) -> Result<(), MountError> {
    let config = dom::scan::read_config(document);
    let gallery = dom::scan::scan_gallery(document, &config)?;
    if gallery.items.is_empty() {
        info!("No gallery items on this page, lightbox not mounted");
        return Ok(());
    }

    // The overlay lives in its own root at the end of <body>.
    let body = document.body().ok_or(MountError::NoBody)?;
    let root = document.create_element("div")?;
    body.append_child(&root)?;

    let props = GalleryModalProps {
        items: gallery.items,
        targets: Rc::new(gallery.targets),
        config,
    };
    yew::Renderer::<GalleryModal>::with_root_and_props(root, props).render();
    Ok(())
}

fn start() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    if document.ready_state() != "loading" {
        return mount(&document);
    }

    let pending = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = mount(&pending) {
            error!("Gallery lightbox not mounted: {}", e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting gallery lightbox");
    if let Err(e) = start() {
        error!("Gallery lightbox not mounted: {}", e);
    }
}

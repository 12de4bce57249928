use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement};

use crate::config::{LightboxConfig, CONFIG_ELEMENT_ID};
use crate::error::MountError;
use crate::gallery::media::{collect, MediaItem, RawEntry};

/// What the page scan found: the items, and the page elements that open them.
pub struct ScannedGallery {
    pub items: Vec<MediaItem>,
    pub targets: Vec<(Element, usize)>,
}

pub fn read_config(document: &Document) -> LightboxConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return LightboxConfig::default();
    };
    let raw = element.text_content().unwrap_or_default();
    match LightboxConfig::from_json(&raw) {
        Ok(config) => {
            debug!("Loaded lightbox config: {:?}", config);
            config
        }
        Err(e) => {
            warn!("{}, falling back to defaults", e);
            LightboxConfig::default()
        }
    }
}

fn gallery_elements(document: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn read_entry(element: &Element) -> RawEntry {
    if element.get_attribute("data-gallery-type").as_deref() == Some("video") {
        return RawEntry::Video {
            src: element.get_attribute("data-video-src"),
            alt: element.get_attribute("data-video-alt"),
            poster: element.get_attribute("data-video-poster"),
        };
    }

    let image = element
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|img| img.dyn_into::<HtmlImageElement>().ok());
    match image {
        // src() is the resolved absolute URL, empty when the attribute is missing
        Some(img) => RawEntry::Image {
            src: Some(img.src()),
            alt: Some(img.alt()),
        },
        None => RawEntry::Image { src: None, alt: None },
    }
}

/// Builds the media list from the page. The page markup is only read;
/// skipped elements get no target and stay inert.
pub fn scan_gallery(document: &Document, config: &LightboxConfig) -> Result<ScannedGallery, MountError> {
    let elements = gallery_elements(document, &config.item_selector)?;
    let collection = collect(elements.iter().map(read_entry), &config.default_video_alt);

    info!(
        "Gallery: {} items from {} elements",
        collection.items.len(),
        elements.len()
    );
    let targets = collection.targets(elements);
    Ok(ScannedGallery {
        items: collection.items,
        targets,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One image or video the lightbox can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    pub alt: String,
    pub poster: Option<String>,
}

impl MediaItem {
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
            alt: alt.into(),
            poster: None,
        }
    }

    pub fn video(src: impl Into<String>, alt: impl Into<String>, poster: Option<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
            alt: alt.into(),
            poster,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Attributes read off a single gallery element, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEntry {
    Image {
        src: Option<String>,
        alt: Option<String>,
    },
    Video {
        src: Option<String>,
        alt: Option<String>,
        poster: Option<String>,
    },
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RawEntry {
    /// Turns the entry into a media item, or `None` when it has no usable source.
    pub fn into_item(self, default_video_alt: &str) -> Option<MediaItem> {
        match self {
            RawEntry::Image { src, alt } => {
                let src = non_blank(src)?;
                Some(MediaItem::image(src, alt.unwrap_or_default()))
            }
            RawEntry::Video { src, alt, poster } => {
                let src = non_blank(src)?;
                let alt = non_blank(alt).unwrap_or_else(|| default_video_alt.to_string());
                Some(MediaItem::video(src, alt, non_blank(poster)))
            }
        }
    }
}

/// Result of scanning the page: the usable items plus, for every scanned
/// element, the index it was given (or `None` if it was skipped).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub items: Vec<MediaItem>,
    pub positions: Vec<Option<usize>>,
}

impl Collection {
    /// Pairs each scanned element with the index of its item, dropping skipped ones.
    pub fn targets<T>(&self, scanned: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
        scanned
            .into_iter()
            .zip(&self.positions)
            .filter_map(|(element, position)| position.map(|index| (element, index)))
            .collect()
    }
}

pub fn collect<I>(entries: I, default_video_alt: &str) -> Collection
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut collection = Collection::default();
    for (scanned, entry) in entries.into_iter().enumerate() {
        match entry.into_item(default_video_alt) {
            Some(item) => {
                collection.positions.push(Some(collection.items.len()));
                collection.items.push(item);
            }
            None => {
                log::debug!("Skipping gallery element {} without a source", scanned);
                collection.positions.push(None);
            }
        }
    }
    collection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(src: &str, alt: &str) -> RawEntry {
        RawEntry::Image {
            src: Some(src.to_string()),
            alt: Some(alt.to_string()),
        }
    }

    #[test]
    fn keeps_document_order() {
        let collection = collect(
            vec![
                image("/a.jpg", "A"),
                RawEntry::Video {
                    src: Some("/c.mp4".to_string()),
                    alt: Some("Match".to_string()),
                    poster: Some("/c.jpg".to_string()),
                },
                image("/b.jpg", "B"),
            ],
            "Видео",
        );

        assert_eq!(
            collection.items,
            vec![
                MediaItem::image("/a.jpg", "A"),
                MediaItem::video("/c.mp4", "Match", Some("/c.jpg".to_string())),
                MediaItem::image("/b.jpg", "B"),
            ]
        );
        assert_eq!(collection.positions, vec![Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn skips_entries_without_source_and_indexes_densely() {
        let collection = collect(
            vec![
                RawEntry::Image { src: None, alt: None },
                image("/a.jpg", "A"),
                RawEntry::Video {
                    src: Some("   ".to_string()),
                    alt: None,
                    poster: None,
                },
                image("/b.jpg", "B"),
            ],
            "Видео",
        );

        assert_eq!(collection.items.len(), 2);
        assert_eq!(collection.items[1].src, "/b.jpg");
        assert_eq!(collection.positions, vec![None, Some(0), None, Some(1)]);
    }

    #[test]
    fn video_falls_back_to_default_alt_and_drops_blank_poster() {
        let item = RawEntry::Video {
            src: Some("/clip.mp4".to_string()),
            alt: None,
            poster: Some(String::new()),
        }
        .into_item("Video");

        assert_eq!(item, Some(MediaItem::video("/clip.mp4", "Video", None)));
    }

    #[test]
    fn image_without_alt_gets_empty_alt() {
        let item = RawEntry::Image {
            src: Some("/a.jpg".to_string()),
            alt: None,
        }
        .into_item("Видео")
        .unwrap();

        assert_eq!(item.alt, "");
        assert!(!item.is_video());
    }

    #[test]
    fn targets_skip_elements_without_an_item() {
        let collection = collect(
            vec![
                image("/a.jpg", "A"),
                RawEntry::Image { src: None, alt: None },
                RawEntry::Video {
                    src: Some("/c.mp4".to_string()),
                    alt: None,
                    poster: None,
                },
            ],
            "Видео",
        );

        let targets = collection.targets(["first", "broken", "clip"]);
        assert_eq!(targets, vec![("first", 0), ("clip", 1)]);
        assert_eq!(collection.items[targets[1].1].src, "/c.mp4");
    }

    #[test]
    fn empty_page_gives_empty_collection() {
        let collection = collect(Vec::<RawEntry>::new(), "Видео");
        assert!(collection.items.is_empty());
        assert!(collection.positions.is_empty());
    }
}

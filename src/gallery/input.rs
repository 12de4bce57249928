#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    Close,
}

pub fn command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "Escape" => Some(NavCommand::Close),
        "ArrowLeft" => Some(NavCommand::Previous),
        "ArrowRight" => Some(NavCommand::Next),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Swiping left brings in the next item, swiping right the previous one.
    pub fn command(self) -> NavCommand {
        match self {
            SwipeDirection::Left => NavCommand::Next,
            SwipeDirection::Right => NavCommand::Previous,
        }
    }
}

/// `diff` is start x minus end x. Distances equal to the threshold do not count.
pub fn classify_swipe(diff: f64, threshold: f64) -> Option<SwipeDirection> {
    if !(diff.abs() > threshold) {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// Tracks one horizontal touch gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// True between `begin` and `finish`; the page must not scroll meanwhile.
    pub fn is_swiping(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn finish(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify_swipe(start - x, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

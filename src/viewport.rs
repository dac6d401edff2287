// Canvas backing-size tracking, independent of whether a GPU surface exists.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportTracker {
    size: (u32, u32),
}

impl ViewportTracker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
        }
    }

    /// Record the current backing size. Returns the new size when it changed;
    /// a collapsed (zero) dimension is ignored.
    pub fn update(&mut self, width: u32, height: u32) -> Option<(u32, u32)> {
        if width == 0 || height == 0 || (width, height) == self.size {
            return None;
        }
        self.size = (width, height);
        Some(self.size)
    }
}

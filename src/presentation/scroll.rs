/// Vertical extent of a section element, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
}

impl SectionExtent {
    /// Build from a client rect measured while the page is scrolled by `scroll_y`.
    pub fn from_client_rect(index: usize, rect_top: f64, rect_height: f64, scroll_y: f64) -> Self {
        let top = rect_top + scroll_y;
        Self {
            index,
            top,
            bottom: top + rect_height,
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.bottom
    }
}

pub fn viewport_midpoint(scroll_y: f64, inner_height: f64) -> f64 {
    scroll_y + inner_height / 2.0
}

/// First section whose extent contains `position`.
pub fn section_containing(position: f64, extents: &[SectionExtent]) -> Option<usize> {
    extents
        .iter()
        .find(|extent| extent.contains(position))
        .map(|extent| extent.index)
}

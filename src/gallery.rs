//! Stacked image carousel shown in the last section.
//!
//! Advances on wheel, arrow keys and horizontal drag. While an image is
//! focused the stack ignores drag and wheel input.

use crate::locale::Language;

/// Horizontal drag (virtual px, exclusive) needed to change image.
pub const DRAG_THRESHOLD_PX: f64 = 15.0;

/// One card in the stack.
#[derive(Debug, Clone, Copy)]
pub struct GalleryImage {
    pub file: &'static str,
    pub caption_en: &'static str,
    pub caption_ko: &'static str,
    pub caption_zh: &'static str,
}

impl GalleryImage {
    pub fn caption(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.caption_en,
            Language::Ko => self.caption_ko,
            Language::Zh => self.caption_zh,
        }
    }
}

pub static IMAGES: [GalleryImage; 5] = [
    GalleryImage {
        file: "profile1.jpg",
        caption_en: "Presentation",
        caption_ko: "발표",
        caption_zh: "演示",
    },
    GalleryImage {
        file: "profile2.jpg",
        caption_en: "Workshop",
        caption_ko: "워크샵",
        caption_zh: "研讨会",
    },
    GalleryImage {
        file: "profile3.jpg",
        caption_en: "Conference",
        caption_ko: "컨퍼런스",
        caption_zh: "会议",
    },
    GalleryImage {
        file: "profile4.jpg",
        caption_en: "Collaboration",
        caption_ko: "협업",
        caption_zh: "合作",
    },
    GalleryImage {
        file: "profile5.jpg",
        caption_en: "Project",
        caption_ko: "프로젝트",
        caption_zh: "项目",
    },
];

#[derive(Debug, Clone)]
pub struct Gallery {
    images: &'static [GalleryImage],
    current: usize,
    focused: Option<usize>,
    drag_start_x: Option<f64>,
    drag_offset: f64,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(&IMAGES)
    }
}

impl Gallery {
    pub fn new(images: &'static [GalleryImage]) -> Self {
        Self {
            images,
            current: 0,
            focused: None,
            drag_start_x: None,
            drag_offset: 0.0,
        }
    }

    pub fn images(&self) -> &'static [GalleryImage] {
        self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start_x.is_some()
    }

    /// Current horizontal drag offset, for rendering the top card.
    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.current = (self.current + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.current = self
                .current
                .checked_sub(1)
                .unwrap_or(self.images.len() - 1);
        }
    }

    /// Wheel over the stack: forward advances, backward retreats.
    pub fn wheel(&mut self, delta: f64) {
        if self.focused.is_some() || !delta.is_finite() {
            return;
        }
        if delta > 0.0 {
            self.next();
        } else if delta < 0.0 {
            self.prev();
        }
    }

    pub fn focus_current(&mut self) {
        if !self.images.is_empty() {
            self.focused = Some(self.current);
        }
    }

    /// Clear focus. Returns whether anything was focused.
    pub fn close_focus(&mut self) -> bool {
        self.focused.take().is_some()
    }

    pub fn start_drag(&mut self, x: f64) {
        if self.focused.is_some() {
            return;
        }
        self.drag_start_x = Some(x);
        self.drag_offset = 0.0;
    }

    pub fn drag_to(&mut self, x: f64) {
        if let Some(start) = self.drag_start_x {
            self.drag_offset = x - start;
        }
    }

    /// Finish a drag; a rightward pull past the threshold advances, leftward retreats.
    pub fn end_drag(&mut self) {
        if self.drag_start_x.take().is_none() {
            return;
        }
        if self.drag_offset > DRAG_THRESHOLD_PX {
            self.next();
        } else if self.drag_offset < -DRAG_THRESHOLD_PX {
            self.prev();
        }
        self.drag_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut gallery = Gallery::default();
        gallery.prev();
        assert_eq!(gallery.current_index(), 4);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_drag_threshold() {
        let mut gallery = Gallery::default();
        gallery.start_drag(100.0);
        gallery.drag_to(115.0);
        gallery.end_drag();
        assert_eq!(gallery.current_index(), 0);

        gallery.start_drag(100.0);
        gallery.drag_to(116.0);
        gallery.end_drag();
        assert_eq!(gallery.current_index(), 1);

        gallery.start_drag(100.0);
        gallery.drag_to(60.0);
        gallery.end_drag();
        assert_eq!(gallery.current_index(), 0);
        assert!(!gallery.is_dragging());
    }

    #[test]
    fn test_focus_blocks_drag_and_wheel() {
        let mut gallery = Gallery::default();
        gallery.focus_current();
        gallery.wheel(100.0);
        gallery.start_drag(0.0);
        gallery.drag_to(80.0);
        gallery.end_drag();
        assert_eq!(gallery.current_index(), 0);
        assert!(gallery.close_focus());
        assert!(!gallery.close_focus());
        gallery.wheel(-3.0);
        assert_eq!(gallery.current_index(), 4);
    }

    #[test]
    fn test_captions_localized() {
        assert_eq!(IMAGES[1].caption(Language::Ko), "워크샵");
        assert_eq!(IMAGES[2].caption(Language::Zh), "会议");
    }
}

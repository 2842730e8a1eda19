//! Section range table derived from the viewport height.
//!
//! Every gap, buffer and threshold is a fixed multiple of `transition_range`
//! (half the viewport height), so the whole table scales with the viewport.

/// Height used when the reported viewport is zero, negative or not finite.
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 800.0;

/// Number of virtual sections on the page.
pub const SECTION_COUNT: usize = 3;

/// One of the three virtual sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Welcome,
    About,
    Hello,
}

impl Section {
    pub const ALL: [Section; SECTION_COUNT] = [Section::Welcome, Section::About, Section::Hello];

    pub fn index(self) -> usize {
        match self {
            Section::Welcome => 0,
            Section::About => 1,
            Section::Hello => 2,
        }
    }
}

/// Closed interval `[start, end]` on the virtual scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRange {
    pub start: f64,
    pub end: f64,
}

impl SectionRange {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position <= self.end
    }
}

/// Ranges for a given viewport height.
///
/// Rebuilt wholesale on resize; callers hold it by value and never patch
/// individual fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeTable {
    pub viewport_height: f64,
    pub transition_range: f64,
    pub section_gap: f64,
    pub buffer_threshold: f64,
    pub section_buffer_size: f64,
    pub sections: [SectionRange; SECTION_COUNT],
    /// End of section 1's hold window, past its saturation point.
    pub about_fade_out_end: f64,
    pub max_scroll: f64,
}

impl RangeTable {
    pub fn new(viewport_height: f64) -> Self {
        let vh = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            FALLBACK_VIEWPORT_HEIGHT
        };

        let tr = vh * 0.5;
        let gap = tr * 0.4;
        let about_fade_out_end = tr * 2.4;

        Self {
            viewport_height: vh,
            transition_range: tr,
            section_gap: gap,
            buffer_threshold: tr * 2.0,
            section_buffer_size: tr * 0.1,
            sections: [
                SectionRange {
                    start: 0.0,
                    end: tr * 0.5,
                },
                SectionRange {
                    start: tr * 0.5 + gap,
                    end: tr * 2.0,
                },
                SectionRange {
                    start: about_fade_out_end + gap,
                    end: tr * 3.4,
                },
            ],
            about_fade_out_end,
            max_scroll: tr * 3.4,
        }
    }

    /// Section whose range holds `position`, or `None` inside a gap.
    ///
    /// Section 1 extends through its hold window up to `about_fade_out_end`.
    pub fn section_at(&self, position: f64) -> Option<Section> {
        let [welcome, about, hello] = self.sections;
        if welcome.contains(position) {
            Some(Section::Welcome)
        } else if position >= about.start && position <= self.about_fade_out_end {
            Some(Section::About)
        } else if hello.contains(position) {
            Some(Section::Hello)
        } else {
            None
        }
    }

    /// Like [`section_at`](Self::section_at), but resolves gaps to the
    /// section on the nearer side of the gap midpoint.
    pub fn nearest_section(&self, position: f64) -> Section {
        if let Some(section) = self.section_at(position) {
            return section;
        }
        let [welcome, about, hello] = self.sections;
        if position < about.start {
            if position < (welcome.end + about.start) / 2.0 {
                Section::Welcome
            } else {
                Section::About
            }
        } else if position < (self.about_fade_out_end + hello.start) / 2.0 {
            Section::About
        } else {
            Section::Hello
        }
    }

    /// Resting points used by discrete (keyboard and swipe) navigation.
    pub fn stops(&self) -> [f64; 5] {
        let [_, about, hello] = self.sections;
        [0.0, about.start, about.end, hello.start, hello.end]
    }

    pub fn clamp(&self, position: f64) -> f64 {
        position.clamp(0.0, self.max_scroll)
    }
}

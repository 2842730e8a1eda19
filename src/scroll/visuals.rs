//! Per-section render parameters derived from the scroll position.

use super::range::RangeTable;

const MIN_SCALE: f64 = 0.5;

/// Transform applied to one section when painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionVisual {
    pub scale: f64,
    pub opacity: f64,
    /// Vertical offset in virtual pixels; positive is below the resting spot.
    pub translate_y: f64,
}

impl SectionVisual {
    const SHOWN: SectionVisual = SectionVisual {
        scale: 1.0,
        opacity: 1.0,
        translate_y: 0.0,
    };

    fn hidden(offset: f64) -> Self {
        Self {
            scale: MIN_SCALE,
            opacity: 0.0,
            translate_y: offset,
        }
    }

    fn entering(progress: f64, offset: f64) -> Self {
        Self {
            scale: MIN_SCALE + (1.0 - MIN_SCALE) * progress,
            opacity: progress,
            translate_y: (1.0 - progress) * offset,
        }
    }

    fn leaving(progress: f64, offset: f64) -> Self {
        Self {
            scale: 1.0 - (1.0 - MIN_SCALE) * progress,
            opacity: 1.0 - progress,
            translate_y: -progress * offset,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Linear progress of `value` through `[from, to]`, clamped to `[0, 1]`.
fn progress(value: f64, from: f64, to: f64) -> f64 {
    if to <= from {
        return if value >= to { 1.0 } else { 0.0 };
    }
    ((value - from) / (to - from)).clamp(0.0, 1.0)
}

/// Scale/opacity/offset for each section at `position`.
pub fn compute_section_visuals(position: f64, ranges: &RangeTable) -> [SectionVisual; 3] {
    let [welcome, about, hello] = ranges.sections;
    let offset = ranges.section_buffer_size;

    // The first section has no entry ramp; it only fades out.
    let welcome_visual = SectionVisual::leaving(progress(position, 0.0, welcome.end), offset);

    let about_entry_end = about.start + ranges.section_buffer_size;
    let about_visual = if position < about_entry_end {
        if position <= welcome.end {
            SectionVisual::hidden(offset)
        } else {
            SectionVisual::entering(progress(position, welcome.end, about_entry_end), offset)
        }
    } else if position <= ranges.about_fade_out_end {
        SectionVisual::SHOWN
    } else {
        SectionVisual::leaving(
            progress(position, ranges.about_fade_out_end, hello.start),
            offset,
        )
    };

    let hello_entry_end = hello.start + ranges.section_buffer_size;
    let hello_visual = if position <= ranges.about_fade_out_end {
        SectionVisual::hidden(offset)
    } else if position < hello_entry_end {
        SectionVisual::entering(
            progress(position, ranges.about_fade_out_end, hello_entry_end),
            offset,
        )
    } else {
        SectionVisual::SHOWN
    };

    [welcome_visual, about_visual, hello_visual]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_top_of_page() {
        let ranges = RangeTable::new(800.0);
        let [welcome, about, hello] = compute_section_visuals(0.0, &ranges);
        assert_eq!(welcome, SectionVisual::SHOWN);
        assert_eq!(about.opacity, 0.0);
        assert_eq!(about.scale, 0.5);
        assert_eq!(hello.opacity, 0.0);
    }

    #[test]
    fn test_welcome_fades_out_monotonically() {
        let ranges = RangeTable::new(800.0);
        let mut last = f64::INFINITY;
        for step in 0..=20 {
            let pos = 200.0 * step as f64 / 20.0;
            let [welcome, _, _] = compute_section_visuals(pos, &ranges);
            assert!(welcome.opacity <= last);
            last = welcome.opacity;
        }
        let [welcome, _, _] = compute_section_visuals(200.0, &ranges);
        assert!(approx(welcome.scale, 0.5));
        assert!(approx(welcome.opacity, 0.0));
    }

    #[test]
    fn test_about_holds_through_buffer_zone() {
        let ranges = RangeTable::new(800.0);
        for pos in [400.0, 600.0, 800.0, 960.0] {
            let [_, about, hello] = compute_section_visuals(pos, &ranges);
            assert_eq!(about, SectionVisual::SHOWN, "pos {pos}");
            assert!(!hello.is_visible());
        }
    }

    #[test]
    fn test_about_entry_ramp() {
        let ranges = RangeTable::new(800.0);
        // about start is 360, entry window runs 200..400
        let [_, about, _] = compute_section_visuals(360.0, &ranges);
        assert!(approx(about.opacity, 0.8));
        assert!(approx(about.scale, 0.9));
        assert!(about.translate_y > 0.0);
    }

    #[test]
    fn test_hello_takes_over() {
        let ranges = RangeTable::new(800.0);
        let [_, about, hello] = compute_section_visuals(1120.0, &ranges);
        assert!(approx(about.opacity, 0.0));
        assert!(approx(about.scale, 0.5));
        assert!(hello.opacity > 0.0 && hello.opacity < 1.0);

        let [_, _, hello] = compute_section_visuals(1360.0, &ranges);
        assert_eq!(hello, SectionVisual::SHOWN);
    }
}

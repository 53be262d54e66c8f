use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::sections::SECTIONS;

/// Look-ahead applied to both edges of a section, so a section counts as
/// active slightly before its top reaches the viewport top.
pub const SECTION_MARGIN_PX: f64 = 200.0;

/// Scroll offset past which the back-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// A section's on-screen extent for one recomputation cycle. Measured fresh
/// every cycle; never cached across resizes.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionExtent {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Which section is active at vertical scroll offset `y`.
///
/// A section matches when `y` lies in `[top - MARGIN, top + height - MARGIN)`.
/// Extents are walked in display order and the last match wins, so with
/// overlapping ranges the lowest qualifying section is preferred. `None` means
/// no section matched; the caller keeps its previous answer (the active
/// section is sticky, it never resets to empty).
pub fn resolve_active(y: f64, extents: &[SectionExtent]) -> Option<&'static str> {
    let mut active = None;
    for section in extents {
        if y >= section.top - SECTION_MARGIN_PX
            && y < section.top + section.height - SECTION_MARGIN_PX
        {
            active = Some(section.id);
        }
    }
    active
}

pub fn show_scroll_top(y: f64) -> bool {
    y > SCROLL_TOP_THRESHOLD_PX
}

/// Measure every registry section currently in the DOM. A section that is not
/// mounted yet simply drops out of this cycle; it will be picked up on the
/// next scroll event.
pub fn measure_sections(document: &Document) -> Vec<SectionExtent> {
    SECTIONS
        .iter()
        .filter_map(|section| {
            let element = document.get_element_by_id(section.id)?;
            let html: HtmlElement = element.dyn_into().ok()?;
            Some(SectionExtent {
                id: section.id,
                top: f64::from(html.offset_top()),
                height: f64::from(html.client_height()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extent(id: &'static str, top: f64, height: f64) -> SectionExtent {
        SectionExtent { id, top, height }
    }

    #[test]
    fn offset_inside_exactly_one_range_activates_it() {
        let extents = [extent("home", 0.0, 800.0), extent("services", 800.0, 600.0)];
        assert_eq!(resolve_active(300.0, &extents), Some("home"));
    }

    #[test]
    fn no_match_yields_none_so_previous_value_sticks() {
        let extents = [extent("home", 400.0, 300.0)];
        // Above the first section's margin.
        assert_eq!(resolve_active(0.0, &extents), None);
        // Below the last section's bottom.
        assert_eq!(resolve_active(5_000.0, &extents), None);
    }

    #[test]
    fn overlapping_ranges_prefer_the_later_section() {
        // Tops shifted by the margin so the effective ranges are the plain
        // [0, 300) and [250, 500); both contain y = 275.
        let extents = [
            extent("a", SECTION_MARGIN_PX, 300.0),
            extent("b", SECTION_MARGIN_PX + 250.0, 250.0),
        ];
        assert_eq!(resolve_active(275.0, &extents), Some("b"));
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!show_scroll_top(500.0));
        assert!(show_scroll_top(501.0));
        assert!(!show_scroll_top(0.0));
    }

    #[test]
    fn walks_the_page_like_a_reader_would() {
        let extents = [
            extent("home", 0.0, 800.0),
            extent("services", 800.0, 600.0),
            extent("contact", 1_400.0, 500.0),
        ];
        assert_eq!(resolve_active(0.0, &extents), Some("home"));
        // services activates 200px early.
        assert_eq!(resolve_active(650.0, &extents), Some("services"));
        assert_eq!(resolve_active(1_250.0, &extents), Some("contact"));
        // Past everything: no match, caller keeps "contact".
        assert_eq!(resolve_active(2_100.0, &extents), None);
    }

    #[test]
    fn section_activates_at_its_margin_boundary() {
        let extents = [extent("services", 800.0, 600.0)];
        assert_eq!(resolve_active(599.9, &extents), None);
        assert_eq!(resolve_active(600.0, &extents), Some("services"));
        // Upper bound is exclusive: top + height - MARGIN.
        assert_eq!(resolve_active(1_199.9, &extents), Some("services"));
        assert_eq!(resolve_active(1_200.0, &extents), None);
    }
}

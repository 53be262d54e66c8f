use thiserror::Error;

/// One vertically stacked region of the page. The anchor position is *not*
/// stored here: it depends on layout and is measured from the DOM at query
/// time (see `scrollspy::measure_sections`), so it stays correct across
/// resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Whether the section gets its own entry in the nav bar. The scroll-spy
    /// tracks every section either way.
    pub in_nav: bool,
}

/// Display order, top to bottom. Immutable after construction; the first
/// entry is the initial active section.
pub const SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor { id: "home", label: "Home", in_nav: true },
    SectionDescriptor { id: "services", label: "Services", in_nav: true },
    SectionDescriptor { id: "testimonials", label: "Testimonials", in_nav: true },
    SectionDescriptor { id: "blog", label: "Blog", in_nav: true },
    SectionDescriptor { id: "process", label: "How We Work", in_nav: false },
    SectionDescriptor { id: "policy", label: "Our Policy", in_nav: false },
    SectionDescriptor { id: "why-choose-us", label: "Why Us", in_nav: true },
    SectionDescriptor { id: "contact", label: "Contact", in_nav: true },
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSectionError(pub String);

pub fn get(id: &str) -> Result<&'static SectionDescriptor, UnknownSectionError> {
    SECTIONS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| UnknownSectionError(id.to_string()))
}

pub fn nav_items() -> impl Iterator<Item = &'static SectionDescriptor> {
    SECTIONS.iter().filter(|s| s.in_nav)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn first_section_is_home() {
        assert_eq!(SECTIONS[0].id, "home");
    }

    #[test]
    fn get_resolves_known_ids() {
        let services = get("services").unwrap();
        assert_eq!(services.label, "Services");
    }

    #[test]
    fn get_rejects_unknown_ids() {
        let err = get("does-not-exist").unwrap_err();
        assert_eq!(err, UnknownSectionError("does-not-exist".to_string()));
    }

    #[test]
    fn nav_items_preserve_display_order() {
        let ids: Vec<_> = nav_items().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["home", "services", "testimonials", "blog", "why-choose-us", "contact"]
        );
    }
}

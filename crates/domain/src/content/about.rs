//! About pages

/// A sub-page under `/about/:section`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_SECTIONS: &[AboutSection] = &[
    AboutSection {
        slug: "story",
        title: "Our Story",
        description: "Learn about our journey and mission",
    },
    AboutSection {
        slug: "team",
        title: "Our Team",
        description: "Meet the people behind adgorithm",
    },
    AboutSection {
        slug: "impact",
        title: "Our Impact",
        description: "See how we are making a difference",
    },
    AboutSection {
        slug: "global",
        title: "Global Reach",
        description: "Discover our worldwide presence",
    },
    AboutSection {
        slug: "innovation",
        title: "Innovation",
        description: "Explore our cutting-edge technology",
    },
    AboutSection {
        slug: "security",
        title: "Security",
        description: "Learn about our security measures",
    },
];

/// Shown on `/about` and for unknown slugs
pub const PLACEHOLDER_TITLE: &str = "Currently we are working on it";
pub const PLACEHOLDER_SUBTITLE: &str = "Thanks for your patience!";

/// Shared body of every section page
pub const SECTION_BODY: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
];

pub const COMMITMENT_HEADING: &str = "Our Commitment";
pub const COMMITMENT_TEXT: &str = "At adgorithm, we're committed to revolutionizing the industry through innovative solutions and unwavering dedication to our customers' success. Our journey is defined by continuous improvement and adaptation to meet the evolving needs of our users.";
pub const COMMITMENTS: &[&str] = &[
    "Industry-leading technology solutions",
    "Dedicated customer support",
    "Continuous innovation and improvement",
    "Global reach with local expertise",
];

/// Resolve a slug; `None` falls back to the placeholder
pub fn about_section(slug: &str) -> Option<&'static AboutSection> {
    ABOUT_SECTIONS.iter().find(|section| section.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_resolves_by_slug() {
        for section in ABOUT_SECTIONS {
            assert_eq!(about_section(section.slug), Some(section));
        }
        assert_eq!(ABOUT_SECTIONS.len(), 6);
    }

    #[test]
    fn unknown_slug_falls_back() {
        assert_eq!(about_section("careers"), None);
        assert_eq!(about_section(""), None);
    }
}

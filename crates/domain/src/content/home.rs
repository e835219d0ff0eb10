//! Landing page copy

/// A product feature, shown as a card on the landing page and in the
/// navbar's Features dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

/// One stage of the "how it works" timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 2],
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Powered Matching",
        description: "Our advanced AI algorithm connects brands with the perfect influencers based on audience demographics, engagement, and brand alignment.",
    },
    Feature {
        title: "Direct DM Communication",
        description: "Communicate seamlessly with brands and influencers through our secure, integrated messaging system.",
    },
    Feature {
        title: "Secure Escrow Payments",
        description: "Our escrow payment system ensures funds are only released when both parties are satisfied with campaign deliverables.",
    },
    Feature {
        title: "Real-time Analytics",
        description: "Track campaign performance metrics in real-time with comprehensive dashboards and customizable reports.",
    },
    Feature {
        title: "Fraud Detection",
        description: "Advanced AI technology detects fake followers and engagement, ensuring authentic partnerships.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        title: "Create Your Profile",
        description: "Sign up and build your brand or influencer profile with details about your audience, interests, and goals.",
        highlights: ["Customize your profile", "Upload portfolio"],
        caption: "Create a detailed profile with your audience demographics",
    },
    Step {
        title: "Connect with AI Matching",
        description: "Our AI algorithm suggests perfect partnerships based on your specific requirements and audience alignment.",
        highlights: ["AI-powered matching", "Find ideal partnerships"],
        caption: "Our AI analyzes your needs and finds perfect matches",
    },
    Step {
        title: "Collaborate Directly",
        description: "Use our secure messaging system to discuss campaigns, negotiate terms, and finalize agreements.",
        highlights: ["Secure messaging", "Negotiate terms"],
        caption: "Discuss campaign details through secure messaging",
    },
    Step {
        title: "Secure Payment & Analytics",
        description: "Execute campaigns with secure escrow payments and track real-time performance metrics.",
        highlights: ["Escrow payments", "Performance tracking"],
        caption: "Secure escrow payments and analytics dashboard",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "adgorithm has transformed how we find influencers. The AI matching is scary accurate, and the direct messaging makes collaboration so much easier.",
        author: "Sarah Johnson",
        role: "Marketing Director at TechBrand",
        avatar_url: "https://randomuser.me/api/portraits/women/45.jpg",
    },
    Testimonial {
        quote: "As an influencer, I've tried many platforms, but nothing compares to the quality of brand matches and the security of the escrow payment system.",
        author: "Alex Rivera",
        role: "Lifestyle Influencer, 500K+ Followers",
        avatar_url: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Testimonial {
        quote: "The fraud detection feature alone is worth it. No more wasting budget on influencers with fake engagement. This platform is a game-changer.",
        author: "David Chen",
        role: "CMO at GreenLife Products",
        avatar_url: "https://randomuser.me/api/portraits/men/67.jpg",
    },
];

/// Badges under the testimonials
pub const TRUST_BADGES: &[&str] = &[
    "Secure Payments",
    "Data Protection",
    "AI-Powered",
    "Verified Users",
];

pub const TAGLINE: &str =
    "Connecting brands with the perfect influencers through AI-powered matching.";

pub const SOCIAL_LINKS: &[FooterLink] = &[
    FooterLink {
        label: "YouTube",
        href: "https://youtube.com",
    },
    FooterLink {
        label: "Instagram",
        href: "https://instagram.com",
    },
    FooterLink {
        label: "X",
        href: "https://x.com",
    },
    FooterLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
];

pub const SOLUTION_LINKS: &[&str] = &["Marketing", "Analytics", "Commerce", "Insights"];

pub const SUPPORT_LINKS: &[&str] = &["Documentation", "Guides", "API Status"];

pub const COPYRIGHT: &str = "© 2025 adgorithm. All rights reserved.";

pub const FEATURES_HEADING: &str = "Everything You Need In One Platform";
pub const FEATURES_INTRO: &str = "Our comprehensive suite of tools streamlines the entire influencer marketing process from discovery to analytics.";

pub const STEPS_HEADING: &str = "Simple, transparent process";
pub const STEPS_INTRO: &str =
    "Get started in minutes and connect with the perfect partners for your brand or audience.";

pub const TESTIMONIALS_HEADING: &str = "Trusted by Brands and Influencers";

pub const CLOSING_HEADING: &str = "Join the Future of Influencer Marketing";
pub const CLOSING_TEXT: &str = "Connect with the perfect partners, streamline your campaigns, and maximize your ROI with our AI-powered platform.";

pub const NEWSLETTER_TEXT: &str = "Subscribe to our newsletter for the latest updates.";

/// Shown for navbar entries that lead nowhere yet
pub const COMING_SOON_TITLE: &str = "Coming Soon";
pub const COMING_SOON_TEXT: &str = "Currently we are working on it. Thanks for your patience!";

/// Sign-in used by the landing page's demo buttons
pub const DEMO_BRAND_EMAIL: &str = "brand@example.com";
pub const DEMO_INFLUENCER_EMAIL: &str = "influencer@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Hero headlines, cycled on the landing page
pub const HERO_HEADLINES: &[&str] = &[
    "Find the perfect influencers",
    "Launch campaigns that convert",
    "Get paid securely",
    "Grow with real analytics",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_sections_have_expected_sizes() {
        assert_eq!(FEATURES.len(), 5);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
    }

    #[test]
    fn social_links_are_absolute() {
        assert!(SOCIAL_LINKS
            .iter()
            .all(|link| link.href.starts_with("https://")));
    }
}

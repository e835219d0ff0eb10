//! Legal documents and the policy hub

use chrono::NaiveDate;

use LegalBlock::{Bullets, Paragraph};

/// Which of the three legal documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Privacy,
    Terms,
    Cookies,
}

impl PolicyKind {
    pub fn all() -> &'static [PolicyKind] {
        &[PolicyKind::Privacy, PolicyKind::Terms, PolicyKind::Cookies]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyKind::Privacy => "Privacy Policy",
            PolicyKind::Terms => "Terms of Service",
            PolicyKind::Cookies => "Cookie Policy",
        }
    }

    /// Hub card blurb
    pub fn summary(&self) -> &'static str {
        match self {
            PolicyKind::Privacy => "Learn how we collect, use, and protect your personal data on our influencer marketing platform.",
            PolicyKind::Terms => "Understand the rules, guidelines, and your responsibilities when using our services.",
            PolicyKind::Cookies => "See how we use cookies and similar technologies to enhance your experience.",
        }
    }

    pub fn document(&self) -> &'static LegalDocument {
        match self {
            PolicyKind::Privacy => &PRIVACY_POLICY,
            PolicyKind::Terms => &TERMS_OF_SERVICE,
            PolicyKind::Cookies => &COOKIE_POLICY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A paragraph or bullet, optionally with a bold lead-in and a trailing link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalText {
    pub lead: Option<&'static str>,
    pub text: &'static str,
    pub link: Option<ExternalLink>,
}

impl LegalText {
    const fn plain(text: &'static str) -> Self {
        Self {
            lead: None,
            text,
            link: None,
        }
    }

    const fn led(lead: &'static str, text: &'static str) -> Self {
        Self {
            lead: Some(lead),
            text,
            link: None,
        }
    }

    const fn linked(text: &'static str, label: &'static str, href: &'static str) -> Self {
        Self {
            lead: None,
            text,
            link: Some(ExternalLink { label, href }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalBlock {
    Paragraph(LegalText),
    Bullets(&'static [LegalText]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub blocks: &'static [LegalBlock],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDocument {
    pub kind: PolicyKind,
    pub sections: &'static [LegalSection],
    pub contact_email: &'static str,
}

impl LegalDocument {
    pub fn title(&self) -> &'static str {
        self.kind.label()
    }

    pub fn last_updated(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap_or_default()
    }

    /// "Last updated: March 5, 2025"
    pub fn last_updated_label(&self) -> String {
        format!("Last updated: {}", self.last_updated().format("%B %-d, %Y"))
    }
}

pub const POLICY_HUB_TITLE: &str = "Legal & Policy Center";
pub const POLICY_HUB_INTRO: &str = "Welcome! Here you can find all the important legal documents that govern your use of our platform. Please review each policy to understand your rights and responsibilities as a user.";
pub const SUPPORT_EMAIL: &str = "support@adgorithm.com";
pub const POSTAL_ADDRESS: &str = "123 Innovation Way, Tech City, TC 12345, United States";

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    kind: PolicyKind::Privacy,
    contact_email: "privacy@adgorithm.com",
    sections: &[
        LegalSection {
            heading: "Information We Collect",
            blocks: &[
                Paragraph(LegalText::plain("We collect several types of information from and about users of our influencer marketing platform, including but not limited to:")),
                Bullets(&[
                    LegalText::plain("Personal information (name, email address, phone number, social media handles)"),
                    LegalText::plain("Account information (username, password, account preferences)"),
                    LegalText::plain("Profile information (bio, profile picture, audience demographics, interests, portfolio, campaign history)"),
                    LegalText::plain("Usage data (how you interact with our website, campaign participation, messages sent and received, analytics data)"),
                    LegalText::plain("Payment and transaction information (bank details, payment history, invoices, payout preferences)"),
                    LegalText::plain("Device and technical information (IP address, browser type, device identifiers, cookies, and similar technologies)"),
                ]),
            ],
        },
        LegalSection {
            heading: "How We Use Your Information",
            blocks: &[
                Paragraph(LegalText::plain("We use the information we collect to:")),
                Bullets(&[
                    LegalText::plain("Provide, operate, and maintain our influencer marketing services"),
                    LegalText::plain("Match brands and influencers using AI algorithms based on profile and campaign data"),
                    LegalText::plain("Facilitate secure communication and collaboration between users"),
                    LegalText::plain("Process payments, manage escrow, and ensure secure transactions"),
                    LegalText::plain("Send notifications, updates, and marketing communications"),
                    LegalText::plain("Analyze usage to improve our platform, develop new features, and enhance user experience"),
                    LegalText::plain("Detect and prevent fraud, abuse, and security incidents"),
                    LegalText::plain("Comply with legal obligations and enforce our terms"),
                ]),
            ],
        },
        LegalSection {
            heading: "Information Sharing",
            blocks: &[
                Paragraph(LegalText::plain("We may share your information with:")),
                Bullets(&[
                    LegalText::plain("Service providers who assist in our operations (e.g., payment processors, analytics providers, cloud hosting)"),
                    LegalText::plain("Business partners and brands, but only with your consent or as part of campaign participation"),
                    LegalText::plain("Other users, when you participate in campaigns, send messages, or interact on the platform"),
                    LegalText::plain("Law enforcement, regulators, or other parties when required by law or to protect our rights and users"),
                    LegalText::plain("In connection with a merger, acquisition, or sale of all or a portion of our assets"),
                ]),
            ],
        },
        LegalSection {
            heading: "Your Rights & Choices",
            blocks: &[
                Paragraph(LegalText::plain("You have the right to:")),
                Bullets(&[
                    LegalText::plain("Access, update, or delete your personal information at any time via your account settings"),
                    LegalText::plain("Opt out of marketing communications by following the unsubscribe instructions in our emails"),
                    LegalText::plain("Request data portability or restriction of processing in accordance with applicable laws"),
                    LegalText::plain("Contact us for any privacy-related requests or questions"),
                ]),
            ],
        },
        LegalSection {
            heading: "Contact Us",
            blocks: &[Paragraph(LegalText::plain("If you have any questions about our Privacy Policy, please contact us at:"))],
        },
    ],
};

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    kind: PolicyKind::Terms,
    contact_email: "legal@adgorithm.com",
    sections: &[
        LegalSection {
            heading: "Acceptance of Terms",
            blocks: &[
                Paragraph(LegalText::plain("By accessing and using our influencer marketing platform, you agree to be bound by these Terms of Service. If you do not agree to these terms, please do not use our services. These terms apply to all users, including brands, influencers, and visitors.")),
                Bullets(&[
                    LegalText::plain("You must be at least 18 years old or have legal parental/guardian consent to use our platform."),
                    LegalText::plain("You agree to comply with all applicable laws and regulations while using our services."),
                    LegalText::plain("We reserve the right to update these terms at any time. Continued use of the platform constitutes acceptance of the revised terms."),
                ]),
            ],
        },
        LegalSection {
            heading: "User Responsibilities",
            blocks: &[
                Paragraph(LegalText::plain("As a user of our services, you agree to:")),
                Bullets(&[
                    LegalText::plain("Provide accurate, current, and complete information during registration and profile setup"),
                    LegalText::plain("Maintain the confidentiality and security of your account credentials"),
                    LegalText::plain("Promptly update your information as needed"),
                    LegalText::plain("Comply with campaign requirements and deadlines if participating as a brand or influencer"),
                    LegalText::plain("Respect the rights, privacy, and intellectual property of other users"),
                    LegalText::plain("Report any suspicious or fraudulent activity to our support team"),
                ]),
            ],
        },
        LegalSection {
            heading: "Prohibited Activities",
            blocks: &[
                Paragraph(LegalText::plain("You may not:")),
                Bullets(&[
                    LegalText::plain("Use our services for illegal, harmful, or deceptive purposes"),
                    LegalText::plain("Violate any intellectual property or proprietary rights of others"),
                    LegalText::plain("Attempt to gain unauthorized access to accounts, data, or systems"),
                    LegalText::plain("Interfere with or disrupt the integrity or performance of our platform"),
                    LegalText::plain("Post or transmit any content that is abusive, harassing, defamatory, or otherwise objectionable"),
                    LegalText::plain("Engage in fraudulent activities, including fake engagement or misrepresentation"),
                ]),
            ],
        },
        LegalSection {
            heading: "Payments & Fees",
            blocks: &[
                Paragraph(LegalText::plain("Our platform may facilitate payments between brands and influencers using secure escrow. By using our payment services, you agree to:")),
                Bullets(&[
                    LegalText::plain("Provide accurate payment and payout information"),
                    LegalText::plain("Pay any applicable fees as described on our platform"),
                    LegalText::plain("Understand that funds may be held in escrow until campaign deliverables are approved"),
                    LegalText::plain("Comply with all tax obligations related to payments received"),
                ]),
            ],
        },
        LegalSection {
            heading: "Contact Us",
            blocks: &[Paragraph(LegalText::plain("If you have any questions about our Terms of Service, please contact us at:"))],
        },
    ],
};

pub static COOKIE_POLICY: LegalDocument = LegalDocument {
    kind: PolicyKind::Cookies,
    contact_email: "privacy@adgorithm.com",
    sections: &[
        LegalSection {
            heading: "Types of Cookies We Use",
            blocks: &[
                Paragraph(LegalText::plain("We use different types of cookies for various purposes on our influencer marketing platform, including:")),
                Bullets(&[
                    LegalText::led("Essential Cookies:", "Required for the website and platform features (such as login, account security, and payment processing) to function properly."),
                    LegalText::led("Analytics Cookies:", "Help us understand how visitors and users interact with our website, campaigns, and dashboards, so we can improve our services."),
                    LegalText::led("Functionality Cookies:", "Remember your preferences, such as language, theme, and saved searches, to personalize your experience."),
                    LegalText::led("Advertising Cookies:", "Used to deliver relevant advertisements and measure the effectiveness of marketing campaigns, both on and off our platform."),
                    LegalText::led("Performance Cookies:", "Monitor system performance, detect errors, and ensure a smooth user experience."),
                ]),
            ],
        },
        LegalSection {
            heading: "How to Manage Cookies",
            blocks: &[
                Paragraph(LegalText::plain("You can set your browser to refuse all or some browser cookies, or to alert you when websites set or access cookies. If you disable or refuse cookies, please note that some parts of this website or platform features may become inaccessible or not function properly (e.g., login, campaign management, analytics dashboards).")),
                Paragraph(LegalText::linked(
                    "Most web browsers allow some control of most cookies through the browser settings. To find out more about cookies, including how to see what cookies have been set and how to manage and delete them, visit",
                    "www.allaboutcookies.org",
                    "https://www.allaboutcookies.org",
                )),
                Bullets(&[
                    LegalText::linked(
                        "For more information on managing cookies in Chrome, see",
                        "Google Chrome Help",
                        "https://support.google.com/chrome/answer/95647",
                    ),
                    LegalText::linked(
                        "For Firefox, see",
                        "Mozilla Firefox Help",
                        "https://support.mozilla.org/en-US/kb/cookies-information-websites-store-on-your-computer",
                    ),
                    LegalText::linked(
                        "For Safari, see",
                        "Apple Safari Help",
                        "https://support.apple.com/en-us/HT201265",
                    ),
                ]),
            ],
        },
        LegalSection {
            heading: "Third-Party Cookies",
            blocks: &[
                Paragraph(LegalText::plain("In addition to our own cookies, we may also use various third-party cookies to report usage statistics of the service, deliver advertisements on and through the service, and so on. These third-party cookies may be set by analytics providers, advertising networks, or social media platforms.")),
                Paragraph(LegalText::plain("These third-party services may include, but are not limited to:")),
                Bullets(&[
                    LegalText::plain("Google Analytics (for traffic and usage analysis)"),
                    LegalText::plain("Facebook Pixel (for ad targeting and conversion tracking)"),
                    LegalText::plain("LinkedIn Insights (for B2B campaign analytics)"),
                    LegalText::plain("Other advertising and analytics providers relevant to influencer marketing"),
                ]),
                Paragraph(LegalText::plain("We do not control these third-party cookies. Please refer to the respective privacy and cookie policies of these providers for more information on their practices and how to opt out.")),
            ],
        },
        LegalSection {
            heading: "Contact Us",
            blocks: &[Paragraph(LegalText::plain("If you have any questions about our Cookie Policy, please contact us at:"))],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_document_ends_with_contact_section() {
        for kind in PolicyKind::all() {
            let document = kind.document();
            assert_eq!(document.kind, *kind);
            let last = document.sections.last().unwrap();
            assert_eq!(last.heading, "Contact Us");
            assert!(document.contact_email.ends_with("@adgorithm.com"));
        }
    }

    #[test]
    fn last_updated_reads_like_a_date() {
        assert_eq!(
            PRIVACY_POLICY.last_updated_label(),
            "Last updated: March 5, 2025"
        );
        assert_eq!(TERMS_OF_SERVICE.title(), "Terms of Service");
    }

    #[test]
    fn cookie_policy_links_are_absolute() {
        let links: Vec<_> = COOKIE_POLICY
            .sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .flat_map(|block| match block {
                Paragraph(text) => std::slice::from_ref(text),
                Bullets(items) => *items,
            })
            .filter_map(|text| text.link)
            .collect();
        assert_eq!(links.len(), 4);
        assert!(links.iter().all(|link| link.href.starts_with("https://")));
    }
}

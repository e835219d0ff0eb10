//! Canned question/answer catalog offered by the assistant

use crate::session::Role;

/// A canned question and its answer
#[derive(Debug, PartialEq, Eq)]
pub struct TopicEntry {
    pub id: &'static str,
    pub prompt: &'static str,
    pub answer: &'static str,
}

const BRAND_PRIMARY: &[TopicEntry] = &[
    TopicEntry {
        id: "brand-1",
        prompt: "How do I find the right influencers?",
        answer: "Our platform uses AI-powered matching to connect you with the perfect influencers for your brand. Create a profile, set your preferences, and our system will suggest the best matches based on audience demographics, engagement rates, and content style. You can also browse our marketplace and filter by niche, follower count, and location.",
    },
    TopicEntry {
        id: "brand-2",
        prompt: "What are the payment options?",
        answer: "We offer secure payment processing through our platform with options including credit cards, PayPal, and bank transfers. All payments are protected by our escrow system, ensuring you only release funds once you're satisfied with the influencer's work. We also provide invoicing and payment tracking for all your campaigns.",
    },
    TopicEntry {
        id: "brand-3",
        prompt: "How do I create a campaign?",
        answer: "To create a campaign, navigate to the \"Campaigns\" section and click \"Create New\". Fill in the campaign details including objectives, deliverables, timeline, and budget. You can then invite specific influencers or open it to applications. Our platform guides you through each step to ensure your campaign is set up for success.",
    },
    TopicEntry {
        id: "brand-4",
        prompt: "How to measure campaign results?",
        answer: "Our platform provides comprehensive analytics for all your campaigns. Track impressions, engagement, click-through rates, conversions, and ROI in real-time. You can also access demographic data about the audience reached. We generate automated reports that you can customize and export for your team.",
    },
    TopicEntry {
        id: "brand-7",
        prompt: "How to optimize my campaign budget?",
        answer: "Our AI analyzes market trends and campaign performance data to help you optimize your budget allocation. We provide recommendations on influencer selection, content types, and posting schedules to maximize ROI. You can also use our budget planning tools to forecast campaign reach and engagement.",
    },
    TopicEntry {
        id: "brand-8",
        prompt: "What types of content can I request?",
        answer: "You can request various content types including photos, videos, Stories, Reels, TikToks, blog posts, and more. Each content type can be customized with specific requirements like duration, style, messaging, and usage rights. Our platform helps you define clear content guidelines for influencers.",
    },
    TopicEntry {
        id: "brand-9",
        prompt: "How to leverage AI for targeting?",
        answer: "Our AI system analyzes vast datasets to identify the most suitable influencers based on your target audience. It considers factors like audience overlap, engagement authenticity, and content relevance to ensure optimal matching.",
    },
    TopicEntry {
        id: "brand-10",
        prompt: "What are the latest trends?",
        answer: "Our platform continuously monitors social media trends, content performance, and user behavior to provide real-time insights. You can access trending hashtags, popular content formats, and emerging influencer niches specific to your industry.",
    },
    TopicEntry {
        id: "brand-11",
        prompt: "How to ensure authentic engagement?",
        answer: "We use advanced analytics to verify influencer authenticity and engagement quality. Our system flags suspicious activity and provides detailed audience quality scores to help you make informed decisions.",
    },
];

const INFLUENCER_PRIMARY: &[TopicEntry] = &[
    TopicEntry {
        id: "influencer-1",
        prompt: "How do I get matched with brands?",
        answer: "After creating your profile, our AI-powered matching system will connect you with compatible brands. Make sure your profile is complete with your niche, content examples, audience demographics, and engagement metrics. You can also browse available campaigns and apply directly to those that interest you.",
    },
    TopicEntry {
        id: "influencer-2",
        prompt: "When and how will I get paid?",
        answer: "Payments are processed through our secure platform. Once you complete the deliverables and the brand approves your work, funds are released from escrow to your account. You can withdraw via direct deposit, PayPal, or other supported methods. Payment timelines vary by campaign but are clearly outlined in each agreement.",
    },
    TopicEntry {
        id: "influencer-3",
        prompt: "How do I negotiate rates?",
        answer: "You can negotiate rates directly through our messaging system. We provide market rate insights based on your metrics to help you price fairly. When you receive an offer, you can accept, decline, or counter with your preferred rate. Our platform also allows you to create different packages for brands to choose from.",
    },
    TopicEntry {
        id: "influencer-4",
        prompt: "Can I track my performance?",
        answer: "Yes, our analytics dashboard shows your performance across all campaigns. Track engagement rates, audience growth, and campaign impact. This data helps you demonstrate your value to brands and improve your content strategy. You can generate performance reports to share with current or prospective brand partners.",
    },
    TopicEntry {
        id: "influencer-7",
        prompt: "How to improve my engagement rates?",
        answer: "Our platform provides AI-powered insights on content optimization, best posting times, and audience engagement patterns. We analyze your top-performing content and provide recommendations to improve reach and engagement. You can also access industry benchmarks and trending content formats.",
    },
    TopicEntry {
        id: "influencer-8",
        prompt: "What tools are available for content creation?",
        answer: "We offer various tools to enhance your content creation process, including trending hashtag suggestions, caption generators, and performance predictions. You can also access our media editing tools, scheduling features, and cross-platform posting capabilities.",
    },
    TopicEntry {
        id: "influencer-9",
        prompt: "How to build my personal brand?",
        answer: "Our platform offers AI-powered insights on personal branding, including content strategy recommendations, audience growth tactics, and niche optimization. We analyze successful creators in your space to provide actionable guidance.",
    },
    TopicEntry {
        id: "influencer-10",
        prompt: "What are the best practices?",
        answer: "Access our comprehensive guide on influencer best practices, covering content creation, engagement strategies, brand collaboration tips, and professional conduct. Stay updated with industry standards and platform-specific guidelines.",
    },
    TopicEntry {
        id: "influencer-11",
        prompt: "How to diversify my income?",
        answer: "Explore multiple revenue streams through our platform, including brand partnerships, affiliate marketing, merchandise, and digital products. Our AI suggests personalized monetization strategies based on your niche and audience.",
    },
];

const BRAND_SECONDARY: &[TopicEntry] = &[
    TopicEntry {
        id: "brand-5",
        prompt: "How to set my campaign budget?",
        answer: "Our platform offers budget guidance based on your campaign goals, industry benchmarks, and the types of influencers you want to work with. You can set budgets per influencer or for the entire campaign. We also provide cost estimation tools to help you allocate your budget effectively across different platforms and content types.",
    },
    TopicEntry {
        id: "brand-6",
        prompt: "What content rights do I get?",
        answer: "Content rights are defined in each campaign agreement. By default, you receive rights to share the content on your own channels with proper attribution. Extended usage rights (like paid advertising or product packaging) can be negotiated directly with influencers. Our platform includes customizable contract templates that clearly outline content rights.",
    },
];

const INFLUENCER_SECONDARY: &[TopicEntry] = &[
    TopicEntry {
        id: "influencer-5",
        prompt: "How to improve my profile visibility?",
        answer: "Complete your profile with high-quality content examples, detailed audience demographics, and engagement metrics. Regularly update your stats and portfolio. Use relevant keywords and tags in your bio. Our algorithm boosts profiles with complete information, good response rates, and positive brand reviews.",
    },
    TopicEntry {
        id: "influencer-6",
        prompt: "What if a brand doesn't pay?",
        answer: "Our escrow system protects influencers from non-payment. Brands deposit funds before you begin work, and we only release them when deliverables are approved. If any disputes arise, our support team mediates and resolves them according to our platform policies and the terms in your agreement.",
    },
];

/// Topics listed right after the visitor says who they are
pub fn primary(participant: Role) -> &'static [TopicEntry] {
    match participant {
        Role::Brand => BRAND_PRIMARY,
        Role::Influencer => INFLUENCER_PRIMARY,
    }
}

/// Follow-up topics offered when a primary answer did not help
pub fn secondary(participant: Role) -> &'static [TopicEntry] {
    match participant {
        Role::Brand => BRAND_SECONDARY,
        Role::Influencer => INFLUENCER_SECONDARY,
    }
}

pub(crate) fn find_in(set: &'static [TopicEntry], id: &str) -> Option<&'static TopicEntry> {
    set.iter().find(|topic| topic.id == id)
}

/// Look a topic up across every set
pub fn find(id: &str) -> Option<&'static TopicEntry> {
    Role::all()
        .iter()
        .flat_map(|role| primary(*role).iter().chain(secondary(*role)))
        .find(|topic| topic.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn set_sizes() {
        for role in Role::all() {
            assert_eq!(primary(*role).len(), 9);
            assert_eq!(secondary(*role).len(), 2);
        }
    }

    #[test]
    fn ids_are_unique_across_all_sets() {
        let mut seen = HashSet::new();
        for role in Role::all() {
            for topic in primary(*role).iter().chain(secondary(*role)) {
                assert!(seen.insert(topic.id), "duplicate topic id {}", topic.id);
                assert!(topic.id.starts_with(role.as_str()));
            }
        }
    }

    #[test]
    fn find_reaches_secondary_topics() {
        let topic = find("influencer-6").unwrap();
        assert_eq!(topic.prompt, "What if a brand doesn't pay?");
        assert!(find("brand-99").is_none());
    }
}

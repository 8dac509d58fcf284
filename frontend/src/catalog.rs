//! Static site content. Everything here is read-only for the lifetime of the page.

/// In-page navigation targets, in page order.
#[cfg(test)]
pub const SECTION_ANCHORS: [&str; 6] = ["about", "services", "ai-strategy", "blog", "testimonials", "contact"];

#[derive(Debug, PartialEq)]
pub struct Article {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
    /// Trusted HTML, rendered raw in the article view.
    pub content: &'static str,
    /// Section anchor of the related service.
    pub target: &'static str,
    pub read_minutes: u8,
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating as usize)
    }
}

static ARTICLES: [Article; 3] = [
    Article {
        id: "seo-strategy-2024",
        category: "SEO Strategy",
        title: "Why Your Local Business Isn't Ranking #1 on Google in 2024",
        author: "Sufi (Growth Lead)",
        date: "March 15, 2024",
        excerpt: "The rules of SEO have changed. If you're still relying on old keyword stuffing, you're invisible. Learn the new 'Entity-Based' SEO model...",
        content: r##"
            <h2>The Death of Keyword Stuffing</h2>
            <p>In 2024, Google's algorithms have evolved beyond simple keyword matching. The search engine now uses <strong>Entity-Based Search</strong>, which focuses on relationships between topics rather than just strings of text. If you want to rank, you need to prove you are an authority in your niche.</p>
            <h3>The Importance of E-E-A-T</h3>
            <p>Experience, Expertise, Authoritativeness, and Trustworthiness (E-E-A-T) are the pillars of modern SEO. At Nexus Growth, we focus on building these signals through high-quality backlinking and technical site audits.</p>
            <blockquote>"Search engines don't rank websites; they rank answers."</blockquote>
            <h3>3 Steps to Dominate Local Search</h3>
            <ol>
                <li><strong>Optimized Google Business Profile:</strong> Ensure your NAP (Name, Address, Phone) data is identical across the web.</li>
                <li><strong>Hyper-Local Content:</strong> Write about events and issues specific to your city to anchor your entity in a geographic location.</li>
                <li><strong>Core Web Vitals:</strong> Google prioritizes sites that load fast and offer a smooth user experience.</li>
            </ol>
            <p>Need a professional touch? Check out our <a href="#services">Google Ranking (SEO) Services</a> to get started.</p>
        "##,
        target: "services",
        read_minutes: 6,
    },
    Article {
        id: "site-speed-sales",
        category: "Web Development",
        title: "The 3-Second Rule: How Site Speed is Killing Your Sales",
        author: "Nexus Engineering Team",
        date: "April 02, 2024",
        excerpt: "Every millisecond your site takes to load, you lose 7% of your conversions. Here's how high-performance code turns visitors into buyers.",
        content: r##"
            <h2>Milliseconds Mean Millions</h2>
            <p>Amazon found that every 100ms of latency cost them 1% in sales. For a small business, a 3-second delay is often the difference between a new customer and a bounce. Our web development philosophy is built on <strong>performance first</strong>.</p>
            <h3>Why Modern Frameworks Matter</h3>
            <p>Using legacy builders with 50+ plugins creates "Code Bloat." We utilize clean, modern stacks to ensure your site is lightning fast out of the box.</p>
            <h3>The Conversion Funnel</h3>
            <p>A fast site isn't just for SEO; it's for trust. A professional, snappy website tells the customer that your business is competent. When a site lags, the user feels a psychological "friction" that stops them from clicking 'Buy Now'.</p>
            <p>Discover how we build high-speed assets in our <a href="#services">Custom Website Building</a> section.</p>
        "##,
        target: "services",
        read_minutes: 5,
    },
    Article {
        id: "profitable-ads",
        category: "Advertising",
        title: "Stop Wasting Money: The Math Behind Profitable Google Ads",
        author: "Ad-Ops Specialist",
        date: "April 10, 2024",
        excerpt: "Most agencies focus on CPC. We focus on CPA. Discover the secret to scaling your budget without losing your profit margins.",
        content: r##"
            <h2>The Vanity Metric Trap</h2>
            <p>Many agencies will brag about low "Cost Per Click" (CPC). But if those clicks don't convert, they are worthless. At Nexus, we track the metrics that matter: <strong>ROAS (Return on Ad Spend)</strong> and <strong>CPA (Cost Per Acquisition)</strong>.</p>
            <h3>The 'Intent' Advantage</h3>
            <p>Unlike Social Media ads, where you interrupt someone's scrolling, Google Ads catch people while they are actively looking for a solution. This is "High Intent" traffic. The math is simple: target the right intent + high-converting landing page = Profit.</p>
            <h3>Scaling Without Breaking</h3>
            <p>When you double your ad budget, you shouldn't expect to double your work. You should expect to double your automation. We use AI-driven bidding strategies to ensure your budget is spent at the peak hours for your industry.</p>
            <p>Ready to scale? Explore our <a href="#services">Google Ads (PPC) Management</a>.</p>
        "##,
        target: "services",
        read_minutes: 6,
    },
];

static SERVICES: [Service; 6] = [
    Service {
        title: "Custom Website Building",
        description: "We build fast, beautiful websites that look great on phones and computers. Your site will be easy to use and designed to help you sell more.",
        accent: "#c084fc",
    },
    Service {
        title: "Google Ranking (SEO)",
        description: "We help your business show up at the top of Google searches. When people look for what you offer, they find you first, not your competitors.",
        accent: "#818cf8",
    },
    Service {
        title: "Google Ads (PPC)",
        description: "Get instant traffic to your website. We manage your Google ads to make sure every dollar you spend brings in new leads and ready-to-buy customers.",
        accent: "#f472b6",
    },
    Service {
        title: "Facebook & Social Ads",
        description: "We find your perfect customers on Facebook and Instagram. Our ads stop the scroll and turn social media users into loyal fans of your brand.",
        accent: "#60a5fa",
    },
    Service {
        title: "Full Brand Marketing",
        description: "Not sure where to start? We create a complete plan to grow your brand, reach more people, and build a professional image that people trust.",
        accent: "#2dd4bf",
    },
    Service {
        title: "Sales & Lead Generation",
        description: "We don't just get you clicks; we get you customers. We optimize your site to turn random visitors into phone calls, emails, and sales.",
        accent: "#fb923c",
    },
];

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Jenkins",
        role: "CEO at TechFlow",
        image: "https://picsum.photos/seed/sarah/100/100",
        content: "Nexus Growth completely transformed our online presence. Our traffic grew by 300% in 4 months after their SEO overhaul.",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Thorne",
        role: "Founder of UrbanStyle",
        image: "https://picsum.photos/seed/marcus/100/100",
        content: "The custom dashboard they built for us is a work of art. High-performance code that actually delivers sales.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Rodriguez",
        role: "Marketing Director at GlobaLync",
        image: "https://picsum.photos/seed/elena/100/100",
        content: "Professional, data-driven, and incredibly responsive. They are the only agency we trust with our digital strategy.",
        rating: 5,
    },
];

pub fn articles() -> &'static [Article] {
    &ARTICLES
}

pub fn services() -> &'static [Service] {
    &SERVICES
}

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

pub fn find_article(id: &str) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn article_ids_are_unique() {
        let ids: HashSet<_> = articles().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), articles().len());
    }

    #[test]
    fn article_targets_are_known_sections() {
        for article in articles() {
            assert!(
                SECTION_ANCHORS.contains(&article.target),
                "{} points at unknown section {}",
                article.id,
                article.target
            );
        }
    }

    #[test]
    fn testimonial_stars_follow_rating() {
        for t in testimonials() {
            assert_eq!(t.stars().chars().count(), t.rating as usize);
        }
        let three = Testimonial { rating: 3, ..TESTIMONIALS[0] };
        assert_eq!(three.stars(), "★★★");
    }

    #[test]
    fn find_article_by_id() {
        assert_eq!(find_article("profitable-ads").map(|a| a.category), Some("Advertising"));
        assert!(find_article("missing").is_none());
    }

    #[test]
    fn in_body_links_only_use_section_anchors() {
        for article in articles() {
            for chunk in article.content.split("href=\"#").skip(1) {
                let id = chunk.split('"').next().unwrap_or_default();
                assert!(SECTION_ANCHORS.contains(&id), "{} links to #{}", article.id, id);
            }
        }
    }
}

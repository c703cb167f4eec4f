//! Section content with the site's stock copy as defaults.
//!
//! Every field is independently overridable: a configuration file only needs
//! to name the fields it changes.

use serde::{Deserialize, Serialize};

/// Review or testimonial shown by a rotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Testimonial {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            position: String::new(),
            company: String::new(),
            avatar_url: None,
        }
    }

    pub fn with_affiliation(mut self, position: impl Into<String>, company: impl Into<String>) -> Self {
        self.position = position.into();
        self.company = company.into();
        self
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// "Position, Company" with whichever halves are present, or `None` when
    /// both are blank.
    pub fn affiliation(&self) -> Option<String> {
        let parts: Vec<&str> = [self.position.trim(), self.company.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// First character of the author, used when no avatar is available.
    pub fn initial(&self) -> String {
        self.author
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

fn dicebear(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

/// Generated avatar used when a review carries no picture of its own.
pub fn fallback_avatar(author: &str) -> String {
    dicebear(author)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub logo: String,
    pub cta_text: String,
    pub cta_link: String,
    pub menu_items: Vec<NavLink>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            logo: "I DO Consulting".to_string(),
            cta_text: "Get in Touch".to_string(),
            cta_link: "#contact".to_string(),
            menu_items: vec![
                NavLink::new("Services", "#services"),
                NavLink::new("Testimonials", "#client-success-stories"),
                NavLink::new("About", "#about"),
                NavLink::new("Contact", "#contact"),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    pub image_url: String,
    pub image_alt: String,
    pub background_image: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Transforming Organizations Through Strategic Consulting".to_string(),
            subtitle: "I DO Consulting".to_string(),
            description: "Led by Jeannette King, I DO Consulting provides expert guidance to help your business navigate challenges, optimize operations, and achieve sustainable growth. Based in Vancouver, we bring years of industry experience to deliver tailored solutions for your unique needs.".to_string(),
            cta_text: "Learn More".to_string(),
            cta_link: "#services".to_string(),
            image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=800&q=80".to_string(),
            image_alt: "Jeannette King, Founder of I DO Consulting".to_string(),
            background_image: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=1600&q=80".to_string(),
        }
    }
}

/// Icon drawn above a service card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceIcon {
    Strategy,
    Leadership,
    Organization,
    Change,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub title: String,
    pub subtitle: String,
    pub services: Vec<Service>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        let service = |id, title: &str, description: &str, icon| Service {
            id,
            title: title.to_string(),
            description: description.to_string(),
            icon,
        };

        Self {
            title: "Our Services".to_string(),
            subtitle: "I DO Consulting offers a range of specialized services to help your organization thrive.".to_string(),
            services: vec![
                service(
                    1,
                    "Strategic Planning",
                    "Develop comprehensive strategic plans that align with your organization's vision and goals.",
                    ServiceIcon::Strategy,
                ),
                service(
                    2,
                    "Leadership Development",
                    "Enhance leadership capabilities through personalized coaching and development programs.",
                    ServiceIcon::Leadership,
                ),
                service(
                    3,
                    "Organizational Development",
                    "Transform your organizational structure and culture to improve performance and employee engagement.",
                    ServiceIcon::Organization,
                ),
                service(
                    4,
                    "Change Management",
                    "Navigate complex organizational changes with structured approaches that minimize disruption and maximize adoption.",
                    ServiceIcon::Change,
                ),
            ],
        }
    }
}

/// Single-item review rotator ("Client Success Stories").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub reviews: Vec<Testimonial>,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            title: "Client Success Stories".to_string(),
            subtitle: "Real results from real clients".to_string(),
            background_image: "https://images.unsplash.com/photo-1506477331477-33d5d8b3dc85?w=1600&q=80".to_string(),
            reviews: vec![
                Testimonial::new(
                    "Working with Jeannette has been a very rewarding experience, she has helped me in identifying my goals and what I needed to do, to get there. In a relatively short period of time she has helped me achieve my short term goals and continue to work towards to my long term goal by keeping me focused and engaged in developing the skills that I require to be leader in my organization. One conversation at a time, I have been able to grow both professionally and personally and realize that anything is possible.",
                    "Kelly W.",
                )
                .with_affiliation("Chief Financial Officer", "Forks North Portage Partnership")
                .with_avatar(dicebear("kelly")),
                Testimonial::new(
                    "I DO Consulting's strategic planning sessions were transformative for our executive team. Jeannette's facilitation skills and deep understanding of organizational dynamics helped us align on our vision and create actionable steps toward our goals.",
                    "Robert L.",
                )
                .with_affiliation("Executive Director", "Vancouver Community Services")
                .with_avatar(dicebear("robert")),
                Testimonial::new(
                    "The leadership development program Jeannette designed for our management team has had a lasting impact. Her personalized approach and ability to connect with each participant created a safe space for growth and transformation.",
                    "Priya M.",
                )
                .with_affiliation("VP of Human Resources", "Pacific Northwest Technologies")
                .with_avatar(dicebear("priya")),
            ],
        }
    }
}

/// Sliding testimonial carousel. Not mounted on the stock home page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    /// Number of cards on screen at once.
    pub visible: usize,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            title: "What Our Clients Say".to_string(),
            subtitle: "Hear from organizations that have transformed with our consulting services".to_string(),
            background_image: "https://images.unsplash.com/photo-1579546929518-9e396f3cc809?w=1600&q=80".to_string(),
            visible: 3,
            testimonials: vec![
                Testimonial::new(
                    "Jeannette's strategic approach transformed our organization. Her insights were invaluable and led to measurable improvements in our team dynamics and overall performance.",
                    "Sarah Johnson",
                )
                .with_affiliation("CEO", "TechVision Inc.")
                .with_avatar(dicebear("sarah")),
                Testimonial::new(
                    "Working with I DO Consulting was a game-changer for our leadership team. Jeannette's expertise in organizational development helped us navigate a challenging transition period with confidence.",
                    "Michael Chen",
                )
                .with_affiliation("Director of Operations", "Innovate Solutions")
                .with_avatar(dicebear("michael")),
                Testimonial::new(
                    "Jeannette brings a unique blend of analytical thinking and empathy to her consulting work. She quickly identified our core challenges and developed practical solutions that aligned with our company values.",
                    "Emily Rodriguez",
                )
                .with_affiliation("HR Manager", "Global Enterprises")
                .with_avatar(dicebear("emily")),
                Testimonial::new(
                    "I DO Consulting delivered beyond our expectations. Jeannette's personalized approach and deep industry knowledge made all the difference in helping us achieve our organizational goals.",
                    "David Thompson",
                )
                .with_affiliation("Founder", "Elevate Group")
                .with_avatar(dicebear("david")),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub expertise: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            title: "About Jeannette King".to_string(),
            subtitle: "Founder & Principal Consultant".to_string(),
            description: "With over 15 years of experience in organizational development and strategic consulting, Jeannette King has helped numerous businesses across Vancouver and beyond transform their operations and achieve sustainable growth. Her unique approach combines data-driven insights with a deep understanding of human dynamics, allowing her to create tailored solutions that address the specific needs of each client.".to_string(),
            image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=600&q=80".to_string(),
            expertise: [
                "Strategic Planning",
                "Organizational Development",
                "Leadership Coaching",
                "Change Management",
                "Team Building",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            cta_text: "Learn More".to_string(),
            cta_link: "#contact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    fn stock() -> Self {
        Self {
            email: Some("jeannette@idoconsulting.ca".to_string()),
            phone: Some("+1 (604) 555-1234".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub title: String,
    pub subtitle: String,
    pub contact_info: ContactInfo,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            title: "Get in Touch".to_string(),
            subtitle: "Ready to take the next step? Reach out to start the conversation.".to_string(),
            contact_info: ContactInfo::stock(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// `(label, url)` pairs for the networks that are configured.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub company_name: String,
    pub tagline: String,
    /// Copyright year; the current year when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub background_image: String,
    pub social_links: SocialLinks,
    pub contact_info: ContactInfo,
    pub navigation_links: Vec<NavLink>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            company_name: "I DO Consulting".to_string(),
            tagline: "Professional consulting services based in Vancouver, BC.".to_string(),
            year: None,
            background_image: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=1600&q=80".to_string(),
            social_links: SocialLinks {
                facebook: Some("https://facebook.com".to_string()),
                instagram: Some("https://instagram.com".to_string()),
                linkedin: Some("https://linkedin.com".to_string()),
            },
            contact_info: ContactInfo::stock(),
            navigation_links: vec![
                NavLink::new("Services", "#services"),
                NavLink::new("Client Success Stories", "#client-success-stories"),
                NavLink::new("About", "#about"),
                NavLink::new("Contact", "#contact"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affiliation_skips_blank_parts() {
        let full = Testimonial::new("q", "a").with_affiliation("CEO", "Acme");
        assert_eq!(full.affiliation().as_deref(), Some("CEO, Acme"));

        let company_only = Testimonial::new("q", "a").with_affiliation("", "Acme");
        assert_eq!(company_only.affiliation().as_deref(), Some("Acme"));

        assert_eq!(Testimonial::new("q", "a").affiliation(), None);
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(Testimonial::new("q", "priya").initial(), "P");
        assert_eq!(Testimonial::new("q", "  ").initial(), "");
    }

    #[test]
    fn social_entries_omit_unset_networks() {
        let links = SocialLinks {
            facebook: None,
            instagram: Some(String::new()),
            linkedin: Some("https://linkedin.com/in/jk".to_string()),
        };
        assert_eq!(links.entries(), vec![("LinkedIn", "https://linkedin.com/in/jk")]);
    }

    #[test]
    fn stock_content_matches_the_home_page() {
        assert_eq!(ReviewsConfig::default().reviews.len(), 3);
        assert_eq!(TestimonialsConfig::default().testimonials.len(), 4);
        assert_eq!(ServicesConfig::default().services.len(), 4);
        assert!(!TestimonialsConfig::default().enabled);
    }
}

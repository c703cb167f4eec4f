//! HTML output for the single-page site.
//!
//! Markup is produced with `maud`, so every piece of configured text is
//! escaped on interpolation. Each section renderer is a plain function from
//! its configuration (plus rotator or menu state where relevant) to
//! [`Markup`]; [`render_page`] stitches them together in page order.

use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::content::{
    fallback_avatar, AboutConfig, ContactConfig, FooterConfig, HeroConfig, NavbarConfig,
    ReviewsConfig, ServiceIcon, ServicesConfig, Testimonial, TestimonialsConfig,
};
use crate::nav::MenuState;
use crate::rotator::{Rotator, RotatorLayout};
use crate::{Result, SiteConfig};

/// Browser-side wiring for the rotator controls and the mobile menu. Mirrors
/// the circular arithmetic of [`Rotator`] so the static page stays interactive.
const PAGE_SCRIPT: &str = r#"
document.querySelectorAll('[data-rotator]').forEach(function (root) {
  var items = Array.prototype.slice.call(root.querySelectorAll('[data-rotator-item]'));
  var dots = Array.prototype.slice.call(root.querySelectorAll('[data-rotator-goto]'));
  var visible = parseInt(root.getAttribute('data-visible') || '1', 10);
  var active = parseInt(root.getAttribute('data-active') || '0', 10);
  var len = items.length;
  function show(target) {
    active = ((target % len) + len) % len;
    items.forEach(function (item, i) {
      var slot = (i - active + len) % len;
      item.hidden = slot >= Math.min(visible, len);
      item.style.order = String(slot);
    });
    dots.forEach(function (dot, i) {
      if (i === active) { dot.setAttribute('aria-current', 'true'); } else { dot.removeAttribute('aria-current'); }
      dot.classList.toggle('bg-amber-500', i === active);
      dot.classList.toggle('bg-gray-300', i !== active);
    });
    root.setAttribute('data-active', String(active));
  }
  root.querySelectorAll('[data-rotator-action]').forEach(function (button) {
    button.addEventListener('click', function () {
      show(active + (button.getAttribute('data-rotator-action') === 'next' ? 1 : -1));
    });
  });
  dots.forEach(function (dot) {
    dot.addEventListener('click', function () {
      show(parseInt(dot.getAttribute('data-rotator-goto'), 10));
    });
  });
});
document.querySelectorAll('[data-menu-toggle]').forEach(function (toggle) {
  var menu = document.querySelector('[data-menu]');
  if (!menu) { return; }
  function setOpen(open) {
    menu.hidden = !open;
    toggle.setAttribute('aria-expanded', String(open));
  }
  toggle.addEventListener('click', function () { setOpen(menu.hidden); });
  menu.querySelectorAll('a').forEach(function (link) {
    link.addEventListener('click', function () { setOpen(false); });
  });
});
"#;

/// Which rotator on the page a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorSection {
    Reviews,
    Testimonials,
}

/// Mutable UI state for one rendered page.
#[derive(Debug, Clone)]
pub struct PageState {
    pub menu: MenuState,
    pub reviews: Rotator<Testimonial>,
    /// Present only when the testimonials section is enabled.
    pub testimonials: Option<Rotator<Testimonial>>,
}

impl PageState {
    /// Builds fresh state with every rotator on its first item.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let reviews = Rotator::new(config.reviews.reviews.clone())?;
        let testimonials = if config.testimonials.enabled {
            Some(Rotator::new(config.testimonials.testimonials.clone())?)
        } else {
            None
        };

        Ok(Self {
            menu: MenuState::new(),
            reviews,
            testimonials,
        })
    }

    pub fn rotator(&self, section: RotatorSection) -> Option<&Rotator<Testimonial>> {
        match section {
            RotatorSection::Reviews => Some(&self.reviews),
            RotatorSection::Testimonials => self.testimonials.as_ref(),
        }
    }

    pub fn rotator_mut(&mut self, section: RotatorSection) -> Option<&mut Rotator<Testimonial>> {
        match section {
            RotatorSection::Reviews => Some(&mut self.reviews),
            RotatorSection::Testimonials => self.testimonials.as_mut(),
        }
    }
}

/// Renders the whole page for the given state.
pub fn render_page(config: &SiteConfig, state: &PageState) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.page_title) }
            }
            body class="bg-white min-h-screen" {
                (navbar(&config.navbar, &state.menu))
                main {
                    div class="pt-20" {
                        (hero(&config.hero))
                        (services(&config.services))
                        (reviews(&config.reviews, &state.reviews))
                        @if let Some(rotator) = &state.testimonials {
                            (testimonials(&config.testimonials, rotator))
                        }
                        (about(&config.about))
                        (contact(&config.contact))
                    }
                }
                (footer(&config.footer))
                script { (PreEscaped(PAGE_SCRIPT)) }
            }
        }
    }
}

/// Convenience wrapper: fresh state, rendered straight to a string.
pub fn render_html(config: &SiteConfig) -> Result<String> {
    let state = PageState::from_config(config)?;
    Ok(render_page(config, &state).into_string())
}

pub fn navbar(config: &NavbarConfig, menu: &MenuState) -> Markup {
    let open = menu.is_open();
    html! {
        header class="fixed top-0 left-0 w-full z-50 bg-white shadow-sm" {
            div class="container mx-auto px-4 h-20 flex items-center justify-between" {
                a href="#" class="text-xl font-bold text-gray-800" { (config.logo) }
                nav class="hidden md:block" {
                    ul class="flex" {
                        @for item in &config.menu_items {
                            li {
                                a href=(item.href) class="px-4 py-2 text-gray-700 hover:text-gray-900 transition-colors" {
                                    (item.label)
                                }
                            }
                        }
                    }
                }
                div class="hidden md:block" {
                    a href=(config.cta_link) class="rounded-md px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white" {
                        (config.cta_text)
                    }
                }
                div class="md:hidden" {
                    button type="button" data-menu-toggle aria-label="Toggle menu" aria-expanded=(if open { "true" } else { "false" }) {
                        @if open { "\u{2715}" } @else { "\u{2630}" }
                    }
                }
            }
            div class="md:hidden bg-white border-t py-4 px-4 shadow-md" data-menu hidden[!open] {
                nav class="flex flex-col space-y-4" {
                    @for item in &config.menu_items {
                        a href=(item.href) class="px-4 py-2 text-gray-700 hover:text-gray-900 hover:bg-gray-100 rounded-md transition-colors" {
                            (item.label)
                        }
                    }
                    a href=(config.cta_link) class="rounded-md px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white w-full mt-4 text-center" {
                        (config.cta_text)
                    }
                }
            }
        }
    }
}

pub fn hero(config: &HeroConfig) -> Markup {
    html! {
        section class="w-full min-h-[700px] relative flex items-center py-16 px-4 md:px-8 lg:px-16 overflow-hidden" {
            (backdrop(&config.background_image, "bg-gradient-to-r from-indigo-900/90 to-purple-900/80"))
            div class="max-w-7xl mx-auto w-full grid grid-cols-1 lg:grid-cols-2 gap-12 items-center relative z-10" {
                div class="space-y-6" {
                    div class="space-y-2" {
                        h2 class="text-amber-400 font-medium text-lg" { (config.subtitle) }
                        h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white leading-tight" { (config.title) }
                    }
                    p class="text-gray-100 text-lg max-w-xl" { (config.description) }
                    div class="pt-4" {
                        a href=(config.cta_link) class="rounded-md px-6 py-3 bg-amber-500 hover:bg-amber-600 text-white font-medium" {
                            (config.cta_text) " \u{2192}"
                        }
                    }
                }
                div class="relative h-[400px] lg:h-[500px] rounded-lg overflow-hidden shadow-xl" {
                    img src=(config.image_url) alt=(config.image_alt) class="w-full h-full object-cover";
                }
            }
        }
    }
}

pub fn services(config: &ServicesConfig) -> Markup {
    html! {
        section id="services" class="py-20 bg-gradient-to-b from-gray-50 to-indigo-50" {
            div class="container mx-auto px-4" {
                div class="text-center mb-16" {
                    h2 class="text-3xl md:text-4xl font-bold mb-4 text-gray-900" { (config.title) }
                    p class="text-gray-700 max-w-2xl mx-auto" { (config.subtitle) }
                }
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8" {
                    @for service in &config.services {
                        article class="h-full flex flex-col bg-white rounded-lg border border-gray-200 p-6" data-service-id=(service.id) {
                            div class="mb-4 w-12 h-12 rounded-full bg-amber-100 flex items-center justify-center" {
                                (service_icon(service.icon))
                            }
                            h3 class="text-xl font-bold text-gray-900" { (service.title) }
                            p class="flex-grow text-gray-700" { (service.description) }
                            a href="#contact" class="text-amber-500 text-sm font-medium hover:underline" {
                                "Learn more \u{2192}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Single-item rotator with dot indicators.
pub fn reviews(config: &ReviewsConfig, rotator: &Rotator<Testimonial>) -> Markup {
    let active = rotator.active_index();
    html! {
        section id="client-success-stories" class="py-20 w-full relative overflow-hidden" {
            (backdrop(&config.background_image, "bg-gradient-to-r from-purple-900/80 to-indigo-900/80"))
            div class="max-w-7xl mx-auto px-4 md:px-8 lg:px-16 relative z-10" {
                (section_heading(&config.title, &config.subtitle))
                div class="relative" data-rotator="reviews" data-visible="1" data-active=(active) {
                    div class="bg-white/90 rounded-lg shadow-xl p-8 md:p-12 max-w-4xl mx-auto" {
                        div class="flex flex-col items-center" {
                            @for (index, review) in rotator.items().iter().enumerate() {
                                (review_card(review, index, index != active))
                            }
                            div class="flex justify-center space-x-4" {
                                @for indicator in rotator.indicators() {
                                    button type="button"
                                        class={ "w-3 h-3 rounded-full " (if indicator.selected { "bg-amber-500" } else { "bg-gray-300" }) }
                                        data-rotator-goto=(indicator.index)
                                        aria-current=[indicator.selected.then_some("true")]
                                        aria-label={ "Go to review " (indicator.index + 1) } {}
                                }
                            }
                        }
                    }
                    (rotator_controls("review"))
                }
            }
        }
    }
}

fn review_card(review: &Testimonial, index: usize, hidden: bool) -> Markup {
    let avatar = review
        .avatar_url
        .clone()
        .unwrap_or_else(|| fallback_avatar(&review.author));
    html! {
        article class="w-full" data-rotator-item=(index) hidden[hidden] {
            div class="mb-8" {
                div class="w-20 h-20 rounded-full overflow-hidden border-4 border-amber-300 mx-auto" {
                    img src=(avatar) alt=(review.author) class="w-full h-full object-cover";
                }
            }
            div class="text-center mb-8" {
                p class="text-lg md:text-xl text-gray-800 italic mb-6" {
                    "\u{201c}" (review.quote) "\u{201d}"
                }
                h4 class="font-bold text-gray-900 text-lg" { (review.author) }
                @if let Some(affiliation) = review.affiliation() {
                    p class="text-gray-600" { (affiliation) }
                }
            }
        }
    }
}

/// Multi-item sliding rotator with directional controls.
pub fn testimonials(config: &TestimonialsConfig, rotator: &Rotator<Testimonial>) -> Markup {
    let active = rotator.active_index();
    let len = rotator.len();
    let layout = RotatorLayout::Sliding {
        visible: config.visible,
    };
    let shown = layout.visible_indices(active, len);
    html! {
        section id="testimonials" class="py-16 px-4 md:px-8 lg:px-16 w-full relative overflow-hidden" {
            (backdrop(&config.background_image, "bg-gradient-to-b from-indigo-900/90 to-purple-800/90"))
            div class="max-w-7xl mx-auto relative z-10" {
                (section_heading(&config.title, &config.subtitle))
                div class="relative px-4 md:px-12" data-rotator="testimonials" data-visible=(config.visible) data-active=(active) {
                    div class="flex gap-6" {
                        @for (index, testimonial) in rotator.items().iter().enumerate() {
                            @let slot = (index + len - active) % len;
                            (testimonial_card(testimonial, index, slot, !shown.contains(&index)))
                        }
                    }
                    (rotator_controls("testimonial"))
                }
            }
        }
    }
}

fn testimonial_card(testimonial: &Testimonial, index: usize, slot: usize, hidden: bool) -> Markup {
    html! {
        article class="flex-1 h-full bg-white/95 rounded-lg border border-gray-200 p-6"
            data-rotator-item=(index) style={ "order: " (slot) } hidden[hidden] {
            header class="flex items-center pb-2" {
                div class="h-12 w-12 rounded-full overflow-hidden border-2 border-amber-300 flex items-center justify-center" {
                    @if let Some(url) = &testimonial.avatar_url {
                        img src=(url) alt=(testimonial.author) class="w-full h-full object-cover";
                    } @else {
                        span { (testimonial.initial()) }
                    }
                }
                div class="ml-4" {
                    h4 class="font-semibold text-gray-900" { (testimonial.author) }
                    @if let Some(affiliation) = testimonial.affiliation() {
                        p class="text-sm text-gray-600" { (affiliation) }
                    }
                }
            }
            p class="text-gray-700 italic" { "\u{201c}" (testimonial.quote) "\u{201d}" }
            footer class="pt-2 flex text-amber-500" aria-label="5 out of 5 stars" {
                @for _ in 0..5 {
                    svg class="h-5 w-5 fill-current" viewBox="0 0 20 20" aria-hidden="true" {
                        path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" {}
                    }
                }
            }
        }
    }
}

/// Previous/next buttons. Always enabled: the rotator wraps at both ends.
fn rotator_controls(noun: &str) -> Markup {
    html! {
        button type="button" data-rotator-action="previous"
            class="absolute left-0 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-white rounded-full p-2 shadow-md z-10 md:-left-5"
            aria-label={ "Previous " (noun) } { "\u{2039}" }
        button type="button" data-rotator-action="next"
            class="absolute right-0 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-white rounded-full p-2 shadow-md z-10 md:-right-5"
            aria-label={ "Next " (noun) } { "\u{203a}" }
    }
}

pub fn about(config: &AboutConfig) -> Markup {
    html! {
        section id="about" class="py-20 bg-gradient-to-b from-indigo-50 to-white" {
            div class="container mx-auto px-4 md:px-6" {
                div class="flex flex-col md:flex-row items-center gap-12" {
                    div class="md:w-1/2" {
                        img src=(config.image_url) alt=(config.title) class="rounded-lg shadow-lg w-full h-auto object-cover" style="max-height: 500px";
                    }
                    div class="md:w-1/2" {
                        h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-3" { (config.title) }
                        h3 class="text-xl text-indigo-600 mb-6" { (config.subtitle) }
                        p class="text-gray-700 mb-6 leading-relaxed" { (config.description) }
                        @if !config.expertise.is_empty() {
                            div class="mb-8" {
                                h4 class="text-lg font-semibold mb-3 text-indigo-700" { "Areas of Expertise" }
                                ul class="grid grid-cols-1 md:grid-cols-2 gap-2" {
                                    @for item in &config.expertise {
                                        li class="flex items-center text-gray-700" {
                                            svg class="h-5 w-5 text-amber-500 mr-2" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
                                                path d="M20 6L9 17l-5-5" {}
                                            }
                                            (item)
                                        }
                                    }
                                }
                            }
                        }
                        a href=(config.cta_link) class="rounded-md border px-4 py-2 border-indigo-600 text-indigo-600 hover:bg-indigo-600 hover:text-white transition-colors" {
                            (config.cta_text)
                        }
                    }
                }
            }
        }
    }
}

pub fn contact(config: &ContactConfig) -> Markup {
    let info = &config.contact_info;
    html! {
        section id="contact" class="py-20 bg-white" {
            div class="container mx-auto px-4 text-center" {
                h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4" { (config.title) }
                p class="text-gray-700 max-w-2xl mx-auto mb-8" { (config.subtitle) }
                div class="flex flex-col md:flex-row justify-center gap-6" {
                    @if let Some(email) = &info.email {
                        a href={ "mailto:" (email) } class="text-indigo-600 hover:underline" { (email) }
                    }
                    @if let Some(phone) = &info.phone {
                        a href={ "tel:" (phone) } class="text-indigo-600 hover:underline" { (phone) }
                    }
                }
            }
        }
    }
}

pub fn footer(config: &FooterConfig) -> Markup {
    let year = config.year.unwrap_or_else(|| chrono::Local::now().year());
    let info = &config.contact_info;
    html! {
        footer class="w-full py-12 px-4 md:px-8 lg:px-12 relative" {
            (backdrop(&config.background_image, "bg-indigo-900/90"))
            div class="container mx-auto relative z-10" {
                div class="grid grid-cols-1 md:grid-cols-3 gap-8" {
                    div class="flex flex-col space-y-4" {
                        h3 class="text-xl font-semibold text-white" { (config.company_name) }
                        p class="text-sm text-gray-300" { (config.tagline) }
                        div class="flex space-x-4" {
                            @for (label, url) in config.social_links.entries() {
                                a href=(url) target="_blank" rel="noopener noreferrer" aria-label=(label) class="text-white hover:text-amber-300" {
                                    (label)
                                }
                            }
                        }
                    }
                    div class="flex flex-col space-y-4" {
                        h3 class="text-xl font-semibold text-white" { "Quick Links" }
                        nav {
                            ul class="space-y-2" {
                                @for link in &config.navigation_links {
                                    li {
                                        a href=(link.href) class="text-gray-300 hover:text-amber-300 transition-colors" { (link.label) }
                                    }
                                }
                            }
                        }
                    }
                    div class="flex flex-col space-y-4" {
                        h3 class="text-xl font-semibold text-white" { "Contact Us" }
                        @if let Some(email) = &info.email {
                            a href={ "mailto:" (email) } class="text-gray-300 hover:text-amber-300 transition-colors" { (email) }
                        }
                        @if let Some(phone) = &info.phone {
                            a href={ "tel:" (phone) } class="text-gray-300 hover:text-amber-300 transition-colors" { (phone) }
                        }
                    }
                }
                hr class="my-6 border-indigo-700";
                div class="flex flex-col md:flex-row justify-between items-center" {
                    p class="text-sm text-gray-300" {
                        "\u{a9} " (year) " " (config.company_name) ". All rights reserved."
                    }
                    p class="text-sm text-gray-300 mt-2 md:mt-0" {
                        a href="/privacy-policy" class="hover:text-amber-300" { "Privacy Policy" }
                        " | "
                        a href="/terms-of-service" class="hover:text-amber-300" { "Terms of Service" }
                    }
                }
            }
        }
    }
}

fn backdrop(image: &str, overlay: &str) -> Markup {
    html! {
        div class="absolute inset-0 z-0" {
            img src=(image) alt="" class="w-full h-full object-cover";
            div class={ "absolute inset-0 " (overlay) } {}
        }
    }
}

fn section_heading(title: &str, subtitle: &str) -> Markup {
    html! {
        div class="text-center mb-12" {
            h2 class="text-3xl md:text-4xl font-bold text-white mb-4" { (title) }
            p class="text-lg text-gray-200 max-w-3xl mx-auto" { (subtitle) }
        }
    }
}

fn service_icon(icon: ServiceIcon) -> Markup {
    let paths: &[&str] = match icon {
        ServiceIcon::Strategy => &["M2 5L9 2L15 5L21.5 2V19L15 22L9 19L2.5 22V5"],
        ServiceIcon::Leadership => &[
            "M16 21V19C16 17.9391 15.5786 16.9217 14.8284 16.1716C14.0783 15.4214 13.0609 15 12 15H5C3.93913 15 2.92172 15.4214 2.17157 16.1716C1.42143 16.9217 1 17.9391 1 19V21",
            "M8.5 11C10.7091 11 12.5 9.20914 12.5 7C12.5 4.79086 10.7091 3 8.5 3C6.29086 3 4.5 4.79086 4.5 7C4.5 9.20914 6.29086 11 8.5 11Z",
            "M20 8V14",
            "M23 11H17",
        ],
        ServiceIcon::Organization => &[
            "M12 2L2 7L12 12L22 7L12 2Z",
            "M2 17L12 22L22 17",
            "M2 12L12 17L22 12",
        ],
        ServiceIcon::Change => &[
            "M21 12C21 13.1819 20.7672 14.3522 20.3149 15.4442C19.8626 16.5361 19.1997 17.5282 18.364 18.364C17.5282 19.1997 16.5361 19.8626 15.4442 20.3149C14.3522 20.7672 13.1819 21 12 21C10.8181 21 9.64778 20.7672 8.55585 20.3149C7.46392 19.8626 6.47177 19.1997 5.63604 18.364C4.80031 17.5282 4.13738 16.5361 3.68508 15.4442C3.23279 14.3522 3 13.1819 3 12C3 9.61305 3.94821 7.32387 5.63604 5.63604C7.32387 3.94821 9.61305 3 12 3C14.3869 3 16.6761 3.94821 18.364 5.63604C20.0518 7.32387 21 9.61305 21 12Z",
            "M16 12L12 8",
            "M12 16V8",
        ],
    };
    html! {
        svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true" {
            @for d in paths {
                path d=(d) stroke="#F59E0B" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {}
            }
        }
    }
}

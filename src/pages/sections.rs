use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::contact_form::ContactForm;
use crate::config;
use crate::state::Section;

const PARTICLE_COUNT: usize = 20;
const STAR_COUNT: usize = 100;

/// Inline position and timing for the `i`th decorative dot, without a random source.
///
/// 37 and 53 are coprime with 100, so the first hundred dots land in distinct columns and rows.
pub fn scatter_style(i: usize, max_delay: f64, base_duration: f64) -> String {
    format!(
        "left: {}%; top: {}%; animation-delay: {:.1}s; animation-duration: {:.1}s;",
        (i * 37 + 11) % 100,
        (i * 53 + 7) % 100,
        (i * 7 % 50) as f64 / 50.0 * max_delay,
        base_duration + (i % 5) as f64 * 0.4,
    )
}

/// Fixed background photo with its tint and the twinkling star layer.
#[function_component(Starfield)]
pub fn starfield() -> Html {
    let background = format!("background-image: url('{}');", config::BACKGROUND_URL);
    let stars = (0..STAR_COUNT).map(|i| {
        let style = scatter_style(i, 3.0, 2.0);
        html! { <div key={i} class="star" {style}></div> }
    });

    html! {
        <>
            <div class="home-background" style={background}>
                <div class="home-background-overlay"></div>
            </div>
            <div class="starfield">
                { for stars }
            </div>
        </>
    }
}

/// Button handler that navigates to `target`.
fn go_to(on_navigate: &Callback<Section>, target: Section) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(target);
    })
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let particles = (0..PARTICLE_COUNT).map(|i| {
        let style = scatter_style(i, 5.0, 3.0);
        html! { <div key={i} class="particle" {style}></div> }
    });

    html! {
        <section id={Section::Hero.id()} class="hero">
            <div class="hero-logo">
                <img src={config::LOGO_URL} alt="Galaxy Coffee Co. Logo" />
            </div>
            <div class="particles">
                { for particles }
            </div>

            <div class="hero-content">
                <h2 class="hero-tagline">{"Coffee From Another Galaxy"}</h2>
                <h1 class="hero-title">
                    <span class="gradient-text">{"Welcome to the"}</span>
                    <br />
                    <span>{"Future of Coffee"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Fully autonomous robotic kiosks that serve premium, barista-level beverages 24/7. \
                      No lines, no staffing issues, no inconsistent quality."}
                </p>
                <div class="hero-cta-group">
                    <button class="cta-primary" onclick={go_to(&props.on_navigate, Section::About)}>
                        {"Discover the Future"}
                    </button>
                    <button class="cta-secondary" onclick={go_to(&props.on_navigate, Section::Contact)}>
                        {"Partner With Us"}
                    </button>
                </div>
            </div>

            <button
                class="scroll-down"
                aria-label="Scroll to about"
                onclick={go_to(&props.on_navigate, Section::About)}
            >
                {"⌄"}
            </button>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let cards = [
        ("⚡", "Fully Autonomous", "Advanced automation with Italian-quality brewing in sleek, eye-catching units built to perform anywhere, anytime."),
        ("🕒", "24/7 Availability", "Always open for high-traffic locations. Whether it's morning rush or late-night cravings, we're always ready."),
        ("🛡", "Self-Cleaning", "Meets strict food safety and hygiene standards with automated cleaning systems that maintain perfect conditions."),
    ];

    html! {
        <section id={Section::About.id()} class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        {"We don't just serve coffee."}
                        <br />
                        <span class="gradient-text">{"We serve the future."}</span>
                    </h2>
                    <p>
                        {"At Galaxy Coffee Co., we believe that getting great coffee should be fast, consistent, \
                          and exciting, without long lines, staffing issues, or inconsistent quality."}
                    </p>
                </div>
                <div class="card-grid three">
                    { for cards.iter().map(|(icon, title, text)| html! {
                        <div class="card centered">
                            <div class="icon-box">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let features = [
        ("☕", "70+ Drink Variations", "Hot and iced, real beans, real milk, multiple flavors"),
        ("⚡", "Fully Autonomous", "No staff needed, just power and space"),
        ("🛡", "Self-Cleaning", "Meets strict food safety and hygiene standards"),
        ("🕒", "Always Open", "24/7 availability for high-traffic locations"),
        ("👥", "Social-Media-Ready", "The robotic arm is a showstopper, customers love to film and share"),
    ];

    html! {
        <section id={Section::Features.id()} class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        {"What Is a "}
                        <span class="gradient-text">{"Galaxy Coffee Kiosk?"}</span>
                    </h2>
                    <p>
                        {"Our compact robotic coffee stations combine advanced automation with Italian-quality brewing, \
                          in a sleek, eye-catching unit that's built to perform anywhere, anytime."}
                    </p>
                </div>
                <div class="features-layout">
                    <div class="feature-list">
                        { for features.iter().map(|(icon, title, text)| html! {
                            <div class="feature-row">
                                <div class="icon-box small">{*icon}</div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="machine-showcase">
                        <div class="machine-frame">
                            <img src={config::MACHINE_URL} alt="Galaxy Robot Coffee Machine" loading="lazy" />
                        </div>
                        <p class="machine-caption">
                            {"The Galaxy Coffee Kiosk: Robotic precision, barista-quality taste."}
                        </p>
                        <p class="machine-note">
                            {"Sleek, compact, and futuristic. Designed to stand out in any space."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Locations)]
pub fn locations() -> Html {
    let places = [
        ("📍", "Shopping Centers"),
        ("✈", "Airports"),
        ("🎓", "Universities"),
        ("★", "Hotels & Resorts"),
    ];
    let requirements = [
        ("📍", "~2.5 m² of space", "(≈27 sqft)"),
        ("⚡", "Standard power connection", "No plumbing required"),
        ("🕒", "Daily service", "30 min/day restocking & cleaning"),
    ];

    html! {
        <section id={Section::Locations.id()} class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        {"Perfect for "}
                        <span class="gradient-text">{"Any Location"}</span>
                    </h2>
                    <p>
                        {"Our kiosks are made for high-traffic, tech-friendly environments. Galaxy Coffee brings \
                          added value, customer satisfaction, and innovation to your space."}
                    </p>
                </div>
                <div class="card-grid four">
                    { for places.iter().map(|(icon, title)| html! {
                        <div class="card centered">
                            <div class="icon-box">{*icon}</div>
                            <h3>{*title}</h3>
                        </div>
                    }) }
                </div>
                <div class="card requirements">
                    <h3>{"All we need is:"}</h3>
                    <div class="card-grid three">
                        { for requirements.iter().map(|(icon, title, note)| html! {
                            <div class="requirement">
                                <div class="icon-box round">{*icon}</div>
                                <h4>{*title}</h4>
                                <p>{*note}</p>
                            </div>
                        }) }
                    </div>
                    <p class="requirements-summary">
                        {"That's it. No plumbing. No kitchen. No staff management."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScaleProps {
    pub on_navigate: Callback<Section>,
    pub on_learn_more: Callback<()>,
}

#[function_component(Scale)]
pub fn scale(props: &ScaleProps) -> Html {
    let learn_more = {
        let on_learn_more = props.on_learn_more.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_learn_more.emit(());
        })
    };

    html! {
        <section id={Section::Scale.id()} class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        {"Built to "}
                        <span class="gradient-text">{"Scale"}</span>
                    </h2>
                    <p>
                        {"Galaxy Coffee isn't just a product. It's a brand. Our mission is to build a nationwide \
                          network of premium robotic coffee kiosks, supported by local partners, franchisees, and smart infrastructure."}
                    </p>
                </div>
                <div class="card-grid three">
                    <div class="card centered">
                        <div class="icon-box round">{"📍"}</div>
                        <h3>{"Host a Kiosk"}</h3>
                        <p>{"Transform your space with cutting-edge coffee technology that delights customers and generates revenue."}</p>
                        <button class="card-button learn-more" onclick={learn_more}>{"Learn More"}</button>
                    </div>
                    <div class="card centered">
                        <div class="icon-box round">{"👥"}</div>
                        <h3>{"Franchise Opportunity"}</h3>
                        <p>{"Own your region and build a network of robotic coffee kiosks with our proven business model."}</p>
                        <button class="card-button" onclick={go_to(&props.on_navigate, Section::Contact)}>
                            {"Inquire Now"}
                        </button>
                    </div>
                    <div class="card centered">
                        <div class="icon-box round">{"📈"}</div>
                        <h3>{"Investment Opportunity"}</h3>
                        <p>{"Invest in the future of coffee with low operating costs, high margins, and growing demand."}</p>
                        <button class="card-button" onclick={go_to(&props.on_navigate, Section::Contact)}>
                            {"Get Started"}
                        </button>
                    </div>
                </div>
                <div class="card closing">
                    <p class="closing-pitch">
                        {"With low operating costs, high margins, and growing demand for contactless solutions, \
                          Galaxy Coffee is the perfect concept for the future of food & beverage."}
                    </p>
                    <p class="closing-line">{"Because the future of coffee… isn't human."}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>
                        {"Let's "}
                        <span class="gradient-text">{"Connect"}</span>
                    </h2>
                    <p>
                        {"Interested in partnering or franchising? Let us show you how Galaxy Coffee Co. \
                          can elevate your space and deliver real results."}
                    </p>
                </div>
                <div class="contact-layout">
                    <div class="contact-details">
                        <h3>{"Get in Touch"}</h3>
                        <div class="contact-item">
                            <div class="icon-box">{"✉"}</div>
                            <div>
                                <p class="contact-label">{"Email"}</p>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="icon-box">{"☎"}</div>
                            <div>
                                <p class="contact-label">{"Phone"}</p>
                                <a href={format!("tel:{}", config::CONTACT_PHONE_TEL)}>{config::CONTACT_PHONE_DISPLAY}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <div class="icon-box">{"📍"}</div>
                            <div>
                                <p class="contact-label">{"Address"}</p>
                                <p class="contact-address">
                                    { for config::CONTACT_ADDRESS.iter().map(|line| html! { <>{*line}<br /></> }) }
                                </p>
                            </div>
                        </div>
                    </div>
                    <div class="card">
                        <h3>{"Send us a message"}</h3>
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn percent(style: &str, property: &str) -> u32 {
        let start = style.find(property).unwrap() + property.len();
        let rest = &style[start..];
        rest[..rest.find('%').unwrap()].trim().parse().unwrap()
    }

    #[test]
    fn stars_spread_over_distinct_columns_and_rows() {
        let styles: Vec<_> = (0..STAR_COUNT).map(|i| scatter_style(i, 3.0, 2.0)).collect();
        let lefts: HashSet<_> = styles.iter().map(|s| percent(s, "left:")).collect();
        let tops: HashSet<_> = styles.iter().map(|s| percent(s, "top:")).collect();
        assert_eq!(lefts.len(), STAR_COUNT);
        assert_eq!(tops.len(), STAR_COUNT);
        assert!(lefts.iter().chain(tops.iter()).all(|p| *p < 100));
    }

    #[test]
    fn timing_stays_within_bounds() {
        assert_eq!(
            scatter_style(0, 3.0, 2.0),
            "left: 11%; top: 7%; animation-delay: 0.0s; animation-duration: 2.0s;"
        );
        // i = 7: delay slot 49 of 50, duration step 2 of 5.
        assert_eq!(
            scatter_style(7, 5.0, 3.0),
            "left: 70%; top: 78%; animation-delay: 4.9s; animation-duration: 3.8s;"
        );
    }
}

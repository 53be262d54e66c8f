use yew::prelude::*;

use crate::components::testimonials::TestimonialCarousel;
use crate::config;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "📋",
        title: "Data Entry",
        description: "Fast & accurate data handling with administrative assistance",
    },
    Service {
        icon: "📊",
        title: "Presentation Design",
        description: "Professional slides & business decks that make an impact",
    },
    Service {
        icon: "📧",
        title: "Email Support",
        description: "Efficient inbox management & client communication",
    },
    Service {
        icon: "📈",
        title: "Data Analysis",
        description: "Professional analysis using Excel and Tableau",
    },
];

struct BlogPost {
    title: &'static str,
    date: &'static str,
    excerpt: &'static str,
    image: &'static str,
}

const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Maximizing Productivity with Virtual Assistance",
        date: "March 1, 2024",
        excerpt: "Discover how virtual assistance can transform your workflow and boost productivity...",
        image: "https://images.unsplash.com/photo-1553877522-43269d4ea984?auto=format&fit=crop&w=1950&q=80",
    },
    BlogPost {
        title: "The Future of Remote Work",
        date: "February 15, 2024",
        excerpt: "Exploring the latest trends and technologies shaping the future of remote work...",
        image: "https://images.unsplash.com/photo-1521898284481-a5ec348cb555?auto=format&fit=crop&w=1950&q=80",
    },
    BlogPost {
        title: "Data Analysis Best Practices",
        date: "February 1, 2024",
        excerpt: "Learn the essential techniques for effective data analysis using modern tools...",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=1950&q=80",
    },
];

struct ProcessStep {
    title: &'static str,
    description: &'static str,
}

const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Tell Us What You Need",
        description: "Message us on WhatsApp with the task, the deadline and any reference material.",
    },
    ProcessStep {
        title: "Get a Fixed Quote",
        description: "We reply within the hour with scope, timeline and price. No surprises later.",
    },
    ProcessStep {
        title: "We Get to Work",
        description: "Your assistant handles the task and keeps you posted at every milestone.",
    },
    ProcessStep {
        title: "Review & Deliver",
        description: "You review the result; we revise until you sign off. Then it's yours.",
    },
];

const POLICY_POINTS: &[(&str, &str)] = &[
    ("Confidentiality First", "Every engagement is covered by a signed NDA. Your data never leaves the project."),
    ("Unlimited Revisions", "Deliverables are revised until they match the agreed scope, at no extra cost."),
    ("Transparent Billing", "Fixed quotes up front, itemised invoices after. Pay only for what was agreed."),
];

const BENEFITS: &[&str] = &[
    "24/7 Availability",
    "Cost-Effective Solutions",
    "Quick Turnaround",
    "Professional Expertise",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"VirtualTech"}</h1>
                    <p class="hero-subtitle">
                        {"Streamline your business with our professional virtual assistance services. \
                          We handle the details while you focus on growth."}
                    </p>
                    <a
                        href={config::whatsapp_link()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cta-button"
                    >
                        {"💬 Chat with Us"}
                    </a>
                </div>
            </section>

            <section id="services" class="content-section">
                <h2>{"Our Services"}</h2>
                <div class="card-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div class="service-card" key={service.title}>
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="testimonials" class="content-section">
                <h2>{"What Our Clients Say"}</h2>
                <TestimonialCarousel />
            </section>

            <section id="blog" class="content-section">
                <h2>{"Latest Insights"}</h2>
                <div class="card-grid">
                    {
                        BLOG_POSTS.iter().map(|post| html! {
                            <article class="blog-card" key={post.title}>
                                <img src={post.image} alt={post.title} loading="lazy" />
                                <div class="blog-card-body">
                                    <span class="blog-date">{"📅 "}{post.date}</span>
                                    <h3>{post.title}</h3>
                                    <p>{post.excerpt}</p>
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="process" class="content-section">
                <h2>{"How We Work"}</h2>
                <ol class="process-steps">
                    {
                        PROCESS_STEPS.iter().map(|step| html! {
                            <li class="process-step" key={step.title}>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </li>
                        }).collect::<Html>()
                    }
                </ol>
            </section>

            <section id="policy" class="content-section">
                <h2>{"Our Policy"}</h2>
                <div class="card-grid">
                    {
                        POLICY_POINTS.iter().map(|&(title, body)| html! {
                            <div class="policy-card" key={title}>
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="why-choose-us" class="content-section">
                <h2>{"Why Choose Us?"}</h2>
                <div class="benefit-grid">
                    {
                        BENEFITS.iter().map(|&benefit| html! {
                            <div class="benefit" key={benefit}>
                                <div class="benefit-check">{"✓"}</div>
                                <h3>{benefit}</h3>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section id="contact" class="content-section contact-section">
                <h2>{"Ready to Get Started?"}</h2>
                <p>
                    {"Connect with us now and experience the difference professional \
                      virtual assistance can make."}
                </p>
                <a
                    href={config::whatsapp_link()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="cta-button inverted"
                >
                    {"💬 Chat on WhatsApp"}
                </a>
            </section>

            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #1a1a1a;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 6rem 2rem 4rem;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.3rem;
                        color: #ccc;
                        max-width: 700px;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }
                    .cta-button {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        background: #1E90FF;
                        color: #fff;
                        border-radius: 999px;
                        font-size: 1.1rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .cta-button:hover {
                        background: #187bdb;
                    }
                    .cta-button.inverted {
                        background: #fff;
                        color: #1E90FF;
                    }
                    .content-section {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .content-section h2 {
                        text-align: center;
                        font-size: 2.5rem;
                        margin-bottom: 3rem;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .service-card, .policy-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 12px;
                        padding: 2rem;
                    }
                    .service-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .service-card p, .policy-card p, .blog-card p, .process-step p {
                        color: #999;
                        line-height: 1.6;
                    }
                    .blog-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 12px;
                        overflow: hidden;
                    }
                    .blog-card img {
                        width: 100%;
                        height: 180px;
                        object-fit: cover;
                    }
                    .blog-card-body {
                        padding: 1.5rem;
                    }
                    .blog-date {
                        color: #7EB2FF;
                        font-size: 0.85rem;
                    }
                    .process-steps {
                        max-width: 700px;
                        margin: 0 auto;
                        padding-left: 1.5rem;
                    }
                    .process-step {
                        margin-bottom: 2rem;
                    }
                    .benefit-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 2rem;
                        text-align: center;
                    }
                    .benefit-check {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: rgba(30, 144, 255, 0.15);
                        color: #7EB2FF;
                        font-size: 1.8rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .contact-section {
                        text-align: center;
                    }
                    .contact-section p {
                        color: #ccc;
                        font-size: 1.2rem;
                        max-width: 600px;
                        margin: 0 auto 2.5rem;
                    }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::catalog;
use crate::components::contact::Contact;
use crate::components::growth_tool::GrowthTool;
use crate::components::navbar::link_handler;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let on_navigate = &props.on_navigate;
    let pillars = [
        ("Market Dominance", "Outperform your competition"),
        ("Global Reach", "Fast, modern web engineering"),
        ("Precision SEO", "Focus on ROI-driven traffic"),
    ];

    html! {
        <div class="hero">
            <div class="reveal reveal-up hero-badge" data-reveal="hero-badge">
                <span>{"Scale Beyond Boundaries"}</span>
            </div>
            <h1 class="reveal reveal-up delay-100" data-reveal="hero-title">
                {"GET MORE"}<br/>
                <span class="gradient-text">{"CUSTOMERS."}</span>
            </h1>
            <p class="reveal reveal-up delay-200 hero-subtitle" data-reveal="hero-subtitle">
                {"We bridge the gap between imagination and market dominance with elite web development and hyper-targeted SEO strategy."}
            </p>
            <div class="reveal reveal-up delay-300 hero-actions" data-reveal="hero-actions">
                <a href="#contact" class="hero-cta" onclick={link_handler(on_navigate, "#contact")}>
                    {"Build My Brand"}
                </a>
                <a href="#ai-strategy" class="hero-secondary" onclick={link_handler(on_navigate, "#ai-strategy")}>
                    {"AI Growth Engine ↗"}
                </a>
            </div>
            <div class="hero-pillars">
                { for pillars.iter().enumerate().map(|(i, (title, label))| html! {
                    <div class={classes!("reveal", "reveal-up", "glass-card", format!("delay-{}", (i + 4) * 100))}
                        data-reveal={format!("hero-pillar-{}", i)}>
                        <h3>{*title}</h3>
                        <p>{*label}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let values = [
        ("Radical Transparency", "We don't hide behind jargon. You get clear reports and honest feedback on your growth."),
        ("Relentless Innovation", "We use the latest AI and tech tools to ensure your business stays ahead of the curve."),
        ("Result-First Thinking", "Clicks are nice, but sales are better. Everything we do is measured by your ROI."),
    ];

    html! {
        <div class="section about">
            <div class="reveal reveal-left" data-reveal="about-intro">
                <h2 class="eyebrow">{"Who We Are"}</h2>
                <h3 class="section-title">
                    {"We don't just build sites."}<br/>
                    <span class="gradient-text">{"We build empires."}</span>
                </h3>
                <p class="section-lead">
                    {"Nexus Growth Agency was founded on a simple realization: most businesses are being left behind by slow tech and outdated marketing. We bridge that gap with elite engineering and psychological marketing tactics that demand attention."}
                </p>
                <div class="about-stats">
                    <div class="reveal reveal-up delay-200" data-reveal="about-retention">
                        <p class="stat-value">{"98%"}</p>
                        <p class="stat-label">{"Client Retention"}</p>
                    </div>
                    <div class="reveal reveal-up delay-300" data-reveal="about-roas">
                        <p class="stat-value">{"10x"}</p>
                        <p class="stat-label">{"Average ROAS"}</p>
                    </div>
                </div>
            </div>
            <div class="about-values">
                { for values.iter().enumerate().map(|(i, (title, text))| html! {
                    <div class={classes!("reveal", "reveal-right", "glass-card", format!("delay-{}", (i + 1) * 200))}
                        data-reveal={format!("about-value-{}", i)}>
                        <h4>{*title}</h4>
                        <p>{*text}</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    let on_navigate = &props.on_navigate;

    html! {
        <div class="section">
            <div class="section-header">
                <div class="reveal reveal-left" data-reveal="services-title">
                    <h2 class="eyebrow">{"How We Help You Grow"}</h2>
                    <h3 class="section-title">
                        {"Everything you need to "}<br/>
                        <span class="gradient-text">{"win more clients."}</span>
                    </h3>
                </div>
                <p class="reveal reveal-right section-aside" data-reveal="services-aside">
                    {"No confusing tech talk. Just real results, more customers, and a professional website that works for your business 24/7."}
                </p>
            </div>
            <div class="card-grid">
                { for catalog::services().iter().enumerate().map(|(i, service)| html! {
                    <div class={classes!("reveal", "reveal-up", "glass-card", "service-card", format!("delay-{}", (i % 3) * 100))}
                        data-reveal={format!("service-{}", i)}>
                        <div class="service-icon" style={format!("color: {}", service.accent)}>{"◆"}</div>
                        <h4>{service.title}</h4>
                        <p>{service.description}</p>
                        <button class="service-more" onclick={link_handler(on_navigate, "#contact")}>
                            {"Learn More →"}
                        </button>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogProps {
    pub on_read: Callback<&'static str>,
    pub on_navigate: Callback<String>,
}

#[function_component(Blog)]
pub fn blog(props: &BlogProps) -> Html {
    let BlogProps { on_read, on_navigate } = props;

    html! {
        <div class="section">
            <div class="section-header centered">
                <h2 class="eyebrow emerald">{"Growth Insights"}</h2>
                <h3 class="section-title">
                    {"Expertise shared. "}<br/>
                    <span class="gradient-text">{"Success scaled."}</span>
                </h3>
                <p class="section-lead">
                    {"Professional strategies written by our growth leads to help you understand the digital landscape."}
                </p>
            </div>
            <div class="card-grid">
                { for catalog::articles().iter().map(|article| {
                    let read = {
                        let on_read = on_read.clone();
                        Callback::from(move |_: MouseEvent| on_read.emit(article.id))
                    };
                    let related = {
                        let on_navigate = on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(format!("#{}", article.target)))
                    };
                    html! {
                        <article class="glass-card blog-card" key={article.id}>
                            <span class="blog-category">{article.category}</span>
                            <h4>{article.title}</h4>
                            <p>{article.excerpt}</p>
                            <div class="blog-card-footer">
                                <button class="blog-read" onclick={read}>{"Read Full Guide →"}</button>
                                <button class="blog-related" title="Related Service" onclick={related}>{"↗"}</button>
                            </div>
                        </article>
                    }
                }) }
            </div>
            <div class="blog-talk">
                <button onclick={link_handler(on_navigate, "#contact")}>
                    {"Want a custom strategy for your niche? Let's talk"}
                </button>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class="section">
            <div class="section-header centered">
                <h3 class="section-title">{"Built for Success. Trusted by Leaders."}</h3>
                <p class="section-lead">{"See why fast-growing companies choose Nexus Growth to lead their digital transformation."}</p>
            </div>
            <div class="card-grid">
                { for catalog::testimonials().iter().map(|t| html! {
                    <div class="glass-card testimonial" key={t.name}>
                        <div class="stars">{ t.stars() }</div>
                        <p class="testimonial-quote">{format!("\"{}\"", t.content)}</p>
                        <div class="testimonial-author">
                            <img src={t.image} alt={t.name} loading="lazy" />
                            <div>
                                <h5>{t.name}</h5>
                                <p>{t.role}</p>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub progress: f64,
    pub on_read: Callback<&'static str>,
    pub on_navigate: Callback<String>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let HomeProps { progress, on_read, on_navigate } = props;

    html! {
        <div class="home">
            <div class="scroll-progress" style={format!("width: {:.2}%;", progress)}></div>
            <div class="aurora-sphere sphere-one"></div>
            <div class="aurora-sphere sphere-two"></div>
            <div class="aurora-sphere sphere-three"></div>
            <main>
                <Hero on_navigate={on_navigate.clone()} />
                <section id="about">
                    <About />
                </section>
                <section id="services">
                    <Services on_navigate={on_navigate.clone()} />
                </section>
                <section id="ai-strategy" class="ai-strategy">
                    <GrowthTool />
                </section>
                <section id="blog">
                    <Blog on_read={on_read.clone()} on_navigate={on_navigate.clone()} />
                </section>
                <section id="testimonials">
                    <Testimonials />
                </section>
                <section id="contact">
                    <Contact />
                </section>
            </main>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    height: 4px;
                    z-index: 100;
                    background: linear-gradient(90deg, #6366f1, #a855f7, #ec4899);
                    transition: width 0.15s;
                }
                .aurora-sphere {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(120px);
                    z-index: -1;
                    pointer-events: none;
                }
                .sphere-one { width: 500px; height: 500px; top: -5rem; left: -5rem; background: rgba(79, 70, 229, 0.2); }
                .sphere-two { width: 400px; height: 400px; top: 40%; right: -5rem; background: rgba(147, 51, 234, 0.1); }
                .sphere-three { width: 600px; height: 600px; bottom: -5rem; left: 20%; background: rgba(37, 99, 235, 0.1); }
                .hero {
                    padding: 11rem 2rem 8rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(99, 102, 241, 0.2);
                    color: #a5b4fc;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    margin-bottom: 2.5rem;
                }
                .hero h1 {
                    font-size: clamp(3.5rem, 10vw, 8.5rem);
                    font-weight: 900;
                    line-height: 0.85;
                    letter-spacing: -0.05em;
                    color: #fff;
                    margin-bottom: 2.5rem;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    margin: 0 auto 3.5rem;
                    font-size: 1.25rem;
                    color: #94a3b8;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 1.25rem 3rem;
                    border-radius: 9999px;
                    background: linear-gradient(135deg, #6366f1, #a855f7);
                    color: #fff;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .hero-secondary {
                    color: #fff;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }
                .hero-pillars {
                    margin-top: 10rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    text-align: left;
                }
                .glass-card {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(12px);
                    border-radius: 2.5rem;
                    padding: 2.5rem;
                }
                .gradient-text {
                    font-style: italic;
                    background: linear-gradient(45deg, #818cf8, #c084fc, #f472b6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .section {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                }
                .section-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    margin-bottom: 5rem;
                }
                .section-header.centered {
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .eyebrow {
                    color: #818cf8;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .eyebrow.emerald {
                    color: #34d399;
                }
                .section-title {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: #fff;
                    letter-spacing: -0.05em;
                    line-height: 1.1;
                }
                .section-lead, .section-aside {
                    color: #64748b;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    max-width: 36rem;
                }
                .about {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }
                .about-stats {
                    display: flex;
                    gap: 2.5rem;
                }
                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 900;
                    color: #fff;
                }
                .stat-label {
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #64748b;
                }
                .about-values {
                    display: grid;
                    gap: 1.5rem;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .glass-card h4, .glass-card h3 {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .glass-card p {
                    color: #64748b;
                    line-height: 1.6;
                }
                .service-more, .blog-read, .blog-related, .blog-talk button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 11px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .service-more {
                    margin-top: 2rem;
                    color: #818cf8;
                }
                .blog-card {
                    display: flex;
                    flex-direction: column;
                }
                .blog-category {
                    width: fit-content;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    color: #34d399;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(16, 185, 129, 0.1);
                    margin-bottom: 1.5rem;
                }
                .blog-card p {
                    flex-grow: 1;
                }
                .blog-card-footer {
                    display: flex;
                    justify-content: space-between;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .blog-read {
                    color: #fff;
                }
                .blog-related {
                    color: #475569;
                    font-size: 1rem;
                }
                .blog-talk {
                    margin-top: 5rem;
                    text-align: center;
                }
                .blog-talk button {
                    color: #64748b;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding-bottom: 0.25rem;
                }
                .stars {
                    color: #fbbf24;
                    margin-bottom: 1.5rem;
                }
                .testimonial-quote {
                    font-style: italic;
                    margin-bottom: 2rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 2px solid rgba(99, 102, 241, 0.2);
                }
                .testimonial-author h5 {
                    color: #fff;
                    font-weight: 700;
                }
                .reveal {
                    opacity: 0;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .reveal-up { transform: translateY(40px); }
                .reveal-left { transform: translateX(-40px); }
                .reveal-right { transform: translateX(40px); }
                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }
                .delay-100 { transition-delay: 0.1s; }
                .delay-200 { transition-delay: 0.2s; }
                .delay-300 { transition-delay: 0.3s; }
                .delay-400 { transition-delay: 0.4s; }
                .delay-500 { transition-delay: 0.5s; }
                .delay-600 { transition-delay: 0.6s; }
                @media (max-width: 768px) {
                    .hero-pillars, .card-grid, .about {
                        grid-template-columns: 1fr;
                    }
                    .section-header {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </div>
    }
}

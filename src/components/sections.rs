use yew::prelude::*;

use crate::config;
use crate::content::{self, Testimonial};
use crate::state::nav::Section;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1>{"Professional Painting Services You Can Trust"}</h1>
                    <p class="sub">
                        {"Serving Dublin and nearby towns with precision, care, and color — interiors, commercial spaces, and select exterior projects."}
                    </p>
                    <p class="meta">{"Your space, your vision, our brush."}</p>
                    <div class="hero-ctas">
                        <a class="btn btn-primary" href={Section::Contact.anchor()}>{"Request a Free Estimate"}</a>
                        <a class="btn btn-outline" href={Section::Portfolio.anchor()}>{"See Our Work"}</a>
                    </div>
                </div>
                <div class="hero-image" aria-hidden="true">
                    <img src={config::HERO_IMAGE_PATH} class="hero-pic" alt="" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <>
            <section id={Section::Services.id()} class="services container">
                <h2>{"Services"}</h2>
                <p class="lead">{"We offer a wide range of painting services, tailored to your project."}</p>
                <div class="cards">
                    {
                        for content::SERVICES.iter().map(|service| html! {
                            <article class="card">
                                <div class="card-ico">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                            </article>
                        })
                    }
                </div>
            </section>

            <section class="why container">
                <h2>{"Why Choose Us"}</h2>
                <div class="features">
                    {
                        for content::FEATURES.iter().map(|(path, label)| html! {
                            <div class="feature">
                                <svg class="feat-ico" viewBox="0 0 24 24">
                                    <path fill="currentColor" d={*path} />
                                </svg>
                                <h4>{*label}</h4>
                            </div>
                        })
                    }
                </div>
            </section>
        </>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id={Section::Portfolio.id()} class="portfolio container">
            <h2>{"Our Portfolio"}</h2>
            <p class="lead">{"Before & afters — examples of recent projects."}</p>
            <div class="gallery">
                {
                    for content::GALLERY.iter().map(|(fill, caption)| html! {
                        <figure class="thumb">
                            <svg viewBox="0 0 400 260" preserveAspectRatio="xMidYMid slice">
                                <rect width="100%" height="100%" fill={*fill} />
                            </svg>
                            <figcaption>{*caption}</figcaption>
                        </figure>
                    })
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewsProps {
    pub testimonials: &'static [Testimonial],
    pub active: usize,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    html! {
        <section id={Section::Reviews.id()} class="testimonials container">
            <h2>{"What Clients Say"}</h2>
            <div class="testi-wrap">
                {
                    for props.testimonials.iter().enumerate().map(|(i, t)| html! {
                        <div key={i.to_string()} class={classes!("testi", (i == props.active).then(|| "active"))}>
                            <blockquote>{t.quote}</blockquote>
                            <cite>{t.author}</cite>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(CtaBanner)]
pub fn cta_banner() -> Html {
    html! {
        <section class="cta-banner">
            <div class="container cta-inner">
                <h3>{"Ready to transform your home or business?"}</h3>
                <a class="btn btn-primary" href={Section::Contact.anchor()}>{"Get Your Free Quote Today"}</a>
            </div>
        </section>
    }
}

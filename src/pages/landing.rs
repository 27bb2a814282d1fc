use leptos::prelude::*;

use crate::components::{ContactForm, SiteImage};
use crate::models::content::{
    ACHIEVEMENTS, FEATURES, PROBLEMS, TESTIMONIALS, TESTIMONIAL_BODY,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <Hero/>
            <Problems/>
            <Features/>
            <Results/>
            <Testimonials/>

            <section id="contact-form" class="section contact">
                <h2>"お問い合わせ"</h2>
                <ContactForm/>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <h1>
                    "転職前に知っておくべき"
                    <span class="accent">"\"3つの準備\""</span>
                    "とは？"
                </h1>
                <p class="subtitle">"プロのキャリアアドバイザーが無料でアドバイス"</p>
                <p class="description">"オンライン・オフライン両対応 あなたの都合に合わせて徹底サポート"</p>
                <div class="cta-buttons">
                    <a href="#contact-form" class="btn btn-primary">"無料で相談する"</a>
                </div>
            </div>
            <div class="hero-image">
                <SiteImage src="/images/FV.png" alt="転職から天職へ向かうビジネスマン" eager=true/>
            </div>
        </section>
    }
}

#[component]
fn Problems() -> impl IntoView {
    view! {
        <section class="section problems">
            <h2>"転職の失敗例"</h2>
            <div class="card-grid">
                {PROBLEMS
                    .iter()
                    .map(|problem| view! { <div class="card problem"><p>{*problem}</p></div> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section features">
            <h2>"サービスの特徴"</h2>
            <div class="card-grid">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="card feature">
                                <h3>{feature.title}</h3>
                                <ul>
                                    {feature.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                </ul>
                                {feature.highlight.map(|h| view! { <p class="highlight">{h}</p> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Results() -> impl IntoView {
    view! {
        <section class="section results">
            <h2>"実績紹介"</h2>
            <div class="card-grid">
                {ACHIEVEMENTS
                    .iter()
                    .map(|a| {
                        view! {
                            <div class="card result">
                                <SiteImage src="/images/badge.png" alt="Gold Badge" class="badge"/>
                                <p class="figure">{a.figure}</p>
                                <p class="caption">{a.caption}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="section testimonials">
            <h2>"利用者の声"</h2>
            <div class="card-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <div class="card testimonial">
                                <div class="testimonial-header">
                                    <p class="label">{t.label}</p>
                                    <p class="role">{t.role}</p>
                                </div>
                                <p>{TESTIMONIAL_BODY}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

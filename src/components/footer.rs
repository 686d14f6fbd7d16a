//! Footer: newsletter call-out, social links, link columns, partners and
//! the legal strip. Purely presentational, content comes from `content`.

use yew::prelude::*;

use crate::content::{FOOTER_COLUMNS, FOOTER_LEGAL_LINKS, FOOTER_LEGAL_TEXT, PARTNERS, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="newsletter">
                <div class="newsletter-logo">
                    <svg width="56" height="56" viewBox="0 0 56 56" fill="none">
                        <circle cx="28" cy="28" r="26" stroke="white" stroke-width="2"/>
                        <path d="M28 6C15 6 6 15 6 28C6 41 15 50 28 50V6Z" fill="white"/>
                    </svg>
                </div>
                <h2>{"Subscribe to our newsletter"}</h2>
                <p>{"New products and latest trends from lighting."}</p>
                <button class="subscribe-btn">{"Subscribe"}</button>
            </div>

            <div class="footer-columns">
                <div class="footer-column social-column">
                    <ul class="social-links">
                        {
                            SOCIAL_LINKS.iter().map(|name| html! {
                                <li key={*name}>
                                    <a href="#">
                                        <span class="social-dot"></span>
                                        { *name }
                                    </a>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                {
                    FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.title} class="footer-column">
                            <h4>{ column.title }</h4>
                            <ul>
                                {
                                    column.links.iter().map(|link| html! {
                                        <li key={*link}><a href="#">{ *link }</a></li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class="partners">
                {
                    PARTNERS.iter().map(|partner| html! {
                        <span key={*partner} class="partner">{ *partner }</span>
                    }).collect::<Html>()
                }
            </div>

            <div class="footer-bottom">
                <p class="legal-text">{ FOOTER_LEGAL_TEXT }</p>
                <div class="legal-links">
                    {
                        FOOTER_LEGAL_LINKS.iter().map(|link| html! {
                            <a key={*link} href="#">{ *link }</a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .footer {
        padding: 96px 24px 32px;
        background: #000;
        border-top: 1px solid rgba(255, 255, 255, 0.06);
    }
    .newsletter {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 12px;
        max-width: 520px;
        margin: 0 auto 80px;
        text-align: center;
    }
    .newsletter h2 {
        margin: 8px 0 0;
        font-size: clamp(1.4rem, 2.4vw, 2rem);
        font-weight: 700;
        letter-spacing: -0.02em;
        color: #fff;
    }
    .newsletter p {
        margin: 0;
        font-size: 0.92rem;
        color: rgba(255, 255, 255, 0.45);
    }
    .subscribe-btn {
        margin-top: 12px;
        padding: 10px 28px;
        border: 1px solid rgba(255, 255, 255, 0.9);
        border-radius: 9px;
        background: #fff;
        color: #000;
        font-size: 0.88rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.3s ease, transform 0.3s ease;
    }
    .subscribe-btn:hover {
        background: rgba(255, 255, 255, 0.9);
        transform: translateY(-1px);
    }
    .footer-columns {
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 32px;
        max-width: 1280px;
        margin: 0 auto 64px;
    }
    .footer-column h4 {
        margin: 0 0 16px;
        font-size: 0.85rem;
        font-weight: 600;
        letter-spacing: 0.06em;
        text-transform: uppercase;
        color: rgba(255, 255, 255, 0.8);
    }
    .footer-column ul {
        list-style: none;
        margin: 0;
        padding: 0;
        display: flex;
        flex-direction: column;
        gap: 10px;
    }
    .footer-column a {
        font-size: 0.85rem;
        color: rgba(255, 255, 255, 0.45);
        text-decoration: none;
        transition: color 0.25s ease;
    }
    .footer-column a:hover { color: #fff; }
    .social-links a {
        display: inline-flex;
        align-items: center;
        gap: 8px;
    }
    .social-dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        transition: background 0.25s ease;
    }
    .social-links a:hover .social-dot { background: #fff; }
    .partners {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 48px;
        max-width: 1280px;
        margin: 0 auto 48px;
        padding: 32px 0;
        border-top: 1px solid rgba(255, 255, 255, 0.06);
        border-bottom: 1px solid rgba(255, 255, 255, 0.06);
    }
    .partner {
        font-size: 1rem;
        font-weight: 700;
        letter-spacing: 0.08em;
        color: rgba(255, 255, 255, 0.3);
    }
    .footer-bottom {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: space-between;
        gap: 16px;
        max-width: 1280px;
        margin: 0 auto;
    }
    .legal-text {
        max-width: 720px;
        margin: 0;
        font-size: 0.72rem;
        line-height: 1.6;
        color: rgba(255, 255, 255, 0.3);
    }
    .legal-links {
        display: flex;
        flex-wrap: wrap;
        gap: 18px;
    }
    .legal-links a {
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.4);
        text-decoration: none;
        transition: color 0.25s ease;
    }
    .legal-links a:hover { color: #fff; }
    @media (max-width: 1024px) {
        .footer-columns { grid-template-columns: repeat(2, 1fr); }
    }
    @media (max-width: 640px) {
        .footer-columns { grid-template-columns: 1fr; }
        .partners { gap: 24px; flex-wrap: wrap; }
    }
"#;

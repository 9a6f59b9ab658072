use yew::prelude::*;

const PORTRAIT_HOVER_STYLE: &str =
    "transform: scale(1.05) translateY(-10px); box-shadow: 0 20px 60px rgba(10, 37, 64, 0.25);";
const PORTRAIT_REST_STYLE: &str =
    "transform: scale(1) translateY(0); box-shadow: 0 10px 30px rgba(10, 37, 64, 0.12);";

const PARTNER_HOVER_STYLE: &str =
    "transform: translateY(-8px); box-shadow: 0 15px 50px rgba(147, 112, 219, 0.15);";
const PARTNER_REST_STYLE: &str =
    "transform: translateY(0); box-shadow: 0 6px 20px rgba(10, 37, 64, 0.08);";

const TRUST_MARKS: [&str; 4] = [
    "Fiduciary by charter",
    "Independent custody",
    "Capital preserved first",
    "Advice without commissions",
];

const PILLARS: [(&str, &str); 3] = [
    (
        "Safeguard",
        "Client assets sit with independent custodians and are reconciled every day.",
    ),
    (
        "Steward",
        "Each portfolio is run to a written mandate agreed with the family it serves.",
    ),
    (
        "Report",
        "Positions, fees and decisions are reported in plain language every quarter.",
    ),
];

const APPROACH_POINTS: [(&str, &str); 3] = [
    (
        "Listen first",
        "An engagement starts with the family's obligations and horizon, not a product sheet.",
    ),
    (
        "Plan in decades",
        "Allocations are set for the next generation and rebalanced without drama.",
    ),
    (
        "Act with restraint",
        "Turnover is low by intent. A decision not taken is reported like one that was.",
    ),
];

const CREDENTIALS: [(&str, &str); 4] = [
    ("Chartered 1987", "Privately held since the founding partnership"),
    ("SEC registered", "Investment adviser, fiduciary standard"),
    ("$4.2B under care", "For one hundred and twelve families"),
    ("Zero sales targets", "Advisers are salaried, never commissioned"),
];

const PARTNERS: [(&str, &str); 3] = [
    ("Northstone Custody", "Independent custodian"),
    ("Laurel & Pike LLP", "External audit"),
    ("Cobalt Clearing", "Trade execution"),
];

#[function_component(TrustBand)]
pub fn trust_band() -> Html {
    html! {
        <div class="trust-band">
            {
                TRUST_MARKS.iter().map(|mark| html! {
                    <div class="trust-mark">{ *mark }</div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let portrait_hovered = use_state_eq(|| false);
    let onmouseenter = {
        let portrait_hovered = portrait_hovered.clone();
        Callback::from(move |_: MouseEvent| portrait_hovered.set(true))
    };
    let onmouseleave = {
        let portrait_hovered = portrait_hovered.clone();
        Callback::from(move |_: MouseEvent| portrait_hovered.set(false))
    };

    html! {
        <section id="about" class="about">
            <div class="about-intro">
                <h2>{ "A private bank that answers to you" }</h2>
                <p>
                    { "Meridian acts as your family's banking agent. We underwrite \
                       nothing and sell nothing of our own, so every recommendation \
                       can be judged on one question only: is it right for you." }
                </p>
                <img
                    class="advisor-portrait"
                    src="/assets/advisor-portrait.jpg"
                    alt="A Meridian senior adviser"
                    style={if *portrait_hovered { PORTRAIT_HOVER_STYLE } else { PORTRAIT_REST_STYLE }}
                    onmouseenter={onmouseenter}
                    onmouseleave={onmouseleave}
                />
            </div>
            <div class="pillar-grid">
                {
                    PILLARS.iter().map(|(title, body)| html! {
                        <div class="pillar-card">
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Approach)]
pub fn approach() -> Html {
    html! {
        <section id="approach" class="approach">
            <h2>{ "How we work" }</h2>
            {
                APPROACH_POINTS.iter().map(|(title, body)| html! {
                    <div class="approach-point">
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </div>
                }).collect::<Html>()
            }
        </section>
    }
}

#[function_component(Credentials)]
pub fn credentials() -> Html {
    html! {
        <section id="credentials" class="credentials">
            <h2>{ "On the record" }</h2>
            <div class="credential-grid">
                {
                    CREDENTIALS.iter().map(|(fact, detail)| html! {
                        <div class="credential-item">
                            <h3>{ *fact }</h3>
                            <p>{ *detail }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PartnerCardProps {
    name: &'static str,
    role: &'static str,
}

#[function_component(PartnerCard)]
fn partner_card(props: &PartnerCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class="partner-card"
            style={if *hovered { PARTNER_HOVER_STYLE } else { PARTNER_REST_STYLE }}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <h3>{ props.name }</h3>
            <p>{ props.role }</p>
        </div>
    }
}

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <section id="partners" class="partners">
            <h2>{ "Working alongside" }</h2>
            <div class="partner-grid">
                {
                    PARTNERS.iter().map(|(name, role)| html! {
                        <PartnerCard name={*name} role={*role} />
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

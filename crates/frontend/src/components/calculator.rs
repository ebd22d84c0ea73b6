use dioxus::prelude::*;
use dioxus::core::Task;
use gloo_timers::future::TimeoutFuture;
use oslo_shared::format::{format_change, format_nok, group_thousands};
use oslo_shared::models::DistrictInfo;
use oslo_shared::valuation::{
    apply_area_input, estimate_value, price_per_sqm, step_area, Condition, DwellingType, DEFAULT_AREA_SQM,
};

use crate::coords;

const AREA_INPUT_ID: &str = "calculator-area";

/// Cosmetic "analysing" pause before the estimate is shown.
const CALCULATION_DELAY_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Estimate {
    value: u64,
    area_sqm: u32,
}

const OFFER_POINTS: [&str; 3] = [
    "Uforpliktende møte",
    "Motta tips og råd",
    "Sett av 30 \u{2013} 60 minutter",
];

#[component]
pub fn Calculator(
    district: DistrictInfo,
    districts: Vec<DistrictInfo>,
    on_district_change: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut dwelling = use_signal(DwellingType::default);
    let mut area = use_signal(|| DEFAULT_AREA_SQM);
    let mut area_text = use_signal(|| DEFAULT_AREA_SQM.to_string());
    let mut condition = use_signal(Condition::default);
    let mut estimate = use_signal(|| None::<Estimate>);
    let mut pending = use_signal(|| None::<Task>);

    let price = district.price_per_sqm;
    let trend = format_change(district.price_change);
    let calculating = pending.read().is_some();

    let mut cancel_pending = move || {
        if let Some(task) = pending.take() {
            task.cancel();
        }
    };

    let on_calculate = move |_| {
        cancel_pending();
        estimate.set(None);
        let area_sqm = *area.read();
        let value = estimate_value(price, *dwelling.read(), area_sqm, *condition.read());
        let task = spawn(async move {
            TimeoutFuture::new(CALCULATION_DELAY_MS).await;
            tracing::debug!(value, area_sqm, "valuation ready");
            estimate.set(Some(Estimate { value, area_sqm }));
            pending.set(None);
        });
        pending.set(Some(task));
    };

    let result = *estimate.read();

    rsx! {
        div { class: "calculator",
            div { class: "calculator-header",
                div {
                    h2 { "Verdikalkulator" }
                    p { "Boligestimat for "
                        span { class: "accent", "{district.name}" }
                    }
                }
                button {
                    class: "close-button",
                    "aria-label": "Lukk",
                    onclick: move |_| {
                        cancel_pending();
                        on_close.call(());
                    },
                    "\u{2715}"
                }
            }

            div { class: "calculator-body",
                div { class: if result.is_some() { "calculator-form has-result" } else { "calculator-form" },
                    div { class: "field-row",
                        div { class: "field",
                            label { "Bydel" }
                            select {
                                value: "{district.id}",
                                onchange: move |evt: Event<FormData>| {
                                    cancel_pending();
                                    estimate.set(None);
                                    on_district_change.call(evt.value());
                                },
                                for d in districts.iter().filter(|d| !d.is_city_total()) {
                                    option {
                                        value: "{d.id}",
                                        selected: d.id == district.id,
                                        "{d.name}"
                                    }
                                }
                            }
                        }
                        div { class: "field",
                            label { "Areal" }
                            div { class: "area-input",
                                input {
                                    id: AREA_INPUT_ID,
                                    r#type: "text",
                                    inputmode: "decimal",
                                    value: "{area_text}",
                                    oninput: move |evt: Event<FormData>| {
                                        let raw = evt.value();
                                        let previous = *area.read();
                                        let (next, text) = apply_area_input(previous, &raw);
                                        if text != raw {
                                            coords::set_input_value(AREA_INPUT_ID, &text);
                                        }
                                        area.set(next);
                                        area_text.set(text);
                                    },
                                }
                                span { "m²" }
                                div { class: "stepper",
                                    button {
                                        "aria-label": "Øk areal",
                                        onclick: move |_| {
                                            let next = step_area(*area.read(), true);
                                            area.set(next);
                                            area_text.set(next.to_string());
                                        },
                                        "\u{25B4}"
                                    }
                                    button {
                                        "aria-label": "Reduser areal",
                                        onclick: move |_| {
                                            let next = step_area(*area.read(), false);
                                            area.set(next);
                                            area_text.set(next.to_string());
                                        },
                                        "\u{25BE}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "field",
                        label { "Boligtype" }
                        div { class: "option-grid four",
                            for t in DwellingType::ALL {
                                button {
                                    key: "{t}",
                                    class: if *dwelling.read() == t { "option active" } else { "option" },
                                    title: "{t}",
                                    onclick: move |_| dwelling.set(t),
                                    "{t.short_label()}"
                                }
                            }
                        }
                    }

                    div { class: "field",
                        label { "Standard" }
                        div { class: "option-grid three",
                            for c in Condition::ALL {
                                button {
                                    key: "{c}",
                                    class: if *condition.read() == c { "option active" } else { "option" },
                                    title: "{c}",
                                    onclick: move |_| condition.set(c),
                                    "{c.short_label()}"
                                }
                            }
                        }
                    }

                    button {
                        class: "primary-button",
                        disabled: calculating,
                        onclick: on_calculate,
                        if calculating { "Analyserer..." } else { "Beregn verdi" }
                    }
                }

                div { class: "calculator-result",
                    if let Some(est) = result {
                        div { class: "result-ready",
                            span { class: "badge", "Beregning klar" }
                            h4 { "Ditt verdiestimat" }
                            div { class: "result-value", "{format_nok(est.value)}" }
                            div { class: "result-grid",
                                if let Some(per_sqm) = price_per_sqm(est.value, est.area_sqm) {
                                    div { class: "stat",
                                        span { class: "stat-label", "Pris/m²" }
                                        span { class: "stat-value", "{group_thousands(per_sqm)}" }
                                    }
                                }
                                div { class: "stat",
                                    span { class: "stat-label", "Trend" }
                                    span { class: "stat-value up", "{trend}" }
                                }
                            }
                            div { class: "result-offer",
                                h4 { "Trenger du en verdivurdering?" }
                                p { "Jeg hjelper deg med en kostnadsfri e-takst av boligen din" }
                                ul {
                                    for point in OFFER_POINTS {
                                        li { "{point}" }
                                    }
                                }
                            }
                            button { class: "secondary-button", "Få en presis verdivurdering" }
                            button {
                                class: "link-button",
                                onclick: move |_| estimate.set(None),
                                "Endre detaljer"
                            }
                        }
                    } else {
                        div { class: "result-empty",
                            h4 { "Resultat" }
                            p { "Verdiestimatet ditt dukker opp her når du har fylt ut detaljene." }
                        }
                    }
                }
            }
        }
    }
}

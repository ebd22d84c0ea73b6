use dioxus::prelude::*;
use oslo_shared::format::{format_amount, format_change, format_millions};
use oslo_shared::models::{CityAverages, DistrictInfo};

/// Label/value pairs for the stat grid.
fn district_stats(d: &DistrictInfo) -> [(&'static str, String); 4] {
    [
        ("Prisendring", format_change(d.price_change)),
        ("Salgstid", format!("{:.0} dager", d.avg_days_on_market)),
        ("Pris/m²", format!("{} kr", format_amount(d.price_per_sqm))),
        ("Medianpris", format_millions(d.median_price / 1_000_000.0)),
    ]
}

fn city_stats(a: &CityAverages) -> [(&'static str, String); 4] {
    [
        ("Prisendring", format_change(a.price_trend)),
        ("Salgstid", format!("{:.0} dager", a.days_on_market)),
        ("Pris/m²", format!("{} kr", format_amount(a.avg_sqm_price))),
        ("Medianpris", format_millions(a.median_price)),
    ]
}

#[component]
pub fn DistrictStats(
    district: Option<DistrictInfo>,
    averages: CityAverages,
    expanded: bool,
    on_open_calculator: EventHandler<()>,
) -> Element {
    let Some(d) = district else {
        let stats = city_stats(&averages);
        return rsx! {
            div { class: "district-stats idle",
                div { class: "stats-heading",
                    h3 { "Oslo" }
                    p { class: "hint", "Velg en bydel i kartet for detaljer" }
                }
                div { class: "stat-grid",
                    for (label, value) in stats {
                        div { class: "stat",
                            span { class: "stat-label", "{label}" }
                            span { class: "stat-value", "{value}" }
                        }
                    }
                }
            }
        };
    };

    let stats = district_stats(&d);
    let trend_class = if d.price_change >= 0.0 { "stat-value up" } else { "stat-value down" };

    rsx! {
        div { class: "district-stats",
            div { class: "stats-heading",
                h3 { "{d.name}" }
            }
            div { class: "stat-grid",
                for (i, (label, value)) in stats.into_iter().enumerate() {
                    div { class: "stat",
                        span { class: "stat-label", "{label}" }
                        span {
                            class: if i == 0 { trend_class } else { "stat-value" },
                            "{value}"
                        }
                    }
                }
            }
            if expanded {
                p { class: "district-description", "{d.description}" }
                button {
                    class: "primary-button",
                    onclick: move |_| on_open_calculator.call(()),
                    "Beregn boligverdi"
                }
            }
        }
    }
}

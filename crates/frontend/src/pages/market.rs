use dioxus::prelude::*;
use oslo_shared::models::DistrictInfo;
use oslo_shared::shell::ShellState;

use crate::components::calculator::Calculator;
use crate::components::district_stats::DistrictStats;
use crate::components::header::Header;
use crate::components::map_controls::MapControls;
use crate::components::map_view::{use_map_controller, MapView};
use crate::components::right_panel::RightPanel;
use crate::hooks;

const DEFAULT_TAGLINE: &str = "Er det kjøper eller selgers marked i Oslo nå?";

/// Heading and lead text for the current selection.
fn page_title(selected: Option<&DistrictInfo>) -> (String, String) {
    match selected {
        Some(d) => (format!("Boligmarkedet i {}", d.name), d.description.clone()),
        None => ("Boligmarkedet i Oslo".to_string(), DEFAULT_TAGLINE.to_string()),
    }
}

#[component]
pub fn Market() -> Element {
    let districts = hooks::use_districts();
    let posts = hooks::use_blog_posts();
    let averages = hooks::use_city_averages();
    let site_config = hooks::use_site_config();

    let mut shell = use_signal(ShellState::default);
    let controller = use_map_controller();

    let all_districts = districts.read().clone();
    let state = shell.read().clone();
    let selected = state.selected_district(&all_districts).cloned();
    let (title, lead) = page_title(selected.as_ref());

    let calculator_district = selected.clone().filter(|_| state.show_calculator);

    rsx! {
        div { class: "page",
            Header { config: site_config.read().clone() }

            main { class: "market",
                section { class: "market-main",
                    div { class: "market-heading",
                        h1 { "{title}" }
                        p { class: "lead", "{lead}" }
                    }

                    div { class: "map-card",
                        MapView {
                            controller,
                            districts: all_districts.clone(),
                            selected_id: state.selected_district_id.clone(),
                            on_select: move |id: String| shell.write().select_district(&id),
                        }
                        MapControls { controller, shell }

                        div { class: if state.expanded { "stats-drawer expanded" } else { "stats-drawer" },
                            if selected.is_some() {
                                button {
                                    class: "drawer-toggle",
                                    "aria-label": if state.expanded { "Skjul detaljer" } else { "Vis detaljer" },
                                    onclick: move |_| shell.write().toggle_expand(),
                                    if state.expanded { "\u{25BE}" } else { "\u{25B4}" }
                                }
                            }
                            DistrictStats {
                                district: selected.clone(),
                                averages: *averages.read(),
                                expanded: state.expanded,
                                on_open_calculator: move |_| shell.write().open_calculator(),
                            }
                        }
                    }

                    if let Some(district) = calculator_district {
                        div { class: "calculator-overlay",
                            Calculator {
                                district,
                                districts: all_districts.clone(),
                                on_district_change: move |id: String| shell.write().change_calculator_district(&id),
                                on_close: move |_| shell.write().close_calculator(),
                            }
                        }
                    }
                }

                RightPanel {
                    posts: posts.read().clone(),
                    config: site_config.read().clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oslo_shared::fallbacks;

    #[test]
    fn test_title_without_selection() {
        let (title, lead) = page_title(None);
        assert_eq!(title, "Boligmarkedet i Oslo");
        assert_eq!(lead, DEFAULT_TAGLINE);
    }

    #[test]
    fn test_title_follows_selected_district() {
        let districts = fallbacks::districts();
        let d = &districts[1];
        let (title, lead) = page_title(Some(d));
        assert_eq!(title, format!("Boligmarkedet i {}", d.name));
        assert_eq!(lead, d.description);
    }
}

use dioxus::prelude::*;
use oslo_shared::map::MapHandle;
use oslo_shared::shell::ShellState;
use oslo_shared::theme::TileTheme;

use crate::components::map_view::MapController;

#[component]
pub fn MapControls(controller: MapController, shell: Signal<ShellState>) -> Element {
    // Mutable bindings for the click handlers (both are Copy)
    let mut controller = controller;
    let mut shell = shell;
    let menu_open = shell.read().layer_menu_open;
    let active_theme = controller.theme();

    rsx! {
        div { class: "map-controls",
            button {
                class: "map-control",
                "aria-label": "Zoom inn",
                onclick: move |_| controller.zoom_in(),
                "+"
            }
            button {
                class: "map-control",
                "aria-label": "Zoom ut",
                onclick: move |_| controller.zoom_out(),
                "\u{2212}"
            }
            div { class: "layer-switch",
                button {
                    class: if menu_open { "map-control active" } else { "map-control" },
                    "aria-label": "Kartlag",
                    onclick: move |_| shell.write().toggle_layer_menu(),
                    "\u{25A4}"
                }
                if menu_open {
                    div { class: "layer-menu",
                        for theme in TileTheme::ALL {
                            button {
                                key: "{theme.key()}",
                                class: if theme == active_theme { "layer-option active" } else { "layer-option" },
                                onclick: move |_| shell.write().switch_theme(&mut controller, theme),
                                "{theme}"
                            }
                        }
                    }
                }
            }
            button {
                class: "map-control",
                "aria-label": "Tilbakestill kart",
                onclick: move |_| shell.write().reset_map(&mut controller),
                "\u{25CE}"
            }
        }
    }
}

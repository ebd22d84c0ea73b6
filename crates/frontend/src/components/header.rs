use dioxus::prelude::*;
use oslo_shared::models::{NavLink, SiteConfig};

fn link_class(link: &NavLink, base: &'static str) -> String {
    if link.active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

#[component]
pub fn Header(config: SiteConfig) -> Element {
    let mut menu_open = use_signal(|| false);
    let open = *menu_open.read();

    rsx! {
        header { class: "site-header",
            div { class: "header-inner",
                a { class: "logo", href: "#",
                    span { class: "logo-mark", "Innsikt" }
                }

                nav { class: "nav-desktop",
                    for link in config.nav_links.iter() {
                        a {
                            key: "{link.name}",
                            class: link_class(link, "nav-link"),
                            href: "{link.href}",
                            "{link.name}"
                            if link.has_dropdown {
                                span { class: "dropdown-marker", "\u{25BE}" }
                            }
                        }
                    }
                }

                div { class: "header-actions",
                    if let Some(url) = config.cta_url.as_deref() {
                        a { class: "cta-button", href: "{url}", "{config.cta_text}" }
                    } else {
                        button { class: "cta-button", "{config.cta_text}" }
                    }
                }

                button {
                    class: "menu-toggle",
                    "aria-label": if open { "Lukk meny" } else { "Åpne meny" },
                    "aria-expanded": "{open}",
                    onclick: move |_| {
                        let current = *menu_open.read();
                        menu_open.set(!current);
                    },
                    if open { "\u{2715}" } else { "\u{2630}" }
                }
            }

            if open {
                nav { class: "nav-mobile",
                    for link in config.nav_links.iter() {
                        a {
                            key: "{link.name}",
                            class: link_class(link, "nav-mobile-link"),
                            href: "{link.href}",
                            onclick: move |_| menu_open.set(false),
                            "{link.name}"
                        }
                    }
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
    fn test_only_active_link_gets_active_class() {
        let config = fallbacks::site_config();
        let classes: Vec<String> = config
            .nav_links
            .iter()
            .map(|l| link_class(l, "nav-link"))
            .collect();
        assert_eq!(classes[0], "nav-link active");
        assert!(classes[1..].iter().all(|c| c == "nav-link"));
    }
}

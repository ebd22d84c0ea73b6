use dioxus::prelude::*;
use oslo_shared::format::post_date_label;
use oslo_shared::models::{BlogPost, SiteConfig};

const DEFAULT_NEWSLETTER_TITLE: &str = "Motta min månedlige oppdatering på boligmarkedet i Oslo.";
const THANK_YOU: &str = "Takk for din påmelding.";

/// `JAN 12` date label, falling back to the raw timestamp when it cannot be parsed.
fn date_label(post: &BlogPost) -> String {
    post_date_label(&post.published_at).unwrap_or_else(|| post.published_at.clone())
}

#[component]
fn PostCard(post: BlogPost, divider: bool) -> Element {
    let date = date_label(&post);
    let image = post.image_url.as_deref().filter(|_| post.featured);

    rsx! {
        article { class: "post-card",
            if let Some(src) = image {
                div { class: "post-image",
                    img { src: "{src}", alt: "" }
                    span { class: "post-badge", "{post.category}" }
                }
            }
            div { class: "post-meta",
                span { "{date}" }
                span { class: "dot", "\u{2022}" }
                span { "{post.category}" }
            }
            h4 { class: "post-title", "{post.title}" }
            if divider {
                div { class: "post-divider" }
            }
        }
    }
}

#[component]
pub fn RightPanel(posts: Vec<BlogPost>, config: SiteConfig) -> Element {
    let mut email = use_signal(String::new);
    let mut subscribed = use_signal(|| false);

    let title = config
        .newsletter_title
        .clone()
        .unwrap_or_else(|| DEFAULT_NEWSLETTER_TITLE.to_string());
    let last = posts.len().saturating_sub(1);

    rsx! {
        aside { class: "right-panel",
            div { class: "panel-heading",
                h3 { "Siste innlegg" }
                button { class: "link-button", "Se alle \u{203A}" }
            }

            div { class: "post-list",
                for (idx, post) in posts.iter().enumerate() {
                    PostCard {
                        key: "{post.id}",
                        post: post.clone(),
                        divider: !post.featured && idx < last,
                    }
                }
            }

            div { class: "newsletter",
                h3 { "{title}" }
                if let Some(subtitle) = config.newsletter_subtitle.as_deref() {
                    p { class: "newsletter-subtitle", "{subtitle}" }
                }
                form {
                    class: "newsletter-form",
                    onsubmit: move |evt: Event<FormData>| {
                        evt.prevent_default();
                        email.set(String::new());
                        subscribed.set(true);
                    },
                    input {
                        r#type: "email",
                        required: true,
                        placeholder: "din e-post",
                        value: "{email}",
                        oninput: move |evt: Event<FormData>| {
                            email.set(evt.value());
                            subscribed.set(false);
                        },
                    }
                    button { r#type: "submit", "aria-label": "Meld deg på", "\u{2192}" }
                }
                if *subscribed.read() {
                    p { class: "newsletter-thanks", "{THANK_YOU}" }
                }
                p { class: "newsletter-note", "Avmeld når som helst" }
            }
        }
    }
}

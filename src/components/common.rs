use dioxus::prelude::*;

#[component]
pub fn MenuIcon(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        svg {
            class: "{class}",
            width: "18",
            height: "12",
            view_box: "0 0 18 12",
            xmlns: "http://www.w3.org/2000/svg",
            g { fill_rule: "evenodd",
                rect { width: "18", height: "2", rx: "1" }
                rect { y: "5", width: "18", height: "2", rx: "1" }
                rect { y: "10", width: "18", height: "2", rx: "1" }
            }
        }
    }
}

#[component]
pub fn SearchIcon(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        svg {
            class: "{class}",
            width: "18",
            height: "18",
            view_box: "0 0 18 18",
            xmlns: "http://www.w3.org/2000/svg",
            g {
                transform: "matrix(-1 0 0 1 17 1)",
                stroke_width: "2",
                fill: "none",
                fill_rule: "evenodd",
                path { d: "M11.733 11.733l3.727 3.727" }
                circle { cx: "6.4", cy: "6.4", r: "6.4" }
            }
        }
    }
}

#[component]
pub fn IconEmailAttention(class: Option<String>) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        svg {
            class: "{class}",
            width: "52",
            height: "50",
            view_box: "0 0 52 50",
            xmlns: "http://www.w3.org/2000/svg",
            g { fill: "none", stroke_width: "2", fill_rule: "evenodd",
                rect { x: "2", y: "10", width: "40", height: "28", rx: "3" }
                path { d: "M2 12l20 14 20-14" }
                circle { cx: "42", cy: "10", r: "8" }
                path { d: "M42 6v5M42 14v.5", stroke_linecap: "round" }
            }
        }
    }
}

#[component]
pub fn Logo(mobile: bool) -> Element {
    rsx! {
        div { class: if mobile { "logo logo-mobile" } else { "logo" },
            div { class: "logo-icon" }
            if !mobile {
                span { class: "logo-text", "Marketplace" }
            }
        }
    }
}

/// Red dot or counter shown when there are unread notifications.
#[component]
pub fn NotificationBadge(count: usize, compact: bool) -> Element {
    if count == 0 {
        return rsx! {};
    }
    if compact {
        rsx! { div { class: "notification-dot" } }
    } else {
        rsx! { span { class: "notification-badge", "{count}" } }
    }
}

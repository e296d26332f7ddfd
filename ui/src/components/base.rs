//! Themed building blocks shared by every screen.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

use crate::theme::use_theme;
use crate::view_state::LOADING_PLACEHOLDER;
use crate::Route;

/// The centered page column.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! {
        main { style: "max-width: 480px; margin: 0 auto; padding: 0 20px;", {children} }
    }
}

/// A rounded card on a translucent backdrop.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        article {
            style: "background-color: rgba(0, 0, 0, 0.5); border-radius: 10px; padding: 20px; margin: 10px 0;",
            {children}
        }
    }
}

/// A two-column grid, used for the tab row.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 10px; margin: 25px 0;",
            {children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LoaderProps {
    #[props(default = LOADING_PLACEHOLDER.to_string())]
    label: String,
}

/// Centered waiting indicator.
pub fn Loader(props: LoaderProps) -> Element {
    rsx! {
        span { style: "display: block; text-align: center; padding: 20px 0;", "{props.label}" }
        progress { style: "width: 100%;" }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ErrorCardProps {
    message: String,
    on_retry: EventHandler<MouseEvent>,
}

/// Failure card with a retry button. Failures are local to the page that
/// rendered them.
pub fn ErrorCard(props: ErrorCardProps) -> Element {
    rsx! {
        Card {
            h3 { "Error" }
            p { "{props.message}" }
            button {
                style: "padding: 5px 12px; border-radius: 8px; cursor: pointer;",
                onclick: move |evt| props.on_retry.call(evt),
                "Retry"
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TabLinkProps {
    to: Route,
    active: bool,
    children: Element,
}

/// One navigation tab; the active one is painted in the accent color.
pub fn TabLink(props: TabLinkProps) -> Element {
    let palette = use_theme().palette();
    let color = if props.active {
        palette.accent_color
    } else {
        palette.text_color
    };
    rsx! {
        span {
            class: "tab-link",
            style: "text-align: center; text-transform: uppercase; font-size: 13px; font-weight: 400; background-color: rgba(0, 0, 0, 0.5); border-radius: 10px; color: {color};",
            Link { to: props.to.clone(), {props.children} }
        }
    }
}

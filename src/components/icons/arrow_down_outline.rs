// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

/// Downward-pointing chevron, 16x16, 1.5-unit black stroke.
#[component]
pub fn ArrowDownOutline() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 16 16",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            path {
                d: "M12.6666 6L7.99992 10.6667L3.33325 6",
                stroke: "black",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

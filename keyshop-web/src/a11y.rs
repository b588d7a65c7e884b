// Accessibility helpers

/// Id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "cart-status";

/// Critical focus-ring and screen-reader CSS injected by the app shell.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #7c5cff;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Announce `msg` through the shared live region.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::element_by_id(STATUS_REGION_ID) {
        node.set_text_content(Some(msg));
    }
}

/// Whether the user asked the OS for reduced motion.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    crate::dom::window()
        .and_then(|win| win.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mql| mql.matches())
}

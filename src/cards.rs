//! Staggered entrance animation for service cards.
//!
//! Cards start fully transparent and fade/slide in, each delayed 100 ms more
//! than the one before it in document order. The matching keyframe rule and
//! the transparent starting state are injected into the page once at startup.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

/// Delay increment between consecutive cards.
pub const STAGGER_STEP_MS: usize = 100;

/// Entrance animation applied to every card.
pub const ENTRANCE_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// Stylesheet injected once: the keyframes plus the transparent start state.
pub const ENTRANCE_STYLE: &str = "\
@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.service-card { opacity: 0; }
";

/// Animation start delay for the card at `index`.
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", index * STAGGER_STEP_MS)
}

/// Inject the entrance stylesheet into the document head.
#[cfg(feature = "browser")]
pub fn inject_entrance_style() {
    let Some(doc) = crate::dom::document() else {
        return;
    };
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    style.set_text_content(Some(ENTRANCE_STYLE));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}

/// Start the staggered entrance on every card.
#[cfg(feature = "browser")]
pub fn init() {
    for (index, card) in crate::dom::query_all(crate::registry::SERVICE_CARDS).iter().enumerate() {
        crate::dom::set_inline(card, "animation-delay", &stagger_delay(index));
        crate::dom::set_inline(card, "animation", ENTRANCE_ANIMATION);
    }
}

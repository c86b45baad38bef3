//! One-shot scroll reveal.
//!
//! Elements tagged with `data-reveal` get the `is-visible` class the first time
//! at least a fifth of them is in view. After that the element is no longer
//! observed, so the transition is applied once.

use std::collections::HashMap;

use futures_util::stream::{self, Stream, StreamExt};

pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const VISIBLE_CLASS: &str = "is-visible";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: String,
    pub delay_ms: Option<u32>,
}

impl RevealTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            delay_ms: None,
        }
    }

    pub fn delayed(id: impl Into<String>, delay_ms: u32) -> Self {
        Self {
            id: id.into(),
            delay_ms: Some(delay_ms),
        }
    }

    /// Stagger timing consumed by the stylesheet.
    pub fn delay_style(&self) -> Option<String> {
        self.delay_ms.map(|ms| format!("--delay: {ms}ms"))
    }
}

/// Visibility report for one element; `ratio` is the visible fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub target: String,
    pub class: &'static str,
    pub style: Option<String>,
}

/// Turns raw visibility entries into at most one `Reveal` per target.
///
/// The stream finishes as soon as every target has been revealed, even if the
/// entry source would keep producing, or when the source ends.
pub fn reveals<E>(targets: Vec<RevealTarget>, entries: E) -> impl Stream<Item = Reveal>
where
    E: Stream<Item = IntersectionEntry> + Unpin,
{
    let observed: HashMap<String, RevealTarget> =
        targets.into_iter().map(|t| (t.id.clone(), t)).collect();

    stream::unfold((observed, entries), |(mut observed, mut entries)| async move {
        while !observed.is_empty() {
            let entry = entries.next().await?;
            if entry.ratio < REVEAL_THRESHOLD {
                continue;
            }
            if let Some(target) = observed.remove(&entry.target) {
                let reveal = Reveal {
                    style: target.delay_style(),
                    target: target.id,
                    class: VISIBLE_CLASS,
                };
                return Some((reveal, (observed, entries)));
            }
        }
        None
    })
}

/// Reveals for the first paint. The leading section always opens the page in
/// full view, so it is shown without waiting for the observer.
pub async fn first_paint(targets: &[RevealTarget]) -> Vec<Reveal> {
    let in_view: Vec<IntersectionEntry> = targets
        .iter()
        .take(1)
        .map(|t| IntersectionEntry {
            target: t.id.clone(),
            ratio: 1.0,
        })
        .collect();
    reveals(targets.to_vec(), stream::iter(in_view)).collect().await
}

/// Browser-side observer for the remaining sections. Marks the root with `js`
/// first so the hidden state only applies when the observer can lift it.
pub fn observer_script() -> String {
    format!(
        r#"(() => {{
  document.documentElement.classList.add("js");
  const items = document.querySelectorAll("[data-reveal]:not(.{class})");
  if (!("IntersectionObserver" in window)) {{
    items.forEach((item) => item.classList.add("{class}"));
    return;
  }}
  const observer = new IntersectionObserver((entries) => {{
    entries.forEach((entry) => {{
      if (entry.intersectionRatio >= {threshold}) {{
        entry.target.classList.add("{class}");
        observer.unobserve(entry.target);
      }}
    }});
  }}, {{ threshold: {threshold} }});
  items.forEach((item) => {{
    if (item.dataset.delay) {{
      item.style.setProperty("--delay", `${{item.dataset.delay}}ms`);
    }}
    observer.observe(item);
  }});
}})();"#,
        class = VISIBLE_CLASS,
        threshold = REVEAL_THRESHOLD,
    )
}

//! Entrance animation parameters, rendered as inline CSS transitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Standard,
    EaseOut,
}

impl Ease {
    fn as_css(self) -> &'static str {
        match self {
            Ease::Standard => "ease",
            Ease::EaseOut => "ease-out",
        }
    }
}

/// How children of a revealed container slide in. Each item fades from
/// transparent and `offset_y` pixels down, starting `stagger` seconds after
/// its previous sibling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub offset_y: f64,
    pub duration: f64,
    pub stagger: f64,
    pub base_delay: f64,
    pub ease: Ease,
}

impl Reveal {
    pub const SECTION: Reveal = Reveal {
        offset_y: 20.0,
        duration: 0.5,
        stagger: 0.2,
        base_delay: 0.0,
        ease: Ease::Standard,
    };

    pub const HERO: Reveal = Reveal {
        offset_y: 10.0,
        duration: 0.3,
        stagger: 0.05,
        base_delay: 0.0,
        ease: Ease::EaseOut,
    };

    pub const JOURNEY: Reveal = Reveal {
        offset_y: 50.0,
        duration: 0.5,
        stagger: 0.5,
        base_delay: 0.0,
        ease: Ease::Standard,
    };

    pub fn after(self, base_delay: f64) -> Self {
        Reveal { base_delay, ..self }
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base_delay + self.stagger * index as f64
    }

    /// Inline style for the `index`th child.
    pub fn style(&self, index: usize, visible: bool) -> String {
        if !visible {
            return format!("opacity:0;transform:translateY({}px);", self.offset_y);
        }
        let delay = self.delay(index);
        let ease = self.ease.as_css();
        format!(
            "opacity:1;transform:translateY(0px);transition:opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s;",
            d = self.duration,
        )
    }
}

/// Page-wide fade in, run once when the page mounts.
pub const PAGE_FADE_SECS: f64 = 0.5;

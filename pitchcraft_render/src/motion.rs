// Entrance-animation props for the `motion` library.
//
// Each `AnimationKind` animates from an offset state to rest:
//
// - fade:     opacity 0, y 20  -> opacity 1, y 0
// - slide:    opacity 0, x -50 -> opacity 1, x 0
// - zoom:     opacity 0, scale 0.8 -> opacity 1, scale 1
// - glow:     opacity 0 -> opacity 1, no easing
// - parallax: opacity 0, y 100 -> opacity 1, y 0, played once on scroll-in
//
// Durations (seconds) depend on kind and speed, see `duration`. Repeated
// items in a section are staggered by `STAGGER` steps.

use pitchcraft_core::layout::{AnimationKind, AnimationSpeed, AnimationStyle, Easing};
use serde::Serialize;

/// Delay in seconds for the n-th staggered item; later items reuse the last.
pub const STAGGER: [f32; 6] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];

/// When the animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trigger {
    /// On mount (`animate`).
    Mount,
    /// The first time the element scrolls into view (`whileInView`).
    InViewOnce,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub ease: Option<Easing>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Motion {
    pub kind: AnimationKind,
    pub initial: Vec<(&'static str, f32)>,
    pub target: Vec<(&'static str, f32)>,
    pub trigger: Trigger,
    pub transition: Transition,
}

/// Seconds for one animation.
pub fn duration(kind: AnimationKind, speed: AnimationSpeed) -> f32 {
    let [fast, medium, slow] = match kind {
        AnimationKind::Fade => [0.3, 0.5, 0.8],
        AnimationKind::Slide => [0.4, 0.6, 0.9],
        AnimationKind::Zoom => [0.4, 0.7, 1.0],
        AnimationKind::Glow => [0.5, 0.8, 1.2],
        AnimationKind::Parallax => [0.6, 1.0, 1.5],
    };
    match speed {
        AnimationSpeed::Fast => fast,
        AnimationSpeed::Medium => medium,
        AnimationSpeed::Slow => slow,
    }
}

/// Motion props for the `step`-th staggered element of a section.
pub fn motion_for(style: AnimationStyle, step: usize) -> Motion {
    let delay = STAGGER[step.min(STAGGER.len() - 1)];
    let (initial, target): (Vec<(&'static str, f32)>, Vec<(&'static str, f32)>) = match style.kind {
        AnimationKind::Fade => (vec![("opacity", 0.0), ("y", 20.0)], vec![("opacity", 1.0), ("y", 0.0)]),
        AnimationKind::Slide => (vec![("opacity", 0.0), ("x", -50.0)], vec![("opacity", 1.0), ("x", 0.0)]),
        AnimationKind::Zoom => (vec![("opacity", 0.0), ("scale", 0.8)], vec![("opacity", 1.0), ("scale", 1.0)]),
        AnimationKind::Glow => (vec![("opacity", 0.0)], vec![("opacity", 1.0)]),
        AnimationKind::Parallax => (vec![("opacity", 0.0), ("y", 100.0)], vec![("opacity", 1.0), ("y", 0.0)]),
    };
    let trigger = match style.kind {
        AnimationKind::Parallax => Trigger::InViewOnce,
        _ => Trigger::Mount,
    };
    let ease = match style.kind {
        AnimationKind::Glow => None,
        _ => Some(style.easing),
    };
    Motion {
        kind: style.kind,
        initial,
        target,
        trigger,
        transition: Transition {
            duration: duration(style.kind, style.speed),
            delay,
            ease,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchcraft_core::palette::ANIMATION_STYLES;

    #[test]
    fn duration_table() {
        assert_eq!(duration(AnimationKind::Fade, AnimationSpeed::Fast), 0.3);
        assert_eq!(duration(AnimationKind::Zoom, AnimationSpeed::Slow), 1.0);
        assert_eq!(duration(AnimationKind::Parallax, AnimationSpeed::Medium), 1.0);
        assert_eq!(duration(AnimationKind::Glow, AnimationSpeed::Slow), 1.2);
    }

    #[test]
    fn glow_has_no_easing_and_only_opacity() {
        let m = motion_for(ANIMATION_STYLES[3], 0);
        assert_eq!(m.transition.ease, None);
        assert_eq!(m.initial, vec![("opacity", 0.0)]);
    }

    #[test]
    fn parallax_plays_on_scroll() {
        let m = motion_for(ANIMATION_STYLES[4], 1);
        assert_eq!(m.trigger, Trigger::InViewOnce);
        assert_eq!(m.transition.delay, 0.1);
        assert_eq!(m.transition.duration, 1.5);
    }

    #[test]
    fn stagger_saturates() {
        let m = motion_for(ANIMATION_STYLES[0], 40);
        assert_eq!(m.transition.delay, 0.5);
    }
}

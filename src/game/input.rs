//! Backend-agnostic input: one `Controls` snapshot per frame.
//!
//! The window layer fills this from keyboard and touch state; the
//! simulation never talks to the windowing library directly.

/// Forward step taken by a touch on the left third of the screen, per frame.
pub const TOUCH_STEP: f64 = 0.1;
/// Turn gain for touches on the right third, scaled by offset from centre.
pub const TOUCH_TURN_GAIN: f64 = 0.02;
/// Touches beyond this fraction of the screen width fire instead of turning.
pub const TOUCH_FIRE_ZONE: f64 = 0.85;

/// A touch point with coordinates normalised to `[0, 1]` of the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    pub x: f64,
    pub y: f64,
    /// The finger went down this frame rather than being held from the last one.
    pub pressed: bool,
}

impl Touch {
    pub fn pressed(x: f64, y: f64) -> Self {
        Self { x, y, pressed: true }
    }

    pub fn held(x: f64, y: f64) -> Self {
        Self { x, y, pressed: false }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Controls {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Edge-triggered: true only on the frame the fire key went down.
    pub shoot: bool,
    pub touches: Vec<Touch>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TouchAction {
    Advance(f64),
    Turn(f64),
    Shoot,
    Ignore,
}

/// Left third walks forward, right third turns (or fires in the far corner),
/// the middle does nothing. Firing is edge-triggered like the fire key: a
/// finger held in the fire zone shoots once, on the frame it lands.
pub fn classify_touch(touch: Touch) -> TouchAction {
    if touch.x < 1.0 / 3.0 {
        TouchAction::Advance(TOUCH_STEP)
    } else if touch.x > 2.0 / 3.0 {
        if touch.x > TOUCH_FIRE_ZONE {
            if touch.pressed { TouchAction::Shoot } else { TouchAction::Ignore }
        } else {
            TouchAction::Turn((touch.x - 0.5) * TOUCH_TURN_GAIN)
        }
    } else {
        TouchAction::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64) -> TouchAction {
        classify_touch(Touch::pressed(x, 0.5))
    }

    #[test]
    fn touch_zones() {
        assert_eq!(at(0.1), TouchAction::Advance(TOUCH_STEP));
        assert_eq!(at(0.5), TouchAction::Ignore);
        assert_eq!(at(0.9), TouchAction::Shoot);
        match at(0.75) {
            TouchAction::Turn(d) => assert!((d - 0.005).abs() < 1e-12),
            other => panic!("expected turn, got {other:?}"),
        }
    }

    #[test]
    fn held_touch_fires_only_on_press() {
        assert_eq!(classify_touch(Touch::held(0.95, 0.5)), TouchAction::Ignore);
        assert_eq!(classify_touch(Touch::pressed(0.95, 0.5)), TouchAction::Shoot);
        // movement zones keep acting while held
        assert_eq!(classify_touch(Touch::held(0.1, 0.5)), TouchAction::Advance(TOUCH_STEP));
        assert!(matches!(classify_touch(Touch::held(0.75, 0.5)), TouchAction::Turn(_)));
    }
}

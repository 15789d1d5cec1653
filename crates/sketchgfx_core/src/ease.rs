//! Easing functions for remapping the unit time of an action.
//!
//! All functions map `t` in `[0, 1]` to `[0, 1]` with varying
//! acceleration profiles. Use them through the module path, e.g.
//! `ease::cubic::ease_in_out`.

/// Easing function on a [`f32`] time.
pub type EaseFn = fn(t: f32) -> f32;

#[inline]
pub fn linear(t: f32) -> f32 {
    t
}

pub mod sine {
    use core::f32::consts::PI;

    #[inline]
    pub fn ease_in(t: f32) -> f32 {
        1.0 - f32::cos(t * PI * 0.5)
    }

    #[inline]
    pub fn ease_out(t: f32) -> f32 {
        f32::sin(t * PI * 0.5)
    }

    #[inline]
    pub fn ease_in_out(t: f32) -> f32 {
        -(f32::cos(t * PI) - 1.0) * 0.5
    }
}

pub mod quad {
    #[inline]
    pub fn ease_in(t: f32) -> f32 {
        t * t
    }

    #[inline]
    pub fn ease_out(t: f32) -> f32 {
        1.0 - (1.0 - t) * (1.0 - t)
    }

    #[inline]
    pub fn ease_in_out(t: f32) -> f32 {
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - f32::powi(-2.0 * t + 2.0, 2) * 0.5
        }
    }
}

pub mod cubic {
    #[inline]
    pub fn ease_in(t: f32) -> f32 {
        t * t * t
    }

    #[inline]
    pub fn ease_out(t: f32) -> f32 {
        1.0 - f32::powi(1.0 - t, 3)
    }

    #[inline]
    pub fn ease_in_out(t: f32) -> f32 {
        if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - f32::powi(-2.0 * t + 2.0, 3) * 0.5
        }
    }
}

pub mod quart {
    #[inline]
    pub fn ease_in(t: f32) -> f32 {
        f32::powi(t, 4)
    }

    #[inline]
    pub fn ease_out(t: f32) -> f32 {
        1.0 - f32::powi(1.0 - t, 4)
    }

    #[inline]
    pub fn ease_in_out(t: f32) -> f32 {
        if t < 0.5 {
            8.0 * f32::powi(t, 4)
        } else {
            1.0 - f32::powi(-2.0 * t + 2.0, 4) * 0.5
        }
    }
}

pub mod quint {
    #[inline]
    pub fn ease_in(t: f32) -> f32 {
        f32::powi(t, 5)
    }

    #[inline]
    pub fn ease_out(t: f32) -> f32 {
        1.0 - f32::powi(1.0 - t, 5)
    }

    #[inline]
    pub fn ease_in_out(t: f32) -> f32 {
        if t < 0.5 {
            16.0 * f32::powi(t, 5)
        } else {
            1.0 - f32::powi(-2.0 * t + 2.0, 5) * 0.5
        }
    }
}

pub mod circ {
    #[inline]
    pub fn ease_in(t: f32) -> f32 {
        1.0 - f32::sqrt(1.0 - t * t)
    }

    #[inline]
    pub fn ease_out(t: f32) -> f32 {
        f32::sqrt(1.0 - (t - 1.0) * (t - 1.0))
    }

    #[inline]
    pub fn ease_in_out(t: f32) -> f32 {
        if t < 0.5 {
            (1.0 - f32::sqrt(1.0 - f32::powi(2.0 * t, 2))) * 0.5
        } else {
            (f32::sqrt(1.0 - f32::powi(-2.0 * t + 2.0, 2)) + 1.0)
                * 0.5
        }
    }
}

/// Plays the motion forward for the first half of the time and in
/// reverse for the second half, returning to the initial value.
///
/// Used for emphasis effects such as click highlights.
#[inline]
pub fn there_and_back(t: f32) -> f32 {
    1.0 - f32::abs(2.0 * t - 1.0)
}

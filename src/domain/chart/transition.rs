/// Position and radius of a circle at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGeometry {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl DotGeometry {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    fn lerp(&self, to: &DotGeometry, t: f64) -> DotGeometry {
        DotGeometry {
            cx: self.cx + (to.cx - self.cx) * t,
            cy: self.cy + (to.cy - self.cy) * t,
            r: self.r + (to.r - self.r) * t,
        }
    }
}

/// Cubic in-out easing on `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

/// Staggered entrance of one dot: hold `from` for `delay_ms`, then ease to
/// `to` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceTransition {
    pub from: DotGeometry,
    pub to: DotGeometry,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl EntranceTransition {
    pub fn staggered(index: usize, step_ms: f64, duration_ms: f64, from: DotGeometry, to: DotGeometry) -> Self {
        Self { from, to, delay_ms: index as f64 * step_ms, duration_ms }
    }

    /// Geometry `elapsed_ms` after the chart was drawn.
    pub fn state_at(&self, elapsed_ms: f64) -> DotGeometry {
        if elapsed_ms <= self.delay_ms {
            return self.from;
        }
        if self.duration_ms <= 0.0 || self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = (elapsed_ms - self.delay_ms) / self.duration_ms;
        self.from.lerp(&self.to, ease_cubic_in_out(t))
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.end_ms()
    }

    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }
}

//! Plot geometry for the canvas risk charts.
//!
//! Charts map a 0-100 risk axis onto a padded plot box; these helpers keep
//! the math independent of the canvas so hit-testing and drawing agree.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// Maximum score on the risk axis.
pub const RISK_AXIS_MAX: f64 = 100.0;

/// Plot area inside a canvas, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotBox {
    /// Plot box for a canvas of `width` x `height` with uniform `padding`.
    pub fn inset(width: f64, height: f64, padding: f64) -> Self {
        Self {
            left: padding,
            top: padding,
            width: (width - padding * 2.0).max(1.0),
            height: (height - padding * 2.0).max(1.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X coordinate of a 0..=1 position along the series.
    pub fn x_at(&self, fraction: f64) -> f64 {
        self.left + fraction.clamp(0.0, 1.0) * self.width
    }

    /// Y coordinate of a risk score (higher risk draws higher).
    pub fn y_for_risk(&self, risk: u32) -> f64 {
        let ratio = (f64::from(risk) / RISK_AXIS_MAX).clamp(0.0, 1.0);
        self.bottom() - ratio * self.height
    }

    /// Series position under a pointer x coordinate, clamped to 0..=1.
    pub fn fraction_at(&self, x: f64) -> f64 {
        ((x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// Canvas points for a risk series spread evenly across the plot box.
pub fn series_points(values: &[u32], plot: &PlotBox) -> Vec<(f64, f64)> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![(plot.x_at(0.5), plot.y_for_risk(values[0]))],
        n => {
            #[allow(clippy::cast_precision_loss)]
            let last = (n - 1) as f64;
            values
                .iter()
                .enumerate()
                .map(|(i, risk)| {
                    #[allow(clippy::cast_precision_loss)]
                    let fraction = i as f64 / last;
                    (plot.x_at(fraction), plot.y_for_risk(*risk))
                })
                .collect()
        }
    }
}

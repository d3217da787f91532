//! Derived render data for the detail view.

use std::f64::consts::PI;

use crate::domain::{AnalysisResult, BrokenLink};

pub const INTERNAL_LABEL: &str = "Internal Links";
pub const EXTERNAL_LABEL: &str = "External Links";
pub const INTERNAL_COLOR: &str = "#36A2EB";
pub const EXTERNAL_COLOR: &str = "#FF6384";

pub const NO_BROKEN_LINKS: &str = "No broken links 🎉";
pub const NO_LINKS: &str = "No links found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: i64,
    pub color: &'static str,
}

/// One drawable doughnut segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub label: &'static str,
    pub color: &'static str,
    /// SVG path data for the ring sector.
    pub path: String,
}

/// Doughnut placement inside an SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer: f64,
    pub inner: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            outer: 90.0,
            inner: 55.0,
        }
    }
}

/// Two-category internal/external dataset, raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkDistribution {
    slices: [ChartSlice; 2],
}

impl LinkDistribution {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            slices: [
                ChartSlice {
                    label: INTERNAL_LABEL,
                    value: result.internal_links,
                    color: INTERNAL_COLOR,
                },
                ChartSlice {
                    label: EXTERNAL_LABEL,
                    value: result.external_links,
                    color: EXTERNAL_COLOR,
                },
            ],
        }
    }

    pub fn slices(&self) -> &[ChartSlice; 2] {
        &self.slices
    }

    pub fn labels(&self) -> [&'static str; 2] {
        self.slices.map(|s| s.label)
    }

    pub fn values(&self) -> [i64; 2] {
        self.slices.map(|s| s.value)
    }

    /// Sum used for geometry; negative counts contribute nothing.
    pub fn drawable_total(&self) -> i64 {
        self.slices.iter().map(|s| s.value.max(0)).sum()
    }

    /// Percentage of the drawable total, 0 when there is nothing to draw.
    pub fn share(&self, slice: &ChartSlice) -> f64 {
        let total = self.drawable_total();
        if total == 0 {
            return 0.0;
        }
        slice.value.max(0) as f64 * 100.0 / total as f64
    }

    /// Ring sectors for every slice with a positive count, clockwise from
    /// twelve o'clock.
    pub fn segments(&self, ring: RingGeometry) -> Vec<ArcSegment> {
        let total = self.drawable_total();
        if total == 0 {
            return Vec::new();
        }

        let mut start = 0.0_f64;
        let mut segments = Vec::new();
        for slice in &self.slices {
            let value = slice.value.max(0);
            if value == 0 {
                continue;
            }
            let sweep = value as f64 / total as f64 * 2.0 * PI;
            let path = if value == total {
                // A single sector cannot close a full circle; draw two halves.
                format!(
                    "{} {}",
                    sector_path(ring, 0.0, PI),
                    sector_path(ring, PI, 2.0 * PI)
                )
            } else {
                sector_path(ring, start, start + sweep)
            };
            segments.push(ArcSegment {
                label: slice.label,
                color: slice.color,
                path,
            });
            start += sweep;
        }
        segments
    }
}

fn point(ring: RingGeometry, radius: f64, angle: f64) -> (f64, f64) {
    // Angle 0 is twelve o'clock.
    (
        ring.cx + radius * angle.sin(),
        ring.cy - radius * angle.cos(),
    )
}

fn sector_path(ring: RingGeometry, start: f64, end: f64) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let (ox1, oy1) = point(ring, ring.outer, start);
    let (ox2, oy2) = point(ring, ring.outer, end);
    let (ix2, iy2) = point(ring, ring.inner, end);
    let (ix1, iy1) = point(ring, ring.inner, start);
    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 0 {:.3} {:.3} Z",
        ox1, oy1, ring.outer, ring.outer, large, ox2, oy2,
        ix2, iy2, ring.inner, ring.inner, large, ix1, iy1
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenLinkListing<'a> {
    /// Rendered as [`NO_BROKEN_LINKS`], never as a bare empty list.
    Empty,
    Links(&'a [BrokenLink]),
}

impl<'a> BrokenLinkListing<'a> {
    pub fn from_result(result: &'a AnalysisResult) -> Self {
        if result.broken_links.is_empty() {
            Self::Empty
        } else {
            Self::Links(&result.broken_links)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Links(links) => links.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the detail view draws for one result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailProjection<'a> {
    pub result: &'a AnalysisResult,
    pub distribution: LinkDistribution,
    pub broken_links: BrokenLinkListing<'a>,
}

pub fn project(result: &AnalysisResult) -> DetailProjection<'_> {
    DetailProjection {
        result,
        distribution: LinkDistribution::from_result(result),
        broken_links: BrokenLinkListing::from_result(result),
    }
}

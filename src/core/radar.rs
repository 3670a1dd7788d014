//! Skill radar chart.
//!
//! The chart is described once as a Plotly-compatible figure and can be
//! emitted either as figure JSON (for a client-side plotting library) or as a
//! self-contained inline SVG.

use crate::core::html::escape;
use crate::domain::model::SkillRatings;
use crate::utils::error::Result;
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt::Write;

pub const TRACE_NAME: &str = "Skills";
pub const LINE_COLOR: &str = "rgb(25, 118, 210)";
pub const FILL_COLOR: &str = "rgba(25, 118, 210, 0.3)";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

const SVG_WIDTH: f64 = 500.0;
const GRID_STEPS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub r: Vec<f64>,
    pub theta: Vec<String>,
    pub fill: &'static str,
    pub name: &'static str,
    pub line: LineStyle,
    pub fillcolor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialAxis {
    pub visible: bool,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polar {
    pub radialaxis: RadialAxis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarLayout {
    pub polar: Polar,
    pub showlegend: bool,
    pub margin: Margin,
    pub height: u32,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            polar: Polar {
                radialaxis: RadialAxis {
                    visible: true,
                    range: [0.0, 1.0],
                },
            },
            showlegend: false,
            margin: Margin {
                l: 70,
                r: 70,
                t: 20,
                b: 20,
            },
            height: 350,
            paper_bgcolor: TRANSPARENT,
            plot_bgcolor: TRANSPARENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    #[serde(rename = "data")]
    traces: Vec<RadarTrace>,
    layout: RadarLayout,
}

impl RadarChart {
    /// An empty mapping produces a chart without any trace.
    pub fn from_ratings(ratings: &SkillRatings) -> Self {
        let traces = if ratings.is_empty() {
            Vec::new()
        } else {
            let (theta, r): (Vec<String>, Vec<f64>) = ratings
                .iter()
                .map(|(skill, value)| (skill.to_string(), value))
                .unzip();
            vec![RadarTrace {
                kind: "scatterpolar",
                r,
                theta,
                fill: "toself",
                name: TRACE_NAME,
                line: LineStyle { color: LINE_COLOR },
                fillcolor: FILL_COLOR,
            }]
        };

        Self {
            traces,
            layout: RadarLayout::default(),
        }
    }

    pub fn trace(&self) -> Option<&RadarTrace> {
        self.traces.first()
    }

    pub fn layout(&self) -> &RadarLayout {
        &self.layout
    }

    pub fn to_figure_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_svg(&self) -> String {
        let layout = &self.layout;
        let height = f64::from(layout.height);
        let margin = layout.margin;
        let inner_w = SVG_WIDTH - f64::from(margin.l + margin.r);
        let inner_h = height - f64::from(margin.t + margin.b);
        let radius = inner_w.min(inner_h) / 2.0;
        let cx = f64::from(margin.l) + inner_w / 2.0;
        let cy = f64::from(margin.t) + inner_h / 2.0;
        let [lo, hi] = layout.polar.radialaxis.range;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="radar-chart" viewBox="0 0 {} {}" width="100%" height="{}" role="img" aria-label="{}" style="background:{}">"#,
            SVG_WIDTH, layout.height, layout.height, TRACE_NAME, layout.paper_bgcolor
        );

        let categories = self.trace().map(|t| t.theta.len()).unwrap_or(0);

        if layout.polar.radialaxis.visible {
            for step in GRID_STEPS {
                let ring_r = radius * step;
                if categories >= 3 {
                    let ring = polygon_points(cx, cy, &vec![ring_r; categories]);
                    let _ = write!(
                        svg,
                        r##"<polygon points="{}" fill="none" stroke="#d0d7de" stroke-width="1"/>"##,
                        ring
                    );
                } else {
                    let _ = write!(
                        svg,
                        r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="#d0d7de" stroke-width="1"/>"##,
                        cx, cy, ring_r
                    );
                }
                let _ = write!(
                    svg,
                    r##"<text x="{:.2}" y="{:.2}" font-size="9" fill="#57606a">{}</text>"##,
                    cx + 2.0,
                    cy - ring_r - 2.0,
                    lo + (hi - lo) * step
                );
            }
        }

        if let Some(trace) = self.trace() {
            for (i, label) in trace.theta.iter().enumerate() {
                let (x, y) = project(cx, cy, radius, i, categories);
                let _ = write!(
                    svg,
                    r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#d0d7de" stroke-width="1"/>"##,
                    cx, cy, x, y
                );
                let (lx, ly) = project(cx, cy, radius + 14.0, i, categories);
                let anchor = if (lx - cx).abs() < 1.0 {
                    "middle"
                } else if lx > cx {
                    "start"
                } else {
                    "end"
                };
                let _ = write!(
                    svg,
                    r##"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="{}" dominant-baseline="middle" fill="#24292f">{}</text>"##,
                    lx,
                    ly,
                    anchor,
                    escape(label)
                );
            }

            let radii: Vec<f64> = trace
                .r
                .iter()
                .map(|value| radius * normalize(*value, lo, hi))
                .collect();
            let _ = write!(
                svg,
                r#"<polygon class="radar-trace" points="{}" fill="{}" stroke="{}" stroke-width="2"><title>{}</title></polygon>"#,
                polygon_points(cx, cy, &radii),
                trace.fillcolor,
                trace.line.color,
                trace.name
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

// 第一個類別在正東方，逆時針排列
fn project(cx: f64, cy: f64, r: f64, index: usize, count: usize) -> (f64, f64) {
    let angle = 2.0 * PI * index as f64 / count.max(1) as f64;
    (cx + r * angle.cos(), cy - r * angle.sin())
}

fn polygon_points(cx: f64, cy: f64, radii: &[f64]) -> String {
    radii
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let (x, y) = project(cx, cy, *r, i, radii.len());
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

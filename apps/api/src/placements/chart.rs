//! Chart description for the package comparison view. Rendering is left to
//! the client; this only decides what goes on the chart.

use serde::{Deserialize, Serialize};

use crate::models::placement::{Placement, SortOrder};
use crate::placements::query::sort_by_package;

pub const CHART_TITLE: &str = "Salary Packages by Company";
pub const COLOR_SCALE: &str = "Viridis";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bar {
    /// Company on the x axis.
    pub x: Option<String>,
    /// Package (LPA) on the y axis.
    pub y: f64,
    /// Colour intensity, also the package.
    pub color: f64,
    /// Text drawn on the bar: the role.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarOutline {
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPayload {
    pub title: String,
    /// Horizontal title anchor as a fraction of the width; 0.5 centres it.
    pub title_x: f64,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub color_scale: String,
    pub label_position: String,
    pub bar_outline: BarOutline,
    pub plot_background: String,
    pub paper_background: String,
    pub font_size: u32,
    pub bars: Vec<Bar>,
}

/// One bar per placement, highest package first.
pub fn build_chart(placements: Vec<Placement>) -> ChartPayload {
    let bars = sort_by_package(placements, SortOrder::Descending)
        .into_iter()
        .map(|p| Bar {
            x: p.company,
            y: p.package,
            color: p.package,
            label: p.role,
        })
        .collect();

    ChartPayload {
        title: CHART_TITLE.to_string(),
        title_x: 0.5,
        x_axis_title: "Company".to_string(),
        y_axis_title: "Package (LPA)".to_string(),
        color_scale: COLOR_SCALE.to_string(),
        label_position: "outside".to_string(),
        bar_outline: BarOutline {
            width: 0.8,
            color: "black".to_string(),
        },
        plot_background: TRANSPARENT.to_string(),
        paper_background: TRANSPARENT.to_string(),
        font_size: 14,
        bars,
    }
}

use serde::Serialize;

use super::classify::{classify, Segment, TrendDirection};
use super::palette::{Hue, LineStyle, Palette};
use crate::models::SprintDataPoint;

/// What to draw for a single burndown point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    pub hue: Hue,
    pub radius: u8,
    pub label: String,
}

/// Describes how each point of the remaining-work series is drawn.
///
/// `neighbor` is the point that follows `point`, if any.
pub trait PointDescriber {
    fn describe(
        &self,
        point: &SprintDataPoint,
        index: usize,
        neighbor: Option<&SprintDataPoint>,
    ) -> RenderDescriptor;
}

/// Colors each marker by its outgoing segment; the last point is neutral.
pub struct TrendMarkers<'a> {
    palette: &'a Palette,
    segments: &'a [Segment],
}

impl<'a> TrendMarkers<'a> {
    /// `segments` must be the classification of the points being described.
    pub fn new(palette: &'a Palette, segments: &'a [Segment]) -> Self {
        Self { palette, segments }
    }
}

impl PointDescriber for TrendMarkers<'_> {
    fn describe(
        &self,
        point: &SprintDataPoint,
        index: usize,
        _neighbor: Option<&SprintDataPoint>,
    ) -> RenderDescriptor {
        let hue = self
            .segments
            .get(index)
            .map_or(self.palette.neutral, |segment| {
                self.palette.hue(segment.direction)
            });

        RenderDescriptor {
            hue,
            radius: self.palette.marker_radius,
            label: tooltip(point),
        }
    }
}

pub fn tooltip(point: &SprintDataPoint) -> String {
    format!(
        "{}: {} remaining (guideline {})",
        point.date, point.remaining, point.guideline
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentStroke {
    pub from: (usize, i64),
    pub to: (usize, i64),
    pub direction: TrendDirection,
    pub hue: Hue,
    pub width: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMarker {
    pub index: usize,
    pub x: usize,
    pub y: i64,
    pub descriptor: RenderDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidelineSeries {
    pub points: Vec<(usize, i64)>,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekendMarker {
    pub index: usize,
    pub date: String,
    pub hue: Hue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValueBounds {
    pub min: i64,
    pub max: i64,
}

/// Draw primitives for one burndown chart in logical coordinates, where x is
/// the point index and y the value. Mapping to screen space is left to the
/// display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub palette: &'static str,
    pub labels: Vec<String>,
    pub segments: Vec<Segment>,
    pub strokes: Vec<SegmentStroke>,
    pub markers: Vec<PointMarker>,
    pub guideline: GuidelineSeries,
    pub weekends: Vec<WeekendMarker>,
    pub bounds: Option<ValueBounds>,
}

pub fn render(
    points: &[SprintDataPoint],
    palette: &Palette,
    describer: &dyn PointDescriber,
) -> RenderPlan {
    render_segments(points, classify(points), palette, describer)
}

/// Renders with the default trend-colored markers.
pub fn render_with_palette(points: &[SprintDataPoint], palette: &Palette) -> RenderPlan {
    let segments = classify(points);
    let markers = TrendMarkers::new(palette, &segments);
    render_segments(points, segments.clone(), palette, &markers)
}

fn render_segments(
    points: &[SprintDataPoint],
    segments: Vec<Segment>,
    palette: &Palette,
    describer: &dyn PointDescriber,
) -> RenderPlan {
    let strokes = segments
        .iter()
        .map(|segment| SegmentStroke {
            from: (segment.from_index, points[segment.from_index].remaining),
            to: (segment.to_index, points[segment.to_index].remaining),
            direction: segment.direction,
            hue: palette.hue(segment.direction),
            width: palette.segment_width,
        })
        .collect();

    let markers = points
        .iter()
        .enumerate()
        .map(|(index, point)| PointMarker {
            index,
            x: index,
            y: point.remaining,
            descriptor: describer.describe(point, index, points.get(index + 1)),
        })
        .collect();

    let guideline = GuidelineSeries {
        points: points
            .iter()
            .enumerate()
            .map(|(index, point)| (index, point.guideline))
            .collect(),
        style: palette.guideline,
    };

    let weekends = points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.is_weekend)
        .map(|(index, point)| WeekendMarker {
            index,
            date: point.date.clone(),
            hue: palette.weekend,
        })
        .collect();

    RenderPlan {
        palette: palette.name,
        labels: points.iter().map(|p| p.date.clone()).collect(),
        segments,
        strokes,
        markers,
        guideline,
        weekends,
        bounds: value_bounds(points),
    }
}

fn value_bounds(points: &[SprintDataPoint]) -> Option<ValueBounds> {
    let values = points.iter().flat_map(|p| [p.remaining, p.guideline]);
    let min = values.clone().min()?;
    let max = values.max()?;
    Some(ValueBounds { min, max })
}

use super::RenderError;
use super::style::RenderStyle;
use crate::core::analysis;
use crate::core::models::palette::{Palette, Rgb};
use crate::core::models::scene::{ResiduePlacement, WheelScene};
use plotters::chart::ChartContext;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

// Data-space extent of the square plot, relative to the outer edge of the markers.
const FRAME_PADDING: f64 = 1.35;
const BACKBONE_WIDTH: u32 = 2;
const MOMENT_ARROW_LENGTH: f64 = 0.55;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn drawing_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(e.to_string())
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn point(placement: &ResiduePlacement) -> (f64, f64) {
    (placement.position.x, placement.position.y)
}

fn text_style(size: f64, h: HPos) -> TextStyle<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
        .color(&BLACK)
        .pos(Pos::new(h, VPos::Center))
}

pub(super) fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    scene: &WheelScene,
    palette: &Palette,
    style: &RenderStyle,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(drawing_error)?;

    // Equal x and y ranges on a square area keep the wheel circular.
    let (width, height) = root.dim_in_pixel();
    let side = width.min(height);
    let root = root.shrink(
        (((width - side) / 2) as i32, ((height - side) / 2) as i32),
        (side as i32, side as i32),
    );

    let radius = scene.radius();
    let marker_radius = radius * style.marker_scale;
    let extent = (radius + marker_radius) * FRAME_PADDING;

    let mut chart = ChartBuilder::on(&root)
        .margin((side / 50) as i32)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(drawing_error)?;

    let pixels_per_unit = chart.plotting_area().dim_in_pixel().0 as f64 / (2.0 * extent);
    let marker_px = (marker_radius * pixels_per_unit).round().max(1.0);

    if style.show_backbone {
        draw_backbone(&mut chart, scene, style.fade_backbone)?;
    }
    draw_markers(&mut chart, scene, palette, marker_px as i32)?;
    if style.show_labels || style.show_numbers {
        draw_labels(&mut chart, scene, style, marker_radius, marker_px)?;
    }
    if style.show_moment {
        draw_moment(&mut chart, scene, marker_px)?;
    }
    if style.show_legend {
        draw_legend(&mut chart, scene, palette, extent, side as f64)?;
    }
    if let Some(title) = &style.title {
        chart
            .draw_series(std::iter::once(Text::new(
                title.clone(),
                (0.0, extent * 0.93),
                text_style(side as f64 * 0.035, HPos::Center),
            )))
            .map_err(drawing_error)?;
    }

    root.present().map_err(drawing_error)
}

fn draw_backbone<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    scene: &WheelScene,
    fade: bool,
) -> Result<(), RenderError> {
    let count = scene.placements().len() as f64;
    chart
        .draw_series(scene.backbone().map(|(from, to)| {
            let alpha = if fade {
                1.0 - from.index as f64 / count
            } else {
                1.0
            };
            PathElement::new(
                vec![point(from), point(to)],
                BLACK.mix(alpha).stroke_width(BACKBONE_WIDTH),
            )
        }))
        .map_err(drawing_error)?;
    Ok(())
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    scene: &WheelScene,
    palette: &Palette,
    marker_px: i32,
) -> Result<(), RenderError> {
    chart
        .draw_series(scene.placements().iter().map(|p| {
            Circle::new(point(p), marker_px, rgb(palette.color(p.category)).filled())
        }))
        .map_err(drawing_error)?;
    chart
        .draw_series(
            scene
                .placements()
                .iter()
                .map(|p| Circle::new(point(p), marker_px, BLACK.stroke_width(1))),
        )
        .map_err(drawing_error)?;
    Ok(())
}

fn draw_labels<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    scene: &WheelScene,
    style: &RenderStyle,
    marker_radius: f64,
    marker_px: f64,
) -> Result<(), RenderError> {
    // Letters move up a little to leave room for the residue number underneath.
    let letter_offset = if style.show_numbers {
        marker_radius * 0.15
    } else {
        0.0
    };

    if style.show_labels {
        let letter = text_style(marker_px * 1.1, HPos::Center);
        chart
            .draw_series(scene.placements().iter().map(|p| {
                let (x, y) = point(p);
                Text::new(p.label().to_string(), (x, y + letter_offset), letter.clone())
            }))
            .map_err(drawing_error)?;
    }

    if style.show_numbers {
        let number = text_style(marker_px * 0.45, HPos::Center);
        chart
            .draw_series(scene.placements().iter().map(|p| {
                let (x, y) = point(p);
                Text::new(
                    p.number().to_string(),
                    (x, y - marker_radius * 0.62),
                    number.clone(),
                )
            }))
            .map_err(drawing_error)?;
    }
    Ok(())
}

fn draw_moment<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    scene: &WheelScene,
    marker_px: f64,
) -> Result<(), RenderError> {
    let profile = analysis::profile(scene);
    let length = scene.radius() * MOMENT_ARROW_LENGTH;
    let (cos, sin) = (profile.moment_angle.cos(), profile.moment_angle.sin());
    let tip = (length * cos, length * sin);

    let head = length * 0.12;
    let barb = |turn: f64| {
        let angle = profile.moment_angle + std::f64::consts::PI + turn;
        (tip.0 + head * angle.cos(), tip.1 + head * angle.sin())
    };

    let arrow_style = RGBColor(178, 34, 34).stroke_width(BACKBONE_WIDTH + 1);
    chart
        .draw_series([
            PathElement::new(vec![(0.0, 0.0), tip], arrow_style),
            PathElement::new(vec![barb(0.45), tip, barb(-0.45)], arrow_style),
        ])
        .map_err(drawing_error)?;

    chart
        .draw_series(std::iter::once(Text::new(
            format!("µH = {:.2}", profile.hydrophobic_moment),
            (0.0, -length * 0.25),
            text_style(marker_px * 0.6, HPos::Center),
        )))
        .map_err(drawing_error)?;
    Ok(())
}

fn draw_legend<DB: DrawingBackend>(
    chart: &mut Chart<'_, DB>,
    scene: &WheelScene,
    palette: &Palette,
    extent: f64,
    side: f64,
) -> Result<(), RenderError> {
    let legend = scene.legend(palette);
    let slots = legend.len().max(1) as f64;
    let slot_width = 2.0 * extent * 0.9 / slots;
    let y = -extent * 0.93;
    let swatch_px = (side * 0.012).max(2.0);
    let font = text_style(side * 0.025, HPos::Left);

    let anchor = |i: usize| -extent * 0.9 + slot_width * i as f64;

    chart
        .draw_series(legend.iter().enumerate().map(|(i, entry)| {
            Circle::new(
                (anchor(i), y),
                swatch_px as i32,
                rgb(entry.color).filled(),
            )
        }))
        .map_err(drawing_error)?;
    chart
        .draw_series((0..legend.len()).map(|i| {
            Circle::new((anchor(i), y), swatch_px as i32, BLACK.stroke_width(1))
        }))
        .map_err(drawing_error)?;

    let gap = extent * 0.05;
    chart
        .draw_series(legend.iter().enumerate().map(|(i, entry)| {
            Text::new(entry.category.label(), (anchor(i) + gap, y), font.clone())
        }))
        .map_err(drawing_error)?;
    Ok(())
}

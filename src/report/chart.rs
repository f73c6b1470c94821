use super::font::chart_font;
use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::Path;

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 40;
const MARGIN_BOTTOM: u32 = 50;
/// Smallest plot area, one pixel column per letter
const MIN_PLOT: u32 = 26;

const TITLE: &str = "Letters Frequency Bar Chart";
const X_LABEL: &str = "Letters from a-z";
const Y_LABEL: &str = "Frequency in %";
const TITLE_SCALE: f32 = 20.0;
const LABEL_SCALE: f32 = 14.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([220, 220, 220]);
const BAR: Rgb<u8> = Rgb([128, 0, 0]);

/// Y axis as (tick step, tick count) in percent; the axis tops out at `step * ticks`.
fn y_axis(frequencies: &[(char, f64)]) -> (f64, u32) {
    let peak = frequencies
        .iter()
        .map(|(_, percent)| *percent)
        .fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return (1.0, 1);
    }

    let step = (peak / 5.0).ceil().max(1.0);
    let ticks = ((peak / step).ceil() as u32).max(1);
    (step, ticks)
}

/// Draw one bar per letter present, labelled underneath, against a
/// percentage y axis, and save the chart as PNG.
pub fn render_letter_chart(
    frequencies: &[(char, f64)],
    path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let min_width = MARGIN_LEFT + MARGIN_RIGHT + MIN_PLOT;
    let min_height = MARGIN_TOP + MARGIN_BOTTOM + MIN_PLOT;
    if width < min_width || height < min_height {
        anyhow::bail!(
            "Chart size {}x{} is too small (minimum {}x{})",
            width,
            height,
            min_width,
            min_height
        );
    }
    let font = chart_font().context("Failed to load embedded chart font")?;

    let mut image = RgbImage::from_pixel(width, height, BACKGROUND);

    let left = MARGIN_LEFT as f32;
    let right = (width - MARGIN_RIGHT) as f32;
    let baseline = (height - MARGIN_BOTTOM) as f32;
    let plot_width = right - left;
    let plot_height = baseline - MARGIN_TOP as f32;

    let (step, ticks) = y_axis(frequencies);
    let axis_max = step * ticks as f64;

    for tick in 0..=ticks {
        let value = step * tick as f64;
        let y = baseline - plot_height * (value / axis_max) as f32;
        if tick > 0 {
            draw_line_segment_mut(&mut image, (left, y), (right, y), GRID);
        }

        let label = format!("{:.0}%", value);
        let (label_width, label_height) = text_size(LABEL_SCALE, &font, &label);
        draw_text_mut(
            &mut image,
            AXIS,
            left as i32 - label_width as i32 - 6,
            y as i32 - label_height as i32 / 2,
            LABEL_SCALE,
            &font,
            &label,
        );
    }

    let letters: Vec<&(char, f64)> = frequencies
        .iter()
        .filter(|(letter, _)| letter.is_ascii_lowercase())
        .collect();
    if !letters.is_empty() {
        let slot = plot_width / letters.len() as f32;
        let bar_width = (slot * 0.4).max(1.0);

        for (i, (letter, percent)) in letters.into_iter().enumerate() {
            let x = left + slot * i as f32 + (slot - bar_width) / 2.0;
            let bar_height = ((percent / axis_max) as f32 * plot_height).round();
            if bar_height >= 1.0 {
                draw_filled_rect_mut(
                    &mut image,
                    Rect::at(x.round() as i32, (baseline - bar_height) as i32)
                        .of_size(bar_width.round().max(1.0) as u32, bar_height as u32),
                    BAR,
                );
            }

            let label = letter.to_string();
            let (label_width, _) = text_size(LABEL_SCALE, &font, &label);
            draw_text_mut(
                &mut image,
                AXIS,
                (x + bar_width / 2.0) as i32 - label_width as i32 / 2,
                baseline as i32 + 4,
                LABEL_SCALE,
                &font,
                &label,
            );
        }
    }

    draw_line_segment_mut(&mut image, (left, baseline), (right, baseline), AXIS);
    draw_line_segment_mut(&mut image, (left, baseline), (left, MARGIN_TOP as f32), AXIS);

    let (title_width, title_height) = text_size(TITLE_SCALE, &font, TITLE);
    draw_text_mut(
        &mut image,
        AXIS,
        (width as i32 - title_width as i32) / 2,
        (MARGIN_TOP as i32 - title_height as i32) / 2,
        TITLE_SCALE,
        &font,
        TITLE,
    );

    let (x_label_width, x_label_height) = text_size(LABEL_SCALE, &font, X_LABEL);
    draw_text_mut(
        &mut image,
        AXIS,
        (left + plot_width / 2.0) as i32 - x_label_width as i32 / 2,
        height as i32 - x_label_height as i32 - 6,
        LABEL_SCALE,
        &font,
        X_LABEL,
    );
    draw_text_mut(&mut image, AXIS, 4, 4, LABEL_SCALE, &font, Y_LABEL);

    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write chart: {}", path.display()))
}

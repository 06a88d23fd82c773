// src/report/chart.rs
//! Horizontal bar charts and the co-occurrence heatmap, rendered straight
//! into PNGs with `image`.
//!
//! Text uses a built-in 3x5 pixel font (uppercase, digits, a few symbols)
//! scaled up; anything outside it draws as a blank cell.

use std::error::Error;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use crate::analysis::{Aggregates, Analysis};
use crate::config::consts::HEATMAP_NAMES;
use crate::file::ensure_directory;

const WIDTH: u32 = 960;
const MARGIN: u32 = 16;
const SCALE: u32 = 2;
const ADVANCE: u32 = 4 * SCALE;
const LINE_H: u32 = 5 * SCALE;
const BAR_H: u32 = 14;
const BAR_GAP: u32 = 6;
const MAX_LABEL: usize = 28;

const BG: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([40, 40, 40]);
const AXIS: Rgb<u8> = Rgb([170, 170, 170]);
const BAR: Rgb<u8> = Rgb([66, 133, 244]);

const HEAT_CELL: u32 = 18;
const HEAT_EMPTY: Rgb<u8> = Rgb([242, 242, 242]);
const HEAT_LOW: Rgb<u8> = Rgb([255, 237, 160]);
const HEAT_HIGH: Rgb<u8> = Rgb([189, 0, 38]);

/// One bar per `(label, value)` in input order.
pub fn bar_chart(title: &str, bars: &[(String, usize)]) -> RgbImage {
    let label_chars = bars
        .iter()
        .map(|(l, _)| l.chars().count().min(MAX_LABEL))
        .max()
        .unwrap_or(0) as u32;
    let label_w = label_chars * ADVANCE + MARGIN;
    let top = MARGIN * 2 + LINE_H;
    let height = top + bars.len() as u32 * (BAR_H + BAR_GAP) + MARGIN;

    let mut img = RgbImage::from_pixel(WIDTH, height.max(top + MARGIN), BG);
    draw_text(&mut img, MARGIN, MARGIN, title, INK);

    let max = bars.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let value_w = 8 * ADVANCE;
    let plot_x = MARGIN + label_w;
    let plot_w = WIDTH.saturating_sub(plot_x + value_w + MARGIN).max(1);

    fill_rect(&mut img, plot_x - 1, top, 1, height - top - MARGIN, AXIS);

    for (i, (label, value)) in bars.iter().enumerate() {
        let y = top + i as u32 * (BAR_H + BAR_GAP);
        let text_y = y + (BAR_H - LINE_H) / 2;
        let short: String = label.chars().take(MAX_LABEL).collect();
        draw_text(&mut img, MARGIN, text_y, &short, INK);

        let w = ((*value as u64 * plot_w as u64) / max as u64) as u32;
        fill_rect(&mut img, plot_x, y, w, BAR_H, BAR);
        draw_text(&mut img, plot_x + w + ADVANCE, text_y, &value.to_string(), INK);
    }
    img
}

/// Symmetric pair matrix over `names`. Rows carry `index name` labels,
/// columns the index only; the diagonal is greyed out.
pub fn heatmap(title: &str, names: &[String], agg: &Aggregates) -> RgbImage {
    let n = names.len() as u32;
    let labels: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} {}", i + 1, name.chars().take(MAX_LABEL).collect::<String>()))
        .collect();
    let label_chars = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    let grid_x = MARGIN + label_chars * ADVANCE + MARGIN;
    let grid_y = MARGIN * 3 + LINE_H * 2;
    let title_w = MARGIN * 2 + title.chars().count() as u32 * ADVANCE;
    let width = (grid_x + n * HEAT_CELL + MARGIN).max(title_w);
    let height = grid_y + n * HEAT_CELL + MARGIN;

    let mut img = RgbImage::from_pixel(width, height, BG);
    draw_text(&mut img, MARGIN, MARGIN, title, INK);

    let max = names
        .iter()
        .enumerate()
        .flat_map(|(i, a)| names[i + 1..].iter().map(move |b| agg.pair_count(a, b)))
        .max()
        .unwrap_or(0)
        .max(1);

    for (i, a) in names.iter().enumerate() {
        let offset = i as u32 * HEAT_CELL;
        draw_text(&mut img, MARGIN, grid_y + offset + (HEAT_CELL - LINE_H) / 2, &labels[i], INK);
        draw_text(&mut img, grid_x + offset + 1, grid_y - LINE_H - MARGIN / 2, &(i + 1).to_string(), INK);

        for (j, b) in names.iter().enumerate() {
            let color = if i == j { AXIS } else { heat(agg.pair_count(a, b), max) };
            let x = grid_x + j as u32 * HEAT_CELL;
            fill_rect(&mut img, x, grid_y + offset, HEAT_CELL - 1, HEAT_CELL - 1, color);
        }
    }
    img
}

fn heat(value: usize, max: usize) -> Rgb<u8> {
    if value == 0 {
        return HEAT_EMPTY;
    }
    let t = value as f32 / max as f32;
    let mix = |lo: u8, hi: u8| (lo as f32 + (hi as f32 - lo as f32) * t).round() as u8;
    Rgb([
        mix(HEAT_LOW.0[0], HEAT_HIGH.0[0]),
        mix(HEAT_LOW.0[1], HEAT_HIGH.0[1]),
        mix(HEAT_LOW.0[2], HEAT_HIGH.0[2]),
    ])
}

/// Write the standard chart set into `dir`. Returns the files written.
pub fn write_charts(a: &Analysis, dir: &Path, top_n: usize) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(dir)?;
    let mut written = Vec::new();

    let freq: Vec<(String, usize)> = a
        .aggregates
        .ranked_frequency()
        .into_iter()
        .take(top_n)
        .map(|e| (e.integration, e.apps))
        .collect();
    let path = dir.join("frequency.png");
    bar_chart(&format!("TOP {} INTEGRATIONS", freq.len()), &freq).save(&path)?;
    written.push(path);

    let density: Vec<(String, usize)> = a
        .aggregates
        .density_entries()
        .into_iter()
        .map(|d| (d.integrations.to_string(), d.apps))
        .collect();
    let path = dir.join("density.png");
    bar_chart("INTEGRATIONS PER APP", &density).save(&path)?;
    written.push(path);

    let cats: Vec<(String, usize)> = a
        .categories
        .iter()
        .map(|c| (c.category.label().to_string(), c.apps))
        .collect();
    let path = dir.join("categories.png");
    bar_chart("APPS PER CATEGORY", &cats).save(&path)?;
    written.push(path);

    let names: Vec<String> = a
        .aggregates
        .ranked_frequency()
        .into_iter()
        .take(HEATMAP_NAMES)
        .map(|e| e.integration)
        .collect();
    let path = dir.join("cooccurrence.png");
    heatmap("INTEGRATION CO-OCCURRENCE", &names, &a.aggregates).save(&path)?;
    written.push(path);

    logd!("Charts: wrote {} files to {}", written.len(), dir.display());
    Ok(written)
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let (iw, ih) = img.dimensions();
    for yy in y..(y + h).min(ih) {
        for xx in x..(x + w).min(iw) {
            img.put_pixel(xx, yy, color);
        }
    }
}

fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>) {
    for (i, ch) in text.chars().enumerate() {
        let gx = x + i as u32 * ADVANCE;
        for (row, bits) in glyph(ch).iter().enumerate() {
            for col in 0..3u32 {
                if bits & (0b100 >> col) != 0 {
                    fill_rect(img, gx + col * SCALE, y + row as u32 * SCALE, SCALE, SCALE, color);
                }
            }
        }
    }
}

fn glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '%' => [0b101, 0b001, 0b010, 0b100, 0b101],
        '(' => [0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => [0b010, 0b001, 0b001, 0b001, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        _ => [0; 5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_grows_with_bars() {
        let one = bar_chart("T", &[(s!("Slack"), 3)]);
        let two = bar_chart("T", &[(s!("Slack"), 3), (s!("Stripe"), 1)]);
        assert_eq!(one.width(), WIDTH);
        assert!(two.height() > one.height());
    }

    #[test]
    fn longest_bar_reaches_plot_edge() {
        let img = bar_chart("", &[(s!("A"), 10), (s!("B"), 5)]);
        let y = MARGIN * 2 + LINE_H + BAR_H / 2;
        let plot_x = MARGIN + ADVANCE + MARGIN;
        assert_eq!(*img.get_pixel(plot_x, y), BAR);
    }

    #[test]
    fn empty_chart_still_renders() {
        let img = bar_chart("EMPTY", &[]);
        assert!(img.height() > 0);
    }

    #[test]
    fn heatmap_shades_by_pair_count() {
        use crate::analysis::aggregate;
        use crate::pipeline::AppIntegrationSet;

        let agg = aggregate(&[
            AppIntegrationSet::new("1", ["A", "B"]),
            AppIntegrationSet::new("2", ["A", "B"]),
            AppIntegrationSet::new("3", ["A", "C"]),
        ]);
        let names = vec![s!("A"), s!("B"), s!("C")];
        let img = heatmap("", &names, &agg);

        // Labels are "1 A" .. "3 C": three glyphs wide
        let grid_x = MARGIN + 3 * ADVANCE + MARGIN;
        let grid_y = MARGIN * 3 + LINE_H * 2;
        let cell = |row: u32, col: u32| {
            *img.get_pixel(grid_x + col * HEAT_CELL + HEAT_CELL / 2, grid_y + row * HEAT_CELL + HEAT_CELL / 2)
        };

        assert_eq!(img.height(), grid_y + 3 * HEAT_CELL + MARGIN);
        assert_eq!(cell(0, 1), HEAT_HIGH);
        assert_eq!(cell(1, 0), HEAT_HIGH);
        assert_eq!(cell(1, 2), HEAT_EMPTY);
        assert_eq!(cell(2, 2), AXIS);
        let half = cell(0, 2);
        assert!(half != HEAT_HIGH && half != HEAT_EMPTY);
    }
}

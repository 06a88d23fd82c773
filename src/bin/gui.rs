// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use app_integrations::{config::state::AppState, gui};
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

/// 32x32 icon: three linked nodes on a rounded tile, drawn at startup.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let tile = Rgba([40, 160, 90, 255]);
    let node = Rgba([255, 255, 255, 255]);
    let mut img = RgbaImage::from_pixel(N, N, Rgba([0, 0, 0, 0]));

    let nodes = [(9.0f32, 22.0f32), (16.0, 9.0), (23.0, 22.0)];
    for (x, y, px) in img.enumerate_pixels_mut() {
        let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
        let corner = 6.0;
        let dx = (corner - fx).max(fx - (N as f32 - corner)).max(0.0);
        let dy = (corner - fy).max(fy - (N as f32 - corner)).max(0.0);
        if dx * dx + dy * dy <= corner * corner {
            *px = tile;
        }
        let on_node = nodes.iter().any(|(nx, ny)| (fx - nx).powi(2) + (fy - ny).powi(2) <= 12.0);
        let on_edge = nodes.iter().zip(nodes.iter().cycle().skip(1)).any(|(a, b)| dist_to_segment((fx, fy), *a, *b) <= 1.0);
        if on_node || on_edge {
            *px = node;
        }
    }

    IconData { rgba: img.into_raw(), width: N, height: N }
}

fn dist_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len2 = abx * abx + aby * aby;
    let t = (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len2).clamp(0.0, 1.0);
    let (cx, cy) = (a.0 + t * abx, a.1 + t * aby);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

fn main() {
    let state = AppState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

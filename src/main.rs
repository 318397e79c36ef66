// src/main.rs

//! `gfx-demo`: renders a small scene into an in-memory canvas through the
//! decorator frames and prints the result as ASCII art.

use std::path::PathBuf;

use anyhow::Context;
use core_gfx::config::Config;
use core_gfx::{
    Buffer, Canvas, Circle, Color, Drawable, Filter, Frame, Image, Line, Rectangle, Relief,
    Snapshot, Subframe, Text, Vector,
};
use log::{debug, info};

/// Characters from light to dark.
const RAMP: &[u8] = b" .:-=+*#%@";

const PANEL: i32 = 20;

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting gfx-demo...");

    // --- Configuration ---
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let config = Config::load(&path).context("Could not load demo configuration")?;
            info!("Configuration loaded from {}", path.display());
            config
        }
        None => {
            info!("No configuration file given, using defaults.");
            Config::default()
        }
    };

    // --- Rendering ---
    let mut canvas = Canvas::new(config.canvas.size());
    canvas.clear(config.canvas.background);
    {
        let mut snapshot = Snapshot::new(&mut canvas);
        if config.scene.buffered {
            let mut buffer = Buffer::new(&mut snapshot);
            draw_scene(&mut buffer, &config);
            info!("Flushing {} buffered pixels", buffer.pending());
            buffer.flush();
        } else {
            draw_scene(&mut snapshot, &config);
            snapshot.flush();
        }
        let size = Image::size(&snapshot);
        let recorded = (0..size.y)
            .flat_map(|y| (0..size.x).map(move |x| Vector { x, y }))
            .filter(|&p| !snapshot.read(p).is_transparent())
            .count();
        info!("Snapshot recorded {} pixels", recorded);
    }

    // --- Output ---
    for row in canvas.rows() {
        let line: String = row.iter().map(|&c| shade(c)).collect();
        println!("{}", line.trim_end());
    }
    info!("gfx-demo finished.");
    Ok(())
}

fn draw_scene(frame: &mut dyn Frame, config: &Config) {
    let size = frame.size();
    debug!("Drawing scene into {}", size);

    Rectangle::new(Vector::ORIGIN, size - Vector::ONE).draw(frame);

    let top = Vector::new(size.x as i32 - 5, size.y as i32 / 2 - 3);
    Rectangle::new(Vector::new(2, 2), top)
        .with_foreground(Color::SILVER)
        .with_width(2)
        .with_relief(Relief::Raised)
        .draw(frame);

    let left = Vector::new(5, 5);
    draw_panel(&mut Subframe::new(frame, left, Vector::new(PANEL, PANEL)));
    if config.scene.mirrored {
        let right = Vector::new(size.x as i32 - 6, 5);
        draw_panel(&mut Subframe::new(frame, right, Vector::new(-PANEL, PANEL)));
    } else {
        let right = Vector::new(size.x as i32 - 5 - PANEL, 5);
        draw_panel(&mut Subframe::new(frame, right, Vector::new(PANEL, PANEL)));
    }

    // a faint cross between the panels, drawn at half intensity
    let mut faint = Filter::new(frame).with_filter(|c| c.mixed_with(Color::WHITE));
    let centre = Vector::new(size.x as i32 / 2, 15);
    Line::new(centre - Vector::new(8, 8), Vector::new(17, 17)).draw(&mut faint);
    Line::new(centre + Vector::new(8, -8), Vector::new(-17, 17)).draw(&mut faint);
    drop(faint);

    let message = Vector::new(0, size.y as i32 / 2);
    Text::new(&config.scene.message, config.text.format()).draw(frame, message);
}

fn draw_panel(panel: &mut dyn Frame) {
    panel.clear(Color::BLUE);
    Circle::new(Vector::new(10, 10), 5)
        .with_colors(Color::RED, Color::YELLOW)
        .draw(panel);
    Line::new(Vector::new(0, 19), Vector::new(20, -20))
        .with_color(Color::WHITE)
        .draw(panel);
}

/// Maps a color to an ASCII character by its luminance.
fn shade(color: Color) -> char {
    let luminance = (299 * color.red() as u32 + 587 * color.green() as u32
        + 114 * color.blue() as u32)
        / 1000;
    let darkness = 255 - luminance.min(255);
    let index = darkness as usize * (RAMP.len() - 1) / 255;
    RAMP[index] as char
}

//! Pong War entry point
//!
//! Native presentation host. The windowed mode owns a framebuffer window and
//! drives tick + draw on one sequential loop, so every drawn frame is the
//! consistent output of the tick before it. The headless mode drives the
//! engine through the frame pump instead and just logs the score.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use font8x8::{BASIC_FONTS, UnicodeFonts};
use minifb::{Key, Window, WindowOptions};

use pong_war::Settings;
use pong_war::consts::FRAME_INTERVAL_MS;
use pong_war::host::{FramePump, Present};
use pong_war::sim::{BallView, Engine, Faction, Frame};

fn main() {
    env_logger::init();
    log::info!("Pong War starting");

    let settings = Settings::load();
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => run_windowed(&settings),
        Some("--headless") => {
            let secs = args.next().and_then(|s| s.parse().ok()).unwrap_or(10);
            run_headless(secs, &settings);
        }
        Some(other) => {
            eprintln!("unknown argument: {other}");
            eprintln!("usage: pong-war [--headless [seconds]]");
        }
    }
}

/// Windowed host: one sequential tick/draw loop over a minifb window.
fn run_windowed(settings: &Settings) {
    let width = settings.window_width;
    let height = settings.window_height;

    let mut window = match Window::new("Pong War", width, height, WindowOptions::default()) {
        Ok(window) => window,
        Err(err) => {
            log::error!("unable to create window: {err}");
            return;
        }
    };
    window.set_target_fps((1000 / FRAME_INTERVAL_MS) as usize);

    let mut engine = Engine::new();
    if let Err(err) = engine.start(width as f32, height as f32) {
        log::error!("unable to start match: {err}");
        return;
    }

    let mut buffer = vec![0u32; width * height];
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Err(err) = engine.tick() {
            log::error!("tick failed: {err}");
            break;
        }
        let Some(frame) = engine.frame() else {
            break;
        };
        draw_frame(&frame, settings, &mut buffer, width, height);
        if let Err(err) = window.update_with_buffer(&buffer, width, height) {
            log::error!("presenting frame failed: {err}");
            break;
        }
    }
    engine.stop();
}

/// Headless host: the frame pump drives the engine for a fixed duration and
/// a presenter logs the running score.
fn run_headless(secs: u64, settings: &Settings) {
    log::info!("headless mode for {secs}s");

    let engine = Arc::new(Mutex::new(Engine::new()));
    {
        let Ok(mut guard) = engine.lock() else {
            log::error!("engine lock poisoned");
            return;
        };
        if let Err(err) = guard.start(
            settings.window_width as f32,
            settings.window_height as f32,
        ) {
            log::error!("unable to start match: {err}");
            return;
        }
    }

    let mut pump = FramePump::new(Arc::clone(&engine));
    pump.start(ScoreLog::default());
    thread::sleep(Duration::from_secs(secs));
    pump.stop();

    if let Ok(mut guard) = engine.lock() {
        if let Some(score) = guard.score() {
            log::info!("final score - Day: {} | Night: {}", score.day, score.night);
        }
        guard.stop();
    }
}

/// Logs the running score about once a second.
#[derive(Default)]
struct ScoreLog {
    frames: u64,
}

impl Present for ScoreLog {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames % 60 == 1 {
            log::info!("Day: {} | Night: {}", frame.score.day, frame.score.night);
        }
    }
}

/// Rasterize one frame: territory cells, both balls, score overlay.
fn draw_frame(frame: &Frame, settings: &Settings, buffer: &mut [u32], width: usize, height: usize) {
    let edge = frame.cell_edge as usize;
    for y in 0..height {
        let row = y / edge;
        for x in 0..width {
            let col = x / edge;
            // Pixels beyond the grid's extent keep the Day color
            let color = match frame.owner_at(col, row) {
                Some(Faction::Night) => settings.night_color,
                _ => settings.day_color,
            };
            buffer[y * width + x] = color;
        }
    }

    for ball in &frame.balls {
        draw_ball(ball, settings.ball_color, buffer, width, height);
    }

    let text = format!("Day: {} | Night: {}", frame.score.day, frame.score.night);
    draw_text(buffer, width, height, 10, 25, &text, settings.text_color, 2);
}

/// Filled circle at the ball's position.
fn draw_ball(ball: &BallView, color: u32, buffer: &mut [u32], width: usize, height: usize) {
    let r = ball.radius;
    let min_x = (ball.pos.x - r).floor().max(0.0) as usize;
    let max_x = (ball.pos.x + r).ceil().clamp(0.0, width as f32) as usize;
    let min_y = (ball.pos.y - r).floor().max(0.0) as usize;
    let max_y = (ball.pos.y + r).ceil().clamp(0.0, height as f32) as usize;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let dx = x as f32 + 0.5 - ball.pos.x;
            let dy = y as f32 + 0.5 - ball.pos.y;
            if dx * dx + dy * dy <= r * r {
                buffer[y * width + x] = color;
            }
        }
    }
}

/// Draw text with the 8x8 bitmap font, scaled up by `scale`.
fn draw_text(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    x: usize,
    y: usize,
    text: &str,
    color: u32,
    scale: usize,
) {
    let mut cursor_x = x;
    for c in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(c) {
            for (row_i, row) in glyph.iter().enumerate() {
                for col_i in 0..8 {
                    if (row >> col_i) & 1 == 1 {
                        for sy in 0..scale {
                            for sx in 0..scale {
                                let px = cursor_x + col_i * scale + sx;
                                let py = y + row_i * scale + sy;
                                if px < width && py < height {
                                    buffer[py * width + px] = color;
                                }
                            }
                        }
                    }
                }
            }
        }
        cursor_x += 8 * scale;
    }
}

//! Life grid demo - Drive a session against a terminal surface.

use std::time::{Duration, Instant};
use std::{env, fs, process, thread};

use life_grid::render::{Line, Rect};
use life_grid::schema::Rgba;
use life_grid::{Session, Surface, WorldConfig, WorldStats};

/// Character framebuffer standing in for a canvas.
///
/// Cell rectangles are rasterized by their fill's effective luminance over
/// a white background: bright fills map to light glyphs, dark fills to
/// heavy blocks. Gridlines are accepted but not drawn; character cells are
/// too coarse for hairlines.
struct TermSurface {
    columns: usize,
    rows: usize,
    buffer: Vec<char>,
}

impl TermSurface {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            buffer: vec![' '; columns * rows],
        }
    }

    fn present(&self) {
        let mut out = String::with_capacity((self.columns + 1) * self.rows + 8);
        out.push_str("\x1b[H\x1b[2J");
        for row in self.buffer.chunks(self.columns) {
            out.extend(row.iter());
            out.push('\n');
        }
        print!("{out}");
    }
}

/// Glyph ramp from light to heavy, indexed by darkness.
fn glyph_for(fill: &Rgba) -> char {
    let luminance =
        0.2126 * f32::from(fill.r) + 0.7152 * f32::from(fill.g) + 0.0722 * f32::from(fill.b);
    // Composite over a white terminal background.
    let effective = luminance * fill.a + 255.0 * (1.0 - fill.a);
    match effective as u32 {
        0..64 => '█',
        64..128 => '▓',
        128..192 => '▒',
        192..240 => '░',
        _ => ' ',
    }
}

impl Surface for TermSurface {
    fn size(&self) -> (f32, f32) {
        (self.columns as f32, self.rows as f32)
    }

    fn replace_cells(&mut self, cells: Vec<Rect>) {
        self.buffer.fill(' ');
        for rect in &cells {
            let glyph = glyph_for(&rect.fill);
            let x0 = rect.x.round().max(0.0) as usize;
            let y0 = rect.y.round().max(0.0) as usize;
            let x1 = ((rect.x + rect.width).round() as usize).min(self.columns);
            let y1 = ((rect.y + rect.height).round() as usize).min(self.rows);
            for y in y0..y1 {
                for x in x0..x1 {
                    self.buffer[y * self.columns + x] = glyph;
                }
            }
        }
        self.present();
    }

    fn set_gridlines(&mut self, _lines: Vec<Line>) {}

    fn clear(&mut self) {
        self.buffer.fill(' ');
    }

    fn teardown(&mut self) {
        println!();
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        eprintln!("Usage: {} [config.json] [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life world against a terminal surface.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Optional world configuration file");
        eprintln!("  generations  Number of generations to run (default: 30)");
        eprintln!();
        eprintln!("An example configuration is printed with --example.");
        process::exit(1);
    }

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    let config = match args.get(1) {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading config file: {e}");
                process::exit(1);
            });
            serde_json::from_str(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config: {e}");
                process::exit(1);
            })
        }
        None => WorldConfig {
            // Terminal cells are characters, not pixels: two columns per
            // cell, and a cadence brisk enough to watch.
            cell_size_hint: 2.0,
            min_update_interval_ms: 250,
            ..Default::default()
        },
    };
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(30);

    let surface = TermSurface::new(64, 24);
    let mut session = Session::mount(surface, config, Instant::now()).unwrap_or_else(|e| {
        eprintln!("Error mounting session: {e}");
        process::exit(1);
    });

    log::info!(
        "running {}x{} world for {} generations",
        session.world().width(),
        session.world().height(),
        generations
    );

    // Stand-in for a render loop: one notification per ~16 ms frame.
    let frame_interval = Duration::from_millis(16);
    while session.world().generation() < generations {
        if session.frame(Instant::now()) {
            let stats = WorldStats::from_world(session.world());
            log::info!(
                "generation {}: population {} ({:.1}% alive)",
                stats.generation,
                stats.population,
                stats.density * 100.0
            );
        }
        thread::sleep(frame_interval);
    }

    session.dispose();
}

fn print_example_config() {
    let config = WorldConfig::default();
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}

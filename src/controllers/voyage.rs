use std::time::Instant;

use crate::core::actions::capture_region::capture_region;
use crate::core::actions::render_frame::{render_frame, render_overview, RenderPlan};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::selection_rect::SelectionRect;
use crate::core::navigation::history::ViewportHistory;
use crate::core::palette::factory::palette_for_kind;
use crate::core::palette::kinds::PaletteKind;
use crate::storage::write_ppm::write_ppm;

/// End-to-end demo standing in for the interactive shell: renders the home
/// view and the minimap, zooms twice, captures a centered selection, and
/// writes everything as PPM files under `output/`.
pub fn voyage_controller() -> Result<(), Box<dyn std::error::Error>> {
    let width: u32 = 800;
    let height: u32 = 600;
    let palette_kind = PaletteKind::default();
    let palette = palette_for_kind(palette_kind);

    println!("Rendering escape-time view...");
    println!("Image size: {}x{}", width, height);
    println!("Palette: {}", palette_kind);

    let mut history = ViewportHistory::new();

    // Two zooms towards the seahorse valley, the way a user would click.
    history.zoom_in(290, 300, width, height);
    let viewport = history.zoom_in(400, 240, width, height);
    println!(
        "Viewport: center ({:.6}, {:.6}), scale {:.1e}, budget {}",
        viewport.center_x, viewport.center_y, viewport.scale, viewport.iteration_budget
    );

    let mut frame = PixelBuffer::new(width, height)?;
    let start = Instant::now();
    render_frame(RenderPlan::live(&viewport), &palette, &mut frame);
    println!("Frame duration: {:?}", start.elapsed());

    let mut minimap = PixelBuffer::new(200, 150)?;
    render_overview(&viewport, &palette, &mut minimap);

    let selection = SelectionRect::new(
        Point { x: 200, y: 150 },
        Point { x: 600, y: 450 },
    );
    let artifact = capture_region(&frame, selection, &viewport)?;

    std::fs::create_dir_all("output")?;
    write_ppm(&frame, "output/voyage.ppm")?;
    write_ppm(&minimap, "output/overview.ppm")?;

    let capture_path = format!(
        "output/capture_{:.6}_{:.6}_{:.1e}.ppm",
        artifact.center.re, artifact.center.im, artifact.scale
    );
    write_ppm(&artifact.image, &capture_path)?;

    println!("Saved output/voyage.ppm, output/overview.ppm and {}", capture_path);
    Ok(())
}

use crate::assets::{ImageSlot, LayerSlot};
use crate::constants::*;
use crate::core::{Crystal, CRYSTAL_BASE_RADIUS};
use fnv::FnvHashMap;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d) {
    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
}

/// Draw a full-canvas image layer if its asset is ready; otherwise skip it.
pub fn draw_layer(ctx: &web::CanvasRenderingContext2d, layer: &LayerSlot) {
    layer.with_ready(|slot| {
        _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            slot.element(),
            0.0,
            0.0,
            CANVAS_WIDTH as f64,
            CANVAS_HEIGHT as f64,
        );
    });
}

/// Small decorative circle whose radius breathes with the frame count.
/// Purely cosmetic and independent of the interaction pulse.
pub fn draw_idle_marker(ctx: &web::CanvasRenderingContext2d, frame_count: u64) {
    let radius = IDLE_MARKER_MAX_RADIUS * (frame_count as f64 * IDLE_MARKER_RATE).sin().powi(2);
    ctx.set_fill_style_str("#000000");
    ctx.begin_path();
    _ = ctx.arc(IDLE_MARKER_X, IDLE_MARKER_Y, radius, 0.0, TAU);
    ctx.fill();
}

/// Draw one crystal: its sprite if the image is ready, else a tinted circle.
/// Activated crystals get full alpha and a colored glow; the rest render
/// muted.
pub fn draw_crystal(
    ctx: &web::CanvasRenderingContext2d,
    crystal: &Crystal,
    activated: bool,
    sprites: &FnvHashMap<String, ImageSlot>,
) {
    let radius = (CRYSTAL_BASE_RADIUS * crystal.scale) as f64;
    ctx.save();
    if activated {
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_color(&crystal.color);
        ctx.set_shadow_blur(CRYSTAL_GLOW_BLUR);
    } else {
        ctx.set_global_alpha(CRYSTAL_MUTED_ALPHA);
    }

    let sprite = crystal
        .sprite
        .as_ref()
        .and_then(|path| sprites.get(path))
        .filter(|slot| slot.ready());
    match sprite {
        Some(slot) => {
            let size = radius * 2.0;
            _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                slot.element(),
                crystal.position.x as f64 - radius,
                crystal.position.y as f64 - radius,
                size,
                size,
            );
        }
        None => {
            ctx.set_fill_style_str(&crystal.color);
            ctx.begin_path();
            _ = ctx.arc(
                crystal.position.x as f64,
                crystal.position.y as f64,
                radius,
                0.0,
                TAU,
            );
            ctx.fill();
        }
    }
    ctx.restore();
}

/// Draw the expanding ring. Alpha fades and stroke width grows linearly with
/// the ring's progress toward the canvas diagonal.
pub fn draw_pulse_ring(
    ctx: &web::CanvasRenderingContext2d,
    origin: Vec2,
    radius: f32,
    max_radius: f32,
) {
    let progress = (radius / max_radius).clamp(0.0, 1.0) as f64;
    let alpha = RING_ALPHA_START + (RING_ALPHA_END - RING_ALPHA_START) * progress;
    let width = RING_WIDTH_START + (RING_WIDTH_END - RING_WIDTH_START) * progress;
    ctx.save();
    ctx.set_global_alpha(alpha);
    ctx.set_line_width(width);
    ctx.set_stroke_style_str("#ffffff");
    ctx.begin_path();
    _ = ctx.arc(origin.x as f64, origin.y as f64, radius as f64, 0.0, TAU);
    ctx.stroke();
    ctx.restore();
}

//! Canvas painter
//!
//! Replays a [`RadarScene`] onto a 2d context. The only module in this
//! crate that needs a browser.

use ntp_panel_shared::PanelResult;
use web_sys::CanvasRenderingContext2d;

use crate::scene::{DrawOp, RadarScene, TextAlign};

fn align_keyword(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

/// Clear the canvas and replay the scene's draw list
pub fn paint(ctx: &CanvasRenderingContext2d, scene: &RadarScene) -> PanelResult<()> {
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);

    for op in &scene.ops {
        match op {
            DrawOp::StrokeCircle {
                x,
                y,
                radius,
                color,
                line_width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width);
                ctx.begin_path();
                ctx.arc(*x, *y, *radius, 0.0, std::f64::consts::TAU)?;
                ctx.stroke();
            }
            DrawOp::FillCircle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(*x, *y, *radius, 0.0, std::f64::consts::TAU)?;
                ctx.fill();
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                line_width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width);
                ctx.begin_path();
                ctx.move_to(*x1, *y1);
                ctx.line_to(*x2, *y2);
                ctx.stroke();
            }
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *width, *height);
            }
            DrawOp::Text {
                content,
                x,
                y,
                font,
                color,
                align,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(font);
                ctx.set_text_align(align_keyword(*align));
                ctx.fill_text(content, *x, *y)?;
            }
        }
    }

    log::trace!("painted {} radar ops", scene.ops.len());
    Ok(())
}

//! Immediate-mode drawing of one frame onto the 2D canvas.

use rand::Rng;
use web_sys::{CanvasRenderingContext2d, HtmlVideoElement};

use super::clock::Phase;
use super::state::Game;
use super::zones::Rect;

const FONT_FAMILY: &str = "'Noto Sans TC', 'Microsoft JhengHei', sans-serif";

pub fn render_frame<R: Rng>(
    ctx: &CanvasRenderingContext2d,
    video: Option<&HtmlVideoElement>,
    game: &Game<R>,
    now: f64,
) {
    let w = game.config().canvas_width;
    let h = game.config().canvas_height;

    ctx.set_fill_style_str("#000");
    ctx.fill_rect(0.0, 0.0, w, h);
    if let Some(video) = video {
        draw_mirrored_video(ctx, video, w, h);
    }

    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    match game.phase() {
        Phase::Countdown => {
            ctx.set_fill_style_str("#fff");
            set_font(ctx, 60.0);
            ctx.fill_text(&game.countdown().to_string(), w / 2.0, h / 2.0 - 80.0).ok();
            set_font(ctx, 40.0);
            ctx.fill_text("準備開始！", w / 2.0, h / 2.0).ok();
            set_font(ctx, 28.0);
            ctx.fill_text("請將詞彙拖曳至正確的分類區塊", w / 2.0, h / 2.0 + 50.0).ok();
        }
        Phase::Ended => {
            ctx.set_fill_style_str("#fff");
            set_font(ctx, 50.0);
            ctx.fill_text("遊戲結束！", w / 2.0, h / 2.0 - 50.0).ok();
            ctx.fill_text(&format!("最終分數: {}", game.score()), w / 2.0, h / 2.0 + 20.0)
                .ok();
        }
        Phase::Playing => {
            ctx.set_fill_style_str("#fff");
            set_font(ctx, 36.0);
            ctx.fill_text(&format!("時間: {}s", game.time_remaining()), w - 150.0, 40.0)
                .ok();
            ctx.fill_text(&format!("分數: {}", game.score()), 150.0, 40.0).ok();

            for zone in game.zones() {
                ctx.set_stroke_style_str("#fff");
                ctx.set_line_width(3.0);
                rounded_rect(ctx, &zone.rect, 10.0);
                ctx.stroke();
                let c = zone.rect.center();
                ctx.set_fill_style_str("#fff");
                set_font(ctx, 30.0);
                ctx.fill_text(zone.category.label(), c.x, c.y).ok();
            }

            // Black outline under yellow fill keeps words readable over video.
            set_font(ctx, 32.0);
            for word in game.words() {
                ctx.set_line_width(3.0);
                ctx.set_stroke_style_str("#000");
                ctx.stroke_text(word.entry.text, word.pos.x, word.pos.y).ok();
                ctx.set_fill_style_str("rgb(255,255,0)");
                ctx.fill_text(word.entry.text, word.pos.x, word.pos.y).ok();
            }

            if let Some(fb) = game.visible_feedback(now) {
                set_font(ctx, 36.0);
                ctx.set_fill_style_str(&fb.color.css());
                ctx.fill_text(&fb.text, w / 2.0, h / 2.0).ok();
            }
        }
    }
}

fn draw_mirrored_video(ctx: &CanvasRenderingContext2d, video: &HtmlVideoElement, w: f64, h: f64) {
    ctx.save();
    if ctx.translate(w, 0.0).is_ok() && ctx.scale(-1.0, 1.0).is_ok() {
        ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, w, h)
            .ok();
    }
    ctx.restore();
}

fn set_font(ctx: &CanvasRenderingContext2d, px: f64) {
    ctx.set_font(&format!("{px}px {FONT_FAMILY}"));
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, r: &Rect, radius: f64) {
    let radius = radius.min(r.w / 2.0).min(r.h / 2.0);
    ctx.begin_path();
    ctx.move_to(r.x + radius, r.y);
    ctx.arc_to(r.x + r.w, r.y, r.x + r.w, r.y + r.h, radius).ok();
    ctx.arc_to(r.x + r.w, r.y + r.h, r.x, r.y + r.h, radius).ok();
    ctx.arc_to(r.x, r.y + r.h, r.x, r.y, radius).ok();
    ctx.arc_to(r.x, r.y, r.x + r.w, r.y, radius).ok();
    ctx.close_path();
}

use crate::plane::{Plane, CENTER_OFFSET};
use eframe::egui;

// Render-texture canvas: the scene is rasterized into an `egui::ColorImage`,
// uploaded as a texture, and blitted into the allocated rect. The texture is
// only regenerated when the size or the drawn state changes.

// everything the rasterizer reads, rounded so the cache key is comparable
type SceneKey = (bool, i32, i32, i32, [u8; 4]);

fn scene_key(plane: &Plane) -> SceneKey {
    let pos = plane.position();
    let prim = plane.primitive();
    (
        plane.to_draw(),
        pos.x.round() as i32,
        pos.y.round() as i32,
        prim.radius.round() as i32,
        prim.color.to_array(),
    )
}

pub struct CanvasView {
    texture: Option<egui::TextureHandle>,
    last_size: [usize; 2],
    last_key: Option<SceneKey>,
}

impl Default for CanvasView {
    fn default() -> Self {
        CanvasView::new()
    }
}

impl CanvasView {
    pub fn new() -> CanvasView {
        CanvasView {
            texture: None,
            last_size: [0, 0],
            last_key: None,
        }
    }

    /// Lays the canvas out over the remaining space, forwards pointer
    /// movement to the plane (in canvas-local coordinates), and paints the
    /// current scene.
    pub fn show(&mut self, ui: &mut egui::Ui, plane: &mut Plane) {
        let size = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        if let Some(pointer) = response.hover_pos() {
            plane.follow_pointer(pointer - rect.min.to_vec2());
        }

        let tex_id = self.ensure_texture(ui.ctx(), plane, rect.size());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter().image(tex_id, rect, uv, egui::Color32::WHITE);
    }

    /// Ensure the texture for the given scene/size exists and is up to date. Returns the texture id.
    pub fn ensure_texture(
        &mut self,
        ctx: &egui::Context,
        plane: &Plane,
        size: egui::Vec2,
    ) -> egui::TextureId {
        let w = size.x.max(1.0) as usize;
        let h = size.y.max(1.0) as usize;

        let key = scene_key(plane);
        let need_update =
            self.texture.is_none() || self.last_size != [w, h] || self.last_key != Some(key);
        if !need_update {
            return self.texture.as_ref().unwrap().id();
        }

        let img = generate_image(plane, w, h);
        let tex = ctx.load_texture("canvas_tex", img, egui::TextureOptions::LINEAR);
        self.texture = Some(tex);
        self.last_size = [w, h];
        self.last_key = Some(key);
        self.texture.as_ref().unwrap().id()
    }
}

fn generate_image(plane: &Plane, w: usize, h: usize) -> egui::ColorImage {
    let mut pixels = vec![0u8; w * h * 4];

    // background: dark, slightly darker toward the edges
    for y in 0..h {
        for x in 0..w {
            let fx = x as f32 / (w as f32).max(1.0) - 0.5;
            let fy = y as f32 / (h as f32).max(1.0) - 0.5;
            let dist = (fx * fx + fy * fy).sqrt();
            let dark = (1.0 - dist * 0.6).clamp(0.5, 1.0);

            let idx = (y * w + x) * 4;
            pixels[idx] = (28.0 * dark) as u8;
            pixels[idx + 1] = (28.0 * dark) as u8;
            pixels[idx + 2] = (34.0 * dark) as u8;
            pixels[idx + 3] = 255;
        }
    }

    if plane.to_draw() {
        let prim = plane.primitive();
        let center = plane.position() + CENTER_OFFSET;
        let r = prim.radius;
        let [cr, cg, cb, _] = prim.color.to_array();

        // bounding box of the circle, clamped to the canvas
        let x0 = (center.x - r - 1.0).floor().max(0.0) as usize;
        let x1 = ((center.x + r + 1.0).ceil().min(w as f32)).max(0.0) as usize;
        let y0 = (center.y - r - 1.0).floor().max(0.0) as usize;
        let y1 = ((center.y + r + 1.0).ceil().min(h as f32)).max(0.0) as usize;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let dist = (dx * dx + dy * dy).sqrt();
                // coverage ramps from 1 inside to 0 outside over ~1 px
                let cover = (r - dist + 0.5).clamp(0.0, 1.0);
                if cover <= 0.0 {
                    continue;
                }
                let idx = (y * w + x) * 4;
                pixels[idx] = blend(pixels[idx], cr, cover);
                pixels[idx + 1] = blend(pixels[idx + 1], cg, cover);
                pixels[idx + 2] = blend(pixels[idx + 2], cb, cover);
            }
        }
    }

    egui::ColorImage::from_rgba_unmultiplied([w, h], &pixels)
}

fn blend(bg: u8, fg: u8, t: f32) -> u8 {
    (bg as f32 + (fg as f32 - bg as f32) * t) as u8
}

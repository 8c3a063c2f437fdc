use std::f64::consts::PI;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::dom::viewport_width;
use crate::particles::ParticleField;

/// Draws a [`ParticleField`] onto a canvas sized to its container.
pub struct ParticleCanvas {
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: ParticleField<SmallRng>,
}

impl ParticleCanvas {
    pub fn new(container: HtmlElement, canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;

        let mut particle_canvas = Self {
            container,
            canvas,
            context,
            field: ParticleField::new(SmallRng::seed_from_u64(seed)),
        };
        particle_canvas.resize();
        Ok(particle_canvas)
    }

    /// Matches the backing store to the container and reseeds the field.
    pub fn resize(&mut self) {
        let width = f64::from(self.container.client_width());
        let height = f64::from(self.container.client_height());
        let dpr = window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .max(1.0);

        self.canvas.set_width((width * dpr).floor() as u32);
        self.canvas.set_height((height * dpr).floor() as u32);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
        let _ = self.context.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        self.field.resize(width, height, viewport_width());
    }

    pub fn particle_count(&self) -> usize {
        self.field.particles().len()
    }

    pub fn frame(&mut self) {
        self.field.step();

        let (width, height) = self.field.size();
        let context = &self.context;
        context.clear_rect(0.0, 0.0, width, height);
        for particle in self.field.particles() {
            context.begin_path();
            context.set_fill_style_str(particle.color);
            context.set_global_alpha(particle.opacity);
            let _ = context.arc(particle.x, particle.y, particle.radius, 0.0, PI * 2.0);
            context.fill();
        }
        context.set_global_alpha(1.0);
    }
}

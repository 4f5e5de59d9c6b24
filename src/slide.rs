use raylib::prelude::*;
use snowfall::SlideTarget;
use snowfall::constants::SLIDE_FILL;

pub struct Slide {
    image: Texture2D,
    pub active: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image, active: false }
    }

    // Largest scale keeping the image within SLIDE_FILL of the window, never upscaled
    fn fit_scale(&self, screen_width: f32, screen_height: f32) -> f32 {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return 0.0;
        }
        let scale_x = screen_width * SLIDE_FILL / tex_width;
        let scale_y = screen_height * SLIDE_FILL / tex_height;
        scale_x.min(scale_y).min(1.0)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.active {
            return;
        }
        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = self.fit_scale(screen_width, screen_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Slides in display order.
#[derive(Default)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for slide in &self.slides {
            slide.draw(d);
        }
    }
}

impl SlideTarget for SlideDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = active;
        }
    }
}

use raylib::prelude::*;
use snowfall::ImageProbe;
use snowfall::SnowflakeDescriptor;
use snowfall::snowfall::PlacedFlake;

/// Decodes the file with raylib; anything that does not load is unavailable.
pub struct FileImageProbe;

impl ImageProbe for FileImageProbe {
    async fn is_available(&self, url: &str) -> bool {
        Image::load_image(url).is_ok()
    }
}

/// Top-left corner and edge length (pixels) of a flake at `time` seconds.
///
/// Mirrors the page CSS: after `delay`, the flake falls from just above the
/// window to its bottom in `duration` seconds while drifting from
/// `left + x_initial` to `left + x_final`, then starts over.
pub fn flake_rect(
    flake: &SnowflakeDescriptor,
    time: f32,
    screen_width: f32,
    screen_height: f32,
) -> Option<Rectangle> {
    let elapsed = time - flake.delay as f32;
    if elapsed < 0.0 || flake.duration <= 0.0 {
        return None;
    }
    let duration = flake.duration as f32;
    let progress = (elapsed % duration) / duration;

    let vw = screen_width / 100.0;
    let size = flake.size as f32 * vw;
    let drift = lerp(flake.x_initial as f32, flake.x_final as f32, progress);
    let x = (flake.left as f32 + drift) * vw;
    let y = lerp(-size, screen_height, progress);

    Some(Rectangle::new(x, y, size, size))
}

pub fn draw_flakes(
    d: &mut RaylibDrawHandle,
    flakes: &[PlacedFlake],
    texture: Option<&Texture2D>,
    time: f32,
) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;

    for flake in flakes {
        let Some(rect) = flake_rect(&flake.descriptor, time, screen_width, screen_height) else {
            continue;
        };
        match texture {
            Some(texture) => draw_contained(d, texture, rect),
            None => d.draw_circle_v(
                Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5),
                rect.width * 0.5,
                Color::WHITE,
            ),
        }
    }
}

// Scales the texture to fit inside `rect` keeping its aspect ratio, centered
fn draw_contained(d: &mut RaylibDrawHandle, texture: &Texture2D, rect: Rectangle) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return;
    }
    let scale = (rect.width / tex_width).min(rect.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            rect.x + (rect.width - width) * 0.5,
            rect.y + (rect.height - height) * 0.5,
            width,
            height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

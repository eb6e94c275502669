use std::collections::HashMap;
use std::path::Path;

use eframe::egui;
use snake_common::games::snake::Sprite;
use snake_common::log_warn;

/// Decoded RGBA pixels of one sprite file.
pub struct SpriteImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl SpriteImage {
    pub fn load(path: &Path) -> Result<Self, String> {
        let image = image::open(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?
            .to_rgba8();
        Ok(Self {
            width: image.width() as usize,
            height: image.height() as usize,
            pixels: image.into_raw(),
        })
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(self.size(), &self.pixels)
    }
}

pub fn sprite_file_name(sprite: Sprite) -> &'static str {
    match sprite {
        Sprite::Background => "background.jpg",
        Sprite::Apple => "apple.jpg",
        Sprite::Block => "block.jpg",
    }
}

/// Colour drawn in place of a sprite whose image is unavailable.
pub fn fallback_color(sprite: Sprite) -> Option<egui::Color32> {
    match sprite {
        Sprite::Background => None,
        Sprite::Apple => Some(egui::Color32::from_rgb(0xD6, 0x2D, 0x20)),
        Sprite::Block => Some(egui::Color32::from_rgb(0x2E, 0x6B, 0xC6)),
    }
}

pub struct Sprites {
    textures: HashMap<Sprite, egui::TextureHandle>,
}

impl Sprites {
    pub fn load(ctx: &egui::Context, resources_dir: &Path) -> Self {
        let mut textures = HashMap::new();

        for sprite in [Sprite::Background, Sprite::Apple, Sprite::Block] {
            let file_name = sprite_file_name(sprite);
            match SpriteImage::load(&resources_dir.join(file_name)) {
                Ok(image) => {
                    let texture =
                        ctx.load_texture(file_name, image.to_color_image(), Default::default());
                    textures.insert(sprite, texture);
                }
                Err(e) => log_warn!("{}; drawing {:?} as a plain shape", e, sprite),
            }
        }

        Self { textures }
    }

    pub fn texture(&self, sprite: Sprite) -> Option<&egui::TextureHandle> {
        self.textures.get(&sprite)
    }
}

//! Procedural RGB textures for the house scene.
//!
//! Buffers are row-major `height × width × 3` bytes. Row 0 is uploaded as
//! the first texture row, so texture coordinate `t = 0` samples it.

use rand::Rng;

pub const TEXTURE_WIDTH: usize = 256;
pub const TEXTURE_HEIGHT: usize = 256;

pub const BRICK: [u8; 3] = [168, 115, 67];
pub const MORTAR: [u8; 3] = [100, 71, 46];
pub const GLASS: [u8; 3] = [0, 0, 255];

const ROAD_PAINT: u8 = 255;
const ROAD_ASPHALT: u8 = 160;
const ROAD_JITTER: u8 = 30;

/// Named texture binding points, numbered like the upload slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Brick = 1,
    Window = 2,
    Road = 3,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 3] = [TextureSlot::Brick, TextureSlot::Window, TextureSlot::Road];

    pub fn index(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    width: usize,
    height: usize,
    texels: Vec<u8>,
}

impl TextureImage {
    /// Zero-filled (black) image.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            texels: vec![0; width * height * 3],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texel(&self, row: usize, col: usize) -> [u8; 3] {
        let idx = (row * self.width + col) * 3;
        [self.texels[idx], self.texels[idx + 1], self.texels[idx + 2]]
    }

    pub fn set_texel(&mut self, row: usize, col: usize, rgb: [u8; 3]) {
        let idx = (row * self.width + col) * 3;
        self.texels[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Expand to RGBA with opaque alpha, for backends without 3-channel formats.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.texels
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect()
    }
}

/// Running-bond brick texel at `local_row` within a band `band` rows tall.
fn brick_band_texel(local_row: usize, col: usize, band: usize, width: usize) -> [u8; 3] {
    let half_band = band / 2;
    if local_row > 3 && local_row < half_band {
        let left = col > 2 && col < width / 2;
        let right = col > width / 2 + 2 && col < width - 2;
        if left || right {
            BRICK
        } else {
            MORTAR
        }
    } else if local_row > half_band + 3 {
        let quarter = width / 4;
        let three_quarters = 3 * width / 4;
        if col < quarter || col > three_quarters + 3 || (col > quarter + 3 && col < three_quarters) {
            BRICK
        } else {
            MORTAR
        }
    } else {
        MORTAR
    }
}

/// Fill the top and bottom thirds with brick courses. The middle third is
/// left untouched; run [`paint_windows`] afterwards to layer the glazing.
pub fn paint_bricks(image: &mut TextureImage) {
    let first_third = image.height / 3;
    let second_third = 2 * first_third;

    for row in 0..image.height {
        let local = if row < first_third {
            row
        } else if row > second_third {
            row - second_third
        } else {
            continue;
        };
        for col in 0..image.width {
            let texel = brick_band_texel(local, col, first_third, image.width);
            image.set_texel(row, col, texel);
        }
    }
}

/// Overwrite the middle third: brick on the outer column thirds, glass in the centre.
pub fn paint_windows(image: &mut TextureImage) {
    let first_third = image.height / 3;
    let second_third = 2 * first_third;

    for row in first_third..second_third {
        for col in 0..image.width {
            let texel = if col < image.width / 3 || col > 2 * image.width / 3 {
                BRICK
            } else {
                GLASS
            };
            image.set_texel(row, col, texel);
        }
    }
}

/// Jittered asphalt with light border rows and a centre divider on the
/// left half of the middle rows.
pub fn paint_road<R: Rng + ?Sized>(image: &mut TextureImage, rng: &mut R) {
    let (height, width) = (image.height, image.width);

    for row in 0..height {
        for col in 0..width {
            let jitter: u8 = rng.gen_range(0..ROAD_JITTER);
            let border = row < 10 || row > height.saturating_sub(10);
            let divider = row + 10 > height / 2 && row < height / 2 + 10 && col < width / 2;
            let shade = if border || divider {
                ROAD_PAINT - jitter
            } else {
                ROAD_ASPHALT - jitter
            };
            image.set_texel(row, col, [shade; 3]);
        }
    }
}

/// The three textures uploaded at start-up.
#[derive(Debug, Clone)]
pub struct TextureSet {
    pub brick: TextureImage,
    pub window: TextureImage,
    pub road: TextureImage,
}

impl TextureSet {
    pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut brick = TextureImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        paint_bricks(&mut brick);
        paint_windows(&mut brick);

        let mut window = brick.clone();
        paint_windows(&mut window);

        let mut road = TextureImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        paint_road(&mut road, rng);

        log::debug!(
            "Synthesized {} textures at {}x{}",
            TextureSlot::ALL.len(),
            TEXTURE_WIDTH,
            TEXTURE_HEIGHT
        );

        Self { brick, window, road }
    }

    pub fn get(&self, slot: TextureSlot) -> &TextureImage {
        match slot {
            TextureSlot::Brick => &self.brick,
            TextureSlot::Window => &self.window,
            TextureSlot::Road => &self.road,
        }
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_viewer::texture::{
    paint_bricks, paint_road, paint_windows, TextureImage, TextureSet, TextureSlot, BRICK, GLASS, MORTAR,
    TEXTURE_HEIGHT, TEXTURE_WIDTH,
};

fn garbage_image() -> TextureImage {
    let mut image = TextureImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
    for row in 0..TEXTURE_HEIGHT {
        for col in 0..TEXTURE_WIDTH {
            image.set_texel(row, col, [(row % 251) as u8, (col % 241) as u8, 7]);
        }
    }
    image
}

#[cfg(test)]
mod texture_tests {
    use super::*;

    #[test]
    fn test_window_overlay_owns_middle_band() {
        let mut image = garbage_image();
        paint_bricks(&mut image);
        paint_windows(&mut image);

        let third = TEXTURE_HEIGHT / 3;
        for row in third..2 * third {
            for col in 0..TEXTURE_WIDTH {
                let expected = if col < TEXTURE_WIDTH / 3 || col > 2 * TEXTURE_WIDTH / 3 {
                    BRICK
                } else {
                    GLASS
                };
                assert_eq!(image.texel(row, col), expected, "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_outer_bands_are_brick_or_mortar() {
        let mut image = garbage_image();
        paint_bricks(&mut image);
        let third = TEXTURE_HEIGHT / 3;
        for row in (0..third).chain(2 * third + 1..TEXTURE_HEIGHT) {
            for col in 0..TEXTURE_WIDTH {
                let texel = image.texel(row, col);
                assert!(texel == BRICK || texel == MORTAR, "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_road_shades_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut image = TextureImage::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        paint_road(&mut image, &mut rng);

        for row in 0..TEXTURE_HEIGHT {
            for col in 0..TEXTURE_WIDTH {
                let [r, g, b] = image.texel(row, col);
                assert!(r == g && g == b);
                let border = row < 10 || row > TEXTURE_HEIGHT - 10;
                let divider = row + 10 > TEXTURE_HEIGHT / 2 && row < TEXTURE_HEIGHT / 2 + 10 && col < TEXTURE_WIDTH / 2;
                if border || divider {
                    assert!((226..=255).contains(&r), "paint row {} col {} = {}", row, col, r);
                } else {
                    assert!((131..=160).contains(&r), "asphalt row {} col {} = {}", row, col, r);
                }
            }
        }
    }

    #[test]
    fn test_road_is_reproducible_with_seed() {
        let a = TextureSet::synthesize(&mut StdRng::seed_from_u64(42));
        let b = TextureSet::synthesize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.road, b.road);
    }

    #[test]
    fn test_texture_set_layers_windows_on_bricks() {
        let set = TextureSet::synthesize(&mut StdRng::seed_from_u64(1));
        let brick = set.get(TextureSlot::Brick);
        assert_eq!(brick.texel(TEXTURE_HEIGHT / 2, TEXTURE_WIDTH / 2), GLASS);
        assert_eq!(brick.texel(TEXTURE_HEIGHT / 2, 10), BRICK);
        assert_eq!(set.get(TextureSlot::Window), brick);
        assert_eq!(brick.to_rgba().len(), TEXTURE_WIDTH * TEXTURE_HEIGHT * 4);
    }
}

/// Linear RGB triple in `0.0..=1.0`.
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];
pub const BLACK: Rgb = [0.0, 0.0, 0.0];
pub const RED: Rgb = [1.0, 0.0, 0.0];

pub const fn gray(level: f32) -> Rgb {
    [level, level, level]
}

/// Clamp each channel into the displayable range.
pub fn saturate(color: Rgb) -> Rgb {
    [
        color[0].clamp(0.0, 1.0),
        color[1].clamp(0.0, 1.0),
        color[2].clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_is_uniform() {
        assert_eq!(gray(0.4), [0.4, 0.4, 0.4]);
        assert_eq!(gray(1.0), WHITE);
        assert_eq!(gray(0.0), BLACK);
    }

    #[test]
    fn test_saturate_clamps() {
        let c = saturate([-0.5, 0.25, 3.0]);
        assert_eq!(c, [0.0, 0.25, 1.0]);
    }
}

use crossterm::style::Color;

pub trait ColorInterpolationExt<T> {
    /// Blend towards `other`. `p = 0` yields `self`, `p = 1` yields `other`.
    fn lerp(&self, other: &T, p: f64) -> T;
}

impl ColorInterpolationExt<Color> for Color {
    fn lerp(&self, other: &Color, p: f64) -> Color {
        assert!((0f64..=1f64).contains(&p), "lerp p lives in [0, 1]");

        // Named and indexed colors can't be blended, so snap to the closest end
        let (
            Color::Rgb {
                r: r0,
                g: g0,
                b: b0,
            },
            Color::Rgb {
                r: r1,
                g: g1,
                b: b1,
            },
        ) = (*self, *other)
        else {
            return if p < 0.5 { *self } else { *other };
        };

        // interpolate a channel
        let f = |a: u8, b: u8| ((a as f64) * (1f64 - p) + (b as f64) * p).round() as u8;

        Color::Rgb {
            r: f(r0, r1),
            g: f(g0, g1),
            b: f(b0, b1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_lerp_ends() {
        assert_eq!(BLACK.lerp(&WHITE, 0f64), BLACK);
        assert_eq!(BLACK.lerp(&WHITE, 1f64), WHITE);
    }

    #[test]
    fn test_lerp_middle() {
        assert_eq!(
            BLACK.lerp(&WHITE, 0.5),
            Color::Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_lerp_named_colors_snap() {
        assert_eq!(Color::Red.lerp(&Color::Blue, 0.2), Color::Red);
        assert_eq!(Color::Red.lerp(&Color::Blue, 0.8), Color::Blue);
    }
}

use log::warn;
use rand::Rng;

/// An 8-bit RGB color with a floating point alpha in `[0, 1]`.
///
/// The default value is fully opaque white, which doubles as the fallback
/// produced by [`Rgba::build`] for invalid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a: 1.0,
        }
    }
}

impl Rgba {
    fn is_acceptable_channel_value(c: i32) -> bool {
        (0..256).contains(&c)
    }

    fn is_acceptable_alpha_value(a: f32) -> bool {
        (0.0..=1.0).contains(&a)
    }

    /// Builds a color, validating every channel.
    ///
    /// If any channel is out of range the whole value falls back to opaque
    /// white and a warning is logged; construction never fails.
    #[must_use]
    pub fn build(r: i32, g: i32, b: i32, a: f32) -> Self {
        if Self::is_acceptable_channel_value(r)
            && Self::is_acceptable_channel_value(g)
            && Self::is_acceptable_channel_value(b)
            && Self::is_acceptable_alpha_value(a)
        {
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            Self {
                r: r as u8,
                g: g as u8,
                b: b as u8,
                a,
            }
        } else {
            warn!(
                "Invalid channels rgba({},{},{},{}), falling back to opaque white",
                r, g, b, a
            );
            Self::default()
        }
    }

    /// Draws a random fully opaque color from the given generator.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
            a: 1.0,
        }
    }

    /// Returns this color scaled by a remaining-life fraction in `[0, 1]`:
    /// every channel fades toward black and the alpha toward transparent as
    /// the fraction approaches zero.
    ///
    /// This is a derived view for rendering, not a mutation.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn aged(&self, life_left_fraction: f32) -> Self {
        Self {
            r: (f32::from(self.r) * life_left_fraction).round() as u8,
            g: (f32::from(self.g) * life_left_fraction).round() as u8,
            b: (f32::from(self.b) * life_left_fraction).round() as u8,
            a: life_left_fraction,
        }
    }
}

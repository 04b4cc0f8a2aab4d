use std::{fmt, str::FromStr};

use anyhow::anyhow;

/// One packed `0xAARRGGBB` pixel, split into channels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}
impl Pixel {
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn packed(&self) -> u32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue])
    }
}
impl From<u32> for Pixel {
    fn from(value: u32) -> Self {
        let [alpha, red, green, blue] = value.to_be_bytes();
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// Output pixel layout. Both are 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Truecolor; the alpha byte of the input is dropped.
    Rgb,
    /// Truecolor with alpha.
    Rgba,
}
impl Format {
    pub fn bytes_per_pixel(&self) -> u8 {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// PNG color type written into IHDR.
    pub fn color_type(&self) -> u8 {
        match self {
            Self::Rgb => 2,
            Self::Rgba => 6,
        }
    }

    /// Appends the channels of `pixel` in PNG sample order.
    #[inline(always)]
    pub(crate) fn write_samples(&self, pixel: Pixel, mut sink: impl FnMut(u8)) {
        sink(pixel.red);
        sink(pixel.green);
        sink(pixel.blue);
        if let Self::Rgba = self {
            sink(pixel.alpha);
        }
    }
}
impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => f.write_str("rgb"),
            Self::Rgba => f.write_str("rgba"),
        }
    }
}
impl FromStr for Format {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            other => Err(anyhow!("We don't support the {other} format")),
        }
    }
}

use std::io::ErrorKind;
use std::path::Path;

use lopdf::{Document, ObjectId, Stream, dictionary};

use crate::error::ExportError;

/// A decoded logo, ready to be embedded as an image XObject.
#[derive(Debug, Clone)]
pub struct Logo {
    pub width_px: u32,
    pub height_px: u32,
    rgb: Vec<u8>,
    /// Present only when some pixel is not fully opaque.
    alpha: Option<Vec<u8>>,
}

impl Logo {
    /// Read and decode the logo at `path`.
    ///
    /// The file is read in one go and closed before decoding starts.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ExportError::AssetNotFound {
                path: path.to_path_buf(),
            },
            _ => ExportError::AssetUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::decode(&bytes)
    }

    /// Decode a PNG or JPEG logo from memory.
    pub fn decode(bytes: &[u8]) -> Result<Self, ExportError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width_px, height_px) = rgba.dimensions();

        let pixels = rgba.as_raw();
        let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
        let mut alpha = Vec::with_capacity(pixels.len() / 4);
        for px in pixels.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
            alpha.push(px[3]);
        }
        let translucent = alpha.iter().any(|a| *a < u8::MAX);

        Ok(Self {
            width_px,
            height_px,
            rgb,
            alpha: translucent.then_some(alpha),
        })
    }

    /// Rendered height for a given rendered width.
    pub fn height_for_width(&self, width: f32) -> f32 {
        if self.width_px == 0 {
            return 0.0;
        }
        width * self.height_px as f32 / self.width_px as f32
    }

    /// Add the image (and its soft mask, if any) to `doc`.
    pub fn embed(&self, doc: &mut Document) -> ObjectId {
        let width = i64::from(self.width_px);
        let height = i64::from(self.height_px);

        let mut image = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
        };

        if let Some(alpha) = &self.alpha {
            let mask_id = doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => width,
                    "Height" => height,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8_i64,
                },
                alpha.clone(),
            ));
            image.set("SMask", mask_id);
        }

        doc.add_object(Stream::new(image, self.rgb.clone()))
    }
}

use crate::error::Result;

/// Decoded RGBA8 image ready for upload.
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// 1x1 stand-in used until (or instead of) the real texture.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        }
    }
}

/// Decode an equirectangular globe image (JPEG or PNG, format sniffed).
pub fn decode_texture(bytes: &[u8]) -> Result<TextureImage> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(TextureImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

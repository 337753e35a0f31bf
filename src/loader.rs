//! Browser-side image decoding: file -> object URL -> <img> -> 2D canvas -> RGBA bytes.

use crate::dom;
use relief_core::{RasterImage, ReliefError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn as_raster(&self) -> RasterImage<'_> {
        RasterImage::rgba(self.width, self.height, &self.rgba)
    }
}

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub async fn load_file(file: &web::File) -> anyhow::Result<DecodedImage> {
    let url = web::Url::create_object_url_with_blob(file).map_err(js_err)?;
    let decoded = decode_url(&url).await;
    _ = web::Url::revoke_object_url(&url);
    decoded
}

async fn decode_url(url: &str) -> anyhow::Result<DecodedImage> {
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    img.set_src(url);
    JsFuture::from(img.decode()).await.map_err(js_err)?;

    let (width, height) = (img.natural_width(), img.natural_height());
    if width == 0 || height == 0 {
        return Err(ReliefError::InvalidImage(format!(
            "decoded image is {}x{}",
            width, height
        ))
        .into());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;
    ctx.draw_image_with_html_image_element(&img, 0.0, 0.0)
        .map_err(js_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(js_err)?;
    Ok(DecodedImage {
        width,
        height,
        rgba: data.data().0,
    })
}

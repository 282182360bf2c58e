use std::path::Path;
use std::rc::Rc;

use color_eyre::eyre::WrapErr;
use color_eyre::{eyre, Help};
use glium::backend::Facade;
use glium::texture::{MipmapsOption, RawImage2d, UncompressedFloatFormat};
use glium::uniforms::{MagnifySamplerFilter, MinifySamplerFilter, SamplerBehavior, SamplerWrapFunction};
use glium::Texture2d;
use image::RgbaImage;
use imgui::TextureId;
use imgui_glium_renderer::{Renderer, Texture};
use tracing::{debug, instrument, trace, warn};

use crate::helper::logging::event_targets::RESOURCE_LOAD;
use crate::helper::logging::format_error;

/// Opens and decodes an image file, converting it to 8-bit RGBA whatever its original colour type
#[instrument(level = "debug")]
pub fn load_rgba_image(path: &Path) -> eyre::Result<RgbaImage> {
    let decoded = image::open(path)
        .wrap_err_with(|| format!("could not open or decode image at {path:?}"))
        .suggestion("check that the file exists and is a valid PNG")?;
    trace!(target: RESOURCE_LOAD, colour_type = ?decoded.color(), "decoded image");
    Ok(decoded.into_rgba8())
}

/// Sampler used for GUI images: smooth when shrunk (through the mipmaps), never repeats at the edges
pub fn gui_image_sampler() -> SamplerBehavior {
    SamplerBehavior {
        minify_filter: MinifySamplerFilter::LinearMipmapNearest,
        magnify_filter: MagnifySamplerFilter::Linear,
        wrap_function: (
            SamplerWrapFunction::Clamp,
            SamplerWrapFunction::Clamp,
            SamplerWrapFunction::Clamp,
        ),
        ..Default::default()
    }
}

/// Uploads an RGBA image to a new GPU texture (with generated mipmaps), and registers it with the renderer so GUI image widgets can draw it
#[instrument(level = "debug", skip_all, fields(width = image.width(), height = image.height()))]
pub fn upload_texture(facade: &impl Facade, renderer: &mut Renderer, image: RgbaImage) -> eyre::Result<TextureId> {
    let dimensions = image.dimensions();
    let raw = RawImage2d::from_raw_rgba(image.into_raw(), dimensions);
    let texture = Texture2d::with_format(
        facade,
        raw,
        UncompressedFloatFormat::U8U8U8U8,
        MipmapsOption::AutoGeneratedMipmaps,
    )
    .wrap_err("could not create texture")?;

    let id = renderer.textures().insert(Texture {
        texture: Rc::new(texture),
        sampler: gui_image_sampler(),
    });
    debug!(target: RESOURCE_LOAD, ?id, "registered texture");
    Ok(id)
}

/// Loads an image file into a GUI texture
///
/// Failures are logged and give [None]: callers just don't show whatever needed the image
pub fn load_texture(facade: &impl Facade, renderer: &mut Renderer, path: &Path) -> Option<TextureId> {
    let result = load_rgba_image(path).and_then(|image| upload_texture(facade, renderer, image));
    match result {
        Ok(id) => Some(id),
        Err(report) => {
            warn!(target: RESOURCE_LOAD, report = format_error(&report), "could not load image");
            None
        }
    }
}

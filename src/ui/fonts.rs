use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre;
use color_eyre::eyre::WrapErr;
use imgui::{Context, FontConfig, FontGlyphRanges, FontSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::helper::file_helper::resolve_resource_path;
use crate::helper::logging::event_targets::RESOURCE_LOAD;
use crate::helper::logging::format_error;

/// Which glyphs get rasterised into the font atlas. Bigger sets mean a bigger atlas texture and slower startup
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum GlyphRangeSet {
    /// Basic latin + latin supplement
    #[default]
    Default,
    ChineseFull,
    ChineseSimplifiedCommon,
    Japanese,
    Korean,
    Cyrillic,
}

impl GlyphRangeSet {
    pub fn to_imgui(self) -> FontGlyphRanges {
        match self {
            GlyphRangeSet::Default => FontGlyphRanges::default(),
            GlyphRangeSet::ChineseFull => FontGlyphRanges::chinese_full(),
            GlyphRangeSet::ChineseSimplifiedCommon => FontGlyphRanges::chinese_simplified_common(),
            GlyphRangeSet::Japanese => FontGlyphRanges::japanese(),
            GlyphRangeSet::Korean => FontGlyphRanges::korean(),
            GlyphRangeSet::Cyrillic => FontGlyphRanges::cyrillic(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// TrueType font to use, relative to the resources folder. [None] uses imgui's built-in font only
    pub path: Option<PathBuf>,
    pub size_pixels: f32,
    pub glyph_ranges: GlyphRangeSet,
    /// Oversampling font helps improve text rendering at expense of larger font atlas texture.
    pub oversampling: i32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            path: None,
            size_pixels: 13.0,
            glyph_ranges: GlyphRangeSet::Default,
            oversampling: 3,
        }
    }
}

/// Reads a font file from disk
pub fn load_font_data(path: &Path) -> eyre::Result<Vec<u8>> {
    let data = fs::read(path).wrap_err_with(|| format!("could not read font file at {path:?}"))?;
    if data.is_empty() {
        return Err(eyre::eyre!("font file at {path:?} is empty"));
    }
    Ok(data)
}

/// Adds the configured font to the imgui font atlas, with imgui's built-in font merged in to fill any gaps
///
/// Returns `true` if the configured TrueType font was loaded. If it couldn't be, a warning is logged and only the built-in font is used
#[instrument(skip(imgui))]
pub fn install_fonts(imgui: &mut Context, settings: &FontSettings, resources_dir: &Path) -> bool {
    let font_config = FontConfig {
        oversample_h: settings.oversampling,
        oversample_v: settings.oversampling,
        size_pixels: settings.size_pixels,
        glyph_ranges: settings.glyph_ranges.to_imgui(),
        // As imgui-glium-renderer isn't gamma-correct with
        // it's font rendering, we apply an arbitrary
        // multiplier to make the font a bit "heavier".
        rasterizer_multiply: 1.5,
        ..FontConfig::default()
    };
    let fallback_font = FontSource::DefaultFontData {
        config: Some(FontConfig {
            name: Some("Proggy Clean".to_string()),
            ..font_config.clone()
        }),
    };

    let ttf_data = settings.path.as_deref().and_then(|relative| {
        let path = resolve_resource_path(resources_dir, relative);
        debug!(target: RESOURCE_LOAD, ?path, "loading font");
        match load_font_data(&path) {
            Ok(data) => Some(data),
            Err(report) => {
                warn!(target: RESOURCE_LOAD, report = format_error(&report), "could not load font, using built-in font");
                None
            }
        }
    });

    imgui.fonts().clear_fonts();
    match &ttf_data {
        Some(data) => {
            let standard_font = FontSource::TtfData {
                data: data.as_slice(),
                size_pixels: settings.size_pixels,
                config: Some(font_config),
            };
            imgui.fonts().add_font(&[standard_font, fallback_font]);
        }
        None => {
            imgui.fonts().add_font(&[fallback_font]);
        }
    }
    trace!(target: RESOURCE_LOAD, custom_font = ttf_data.is_some(), "added fonts");
    ttf_data.is_some()
}

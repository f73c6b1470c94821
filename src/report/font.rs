use ab_glyph::FontRef;
use lazy_static::lazy_static;

const DEJAVU_SANS_MONO_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");

lazy_static! {
    static ref EMBEDDED_FONT: Option<FontRef<'static>> =
        FontRef::try_from_slice(DEJAVU_SANS_MONO_BYTES).ok();
}

/// Font used for chart titles and axis labels
pub fn chart_font() -> Option<FontRef<'static>> {
    EMBEDDED_FONT.clone()
}

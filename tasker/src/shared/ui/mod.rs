pub(crate) mod errors;
pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod style_sheet;
pub(crate) mod theme;

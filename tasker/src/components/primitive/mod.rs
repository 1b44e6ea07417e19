pub(crate) mod icon_button;
pub(crate) mod section_title;

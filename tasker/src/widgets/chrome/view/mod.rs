pub(crate) mod app_logo;
pub(crate) mod title_bar;

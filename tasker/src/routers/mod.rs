pub(crate) mod chrome;
pub(crate) mod keyboard;
pub(crate) mod sidebar;
pub(crate) mod window;

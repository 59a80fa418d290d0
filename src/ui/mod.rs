pub(crate) mod app;
pub(crate) mod commands;
pub(crate) mod dialog;
pub(crate) mod render;
pub(crate) mod util;

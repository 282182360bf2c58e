//! Event targets used to indicate what system/section an event comes from
//! For example, [UI_PERFRAME_SPAMMY] marks events that are logged every frame and will flood the logs unless filtered out

macro_rules! target {
    ($name:ident, $docs:literal) => {
        #[doc=$docs]
        #[allow(dead_code)]
        pub const $name: &str = concat!("widget_demos::", stringify!($name));
    };
}
target!(
    UI_PERFRAME_SPAMMY,
    r"High-frequency (i.e. every frame) logs from the UI"
);
target!(UI_USER_EVENT, r"Interaction between the user and the UI");
target!(
    RESOURCE_LOAD,
    r"Loading of files from disk (fonts, images, config)"
);
target!(
    PROGRAM_LIFECYCLE,
    r"Startup and shutdown of the program and its event loop"
);

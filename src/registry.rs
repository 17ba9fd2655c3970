//! Declarative DOM contract between this crate and the host page.
//!
//! The server-rendered pages opt into each enhancement by carrying these
//! marker classes, ids, and attributes. Every selector the crate queries is
//! declared here so the contract is auditable in one place; [`crate::boot`]
//! wires them to the modules that consume them.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// localStorage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute reflected onto `document.documentElement`.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Optional toolbar icon mirroring the active theme.
pub const THEME_ICON_ID: &str = "theme-icon";

/// Media query carrying the OS-level dark-scheme signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Transient notification elements dismissed after a fixed lifetime.
pub const FLASH_MESSAGES: &str = ".flash-message";

/// Fields whose contents are selected and copied on click.
pub const COPY_FIELDS: &str = ".account-value input, .account-value textarea";

/// File inputs that get a local image preview on change.
pub const FILE_INPUTS: &str = "input[type=\"file\"]";

/// Class of the preview block inserted (and replaced) next to a file input.
pub const FILE_PREVIEW_CLASS: &str = "file-preview";

/// Forms picked up by validation and loading-state enhancements.
pub const FORMS: &str = "form";

/// Required fields checked on submit, scoped per form.
pub const REQUIRED_FIELDS: &str = "[required]";

/// Optional submit button swapped to a loading indicator, scoped per form.
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

/// Anchors whose href is a same-page fragment reference.
pub const FRAGMENT_ANCHORS: &str = "a[href^=\"#\"]";

/// Optional control activated by the Escape shortcut.
pub const BACK_BUTTON: &str = ".back-btn";

/// Cards given staggered entrance animations.
pub const SERVICE_CARDS: &str = ".service-card";

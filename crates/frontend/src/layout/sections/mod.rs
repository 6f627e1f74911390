//! Section registry - single source of truth for key → label/icon/view

pub mod registry;

pub use registry::{is_known_section, render_section_content, Section, DEFAULT_SECTION, SECTIONS};

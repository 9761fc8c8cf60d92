//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialogs and chrome shared by pages, taking state in via
//! props and reporting user intent back through callbacks.

pub mod about_dialog;

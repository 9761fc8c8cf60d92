use super::*;

#[test]
fn ui_state_default_dialogs_closed() {
    assert!(!UiState::default().about_open);
}

#[test]
fn modal_event_from_name() {
    assert_eq!(ModalEvent::from_name("about"), Some(ModalEvent::About));
    assert_eq!(ModalEvent::from_name("About"), None);
    assert_eq!(ModalEvent::from_name("sign-up"), None);
}

#[test]
fn open_modal_about_opens_dialog() {
    let mut ui = UiState::default();
    ui.open_modal(ModalEvent::ABOUT);
    assert!(ui.about_open);
    ui.close_about();
    assert!(!ui.about_open);
}

#[test]
fn open_modal_ignores_unknown_events() {
    let mut ui = UiState::default();
    ui.open_modal("forgot-password");
    assert!(!ui.about_open);
}

use super::*;
use crate::fakes::ScriptedPrompt;

#[test]
fn default_message_when_none_given() {
    let prompt = ScriptedPrompt::answering(true);
    assert!(confirm_delete(&prompt, None));
    assert_eq!(*prompt.asked.borrow(), vec!["Are you sure you want to delete this item?".to_owned()]);
}

#[test]
fn empty_message_falls_back_to_default() {
    let prompt = ScriptedPrompt::answering(true);
    confirm_delete(&prompt, Some(""));
    assert_eq!(prompt.asked.borrow()[0], DEFAULT_DELETE_MESSAGE);
}

#[test]
fn custom_message_is_shown_verbatim() {
    let prompt = ScriptedPrompt::answering(true);
    confirm_delete(&prompt, Some("Remove candidate Jane Doe?"));
    assert_eq!(prompt.asked.borrow()[0], "Remove candidate Jane Doe?");
}

#[test]
fn dismissal_returns_false() {
    let prompt = ScriptedPrompt::answering(false);
    assert!(!confirm_delete(&prompt, None));
    assert!(!confirm_delete(&prompt, Some("Delete job posting?")));
    assert_eq!(prompt.asked.borrow().len(), 2);
}

//! End-to-end scenarios for the PIN entry form

use pincode_core::{FocusRecorder, FormError, InputOutcome, InputRule, PinForm};

fn values(form: &PinForm) -> Vec<Option<char>> {
    form.segments().iter().map(|s| s.value).collect()
}

#[test]
fn test_type_then_complete_then_notify() {
    let mut form = PinForm::new();
    let mut focus = FocusRecorder::new();
    form.mount(&mut focus);
    assert_eq!(form.rule(), InputRule::OnlyNumber);

    let outcome = form.input(0, "1234", &mut focus);
    assert_eq!(
        outcome,
        InputOutcome::Accepted {
            written: 4,
            next: Some(4)
        }
    );
    assert_eq!(
        values(&form),
        vec![Some('1'), Some('2'), Some('3'), Some('4'), None]
    );
    assert_eq!(focus.focused, Some(4));

    form.input(4, "5", &mut focus);
    let ticket = form.take_auto_submit().expect("last box completes the code");
    assert!(form.is_loading());

    let message = form.finish_submit(ticket).expect("ticket is current");
    assert_eq!(message, r#"Code Input Params: "12345""#);
    assert!(!form.is_loading());
}

#[test]
fn test_reset_after_partial_entry() {
    let mut form = PinForm::new();
    let mut focus = FocusRecorder::new();
    form.mount(&mut focus);
    form.input(0, "12", &mut focus);
    assert_eq!(focus.focused, Some(2));

    assert!(form.reset(&mut focus));
    assert!(values(&form).iter().all(Option::is_none));
    assert_eq!(focus.focused, Some(0));
}

#[test]
fn test_manual_submit_requires_every_box() {
    let mut form = PinForm::new();
    let mut focus = FocusRecorder::new();
    form.input(0, "123", &mut focus);

    assert_eq!(form.submit().unwrap_err(), FormError::IncompleteCode);
    assert!(form.is_error());
    assert!(!form.is_loading());

    // Clearing another box keeps the message up
    form.input(0, "", &mut focus);
    assert!(form.is_error());
}

#[test]
fn test_resize_that_fills_row_submits() {
    let mut form = PinForm::new();
    let mut focus = FocusRecorder::new();
    form.input(0, "123", &mut focus);

    form.set_desired_count(3);
    form.apply_desired_count().unwrap();

    let ticket = form.take_auto_submit().expect("truncation left a full row");
    assert_eq!(
        form.finish_submit(ticket).unwrap(),
        r#"Code Input Params: "123""#
    );
}

#[test]
fn test_out_of_range_count_is_not_applied() {
    let mut form = PinForm::new();

    form.set_desired_count(201);
    assert!(matches!(
        form.desired_count_error(),
        Some(FormError::CountOutOfRange { requested: 201, .. })
    ));
    assert!(form.apply_desired_count().is_err());
    assert_eq!(form.segments().len(), 5);

    form.set_desired_count(200);
    assert!(form.desired_count_error().is_none());
    form.apply_desired_count().unwrap();
    assert_eq!(form.segments().len(), 200);
}

#[test]
fn test_snapshot_taken_at_submit() {
    let mut form = PinForm::new().with_rule(InputRule::All);
    let mut focus = FocusRecorder::new();
    form.input(0, "12ab3", &mut focus);
    let ticket = form.take_auto_submit().unwrap();

    // The selector stays live while loading
    assert_eq!(form.set_rule(InputRule::OnlyNumber), 2);

    assert_eq!(
        form.finish_submit(ticket).unwrap(),
        r#"Code Input Params: "12ab3""#
    );
    assert!(form.take_auto_submit().is_none());
}

#[test]
fn test_retyping_full_row_submits_again() {
    let mut form = PinForm::new();
    let mut focus = FocusRecorder::new();
    form.input(0, "11111", &mut focus);
    let first = form.take_auto_submit().unwrap();
    form.finish_submit(first).unwrap();

    form.input(2, "9", &mut focus);
    let second = form.take_auto_submit().expect("row still full");
    assert_eq!(
        form.finish_submit(second).unwrap(),
        r#"Code Input Params: "11911""#
    );
}

use super::*;
use crate::form::FieldSpec;

fn pair_schema() -> FormSchema {
    FormSchema::new(vec![
        FieldSpec::new("password").required("password required"),
        FieldSpec::new("confirm")
            .required("confirm required")
            .matches("password", "no match"),
    ])
}

#[test]
fn register_reflects_input() {
    Owner::new().with(|| {
        let form = use_form(pair_schema());
        let binding = form.register("password");
        assert_eq!(binding.name, "password");
        assert_eq!(binding.value.get_untracked(), "");

        binding.on_input.run("hunter2".to_owned());
        assert_eq!(binding.value.get_untracked(), "hunter2");
        assert_eq!(form.values_untracked().get("password"), "hunter2");
    });
}

#[test]
fn input_before_submit_does_not_validate() {
    Owner::new().with(|| {
        let form = use_form(pair_schema());
        form.input("confirm", "x".to_owned());
        assert!(form.errors_untracked().is_empty());
        assert_eq!(form.error("confirm").get_untracked(), None);
    });
}

#[test]
fn failed_submit_exposes_errors_and_skips_callback() {
    Owner::new().with(|| {
        let form = use_form(pair_schema());
        let mut calls = 0;
        assert!(!form.submit(|_| calls += 1));
        assert_eq!(calls, 0);
        assert_eq!(form.error("password").get_untracked(), Some("password required".to_owned()));
        assert_eq!(form.error("confirm").get_untracked(), Some("confirm required".to_owned()));
    });
}

#[test]
fn edits_after_submit_revalidate_only_the_edited_field() {
    Owner::new().with(|| {
        let form = use_form(pair_schema());
        form.input("password", "abc123".to_owned());
        form.input("confirm", "abc123".to_owned());
        assert!(form.submit(|_| ()));
        assert!(form.errors_untracked().is_empty());

        // Changing the password leaves the confirmation's last result alone.
        form.input("password", "changed".to_owned());
        assert_eq!(form.error("confirm").get_untracked(), None);

        // Touching the confirmation re-reads the current password.
        form.input("confirm", "abc123".to_owned());
        assert_eq!(form.error("confirm").get_untracked(), Some("no match".to_owned()));

        form.input("confirm", "changed".to_owned());
        assert_eq!(form.error("confirm").get_untracked(), None);
    });
}

#[test]
fn resubmit_catches_stale_confirmation() {
    Owner::new().with(|| {
        let form = use_form(pair_schema());
        form.input("password", "abc123".to_owned());
        form.input("confirm", "abc123".to_owned());
        assert!(form.submit(|_| ()));

        form.input("password", "changed".to_owned());
        assert!(!form.submit(|_| ()));
        assert_eq!(form.error("confirm").get_untracked(), Some("no match".to_owned()));
    });
}

#[test]
fn accepted_submit_passes_current_values() {
    Owner::new().with(|| {
        let form = use_form(pair_schema());
        form.input("password", "p".to_owned());
        form.input("confirm", "p".to_owned());
        let mut received = None;
        assert!(form.submit(|values| received = Some(values)));
        assert_eq!(received, Some(FormState::from_pairs([("password", "p"), ("confirm", "p")])));
    });
}

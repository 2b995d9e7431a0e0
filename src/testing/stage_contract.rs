use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &[
            "Hello World 123",
            " déjà-vu ",
            "TEST",
            "b a d",
            "baaad w0rd",
            "",
        ]
    }

    /// Samples that must pass through unchanged and without allocating.
    fn should_pass_through() -> &'static [&'static str] {
        &["quick", "brown", "fox123", "quick brown", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `borrows_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_accurate` → predicts exactly whether `apply` changes text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives mixed-script real-world input
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::borrows_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}
pub(crate) use assert_stage_contract;

use std::borrow::Cow;

const MIXED_SCRIPTS: &str = "Hello 世界 русский Türkçe العربية 简体中文 ＦＵＬＬ b\u{200B}ad 𝐛𝐚𝐝 🙂";

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if stage.needs_apply(&text) {
        stage.apply(text)
    } else {
        text
    }
}

pub fn borrows_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        // The second pass over an already normalized string must not allocate.
        let once = run(&stage, Cow::Borrowed(input)).into_owned();
        let second = run(&stage, Cow::Borrowed(once.as_str()));
        assert!(
            matches!(second, Cow::Borrowed(s) if s.as_ptr() == once.as_ptr()),
            "stage `{}` allocated on its own output `{once}`",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let out = run(&stage, Cow::Borrowed(pass_through));
        assert_eq!(out.as_ref(), pass_through);
        assert!(
            matches!(out, Cow::Borrowed(s) if s.as_ptr() == pass_through.as_ptr()),
            "stage `{}` allocated on pass-through sample `{pass_through}`",
            stage.name()
        );
    }

    for &(input, expected) in S::should_transform() {
        let out = run(&stage, Cow::Borrowed(input));
        assert_eq!(
            out.as_ref(),
            expected,
            "stage `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let transform_inputs = S::should_transform().iter().map(|(input, _)| *input);
    for input in S::samples()
        .iter()
        .copied()
        .chain(transform_inputs)
        .chain(std::iter::once(MIXED_SCRIPTS))
    {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(Cow::Owned(once.clone().into_owned()));
        assert_eq!(
            once,
            twice,
            "stage `{}` is not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let transform_inputs = S::should_transform().iter().map(|(input, _)| *input);
    for input in S::samples()
        .iter()
        .copied()
        .chain(S::should_pass_through().iter().copied())
        .chain(transform_inputs)
        .chain(std::iter::once(MIXED_SCRIPTS))
    {
        check_accuracy(&stage, input);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input so that stages that always rebuild are judged on content only
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    let empty = run(&stage, Cow::Borrowed(""));
    assert_eq!(empty.as_ref(), "");

    let ascii = "quick brown fox 123";
    let out = stage.apply(Cow::Borrowed(ascii));
    assert_eq!(out.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(MIXED_SCRIPTS));
}

// Integration tests for the verify-and-refine loop

mod common;

use autodocstring::config::RefineConfig;
use autodocstring::refine::{RefineOutcome, RefinementController, VerificationVerdict};
use common::{write_file, ScriptedOracle};

fn controller(oracle: ScriptedOracle) -> RefinementController<ScriptedOracle> {
    RefinementController::new(oracle, RefineConfig::default())
}

#[tokio::test]
async fn test_stale_docstring_is_rewritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "\"\"\"old doc\"\"\"\n\nprint(1)");

    let oracle = ScriptedOracle::new("False", "New doc.").with_verdicts(&["True reason:stale"]);
    let mut controller = controller(oracle);

    let outcome = controller.refine(&path).await.unwrap();

    assert_eq!(outcome, RefineOutcome::Converged { round: 1, updates: 1 });
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\"\"\"\nNew doc.\n\"\"\"\n\nprint(1)\n"
    );

    let oracle = controller.oracle();
    assert_eq!(oracle.verify_prompts.len(), 2);
    assert_eq!(oracle.generate_prompts.len(), 1);
    assert!(oracle.generate_prompts[0].contains("Problems with Old Docstring:\nreason:stale"));
    assert!(oracle.generate_prompts[0].contains("Old Docstring:\n\"\"\"old doc\"\"\""));

    // Code sections carry the file with its docstring stripped
    for prompt in [&oracle.verify_prompts[0], &oracle.generate_prompts[0]] {
        let (_, code) = prompt.split_once("Code:\n").unwrap();
        assert!(code.starts_with("print(1)\n"));
        assert!(!code.contains("old doc"));
    }
    let (_, code) = oracle.verify_prompts[1].split_once("Code:\n").unwrap();
    assert!(code.starts_with("print(1)\n"));
    assert!(!code.contains("New doc."));
}

#[tokio::test]
async fn test_up_to_date_file_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let original = "import os\n\nprint(os.getcwd())\n";
    let path = write_file(dir.path(), "m.py", original);

    let mut controller = controller(ScriptedOracle::new("False", "unused"));
    let outcome = controller.refine(&path).await.unwrap();

    assert_eq!(outcome, RefineOutcome::Converged { round: 0, updates: 0 });
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    assert_eq!(controller.oracle().total_calls(), 1);
    assert!(controller.oracle().verify_prompts[0].contains("Docstring:\nNone"));
}

#[tokio::test]
async fn test_always_needs_update_runs_every_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "x = 1\n");

    let mut controller = controller(ScriptedOracle::new("True still weak", "Doc."));
    let outcome = controller.refine(&path).await.unwrap();

    assert_eq!(outcome, RefineOutcome::DepthExhausted { updates: 3 });
    assert_eq!(controller.oracle().verify_prompts.len(), 3);
    assert_eq!(controller.oracle().generate_prompts.len(), 3);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "\"\"\"\nDoc.\n\"\"\"\n\nx = 1\n"
    );
}

#[tokio::test]
async fn test_guidance_narrows_after_first_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "x = 1\n");

    let mut controller = controller(ScriptedOracle::new("True again", "Doc."));
    controller.refine(&path).await.unwrap();

    let prompts = &controller.oracle().verify_prompts;
    assert!(prompts[0].contains("out-dated"));
    assert!(!prompts[1].contains("out-dated"));
    assert!(!prompts[2].contains("out-dated"));
    // Later rounds see the docstring written by the previous round
    assert!(prompts[1].contains("Docstring:\n\"\"\"\nDoc.\n\"\"\""));
}

#[tokio::test]
async fn test_malformed_verdicts_fall_back_to_needs_update() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "x = 1\n");

    let mut controller = controller(ScriptedOracle::new("I am not sure", "unused"));
    let verdict = controller.verify(&path, 0).await.unwrap();

    assert_eq!(verdict, VerificationVerdict::NeedsUpdate { reason: None });
    assert_eq!(controller.oracle().verify_prompts.len(), 3);
}

#[tokio::test]
async fn test_retry_recovers_within_budget() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "x = 1\n");

    let oracle = ScriptedOracle::new("unused", "unused").with_verdicts(&["maybe", "False"]);
    let mut controller = controller(oracle);
    let verdict = controller.verify(&path, 1).await.unwrap();

    assert_eq!(verdict, VerificationVerdict::NoUpdateNeeded);
    assert_eq!(controller.oracle().verify_prompts.len(), 2);
}

#[tokio::test]
async fn test_retry_budget_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "x = 1\n");

    let config = RefineConfig {
        max_refinement_depth: 1,
        max_retry_depth: 5,
    };
    let mut controller =
        RefinementController::new(ScriptedOracle::new("???", "Doc."), config);
    let outcome = controller.refine(&path).await.unwrap();

    assert_eq!(outcome, RefineOutcome::DepthExhausted { updates: 1 });
    assert_eq!(controller.oracle().verify_prompts.len(), 5);
    assert_eq!(controller.oracle().generate_prompts.len(), 1);
    assert!(controller.oracle().generate_prompts[0].contains("Problems with Old Docstring:\nNone"));
}

#[tokio::test]
async fn test_generate_trims_reply() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "x = 1\n");

    let mut controller = controller(ScriptedOracle::new("False", "\n  Padded doc.  \n\n"));
    let text = controller.generate(&path, Some("missing")).await.unwrap();

    assert_eq!(text, "Padded doc.");
}

#[tokio::test]
async fn test_replace_twice_keeps_remainder() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "m.py", "'''legacy'''\n\n\ndef f():\n    pass");

    let controller = controller(ScriptedOracle::new("False", "unused"));
    controller.replace(&path, "Helpers.").await.unwrap();
    let first = std::fs::read_to_string(&path).unwrap();
    controller.replace(&path, "Helpers.").await.unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, "\"\"\"\nHelpers.\n\"\"\"\n\ndef f():\n    pass\n");
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.py");

    let mut controller = controller(ScriptedOracle::new("False", "unused"));
    assert!(controller.refine(&path).await.is_err());
    assert_eq!(controller.oracle().total_calls(), 0);
}

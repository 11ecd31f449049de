//! Transcript tests for the interactive menu

use std::io::Cursor;

use coursereg::application::RegistrationSession;
use coursereg::cli::MenuShell;
use coursereg::config::{Settings, ShellConfig};

fn run(input: &str, config: &ShellConfig) -> (RegistrationSession, String) {
    let mut session = RegistrationSession::new(&Settings::default());
    let mut out = Vec::new();
    MenuShell::new(&mut session, config, Cursor::new(input), &mut out)
        .run()
        .expect("menu run");
    (session, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn given_full_menu_session_when_running_then_matches_transcript() {
    // Arrange
    let input = "\
1
2 Alice CS101
2 Bob CS101
5 CS101
3 Alice CS101
4 CS101
5 CS101
6
";

    // Act
    let (session, out) = run(input, &ShellConfig::default());

    // Assert
    let expected = [
        "- CS101\n- CS102\n- CS201\n- CS202\n",
        "Student Alice registered for CS101 successfully!\n",
        "No seats available for CS101. Student Bob added to the waitlist.\n",
        "Waitlist for CS101: Bob\n",
        "Student Alice dropped CS101 successfully!\n",
        "Student Bob has been enrolled from the waitlist for CS101.\n",
        "Undo: Student Bob removed from CS101.\n",
        "Student Bob added back to the waitlist for CS101.\n",
        "Waitlist for CS101: Bob\n",
        "Exiting... Goodbye!\n",
    ];
    let mut rest = out.as_str();
    for fragment in expected {
        let pos = rest
            .find(fragment)
            .unwrap_or_else(|| panic!("missing {fragment:?} in transcript:\n{out}"));
        rest = &rest[pos + fragment.len()..];
    }
    assert!(out.starts_with("Welcome to the Course Registration System!\n"));
    assert!(out.contains("1. Display Course Tree\n"));
    assert_eq!(session.ledger().seats_available(), 1);
}

#[test]
fn given_hidden_menu_when_running_then_only_prompts_printed() {
    let config = ShellConfig {
        prompt: "choice?".into(),
        show_menu: false,
    };

    let (_, out) = run("4 CS101\n6\n", &config);

    assert!(!out.contains("Menu:"));
    assert!(out.contains("choice? Enter course code: No actions to undo for CS101!\n"));
}

#[test]
fn given_empty_waitlist_when_displaying_then_empty_message() {
    let (_, out) = run("5 CS202\n", &ShellConfig::default());
    assert!(out.contains("No students in the waitlist for CS202.\n"));
}

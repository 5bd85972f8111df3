//! End-to-end tests: raw document text to classified slides.

use std::path::PathBuf;

use termslide::document::{split_slides, Document, Slide};
use termslide::markdown::{runs_text, Block};

#[test]
fn test_intro_and_body_document() {
    let doc = Document::parse("Intro\n===\nWelcome\n---\n# Body\n- a\n- b");
    assert_eq!(doc.len(), 2);

    match &doc.slides()[0] {
        Slide::Title { headline, subtitle } => {
            assert_eq!(headline, "Intro");
            assert_eq!(subtitle, "Welcome");
        }
        other => panic!("expected title slide, got {:?}", other),
    }

    let Slide::Content { blocks } = &doc.slides()[1] else {
        panic!("expected content slide");
    };
    let summary: Vec<String> = blocks
        .iter()
        .map(|b| match b {
            Block::Heading { level, runs } => format!("h{} {}", level, runs_text(runs)),
            Block::Bullet { runs } => format!("bullet {}", runs_text(runs)),
            other => format!("{:?}", other),
        })
        .collect();
    assert_eq!(summary, vec!["h1 Body", "bullet a", "bullet b"]);
}

#[test]
fn test_slide_count_is_rules_plus_one() {
    let text = "one\n---\ntwo\n---\nthree\n---\nfour";
    let rules = text.lines().filter(|l| l.trim() == "---").count();
    assert_eq!(split_slides(text).len(), rules + 1);
    assert_eq!(Document::parse(text).len(), rules + 1);
}

#[test]
fn test_leading_and_trailing_rules_dropped() {
    let doc = Document::parse("---\nonly\n---\n\n");
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_all_three_slide_kinds() {
    let doc = Document::parse(
        "Deck\n=====\nby me\n---\n![Architecture](img/arch.png)\n---\n## Notes\n> quoted\n\n```sh\nls\n```",
    );
    assert_eq!(doc.len(), 3);
    assert!(matches!(doc.get(0), Some(Slide::Title { .. })));
    assert_eq!(
        doc.get(1),
        Some(&Slide::Image {
            path: PathBuf::from("img/arch.png"),
            alt: "Architecture".to_string()
        })
    );
    match doc.get(2) {
        Some(Slide::Content { blocks }) => assert_eq!(blocks.len(), 3),
        other => panic!("expected content slide, got {:?}", other),
    }
    assert!(doc.get(3).is_none());
}

#[test]
fn test_rule_inside_text_lines_only() {
    // `----x` is not a rule
    let doc = Document::parse("a\n----x\nb");
    assert_eq!(doc.len(), 1);
}

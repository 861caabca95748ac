use super::*;

fn classification() -> Classification {
    Classification {
        direct: vec!["github.com/a/a".to_string(), "github.com/b/b".to_string()],
        indirect: vec!["github.com/c/c".to_string()],
    }
}

#[test]
fn test_render_summary_plain() {
    let lines = render_summary(&StyleManager::plain(), "github.com/me/pkg", &classification());

    assert_eq!(
        lines,
        vec![
            "Direct dependencies (2):".to_string(),
            " github.com/a/a, github.com/b/b".to_string(),
            String::new(),
            "Indirect dependencies (1):".to_string(),
            " github.com/c/c".to_string(),
            String::new(),
            "Package github.com/me/pkg has a total of 3 dependencies, of which 2 are direct dependencies and 1 indirect dependencies".to_string(),
        ]
    );
}

#[test]
fn test_render_summary_with_color_emits_bold() {
    let styling = StyleManager::new(true);

    let lines = render_summary(&styling, "pkg", &classification());
    assert!(lines[0].contains("\u{1b}[1m"));
    // Lists themselves stay unstyled
    assert_eq!(lines[1], " github.com/a/a, github.com/b/b");
}

#[test]
fn test_render_stats_plain() {
    let stats = PackageStats {
        package: "github.com/me/pkg".to_string(),
        star_count: 42,
        imported: vec!["x".to_string(), "y".to_string()],
        static_rank: 7,
    };

    assert_eq!(
        render_stats(&StyleManager::plain(), &stats),
        " \\- used in 2 other packages, has 42 stars and a ranking of 7"
    );
}

#[test]
fn test_confirmation_prompt_plain() {
    assert_eq!(
        confirmation_prompt(&StyleManager::plain(), "github.com/me/pkg"),
        "Are you sure you wish to install github.com/me/pkg and all above dependencies? [Y/N]"
    );
}

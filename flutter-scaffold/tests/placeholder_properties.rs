//! Property tests for placeholder substitution

use flutter_scaffold::catalog::{render, Placeholders, TemplateCatalog};
use flutter_scaffold::config::LayoutSettings;
use flutter_scaffold::context::PROJECT_NAME;
use proptest::prelude::*;

fn name_only(name: &str) -> Placeholders {
    [(PROJECT_NAME, name)].into_iter().collect()
}

proptest! {
    /// Text without `{{` is never changed
    #[test]
    fn prop_plain_text_is_identity(text in "[^{]*", name in "[a-z_]{1,20}") {
        prop_assert_eq!(render(&text, &name_only(&name)), text);
    }

    /// `{{projectName}}` between arbitrary brace-free text is replaced verbatim
    #[test]
    fn prop_project_name_substituted(
        before in "[^{}]*",
        after in "[^{}]*",
        name in "[a-zA-Z0-9_\\-]{1,30}",
    ) {
        let template = format!("{before}{{{{projectName}}}}{after}");
        prop_assert_eq!(
            render(&template, &name_only(&name)),
            format!("{before}{name}{after}")
        );
    }

    /// Surrounding braces never hide a bound token
    #[test]
    fn prop_project_name_substituted_among_braces(
        before in "[a-z {}:;]*",
        after in "[a-z {}:;]*",
        name in "[a-z_]{1,20}",
    ) {
        // the generators cannot spell `projectName`, so only the inserted token matches
        let template = format!("{before}{{{{projectName}}}}{after}");
        let rendered = render(&template, &name_only(&name));
        let expected = format!("{before}{name}{after}");
        prop_assert_eq!(rendered, expected);
    }

    /// Unknown keys survive rendering untouched
    #[test]
    fn prop_unknown_key_verbatim(key in "[a-z]{1,12}", name in "[a-z_]{1,20}") {
        prop_assume!(key != PROJECT_NAME);
        let template = format!("x {{{{{key}}}}} y");
        prop_assert_eq!(render(&template, &name_only(&name)), template);
    }

    /// Rendering is a pure function of template and bindings
    #[test]
    fn prop_render_deterministic(name in "[a-z_]{1,20}") {
        let catalog = TemplateCatalog::flutter(&LayoutSettings::default()).unwrap();
        let placeholders = name_only(&name);
        for file in catalog.files() {
            let a = render(file.template(), &placeholders);
            let b = render(file.template(), &placeholders);
            prop_assert_eq!(&a, &b);
            prop_assert!(!a.contains("{{projectName}}"));
        }
    }
}

#[test]
fn test_quick_wash_in_every_template() {
    let catalog = TemplateCatalog::flutter(&LayoutSettings::default()).unwrap();
    let placeholders = name_only("quick_wash");

    for file in catalog.files() {
        let template = file.template();
        let rendered = render(template, &placeholders);
        assert_eq!(
            rendered,
            template.replace("{{projectName}}", "quick_wash"),
            "{}",
            file.path().display()
        );
    }
}

//! Placeholder tokens and the substitution pass over the template text.

use crate::assembler::PageSources;

const DEPENDENCIES_TOKEN: &str = "[[$DEPENDENCIES]]";
const CLUSTERING_TOKEN: &str = "[[$CLUSTERING]]";
const SCRIPT_TOKEN: &str = "[[$SCRIPT]]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Dependencies,
    Clustering,
    Script,
}

impl Placeholder {
    /// Substitution order. Later steps see text injected by earlier ones.
    pub const ORDER: [Placeholder; 3] = [
        Placeholder::Dependencies,
        Placeholder::Clustering,
        Placeholder::Script,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Dependencies => DEPENDENCIES_TOKEN,
            Placeholder::Clustering => CLUSTERING_TOKEN,
            Placeholder::Script => SCRIPT_TOKEN,
        }
    }

    fn value(self, sources: &PageSources) -> &str {
        match self {
            Placeholder::Dependencies => &sources.dependencies,
            Placeholder::Clustering => &sources.clustering,
            Placeholder::Script => &sources.script,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub dependencies: usize,
    pub clustering: usize,
    pub script: usize,
}

pub fn count_tokens(template: &str) -> TokenCounts {
    TokenCounts {
        dependencies: template.matches(DEPENDENCIES_TOKEN).count(),
        clustering: template.matches(CLUSTERING_TOKEN).count(),
        script: template.matches(SCRIPT_TOKEN).count(),
    }
}

/// Replaces every occurrence of each token, one placeholder at a time in
/// [`Placeholder::ORDER`]. Matching is literal and case-sensitive.
pub fn render(sources: &PageSources) -> String {
    Placeholder::ORDER
        .iter()
        .fold(sources.template.clone(), |page, placeholder| {
            page.replace(placeholder.token(), placeholder.value(sources))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(template: &str, dependencies: &str, clustering: &str, script: &str) -> PageSources {
        PageSources {
            template: template.into(),
            script: script.into(),
            dependencies: dependencies.into(),
            clustering: clustering.into(),
        }
    }

    #[test]
    fn substitutes_each_token() {
        let page = render(&sources(
            "<html>[[$DEPENDENCIES]] [[$CLUSTERING]] [[$SCRIPT]]</html>",
            "D1",
            "C1",
            "S1",
        ));
        assert_eq!(page, "<html>D1 C1 S1</html>");
    }

    #[test]
    fn replaces_every_occurrence() {
        let page = render(&sources(
            "[[$SCRIPT]]|[[$DEPENDENCIES]]|[[$SCRIPT]]",
            "deps",
            "clu",
            "js",
        ));
        assert_eq!(page, "js|deps|js");
    }

    #[test]
    fn template_without_tokens_is_unchanged() {
        let template = "<html><body>static</body></html>";
        let page = render(&sources(template, "[[$SCRIPT]]", "x", "y"));
        assert_eq!(page, template);
    }

    #[test]
    fn tokens_are_case_and_whitespace_sensitive() {
        let template = "[[$dependencies]] [[ $CLUSTERING ]] [[SCRIPT]]";
        let page = render(&sources(template, "D", "C", "S"));
        assert_eq!(page, template);
    }

    #[test]
    fn injected_dependencies_are_rescanned_for_later_tokens() {
        let page = render(&sources(
            "[[$DEPENDENCIES]]",
            "before [[$CLUSTERING]] [[$SCRIPT]] after",
            "C",
            "S",
        ));
        assert_eq!(page, "before C S after");
    }

    #[test]
    fn injected_script_is_not_rescanned_for_earlier_tokens() {
        let page = render(&sources(
            "[[$SCRIPT]]",
            "D",
            "C",
            "var x = '[[$DEPENDENCIES]]';",
        ));
        assert_eq!(page, "var x = '[[$DEPENDENCIES]]';");
    }

    #[test]
    fn counts_tokens_in_raw_template() {
        let counts = count_tokens("[[$SCRIPT]] [[$SCRIPT]] [[$CLUSTERING]]");
        assert_eq!(
            counts,
            TokenCounts {
                dependencies: 0,
                clustering: 1,
                script: 2,
            }
        );
    }
}

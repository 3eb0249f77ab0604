//! Static article registry: a compile-time slug to content mapping with a
//! typed not-found outcome, instead of resolving content dynamically at
//! request time.

use serde::Serialize;

/// A published article with its metadata. `published_at` is an ISO date
/// string; it is presentation metadata, never computed with.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
    pub published_at: &'static str,
    pub reading_minutes: u8,
}

/// Lookup failure carrying the slug so routes can render a typed 404.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("no article published under slug '{slug}'")]
pub struct ArticleNotFound {
    pub slug: String,
}

#[derive(Debug)]
pub struct ArticleRegistry {
    articles: Vec<Article>,
}

impl ArticleRegistry {
    pub fn standard() -> Self {
        Self {
            articles: standard_articles(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn find(&self, slug: &str) -> Result<&Article, ArticleNotFound> {
        self.articles
            .iter()
            .find(|article| article.slug == slug)
            .ok_or_else(|| ArticleNotFound {
                slug: slug.to_string(),
            })
    }
}

fn standard_articles() -> Vec<Article> {
    vec![
        Article {
            slug: "understanding-your-results",
            title: "Understanding Your Test Results",
            description: "What the trait scores, archetypes, and confidence level actually mean.",
            body: "Your result combines a normalized score on each trait axis with the archetype \
                   whose signature it most resembles. A high confidence means your answers \
                   clustered tightly around one style; a lower one means you are a blend, which \
                   is just as common and just as valid. Scores compare against the test's fixed \
                   scale, not against other people, so retaking the test is the only meaningful \
                   way to see change over time.",
            published_at: "2025-04-02",
            reading_minutes: 4,
        },
        Article {
            slug: "consent-and-negotiation",
            title: "Consent and Negotiation Basics",
            description: "How to turn a test result into a conversation rather than a script.",
            body: "A profile is a starting point for negotiation, not permission for anything. \
                   Good negotiation names specific activities, limits, and signals before \
                   anything begins, and stays revocable throughout. Bring your results to the \
                   conversation as data about what interests you, and expect your partner's \
                   profile to shape the outcome just as much as yours.",
            published_at: "2025-04-16",
            reading_minutes: 6,
        },
        Article {
            slug: "aftercare-basics",
            title: "Aftercare Basics",
            description: "Why the end of a scene matters as much as the start.",
            body: "Aftercare is the deliberate wind-down after intensity: warmth, water, \
                   reassurance, quiet, or space, depending on the person. Needs differ wildly \
                   and change between scenes, so agree on them beforehand and check in again the \
                   next day. Caregivers need aftercare too; drop is not limited to one side of \
                   the dynamic.",
            published_at: "2025-05-07",
            reading_minutes: 5,
        },
        Article {
            slug: "communication-styles",
            title: "Communication Styles for Different Archetypes",
            description: "Matching how you talk about play to how you and your partner are wired.",
            body: "Praise-oriented profiles tend to want explicit, spoken feedback, while \
                   structure-oriented ones often prefer agreed rules that make feedback \
                   implicit. Neither is better; mismatches are simply something to name. If \
                   your archetypes differ sharply from a partner's, agree on a shared vocabulary \
                   first - most friction between styles is vocabulary, not incompatibility.",
            published_at: "2025-05-28",
            reading_minutes: 7,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slug_resolves() {
        let registry = ArticleRegistry::standard();
        let article = registry
            .find("aftercare-basics")
            .expect("registered article");
        assert_eq!(article.title, "Aftercare Basics");
    }

    #[test]
    fn unknown_slug_is_a_typed_not_found() {
        let registry = ArticleRegistry::standard();
        let err = registry.find("no-such-article").expect_err("missing slug");
        assert_eq!(err.slug, "no-such-article");
        assert!(err.to_string().contains("no-such-article"));
    }

    #[test]
    fn slugs_are_unique() {
        let registry = ArticleRegistry::standard();
        for article in registry.articles() {
            let matches = registry
                .articles()
                .iter()
                .filter(|candidate| candidate.slug == article.slug)
                .count();
            assert_eq!(matches, 1, "duplicate slug {}", article.slug);
        }
    }
}

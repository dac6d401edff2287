//! Static portfolio content shown in the info panel.
//!
//! The table is immutable for the lifetime of the process. Each
//! [`ContentKind`] maps to exactly one [`ContentRecord`].

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// The three portfolio sections represented by clickable markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Experience,
    Projects,
    Skills,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Experience,
        ContentKind::Projects,
        ContentKind::Skills,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Experience => "experience",
            ContentKind::Projects => "projects",
            ContentKind::Skills => "skills",
        }
    }

    /// Content record for this kind.
    pub fn record(self) -> &'static ContentRecord {
        content_for(self)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(ContentKind::Experience),
            "projects" => Ok(ContentKind::Projects),
            "skills" => Ok(ContentKind::Skills),
            other => Err(CoreError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentRecord {
    pub title: &'static str,
    pub items: &'static [ContentItem],
}

static EXPERIENCE: ContentRecord = ContentRecord {
    title: "Professional Experience",
    items: &[
        ContentItem {
            title: "Senior Software Engineer",
            subtitle: Some("Tech Innovations Inc | 2020 - Present"),
            description: "Led development of scalable web applications using React, Node.js, and AWS. Implemented microservices architecture resulting in 40% improved performance.",
        },
        ContentItem {
            title: "Full Stack Developer",
            subtitle: Some("Digital Solutions | 2018 - 2020"),
            description: "Built responsive front-end interfaces and RESTful APIs. Optimized database queries leading to 30% faster page load times.",
        },
    ],
};

static PROJECTS: ContentRecord = ContentRecord {
    title: "Featured Projects",
    items: &[
        ContentItem {
            title: "AI-Powered Analytics Dashboard",
            subtitle: Some("React, Python, TensorFlow"),
            description: "A real-time analytics platform leveraging machine learning algorithms for predictive insights, helping businesses make data-driven decisions.",
        },
        ContentItem {
            title: "E-Commerce Platform",
            subtitle: Some("Next.js, MongoDB, Stripe"),
            description: "A scalable online shopping platform with secure payment processing, inventory management, and order fulfillment systems.",
        },
    ],
};

static SKILLS: ContentRecord = ContentRecord {
    title: "Technical Skills",
    items: &[
        ContentItem {
            title: "Frontend Development",
            subtitle: None,
            description: "React, Vue.js, HTML5, CSS3, JavaScript, TypeScript, Responsive Design, UI/UX Principles",
        },
        ContentItem {
            title: "Backend Development",
            subtitle: None,
            description: "Node.js, Python, Java, Express, Django, RESTful APIs, GraphQL",
        },
        ContentItem {
            title: "Database & Cloud",
            subtitle: None,
            description: "MongoDB, PostgreSQL, MySQL, AWS, Google Cloud, Docker, Kubernetes",
        },
    ],
};

pub fn content_for(kind: ContentKind) -> &'static ContentRecord {
    match kind {
        ContentKind::Experience => &EXPERIENCE,
        ContentKind::Projects => &PROJECTS,
        ContentKind::Skills => &SKILLS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for kind in ContentKind::ALL {
            assert_eq!(kind.as_str().parse::<ContentKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "contact".parse::<ContentKind>().unwrap_err();
        assert_eq!(err, CoreError::UnknownKind("contact".into()));
        assert_eq!(err.to_string(), "unknown content kind `contact`");
    }

    #[test]
    fn skills_items_have_no_subtitles() {
        assert!(content_for(ContentKind::Skills)
            .items
            .iter()
            .all(|i| i.subtitle.is_none()));
    }
}

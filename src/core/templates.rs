//! # Template Catalog
//!
//! Static seed data for new modules. A template is just a default title and a
//! boilerplate body; there is no behaviour beyond lookup.
//!
//! Unknown or missing ids never fail: [`seed`] falls back to a generic title and
//! placeholder body, and records [`FALLBACK_TEMPLATE_ID`] as the module's template.

use std::fmt;

/// Template recorded on modules whose template id was missing or unknown.
pub const FALLBACK_TEMPLATE_ID: &str = "course-overview";

/// Template recorded on modules imported from a schema document.
pub const CUSTOM_TEMPLATE: &str = "custom";

/// Body used when no template matches.
pub const PLACEHOLDER_CONTENT: &str = "<p>Add your content here...</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    /// One-line blurb shown in the catalog listing.
    pub description: &'static str,
    pub content: &'static str,
}

/// Title/content/template triple used to build a new module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub template: String,
    pub title: String,
    pub content: String,
}

pub static TEMPLATES: &[Template] = &[
    Template {
        id: "course-overview",
        title: "Course Overview & Syllabus",
        description: "A complete syllabus and course structure.",
        content: "<h1>[Course Title]</h1>\n\
<p><strong>Instructor:</strong> [Name]<br>\n\
<strong>Duration:</strong> [6 weeks]<br>\n\
<strong>Mode:</strong> [Self-paced]</p>\n\
<h2>What You'll Learn</h2>\n\
<ul>\n<li>[Outcome 1]</li>\n<li>[Outcome 2]</li>\n<li>[Outcome 3]</li>\n</ul>\n\
<h2>Weekly Schedule</h2>\n\
<ul>\n<li><strong>Week 1:</strong> [Topic] - [Activity] - [Assessment]</li>\n\
<li><strong>Week 2:</strong> [Topic] - [Activity] - [Assessment]</li>\n</ul>\n\
<h2>Grade Breakdown</h2>\n\
<ul>\n<li><strong>Quizzes:</strong> 40%</li>\n<li><strong>Projects:</strong> 40%</li>\n\
<li><strong>Participation:</strong> 20%</li>\n</ul>",
    },
    Template {
        id: "reading-content",
        title: "Reading Content",
        description: "Text content, articles, and written materials",
        content: "<h1>[Module Title]</h1>\n\
<p><strong>Estimated Time:</strong> [xx min]<br>\n\
<strong>Prerequisites:</strong> [Prior knowledge or modules]</p>\n\
<h2>Why This Matters</h2>\n<p>[Real-world relevance]</p>\n\
<h2>Learning Objectives</h2>\n\
<ul>\n<li>[Objective 1]</li>\n<li>[Objective 2]</li>\n</ul>\n\
<h2>Core Content</h2>\n<h3>Key Concept #1</h3>\n<p>[Explanation here]</p>\n\
<blockquote><p><strong>Example:</strong> [Concrete example]</p></blockquote>\n\
<h2>Check Your Understanding</h2>\n<ol>\n<li>[Question 1]</li>\n<li>[Question 2]</li>\n</ol>",
    },
    Template {
        id: "video-lesson",
        title: "Video Lesson",
        description: "Video content with descriptions and notes",
        content: "<h1>[Video Title]</h1>\n\
<p><strong>Duration:</strong> [xx min]<br>\n\
<strong>Level:</strong> [Beginner/Intermediate/Advanced]</p>\n\
<h2>Video Content</h2>\n<p><em>[Video embed or link]</em></p>\n\
<h3>Key Timestamps</h3>\n\
<ul>\n<li><strong>00:00</strong> - Introduction</li>\n<li><strong>03:45</strong> - [Concept]</li>\n</ul>\n\
<h2>Video Notes</h2>\n<p>[Key takeaways]</p>\n\
<h2>Try It Yourself</h2>\n<p><strong>Your Task:</strong> [Clear instruction]</p>",
    },
    Template {
        id: "lecture-notes",
        title: "Lecture Notes",
        description: "Detailed lecture content and key concepts",
        content: "<h1>[Lecture Topic]</h1>\n\
<p><strong>Instructor:</strong> [Name]<br>\n<strong>Session:</strong> [Week X - Lecture Y]</p>\n\
<h2>Today's Agenda</h2>\n<ol>\n<li>[Item 1]</li>\n<li>[Item 2]</li>\n</ol>\n\
<h2>Detailed Notes</h2>\n<h3>Section 1: [Heading]</h3>\n\
<ul>\n<li>[Key point A]</li>\n<li>[Key point B]</li>\n</ul>\n\
<h2>Key Takeaways</h2>\n<ul>\n<li>[Main point 1]</li>\n<li>[Main point 2]</li>\n</ul>\n\
<h2>Next Steps</h2>\n<ul>\n<li><strong>Read:</strong> [Chapter/Article]</li>\n\
<li><strong>Practice:</strong> [Exercise]</li>\n</ul>",
    },
    Template {
        id: "resources-references",
        title: "Resources & References",
        description: "Links, references, and additional resources",
        content: "<h1>Essential Resources</h1>\n\
<h2>Must-Read/Watch</h2>\n\
<ul>\n<li><strong>[Title]</strong> (Article) - <em>[Benefit]</em></li>\n\
<li><strong>[Title]</strong> (Video) - <em>[Benefit]</em></li>\n</ul>\n\
<h2>Academic References</h2>\n\
<ol>\n<li>[Author]. ([Year]). <em>[Title]</em>. [Publisher].</li>\n</ol>\n\
<h2>Downloadable Files</h2>\n<ul>\n<li><strong>[File 1]</strong> - [Description]</li>\n</ul>",
    },
    Template {
        id: "interactive-activity",
        title: "Interactive Activity",
        description: "A hands-on lab or simulation.",
        content: "<h1>Activity: [Title]</h1>\n\
<p><strong>Objective:</strong> [Clear goal]<br>\n\
<strong>Time Required:</strong> [xx min]<br>\n<strong>Tools Needed:</strong> [List tools]</p>\n\
<h2>Getting Started</h2>\n<ol>\n<li>[Step 1]</li>\n<li>[Step 2]</li>\n</ol>\n\
<h2>Expected Outcomes</h2>\n<ul>\n<li><strong>Step 1:</strong> [Do this] - <em>[See this]</em></li>\n</ul>\n\
<h2>Submission</h2>\n<p><strong>What to submit:</strong> [File type/format]</p>",
    },
    Template {
        id: "discussion-prompt",
        title: "Discussion Prompt",
        description: "A prompt to encourage discussion.",
        content: "<h1>Discussion: [Topic]</h1>\n\
<h2>The Question</h2>\n<blockquote><p>[Thought-provoking question or scenario]</p></blockquote>\n\
<h2>Your Mission</h2>\n\
<ul>\n<li><strong>Initial Post:</strong> [150+ words] by [date]</li>\n\
<li><strong>Responses:</strong> Reply to [2] classmates by [date]</li>\n</ul>\n\
<h2>Discussion Starters</h2>\n<ul>\n<li>What would happen if...</li>\n<li>This reminds me of...</li>\n</ul>",
    },
    Template {
        id: "assignment-brief",
        title: "Assignment Brief",
        description: "A brief for a project or assignment.",
        content: "<h1>Assignment: [Title]</h1>\n\
<p><strong>Weight:</strong> [XX%] of final grade<br>\n<strong>Due Date:</strong> [Date and time]</p>\n\
<h2>Assignment Overview</h2>\n<p>[What students need to create, analyze or solve]</p>\n\
<h2>Requirements</h2>\n<ul>\n<li>[Requirement 1]</li>\n<li>[Requirement 2]</li>\n</ul>\n\
<h2>Deliverables</h2>\n<ol>\n<li><strong>[Item 1]:</strong> [Description]</li>\n</ol>\n\
<h2>Submission Guidelines</h2>\n<ul>\n<li><strong>Format:</strong> [File type]</li>\n\
<li><strong>Late Policy:</strong> [Penalty description]</li>\n</ul>",
    },
];

/// One catalog line: `id  Title: description`.
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} {}: {}", self.id, self.title, self.description)
    }
}

/// Look up a template by id.
pub fn lookup(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Seed data for a new module.
///
/// Known ids copy the template's title and body. Missing or unknown ids yield
/// `fallback_title`, [`PLACEHOLDER_CONTENT`] and [`FALLBACK_TEMPLATE_ID`].
pub fn seed(id: Option<&str>, fallback_title: &str) -> Seed {
    match id.and_then(lookup) {
        Some(t) => Seed {
            template: t.id.to_string(),
            title: t.title.to_string(),
            content: t.content.to_string(),
        },
        None => Seed {
            template: FALLBACK_TEMPLATE_ID.to_string(),
            title: fallback_title.to_string(),
            content: PLACEHOLDER_CONTENT.to_string(),
        },
    }
}
